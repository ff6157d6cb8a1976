//! TUI pane rendering modules
//!
//! This module provides the rendering logic for all visual panes in the TUI,
//! organized by responsibility for maintainability.
//!
//! # Pane Modules
//!
//! - [`input`]: The number list being edited, with a cursor in edit mode
//! - [`array`]: One horizontal bar per element, highlighting the next pair
//! - [`stats`]: Counters and the status line of the current sort
//! - [`step_log`]: The chronological step log
//! - [`status`]: Status bar with keybindings and sort state indicators
//!
//! Each pane module exports a primary `render_*` function that takes the
//! frame, its area and read-only data. Scroll offsets are owned by the app
//! and passed in as `&mut usize` so a pane can clamp them.

pub mod array;
pub mod input;
pub mod stats;
pub mod status;
pub mod step_log;

// Re-export render functions for convenience
pub use array::render_array_pane;
pub use input::render_input_pane;
pub use stats::render_stats_pane;
pub use status::render_status_bar;
pub use step_log::render_log_pane;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Modifier, Style};

/// Border style shared by every bordered pane
fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}
