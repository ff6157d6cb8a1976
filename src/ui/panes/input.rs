//! Input box rendering

use super::border_style;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
};

/// Render the number list input box.
///
/// `cursor` is a char index into `text` and is only shown while editing.
pub fn render_input_pane(
    frame: &mut Frame,
    area: Rect,
    text: &str,
    cursor: usize,
    is_editing: bool,
    is_focused: bool,
) {
    let title = if is_editing {
        " Numbers (Enter: start, Esc: cancel) "
    } else {
        " Numbers (comma or space separated) "
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style(is_focused || is_editing));

    let inner_width = area.width.saturating_sub(2) as usize;
    // Keep the cursor visible by scrolling long input horizontally
    let scroll = cursor.saturating_sub(inner_width.saturating_sub(1));

    let paragraph = Paragraph::new(text)
        .block(block)
        .style(Style::default().fg(if is_editing {
            DEFAULT_THEME.fg
        } else {
            DEFAULT_THEME.comment
        }))
        .scroll((0, scroll as u16));
    frame.render_widget(paragraph, area);

    if is_editing {
        frame.set_cursor_position(Position::new(
            area.x + 1 + (cursor - scroll) as u16,
            area.y + 1,
        ));
    }
}
