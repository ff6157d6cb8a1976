//! Step log pane rendering

use super::border_style;
use crate::stepper::LogEntry;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
};

fn entry_style(entry: &LogEntry) -> Style {
    match entry {
        LogEntry::Compared { swapped: true, .. } => Style::default().fg(DEFAULT_THEME.swapped),
        LogEntry::Compared { swapped: false, .. } => Style::default().fg(DEFAULT_THEME.fg),
        LogEntry::PassComplete { .. } => Style::default().fg(DEFAULT_THEME.primary),
        LogEntry::SortedEarly { .. }
        | LogEntry::AllPassesComplete { .. }
        | LogEntry::AlreadySorted => Style::default()
            .fg(DEFAULT_THEME.success)
            .add_modifier(Modifier::BOLD),
        LogEntry::Initial { .. } => Style::default().fg(DEFAULT_THEME.comment),
    }
}

/// Render the step log pane.
///
/// `scroll_offset` is clamped here; set it to `usize::MAX` to follow the
/// newest entry.
pub fn render_log_pane(
    frame: &mut Frame,
    area: Rect,
    entries: &[LogEntry],
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(format!(" Step Log ({}) ", entries.len()))
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    if entries.is_empty() {
        let paragraph = Paragraph::new("(no steps yet)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));

    let total_items = entries.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1

    // Clamp scroll offset only if content exceeds visible area
    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    let visible_items: Vec<ListItem> = entries
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|entry| ListItem::new(entry.to_string()).style(entry_style(entry)))
        .collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}
