//! Array pane rendering
//!
//! Each element is drawn as one row: its index, a horizontal bar scaled
//! between the smallest and largest value, and the value itself.
//!
//! # Highlighting
//!
//! - the pair the next step compares is drawn in the compared color
//! - the settled tail (elements already in final position) is green
//! - everything else uses the primary color
//!
//! When the array has more elements than the pane has rows, the visible
//! window follows the compared pair.

use super::border_style;
use crate::presenter::Report;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Number of bar cells for `value` when values span `min..=max`.
///
/// Every element gets at least one cell so that the smallest value is still
/// visible.
pub(crate) fn bar_width(value: i64, min: i64, max: i64, width: usize) -> usize {
    if width == 0 {
        return 0;
    }
    if max <= min {
        return width;
    }
    let span = (max as i128 - min as i128) as f64;
    let offset = (value as i128 - min as i128) as f64;
    let cells = 1 + ((width - 1) as f64 * offset / span).round() as usize;
    cells.min(width)
}

/// First row to show so that `focus` stays inside a window of `height` rows
pub(crate) fn window_start(len: usize, height: usize, focus: usize) -> usize {
    if len <= height || height == 0 {
        return 0;
    }
    let half = height / 2;
    focus.saturating_sub(half).min(len - height)
}

/// Render the array pane. `report` is `None` before a sort is started.
pub fn render_array_pane(frame: &mut Frame, area: Rect, report: Option<&Report>, is_focused: bool) {
    let block = Block::default()
        .title(" Array ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let Some(report) = report else {
        let paragraph = Paragraph::new("(press r to start, e to edit the numbers)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let values = &report.array;
    let min = values.iter().copied().min().unwrap_or(0);
    let max = values.iter().copied().max().unwrap_or(0);

    let index_width = values.len().saturating_sub(1).to_string().len();
    let value_width = values
        .iter()
        .map(|v| v.to_string().len())
        .max()
        .unwrap_or(1);
    let inner_width = area.width.saturating_sub(2) as usize;
    // "idx │ " + bar + " " + value
    let bar_space = inner_width.saturating_sub(index_width + 3 + 1 + value_width);

    let next_pair = report.status.next_pair();
    let settled_from = values.len() - report.settled.min(values.len());

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    let focus = next_pair.map(|(left, _)| left).unwrap_or(0);
    let start = window_start(values.len(), visible_height, focus);

    let lines: Vec<Line> = values
        .iter()
        .enumerate()
        .skip(start)
        .take(visible_height)
        .map(|(index, &value)| {
            let is_compared = next_pair.is_some_and(|(l, r)| index == l || index == r);
            let bar_color = if is_compared {
                DEFAULT_THEME.compared
            } else if index >= settled_from {
                DEFAULT_THEME.success
            } else {
                DEFAULT_THEME.primary
            };
            let mut value_style = Style::default().fg(DEFAULT_THEME.number);
            if is_compared {
                value_style = value_style.add_modifier(Modifier::BOLD);
            }

            let cells = bar_width(value, min, max, bar_space);
            Line::from(vec![
                Span::styled(
                    format!("{:>width$} │ ", index, width = index_width),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled("█".repeat(cells), Style::default().fg(bar_color)),
                Span::styled(
                    " ".repeat(bar_space - cells),
                    Style::default().bg(DEFAULT_THEME.current_line_bg),
                ),
                Span::raw(" "),
                Span::styled(value.to_string(), value_style),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
