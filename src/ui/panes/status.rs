//! Status bar rendering with keybindings and state indicators

use crate::presenter::Status;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Key hints for the right side of the status bar, as `(key, description)` pairs
pub(crate) fn keybinds(is_editing: bool) -> &'static [(&'static str, &'static str)] {
    if is_editing {
        &[(" ↵ ", " start "), (" esc ", " cancel ")]
    } else {
        &[
            (" ←/→ b/n ", " step "),
            (" 1-9 ", " n steps "),
            (" ⎵ ", " play "),
            (" ↵ / ⌫ ", " end/start "),
            (" ↑/↓ ", " log "),
            (" tab ", " focus "),
            (" e/r ", " edit/reset "),
            ("q", " quit "),
        ]
    }
}

fn keybind_spans(is_editing: bool) -> Vec<Span<'static>> {
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.comment);

    let mut spans = Vec::new();
    for (i, (key, desc)) in keybinds(is_editing).iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("│", sep_style));
            spans.push(Span::styled(" ", desc_style));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::styled(*desc, desc_style));
    }
    spans
}

/// Render the status bar at the bottom.
///
/// `status` is `None` before any list has been started.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    is_error: bool,
    status: Option<Status>,
    is_playing: bool,
    is_editing: bool,
) {
    // Split status bar into left and right
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    // Left side: sort position and message
    let position_text = match status {
        None => " -- ".to_string(),
        Some(Status::Sorted) => " Sorted ".to_string(),
        Some(Status::InProgress { pass, left, right }) => {
            format!(" Pass {} · {}:{} ", pass, left, right)
        }
    };

    let left_spans = vec![
        Span::styled(
            position_text,
            Style::default()
                .bg(if is_error {
                    DEFAULT_THEME.error
                } else if is_editing {
                    DEFAULT_THEME.secondary
                } else {
                    DEFAULT_THEME.primary
                })
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", message),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(if is_error {
                    DEFAULT_THEME.error
                } else {
                    DEFAULT_THEME.fg
                }),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: Keybinds with visual grouping
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.comment);

    let mut right_spans = keybind_spans(is_editing);

    if is_editing {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            " ⌨ INPUT ",
            Style::default()
                .bg(DEFAULT_THEME.secondary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    } else if is_playing {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            " ▶ PLAYING ",
            Style::default()
                .bg(DEFAULT_THEME.secondary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    } else if status == Some(Status::Sorted) {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            " SORTED ",
            Style::default()
                .bg(DEFAULT_THEME.success)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
