//! Statistics pane rendering

use super::border_style;
use crate::presenter::{Report, Status};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

fn counter_line(label: &str, value: usize) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{:<13}", label),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            value.to_string(),
            Style::default()
                .fg(DEFAULT_THEME.number)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

/// Render counters, pass information and undo depth
pub fn render_stats_pane(
    frame: &mut Frame,
    area: Rect,
    report: Option<&Report>,
    undo_depth: usize,
    is_focused: bool,
) {
    let block = Block::default()
        .title(" Statistics ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let Some(report) = report else {
        let paragraph = Paragraph::new("(not started)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let status_line = match report.status {
        Status::Sorted => Line::from(Span::styled(
            "Sorted",
            Style::default()
                .fg(DEFAULT_THEME.success)
                .add_modifier(Modifier::BOLD),
        )),
        Status::InProgress { pass, left, right } => Line::from(vec![
            Span::styled(
                format!("Pass {}", pass),
                Style::default()
                    .fg(DEFAULT_THEME.primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" · next: [{}] vs [{}]", left, right),
                Style::default().fg(DEFAULT_THEME.compared),
            ),
        ]),
    };

    let lines = vec![
        status_line,
        Line::raw(""),
        counter_line("Steps", report.counters.steps),
        counter_line("Comparisons", report.counters.comparisons),
        counter_line("Swaps", report.counters.swaps),
        counter_line("Settled", report.settled),
        Line::raw(""),
        Line::from(Span::styled(
            format!("{} step(s) can be undone", undo_depth),
            Style::default().fg(DEFAULT_THEME.comment),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
