//! Common UI components: header bar, status bar, and help overlay.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::{Metric, HISTORY_LENGTH};
use crate::source::MetricsFetch;

/// Render the header bar with the polling status and tick count.
pub fn render_header<F: MetricsFetch>(frame: &mut Frame, app: &App<F>, area: Rect) {
    let state = app.state().lock().unwrap();
    let ticks = state.history.len();
    let latest = state.history.labels().last().cloned();
    drop(state);

    let (status_icon, status_style) = if app.paused {
        ("||", Style::default().fg(app.theme.paused).add_modifier(Modifier::BOLD))
    } else {
        ("●", Style::default().fg(app.theme.highlight))
    };

    let mut spans = vec![
        Span::styled(format!(" {} ", status_icon), status_style),
        Span::styled("METRICWATCH ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("│ "),
        Span::raw(format!("{}/{} ticks", ticks, HISTORY_LENGTH)),
    ];

    if let Some(label) = latest {
        spans.push(Span::raw(" │ last "));
        spans.push(Span::styled(label, app.theme.header));
    } else {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled("waiting for first poll", app.theme.dim));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the status bar with the source description and key hints.
pub fn render_status_bar<F: MetricsFetch>(frame: &mut Frame, app: &App<F>, area: Rect) {
    let line = if let Some(msg) = app.get_status_message() {
        Line::from(vec![Span::styled(
            format!(" {} ", msg),
            Style::default().fg(app.theme.highlight),
        )])
    } else {
        Line::from(vec![
            Span::styled(format!(" {} ", app.source_description()), app.theme.dim),
            Span::raw("│ "),
            Span::styled("1-5", app.theme.header),
            Span::raw(" panels "),
            Span::styled("p", app.theme.header),
            Span::raw(" pause "),
            Span::styled("r", app.theme.header),
            Span::raw(" restart "),
            Span::styled("?", app.theme.header),
            Span::raw(" help "),
            Span::styled("q", app.theme.header),
            Span::raw(" quit"),
        ])
    };

    frame.render_widget(Paragraph::new(line), area);
}

/// Render the help overlay.
pub fn render_help<F: MetricsFetch>(frame: &mut Frame, app: &App<F>, area: Rect) {
    let width = 46.min(area.width);
    let height = 14.min(area.height);
    let popup = centered_rect(width, height, area);

    let mut lines = vec![
        Line::from(Span::styled("Keys", app.theme.header)),
        Line::from(""),
        Line::from("  1-5      show/hide a metric panel"),
        Line::from("  p, space pause / resume polling"),
        Line::from("  r        restart the polling timer"),
        Line::from("  ?        toggle this help"),
        Line::from("  q, esc   quit"),
        Line::from(""),
        Line::from(Span::styled("Panels", app.theme.header)),
    ];
    for (i, metric) in Metric::ALL.iter().enumerate() {
        lines.push(Line::from(format!("  {}        {}", i + 1, metric.label())));
    }

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

/// Compute a centered rect of the given size inside `area`.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .split(area);
    let horizontal = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width),
        Constraint::Fill(1),
    ])
    .split(vertical[1]);
    horizontal[1]
}

/// Render a centered placeholder message (used when no panels are visible).
pub fn render_placeholder(frame: &mut Frame, message: &str, area: Rect) {
    let paragraph = Paragraph::new(message).alignment(Alignment::Center);
    let centered = Rect::new(
        area.x,
        area.y + area.height.saturating_sub(1) / 2,
        area.width,
        1,
    );
    frame.render_widget(paragraph, centered);
}
