//! Live chart panels, one per visible metric.
//!
//! Each panel renders from the metric's [`ChartBinding`] — the series
//! the poller last pushed into it. A visible panel whose binding does
//! not exist yet (no successful tick has seen it) shows a placeholder.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::Span,
    widgets::{Block, Borders, Paragraph, Sparkline},
    Frame,
};

use crate::app::App;
use crate::data::Metric;
use crate::poller::ChartBinding;
use crate::source::MetricsFetch;

/// Render all visible metric panels stacked vertically.
pub fn render<F: MetricsFetch>(frame: &mut Frame, app: &App<F>, area: Rect) {
    let visible: Vec<Metric> =
        Metric::ALL.into_iter().filter(|m| app.panels.is_visible(*m)).collect();

    if visible.is_empty() {
        super::common::render_placeholder(frame, "All panels hidden (press 1-5)", area);
        return;
    }

    let constraints: Vec<Constraint> =
        visible.iter().map(|_| Constraint::Ratio(1, visible.len() as u32)).collect();
    let rows = Layout::vertical(constraints).split(area);

    let state = app.state().lock().unwrap();
    for (metric, row) in visible.into_iter().zip(rows.iter()) {
        render_panel(frame, app, metric, state.bindings.get(&metric), *row);
    }
}

fn render_panel<F: MetricsFetch>(
    frame: &mut Frame,
    app: &App<F>,
    metric: Metric,
    binding: Option<&ChartBinding>,
    area: Rect,
) {
    let title = match binding.and_then(|b| b.values.last().copied().flatten()) {
        Some(value) => format!(" {}  {} ", metric.label(), format_value(value, metric)),
        None => format!(" {} ", metric.label()),
    };

    let block = Block::default()
        .title(Span::styled(title, Style::default().fg(metric.color())))
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    let Some(binding) = binding else {
        frame.render_widget(
            Paragraph::new("waiting for data").style(app.theme.dim).block(block),
            area,
        );
        return;
    };

    // Sparkline wants integers; scale by 100 to keep fractional rates
    // (e.g. 5.2 Mbps) from flattening. Missing samples render as gaps at
    // zero height, keeping the x axis aligned with the label series.
    let points: Vec<u64> =
        binding.values.iter().map(|v| (v.unwrap_or(0.0).max(0.0) * 100.0) as u64).collect();

    let sparkline = Sparkline::default()
        .block(block)
        .data(&points)
        .style(Style::default().fg(metric.color()));

    frame.render_widget(sparkline, area);
}

/// Format a reading with its unit for the panel title.
fn format_value(value: f64, metric: Metric) -> String {
    if value.fract() == 0.0 && value.abs() < 1e9 {
        format!("{:.0} {}", value, metric.unit())
    } else {
        format!("{:.1} {}", value, metric.unit())
    }
}
