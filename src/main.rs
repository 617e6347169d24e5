// Binary includes library modules - some public API items are only for library consumers
#![allow(unused)]

use std::io;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    Terminal,
};
use tracing_subscriber::EnvFilter;

mod app;
mod data;
mod events;
mod poller;
mod source;
mod ui;

use app::App;
use source::{HttpFetcher, MetricsFetch};

#[derive(Parser, Debug)]
#[command(name = "metricwatch")]
#[command(about = "Terminal dashboard polling server metrics into rolling live charts")]
struct Args {
    /// Metrics endpoint URL
    #[arg(short, long, default_value = "http://127.0.0.1:8080/api/system/metrics")]
    url: String,

    /// Polling interval in seconds
    #[arg(short, long, default_value = "5")]
    interval: u64,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Log to stderr; stdout belongs to the TUI.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("metricwatch=info")),
        )
        .with_writer(io::stderr)
        .init();

    // The poller spawns its timer task on this runtime while the TUI
    // loop stays on the main thread.
    let rt = tokio::runtime::Runtime::new()?;
    let _guard = rt.enter();

    let fetcher = HttpFetcher::new(args.url);
    let interval = Duration::from_secs(args.interval.max(1));

    run_tui(fetcher, interval)
}

/// Run the TUI with the given metrics fetcher
fn run_tui<F: MetricsFetch>(fetcher: F, interval: Duration) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic);
    }));

    // Create app and arm the polling timer
    let mut app = App::new(fetcher, interval);
    app.start_polling();

    // Run the main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app<F: MetricsFetch>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<F>,
) -> Result<()> {
    // Minimum terminal size for usable display
    const MIN_WIDTH: u16 = 50;
    const MIN_HEIGHT: u16 = 12;

    while app.running {
        // Draw UI
        terminal.draw(|frame| {
            let area = frame.area();

            // Check for minimum terminal size
            if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
                let msg = format!(
                    "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
                    area.width, area.height, MIN_WIDTH, MIN_HEIGHT
                );
                let paragraph = ratatui::widgets::Paragraph::new(msg)
                    .alignment(ratatui::layout::Alignment::Center)
                    .style(ratatui::style::Style::default().fg(ratatui::style::Color::Yellow));
                let centered =
                    ratatui::layout::Rect::new(0, area.height.saturating_sub(4) / 2, area.width, 5);
                frame.render_widget(paragraph, centered);
                return;
            }

            let chunks = Layout::vertical([
                Constraint::Length(1), // Header bar
                Constraint::Min(8),    // Chart panels
                Constraint::Length(1), // Status bar
            ])
            .split(area);

            ui::common::render_header(frame, app, chunks[0]);
            ui::charts::render(frame, app, chunks[1]);
            ui::common::render_status_bar(frame, app, chunks[2]);

            // Render help overlay if active
            if app.show_help {
                ui::common::render_help(frame, app, area);
            }
        })?;

        // Poll for events with a short timeout; the poller ticks on the
        // runtime independently of this loop.
        if let Some(event) = events::poll_event(Duration::from_millis(100))? {
            match event {
                Event::Key(key) => events::handle_key_event(app, key),
                Event::Resize(_, _) => {
                    // Terminal will redraw on next iteration
                }
                _ => {}
            }
        }
    }

    Ok(())
}
