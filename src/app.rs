//! Application state and user interaction logic.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::data::Metric;
use crate::poller::{MetricPoller, PanelBoard, PollerState};
use crate::source::MetricsFetch;
use crate::ui::Theme;

/// Main application state.
///
/// Owns the polling session and the panel board the poller binds charts
/// against. Hiding a panel removes its chart target; showing it again
/// lets the next tick pick it up and bind lazily.
pub struct App<F: MetricsFetch> {
    pub running: bool,
    pub show_help: bool,
    pub paused: bool,

    poller: MetricPoller<F, PanelBoard>,
    pub panels: PanelBoard,
    state: Arc<Mutex<PollerState>>,

    pub theme: Theme,

    // Status message (temporary feedback)
    pub status_message: Option<(String, std::time::Instant)>,
}

impl<F: MetricsFetch> App<F> {
    /// Create a new App polling the given fetcher at the given interval.
    ///
    /// All five chart panels start visible.
    pub fn new(fetcher: F, interval: Duration) -> Self {
        let panels = PanelBoard::with_all();
        let poller = MetricPoller::with_interval(fetcher, panels.clone(), interval);
        let state = poller.state();
        Self {
            running: true,
            show_help: false,
            paused: false,
            poller,
            panels,
            state,
            theme: Theme::auto_detect(),
            status_message: None,
        }
    }

    /// Start (or restart) the polling session.
    pub fn start_polling(&mut self) {
        self.poller.start();
        self.paused = false;
    }

    /// Toggle between polling and paused.
    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.poller.start();
            self.paused = false;
            self.set_status_message("Polling resumed".to_string());
        } else {
            self.poller.stop();
            self.paused = true;
            self.set_status_message("Polling paused".to_string());
        }
    }

    /// Restart the timer in place (history is kept).
    pub fn restart_polling(&mut self) {
        self.poller.start();
        self.paused = false;
        self.set_status_message("Polling restarted".to_string());
    }

    /// Toggle visibility of one metric's chart panel.
    pub fn toggle_panel(&mut self, metric: Metric) {
        let visible = self.panels.toggle(metric);
        let verb = if visible { "shown" } else { "hidden" };
        self.set_status_message(format!("{} panel {}", metric.label(), verb));
    }

    /// Shared session state, for rendering.
    pub fn state(&self) -> &Arc<Mutex<PollerState>> {
        &self.state
    }

    /// Whether the polling timer is currently armed.
    pub fn is_polling(&self) -> bool {
        self.poller.is_running()
    }

    /// Returns a description of the metrics source.
    pub fn source_description(&self) -> &str {
        self.poller.source_description()
    }

    /// Set a temporary status message that will be shown for a few seconds.
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, std::time::Instant::now()));
    }

    /// Get the current status message if it hasn't expired (3 seconds).
    pub fn get_status_message(&self) -> Option<&str> {
        if let Some((msg, time)) = &self.status_message {
            if time.elapsed() < std::time::Duration::from_secs(3) {
                return Some(msg);
            }
        }
        None
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;

    use super::*;
    use crate::data::MetricsSnapshot;

    #[derive(Debug)]
    struct NullFetch;

    impl MetricsFetch for NullFetch {
        async fn fetch(&self) -> Result<MetricsSnapshot> {
            Ok(MetricsSnapshot::default())
        }

        fn description(&self) -> &str {
            "null"
        }
    }

    #[tokio::test]
    async fn test_panel_toggle_flows_through_to_board() {
        let mut app = App::new(NullFetch, Duration::from_secs(5));
        assert!(app.panels.is_visible(Metric::Cpu));

        app.toggle_panel(Metric::Cpu);
        assert!(!app.panels.is_visible(Metric::Cpu));
        assert!(app.get_status_message().unwrap().contains("hidden"));

        app.toggle_panel(Metric::Cpu);
        assert!(app.panels.is_visible(Metric::Cpu));
    }

    #[tokio::test]
    async fn test_pause_and_resume_rearm_the_timer() {
        let mut app = App::new(NullFetch, Duration::from_secs(5));
        app.start_polling();
        assert!(app.is_polling());
        assert!(!app.paused);

        app.toggle_pause();
        assert!(app.paused);
        assert!(!app.is_polling());

        app.toggle_pause();
        assert!(!app.paused);
        assert!(app.is_polling());
    }

    #[tokio::test]
    async fn test_quit_and_help() {
        let mut app = App::new(NullFetch, Duration::from_secs(5));
        app.toggle_help();
        assert!(app.show_help);
        app.quit();
        assert!(!app.running);
    }
}
