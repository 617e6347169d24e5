//! Terminal event handling.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent};

use crate::app::App;
use crate::data::Metric;
use crate::source::MetricsFetch;

/// Poll for events with a timeout
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Handle a key event
pub fn handle_key_event<F: MetricsFetch>(app: &mut App<F>, key: KeyEvent) {
    // If help is shown, any key closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),

        // Panel visibility (1-5, in canonical metric order)
        KeyCode::Char('1') => app.toggle_panel(Metric::Cpu),
        KeyCode::Char('2') => app.toggle_panel(Metric::Ram),
        KeyCode::Char('3') => app.toggle_panel(Metric::Disk),
        KeyCode::Char('4') => app.toggle_panel(Metric::NetUpload),
        KeyCode::Char('5') => app.toggle_panel(Metric::NetDownload),

        // Pause/resume polling
        KeyCode::Char('p') | KeyCode::Char(' ') => app.toggle_pause(),

        // Restart the polling timer (history is kept)
        KeyCode::Char('r') => app.restart_polling(),

        // Help
        KeyCode::Char('?') => app.toggle_help(),

        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use crossterm::event::{KeyCode, KeyEvent};

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

    fn app() -> App<NullFetch> {
        App::new(NullFetch, Duration::from_secs(5))
    }

    #[tokio::test]
    async fn test_q_quits() {
        let mut app = app();
        handle_key_event(&mut app, KeyEvent::from(KeyCode::Char('q')));
        assert!(!app.running);
    }

    #[tokio::test]
    async fn test_digit_keys_toggle_panels() {
        let mut app = app();
        handle_key_event(&mut app, KeyEvent::from(KeyCode::Char('3')));
        assert!(!app.panels.is_visible(Metric::Disk));
        handle_key_event(&mut app, KeyEvent::from(KeyCode::Char('3')));
        assert!(app.panels.is_visible(Metric::Disk));
    }

    #[tokio::test]
    async fn test_any_key_closes_help() {
        let mut app = app();
        handle_key_event(&mut app, KeyEvent::from(KeyCode::Char('?')));
        assert!(app.show_help);
        handle_key_event(&mut app, KeyEvent::from(KeyCode::Char('x')));
        assert!(!app.show_help);
        // The key that closed help did nothing else
        assert!(app.running);
    }

    #[tokio::test]
    async fn test_space_toggles_pause() {
        let mut app = app();
        app.start_polling();
        handle_key_event(&mut app, KeyEvent::from(KeyCode::Char(' ')));
        assert!(app.paused);
    }
}
