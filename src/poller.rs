//! The metrics polling session.
//!
//! [`MetricPoller`] owns a repeating timer that fetches one snapshot per
//! tick, records it into the bounded [`History`], and drives one
//! [`ChartBinding`] per metric whose chart target is currently present.
//! Bindings are created lazily the first time a tick sees a target and
//! are updated in place on every tick after that.
//!
//! Restart semantics: `start()` always cancels the previous timer before
//! arming a new one, so any number of calls leaves exactly one polling
//! loop running. History and bindings survive restarts.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::Local;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

use crate::data::{History, Metric};
use crate::source::MetricsFetch;

/// Fixed polling interval.
pub const POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Presence oracle for chart targets.
///
/// Queried fresh on every tick rather than cached, so targets that
/// appear later in the session are picked up automatically. A metric
/// with no target is skipped for that tick: no binding, no error.
pub trait ChartSurface: Clone + Send + Sync + 'static {
    /// Whether a rendering target for this metric currently exists.
    fn has_target(&self, metric: Metric) -> bool;
}

/// Retained chart state for one metric.
///
/// The terminal charts are redrawn every frame, so "trigger a redraw"
/// here means replacing the bound series and bumping `revision`; panels
/// render whatever the binding currently holds.
#[derive(Debug, Clone)]
pub struct ChartBinding {
    /// Tick labels, index-aligned with `values`.
    pub labels: Vec<String>,
    /// Samples for this metric, oldest first.
    pub values: Vec<Option<f64>>,
    /// Incremented on every update after the initial seeding.
    pub revision: u64,
}

impl ChartBinding {
    fn seeded(labels: Vec<String>, values: Vec<Option<f64>>) -> Self {
        Self { labels, values, revision: 0 }
    }

    fn update(&mut self, labels: Vec<String>, values: Vec<Option<f64>>) {
        self.labels = labels;
        self.values = values;
        self.revision += 1;
    }
}

/// Shared state of one polling session: the rolling history plus the
/// chart bindings created so far. Mutated only from within a poll tick;
/// the UI reads it through the shared handle.
#[derive(Debug, Default)]
pub struct PollerState {
    pub history: History,
    pub bindings: HashMap<Metric, ChartBinding>,
}

/// The set of chart targets currently present on the dashboard.
///
/// This is the production [`ChartSurface`]: panels register under the
/// predictable identifier `chart_<metricName>` and the poller checks
/// membership on every tick. Cloning shares the underlying set.
#[derive(Debug, Clone, Default)]
pub struct PanelBoard {
    targets: Arc<Mutex<HashSet<String>>>,
}

impl PanelBoard {
    /// A board with no targets.
    pub fn new() -> Self {
        Self::default()
    }

    /// A board with every metric's target present.
    pub fn with_all() -> Self {
        let board = Self::new();
        for metric in Metric::ALL {
            board.show(metric);
        }
        board
    }

    /// Add the target for a metric.
    pub fn show(&self, metric: Metric) {
        self.targets.lock().unwrap().insert(metric.target_id());
    }

    /// Remove the target for a metric.
    pub fn hide(&self, metric: Metric) {
        self.targets.lock().unwrap().remove(&metric.target_id());
    }

    /// Toggle the target for a metric, returning its new visibility.
    pub fn toggle(&self, metric: Metric) -> bool {
        let mut targets = self.targets.lock().unwrap();
        let id = metric.target_id();
        if targets.remove(&id) {
            false
        } else {
            targets.insert(id);
            true
        }
    }

    /// Whether the target for a metric is present.
    pub fn is_visible(&self, metric: Metric) -> bool {
        self.targets.lock().unwrap().contains(&metric.target_id())
    }
}

impl ChartSurface for PanelBoard {
    fn has_target(&self, metric: Metric) -> bool {
        self.is_visible(metric)
    }
}

/// Periodically fetches metrics snapshots and keeps history and chart
/// bindings current.
pub struct MetricPoller<F, S> {
    fetcher: Arc<F>,
    surface: S,
    state: Arc<Mutex<PollerState>>,
    interval: Duration,
    timer: Option<JoinHandle<()>>,
}

impl<F, S> MetricPoller<F, S>
where
    F: MetricsFetch,
    S: ChartSurface,
{
    /// Create a poller with the fixed default interval.
    pub fn new(fetcher: F, surface: S) -> Self {
        Self::with_interval(fetcher, surface, POLL_INTERVAL)
    }

    /// Create a poller with a custom interval.
    pub fn with_interval(fetcher: F, surface: S, interval: Duration) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
            surface,
            state: Arc::new(Mutex::new(PollerState::default())),
            interval,
            timer: None,
        }
    }

    /// Start polling.
    ///
    /// Cancels any previously armed timer first, then polls once
    /// immediately and thereafter at the fixed interval. After this call
    /// exactly one polling loop is active, no matter how many times it
    /// has been called. Accumulated history and bindings are untouched.
    pub fn start(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }

        let fetcher = Arc::clone(&self.fetcher);
        let surface = self.surface.clone();
        let state = Arc::clone(&self.state);
        let period = self.interval;

        self.timer = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            // First tick fires immediately: the UI gets data without
            // waiting out the first interval.
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                poll_tick(fetcher.as_ref(), &surface, &state).await;
            }
        }));
    }

    /// Stop polling. Safe to call when already stopped; `start()` after
    /// this resumes with history intact.
    pub fn stop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }

    /// Whether a polling timer is currently armed.
    pub fn is_running(&self) -> bool {
        self.timer.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Shared handle to the session state, for rendering.
    pub fn state(&self) -> Arc<Mutex<PollerState>> {
        Arc::clone(&self.state)
    }

    /// Description of the underlying source, for the status bar.
    pub fn source_description(&self) -> &str {
        self.fetcher.description()
    }
}

impl<F, S> Drop for MetricPoller<F, S> {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

/// One poll tick: fetch, record, update bindings.
///
/// A failed fetch (transport error or malformed body) abandons the tick:
/// nothing is recorded, no binding is touched, and the loop carries on
/// at the regular interval.
async fn poll_tick<F, S>(fetcher: &F, surface: &S, state: &Mutex<PollerState>)
where
    F: MetricsFetch,
    S: ChartSurface,
{
    let snapshot = match fetcher.fetch().await {
        Ok(snapshot) => snapshot,
        Err(err) => {
            warn!("metrics poll failed, skipping tick: {:#}", err);
            return;
        }
    };

    let label = Local::now().format("%H:%M:%S").to_string();

    let mut state = state.lock().unwrap();
    let PollerState { history, bindings } = &mut *state;

    history.record(&snapshot, label);

    for metric in Metric::ALL {
        if !surface.has_target(metric) {
            continue;
        }

        let labels = history.labels();
        let values = history.series(metric);
        match bindings.get_mut(&metric) {
            Some(binding) => binding.update(labels, values),
            None => {
                debug!(metric = metric.name(), "binding chart target");
                bindings.insert(metric, ChartBinding::seeded(labels, values));
            }
        }
    }
}
