//! Rolling history of metric samples for the live charts.
//!
//! Records one sample per metric per poll tick, bounded to the most
//! recent [`HISTORY_LENGTH`] ticks.

use std::collections::{HashMap, VecDeque};

use super::metric::Metric;
use super::snapshot::MetricsSnapshot;

/// Maximum number of ticks retained per series.
pub const HISTORY_LENGTH: usize = 60;

/// Bounded rolling history, one series per metric plus time labels.
///
/// The hard invariant: the label series and every metric series are
/// always the same length, and index *i* across all of them refers to
/// the same poll tick. Every call to [`History::record`] appends exactly
/// one label and exactly one sample per metric; a metric absent from the
/// snapshot appends `None` rather than skipping.
#[derive(Debug, Clone)]
pub struct History {
    /// Sample series per metric (newest last).
    samples: HashMap<Metric, VecDeque<Option<f64>>>,
    /// Display label per tick (local wall-clock time).
    labels: VecDeque<String>,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            samples: HashMap::new(),
            labels: VecDeque::new(),
        }
    }

    /// Record one tick: the snapshot's reading for every metric plus the
    /// tick's display label, evicting the oldest entries past capacity.
    pub fn record(&mut self, snapshot: &MetricsSnapshot, label: String) {
        for metric in Metric::ALL {
            let series = self.samples.entry(metric).or_default();
            series.push_back(snapshot.value(metric));
            if series.len() > HISTORY_LENGTH {
                series.pop_front();
            }
        }

        self.labels.push_back(label);
        if self.labels.len() > HISTORY_LENGTH {
            self.labels.pop_front();
        }
    }

    /// Number of ticks currently held.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// True if no tick has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// The sample series for a metric, oldest first.
    pub fn series(&self, metric: Metric) -> Vec<Option<f64>> {
        self.samples.get(&metric).map(|s| s.iter().copied().collect()).unwrap_or_default()
    }

    /// The tick labels, oldest first.
    pub fn labels(&self) -> Vec<String> {
        self.labels.iter().cloned().collect()
    }

    /// The most recent sample for a metric, if any tick recorded one.
    pub fn latest(&self, metric: Metric) -> Option<f64> {
        self.samples.get(&metric)?.back().copied().flatten()
    }
}
