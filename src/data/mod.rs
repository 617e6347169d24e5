//! Data models for the metrics dashboard.
//!
//! - [`metric`]: the fixed five-metric set and its display metadata
//! - [`snapshot`]: the wire format returned by the metrics endpoint
//! - [`history`]: bounded rolling series feeding the live charts
//!
//! ## Data Flow
//!
//! ```text
//! MetricsSnapshot (raw JSON)
//!        |
//!        v
//! History::record()   one label + one sample per metric per tick
//!        |
//!        v
//! ChartBinding        seeded/updated by the poller for visible panels
//! ```

pub mod history;
pub mod metric;
pub mod snapshot;

pub use history::{History, HISTORY_LENGTH};
pub use metric::{display_meta, DisplayMeta, Metric};
pub use snapshot::MetricsSnapshot;
