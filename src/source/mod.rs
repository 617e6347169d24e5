//! Metrics source abstraction.
//!
//! The poller is generic over [`MetricsFetch`], so the production HTTP
//! fetcher and scripted in-memory fetchers used in tests plug in the
//! same way.

mod http;

pub use http::HttpFetcher;

use std::future::Future;

use anyhow::Result;

use crate::data::MetricsSnapshot;

/// A source of metrics snapshots.
///
/// One call retrieves one snapshot. Transport failures and malformed
/// response bodies both surface as `Err`; the poller treats them
/// identically at the tick boundary.
pub trait MetricsFetch: Send + Sync + 'static {
    /// Fetch one snapshot of current server readings.
    fn fetch(&self) -> impl Future<Output = Result<MetricsSnapshot>> + Send;

    /// Human-readable description of the source, for the status bar.
    fn description(&self) -> &str;
}
