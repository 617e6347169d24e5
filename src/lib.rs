// Library crate: public API items may not be used by the binary
#![allow(unused)]

//! # metricwatch
//!
//! A terminal dashboard and library for watching server metrics over time.
//!
//! metricwatch polls a metrics HTTP endpoint on a fixed interval, keeps a
//! bounded rolling history (the most recent 60 ticks) for each of five
//! metrics (CPU, RAM, free disk, network up/down), and drives one live
//! chart panel per metric. Panels are bound lazily: the poller checks for
//! each metric's chart target on every tick, so a panel shown mid-session
//! is seeded with the full accumulated history on the next tick.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                       Application                          │
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐   ┌─────────┐  │
//! │  │  app    │───▶│  poller  │───▶│   ui    │──▶│Terminal │  │
//! │  │ (state) │    │ (session)│    │(charts) │   │         │  │
//! │  └────┬────┘    └────┬─────┘    └─────────┘   └─────────┘  │
//! │       │              ▼                                     │
//! │       │         ┌─────────┐                                │
//! │       └────────▶│ source  │◀── HttpFetcher                 │
//! │                 │ (fetch) │                                │
//! │                 └─────────┘                                │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`app`]**: Application state and user interaction logic
//! - **[`poller`]**: The polling session — timer lifecycle, bounded history
//!   recording, and lazy chart binding
//! - **[`source`]**: Metrics fetch abstraction ([`MetricsFetch`] trait) with
//!   the HTTP implementation
//! - **[`data`]**: The metric set, wire snapshot format, and rolling history
//! - **[`ui`]**: Terminal rendering using ratatui
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! metricwatch --url http://127.0.0.1:8080/api/system/metrics
//! ```
//!
//! ### As a library
//!
//! ```no_run
//! use std::time::Duration;
//! use metricwatch::{HttpFetcher, MetricPoller, PanelBoard};
//!
//! # tokio_test::block_on(async {
//! let fetcher = HttpFetcher::new("http://127.0.0.1:8080/api/system/metrics");
//! let panels = PanelBoard::with_all();
//! let mut poller = MetricPoller::new(fetcher, panels);
//! poller.start();
//! // state() hands out the shared history + bindings for rendering
//! let state = poller.state();
//! # });
//! ```

pub mod app;
pub mod data;
pub mod events;
pub mod poller;
pub mod source;
pub mod ui;

// Re-export main types for convenience
pub use app::App;
pub use data::{History, Metric, MetricsSnapshot, HISTORY_LENGTH};
pub use poller::{ChartBinding, ChartSurface, MetricPoller, PanelBoard, PollerState, POLL_INTERVAL};
pub use source::{HttpFetcher, MetricsFetch};
