//! Terminal rendering using ratatui.
//!
//! - [`charts`]: the live metric panels fed from chart bindings
//! - [`common`]: header bar, status bar, and help overlay
//! - [`theme`]: light/dark theme with terminal auto-detection

pub mod charts;
pub mod common;
pub mod theme;

pub use theme::Theme;
