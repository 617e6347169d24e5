//! Metric identity and display metadata.
//!
//! The dashboard tracks a fixed set of five server metrics. Each metric
//! carries static display metadata (label, unit, chart color) and a
//! predictable chart target identifier used to locate its panel.

use ratatui::style::Color;

/// One of the five server metrics tracked by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Metric {
    /// CPU utilisation, percent.
    Cpu,
    /// RAM in use, megabytes.
    Ram,
    /// Free disk space, gigabytes.
    Disk,
    /// Network upload rate, Mbps.
    NetUpload,
    /// Network download rate, Mbps.
    NetDownload,
}

impl Metric {
    /// All metrics in canonical order.
    ///
    /// This order is used everywhere: chart layout, history iteration,
    /// and panel numbering.
    pub const ALL: [Metric; 5] = [
        Metric::Cpu,
        Metric::Ram,
        Metric::Disk,
        Metric::NetUpload,
        Metric::NetDownload,
    ];

    /// Wire name as it appears in the metrics endpoint response.
    pub fn name(&self) -> &'static str {
        match self {
            Metric::Cpu => "cpu",
            Metric::Ram => "ram",
            Metric::Disk => "disk",
            Metric::NetUpload => "netUpload",
            Metric::NetDownload => "netDownload",
        }
    }

    /// Identifier of this metric's chart target (`chart_<name>`).
    pub fn target_id(&self) -> String {
        format!("chart_{}", self.name())
    }

    /// Human-readable display label.
    pub fn label(&self) -> &'static str {
        display_meta(self.name()).label
    }

    /// Unit suffix shown next to the current reading.
    pub fn unit(&self) -> &'static str {
        match self {
            Metric::Cpu => "%",
            Metric::Ram => "MB",
            Metric::Disk => "GB",
            Metric::NetUpload | Metric::NetDownload => "Mbps",
        }
    }

    /// Fixed chart color for this metric.
    pub fn color(&self) -> Color {
        display_meta(self.name()).color
    }
}

/// Static display metadata for a metric name.
#[derive(Debug, Clone, Copy)]
pub struct DisplayMeta {
    pub label: &'static str,
    pub color: Color,
}

/// Look up display metadata by wire name.
///
/// Unknown names (should the endpoint ever report extras) resolve to a
/// generic label and color rather than failing.
pub fn display_meta(name: &str) -> DisplayMeta {
    match name {
        "cpu" => DisplayMeta { label: "CPU", color: Color::Cyan },
        "ram" => DisplayMeta { label: "RAM", color: Color::Magenta },
        "disk" => DisplayMeta { label: "Disk free", color: Color::Yellow },
        "netUpload" => DisplayMeta { label: "Net up", color: Color::Green },
        "netDownload" => DisplayMeta { label: "Net down", color: Color::Blue },
        _ => DisplayMeta { label: "Metric", color: Color::Gray },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_id_pattern() {
        assert_eq!(Metric::Cpu.target_id(), "chart_cpu");
        assert_eq!(Metric::NetDownload.target_id(), "chart_netDownload");
    }

    #[test]
    fn test_all_metrics_have_distinct_names() {
        let names: Vec<&str> = Metric::ALL.iter().map(|m| m.name()).collect();
        let mut deduped = names.clone();
        deduped.dedup();
        assert_eq!(names.len(), 5);
        assert_eq!(deduped.len(), 5);
    }

    #[test]
    fn test_unknown_name_falls_back_to_generic() {
        let meta = display_meta("gpu");
        assert_eq!(meta.label, "Metric");
        assert_eq!(meta.color, Color::Gray);
    }

    #[test]
    fn test_known_names_resolve() {
        assert_eq!(display_meta("cpu").label, "CPU");
        assert_eq!(Metric::Ram.label(), "RAM");
        assert_eq!(Metric::Disk.unit(), "GB");
    }
}
