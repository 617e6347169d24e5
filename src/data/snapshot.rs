//! Wire format for the metrics endpoint.
//!
//! The endpoint returns a flat JSON object with one numeric field per
//! metric. Fields the dashboard does not know about are ignored; known
//! fields may be absent, in which case the sample for that tick is `None`.

use serde::{Deserialize, Serialize};

use super::metric::Metric;

/// One snapshot of current server readings, as returned by the endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    /// CPU utilisation, percent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu: Option<f64>,

    /// RAM in use, megabytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ram: Option<f64>,

    /// Free disk space, gigabytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk: Option<f64>,

    /// Network upload rate, Mbps.
    #[serde(rename = "netUpload", skip_serializing_if = "Option::is_none")]
    pub net_upload: Option<f64>,

    /// Network download rate, Mbps.
    #[serde(rename = "netDownload", skip_serializing_if = "Option::is_none")]
    pub net_download: Option<f64>,
}

impl MetricsSnapshot {
    /// The reading for a metric, if the endpoint reported one.
    pub fn value(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Cpu => self.cpu,
            Metric::Ram => self.ram,
            Metric::Disk => self.disk,
            Metric::NetUpload => self.net_upload,
            Metric::NetDownload => self.net_download,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_snapshot() {
        let json = r#"{
            "cpu": 42.0,
            "ram": 2048,
            "disk": 120,
            "netUpload": 5.2,
            "netDownload": 10.1
        }"#;

        let snapshot: MetricsSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.value(Metric::Cpu), Some(42.0));
        assert_eq!(snapshot.value(Metric::Ram), Some(2048.0));
        assert_eq!(snapshot.value(Metric::Disk), Some(120.0));
        assert_eq!(snapshot.value(Metric::NetUpload), Some(5.2));
        assert_eq!(snapshot.value(Metric::NetDownload), Some(10.1));
    }

    #[test]
    fn test_missing_fields_are_none() {
        let snapshot: MetricsSnapshot = serde_json::from_str(r#"{"cpu": 10}"#).unwrap();
        assert_eq!(snapshot.value(Metric::Cpu), Some(10.0));
        assert_eq!(snapshot.value(Metric::Ram), None);
        assert_eq!(snapshot.value(Metric::NetDownload), None);
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let json = r#"{"cpu": 10, "gpu": 99, "uptime": "3d"}"#;
        let snapshot: MetricsSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.value(Metric::Cpu), Some(10.0));
    }

    #[test]
    fn test_non_json_body_is_an_error() {
        assert!(serde_json::from_str::<MetricsSnapshot>("<html>oops</html>").is_err());
    }
}
