//! HTTP metrics fetcher.
//!
//! Issues a GET against the metrics endpoint and parses the JSON body.
//! No timeout is applied to the request; a hung request delays its own
//! tick and nothing else.

use anyhow::{Context, Result};

use super::MetricsFetch;
use crate::data::MetricsSnapshot;

/// Fetches metrics snapshots from an HTTP endpoint.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    url: String,
    description: String,
}

impl HttpFetcher {
    /// Create a fetcher for the given endpoint URL.
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        let description = format!("http: {}", url);
        Self {
            client: reqwest::Client::new(),
            url,
            description,
        }
    }

    /// The endpoint URL being polled.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl MetricsFetch for HttpFetcher {
    async fn fetch(&self) -> Result<MetricsSnapshot> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .with_context(|| format!("failed to reach metrics endpoint {}", self.url))?;

        let response = response
            .error_for_status()
            .with_context(|| format!("metrics endpoint {} returned an error status", self.url))?;

        let snapshot = response
            .json::<MetricsSnapshot>()
            .await
            .context("failed to parse metrics response body")?;

        Ok(snapshot)
    }

    fn description(&self) -> &str {
        &self.description
    }
}
