//! reqwest-backed [`MetricSource`] talking to the analytics service.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::config;
use crate::error::{MetricsError, Result};
use crate::models::RawMetricResponse;
use crate::source::MetricSource;

// ---------------------------------------------------------------------------
// HttpMetricSourceBuilder
// ---------------------------------------------------------------------------

/// Builder for an [`HttpMetricSource`].
pub struct HttpMetricSourceBuilder {
    base_url: Option<String>,
    timeout: Duration,
}

impl Default for HttpMetricSourceBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: config::DEFAULT_TIMEOUT,
        }
    }
}

impl HttpMetricSourceBuilder {
    /// Set the service root, e.g. `https://analytics.example.com`.
    ///
    /// Endpoint paths are appended to it, so a trailing slash is dropped.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into().trim_end_matches('/').to_string());
        self
    }

    /// Set the per-request timeout. Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<HttpMetricSource> {
        let base_url = self
            .base_url
            .filter(|url| !url.is_empty())
            .ok_or_else(|| MetricsError::InvalidArgument("base_url is required".into()))?;
        let client = Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(HttpMetricSource { base_url, client })
    }
}

// ---------------------------------------------------------------------------
// HttpMetricSource
// ---------------------------------------------------------------------------

pub struct HttpMetricSource {
    base_url: String,
    client: Client,
}

impl HttpMetricSource {
    pub fn builder() -> HttpMetricSourceBuilder {
        HttpMetricSourceBuilder::default()
    }

    /// Configure from `OUTSTANDING_LOANS_BASE_URL` and `OUTSTANDING_LOANS_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        Self::builder()
            .base_url(config::base_url_from_env()?)
            .timeout(config::timeout_from_env()?)
            .build()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl MetricSource for HttpMetricSource {
    async fn fetch_metric(&self, path: &str) -> Result<RawMetricResponse> {
        let url = self.url(path);
        log::debug!("GET {}", url);
        let resp = self.client.get(&url).send().await?.error_for_status()?;
        let body = resp.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_requires_base_url() {
        let err = HttpMetricSource::builder().build().err().unwrap();
        assert!(matches!(err, MetricsError::InvalidArgument(_)));
    }

    #[test]
    fn trailing_slash_is_dropped() {
        let source = HttpMetricSource::builder()
            .base_url("http://localhost:8000/")
            .build()
            .unwrap();
        assert_eq!(
            source.url("/api/x/?period=day"),
            "http://localhost:8000/api/x/?period=day"
        );
    }
}
