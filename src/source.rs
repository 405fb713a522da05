//! The fetch capability consumed by the aggregator, and the endpoint paths it asks for.

use std::sync::Arc;

use async_trait::async_trait;

use crate::config;
use crate::error::Result;
use crate::models::{DateRange, Period, RawMetricResponse};

/// GET-style access to the analytics service.
///
/// Implementations own transport, retries and auth. The aggregator only picks
/// the endpoint path and interprets the payload.
#[async_trait]
pub trait MetricSource: Send + Sync {
    async fn fetch_metric(&self, path: &str) -> Result<RawMetricResponse>;
}

#[async_trait]
impl<T: MetricSource + ?Sized> MetricSource for Arc<T> {
    async fn fetch_metric(&self, path: &str) -> Result<RawMetricResponse> {
        (**self).fetch_metric(path).await
    }
}

/// Endpoint path for a fixed-window metric.
pub fn period_path(period: Period) -> String {
    format!("{}?period={}", config::OUTSTANDING_LOANS_PATH, period)
}

/// Endpoint path for a date-range metric. Bounds are interpolated as given.
pub fn range_path(range: &DateRange) -> String {
    format!(
        "{}?start_date={}&end_date={}",
        config::OUTSTANDING_LOANS_BY_DATE_PATH,
        range.start_date,
        range.end_date
    )
}
