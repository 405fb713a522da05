//! Loan-outstanding analytics SDK for Rust.
//!
//! Fetches aggregate outstanding-loan totals from a remote analytics service
//! for three fixed windows (today, this week, this month) and for arbitrary
//! date ranges, and merges them into a single view model.
//!
//! # Quick start
//!
//! ```no_run
//! use outstanding_loans_sdk::{DateRange, HttpMetricSource, MetricsAggregator};
//!
//! # async fn example() -> outstanding_loans_sdk::Result<()> {
//! let metrics = MetricsAggregator::new(HttpMetricSource::from_env()?);
//! metrics.activate().await;
//!
//! if let Some(query) = metrics.set_date_range(DateRange::new("2024-01-01", "2024-01-31"))? {
//!     let _ = query.await;
//! }
//!
//! let view = metrics.snapshot();
//! println!("{} / {} / {} / {}", view.summary.day, view.summary.week, view.summary.month, view.filtered);
//! # Ok(())
//! # }
//! ```
//!
//! Transport is pluggable through [`MetricSource`]; [`HttpMetricSource`] is
//! the reqwest implementation.

pub mod aggregator;
pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod normalize;
pub mod source;

pub use aggregator::{fetch_summary, MetricsAggregator};
pub use error::{MetricsError, Result};
pub use http::{HttpMetricSource, HttpMetricSourceBuilder};
pub use models::{
    DateBound, DateRange, LoadingState, MetricSummary, MetricsSnapshot, Period, RawMetricResponse,
};
pub use normalize::{normalize, parse_amount};
pub use source::{period_path, range_path, MetricSource};
