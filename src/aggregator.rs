//! Fixed-window loading and date-range queries merged into one view.
//!
//! [`MetricsAggregator`] owns a [`MetricsSnapshot`] and changes it through a
//! handful of transitions:
//!
//! - [`activate`](MetricsAggregator::activate) loads the day, week and month
//!   totals together and commits them as a single triple. It owns
//!   `summary`, `loading.overall` and `error`.
//! - [`set_date_bound`](MetricsAggregator::set_date_bound) edits the custom
//!   range and, once both bounds are set, spawns one range query. It owns
//!   `filtered` and `loading.filter`.
//!
//! Every transition is published on a [`tokio::sync::watch`] channel, so a
//! presentation layer can [`subscribe`](MetricsAggregator::subscribe) and
//! redraw on change.
//!
//! # Example
//!
//! ```no_run
//! use outstanding_loans_sdk::{DateBound, HttpMetricSource, MetricsAggregator};
//!
//! # async fn example() -> outstanding_loans_sdk::Result<()> {
//! let source = HttpMetricSource::builder()
//!     .base_url("https://analytics.example.com")
//!     .build()?;
//! let metrics = MetricsAggregator::new(source);
//!
//! metrics.activate().await;
//! println!("today: {}", metrics.snapshot().summary.day);
//!
//! metrics.set_date_bound(DateBound::StartDate, "2024-01-01")?;
//! if let Some(query) = metrics.set_date_bound(DateBound::EndDate, "2024-01-31")? {
//!     let _ = query.await;
//! }
//! println!("january: {}", metrics.snapshot().filtered);
//! # Ok(())
//! # }
//! ```

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::config;
use crate::error::{MetricsError, Result};
use crate::models::{DateBound, DateRange, MetricSummary, MetricsSnapshot, Period, RawMetricResponse};
use crate::normalize::normalize;
use crate::source::{period_path, range_path, MetricSource};

/// Fetch the three fixed-window totals concurrently and join them.
///
/// Fails as a whole as soon as any of the three fetches fails.
pub async fn fetch_summary<S: MetricSource + ?Sized>(source: &S) -> Result<MetricSummary> {
    let [day_path, week_path, month_path] = Period::ALL.map(period_path);
    let (day, week, month) = futures::future::try_join3(
        source.fetch_metric(&day_path),
        source.fetch_metric(&week_path),
        source.fetch_metric(&month_path),
    )
    .await?;

    Ok(MetricSummary {
        day: normalize(&day),
        week: normalize(&week),
        month: normalize(&month),
    })
}

/// Text for the visible error slot.
pub fn error_message(err: &MetricsError) -> String {
    let msg = err.to_string();
    if msg.trim().is_empty() {
        config::FALLBACK_ERROR_MESSAGE.to_string()
    } else {
        msg
    }
}

// ---------------------------------------------------------------------------
// MetricsAggregator
// ---------------------------------------------------------------------------

struct Shared<S> {
    source: S,
    state: watch::Sender<MetricsSnapshot>,
    activated: AtomicBool,
    /// Token of the most recently issued range query.
    range_seq: AtomicU64,
}

/// Controller for the outstanding-loans view.
///
/// Cloning is cheap and every clone drives the same state.
pub struct MetricsAggregator<S> {
    inner: Arc<Shared<S>>,
}

impl<S> Clone for MetricsAggregator<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: MetricSource + 'static> MetricsAggregator<S> {
    pub fn new(source: S) -> Self {
        let (state, _) = watch::channel(MetricsSnapshot::default());
        Self {
            inner: Arc::new(Shared {
                source,
                state,
                activated: AtomicBool::new(false),
                range_seq: AtomicU64::new(0),
            }),
        }
    }

    pub fn source(&self) -> &S {
        &self.inner.source
    }

    /// Current view state.
    pub fn snapshot(&self) -> MetricsSnapshot {
        self.inner.state.borrow().clone()
    }

    /// Receive every subsequent state transition.
    pub fn subscribe(&self) -> watch::Receiver<MetricsSnapshot> {
        self.inner.state.subscribe()
    }

    pub fn is_activated(&self) -> bool {
        self.inner.activated.load(Ordering::SeqCst)
    }

    /// Load the fixed-window summary.
    ///
    /// Runs once per aggregator; later calls return `false` without fetching.
    /// On failure the summary keeps its previous value and the error slot is
    /// filled. `loading.overall` is cleared either way.
    pub async fn activate(&self) -> bool {
        if self.inner.activated.swap(true, Ordering::SeqCst) {
            log::debug!("fixed-window metrics already requested; skipping");
            return false;
        }

        log::debug!("loading fixed-window metrics");
        match fetch_summary(&self.inner.source).await {
            Ok(summary) => {
                log::debug!(
                    "fixed-window metrics loaded: day={} week={} month={}",
                    summary.day,
                    summary.week,
                    summary.month
                );
                self.inner.state.send_modify(|s| {
                    s.summary = summary;
                    s.loading.overall = false;
                });
            }
            Err(e) => {
                log::warn!("failed to load fixed-window metrics: {}", e);
                let msg = error_message(&e);
                self.inner.state.send_modify(|s| {
                    s.error = Some(msg);
                    s.loading.overall = false;
                });
            }
        }
        true
    }

    /// Set one bound of the custom range.
    ///
    /// The value is stored as given. If both bounds are non-empty afterwards a
    /// range query is spawned and its handle returned; otherwise nothing is
    /// fetched.
    ///
    /// Range queries run on the current Tokio runtime. Called outside one, this
    /// fails with [`MetricsError::InvalidArgument`] and leaves the view as it was.
    pub fn set_date_bound(
        &self,
        bound: DateBound,
        value: impl Into<String>,
    ) -> Result<Option<JoinHandle<()>>> {
        let value = value.into();
        self.update_range(move |range| range.set(bound, value))
    }

    /// Replace both bounds at once, spawning at most one range query.
    pub fn set_date_range(&self, range: DateRange) -> Result<Option<JoinHandle<()>>> {
        self.update_range(move |current| *current = range)
    }

    fn update_range(&self, edit: impl FnOnce(&mut DateRange)) -> Result<Option<JoinHandle<()>>> {
        let runtime = Handle::try_current().map_err(|e| {
            MetricsError::InvalidArgument(format!("range queries need a Tokio runtime: {e}"))
        })?;

        let mut issued = None;
        self.inner.state.send_modify(|s| {
            edit(&mut s.date_range);
            if s.date_range.is_complete() {
                let token = self.inner.range_seq.fetch_add(1, Ordering::SeqCst) + 1;
                s.loading.filter = true;
                issued = Some((token, s.date_range.clone()));
            }
        });
        Ok(issued.map(|(token, range)| self.spawn_range_query(&runtime, token, range)))
    }

    fn spawn_range_query(&self, runtime: &Handle, token: u64, range: DateRange) -> JoinHandle<()> {
        let inner = Arc::clone(&self.inner);
        runtime.spawn(async move {
            let path = range_path(&range);
            log::debug!("range query #{} -> {}", token, path);
            let result = inner.source.fetch_metric(&path).await;
            inner.settle_range(token, &range, result);
        })
    }
}

impl<S> Shared<S> {
    /// Apply a settled range query if it is still the latest one issued.
    fn settle_range(&self, token: u64, range: &DateRange, result: Result<RawMetricResponse>) {
        if let Err(e) = &result {
            log::error!(
                "Error fetching filtered data for {}..{}: {}",
                range.start_date,
                range.end_date,
                e
            );
        }

        self.state.send_if_modified(|s| {
            let latest = self.range_seq.load(Ordering::SeqCst);
            if token != latest {
                log::debug!("discarding range query #{} (latest is #{})", token, latest);
                return false;
            }
            if let Ok(raw) = &result {
                s.filtered = normalize(raw);
            }
            s.loading.filter = false;
            true
        });
    }
}
