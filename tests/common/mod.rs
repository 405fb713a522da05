//! Shared test fixtures for the aggregator integration tests.
//!
//! Provides `ScriptedSource`, a `MetricSource` whose replies are queued per
//! endpoint path. Replies are either immediate or deferred behind a oneshot
//! channel so a test decides when (and in which order) fetches settle.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use outstanding_loans_sdk::{
    period_path, range_path, DateRange, MetricSource, MetricsError, Period, RawMetricResponse,
    Result,
};
use tokio::sync::oneshot;

pub type Reply = Result<RawMetricResponse>;

enum Scripted {
    Ready(Reply),
    Deferred(oneshot::Receiver<Reply>),
}

#[derive(Default)]
pub struct ScriptedSource {
    replies: Mutex<HashMap<String, VecDeque<Scripted>>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedSource {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn push(&self, path: String, reply: Scripted) {
        self.replies
            .lock()
            .unwrap()
            .entry(path)
            .or_default()
            .push_back(reply);
    }

    /// Queue a successful reply carrying `amount` in the amount field.
    pub fn respond(&self, path: impl Into<String>, amount: &str) {
        self.push(
            path.into(),
            Scripted::Ready(Ok(RawMetricResponse::with_amount(amount))),
        );
    }

    /// Queue a successful reply with an arbitrary payload.
    pub fn respond_raw(&self, path: impl Into<String>, raw: RawMetricResponse) {
        self.push(path.into(), Scripted::Ready(Ok(raw)));
    }

    /// Queue a failure.
    pub fn fail(&self, path: impl Into<String>, message: &str) {
        self.push(
            path.into(),
            Scripted::Ready(Err(MetricsError::Fetch(message.to_string()))),
        );
    }

    /// Queue a reply that settles only when the returned sender is used.
    pub fn defer(&self, path: impl Into<String>) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.push(path.into(), Scripted::Deferred(rx));
        tx
    }

    pub fn respond_summary(&self, day: &str, week: &str, month: &str) {
        self.respond(period_path(Period::Day), day);
        self.respond(period_path(Period::Week), week);
        self.respond(period_path(Period::Month), month);
    }

    /// Every path fetched so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn range_calls(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|p| p.contains("outstanding-loans-by-date"))
            .collect()
    }
}

#[async_trait]
impl MetricSource for ScriptedSource {
    async fn fetch_metric(&self, path: &str) -> Result<RawMetricResponse> {
        self.calls.lock().unwrap().push(path.to_string());
        let next = self
            .replies
            .lock()
            .unwrap()
            .get_mut(path)
            .and_then(|queue| queue.pop_front());

        match next {
            Some(Scripted::Ready(reply)) => reply,
            Some(Scripted::Deferred(rx)) => rx
                .await
                .unwrap_or_else(|_| Err(MetricsError::Fetch("reply sender dropped".into()))),
            None => Err(MetricsError::Fetch(format!("no reply scripted for {}", path))),
        }
    }
}

pub fn range(start: &str, end: &str) -> DateRange {
    DateRange::new(start, end)
}

pub fn range_path_of(start: &str, end: &str) -> String {
    range_path(&range(start, end))
}

pub fn ok(amount: &str) -> Reply {
    Ok(RawMetricResponse::with_amount(amount))
}
