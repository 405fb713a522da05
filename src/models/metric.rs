use std::fmt;

use serde::{Deserialize, Serialize};

use super::range::DateRange;

// ---------------------------------------------------------------------------
// Period — Fixed reporting window anchored to the current date
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    Day,
    Week,
    Month,
}

impl Period {
    /// Every fixed window, in summary order.
    pub const ALL: [Period; 3] = [Period::Day, Period::Week, Period::Month];

    /// Value sent as the `period` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Period::Day => "day",
            Period::Week => "week",
            Period::Month => "month",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// MetricSummary — Outstanding amounts for the three fixed windows
// ---------------------------------------------------------------------------

/// Outstanding loan totals for today, this week and this month.
///
/// Only ever replaced as a whole; a failed load never leaves a mix of old
/// and new values behind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricSummary {
    pub day: f64,
    pub week: f64,
    pub month: f64,
}

impl MetricSummary {
    pub fn get(&self, period: Period) -> f64 {
        match period {
            Period::Day => self.day,
            Period::Week => self.week,
            Period::Month => self.month,
        }
    }
}

// ---------------------------------------------------------------------------
// LoadingState — Busy flags, one per operation group
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadingState {
    /// Fixed-window load still pending. Starts `true`, cleared once and for all.
    pub overall: bool,
    /// Latest range query still pending.
    pub filter: bool,
}

impl Default for LoadingState {
    fn default() -> Self {
        Self {
            overall: true,
            filter: false,
        }
    }
}

// ---------------------------------------------------------------------------
// MetricsSnapshot — Read-only view handed to the presentation layer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MetricsSnapshot {
    pub summary: MetricSummary,
    pub filtered: f64,
    pub loading: LoadingState,
    pub error: Option<String>,
    pub date_range: DateRange,
}
