use serde::{Deserialize, Serialize};

/// One end of a [`DateRange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateBound {
    #[serde(rename = "startDate")]
    StartDate,
    #[serde(rename = "endDate")]
    EndDate,
}

/// Caller-chosen ISO date pair. Bounds are kept verbatim; no format checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start_date: String,
    pub end_date: String,
}

impl DateRange {
    pub fn new(start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        Self {
            start_date: start_date.into(),
            end_date: end_date.into(),
        }
    }

    /// Overwrite one bound.
    pub fn set(&mut self, bound: DateBound, value: impl Into<String>) {
        match bound {
            DateBound::StartDate => self.start_date = value.into(),
            DateBound::EndDate => self.end_date = value.into(),
        }
    }

    pub fn get(&self, bound: DateBound) -> &str {
        match bound {
            DateBound::StartDate => &self.start_date,
            DateBound::EndDate => &self.end_date,
        }
    }

    /// A range can be queried once both bounds are non-empty.
    pub fn is_complete(&self) -> bool {
        !self.start_date.is_empty() && !self.end_date.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.start_date.is_empty() && self.end_date.is_empty()
    }
}
