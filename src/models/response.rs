use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Payload returned by the outstanding-loans endpoints.
///
/// Only the aggregate amount is read. The service sends it as a decimal
/// string; bare numbers are accepted and kept in their string form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawMetricResponse {
    #[serde(default, deserialize_with = "amount_field")]
    pub total_outstanding_loans: Option<String>,
}

impl RawMetricResponse {
    pub fn with_amount(amount: impl Into<String>) -> Self {
        Self {
            total_outstanding_loans: Some(amount.into()),
        }
    }
}

fn amount_field<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}
