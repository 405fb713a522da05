use std::env;
use std::time::Duration;

use crate::error::{MetricsError, Result};

pub const OUTSTANDING_LOANS_PATH: &str = "/api/analytics/public/outstanding-loans/";
pub const OUTSTANDING_LOANS_BY_DATE_PATH: &str = "/api/analytics/public/outstanding-loans-by-date/";

/// Shown in the error slot when a failed fixed-window fetch carries no message.
pub const FALLBACK_ERROR_MESSAGE: &str =
    "Failed to fetch total gross loans outstanding data. Please try again later.";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const BASE_URL_ENV: &str = "OUTSTANDING_LOANS_BASE_URL";
pub const TIMEOUT_ENV: &str = "OUTSTANDING_LOANS_TIMEOUT_SECS";

/// Read the analytics service base URL from the environment.
pub fn base_url_from_env() -> Result<String> {
    env::var(BASE_URL_ENV)
        .map(|url| url.trim_end_matches('/').to_string())
        .map_err(|_| MetricsError::InvalidArgument(format!("{} is not set", BASE_URL_ENV)))
}

/// Read the request timeout from the environment, falling back to [`DEFAULT_TIMEOUT`].
pub fn timeout_from_env() -> Result<Duration> {
    match env::var(TIMEOUT_ENV) {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|e| MetricsError::InvalidArgument(format!("{}={:?}: {}", TIMEOUT_ENV, raw, e))),
        Err(_) => Ok(DEFAULT_TIMEOUT),
    }
}
