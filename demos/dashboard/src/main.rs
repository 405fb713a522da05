//! Usage: `outstanding-loans-dashboard [START_DATE END_DATE]`
//!
//! Reads `OUTSTANDING_LOANS_BASE_URL` (and optionally
//! `OUTSTANDING_LOANS_TIMEOUT_SECS`), loads the fixed-window totals, runs the
//! range query when both dates are given, and prints the resulting view.

use std::process::ExitCode;

use outstanding_loans_sdk::{DateBound, HttpMetricSource, MetricsAggregator};

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let source = match HttpMetricSource::from_env() {
        Ok(source) => source,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let metrics = MetricsAggregator::new(source);
    log::info!("querying {}", metrics.source().base_url());
    metrics.activate().await;

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let [start, end] = args.as_slice() {
        let query = metrics
            .set_date_bound(DateBound::StartDate, start.as_str())
            .and_then(|_| metrics.set_date_bound(DateBound::EndDate, end.as_str()));
        match query {
            Ok(Some(query)) => {
                if let Err(e) = query.await {
                    log::error!("range query task failed: {e}");
                }
            }
            Ok(None) => {}
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
        }
    }

    let view = metrics.snapshot();
    match serde_json::to_string_pretty(&view) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    }

    if view.error.is_some() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
