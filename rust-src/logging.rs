//! Logging setup.

use tracing_subscriber::EnvFilter;

use crate::config::{DEFAULT_LOG_FILTER, LOG_FILTER_ENV};


/// Install the global tracing subscriber.
///
/// Logs go to stderr so they never mix with report output. The filter is read
/// from `EXPENSES_LOG` and falls back to warnings only.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
