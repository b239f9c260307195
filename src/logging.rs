//! Tracing setup
//!
//! Library code only emits `tracing` events; binaries call [`init_tracing`]
//! once to print them to stderr.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable that overrides the configured log filter
pub const LOG_ENV: &str = "BILLSPLIT_LOG";

static TRACING_INIT: Once = Once::new();

/// Install the global fmt subscriber
///
/// `BILLSPLIT_LOG` wins over `default_filter` (usually the `log_filter`
/// setting). An unparsable filter falls back to `warn`. Later calls are
/// ignored.
pub fn init_tracing(default_filter: &str) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .or_else(|_| EnvFilter::try_new(default_filter))
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        // Another subscriber may already be installed (e.g. by a test harness)
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_does_not_panic() {
        init_tracing("debug");
        init_tracing("not a [valid filter");
        tracing::debug!("tracing initialized for tests");
    }
}
