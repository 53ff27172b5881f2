//! Diagnostic logging setup
//!
//! Logs go to stderr so statements printed on stdout stay clean. The filter
//! comes from `ATM_LOG` when set, otherwise from the configured default.

use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the configured log filter
pub const LOG_ENV: &str = "ATM_LOG";

/// Build the filter, preferring `ATM_LOG` over `default_filter`
pub fn filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Initialize tracing for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(default_filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(default_filter))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_harmless() {
        init("debug");
        init("info");
        tracing::info!("still logging");
    }

    #[test]
    fn test_invalid_filter_falls_back() {
        // falls back to "warn" instead of panicking
        let _ = filter("atm_core=[");
    }
}
