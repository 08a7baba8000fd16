//! Diagnostic logging for the dump binaries.
//!
//! Logs go to stderr and are off unless `OOXML_DUMP_LOG` holds an
//! `EnvFilter` directive such as `debug` or `ooxml_dump::ooxml=trace`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "OOXML_DUMP_LOG";

/// Build the filter from `OOXML_DUMP_LOG`, defaulting to `off`.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"))
}

/// Install the stderr subscriber. Calling it twice is harmless.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
