//! Tracing setup for the `fitrep` binary.
//!
//! Reports own stdout, so every log line is written to stderr.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Level used when neither `RUST_LOG` nor `--verbose` asks for more
pub const DEFAULT_LEVEL: &str = "warn";

/// Level used with `--verbose`
pub const VERBOSE_LEVEL: &str = "debug";

/// Pick the fallback level for the given verbosity flag
pub fn level_for(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_LEVEL
    } else {
        DEFAULT_LEVEL
    }
}

/// Install the global subscriber; `RUST_LOG` takes precedence over `fallback`
pub fn init_with_level(fallback: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

/// Route logs through the test harness so skipped records show up in failing tests
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new(VERBOSE_LEVEL))
        .try_init();
}
