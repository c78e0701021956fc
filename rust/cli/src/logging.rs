//! Diagnostic logging for the `hexgames` binary.
//!
//! Game output goes to stdout; tracing events go to stderr so they never mix
//! with JSON states. `RUST_LOG` overrides [`DEFAULT_FILTER`].

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "warn,hexgames_engine=info";

/// Installs the global subscriber. Calling it twice is harmless.
pub fn init_logging() {
    use tracing_subscriber::fmt;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
