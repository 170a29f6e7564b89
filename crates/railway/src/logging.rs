//! Tracing setup for the CLI
//!
//! Logs go to stderr so `--json` output on stdout stays machine-readable.

use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the tracing filter, e.g. `RAILWAY_LOG=debug`.
pub const LOG_ENV: &str = "RAILWAY_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber. Calling it again is a no-op.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Route panic reports through tracing instead of printing them to stderr.
///
/// Panics inside pipeline steps are contained and reported as failures, so
/// the default hook's `thread 'main' panicked at ...` banner would be noise.
/// The report is still available with `RAILWAY_LOG=debug`.
pub fn init_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        debug!("{}", info);
    }));
}
