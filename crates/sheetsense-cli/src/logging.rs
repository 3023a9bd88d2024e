//! Logging setup using `tracing-subscriber`.
//!
//! Logs go to stderr so stdout stays clean for JSON output. `RUST_LOG`
//! takes precedence over the `-v` flags when set.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Map the `-v` count to a level filter.
///
/// - 0: warn
/// - 1 (`-v`): debug
/// - 2+ (`-vv`): trace
pub fn level_from_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the global subscriber.
pub fn init_logging(verbosity: u8) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::builder()
        .with_default_directive(level_from_verbosity(verbosity).into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
}
