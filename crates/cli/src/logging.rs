// crates/cli/src/logging.rs
use tracing_subscriber::EnvFilter;

use crate::error::{AppError, Result};

/// Filter used when `RUST_LOG` is not set.
#[must_use]
pub fn default_filter(verbose: bool) -> &'static str {
    // `dirwalk` also prefixes `dirwalk_engine`, so the engine gets its own directive.
    if verbose { "dirwalk=debug,dirwalk_engine=debug,warn" } else { "dirwalk=info,dirwalk_engine=error,error" }
}

/// Install the stderr subscriber. Engine records emitted through `log` are bridged in.
/// `color` toggles ANSI escapes in log lines.
///
/// # Errors
/// Fails if a global subscriber was already installed.
pub fn setup_logging(verbose: bool, color: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(color)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}
