// crates/engine/src/lib.rs
pub mod config;
pub mod error;
pub mod filesystem;
pub mod options;
pub mod path;
pub mod progress;
pub mod stats;
pub mod walker;

use crate::config::WalkOptions;
use crate::error::Result;
use crate::filesystem::StdFileSystem;
use crate::progress::TraversalSink;
use crate::stats::TraversalResult;
use crate::walker::Walker;

/// Walk the configured root on the real filesystem.
///
/// Progress events go to `sink` as they happen; the aggregated result is
/// only returned when the whole tree was walked within the cap.
///
/// # Errors
///
/// See [`Walker::traverse`]. The cap-exceeded case is reported as
/// [`error::EngineError::LimitExceeded`] so callers can tell it apart from
/// genuine I/O failures.
pub fn run(options: &WalkOptions, sink: &mut dyn TraversalSink) -> Result<TraversalResult> {
    Walker::new(StdFileSystem, options.max_count).traverse(&options.root, sink)
}
