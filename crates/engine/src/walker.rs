//! Bounded depth-first traversal.
//!
//! A [`Walker`] lists a root directory, classifies every child as file or
//! directory and descends into directories as soon as they are seen, so the
//! resulting file list follows visitation order. Only directories count
//! toward the cap; files are collected without being counted. Once the
//! counted total reaches the cap, the next entry aborts the whole traversal
//! with [`EngineError::LimitExceeded`] and nothing collected so far is
//! returned.
//!
//! Descent is driven by an explicit stack of pending children per directory,
//! which gives the same order as plain recursion without tying depth to the
//! thread's call stack.

use std::path::{Path, PathBuf};

use crate::error::{EngineError, Result};
use crate::filesystem::FileSystem;
use crate::path::join;
use crate::progress::{TraversalSink, WalkEvent};
use crate::stats::TraversalResult;

#[derive(Debug, Clone)]
pub struct Walker<F> {
    fs: F,
    max_count: usize,
}

impl<F: FileSystem> Walker<F> {
    pub const fn new(fs: F, max_count: usize) -> Self {
        Self { fs, max_count }
    }

    /// Walk everything below `root`.
    ///
    /// # Errors
    /// - [`EngineError::Config`] if `root` is empty; the filesystem is not touched.
    /// - [`EngineError::LimitExceeded`] once the cap is reached.
    /// - [`EngineError::FileSystem`] on the first listing or stat failure.
    pub fn traverse(&self, root: &Path, sink: &mut dyn TraversalSink) -> Result<TraversalResult> {
        if root.as_os_str().is_empty() {
            return Err(EngineError::Config("start directory is not set".to_string()));
        }

        log::debug!("walking {} (max {} entries)", root.display(), self.max_count);
        let mut session = TraversalSession::new(&self.fs, self.max_count, sink);
        session.run(root)?;
        Ok(session.finish())
    }
}

/// Mutable state for a single traversal. Dropped with the call.
struct TraversalSession<'a, F> {
    fs: &'a F,
    limit: usize,
    sink: &'a mut dyn TraversalSink,
    visited_count: usize,
    subdirectory_count: usize,
    files: Vec<PathBuf>,
    empty_directories: Vec<PathBuf>,
    // Remaining children of every directory on the current descent path.
    pending: Vec<std::vec::IntoIter<PathBuf>>,
}

impl<'a, F: FileSystem> TraversalSession<'a, F> {
    fn new(fs: &'a F, limit: usize, sink: &'a mut dyn TraversalSink) -> Self {
        Self {
            fs,
            limit,
            sink,
            visited_count: 0,
            subdirectory_count: 0,
            files: Vec::new(),
            empty_directories: Vec::new(),
            pending: Vec::new(),
        }
    }

    fn run(&mut self, root: &Path) -> Result<()> {
        self.enter(root)?;
        loop {
            let next = match self.pending.last_mut() {
                Some(children) => children.next(),
                None => break,
            };
            match next {
                Some(child) => self.visit(child)?,
                None => {
                    self.pending.pop();
                }
            }
        }
        Ok(())
    }

    fn enter(&mut self, dir: &Path) -> Result<()> {
        let names = self.fs.read_dir_names(dir).map_err(|e| EngineError::read_dir(dir, e))?;
        log::debug!("listed {} ({} entries)", dir.display(), names.len());

        if names.is_empty() {
            self.sink.on_event(WalkEvent::EmptyDirectory(dir));
            self.empty_directories.push(dir.to_path_buf());
            return Ok(());
        }

        let children: Vec<PathBuf> = names.iter().map(|name| join(dir, name)).collect();
        self.pending.push(children.into_iter());
        Ok(())
    }

    fn visit(&mut self, path: PathBuf) -> Result<()> {
        if self.visited_count >= self.limit {
            log::warn!("entry limit of {} reached at {}", self.limit, path.display());
            return Err(EngineError::LimitExceeded { limit: self.limit });
        }

        let is_dir = self.fs.is_dir(&path).map_err(|e| EngineError::stat(&path, e))?;
        if is_dir {
            self.sink.on_event(WalkEvent::DirectoryEntered(&path));
            self.subdirectory_count += 1;
            self.visited_count += 1;
            self.enter(&path)
        } else {
            log::trace!("file {}", path.display());
            self.sink.on_event(WalkEvent::FileFound(&path));
            self.files.push(path);
            Ok(())
        }
    }

    fn finish(self) -> TraversalResult {
        debug_assert_eq!(self.visited_count, self.subdirectory_count);
        TraversalResult {
            files: self.files,
            subdirectory_count: self.subdirectory_count,
            empty_directories: self.empty_directories,
        }
    }
}
