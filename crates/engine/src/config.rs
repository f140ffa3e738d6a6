use crate::options::OutputFormat;
use derive_builder::Builder;
use std::path::PathBuf;

/// Default cap on counted directory entries.
pub const DEFAULT_MAX_COUNT: usize = 1000;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct WalkOptions {
    /// Directory the traversal starts from. Empty means "not configured".
    #[builder(default)]
    pub root: PathBuf,
    #[builder(default = "DEFAULT_MAX_COUNT")]
    pub max_count: usize,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self { root: PathBuf::new(), max_count: DEFAULT_MAX_COUNT }
    }
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub walk: WalkOptions,

    #[builder(default = "OutputFormat::Table")]
    pub format: OutputFormat,
    /// Print a line for every directory and file as it is found.
    #[builder(default = "true")]
    pub progress: bool,
    #[builder(default = "true")]
    pub color: bool,
    #[builder(default)]
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            walk: WalkOptions::default(),
            format: OutputFormat::Table,
            progress: true,
            color: true,
            verbose: false,
        }
    }
}
