// crates/cli/src/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};
use dirwalk_engine::config::DEFAULT_MAX_COUNT;

use crate::options::OutputFormat;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "dirwalk",
    version = crate::VERSION,
    about = "Walk a directory tree and report files, subdirectories, file types and empty directories"
)]
pub struct Args {
    /// Directory to start from
    #[arg(value_hint = ValueHint::DirPath)]
    pub root: Option<PathBuf>,

    /// Give up once this many subdirectories have been visited
    #[arg(long, short = 'm', default_value_t = DEFAULT_MAX_COUNT)]
    pub max_count: usize,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Do not print a line for every directory and file found
    #[arg(long, short)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Log traversal details to stderr
    #[arg(long, short)]
    pub verbose: bool,
}
