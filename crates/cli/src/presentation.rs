// crates/cli/src/presentation.rs
use crate::config::Config;
use crate::error::Result;
use console::style;
use dirwalk_engine::options::OutputFormat;
use dirwalk_engine::progress::{TraversalSink, WalkEvent};
use dirwalk_engine::stats::Summary;
use std::fmt::Write;

/// Prints a colored line per traversal event to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl TraversalSink for ConsoleSink {
    fn on_event(&mut self, event: WalkEvent<'_>) {
        let text = event_text(event);
        match event {
            WalkEvent::DirectoryEntered(_) => println!("{}", style(text).green()),
            WalkEvent::FileFound(_) => println!("{}", style(text).yellow()),
            WalkEvent::EmptyDirectory(_) => println!("{}", style(text).dim()),
        }
    }
}

#[must_use]
pub fn event_text(event: WalkEvent<'_>) -> String {
    match event {
        WalkEvent::DirectoryEntered(path) => format!("+ Found directory: {}", path.display()),
        WalkEvent::FileFound(path) => format!("  - Found file: {}", path.display()),
        WalkEvent::EmptyDirectory(path) => format!("  -- No files in {} --", path.display()),
    }
}

/// # Errors
/// Fails only if the summary cannot be serialized for JSON output.
pub fn print_summary(summary: &Summary, config: &Config) -> Result<()> {
    match config.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(summary)?),
        OutputFormat::Table => print_table(summary),
    }
    Ok(())
}

fn print_table(summary: &Summary) {
    println!("{}", style(totals_line(summary)).cyan());
    println!("{}", style(filetypes_line(summary)).blue());
    println!("{}", style(empty_directories_block(summary)).dim());
}

#[must_use]
pub fn totals_line(summary: &Summary) -> String {
    format!(
        "There are {} files and {} subdirectories in {}.",
        summary.files,
        summary.subdirectories,
        summary.root.display()
    )
}

/// The count includes files without an extension; the list does not.
#[must_use]
pub fn filetypes_line(summary: &Summary) -> String {
    format!("{} filetypes: {}", summary.extension_count, summary.extensions.join(", "))
}

#[must_use]
pub fn empty_directories_block(summary: &Summary) -> String {
    let mut block = format!("{} empty directories:", summary.empty_directories.len());
    for dir in &summary.empty_directories {
        let _ = write!(block, "\n {}", dir.display());
    }
    block
}

#[must_use]
pub fn limit_exceeded_message(limit: usize) -> String {
    format!("Max depth of {limit} exceeded. Find a smaller start point.")
}

pub const MISSING_ROOT_MESSAGE: &str = "You must set the start directory first.";

/// The cap diagnostic goes to stdout unless stdout is carrying JSON.
pub fn print_limit_exceeded(limit: usize, config: &Config) {
    let message = style(limit_exceeded_message(limit)).red();
    match config.format {
        OutputFormat::Table => println!("{message}"),
        OutputFormat::Json => eprintln!("{message}"),
    }
}

pub fn print_missing_root() {
    eprintln!("{}", style(MISSING_ROOT_MESSAGE).red());
}
