use clap::Parser;
use dirwalk_cli::args::Args;
use dirwalk_cli::config::Config;
use dirwalk_cli::{logging, presentation};
use dirwalk_engine::error::EngineError;
use dirwalk_engine::progress::{NullSink, TraversalSink};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    let config = Config::from(args);

    if let Err(e) = logging::setup_logging(config.verbose, config.color) {
        eprintln!("{e}");
    }
    if !config.color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let mut console_sink = presentation::ConsoleSink;
    let mut null_sink = NullSink;
    let sink: &mut dyn TraversalSink = if config.progress { &mut console_sink } else { &mut null_sink };

    match dirwalk_engine::run(&config.walk, sink) {
        Ok(result) => {
            let summary = result.summary(&config.walk.root);
            tracing::debug!(files = summary.files, subdirectories = summary.subdirectories, "walk finished");
            match presentation::print_summary(&summary, &config) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("Output Error: {e}");
                    ExitCode::FAILURE
                }
            }
        }
        // Hitting the cap is an expected outcome for large trees, not a crash.
        Err(EngineError::LimitExceeded { limit }) => {
            presentation::print_limit_exceeded(limit, &config);
            ExitCode::SUCCESS
        }
        Err(EngineError::Config(reason)) => {
            tracing::debug!(%reason, "rejected configuration");
            presentation::print_missing_root();
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    }
}
