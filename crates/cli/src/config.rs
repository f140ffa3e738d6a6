// crates/cli/src/config.rs
use crate::args::Args;
use crate::options;
pub use dirwalk_engine::config::{Config, WalkOptions};
use dirwalk_engine::options as engine_options;
use std::path::PathBuf;

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        // A missing root stays empty; the walker rejects it as a configuration error.
        let walk = WalkOptions { root: args.root.unwrap_or_else(PathBuf::new), max_count: args.max_count };
        let format: engine_options::OutputFormat = args.format.into();

        Self {
            walk,
            format,
            // JSON output owns stdout, so per-entry lines are dropped there.
            progress: !args.quiet && format == engine_options::OutputFormat::Table,
            color: !args.no_color,
            verbose: args.verbose,
        }
    }
}

// From trait implementations for CLI -> Engine enum conversion

macro_rules! map_enum {
    ($from:ty, $to:ty, $($variant:ident),+ $(,)?) => {
        impl From<$from> for $to {
            fn from(f: $from) -> Self {
                match f {
                    $( <$from>::$variant => <$to>::$variant, )+
                }
            }
        }
    };
}

map_enum!(options::OutputFormat, engine_options::OutputFormat, Table, Json);

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use dirwalk_engine::config::DEFAULT_MAX_COUNT;

    fn config_from(argv: &[&str]) -> Config {
        Config::from(Args::try_parse_from(argv).unwrap())
    }

    #[test]
    fn missing_root_becomes_empty_path() {
        let config = config_from(&["dirwalk"]);
        assert!(config.walk.root.as_os_str().is_empty());
        assert_eq!(config.walk.max_count, DEFAULT_MAX_COUNT);
        assert!(config.progress);
        assert!(config.color);
    }

    #[test]
    fn json_disables_progress_lines() {
        let config = config_from(&["dirwalk", "src", "--format", "json"]);
        assert_eq!(config.format, engine_options::OutputFormat::Json);
        assert!(!config.progress);
    }

    #[test]
    fn quiet_and_no_color_are_carried_over() {
        let config = config_from(&["dirwalk", "src", "--quiet", "--no-color", "--max-count", "7"]);
        assert_eq!(config.walk.root, PathBuf::from("src"));
        assert_eq!(config.walk.max_count, 7);
        assert!(!config.progress);
        assert!(!config.color);
    }
}
