use clap::ValueEnum;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Colored progress lines followed by a summary
    #[default]
    Table,
    /// A single JSON summary document
    Json,
}
