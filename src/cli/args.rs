//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};

use crate::cli::commands::{
    completions::CompletionsArgs,
    template::TemplateArgs,
    upload::UploadArgs,
    validate::ValidateArgs,
};
use crate::report::ReportFormat;

#[derive(Parser)]
#[command(name = "nut")]
#[command(author, version, about = "Neotoma Upload Toolkit")]
#[command(
    long_about = "Validates tabular paleoecological datasets against a declarative YAML template and stages validated records for upload to the Neotoma database."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate dataset files against the template
    Validate(ValidateArgs),

    /// Validate dataset files, then stage their rows for upload
    Upload(UploadArgs),

    /// Print a starter template document
    Template(TemplateArgs),

    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

/// Run log serialization format
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-facing blocks with pass/fail markers
    #[default]
    Text,
    /// One JSON record per file (for programming)
    Jsonl,
}

impl From<LogFormat> for ReportFormat {
    fn from(format: LogFormat) -> Self {
        match format {
            LogFormat::Text => ReportFormat::Text,
            LogFormat::Jsonl => ReportFormat::Jsonl,
        }
    }
}
