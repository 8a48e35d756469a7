//! CLI argument definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// markpen - annotate documents with validation errors
#[derive(Parser)]
#[command(name = "markpen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Annotate a document with the errors of a validation response
    Annotate {
        /// Document the response was produced for
        document: PathBuf,

        /// Validation response (JSON)
        #[arg(short, long)]
        results: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print a plain-text report of a validation response
    Report {
        /// Validation response (JSON)
        #[arg(short, long)]
        results: PathBuf,

        /// Context characters on each side of an error (overrides config)
        #[arg(long)]
        context_width: Option<usize>,
    },

    /// Resolve a line/offset position to a character index
    Locate {
        /// Document to resolve the position in
        document: PathBuf,

        /// Line number (1-indexed)
        #[arg(short, long)]
        line: u32,

        /// Character offset on the line (0-indexed)
        #[arg(short, long, default_value_t = 0)]
        offset: u32,

        /// Print a UTF-8 byte offset instead of a character index
        #[arg(long)]
        bytes: bool,
    },

    /// Initialize configuration
    Init {
        /// Force overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Html,
    Json,
}
