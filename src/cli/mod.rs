//! Command-line interface

pub mod export;
pub mod generate;
pub mod history;

use clap::{Parser, Subcommand};

/// Process exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const UNEXPECTED_FAILURE: i32 = 1;
    pub const GENERATION_FAILED: i32 = 2;
    pub const ARCHIVE_FAILED: i32 = 3;
    pub const USAGE_ERROR: i32 = 4;
}

#[derive(Parser)]
#[command(
    name = "icongenius",
    version,
    about = "Generate themed app-icon sets from a text prompt"
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a new icon set
    Generate(generate::GenerateArgs),

    /// Inspect or clear past generations
    #[command(subcommand)]
    History(history::HistoryCommand),

    /// Re-export a past result as files or a zip archive
    Export(export::ExportArgs),
}
