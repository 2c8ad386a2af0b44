//! IconGenius - CLI client for generating themed app-icon sets
//!
//! Sends a text prompt and style to a remote generation service, keeps a
//! durable history of past generations, and exports results either as
//! individual PNG files or as a single zip archive.

mod cli;

use clap::Parser;
use cli::{exit_codes, Cli, Commands};

use icongenius::core::{ArchiveError, GenerationError};
use icongenius::logging;

fn main() {
    std::process::exit(run());
}

fn run() -> i32 {
    let cli = Cli::parse();

    // Initialize logging
    if let Err(e) = logging::init(cli.verbose, cli.json_logs) {
        eprintln!("Failed to initialize logging: {}", e);
        return exit_codes::UNEXPECTED_FAILURE;
    }

    // Create tokio runtime for async commands
    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to create runtime: {}", e);
            return exit_codes::UNEXPECTED_FAILURE;
        }
    };

    match cli.command {
        Commands::Generate(args) => rt.block_on(async {
            match cli::generate::run(args).await {
                Ok(()) => exit_codes::SUCCESS,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    categorize_error(&e)
                }
            }
        }),
        Commands::History(command) => match cli::history::run(command) {
            Ok(()) => exit_codes::SUCCESS,
            Err(e) => {
                eprintln!("Error: {}", e);
                exit_codes::USAGE_ERROR
            }
        },
        Commands::Export(args) => match cli::export::run(args) {
            Ok(()) => exit_codes::SUCCESS,
            Err(e) => {
                eprintln!("Error: {}", e);
                categorize_error(&e)
            }
        },
    }
}

/// Map an error to the appropriate exit code
fn categorize_error(e: &anyhow::Error) -> i32 {
    if e.downcast_ref::<GenerationError>().is_some() {
        exit_codes::GENERATION_FAILED
    } else if e.downcast_ref::<ArchiveError>().is_some() {
        exit_codes::ARCHIVE_FAILED
    } else {
        exit_codes::UNEXPECTED_FAILURE
    }
}
