//! Tracing setup for the icongenius CLI
//!
//! Logs go to stderr so generated output and summaries stay clean on
//! stdout. `--verbose` turns on debug logging for this crate only;
//! `RUST_LOG` still wins when set.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the logging system
pub fn init(verbose: bool, json: bool) -> anyhow::Result<()> {
    let subscriber = tracing_subscriber::registry().with(filter(verbose));

    if json {
        subscriber
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    Ok(())
}

fn filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(verbose))
}

fn default_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("info,icongenius=debug")
    } else {
        EnvFilter::new("info")
    }
}
