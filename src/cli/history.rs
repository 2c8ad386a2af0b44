//! `history` subcommand - inspect and clear past generations

use anyhow::bail;
use clap::Subcommand;

use icongenius::history::{clear, FileBackend, HistoryStore};
use icongenius::settings::Settings;

#[derive(Subcommand)]
pub enum HistoryCommand {
    /// List past generations, newest first
    List,

    /// Show one entry in detail
    Show { id: String },

    /// Delete all history
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

pub fn run(command: HistoryCommand) -> anyhow::Result<()> {
    let settings = Settings::load();
    let store = HistoryStore::new(FileBackend::new(settings.history_path));

    match command {
        HistoryCommand::List => {
            let items = store.load();
            if items.is_empty() {
                println!("No generations yet.");
                return Ok(());
            }
            for item in &items {
                println!(
                    "{}  {}  {:<11} {}",
                    item.id,
                    item.timestamp.format("%Y-%m-%d %H:%M"),
                    item.style.to_string(),
                    item.prompt
                );
            }
        }
        HistoryCommand::Show { id } => {
            let items = store.load();
            let Some(item) = items.iter().find(|item| item.id == id) else {
                bail!("no history entry with id {}", id);
            };
            println!("id:        {}", item.id);
            println!("prompt:    {}", item.prompt);
            println!("style:     {}", item.style);
            println!("generated: {}", item.timestamp.format("%Y-%m-%d %H:%M:%S UTC"));
            println!(
                "assets:    {} ({} standard, favicon, splash, 2 adaptive layers)",
                item.icons.asset_count(),
                item.icons.standard.len()
            );
        }
        HistoryCommand::Clear { yes } => {
            let items = store.load();
            if items.is_empty() {
                println!("History is already empty.");
                return Ok(());
            }
            if !yes {
                let prompt = format!(
                    "Clear all {} history entries? This cannot be undone.",
                    items.len()
                );
                if !confirm(&prompt)? {
                    println!("Aborted.");
                    return Ok(());
                }
            }
            store.save(&clear());
            println!("Cleared {} entries.", items.len());
        }
    }

    Ok(())
}

/// Ask a yes/no question on stdin; anything but y/yes is a no
fn confirm(prompt: &str) -> anyhow::Result<bool> {
    use std::io::Write;

    print!("{} [y/N] ", prompt);
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(matches!(line.trim().to_lowercase().as_str(), "y" | "yes"))
}
