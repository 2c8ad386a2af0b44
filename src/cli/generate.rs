//! `generate` subcommand - run one generation through the controller

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use icongenius::archive::ArchiveBuilder;
use icongenius::client::HttpIconClient;
use icongenius::controller::AppController;
use icongenius::core::IconStyle;
use icongenius::history::{FileBackend, HistoryStore};
use icongenius::settings::Settings;

use super::export;

#[derive(Args)]
pub struct GenerateArgs {
    /// What to depict, e.g. "a rocket ship for a productivity app"
    pub prompt: String,

    /// Icon style: flat, 3d, minimalist, gradient, neumorphic, line-art,
    /// abstract, cartoon or watercolor
    #[arg(short, long, default_value = "flat", value_parser = parse_style)]
    pub style: IconStyle,

    /// Base URL of the generation service
    #[arg(long, env = "ICONGENIUS_BASE_URL")]
    pub base_url: Option<String>,

    /// Write each asset as an individual PNG into this directory
    #[arg(long, value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// Write the bundled zip archive into this directory
    #[arg(long, value_name = "DIR")]
    pub zip: Option<PathBuf>,
}

fn parse_style(s: &str) -> Result<IconStyle, String> {
    s.parse()
}

pub async fn run(args: GenerateArgs) -> anyhow::Result<()> {
    let settings = Settings::load();
    let base_url = args.base_url.unwrap_or(settings.base_url);

    let store = HistoryStore::new(FileBackend::new(settings.history_path));
    let mut controller = AppController::new(HttpIconClient::new(base_url), store);

    println!("Generating \"{}\" in {} style...", args.prompt.trim(), args.style);
    let item = controller.submit(&args.prompt, args.style).await?;

    println!(
        "Generated {} assets ({} standard, favicon, splash, 2 adaptive layers)",
        item.icons.asset_count(),
        item.icons.standard.len()
    );
    println!("History id: {}", item.id);

    let icons = item.icons.clone();
    let prompt = item.prompt.clone();

    if let Some(dir) = &args.out {
        let written = export::write_assets(&icons, dir)?;
        println!("Wrote {} files to {}", written, dir.display());
    }

    if let Some(dir) = &args.zip {
        let bundle = ArchiveBuilder::new().build(&icons, &prompt)?;
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating {}", dir.display()))?;
        let path = dir.join(&bundle.filename);
        std::fs::write(&path, &bundle.bytes)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("Wrote archive {}", path.display());
    }

    Ok(())
}
