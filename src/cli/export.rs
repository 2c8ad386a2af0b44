//! `export` subcommand - re-export a past result without regenerating

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::Args;

use icongenius::archive::{self, ArchiveBuilder};
use icongenius::core::{GeneratedIcon, GeneratedIconSet};
use icongenius::history::{FileBackend, HistoryStore};
use icongenius::settings::Settings;

#[derive(Args)]
pub struct ExportArgs {
    /// History entry id to export (defaults to the most recent)
    #[arg(long)]
    pub id: Option<String>,

    /// Write the bundled zip archive into this directory
    #[arg(long, value_name = "DIR")]
    pub zip: Option<PathBuf>,

    /// Write each asset as an individual PNG into this directory
    #[arg(long, value_name = "DIR")]
    pub out: Option<PathBuf>,
}

pub fn run(args: ExportArgs) -> anyhow::Result<()> {
    let settings = Settings::load();
    let store = HistoryStore::new(FileBackend::new(settings.history_path));
    let items = store.load();

    let item = match &args.id {
        Some(id) => match items.iter().find(|item| item.id == *id) {
            Some(item) => item,
            None => bail!("no history entry with id {}", id),
        },
        None => match items.first() {
            Some(item) => item,
            None => bail!("history is empty; nothing to export"),
        },
    };

    if let Some(dir) = &args.out {
        let written = write_assets(&item.icons, dir)?;
        println!("Wrote {} files to {}", written, dir.display());
    }

    // With no --out, the zip is the default export surface
    if args.out.is_none() || args.zip.is_some() {
        let dir = args.zip.clone().unwrap_or_else(|| PathBuf::from("."));
        let bundle = ArchiveBuilder::new().build(&item.icons, &item.prompt)?;
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("creating {}", dir.display()))?;
        let path = dir.join(&bundle.filename);
        std::fs::write(&path, &bundle.bytes)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("Wrote archive {}", path.display());
    }

    Ok(())
}

/// Write each asset of the set as an individual PNG under `dir`
///
/// Returns the number of files written. Naming follows the per-icon
/// download names, with the adaptive layers flattened to
/// `adaptive-foreground.png` / `adaptive-background.png`.
pub fn write_assets(icons: &GeneratedIconSet, dir: &Path) -> anyhow::Result<usize> {
    std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;

    let mut entries: Vec<(String, &GeneratedIcon)> = Vec::with_capacity(icons.asset_count());
    for (index, icon) in icons.standard.iter().enumerate() {
        entries.push((format!("standard-{}.png", index + 1), icon));
    }
    entries.push(("favicon.png".to_string(), &icons.favicon));
    entries.push(("splash.png".to_string(), &icons.splash));
    entries.push(("adaptive-foreground.png".to_string(), &icons.adaptive.foreground));
    entries.push(("adaptive-background.png".to_string(), &icons.adaptive.background));

    for (name, icon) in &entries {
        let bytes = archive::decode_payload(icon)?;
        std::fs::write(dir.join(name), bytes).with_context(|| format!("writing {}", name))?;
    }
    Ok(entries.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use icongenius::core::{AdaptiveIcon, IconRole};

    const PNG_B64: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

    fn data_icon() -> GeneratedIcon {
        GeneratedIcon::new(format!("data:image/png;base64,{}", PNG_B64), "test")
    }

    #[test]
    fn test_write_assets_layout() {
        let icons = GeneratedIconSet {
            favicon: data_icon(),
            standard: vec![data_icon(); 4],
            adaptive: AdaptiveIcon {
                foreground: data_icon().with_role(IconRole::Foreground),
                background: data_icon().with_role(IconRole::Background),
            },
            splash: data_icon(),
        };

        let dir = tempfile::tempdir().unwrap();
        let written = write_assets(&icons, dir.path()).unwrap();
        assert_eq!(written, 8);

        for name in [
            "standard-1.png",
            "standard-4.png",
            "favicon.png",
            "splash.png",
            "adaptive-foreground.png",
            "adaptive-background.png",
        ] {
            assert!(dir.path().join(name).exists(), "missing {name}");
        }
    }
}
