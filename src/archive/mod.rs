//! Archive builder - bundles an icon set into a single zip for download
//!
//! Entry layout mirrors the per-icon download names: `standard-N.png`
//! (1-based), top-level `favicon.png` and `splash.png`, and an `adaptive/`
//! folder holding the two layers.

use std::io::{Cursor, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use base64::Engine;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::core::{ArchiveError, GeneratedIcon, GeneratedIconSet};

/// Archive filename prefix
const FILE_PREFIX: &str = "icongenius";

/// Base name used when the sanitized hint comes up empty
const DEFAULT_BASE: &str = "icons";

/// A fully assembled in-memory archive ready to hand to the user
#[derive(Debug, Clone)]
pub struct ArchiveBundle {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Assembles icon-set archives; one build in flight per builder
#[derive(Default)]
pub struct ArchiveBuilder {
    busy: AtomicBool,
}

impl ArchiveBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bundle every asset of `icons` into a compressed archive
    ///
    /// Fails fast with [`ArchiveError::Busy`] if a build is already in
    /// flight on this builder.
    pub fn build(
        &self,
        icons: &GeneratedIconSet,
        name_hint: &str,
    ) -> Result<ArchiveBundle, ArchiveError> {
        if self.busy.swap(true, Ordering::SeqCst) {
            return Err(ArchiveError::Busy);
        }
        let result = self.build_inner(icons, name_hint);
        self.busy.store(false, Ordering::SeqCst);
        result
    }

    fn build_inner(
        &self,
        icons: &GeneratedIconSet,
        name_hint: &str,
    ) -> Result<ArchiveBundle, ArchiveError> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

        for (index, icon) in icons.standard.iter().enumerate() {
            add_entry(
                &mut writer,
                options,
                &format!("standard-{}.png", index + 1),
                icon,
            )?;
        }
        add_entry(&mut writer, options, "favicon.png", &icons.favicon)?;
        add_entry(&mut writer, options, "splash.png", &icons.splash)?;
        add_entry(
            &mut writer,
            options,
            "adaptive/foreground.png",
            &icons.adaptive.foreground,
        )?;
        add_entry(
            &mut writer,
            options,
            "adaptive/background.png",
            &icons.adaptive.background,
        )?;

        let cursor = writer
            .finish()
            .map_err(|e| ArchiveError::Encode(e.to_string()))?;

        let bundle = ArchiveBundle {
            filename: archive_filename(name_hint),
            bytes: cursor.into_inner(),
        };
        tracing::info!(
            filename = %bundle.filename,
            entries = icons.asset_count(),
            bytes = bundle.bytes.len(),
            "archive assembled"
        );
        Ok(bundle)
    }
}

fn add_entry(
    writer: &mut ZipWriter<Cursor<Vec<u8>>>,
    options: FileOptions,
    name: &str,
    icon: &GeneratedIcon,
) -> Result<(), ArchiveError> {
    let bytes = decode_payload(icon).map_err(|e| match e {
        ArchiveError::Decode(_) => ArchiveError::Decode(name.to_string()),
        ArchiveError::RemoteSrc(_) => ArchiveError::RemoteSrc(name.to_string()),
        other => other,
    })?;

    writer
        .start_file(name, options)
        .map_err(|e| ArchiveError::Encode(e.to_string()))?;
    writer
        .write_all(&bytes)
        .map_err(|e| ArchiveError::Encode(e.to_string()))?;
    Ok(())
}

/// Decode an icon's image payload to raw bytes
///
/// Only self-contained data URIs are supported; the base64 payload after the
/// first comma is decoded directly, with no network round-trip.
pub fn decode_payload(icon: &GeneratedIcon) -> Result<Vec<u8>, ArchiveError> {
    if !icon.is_data_uri() {
        return Err(ArchiveError::RemoteSrc(icon.src.clone()));
    }
    let payload = icon
        .src
        .split_once(',')
        .map(|(_, payload)| payload)
        .ok_or_else(|| ArchiveError::Decode(icon.src.clone()))?;

    base64::engine::general_purpose::STANDARD
        .decode(payload)
        .map_err(|e| ArchiveError::Decode(e.to_string()))
}

/// Derive the archive filename from a user-facing hint
///
/// Every character outside `[a-z0-9]` (case-insensitive) becomes an
/// underscore and the result is lower-cased; an empty base falls back to
/// a fixed default.
pub fn archive_filename(name_hint: &str) -> String {
    let base: String = name_hint
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();

    if base.chars().all(|c| c == '_') {
        format!("{}_{}.zip", FILE_PREFIX, DEFAULT_BASE)
    } else {
        format!("{}_{}.zip", FILE_PREFIX, base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AdaptiveIcon, IconRole};
    use std::io::Read;

    // 1x1 transparent PNG
    const PNG_B64: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

    fn data_icon() -> GeneratedIcon {
        GeneratedIcon::new(format!("data:image/png;base64,{}", PNG_B64), "a rocket ship")
    }

    fn full_set() -> GeneratedIconSet {
        GeneratedIconSet {
            favicon: data_icon(),
            standard: vec![data_icon(); 4],
            adaptive: AdaptiveIcon {
                foreground: data_icon().with_role(IconRole::Foreground),
                background: data_icon().with_role(IconRole::Background),
            },
            splash: data_icon(),
        }
    }

    #[test]
    fn test_filename_sanitization() {
        assert_eq!(
            archive_filename("Rocket Ship! 2024"),
            "icongenius_rocket_ship__2024.zip"
        );
        assert_eq!(archive_filename(""), "icongenius_icons.zip");
        assert_eq!(archive_filename("!!!"), "icongenius_icons.zip");
        assert_eq!(archive_filename("Café"), "icongenius_caf_.zip");
    }

    #[test]
    fn test_archive_entry_layout() {
        let builder = ArchiveBuilder::new();
        let set = full_set();
        let bundle = builder.build(&set, "a rocket ship").unwrap();
        assert_eq!(bundle.filename, "icongenius_a_rocket_ship.zip");

        let mut archive = zip::ZipArchive::new(Cursor::new(bundle.bytes)).unwrap();
        assert_eq!(archive.len(), set.standard.len() + 4);

        let names: Vec<String> = (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect();
        for expected in [
            "standard-1.png",
            "standard-2.png",
            "standard-3.png",
            "standard-4.png",
            "favicon.png",
            "splash.png",
            "adaptive/foreground.png",
            "adaptive/background.png",
        ] {
            assert!(names.contains(&expected.to_string()), "missing {expected}");
        }

        // Entries hold the decoded bytes, not the base64 text
        let mut favicon = Vec::new();
        archive
            .by_name("favicon.png")
            .unwrap()
            .read_to_end(&mut favicon)
            .unwrap();
        assert_eq!(favicon, decode_payload(&data_icon()).unwrap());
    }

    #[test]
    fn test_remote_src_rejected() {
        let mut set = full_set();
        set.splash = GeneratedIcon::new("https://example.com/splash.png", "p");
        let err = ArchiveBuilder::new().build(&set, "x").unwrap_err();
        assert!(matches!(err, ArchiveError::RemoteSrc(name) if name == "splash.png"));
    }

    #[test]
    fn test_undecodable_payload_rejected() {
        let mut set = full_set();
        set.favicon = GeneratedIcon::new("data:image/png;base64,@@@not-base64@@@", "p");
        let err = ArchiveBuilder::new().build(&set, "x").unwrap_err();
        assert!(matches!(err, ArchiveError::Decode(name) if name == "favicon.png"));
    }

    #[test]
    fn test_builder_resets_busy_flag_after_failure() {
        let builder = ArchiveBuilder::new();
        let mut broken = full_set();
        broken.favicon = GeneratedIcon::new("https://example.com/f.png", "p");
        assert!(builder.build(&broken, "x").is_err());
        // A failed build must not leave the builder wedged
        assert!(builder.build(&full_set(), "x").is_ok());
    }
}
