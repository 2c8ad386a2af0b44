//! Icon style catalog
//!
//! Styles are sent to the generation service in lower-case normalized form
//! (e.g. "line art"), which is also the persisted representation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed catalog of supported icon styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IconStyle {
    #[serde(rename = "flat")]
    Flat,
    #[serde(rename = "3d")]
    ThreeD,
    #[serde(rename = "minimalist")]
    Minimalist,
    #[serde(rename = "gradient")]
    Gradient,
    #[serde(rename = "neumorphic")]
    Neumorphic,
    #[serde(rename = "line art")]
    LineArt,
    #[serde(rename = "abstract")]
    Abstract,
    #[serde(rename = "cartoon")]
    Cartoon,
    #[serde(rename = "watercolor")]
    Watercolor,
}

impl IconStyle {
    /// All styles, in catalog order
    pub const ALL: [IconStyle; 9] = [
        IconStyle::Flat,
        IconStyle::ThreeD,
        IconStyle::Minimalist,
        IconStyle::Gradient,
        IconStyle::Neumorphic,
        IconStyle::LineArt,
        IconStyle::Abstract,
        IconStyle::Cartoon,
        IconStyle::Watercolor,
    ];

    /// The lower-case wire form sent to the service
    pub fn wire_name(&self) -> &'static str {
        match self {
            IconStyle::Flat => "flat",
            IconStyle::ThreeD => "3d",
            IconStyle::Minimalist => "minimalist",
            IconStyle::Gradient => "gradient",
            IconStyle::Neumorphic => "neumorphic",
            IconStyle::LineArt => "line art",
            IconStyle::Abstract => "abstract",
            IconStyle::Cartoon => "cartoon",
            IconStyle::Watercolor => "watercolor",
        }
    }
}

impl Default for IconStyle {
    fn default() -> Self {
        IconStyle::Flat
    }
}

impl fmt::Display for IconStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for IconStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept "line-art" and "line_art" spellings from the CLI
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        IconStyle::ALL
            .iter()
            .find(|style| style.wire_name() == normalized)
            .copied()
            .ok_or_else(|| {
                let names: Vec<&str> = IconStyle::ALL.iter().map(|s| s.wire_name()).collect();
                format!("unknown style '{}' (expected one of: {})", s, names.join(", "))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_round_trip() {
        for style in IconStyle::ALL {
            assert_eq!(style.wire_name().parse::<IconStyle>().unwrap(), style);
        }
    }

    #[test]
    fn test_parse_normalizes() {
        assert_eq!("Line Art".parse::<IconStyle>().unwrap(), IconStyle::LineArt);
        assert_eq!("line-art".parse::<IconStyle>().unwrap(), IconStyle::LineArt);
        assert_eq!("FLAT".parse::<IconStyle>().unwrap(), IconStyle::Flat);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("vaporwave".parse::<IconStyle>().is_err());
    }

    #[test]
    fn test_serde_uses_wire_form() {
        let json = serde_json::to_string(&IconStyle::LineArt).unwrap();
        assert_eq!(json, "\"line art\"");
        assert_eq!(
            serde_json::from_str::<IconStyle>("\"3d\"").unwrap(),
            IconStyle::ThreeD
        );
    }
}
