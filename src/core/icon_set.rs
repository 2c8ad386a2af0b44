//! Generated icon models - the output of one generation request

use serde::{Deserialize, Serialize};

/// Layer role for adaptive icons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconRole {
    Foreground,
    Background,
}

/// A single generated image asset
///
/// `src` is either a self-contained data URI (`data:image/png;base64,...`)
/// or a URL pointing at the asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedIcon {
    pub src: String,

    /// The prompt this icon was generated from
    pub prompt: String,

    /// Layer role, set only on adaptive icon layers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<IconRole>,
}

impl GeneratedIcon {
    pub fn new(src: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            prompt: prompt.into(),
            role: None,
        }
    }

    /// Builder pattern: set the layer role
    pub fn with_role(mut self, role: IconRole) -> Self {
        self.role = Some(role);
        self
    }

    /// Whether `src` is a self-contained data URI rather than a URL
    pub fn is_data_uri(&self) -> bool {
        self.src.starts_with("data:")
    }
}

/// The two layers of a platform adaptive icon
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdaptiveIcon {
    pub foreground: GeneratedIcon,
    pub background: GeneratedIcon,
}

/// The complete bundle of image variants produced from one prompt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedIconSet {
    pub favicon: GeneratedIcon,

    /// Standard app icons, fixed arity (the service returns 4)
    pub standard: Vec<GeneratedIcon>,

    pub adaptive: AdaptiveIcon,

    pub splash: GeneratedIcon,
}

impl GeneratedIconSet {
    /// A set with an empty standard sequence is treated as corrupt
    pub fn is_complete(&self) -> bool {
        !self.standard.is_empty()
    }

    /// Total number of image assets in the set
    pub fn asset_count(&self) -> usize {
        self.standard.len() + 4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn icon(src: &str) -> GeneratedIcon {
        GeneratedIcon::new(src, "a rocket ship")
    }

    fn full_set() -> GeneratedIconSet {
        GeneratedIconSet {
            favicon: icon("data:image/png;base64,AAAA"),
            standard: vec![icon("data:image/png;base64,AAAA"); 4],
            adaptive: AdaptiveIcon {
                foreground: icon("data:image/png;base64,AAAA").with_role(IconRole::Foreground),
                background: icon("data:image/png;base64,AAAA").with_role(IconRole::Background),
            },
            splash: icon("data:image/png;base64,AAAA"),
        }
    }

    #[test]
    fn test_asset_count() {
        assert_eq!(full_set().asset_count(), 8);
    }

    #[test]
    fn test_completeness() {
        let mut set = full_set();
        assert!(set.is_complete());
        set.standard.clear();
        assert!(!set.is_complete());
    }

    #[test]
    fn test_data_uri_detection() {
        assert!(icon("data:image/png;base64,AAAA").is_data_uri());
        assert!(!icon("https://example.com/icon.png").is_data_uri());
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let fg = icon("data:x").with_role(IconRole::Foreground);
        let json = serde_json::to_string(&fg).unwrap();
        assert!(json.contains("\"role\":\"foreground\""));
    }

    #[test]
    fn test_role_omitted_when_absent() {
        let json = serde_json::to_string(&icon("data:x")).unwrap();
        assert!(!json.contains("role"));
    }
}
