//! History item model - one record per successful generation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{GeneratedIconSet, IconStyle};

/// An immutable record of one successful generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryItem {
    /// Unique token, assigned once at creation
    pub id: String,

    pub prompt: String,

    pub style: IconStyle,

    pub icons: GeneratedIconSet,

    /// When the generation completed
    pub timestamp: DateTime<Utc>,
}

impl HistoryItem {
    /// Create a new item for a generation that just completed
    pub fn new(prompt: impl Into<String>, style: IconStyle, icons: GeneratedIconSet) -> Self {
        Self {
            id: format!("gen-{}", uuid::Uuid::new_v4()),
            prompt: prompt.into(),
            style,
            icons,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AdaptiveIcon, GeneratedIcon, IconRole};

    fn sample_set() -> GeneratedIconSet {
        let icon = GeneratedIcon::new("data:image/png;base64,AAAA", "test");
        GeneratedIconSet {
            favicon: icon.clone(),
            standard: vec![icon.clone(); 4],
            adaptive: AdaptiveIcon {
                foreground: icon.clone().with_role(IconRole::Foreground),
                background: icon.clone().with_role(IconRole::Background),
            },
            splash: icon,
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let a = HistoryItem::new("a", IconStyle::Flat, sample_set());
        let b = HistoryItem::new("a", IconStyle::Flat, sample_set());
        assert_ne!(a.id, b.id);
        assert!(a.id.starts_with("gen-"));
    }

    #[test]
    fn test_json_round_trip() {
        let item = HistoryItem::new("a rocket ship", IconStyle::Cartoon, sample_set());
        let json = serde_json::to_string(&item).unwrap();
        let back: HistoryItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, item.id);
        assert_eq!(back.prompt, item.prompt);
        assert_eq!(back.style, item.style);
        assert_eq!(back.timestamp, item.timestamp);
        assert_eq!(back.icons.standard.len(), 4);
    }
}
