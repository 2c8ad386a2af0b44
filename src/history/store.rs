//! History store - lenient load, swallow-on-save persistence

use crate::core::HistoryItem;

use super::StorageBackend;

/// Return a new sequence with `item` first, leaving the input untouched
pub fn prepend(items: &[HistoryItem], item: HistoryItem) -> Vec<HistoryItem> {
    let mut next = Vec::with_capacity(items.len() + 1);
    next.push(item);
    next.extend_from_slice(items);
    next
}

/// The empty sequence; callers gate this behind explicit user confirmation
pub fn clear() -> Vec<HistoryItem> {
    Vec::new()
}

/// Persists the newest-first history sequence through a storage port
pub struct HistoryStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> HistoryStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Load persisted history
    ///
    /// Absent or unparsable storage yields an empty sequence rather than an
    /// error. Entries that fail to decode, or whose icon set is structurally
    /// incomplete, are discarded; this protects against broken results left
    /// behind by a prior, incompatible format.
    pub fn load(&self) -> Vec<HistoryItem> {
        let payload = match self.backend.read() {
            Ok(Some(payload)) => payload,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!("failed to read history: {}", e);
                return Vec::new();
            }
        };

        let raw: Vec<serde_json::Value> = match serde_json::from_str(&payload) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("discarding malformed history payload: {}", e);
                return Vec::new();
            }
        };

        let total = raw.len();
        let items: Vec<HistoryItem> = raw
            .into_iter()
            .filter_map(|value| match serde_json::from_value::<HistoryItem>(value) {
                Ok(item) if item.icons.is_complete() => Some(item),
                Ok(item) => {
                    tracing::debug!(id = %item.id, "dropping history entry with incomplete icon set");
                    None
                }
                Err(e) => {
                    tracing::debug!("dropping undecodable history entry: {}", e);
                    None
                }
            })
            .collect();

        if items.len() < total {
            tracing::info!(kept = items.len(), total, "filtered incomplete history entries");
        }
        items
    }

    /// Persist the full sequence, replacing prior content
    ///
    /// Write failures are logged and swallowed; the in-memory sequence stays
    /// authoritative for the session.
    pub fn save(&self, items: &[HistoryItem]) {
        let payload = match serde_json::to_string(items) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!("failed to serialize history: {}", e);
                return;
            }
        };
        if let Err(e) = self.backend.write(&payload) {
            tracing::warn!("failed to persist history: {}", e);
        }
    }
}
