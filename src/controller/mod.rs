//! Application controller - drives the generate/display/history workflow
//!
//! Owns the session state the original UI renders from: a loading flag, the
//! last error message, the currently displayed icon set, the selected
//! history entry, and the history itself. All durable-state changes go
//! through the history store and are persisted immediately.

use crate::client::IconGenerator;
use crate::core::{GeneratedIconSet, GenerationError, HistoryItem, IconStyle};
use crate::history::{self, HistoryStore, StorageBackend};

pub struct AppController<G: IconGenerator, B: StorageBackend> {
    generator: G,
    store: HistoryStore<B>,

    is_loading: bool,
    error: Option<String>,
    current: Option<GeneratedIconSet>,
    selected: Option<String>,
    history: Vec<HistoryItem>,
}

impl<G: IconGenerator, B: StorageBackend> AppController<G, B> {
    /// Create a controller, restoring history from the injected store
    pub fn new(generator: G, store: HistoryStore<B>) -> Self {
        let history = store.load();
        tracing::debug!(entries = history.len(), "history restored");
        Self {
            generator,
            store,
            is_loading: false,
            error: None,
            current: None,
            selected: None,
            history,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn current(&self) -> Option<&GeneratedIconSet> {
        self.current.as_ref()
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn history(&self) -> &[HistoryItem] {
        &self.history
    }

    /// Run one generation attempt and record the result
    ///
    /// A submit while another is in flight is rejected rather than allowed
    /// to clobber state. On success the new item lands at the front of
    /// history, is persisted, and becomes the selection; on failure the
    /// error message is recorded and history is left untouched.
    pub async fn submit(
        &mut self,
        prompt: &str,
        style: IconStyle,
    ) -> Result<&HistoryItem, GenerationError> {
        if self.is_loading {
            return Err(GenerationError::AlreadyRunning);
        }

        self.is_loading = true;
        self.error = None;
        self.current = None;
        self.selected = None;

        let outcome = self.generator.generate(prompt, style).await;
        self.is_loading = false;

        match outcome {
            Ok(icons) => {
                self.current = Some(icons.clone());
                let item = HistoryItem::new(prompt.trim(), style, icons);
                self.selected = Some(item.id.clone());
                self.history = history::prepend(&self.history, item);
                self.store.save(&self.history);
                Ok(&self.history[0])
            }
            Err(e) => {
                tracing::warn!("generation failed: {}", e);
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Re-display a past result; unknown ids are a no-op
    pub fn select_history(&mut self, id: &str) -> Option<&HistoryItem> {
        let index = self.history.iter().position(|item| item.id == id)?;
        self.is_loading = false;
        self.error = None;
        self.current = Some(self.history[index].icons.clone());
        self.selected = Some(id.to_string());
        Some(&self.history[index])
    }

    /// Discard all history and reset to the initial state
    ///
    /// Confirmation is the caller's responsibility; this empties history,
    /// persists the empty sequence, and clears the displayed result.
    pub fn clear_history(&mut self) {
        self.history = history::clear();
        self.store.save(&self.history);
        self.current = None;
        self.selected = None;
        self.error = None;
    }
}
