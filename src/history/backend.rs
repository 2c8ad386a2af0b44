//! Storage port for history persistence

use std::path::PathBuf;
use std::sync::Mutex;

use crate::core::PersistenceError;

/// Trait for durable history storage backends
///
/// One key, read wholesale at startup and overwritten wholesale on every
/// change. Absent storage reads as `Ok(None)`.
pub trait StorageBackend: Send + Sync {
    /// Read the raw persisted payload, if any
    fn read(&self) -> Result<Option<String>, PersistenceError>;

    /// Replace the persisted payload
    fn write(&self, payload: &str) -> Result<(), PersistenceError>;
}

impl<B: StorageBackend> StorageBackend for std::sync::Arc<B> {
    fn read(&self) -> Result<Option<String>, PersistenceError> {
        (**self).read()
    }

    fn write(&self, payload: &str) -> Result<(), PersistenceError> {
        (**self).write(payload)
    }
}

/// Single-file JSON storage backend
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location under the platform data directory
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("icongenius")
            .join("history.json")
    }
}

impl StorageBackend for FileBackend {
    fn read(&self) -> Result<Option<String>, PersistenceError> {
        if !self.path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(&self.path)?))
    }

    fn write(&self, payload: &str) -> Result<(), PersistenceError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, payload)?;
        Ok(())
    }
}

/// In-process backend for tests and ephemeral runs
#[derive(Default)]
pub struct MemoryBackend {
    payload: Mutex<Option<String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the backend with an existing payload
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            payload: Mutex::new(Some(payload.into())),
        }
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self) -> Result<Option<String>, PersistenceError> {
        Ok(self.payload.lock().expect("backend lock poisoned").clone())
    }

    fn write(&self, payload: &str) -> Result<(), PersistenceError> {
        *self.payload.lock().expect("backend lock poisoned") = Some(payload.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_backend_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path().join("nested").join("history.json"));

        assert!(backend.read().unwrap().is_none());
        backend.write("[]").unwrap();
        assert_eq!(backend.read().unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_memory_backend_round_trip() {
        let backend = MemoryBackend::new();
        assert!(backend.read().unwrap().is_none());
        backend.write("[1]").unwrap();
        assert_eq!(backend.read().unwrap().as_deref(), Some("[1]"));
    }
}
