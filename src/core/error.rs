//! Error taxonomy
//!
//! Generation and archive errors are surfaced to the user; persistence
//! errors are logged and swallowed at the store boundary since in-memory
//! state stays authoritative for the session.

use thiserror::Error;

/// Errors from the remote generation call
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The service reported a failure in its response body
    #[error("{0}")]
    Server(String),

    /// Non-success status with no parsable error body
    #[error("generation service returned HTTP {status}")]
    Http { status: u16 },

    /// Network-level failure before a response was received
    #[error("failed to reach generation service: {0}")]
    Transport(#[from] reqwest::Error),

    /// 2xx response whose body did not decode as an icon set
    #[error("invalid response from generation service: {0}")]
    Parse(String),

    /// Empty prompt, rejected before any network I/O
    #[error("prompt must not be empty")]
    InvalidPrompt,

    /// A generation is already in flight on this controller
    #[error("a generation is already in progress")]
    AlreadyRunning,
}

/// Errors from archive assembly
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// An archive build is already in flight on this builder
    #[error("an archive build is already in progress")]
    Busy,

    /// An icon payload could not be decoded to raw bytes
    #[error("could not decode icon payload for '{0}'")]
    Decode(String),

    /// The zip encoder failed
    #[error("could not create the archive: {0}")]
    Encode(String),

    /// The icon's src is a URL, not a self-contained payload
    #[error("icon '{0}' references a remote asset and cannot be archived")]
    RemoteSrc(String),
}

/// Errors from durable history storage
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("history serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
