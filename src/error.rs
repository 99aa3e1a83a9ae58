//! Error types for Payload Triage.
//!
//! The heuristic core never fails: malformed or empty payload shapes degrade
//! to `MessageKind::Unknown` or an empty metadata record. The only fallible
//! surface is deserializing raw JSON text in `analyze_json`.

/// Top-level error type for the classifier.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid payload JSON: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Result type alias for the classifier.
pub type Result<T> = std::result::Result<T, Error>;
