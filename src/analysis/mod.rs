//! Payload analysis pipeline.
//!
//! Every payload flows through:
//! 1. `flatten::flatten()` — pre-order walk into parallel (path, value) lists
//! 2. `detect::detect()` — two-phase rule chain assigns a `MessageKind`
//! 3. `media::infer_media_metadata()` — optional attachment sniffing,
//!    independent of detection
//!
//! All three stages are pure and synchronous; callers may invoke them
//! concurrently without coordination.

pub mod detect;
pub mod flatten;
pub mod media;
pub mod types;

use serde_json::Value;
use tracing::debug;

use crate::analysis::types::MessageAnalysis;
use crate::error::Result;

pub use media::{infer_media_metadata, infer_media_metadata_with_config};

/// Flatten a payload and classify it.
///
/// Never fails: an empty or scalar payload produces empty field lists and
/// `MessageKind::Unknown`.
pub fn analyze(payload: &Value) -> MessageAnalysis {
    let fields = flatten::flatten(payload);
    let (field_names, values): (Vec<String>, Vec<Value>) =
        fields.into_iter().map(|f| (f.path, f.value)).unzip();
    let kind = detect::detect(&field_names, &values);
    debug!(kind = kind.label(), fields = field_names.len(), "Payload analyzed");
    MessageAnalysis {
        field_names,
        values,
        kind,
    }
}

/// Classify a payload held as raw JSON text.
///
/// Convenience for gateways that haven't deserialized the body yet; the
/// only fallible surface in the crate.
pub fn analyze_json(raw: &str) -> Result<MessageAnalysis> {
    let payload: Value = serde_json::from_str(raw)?;
    Ok(analyze(&payload))
}
