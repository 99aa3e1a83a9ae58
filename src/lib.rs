//! Payload Triage — heuristic message classification for the gateway.
//!
//! Two entry points, both pure functions over a JSON payload:
//! - [`analyze`] flattens a nested payload and assigns a [`MessageKind`].
//! - [`infer_media_metadata`] sniffs attachment metadata from string values.

pub mod analysis;
pub mod config;
pub mod error;

pub use analysis::types::{MediaKind, MediaMetadata, MessageAnalysis, MessageKind};
pub use analysis::{analyze, analyze_json, infer_media_metadata, infer_media_metadata_with_config};
pub use config::SnifferConfig;
pub use error::{Error, Result};
