//! Shared types for payload analysis.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ── Message kind ────────────────────────────────────────────────────

/// Semantic kind assigned to a payload.
///
/// Closed set; `Unknown` is the total fallback, never an absence. Wire
/// names are lowercase to match the gateway contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Sticker,
    Reaction,
    Template,
    Buttons,
    List,
    Location,
    Contact,
    Poll,
    Status,
    /// Push-to-video (round video note).
    Ptv,
    Audio,
    Media,
    Text,
    Unknown,
}

impl MessageKind {
    /// Short label for logging.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Sticker => "sticker",
            Self::Reaction => "reaction",
            Self::Template => "template",
            Self::Buttons => "buttons",
            Self::List => "list",
            Self::Location => "location",
            Self::Contact => "contact",
            Self::Poll => "poll",
            Self::Status => "status",
            Self::Ptv => "ptv",
            Self::Audio => "audio",
            Self::Media => "media",
            Self::Text => "text",
            Self::Unknown => "unknown",
        }
    }
}

// ── Analysis result ─────────────────────────────────────────────────

/// Flattened view of a payload plus its detected kind.
///
/// `field_names` and `values` are parallel: entry `i` of one describes
/// entry `i` of the other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageAnalysis {
    /// Dotted/bracket-indexed paths in pre-order traversal order.
    pub field_names: Vec<String>,
    /// Raw values, parallel to `field_names`.
    pub values: Vec<Value>,
    /// Detected message kind.
    #[serde(rename = "type")]
    pub kind: MessageKind,
}

// ── Media metadata ──────────────────────────────────────────────────

/// Coarse attachment category derived from a MIME type's primary part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Audio,
    Video,
    Document,
}

/// Partial attachment metadata.
///
/// Doubles as the caller-supplied hint record: any field already `Some`
/// when passed into the inferer is copied through and never recomputed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaMetadata {
    /// Attachment category.
    #[serde(rename = "mediatype", default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<MediaKind>,
    /// Full MIME type, e.g. `image/png`.
    #[serde(rename = "mimetype", default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    /// Synthesized or caller-supplied filename.
    #[serde(rename = "fileName", default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    /// Raw media reference: a URL or the base64 body itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<String>,
}

impl MediaMetadata {
    /// True when no field has been inferred or supplied.
    pub fn is_empty(&self) -> bool {
        self.media_type.is_none()
            && self.mime_type.is_none()
            && self.file_name.is_none()
            && self.media.is_none()
    }
}
