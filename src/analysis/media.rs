//! Attachment metadata inference.
//!
//! Scans the flattened string values for a media candidate — first a
//! URL, then (only if none) an inline base64 body — and fills in
//! whatever metadata fields the caller hasn't supplied. Caller-supplied
//! fields are never overwritten.
//!
//! This is marker-and-length sniffing over strings, not real content
//! inspection of bytes. False negatives are acceptable; failures from
//! the URL/base64/MIME helpers are treated as "no match", never raised.

use std::sync::LazyLock;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use regex::Regex;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::analysis::types::{MediaKind, MediaMetadata, MessageAnalysis};
use crate::config::SnifferConfig;

/// Optional `data:<mime>;base64,` prefix on an inline body.
static DATA_URI_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^data:[\w.+-]+/[\w.+-]+;base64,").unwrap()
});

/// Marker-based base64 classification, first match wins.
struct MarkerRule {
    markers: &'static [&'static str],
    media_type: MediaKind,
    mime_type: &'static str,
    file_name: &'static str,
}

static BASE64_MARKER_RULES: &[MarkerRule] = &[
    MarkerRule {
        markers: &["audio/ogg", ".ogg"],
        media_type: MediaKind::Audio,
        mime_type: "audio/ogg",
        file_name: "audio.ogg",
    },
    MarkerRule {
        markers: &["image/jpeg", ".jpg", "jpeg"],
        media_type: MediaKind::Image,
        mime_type: "image/jpeg",
        file_name: "image.jpg",
    },
];

/// Infer attachment metadata with default sniffer thresholds.
pub fn infer_media_metadata(body: &MediaMetadata, analysis: &MessageAnalysis) -> MediaMetadata {
    infer_media_metadata_with_config(body, analysis, &SnifferConfig::default())
}

/// Infer attachment metadata from a payload's string values.
///
/// `body` carries caller-supplied hints; any `Some` field is copied
/// through unchanged. Returns an empty record when no candidate is
/// found. Never fails.
pub fn infer_media_metadata_with_config(
    body: &MediaMetadata,
    analysis: &MessageAnalysis,
    config: &SnifferConfig,
) -> MediaMetadata {
    let mut meta = body.clone();
    let strings: Vec<&str> = analysis.values.iter().filter_map(Value::as_str).collect();

    // URL candidates outrank base64 candidates: once a URL is found the
    // base64 scan is skipped entirely.
    if let Some((raw, url)) = strings.iter().find_map(|s| parse_media_url(s).map(|u| (*s, u))) {
        debug!(url = raw, "Media candidate: URL");
        apply_url(&mut meta, raw, &url);
        return meta;
    }

    let base64_candidate = strings
        .iter()
        .find(|s| s.len() > config.min_base64_len && is_base64_body(s));
    if let Some(raw) = base64_candidate {
        debug!(len = raw.len(), "Media candidate: inline base64");
        apply_base64(&mut meta, raw, config);
    }

    meta
}

/// Relaxed URL-format test: an absolute http/https/ftp URL, or a
/// scheme-less `host/path` form. A top-level domain is not required
/// (`localhost/x` qualifies), but a bare word is not a host.
fn parse_media_url(s: &str) -> Option<Url> {
    if s.is_empty() || s.contains(char::is_whitespace) {
        return None;
    }
    match Url::parse(s) {
        Ok(url) if matches!(url.scheme(), "http" | "https" | "ftp") => Some(url),
        Ok(_) => None,
        Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse(&format!("http://{s}"))
            .ok()
            .filter(|url| {
                url.host_str()
                    .is_some_and(|host| host == "localhost" || host.contains('.'))
            }),
        Err(_) => None,
    }
}

fn apply_url(meta: &mut MediaMetadata, raw: &str, url: &Url) {
    if meta.media.is_none() {
        meta.media = Some(raw.to_string());
    }
    if meta.mime_type.is_none() {
        meta.mime_type = mime_guess::from_path(url.path())
            .first()
            .map(|m| m.essence_str().to_string());
    }
    if meta.media_type.is_none() {
        meta.media_type = Some(media_kind_of(meta.mime_type.as_deref()));
    }
    if meta.file_name.is_none() {
        let ext = meta
            .mime_type
            .as_deref()
            .and_then(|m| mime_guess::get_mime_extensions_str(m))
            .and_then(|exts| exts.first())
            .map(|e| e.to_string())
            .or_else(|| trailing_segment(url).map(str::to_string));
        if let Some(ext) = ext {
            meta.file_name = Some(format!("media.{ext}"));
        }
    }
}

fn apply_base64(meta: &mut MediaMetadata, raw: &str, config: &SnifferConfig) {
    if meta.media.is_none() {
        meta.media = Some(raw.to_string());
    }

    let content = raw.to_lowercase();
    let marker_hit = BASE64_MARKER_RULES
        .iter()
        .find(|rule| rule.markers.iter().any(|m| content.contains(m)));

    let (media_type, mime_type, file_name) = match marker_hit {
        Some(rule) => (rule.media_type, rule.mime_type, rule.file_name),
        None if raw.len() > config.video_len_threshold => {
            (MediaKind::Video, "video/mp4", "video.mp4")
        }
        None if raw.len() > config.audio_len_threshold => {
            (MediaKind::Audio, "audio/mpeg", "audio.mp3")
        }
        None => (MediaKind::Image, "image/png", "image.png"),
    };

    if meta.media_type.is_none() {
        meta.media_type = Some(media_type);
    }
    if meta.mime_type.is_none() {
        meta.mime_type = Some(mime_type.to_string());
    }
    if meta.file_name.is_none() {
        meta.file_name = Some(file_name.to_string());
    }
}

/// Base64-format test with an optional MIME (`data:` URI) prefix.
fn is_base64_body(s: &str) -> bool {
    let body = DATA_URI_PREFIX.find(s).map_or(s, |m| &s[m.end()..]);
    !body.is_empty() && BASE64.decode(body).is_ok()
}

/// Coarse category from a MIME type's primary part; unresolvable MIME
/// types fall back to `Document`.
fn media_kind_of(mime_type: Option<&str>) -> MediaKind {
    match mime_type.and_then(|m| m.split('/').next()) {
        Some("image") => MediaKind::Image,
        Some("audio") => MediaKind::Audio,
        Some("video") => MediaKind::Video,
        _ => MediaKind::Document,
    }
}

/// Last non-empty path segment of a URL, query stripped.
fn trailing_segment(url: &Url) -> Option<&str> {
    url.path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).next_back())
}
