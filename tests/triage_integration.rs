//! Integration tests for the public classification surface.
//!
//! Exercises `analyze` + `infer_media_metadata` the way the gateway
//! does: realistic nested payloads in, wire-shaped JSON out.

use serde_json::json;

use payload_triage::{
    MediaKind, MediaMetadata, MessageKind, SnifferConfig, analyze, analyze_json,
    infer_media_metadata, infer_media_metadata_with_config,
};

#[test]
fn inbound_sticker_payload() {
    let payload = json!({
        "key": {"remoteJid": "123@s.whatsapp.net", "fromMe": false},
        "message": {
            "stickerMessage": {"url": "https://cdn.test/enc", "isAnimated": false}
        }
    });
    let analysis = analyze(&payload);
    assert_eq!(analysis.kind, MessageKind::Sticker);
    assert_eq!(analysis.field_names.len(), analysis.values.len());
    assert!(analysis.field_names.contains(&"message.stickerMessage.url".to_string()));
}

#[test]
fn outbound_list_payload() {
    let payload = json!({
        "title": "Menu",
        "buttonText": "Pick one",
        "sections": [
            {"title": "Mains", "rows": [{"rowId": "1", "title": "Pasta"}]}
        ]
    });
    assert_eq!(analyze(&payload).kind, MessageKind::List);
}

#[test]
fn poll_creation_payload() {
    let payload = json!({
        "name": "Lunch?",
        "selectableCount": 1,
        "values": ["yes", "no"]
    });
    assert_eq!(analyze(&payload).kind, MessageKind::Poll);
}

#[test]
fn contact_payload_via_wuid() {
    let payload = json!({"contactMessage": {"wuid": "5511999999999", "displayName": "Ana"}});
    assert_eq!(analyze(&payload).kind, MessageKind::Contact);
}

#[test]
fn text_payload_with_harmless_content() {
    let analysis = analyze(&json!({"text": "hi"}));
    assert_eq!(analysis.kind, MessageKind::Text);
}

#[test]
fn content_phase_overrides_field_phase_end_to_end() {
    let payload = json!({"template": 1, "note": "tap the button below"});
    assert_eq!(analyze(&payload).kind, MessageKind::Buttons);
}

#[test]
fn analysis_serializes_to_the_wire_contract() {
    let analysis = analyze(&json!({"latitude": 1.0, "longitude": 2.0}));
    let wire = serde_json::to_value(&analysis).unwrap();
    assert_eq!(wire["type"], "location");
    assert_eq!(wire["fieldNames"], json!(["latitude", "longitude"]));
    assert_eq!(wire["values"], json!([1.0, 2.0]));
}

#[test]
fn analyze_json_entry_point() {
    let analysis = analyze_json(r#"{"message": {"audioMessage": {"seconds": 3}}}"#).unwrap();
    assert_eq!(analysis.kind, MessageKind::Audio);
    assert!(analyze_json("not json").is_err());
}

#[test]
fn media_inference_from_url_in_nested_payload() {
    let payload = json!({
        "message": {"documentMessage": {"url": "https://files.test/report.pdf"}}
    });
    let analysis = analyze(&payload);
    let meta = infer_media_metadata(&MediaMetadata::default(), &analysis);
    assert_eq!(meta.media.as_deref(), Some("https://files.test/report.pdf"));
    assert_eq!(meta.mime_type.as_deref(), Some("application/pdf"));
    assert_eq!(meta.media_type, Some(MediaKind::Document));
    assert_eq!(meta.file_name.as_deref(), Some("media.pdf"));
}

#[test]
fn media_inference_respects_caller_hints() {
    let analysis = analyze(&json!({"media": "https://files.test/report.pdf"}));
    let body = MediaMetadata {
        mime_type: Some("x/y".into()),
        ..Default::default()
    };
    let meta = infer_media_metadata(&body, &analysis);
    assert_eq!(meta.mime_type.as_deref(), Some("x/y"));
}

#[test]
fn media_inference_from_inline_base64() {
    let payload = json!({"media": "A".repeat(5_000_000)});
    let analysis = analyze(&payload);
    let meta = infer_media_metadata(&MediaMetadata::default(), &analysis);
    assert_eq!(meta.media_type, Some(MediaKind::Video));
    assert_eq!(meta.mime_type.as_deref(), Some("video/mp4"));
    assert_eq!(meta.file_name.as_deref(), Some("video.mp4"));
}

#[test]
fn media_inference_with_tightened_thresholds() {
    let analysis = analyze(&json!({"media": "A".repeat(1_000)}));
    let config = SnifferConfig {
        min_base64_len: 200,
        video_len_threshold: 500,
        audio_len_threshold: 100,
    };
    let meta = infer_media_metadata_with_config(&MediaMetadata::default(), &analysis, &config);
    assert_eq!(meta.media_type, Some(MediaKind::Video));
}

#[test]
fn no_media_signal_yields_empty_record() {
    let analysis = analyze(&json!({"text": "see you tomorrow"}));
    let meta = infer_media_metadata(&MediaMetadata::default(), &analysis);
    assert!(meta.is_empty());
}
