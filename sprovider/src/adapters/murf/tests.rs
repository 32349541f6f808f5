//! Focused unit tests for Murf adapter internals.

#![cfg(test)]

use serde_json::json;

use crate::ProviderErrorKind;

use super::serde_api::{MurfApiRequest, MurfApiResponse, extract_error_message};
use super::types::{MurfRequest, MurfResponse};

#[test]
fn api_request_uses_camel_case_voice_id() {
    let body = serde_json::to_value(MurfApiRequest::from(MurfRequest {
        text: "That sounds hard.".to_string(),
        voice_id: "en-IN-arohi".to_string(),
    }))
    .expect("serialize");

    assert_eq!(
        body,
        json!({"text": "That sounds hard.", "voiceId": "en-IN-arohi"})
    );
}

#[test]
fn response_conversion_requires_audio_file() {
    let ok: MurfApiResponse = serde_json::from_value(json!({
        "audioFile": "https://audio/x.mp3",
        "audioLengthInSeconds": 2.5,
        "wordDurations": []
    }))
    .expect("deserialize");
    let response = MurfResponse::try_from(ok).expect("convert");
    assert_eq!(response.audio_file, "https://audio/x.mp3");
    assert_eq!(response.audio_length_seconds, Some(2.5));

    let empty: MurfApiResponse =
        serde_json::from_value(json!({"audioFile": "  "})).expect("deserialize");
    let error = MurfResponse::try_from(empty).expect_err("blank url should fail");
    assert_eq!(error.kind, ProviderErrorKind::InvalidResponse);

    let missing: MurfApiResponse = serde_json::from_value(json!({})).expect("deserialize");
    assert!(MurfResponse::try_from(missing).is_err());
}

#[test]
fn extract_error_message_prefers_error_message_field() {
    assert_eq!(
        extract_error_message(r#"{"errorMessage":"Invalid api key","errorCode":401}"#).as_deref(),
        Some("Invalid api key")
    );
    assert_eq!(
        extract_error_message(r#"{"message":"quota exceeded"}"#).as_deref(),
        Some("quota exceeded")
    );
    assert_eq!(extract_error_message("<html>"), None);
}
