//! Focused unit tests for Gemini adapter internals.

#![cfg(test)]

use serde_json::json;

use crate::{GenerationOptions, GenerationRequest, ProviderErrorKind};

use super::provider::GeminiProvider;
use super::serde_api::{GeminiApiResponse, build_api_request, extract_error_message};

#[test]
fn build_api_request_wraps_prompt_as_single_user_turn() {
    let request = GeminiProvider::build_gemini_request(GenerationRequest::new(
        "gemini-2.5-pro",
        "User: hi\nSahara:",
    ));
    let body = serde_json::to_value(build_api_request(&request)).expect("serialize");

    assert_eq!(
        body,
        json!({
            "contents": [{"role": "user", "parts": [{"text": "User: hi\nSahara:"}]}]
        })
    );
}

#[test]
fn build_api_request_includes_generation_config_when_options_set() {
    let request = GeminiProvider::build_gemini_request(
        GenerationRequest::new("gemini-2.5-pro", "hi").with_options(
            GenerationOptions::default()
                .with_temperature(0.7)
                .with_max_tokens(256),
        ),
    );
    let body = serde_json::to_value(build_api_request(&request)).expect("serialize");

    assert_eq!(body["generationConfig"]["maxOutputTokens"], json!(256));
    assert!(body["generationConfig"]["temperature"].is_number());
}

#[test]
fn response_conversion_concatenates_first_candidate_parts() {
    let parsed: GeminiApiResponse = serde_json::from_value(json!({
        "candidates": [
            {"content": {"role": "model", "parts": [{"text": "That sounds "}, {"text": "hard."}]}},
            {"content": {"role": "model", "parts": [{"text": "ignored"}]}}
        ],
        "usageMetadata": {"promptTokenCount": 12, "candidatesTokenCount": 3, "totalTokenCount": 15},
        "modelVersion": "gemini-2.5-pro-001"
    }))
    .expect("deserialize");

    let response = parsed.into_response("gemini-2.5-pro").expect("convert");
    assert_eq!(response.text, "That sounds hard.");
    assert_eq!(response.model, "gemini-2.5-pro-001");
    assert_eq!(response.usage.total_tokens, 15);
}

#[test]
fn blocked_prompt_without_candidates_is_invalid_response() {
    let parsed: GeminiApiResponse = serde_json::from_value(json!({
        "promptFeedback": {"blockReason": "SAFETY"}
    }))
    .expect("deserialize");

    let error = parsed
        .into_response("gemini-2.5-pro")
        .expect_err("blocked prompt should fail");
    assert_eq!(error.kind, ProviderErrorKind::InvalidResponse);
    assert!(error.message.contains("SAFETY"));
}

#[test]
fn extract_error_message_reads_google_error_envelope() {
    let body = r#"{"error":{"code":400,"message":"API key not valid","status":"INVALID_ARGUMENT"}}"#;
    assert_eq!(
        extract_error_message(body).as_deref(),
        Some("API key not valid")
    );
    assert_eq!(extract_error_message("not json"), None);
}
