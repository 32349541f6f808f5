#![cfg(feature = "provider-murf")]

use std::sync::{Arc, Mutex};

use serde_json::json;
use sprovider::adapters::murf::{
    MurfHttpTransport, MurfProvider, MurfRequest, MurfResponse, MurfTransport,
};
use sprovider::{
    ProviderError, ProviderErrorKind, ProviderFuture, ProviderId, SecretString,
    SecureCredentialManager, SpeechProvider, SpeechRequest,
};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Default)]
struct FakeTransport {
    captured_key: Mutex<Option<String>>,
    captured_request: Mutex<Option<MurfRequest>>,
}

impl MurfTransport for FakeTransport {
    fn generate_speech<'a>(
        &'a self,
        request: MurfRequest,
        api_key: SecretString,
    ) -> ProviderFuture<'a, Result<MurfResponse, ProviderError>> {
        Box::pin(async move {
            *self.captured_key.lock().expect("key lock") = Some(api_key.expose().to_string());
            *self.captured_request.lock().expect("request lock") = Some(request);

            Ok(MurfResponse {
                audio_file: "https://audio/x.mp3".to_string(),
                audio_length_seconds: Some(3.0),
            })
        })
    }
}

fn credentials_with_key(key: &str) -> Arc<SecureCredentialManager> {
    let credentials = Arc::new(SecureCredentialManager::new());
    credentials
        .set_api_key(ProviderId::Murf, key)
        .expect("key should set");
    credentials
}

#[tokio::test]
async fn synthesize_maps_murf_response_to_speech_response() {
    let transport = Arc::new(FakeTransport::default());
    let provider = MurfProvider::new(credentials_with_key("murf-live-1"), transport.clone());

    let response = provider
        .synthesize(SpeechRequest::new("That sounds hard...", "en-IN-arohi"))
        .await
        .expect("synthesis should succeed");
    assert_eq!(response.provider, ProviderId::Murf);
    assert_eq!(response.audio_url, "https://audio/x.mp3");
    assert_eq!(response.duration_seconds, Some(3.0));

    let captured = transport
        .captured_request
        .lock()
        .expect("request lock")
        .clone()
        .expect("request should be captured");
    assert_eq!(
        captured,
        MurfRequest {
            text: "That sounds hard...".to_string(),
            voice_id: "en-IN-arohi".to_string(),
        }
    );
    assert_eq!(
        transport.captured_key.lock().expect("key lock").as_deref(),
        Some("murf-live-1")
    );
}

#[tokio::test]
async fn synthesize_requires_murf_key() {
    let credentials = Arc::new(SecureCredentialManager::new());
    credentials
        .set_api_key(ProviderId::Gemini, "wrong-provider")
        .expect("key should set");
    let transport = Arc::new(FakeTransport::default());
    let provider = MurfProvider::new(credentials, transport.clone());

    let error = provider
        .synthesize(SpeechRequest::new("hello", "en-IN-arohi"))
        .await
        .expect_err("missing murf key should fail");
    assert_eq!(error.kind, ProviderErrorKind::Authentication);
    assert!(transport.captured_request.lock().expect("request lock").is_none());
}

#[tokio::test]
async fn http_transport_posts_text_and_voice_with_api_key_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/speech/generate"))
        .and(header("api-key", "murf-http-key"))
        .and(header("accept", "application/json"))
        .and(body_json(json!({"text": "Take a slow breath.", "voiceId": "en-IN-arohi"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "audioFile": "https://murf.example/audio/abc.wav",
            "audioLengthInSeconds": 1.75,
            "remainingCharacterCount": 9000
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let transport = MurfHttpTransport::new(reqwest::Client::new()).with_base_url(mock_server.uri());
    let provider = MurfProvider::new(credentials_with_key("murf-http-key"), Arc::new(transport));

    let response = provider
        .synthesize(SpeechRequest::new("Take a slow breath.", "en-IN-arohi"))
        .await
        .expect("synthesis should succeed");
    assert_eq!(response.audio_url, "https://murf.example/audio/abc.wav");
    assert_eq!(response.duration_seconds, Some(1.75));
}

#[tokio::test]
async fn http_transport_maps_error_body_and_status() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/speech/generate"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "errorMessage": "Invalid api key",
            "errorCode": 403
        })))
        .mount(&mock_server)
        .await;

    let transport = MurfHttpTransport::new(reqwest::Client::new()).with_base_url(mock_server.uri());
    let provider = MurfProvider::new(credentials_with_key("murf-bad"), Arc::new(transport));

    let error = provider
        .synthesize(SpeechRequest::new("hello", "en-IN-arohi"))
        .await
        .expect_err("403 should fail");
    assert_eq!(error.kind, ProviderErrorKind::Authentication);
    assert_eq!(error.status, Some(403));
    assert_eq!(error.message, "Invalid api key");
}

#[tokio::test]
async fn http_transport_rejects_response_without_audio_file() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"audioLengthInSeconds": 1.0})))
        .mount(&mock_server)
        .await;

    let transport = MurfHttpTransport::new(reqwest::Client::new()).with_base_url(mock_server.uri());
    let provider = MurfProvider::new(credentials_with_key("murf-key"), Arc::new(transport));

    let error = provider
        .synthesize(SpeechRequest::new("hello", "en-IN-arohi"))
        .await
        .expect_err("missing audio should fail");
    assert_eq!(error.kind, ProviderErrorKind::InvalidResponse);
}
