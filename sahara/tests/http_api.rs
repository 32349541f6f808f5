use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use sahara::{
    AccountBackend, CRISIS_SAFETY_MESSAGE, GenerationProvider, GenerationRequest,
    GenerationResponse, InMemoryAccountBackend, ProviderError, ProviderFuture, ProviderId,
    ReplyGenerator, SessionConfig, SessionIssuer, SpeechProvider, SpeechRequest, SpeechResponse,
    SpeechSynthesizer, TokenUsage, UPSTREAM_APOLOGY, build_state_with, create_router,
};
use serde_json::{Value, json};
use tower::ServiceExt;

#[derive(Default)]
struct CallLog {
    calls: Mutex<Vec<String>>,
}

impl CallLog {
    fn push(&self, entry: String) {
        self.calls.lock().expect("calls lock").push(entry);
    }

    fn snapshot(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock").clone()
    }
}

struct FakeGeneration {
    log: Arc<CallLog>,
    outcome: Result<String, ProviderError>,
}

impl GenerationProvider for FakeGeneration {
    fn id(&self) -> ProviderId {
        ProviderId::Gemini
    }

    fn generate<'a>(
        &'a self,
        request: GenerationRequest,
    ) -> ProviderFuture<'a, Result<GenerationResponse, ProviderError>> {
        Box::pin(async move {
            self.log.push("generate".to_string());
            let text = self.outcome.clone()?;
            Ok(GenerationResponse {
                provider: ProviderId::Gemini,
                model: request.model,
                text,
                usage: TokenUsage::default(),
            })
        })
    }
}

struct FakeSpeech {
    log: Arc<CallLog>,
}

impl SpeechProvider for FakeSpeech {
    fn id(&self) -> ProviderId {
        ProviderId::Murf
    }

    fn synthesize<'a>(
        &'a self,
        request: SpeechRequest,
    ) -> ProviderFuture<'a, Result<SpeechResponse, ProviderError>> {
        Box::pin(async move {
            self.log.push(format!("synthesize:{}", request.text));
            Ok(SpeechResponse {
                provider: ProviderId::Murf,
                audio_url: "https://audio/x.mp3".to_string(),
                duration_seconds: Some(2.5),
            })
        })
    }
}

struct Harness {
    app: Router,
    log: Arc<CallLog>,
    sessions: Arc<SessionIssuer>,
}

fn harness_with(outcome: Result<String, ProviderError>) -> Harness {
    let log = Arc::new(CallLog::default());
    let backend: Arc<dyn AccountBackend> = Arc::new(InMemoryAccountBackend::new());
    let sessions = Arc::new(
        SessionIssuer::new(SessionConfig::new("test-access-secret", "test-refresh-secret"))
            .expect("session config should be valid"),
    );
    let generator = ReplyGenerator::new(Arc::new(FakeGeneration {
        log: Arc::clone(&log),
        outcome,
    }));
    let synthesizer = SpeechSynthesizer::new(Arc::new(FakeSpeech {
        log: Arc::clone(&log),
    }));

    let state = build_state_with(
        backend,
        Arc::clone(&sessions),
        generator,
        synthesizer,
        sahara::default_turn_hooks(),
    );

    Harness {
        app: create_router(state, None),
        log,
        sessions,
    }
}

fn harness() -> Harness {
    harness_with(Ok("That sounds hard...".to_string()))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router should respond");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("body should be json")
    };
    (status, body)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request should build")
}

fn chat_request(token: Option<&str>, message: &str) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/api/chat")
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder
        .body(Body::from(json!({ "message": message }).to_string()))
        .expect("request should build")
}

async fn register(app: &Router, username: &str, password: &str) -> (StatusCode, Value) {
    send(
        app,
        post_json(
            "/api/auth/register",
            json!({ "username": username, "password": password }),
        ),
    )
    .await
}

fn access_token(body: &Value) -> String {
    body["accessToken"]
        .as_str()
        .expect("access token should be present")
        .to_string()
}

#[tokio::test]
async fn registered_user_gets_reply_and_audio_for_an_ordinary_message() {
    let harness = harness();
    let (status, body) = register(&harness.app, "asha", "p@ss1234").await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body["refreshToken"].is_string());
    let token = access_token(&body);

    let (status, body) = send(
        &harness.app,
        chat_request(Some(&token), "I feel really anxious about exams"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reply"], "That sounds hard...");
    assert_eq!(body["audioUrl"], "https://audio/x.mp3");
    assert_eq!(
        harness.log.snapshot(),
        vec![
            "generate".to_string(),
            "synthesize:That sounds hard...".to_string()
        ]
    );
}

#[tokio::test]
async fn crisis_message_returns_safety_text_without_any_provider_call() {
    let harness = harness();
    let (_, body) = register(&harness.app, "asha", "p@ss1234").await;
    let token = access_token(&body);

    let (status, body) = send(
        &harness.app,
        chat_request(Some(&token), "I want to end my life"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reply"], CRISIS_SAFETY_MESSAGE);
    assert!(body.get("audioUrl").is_none());
    assert!(harness.log.snapshot().is_empty());
}

#[tokio::test]
async fn generation_failure_returns_the_apology_and_skips_synthesis() {
    let harness = harness_with(Err(ProviderError::from_status(503, "model overloaded")));
    let (_, body) = register(&harness.app, "asha", "p@ss1234").await;
    let token = access_token(&body);

    let (status, body) = send(
        &harness.app,
        chat_request(Some(&token), "I feel really anxious about exams"),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["reply"], UPSTREAM_APOLOGY);
    assert!(!body.to_string().contains("overloaded"));
    assert_eq!(harness.log.snapshot(), vec!["generate".to_string()]);
}

#[tokio::test]
async fn duplicate_registration_and_wrong_password_are_rejected() {
    let harness = harness();
    let (status, _) = register(&harness.app, "asha", "p@ss1234").await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = register(&harness.app, "asha", "another-pass").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "User already exists");

    let (status, body) = send(
        &harness.app,
        post_json(
            "/auth/login",
            json!({ "username": "asha", "password": "p@ss1235" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid credentials");

    let (status, body) = send(
        &harness.app,
        post_json(
            "/auth/login",
            json!({ "username": "asha", "password": "p@ss1234" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["accessToken"].is_string());
    assert!(body["refreshToken"].is_string());
}

#[tokio::test]
async fn chat_requires_a_valid_access_token() {
    let harness = harness();

    let (status, body) = send(&harness.app, chat_request(None, "hello")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body["message"].is_string());

    let (status, _) = send(&harness.app, chat_request(Some("not-a-jwt"), "hello")).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let foreign = SessionIssuer::new(SessionConfig::new("other-access", "other-refresh"))
        .expect("session config should be valid")
        .issue(&sahara::AccountId::new("someone"))
        .expect("token should sign");
    let (status, _) = send(
        &harness.app,
        chat_request(Some(&foreign.access_token), "hello"),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (_, body) = register(&harness.app, "asha", "p@ss1234").await;
    let refresh = body["refreshToken"].as_str().expect("refresh token");
    let (status, _) = send(&harness.app, chat_request(Some(refresh), "hello")).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    assert!(harness.log.snapshot().is_empty());
}

#[tokio::test]
async fn empty_message_and_malformed_bodies_are_bad_requests() {
    let harness = harness();
    let (_, body) = register(&harness.app, "asha", "p@ss1234").await;
    let token = access_token(&body);

    let (status, body) = send(&harness.app, chat_request(Some(&token), "   ")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());

    let (status, body) = send(
        &harness.app,
        post_json("/auth/register", json!({ "username": "", "password": "x" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());

    let malformed = Request::builder()
        .method("POST")
        .uri("/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .expect("request should build");
    let (status, body) = send(&harness.app, malformed).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());
    assert!(harness.log.snapshot().is_empty());
}

#[tokio::test]
async fn refresh_token_redeems_a_new_access_token() {
    let harness = harness();
    let (_, body) = register(&harness.app, "asha", "p@ss1234").await;
    let refresh = body["refreshToken"].as_str().expect("refresh token").to_string();
    let access = access_token(&body);

    let (status, body) = send(
        &harness.app,
        post_json("/api/auth/refresh", json!({ "refreshToken": refresh })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let renewed = access_token(&body);
    assert!(body.get("refreshToken").is_none());
    assert!(harness.sessions.verify_access(&renewed).is_ok());

    let (status, body) = send(
        &harness.app,
        post_json("/api/auth/refresh", json!({ "refreshToken": access })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid or expired refresh token");

    let orphan = harness
        .sessions
        .issue(&sahara::AccountId::new("deleted-account"))
        .expect("token should sign");
    let (status, _) = send(
        &harness.app,
        post_json(
            "/auth/refresh",
            json!({ "refreshToken": orphan.refresh_token }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn health_is_served_at_both_prefixes() {
    let harness = harness();
    for uri in ["/health", "/api/health"] {
        let request = Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request should build");
        let (status, body) = send(&harness.app, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "ok" }));
    }
}
