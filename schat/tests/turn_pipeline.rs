use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use schat::prelude::*;
use scommon::BoxFuture;
use sprovider::{
    GenerationProvider, GenerationRequest, GenerationResponse, ProviderError, ProviderFuture,
    ProviderId, SpeechProvider, SpeechRequest, SpeechResponse, TokenUsage,
};

type CallLog = Arc<Mutex<Vec<&'static str>>>;

struct FixedGate;

impl AccessGate for FixedGate {
    fn verify<'a>(&'a self, credential: &'a str) -> BoxFuture<'a, Result<AccountId, ChatError>> {
        Box::pin(async move {
            if credential == "access-asha" {
                Ok(AccountId::from("asha-id"))
            } else {
                Err(ChatError::access_denied("Invalid or expired token"))
            }
        })
    }
}

struct FakeGeneration {
    reply: Result<String, ProviderError>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
    log: CallLog,
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
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.log.lock().expect("log lock").push("generate");
            self.prompts.lock().expect("prompts lock").push(request.prompt);
            let text = self.reply.clone()?;
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
    calls: AtomicUsize,
    texts: Mutex<Vec<String>>,
    log: CallLog,
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
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.log.lock().expect("log lock").push("synthesize");
            self.texts.lock().expect("texts lock").push(request.text);
            Ok(SpeechResponse {
                provider: ProviderId::Murf,
                audio_url: "https://audio/x.mp3".to_string(),
                duration_seconds: None,
            })
        })
    }
}

struct Harness {
    service: TurnService,
    generation: Arc<FakeGeneration>,
    speech: Arc<FakeSpeech>,
    log: CallLog,
}

fn harness(reply: Result<String, ProviderError>) -> Harness {
    let log: CallLog = Arc::new(Mutex::new(Vec::new()));
    let generation = Arc::new(FakeGeneration {
        reply,
        calls: AtomicUsize::new(0),
        prompts: Mutex::new(Vec::new()),
        log: log.clone(),
    });
    let speech = Arc::new(FakeSpeech {
        calls: AtomicUsize::new(0),
        texts: Mutex::new(Vec::new()),
        log: log.clone(),
    });

    let service = TurnService::builder(
        Arc::new(FixedGate),
        ReplyGenerator::new(generation.clone()),
        SpeechSynthesizer::new(speech.clone()),
    )
    .build();

    Harness {
        service,
        generation,
        speech,
        log,
    }
}

#[tokio::test]
async fn clear_message_calls_generation_then_synthesis_once_each() {
    let harness = harness(Ok("That sounds hard...".to_string()));

    let result = harness
        .service
        .run_turn(
            TurnRequest::new("I feel really anxious about exams")
                .with_credential("access-asha")
                .with_trace_id("trace-1"),
        )
        .await
        .expect("turn should succeed");

    assert_eq!(result.account_id.as_str(), "asha-id");
    assert_eq!(result.reply, "That sounds hard...");
    assert_eq!(result.audio_url.as_deref(), Some("https://audio/x.mp3"));
    assert_eq!(result.screening, ScreeningResult::Clear);
    assert!(!result.is_crisis());

    assert_eq!(harness.generation.calls.load(Ordering::SeqCst), 1);
    assert_eq!(harness.speech.calls.load(Ordering::SeqCst), 1);
    assert_eq!(
        harness.log.lock().expect("log lock").clone(),
        vec!["generate", "synthesize"]
    );
    assert_eq!(
        harness.speech.texts.lock().expect("texts lock").clone(),
        vec!["That sounds hard...".to_string()]
    );
    let prompts = harness.generation.prompts.lock().expect("prompts lock");
    assert!(prompts[0].contains("Safety protocol"));
    assert!(prompts[0].ends_with("User: I feel really anxious about exams\nSahara:"));
}

#[tokio::test]
async fn crisis_message_in_any_case_short_circuits_without_provider_calls() {
    let harness = harness(Ok("should never be used".to_string()));

    for message in [
        "I want to end my life",
        "i WANT TO DIE",
        "thinking about SUICIDE lately",
        "I keep wanting to kill myself",
        "is self-harm normal?",
    ] {
        let result = harness
            .service
            .run_turn(TurnRequest::new(message).with_credential("access-asha"))
            .await
            .expect("crisis turn is a successful turn");

        assert_eq!(result.reply, CRISIS_SAFETY_MESSAGE, "{message}");
        assert!(result.audio_url.is_none());
        assert!(result.is_crisis());
    }

    assert_eq!(harness.generation.calls.load(Ordering::SeqCst), 0);
    assert_eq!(harness.speech.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn generation_failure_returns_apology_and_skips_synthesis() {
    let harness = harness(Err(ProviderError::from_status(503, "model overloaded")));

    let response = harness
        .service
        .respond(TurnRequest::new("hello").with_credential("access-asha"))
        .await;

    assert_eq!(response.status, TurnStatus::ServerError);
    assert_eq!(response.reply.as_deref(), Some(UPSTREAM_APOLOGY));
    assert!(response.audio_url.is_none());
    assert!(response.message.is_none());
    assert_eq!(harness.generation.calls.load(Ordering::SeqCst), 1);
    assert_eq!(harness.speech.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn rejected_credentials_never_reach_providers() {
    let harness = harness(Ok("hi".to_string()));

    let missing = harness.service.respond(TurnRequest::new("hello")).await;
    assert_eq!(missing.status, TurnStatus::Unauthorized);

    let forged = harness
        .service
        .respond(TurnRequest::new("I want to die").with_credential("forged"))
        .await;
    assert_eq!(forged.status, TurnStatus::Forbidden);
    assert!(forged.reply.is_none());

    assert_eq!(harness.generation.calls.load(Ordering::SeqCst), 0);
    assert_eq!(harness.speech.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn empty_message_is_rejected_before_screening_or_generation() {
    let harness = harness(Ok("hi".to_string()));

    let error = harness
        .service
        .run_turn(TurnRequest::new(" \n\t").with_credential("access-asha"))
        .await
        .expect_err("blank message should fail");
    assert_eq!(error.kind, ChatErrorKind::InvalidRequest);
    assert_eq!(error.phase, Some(TurnPhase::Authenticated));
    assert_eq!(harness.generation.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn custom_phrase_set_extends_screen_without_pipeline_changes() {
    let log: CallLog = Arc::new(Mutex::new(Vec::new()));
    let generation = Arc::new(FakeGeneration {
        reply: Ok("ok".to_string()),
        calls: AtomicUsize::new(0),
        prompts: Mutex::new(Vec::new()),
        log: log.clone(),
    });
    let speech = Arc::new(FakeSpeech {
        calls: AtomicUsize::new(0),
        texts: Mutex::new(Vec::new()),
        log,
    });
    let service = TurnService::builder(
        Arc::new(FixedGate),
        ReplyGenerator::new(generation.clone()),
        SpeechSynthesizer::new(speech.clone()),
    )
    .screen(CrisisScreen::new(
        CrisisPhraseSet::v1().with_phrase("no reason to live"),
    ))
    .build();

    let result = service
        .run_turn(TurnRequest::new("There is No Reason To Live").with_credential("access-asha"))
        .await
        .expect("turn should succeed");
    assert_eq!(
        result.screening,
        ScreeningResult::Escalate {
            phrase: "no reason to live".to_string()
        }
    );
    assert_eq!(generation.calls.load(Ordering::SeqCst), 0);
    assert_eq!(speech.calls.load(Ordering::SeqCst), 0);
}
