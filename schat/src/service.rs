//! End-to-end turn orchestration: gate, screen, generate, synthesize.

use std::sync::Arc;

use scommon::{AccountId, TraceId};

use crate::{
    AccessGate, CRISIS_SAFETY_MESSAGE, ChatError, ChatErrorKind, CrisisScreen, NoopTurnHooks,
    ReplyGenerator, ScreeningResult, SpeechSynthesizer, TurnHooks, TurnPhase, TurnRequest,
    TurnResponse, TurnResult, TurnStatus,
};

#[derive(Clone)]
pub struct TurnService {
    gate: Arc<dyn AccessGate>,
    screen: CrisisScreen,
    generator: ReplyGenerator,
    synthesizer: SpeechSynthesizer,
    hooks: Arc<dyn TurnHooks>,
}

impl TurnService {
    pub fn builder(
        gate: Arc<dyn AccessGate>,
        generator: ReplyGenerator,
        synthesizer: SpeechSynthesizer,
    ) -> TurnServiceBuilder {
        TurnServiceBuilder::new(gate, generator, synthesizer)
    }

    pub fn screen(&self) -> &CrisisScreen {
        &self.screen
    }

    pub async fn run_turn(&self, request: TurnRequest) -> Result<TurnResult, ChatError> {
        let TurnRequest {
            credential,
            message,
            trace_id,
        } = request;
        let mut tracker = PhaseTracker::new(self.hooks.as_ref(), trace_id.as_ref());

        let account_id = self
            .authenticate(credential.as_deref())
            .await
            .map_err(|error| tracker.fail(error))?;
        tracker.advance(TurnPhase::Authenticated);

        if message.trim().is_empty() {
            return Err(tracker.fail(ChatError::invalid_request("message must not be empty")));
        }

        let screening = self.screen.screen(&message);
        if let ScreeningResult::Escalate { phrase } = &screening {
            tracing::info!(
                trace_id = trace_id.as_ref().map(TraceId::as_str),
                phrase_set = self.screen.phrase_set().version(),
                matched = phrase.as_str(),
                "crisis screen escalated turn"
            );
            tracker.advance(TurnPhase::CrisisShortCircuit);
            tracker.advance(TurnPhase::Responded);
            return Ok(TurnResult {
                account_id,
                reply: CRISIS_SAFETY_MESSAGE.to_string(),
                audio_url: None,
                screening,
            });
        }

        tracker.advance(TurnPhase::Generating);
        let reply = self
            .generator
            .generate(&message)
            .await
            .map_err(|error| tracker.fail(error))?;

        tracker.advance(TurnPhase::Synthesizing);
        let audio_url = self
            .synthesizer
            .synthesize(&reply)
            .await
            .map_err(|error| tracker.fail(error))?;

        tracker.advance(TurnPhase::Responded);
        Ok(TurnResult {
            account_id,
            reply,
            audio_url: Some(audio_url),
            screening,
        })
    }

    /// Runs a turn and shapes the outcome for a client. Upstream detail is logged, not returned.
    pub async fn respond(&self, request: TurnRequest) -> TurnResponse {
        let trace_id = request.trace_id.clone();
        match self.run_turn(request).await {
            Ok(result) => TurnResponse::ok(result.reply, result.audio_url),
            Err(error) => match error.kind {
                ChatErrorKind::Unauthenticated => {
                    TurnResponse::rejected(TurnStatus::Unauthorized, error.message)
                }
                ChatErrorKind::AccessDenied => {
                    TurnResponse::rejected(TurnStatus::Forbidden, error.message)
                }
                ChatErrorKind::InvalidRequest => {
                    TurnResponse::rejected(TurnStatus::BadRequest, error.message)
                }
                ChatErrorKind::Upstream => {
                    tracing::error!(
                        trace_id = trace_id.as_ref().map(TraceId::as_str),
                        phase = error.phase.map(TurnPhase::as_str),
                        error = %error.message,
                        "turn failed upstream"
                    );
                    TurnResponse::apology()
                }
            },
        }
    }

    async fn authenticate(&self, credential: Option<&str>) -> Result<AccountId, ChatError> {
        let credential = credential
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| ChatError::unauthenticated("Access token required"))?;

        self.gate.verify(credential).await
    }
}

pub struct TurnServiceBuilder {
    gate: Arc<dyn AccessGate>,
    screen: CrisisScreen,
    generator: ReplyGenerator,
    synthesizer: SpeechSynthesizer,
    hooks: Arc<dyn TurnHooks>,
}

impl TurnServiceBuilder {
    pub fn new(
        gate: Arc<dyn AccessGate>,
        generator: ReplyGenerator,
        synthesizer: SpeechSynthesizer,
    ) -> Self {
        Self {
            gate,
            screen: CrisisScreen::default(),
            generator,
            synthesizer,
            hooks: Arc::new(NoopTurnHooks),
        }
    }

    pub fn screen(mut self, screen: CrisisScreen) -> Self {
        self.screen = screen;
        self
    }

    pub fn hooks(mut self, hooks: Arc<dyn TurnHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn build(self) -> TurnService {
        TurnService {
            gate: self.gate,
            screen: self.screen,
            generator: self.generator,
            synthesizer: self.synthesizer,
            hooks: self.hooks,
        }
    }
}

struct PhaseTracker<'a> {
    hooks: &'a dyn TurnHooks,
    trace_id: Option<&'a TraceId>,
    phase: TurnPhase,
}

impl<'a> PhaseTracker<'a> {
    fn new(hooks: &'a dyn TurnHooks, trace_id: Option<&'a TraceId>) -> Self {
        Self {
            hooks,
            trace_id,
            phase: TurnPhase::AuthPending,
        }
    }

    fn advance(&mut self, next: TurnPhase) {
        self.hooks.on_transition(self.phase, next, self.trace_id);
        self.phase = next;
    }

    // Auth failures stop the turn before it starts, so they never enter `Failed`.
    fn fail(&mut self, error: ChatError) -> ChatError {
        let error = error.with_phase(self.phase);
        self.hooks.on_failure(self.phase, &error, self.trace_id);
        if self.phase != TurnPhase::AuthPending {
            self.advance(TurnPhase::Failed);
        }
        error
    }
}
