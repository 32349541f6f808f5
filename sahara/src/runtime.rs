//! Runtime wiring: account store, session issuer, providers and turn service.

use std::sync::Arc;

use sauth::{
    AccountBackend, CredentialStore, SessionAccessGate, SessionIssuer, create_account_backend,
};
use schat::{ReplyGenerator, SpeechSynthesizer, TurnHooks, TurnService};
use sobserve::{
    FanoutProviderHooks, FanoutTurnHooks, MetricsObservabilityHooks, SafeProviderHooks,
    SafeTurnHooks, TracingObservabilityHooks,
};
use sprovider::{CallPolicy, ProviderOperationHooks};

use crate::providers::{ProviderBuildConfig, build_providers};
use crate::{ServerConfig, StartupError};

/// Shared state handed to every HTTP handler.
#[derive(Clone)]
pub struct AppState {
    pub credentials: CredentialStore,
    pub sessions: Arc<SessionIssuer>,
    pub turns: Arc<TurnService>,
}

/// Tracing and metrics observers, each isolated from panics.
pub fn default_provider_hooks() -> Arc<dyn ProviderOperationHooks> {
    Arc::new(
        FanoutProviderHooks::new()
            .with(Arc::new(SafeProviderHooks::new(TracingObservabilityHooks)))
            .with(Arc::new(SafeProviderHooks::new(MetricsObservabilityHooks))),
    )
}

pub fn default_turn_hooks() -> Arc<dyn TurnHooks> {
    Arc::new(
        FanoutTurnHooks::new()
            .with(Arc::new(SafeTurnHooks::new(TracingObservabilityHooks)))
            .with(Arc::new(SafeTurnHooks::new(MetricsObservabilityHooks))),
    )
}

pub fn build_app_state(config: &ServerConfig) -> Result<AppState, StartupError> {
    let backend = create_account_backend(config.database.clone())?;
    let sessions = Arc::new(SessionIssuer::new(config.session_config())?);
    let providers = build_providers(ProviderBuildConfig::from(config))?;

    let policy = CallPolicy::new(config.provider_timeout);
    let provider_hooks = default_provider_hooks();
    let generator = ReplyGenerator::new(providers.generation)
        .with_model(config.gemini_model.clone())
        .with_policy(policy.clone())
        .with_hooks(Arc::clone(&provider_hooks));
    let synthesizer = SpeechSynthesizer::new(providers.speech)
        .with_voice_id(config.murf_voice_id.clone())
        .with_policy(policy)
        .with_hooks(provider_hooks);

    tracing::info!(
        model = %config.gemini_model,
        voice_id = %config.murf_voice_id,
        timeout_secs = config.provider_timeout.as_secs(),
        "runtime wired"
    );

    Ok(build_state_with(
        backend,
        sessions,
        generator,
        synthesizer,
        default_turn_hooks(),
    ))
}

/// Assembles state from already-built parts. Tests use this to inject fake providers.
pub fn build_state_with(
    backend: Arc<dyn AccountBackend>,
    sessions: Arc<SessionIssuer>,
    generator: ReplyGenerator,
    synthesizer: SpeechSynthesizer,
    turn_hooks: Arc<dyn TurnHooks>,
) -> AppState {
    let gate = Arc::new(SessionAccessGate::new(Arc::clone(&sessions)));
    let turns = TurnService::builder(gate, generator, synthesizer)
        .hooks(turn_hooks)
        .build();

    AppState {
        credentials: CredentialStore::new(backend),
        sessions,
        turns: Arc::new(turns),
    }
}
