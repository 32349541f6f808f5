//! Unified facade and HTTP server over the sahara workspace crates.
//!
//! This crate wires the credential store, session issuer, provider clients and
//! turn service together from environment configuration, and exposes them
//! through an axum router. It also re-exports the workspace crates so
//! embedders need a single dependency.
//!
//! ```rust
//! use sahara::{CRISIS_SAFETY_MESSAGE, CrisisScreen};
//!
//! let screen = CrisisScreen::default();
//! assert!(screen.is_crisis("Some days I think about SUICIDE"));
//! assert!(CRISIS_SAFETY_MESSAGE.contains("You're not alone"));
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod prelude;
pub mod providers;
pub mod runtime;

pub use sauth;
pub use schat;
pub use scommon;
pub use sobserve;
pub use sprovider;

pub use api::{ApiError, create_router};
pub use config::ServerConfig;
pub use error::{ConfigError, ConfigErrorKind, StartupError, StartupErrorKind};
pub use providers::{ProviderBuildConfig, ProviderClients, build_providers};
pub use runtime::{
    AppState, build_app_state, build_state_with, default_provider_hooks, default_turn_hooks,
};

pub use sauth::{
    Account, AccountBackend, AccountBackendConfig, AuthError, AuthErrorKind, CredentialStore,
    InMemoryAccountBackend, SessionAccessGate, SessionConfig, SessionIssuer,
    SqliteAccountBackend, TokenError, TokenErrorKind, TokenPair,
};
pub use schat::{
    AccessGate, CRISIS_SAFETY_MESSAGE, ChatError, ChatErrorKind, CrisisPhraseSet, CrisisScreen,
    Persona, ReplyGenerator, ScreeningResult, SpeechSynthesizer, TurnHooks, TurnPhase,
    TurnRequest, TurnResponse, TurnResult, TurnService, TurnStatus, UPSTREAM_APOLOGY,
};
pub use scommon::{AccountId, BoxFuture, SecretString, TraceId};
pub use sprovider::{
    CallPolicy, GenerationProvider, GenerationRequest, GenerationResponse, ProviderError,
    ProviderErrorKind, ProviderFuture, ProviderId, ProviderOperationHooks, SpeechProvider,
    SpeechRequest, SpeechResponse, TokenUsage,
};
