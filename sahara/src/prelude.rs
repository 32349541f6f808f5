//! Common imports for applications embedding the sahara server.

pub use crate::{
    AccountId, AppState, ChatError, ChatErrorKind, CredentialStore, CrisisScreen,
    GenerationProvider, ProviderError, ProviderId, ReplyGenerator, ServerConfig, SessionIssuer,
    SpeechProvider, SpeechSynthesizer, TurnRequest, TurnResponse, TurnService, build_app_state,
    create_router,
};
