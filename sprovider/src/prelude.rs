//! Common `sprovider` imports for downstream crates.

pub use crate::{
    CallPolicy, GenerationProvider, GenerationRequest, GenerationResponse, NoopOperationHooks,
    ProviderError, ProviderErrorKind, ProviderId, ProviderOperationHooks,
    SecureCredentialManager, SpeechProvider, SpeechRequest, SpeechResponse, TokenUsage,
    execute_with_timeout,
};
pub use scommon::{BoxFuture, GenerationOptions};
