use std::future::Future;
use std::pin::Pin;

use crate::{
    GenerationRequest, GenerationResponse, ProviderError, ProviderId, SpeechRequest,
    SpeechResponse,
};

pub type ProviderFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Text generation backend: one prompt in, first completion out.
pub trait GenerationProvider: Send + Sync {
    fn id(&self) -> ProviderId;

    fn generate<'a>(
        &'a self,
        request: GenerationRequest,
    ) -> ProviderFuture<'a, Result<GenerationResponse, ProviderError>>;
}

/// Text-to-speech backend: text and voice in, audio URL out.
pub trait SpeechProvider: Send + Sync {
    fn id(&self) -> ProviderId;

    fn synthesize<'a>(
        &'a self,
        request: SpeechRequest,
    ) -> ProviderFuture<'a, Result<SpeechResponse, ProviderError>>;
}
