//! Gemini provider implementation over transport and shared models.

use std::sync::Arc;

use crate::{
    GenerationProvider, GenerationRequest, GenerationResponse, ProviderError, ProviderFuture,
    ProviderId, SecureCredentialManager,
};

use super::transport::GeminiTransport;
use super::types::GeminiRequest;

#[derive(Clone)]
pub struct GeminiProvider {
    credentials: Arc<SecureCredentialManager>,
    transport: Arc<dyn GeminiTransport>,
}

impl GeminiProvider {
    pub fn new(
        credentials: Arc<SecureCredentialManager>,
        transport: Arc<dyn GeminiTransport>,
    ) -> Self {
        Self {
            credentials,
            transport,
        }
    }

    pub(crate) fn build_gemini_request(request: GenerationRequest) -> GeminiRequest {
        GeminiRequest {
            model: request.model,
            prompt: request.prompt,
            temperature: request.options.temperature,
            max_output_tokens: request.options.max_tokens,
        }
    }
}

impl GenerationProvider for GeminiProvider {
    fn id(&self) -> ProviderId {
        ProviderId::Gemini
    }

    fn generate<'a>(
        &'a self,
        request: GenerationRequest,
    ) -> ProviderFuture<'a, Result<GenerationResponse, ProviderError>> {
        Box::pin(async move {
            request.validate()?;
            let api_key = self.credentials.require_api_key(ProviderId::Gemini)?;
            let gemini_request = Self::build_gemini_request(request);
            let response = self
                .transport
                .generate_content(gemini_request, api_key)
                .await?;
            Ok(response.into_generation_response())
        })
    }
}
