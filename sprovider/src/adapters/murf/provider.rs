//! Murf provider implementation over transport and shared models.

use std::sync::Arc;

use crate::{
    ProviderError, ProviderFuture, ProviderId, SecureCredentialManager, SpeechProvider,
    SpeechRequest, SpeechResponse,
};

use super::transport::MurfTransport;
use super::types::MurfRequest;

#[derive(Clone)]
pub struct MurfProvider {
    credentials: Arc<SecureCredentialManager>,
    transport: Arc<dyn MurfTransport>,
}

impl MurfProvider {
    pub fn new(credentials: Arc<SecureCredentialManager>, transport: Arc<dyn MurfTransport>) -> Self {
        Self {
            credentials,
            transport,
        }
    }
}

impl SpeechProvider for MurfProvider {
    fn id(&self) -> ProviderId {
        ProviderId::Murf
    }

    fn synthesize<'a>(
        &'a self,
        request: SpeechRequest,
    ) -> ProviderFuture<'a, Result<SpeechResponse, ProviderError>> {
        Box::pin(async move {
            request.validate()?;
            let api_key = self.credentials.require_api_key(ProviderId::Murf)?;
            let murf_request = MurfRequest {
                text: request.text,
                voice_id: request.voice_id,
            };
            let response = self.transport.generate_speech(murf_request, api_key).await?;
            Ok(response.into_speech_response())
        })
    }
}
