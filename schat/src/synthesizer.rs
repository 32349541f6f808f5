//! Speech synthesis over a `SpeechProvider`.

use std::sync::Arc;

use sprovider::{
    CallPolicy, NoopOperationHooks, ProviderOperationHooks, SpeechProvider, SpeechRequest,
    execute_with_timeout,
};

use crate::ChatError;

pub const DEFAULT_VOICE_ID: &str = "en-IN-arohi";

#[derive(Clone)]
pub struct SpeechSynthesizer {
    provider: Arc<dyn SpeechProvider>,
    voice_id: String,
    policy: CallPolicy,
    hooks: Arc<dyn ProviderOperationHooks>,
}

impl SpeechSynthesizer {
    pub fn new(provider: Arc<dyn SpeechProvider>) -> Self {
        Self {
            provider,
            voice_id: DEFAULT_VOICE_ID.to_string(),
            policy: CallPolicy::default(),
            hooks: Arc::new(NoopOperationHooks),
        }
    }

    pub fn with_voice_id(mut self, voice_id: impl Into<String>) -> Self {
        self.voice_id = voice_id.into();
        self
    }

    pub fn with_policy(mut self, policy: CallPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_hooks(mut self, hooks: Arc<dyn ProviderOperationHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn voice_id(&self) -> &str {
        &self.voice_id
    }

    /// Renders `text` with the configured voice and returns the audio URL.
    pub async fn synthesize(&self, text: &str) -> Result<String, ChatError> {
        let request = SpeechRequest::new(text, self.voice_id.clone());

        let response = execute_with_timeout(
            self.provider.id(),
            "synthesize",
            &self.policy,
            self.hooks.as_ref(),
            self.provider.synthesize(request),
        )
        .await?;

        if response.audio_url.trim().is_empty() {
            return Err(ChatError::upstream(format!(
                "{} returned no audio url",
                response.provider
            )));
        }

        Ok(response.audio_url)
    }
}
