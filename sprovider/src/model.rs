//! Provider-agnostic request and response models for generation and speech.

use std::fmt::{Display, Formatter};

use scommon::GenerationOptions;

use crate::ProviderError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderId {
    Gemini,
    Murf,
}

impl Display for ProviderId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let id = match self {
            Self::Gemini => "gemini",
            Self::Murf => "murf",
        };

        f.write_str(id)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub model: String,
    pub prompt: String,
    pub options: GenerationOptions,
}

impl GenerationRequest {
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            options: GenerationOptions::default(),
        }
    }

    pub fn with_options(mut self, options: GenerationOptions) -> Self {
        self.options = options;
        self
    }

    pub fn validate(&self) -> Result<(), ProviderError> {
        if self.model.trim().is_empty() {
            return Err(ProviderError::invalid_request("model must not be empty"));
        }

        if self.prompt.trim().is_empty() {
            return Err(ProviderError::invalid_request("prompt must not be empty"));
        }

        if let Some(max_tokens) = self.options.max_tokens {
            if max_tokens == 0 {
                return Err(ProviderError::invalid_request(
                    "max_tokens must be greater than zero",
                ));
            }
        }

        if let Some(temperature) = self.options.temperature {
            if !(0.0..=2.0).contains(&temperature) {
                return Err(ProviderError::invalid_request(
                    "temperature must be in the inclusive range 0.0..=2.0",
                ));
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TokenUsage {
    pub input_tokens: u32,
    pub output_tokens: u32,
    pub total_tokens: u32,
}

/// First completion returned by a generation provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResponse {
    pub provider: ProviderId,
    pub model: String,
    pub text: String,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechRequest {
    pub text: String,
    pub voice_id: String,
}

impl SpeechRequest {
    pub fn new(text: impl Into<String>, voice_id: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            voice_id: voice_id.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ProviderError> {
        if self.text.trim().is_empty() {
            return Err(ProviderError::invalid_request(
                "speech text must not be empty",
            ));
        }

        if self.voice_id.trim().is_empty() {
            return Err(ProviderError::invalid_request("voice id must not be empty"));
        }

        Ok(())
    }
}

/// Location of a rendered audio artifact, not the audio bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechResponse {
    pub provider: ProviderId,
    pub audio_url: String,
    pub duration_seconds: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProviderErrorKind;

    #[test]
    fn generation_request_validation_rejects_bad_values() {
        let empty_prompt = GenerationRequest::new("gemini-2.5-pro", "  ");
        assert_eq!(
            empty_prompt.validate().expect_err("prompt is blank").kind,
            ProviderErrorKind::InvalidRequest
        );

        let empty_model = GenerationRequest::new("", "hello");
        assert!(empty_model.validate().is_err());

        let hot = GenerationRequest::new("gemini-2.5-pro", "hello")
            .with_options(GenerationOptions::default().with_temperature(3.5));
        assert!(hot.validate().is_err());

        let zero_tokens = GenerationRequest::new("gemini-2.5-pro", "hello")
            .with_options(GenerationOptions::default().with_max_tokens(0));
        assert!(zero_tokens.validate().is_err());

        let ok = GenerationRequest::new("gemini-2.5-pro", "hello")
            .with_options(GenerationOptions::default().with_temperature(0.9));
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn speech_request_requires_text_and_voice() {
        assert!(SpeechRequest::new("hi", "en-IN-arohi").validate().is_ok());
        assert!(SpeechRequest::new("", "en-IN-arohi").validate().is_err());
        assert!(SpeechRequest::new("hi", " ").validate().is_err());
    }

    #[test]
    fn provider_ids_render_lowercase_names() {
        assert_eq!(ProviderId::Gemini.to_string(), "gemini");
        assert_eq!(ProviderId::Murf.to_string(), "murf");
    }
}
