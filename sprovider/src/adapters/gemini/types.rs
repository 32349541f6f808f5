//! Gemini adapter types and conversion into provider-agnostic responses.

use crate::{GenerationResponse, ProviderId, TokenUsage};

#[derive(Debug, Clone, PartialEq)]
pub struct GeminiRequest {
    pub model: String,
    pub prompt: String,
    pub temperature: Option<f32>,
    pub max_output_tokens: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GeminiUsage {
    pub prompt_tokens: u32,
    pub candidate_tokens: u32,
    pub total_tokens: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiResponse {
    pub model: String,
    pub text: String,
    pub usage: GeminiUsage,
}

impl GeminiResponse {
    pub(crate) fn into_generation_response(self) -> GenerationResponse {
        GenerationResponse {
            provider: ProviderId::Gemini,
            model: self.model,
            text: self.text,
            usage: TokenUsage {
                input_tokens: self.usage.prompt_tokens,
                output_tokens: self.usage.candidate_tokens,
                total_tokens: self.usage.total_tokens,
            },
        }
    }
}
