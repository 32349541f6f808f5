//! Gemini `generateContent` payload serde models and conversion helpers.

use serde::{Deserialize, Serialize};

use crate::ProviderError;

use super::types::{GeminiRequest, GeminiResponse, GeminiUsage};

pub(crate) fn build_api_request(request: &GeminiRequest) -> GeminiApiRequest {
    let generation_config = if request.temperature.is_none() && request.max_output_tokens.is_none()
    {
        None
    } else {
        Some(GeminiApiGenerationConfig {
            temperature: request.temperature,
            max_output_tokens: request.max_output_tokens,
        })
    };

    GeminiApiRequest {
        contents: vec![GeminiApiContent {
            role: Some("user".to_string()),
            parts: vec![GeminiApiPart {
                text: Some(request.prompt.clone()),
            }],
        }],
        generation_config,
    }
}

pub(crate) fn extract_error_message(body: &str) -> Option<String> {
    let parsed = serde_json::from_str::<GeminiApiErrorEnvelope>(body).ok()?;
    Some(parsed.error.message)
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeminiApiErrorEnvelope {
    pub error: GeminiApiError,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeminiApiError {
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GeminiApiRequest {
    pub contents: Vec<GeminiApiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GeminiApiGenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct GeminiApiContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<GeminiApiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct GeminiApiPart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GeminiApiGenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GeminiApiResponse {
    #[serde(default)]
    pub candidates: Vec<GeminiApiCandidate>,
    pub prompt_feedback: Option<GeminiApiPromptFeedback>,
    pub usage_metadata: Option<GeminiApiUsage>,
    pub model_version: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeminiApiCandidate {
    pub content: Option<GeminiApiContent>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GeminiApiPromptFeedback {
    pub block_reason: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GeminiApiUsage {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
    #[serde(default)]
    pub total_token_count: u32,
}

impl GeminiApiResponse {
    pub(crate) fn into_response(self, requested_model: &str) -> Result<GeminiResponse, ProviderError> {
        let Some(candidate) = self.candidates.into_iter().next() else {
            let reason = self
                .prompt_feedback
                .and_then(|feedback| feedback.block_reason)
                .unwrap_or_else(|| "no candidates returned".to_string());
            return Err(ProviderError::invalid_response(format!(
                "Gemini response did not include a candidate: {reason}"
            )));
        };

        let text = candidate
            .content
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<String>()
            })
            .unwrap_or_default();

        let usage = self.usage_metadata.unwrap_or_default();

        Ok(GeminiResponse {
            model: self
                .model_version
                .unwrap_or_else(|| requested_model.to_string()),
            text,
            usage: GeminiUsage {
                prompt_tokens: usage.prompt_token_count,
                candidate_tokens: usage.candidates_token_count,
                total_tokens: usage.total_token_count,
            },
        })
    }
}
