//! Murf `speech/generate` payload serde models.

use serde::{Deserialize, Serialize};

use crate::ProviderError;

use super::types::{MurfRequest, MurfResponse};

pub(crate) fn extract_error_message(body: &str) -> Option<String> {
    let parsed = serde_json::from_str::<MurfApiError>(body).ok()?;
    parsed.error_message.or(parsed.message)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MurfApiError {
    pub error_message: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MurfApiRequest {
    pub text: String,
    pub voice_id: String,
}

impl From<MurfRequest> for MurfApiRequest {
    fn from(value: MurfRequest) -> Self {
        Self {
            text: value.text,
            voice_id: value.voice_id,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MurfApiResponse {
    pub audio_file: Option<String>,
    pub audio_length_in_seconds: Option<f64>,
}

impl TryFrom<MurfApiResponse> for MurfResponse {
    type Error = ProviderError;

    fn try_from(value: MurfApiResponse) -> Result<Self, Self::Error> {
        let audio_file = value
            .audio_file
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| {
                ProviderError::invalid_response("Murf response did not include an audio file")
            })?;

        Ok(Self {
            audio_file,
            audio_length_seconds: value.audio_length_in_seconds,
        })
    }
}
