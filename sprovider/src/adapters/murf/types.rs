use crate::{ProviderId, SpeechResponse};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MurfRequest {
    pub text: String,
    pub voice_id: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MurfResponse {
    pub audio_file: String,
    pub audio_length_seconds: Option<f64>,
}

impl MurfResponse {
    pub(crate) fn into_speech_response(self) -> SpeechResponse {
        SpeechResponse {
            provider: ProviderId::Murf,
            audio_url: self.audio_file,
            duration_seconds: self.audio_length_seconds,
        }
    }
}
