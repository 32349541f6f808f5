//! Gemini transport trait and reqwest-based HTTP implementation.

use reqwest::{Client, Response};

use crate::{ProviderError, ProviderFuture, SecretString};

use super::serde_api::{GeminiApiResponse, build_api_request, extract_error_message};
use super::types::{GeminiRequest, GeminiResponse};

pub trait GeminiTransport: Send + Sync + std::fmt::Debug {
    fn generate_content<'a>(
        &'a self,
        request: GeminiRequest,
        api_key: SecretString,
    ) -> ProviderFuture<'a, Result<GeminiResponse, ProviderError>>;
}

#[derive(Debug, Clone)]
pub struct GeminiHttpTransport {
    client: Client,
    base_url: String,
}

impl GeminiHttpTransport {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            model
        )
    }

    async fn parse_error(response: Response) -> ProviderError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = extract_error_message(&body)
            .unwrap_or_else(|| format!("Gemini request failed with status {status}"));

        ProviderError::from_status(status.as_u16(), message)
    }
}

impl GeminiTransport for GeminiHttpTransport {
    fn generate_content<'a>(
        &'a self,
        request: GeminiRequest,
        api_key: SecretString,
    ) -> ProviderFuture<'a, Result<GeminiResponse, ProviderError>> {
        Box::pin(async move {
            let api_request = build_api_request(&request);
            let response = self
                .client
                .post(self.endpoint(&request.model))
                .header("x-goog-api-key", api_key.expose())
                .json(&api_request)
                .send()
                .await
                .map_err(|err| {
                    if err.is_timeout() {
                        ProviderError::timeout(err.to_string())
                    } else {
                        ProviderError::transport(err.to_string())
                    }
                })?;

            if !response.status().is_success() {
                return Err(Self::parse_error(response).await);
            }

            let parsed: GeminiApiResponse = response
                .json()
                .await
                .map_err(|err| ProviderError::invalid_response(err.to_string()))?;

            parsed.into_response(&request.model)
        })
    }
}
