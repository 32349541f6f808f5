//! Murf transport trait and reqwest-based HTTP implementation.

use reqwest::{Client, Response};

use crate::{ProviderError, ProviderFuture, SecretString};

use super::serde_api::{MurfApiRequest, MurfApiResponse, extract_error_message};
use super::types::{MurfRequest, MurfResponse};

pub trait MurfTransport: Send + Sync + std::fmt::Debug {
    fn generate_speech<'a>(
        &'a self,
        request: MurfRequest,
        api_key: SecretString,
    ) -> ProviderFuture<'a, Result<MurfResponse, ProviderError>>;
}

#[derive(Debug, Clone)]
pub struct MurfHttpTransport {
    client: Client,
    base_url: String,
}

impl MurfHttpTransport {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            base_url: "https://api.murf.ai/v1".to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn parse_error(response: Response) -> ProviderError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = extract_error_message(&body)
            .unwrap_or_else(|| format!("Murf request failed with status {status}"));

        ProviderError::from_status(status.as_u16(), message)
    }
}

impl MurfTransport for MurfHttpTransport {
    fn generate_speech<'a>(
        &'a self,
        request: MurfRequest,
        api_key: SecretString,
    ) -> ProviderFuture<'a, Result<MurfResponse, ProviderError>> {
        Box::pin(async move {
            let api_request = MurfApiRequest::from(request);
            let response = self
                .client
                .post(self.endpoint("speech/generate"))
                .header("api-key", api_key.expose())
                .header(reqwest::header::ACCEPT, "application/json")
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

            let parsed: MurfApiResponse = response
                .json()
                .await
                .map_err(|err| ProviderError::invalid_response(err.to_string()))?;

            MurfResponse::try_from(parsed)
        })
    }
}
