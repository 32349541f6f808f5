//! Construction of the Gemini and Murf clients from server configuration.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use sprovider::gemini::{GeminiHttpTransport, GeminiProvider};
use sprovider::murf::{MurfHttpTransport, MurfProvider};
use sprovider::{
    GenerationProvider, ProviderError, ProviderId, SecretString, SecureCredentialManager,
    SpeechProvider,
};

use crate::ServerConfig;

#[derive(Debug, Clone)]
pub struct ProviderBuildConfig {
    pub gemini_api_key: SecretString,
    pub murf_api_key: SecretString,
    pub timeout: Duration,
    pub gemini_base_url: Option<String>,
    pub murf_base_url: Option<String>,
}

impl ProviderBuildConfig {
    pub fn new(
        gemini_api_key: impl Into<SecretString>,
        murf_api_key: impl Into<SecretString>,
    ) -> Self {
        Self {
            gemini_api_key: gemini_api_key.into(),
            murf_api_key: murf_api_key.into(),
            timeout: Duration::from_secs(30),
            gemini_base_url: None,
            murf_base_url: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_gemini_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.gemini_base_url = Some(base_url.into());
        self
    }

    pub fn with_murf_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.murf_base_url = Some(base_url.into());
        self
    }
}

impl From<&ServerConfig> for ProviderBuildConfig {
    fn from(config: &ServerConfig) -> Self {
        Self {
            gemini_api_key: config.gemini_api_key.clone(),
            murf_api_key: config.murf_api_key.clone(),
            timeout: config.provider_timeout,
            gemini_base_url: config.gemini_base_url.clone(),
            murf_base_url: config.murf_base_url.clone(),
        }
    }
}

#[derive(Clone)]
pub struct ProviderClients {
    pub generation: Arc<dyn GenerationProvider>,
    pub speech: Arc<dyn SpeechProvider>,
}

pub fn build_providers(config: ProviderBuildConfig) -> Result<ProviderClients, ProviderError> {
    let credentials = Arc::new(SecureCredentialManager::new());
    credentials.set_api_key(ProviderId::Gemini, config.gemini_api_key)?;
    credentials.set_api_key(ProviderId::Murf, config.murf_api_key)?;

    let http = Client::builder()
        .timeout(config.timeout)
        .build()
        .map_err(|err| ProviderError::transport(err.to_string()))?;

    let mut gemini = GeminiHttpTransport::new(http.clone());
    if let Some(base_url) = config.gemini_base_url {
        gemini = gemini.with_base_url(base_url);
    }

    let mut murf = MurfHttpTransport::new(http);
    if let Some(base_url) = config.murf_base_url {
        murf = murf.with_base_url(base_url);
    }

    Ok(ProviderClients {
        generation: Arc::new(GeminiProvider::new(
            Arc::clone(&credentials),
            Arc::new(gemini),
        )),
        speech: Arc::new(MurfProvider::new(credentials, Arc::new(murf))),
    })
}
