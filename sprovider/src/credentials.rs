//! Secure in-memory API key management for external providers.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use scommon::SecretString;

use crate::{ProviderError, ProviderId};

#[derive(Default)]
pub struct SecureCredentialManager {
    api_keys: Mutex<HashMap<ProviderId, SecretString>>,
}

impl SecureCredentialManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_api_key(
        &self,
        provider: ProviderId,
        api_key: impl Into<SecretString>,
    ) -> Result<(), ProviderError> {
        let api_key = api_key.into();
        if api_key.is_blank() {
            return Err(ProviderError::authentication(format!(
                "{provider} api key must not be empty"
            )));
        }

        self.api_keys()?.insert(provider, api_key);
        Ok(())
    }

    pub fn has_credentials(&self, provider: ProviderId) -> Result<bool, ProviderError> {
        Ok(self.api_keys()?.contains_key(&provider))
    }

    pub fn api_key(&self, provider: ProviderId) -> Result<Option<SecretString>, ProviderError> {
        Ok(self.api_keys()?.get(&provider).cloned())
    }

    pub fn with_api_key<R>(
        &self,
        provider: ProviderId,
        f: impl FnOnce(&str) -> R,
    ) -> Result<Option<R>, ProviderError> {
        let keys = self.api_keys()?;
        Ok(keys.get(&provider).map(|secret| f(secret.expose())))
    }

    /// Resolves the key for `provider` or fails with an authentication error.
    pub fn require_api_key(&self, provider: ProviderId) -> Result<SecretString, ProviderError> {
        self.api_key(provider)?.ok_or_else(|| {
            ProviderError::authentication(format!("no {provider} api key configured"))
        })
    }

    pub fn clear(&self, provider: ProviderId) -> Result<bool, ProviderError> {
        Ok(self.api_keys()?.remove(&provider).is_some())
    }

    fn api_keys(&self) -> Result<MutexGuard<'_, HashMap<ProviderId, SecretString>>, ProviderError> {
        self.api_keys
            .lock()
            .map_err(|_| ProviderError::other("credential manager lock poisoned"))
    }
}

impl std::fmt::Debug for SecureCredentialManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecureCredentialManager")
            .field("api_keys", &"[REDACTED]")
            .finish()
    }
}
