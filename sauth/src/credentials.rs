//! Registration and password verification over an account backend.

use std::sync::Arc;

use scommon::{AccountId, SecretString};

use crate::backend::AccountBackend;
use crate::password::{hash_password, verify_password};
use crate::{Account, AccountRecord, AuthError};

#[derive(Clone)]
pub struct CredentialStore {
    backend: Arc<dyn AccountBackend>,
}

impl CredentialStore {
    pub fn new(backend: Arc<dyn AccountBackend>) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> Arc<dyn AccountBackend> {
        Arc::clone(&self.backend)
    }

    pub async fn register(
        &self,
        username: &str,
        password: impl Into<SecretString>,
    ) -> Result<Account, AuthError> {
        let password = password.into();
        validate_credentials(username, &password)?;

        if self.backend.find_by_username(username).await?.is_some() {
            return Err(AuthError::duplicate_account("User already exists"));
        }

        let password_hash = hash_password(password).await?;
        let account = Account::new(username);
        self.backend
            .insert_account(AccountRecord {
                account: account.clone(),
                password_hash,
            })
            .await?;

        tracing::info!(account_id = %account.id, "registered account");
        Ok(account)
    }

    pub async fn verify(
        &self,
        username: &str,
        password: impl Into<SecretString>,
    ) -> Result<Account, AuthError> {
        let password = password.into();
        let record = self.backend.find_by_username(username).await?;
        let stored = record.as_ref().map(|record| record.password_hash.clone());

        if verify_password(password, stored).await? {
            if let Some(record) = record {
                return Ok(record.account);
            }
        }

        tracing::debug!("credential verification rejected");
        Err(AuthError::invalid_credentials("Invalid credentials"))
    }

    pub async fn find_account(&self, account_id: &AccountId) -> Result<Option<Account>, AuthError> {
        Ok(self
            .backend
            .find_by_id(account_id)
            .await?
            .map(|record| record.account))
    }
}

fn validate_credentials(username: &str, password: &SecretString) -> Result<(), AuthError> {
    if username.trim().is_empty() {
        return Err(AuthError::invalid_request("username must not be empty"));
    }

    if password.is_empty() {
        return Err(AuthError::invalid_request("password must not be empty"));
    }

    Ok(())
}
