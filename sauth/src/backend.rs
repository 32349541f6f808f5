//! Account backend trait and in-memory backend implementation.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};

use scommon::{AccountId, BoxFuture};

use crate::backends::sqlite::default_sqlite_path;
use crate::error::AuthError;
use crate::types::AccountRecord;

pub use crate::backends::sqlite::SqliteAccountBackend;

/// Append-only account storage keyed by a unique username.
///
/// `insert_account` must fail with `AuthErrorKind::DuplicateAccount` when the
/// username is taken, atomically with respect to concurrent inserts.
pub trait AccountBackend: Send + Sync {
    fn insert_account<'a>(&'a self, record: AccountRecord) -> BoxFuture<'a, Result<(), AuthError>>;

    fn find_by_username<'a>(
        &'a self,
        username: &'a str,
    ) -> BoxFuture<'a, Result<Option<AccountRecord>, AuthError>>;

    fn find_by_id<'a>(
        &'a self,
        account_id: &'a AccountId,
    ) -> BoxFuture<'a, Result<Option<AccountRecord>, AuthError>>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountBackendConfig {
    Sqlite { path: PathBuf },
    InMemory,
}

impl Default for AccountBackendConfig {
    fn default() -> Self {
        Self::Sqlite {
            path: default_sqlite_path(),
        }
    }
}

pub fn create_account_backend(
    config: AccountBackendConfig,
) -> Result<Arc<dyn AccountBackend>, AuthError> {
    match config {
        AccountBackendConfig::Sqlite { path } => Ok(Arc::new(SqliteAccountBackend::new(path)?)),
        AccountBackendConfig::InMemory => Ok(Arc::new(InMemoryAccountBackend::new())),
    }
}

#[derive(Debug, Default)]
pub struct InMemoryAccountBackend {
    accounts: Mutex<HashMap<String, AccountRecord>>,
}

impl InMemoryAccountBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn accounts(&self) -> Result<MutexGuard<'_, HashMap<String, AccountRecord>>, AuthError> {
        self.accounts
            .lock()
            .map_err(|_| AuthError::storage("account backend lock poisoned"))
    }
}

impl AccountBackend for InMemoryAccountBackend {
    fn insert_account<'a>(&'a self, record: AccountRecord) -> BoxFuture<'a, Result<(), AuthError>> {
        Box::pin(async move {
            let mut accounts = self.accounts()?;
            if accounts.contains_key(&record.account.username) {
                return Err(AuthError::duplicate_account("User already exists"));
            }

            accounts.insert(record.account.username.clone(), record);
            Ok(())
        })
    }

    fn find_by_username<'a>(
        &'a self,
        username: &'a str,
    ) -> BoxFuture<'a, Result<Option<AccountRecord>, AuthError>> {
        Box::pin(async move { Ok(self.accounts()?.get(username).cloned()) })
    }

    fn find_by_id<'a>(
        &'a self,
        account_id: &'a AccountId,
    ) -> BoxFuture<'a, Result<Option<AccountRecord>, AuthError>> {
        Box::pin(async move {
            Ok(self
                .accounts()?
                .values()
                .find(|record| &record.account.id == account_id)
                .cloned())
        })
    }
}
