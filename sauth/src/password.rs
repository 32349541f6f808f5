//! Argon2id hashing and verification, run off the async executor.

use std::sync::OnceLock;

use argon2::password_hash::{Error as PhcError, PasswordHash as PhcHash, SaltString};
use argon2::{Argon2, PasswordHasher, PasswordVerifier};
use rand::rngs::OsRng;
use scommon::SecretString;

use crate::{AuthError, PasswordHash};

pub(crate) async fn hash_password(password: SecretString) -> Result<PasswordHash, AuthError> {
    tokio::task::spawn_blocking(move || hash_blocking(password.expose().as_bytes()))
        .await
        .map_err(|error| AuthError::hashing(format!("password hashing task failed: {error}")))?
        .map(PasswordHash::from_phc)
}

/// Returns `Ok(false)` both for a wrong password and for a missing account.
///
/// A missing account is checked against a fixed dummy hash so that both cases
/// cost one Argon2 verification.
pub(crate) async fn verify_password(
    password: SecretString,
    stored: Option<PasswordHash>,
) -> Result<bool, AuthError> {
    tokio::task::spawn_blocking(move || {
        let (phc, known_account) = match &stored {
            Some(hash) => (hash.as_phc(), true),
            None => (dummy_hash()?, false),
        };

        let parsed = PhcHash::new(phc)
            .map_err(|error| AuthError::hashing(format!("stored hash is unreadable: {error}")))?;

        match Argon2::default().verify_password(password.expose().as_bytes(), &parsed) {
            Ok(()) => Ok(known_account),
            Err(PhcError::Password) => Ok(false),
            Err(error) => Err(AuthError::hashing(format!(
                "password verification failed: {error}"
            ))),
        }
    })
    .await
    .map_err(|error| AuthError::hashing(format!("password verification task failed: {error}")))?
}

fn hash_blocking(password: &[u8]) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password, &salt)
        .map(|hash| hash.to_string())
        .map_err(|error| AuthError::hashing(format!("failed to hash password: {error}")))
}

fn dummy_hash() -> Result<&'static str, AuthError> {
    static DUMMY_HASH: OnceLock<Option<String>> = OnceLock::new();
    DUMMY_HASH
        .get_or_init(|| hash_blocking(b"sahara-unknown-account").ok())
        .as_deref()
        .ok_or_else(|| AuthError::hashing("dummy password hash unavailable"))
}
