//! Credential verification seam consumed by the turn pipeline.

use scommon::{AccountId, BoxFuture};

use crate::ChatError;

/// Resolves a bearer credential to the account it was issued for.
///
/// Implementations return `ChatErrorKind::AccessDenied` for any credential
/// that is invalid, expired or of the wrong kind.
pub trait AccessGate: Send + Sync {
    fn verify<'a>(&'a self, credential: &'a str) -> BoxFuture<'a, Result<AccountId, ChatError>>;
}
