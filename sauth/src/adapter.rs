//! Adapter that exposes `SessionIssuer` as an `schat` access gate.

use std::sync::Arc;

use schat::{AccessGate, ChatError};
use scommon::{AccountId, BoxFuture};

use crate::SessionIssuer;

#[derive(Clone)]
pub struct SessionAccessGate {
    issuer: Arc<SessionIssuer>,
}

impl SessionAccessGate {
    pub fn new(issuer: Arc<SessionIssuer>) -> Self {
        Self { issuer }
    }

    pub fn issuer(&self) -> Arc<SessionIssuer> {
        Arc::clone(&self.issuer)
    }
}

impl AccessGate for SessionAccessGate {
    fn verify<'a>(&'a self, credential: &'a str) -> BoxFuture<'a, Result<AccountId, ChatError>> {
        Box::pin(async move {
            self.issuer.verify_access(credential).map_err(|error| {
                tracing::debug!(reason = ?error.kind, "access token rejected");
                ChatError::access_denied("Invalid or expired token")
            })
        })
    }
}
