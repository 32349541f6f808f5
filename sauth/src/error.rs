//! Account and session-token errors.

use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthErrorKind {
    DuplicateAccount,
    InvalidCredentials,
    InvalidRequest,
    Storage,
    Hashing,
    Signing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthError {
    pub kind: AuthErrorKind,
    pub message: String,
}

impl AuthError {
    pub fn new(kind: AuthErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn duplicate_account(message: impl Into<String>) -> Self {
        Self::new(AuthErrorKind::DuplicateAccount, message)
    }

    pub fn invalid_credentials(message: impl Into<String>) -> Self {
        Self::new(AuthErrorKind::InvalidCredentials, message)
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(AuthErrorKind::InvalidRequest, message)
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(AuthErrorKind::Storage, message)
    }

    pub fn hashing(message: impl Into<String>) -> Self {
        Self::new(AuthErrorKind::Hashing, message)
    }

    pub fn signing(message: impl Into<String>) -> Self {
        Self::new(AuthErrorKind::Signing, message)
    }

    /// Failures the caller caused, as opposed to server-side faults.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self.kind,
            AuthErrorKind::DuplicateAccount
                | AuthErrorKind::InvalidCredentials
                | AuthErrorKind::InvalidRequest
        )
    }
}

impl Display for AuthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl Error for AuthError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenErrorKind {
    Expired,
    Malformed,
    SignatureInvalid,
    WrongKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenError {
    pub kind: TokenErrorKind,
    pub message: String,
}

impl TokenError {
    pub fn new(kind: TokenErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn expired(message: impl Into<String>) -> Self {
        Self::new(TokenErrorKind::Expired, message)
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(TokenErrorKind::Malformed, message)
    }

    pub fn signature_invalid(message: impl Into<String>) -> Self {
        Self::new(TokenErrorKind::SignatureInvalid, message)
    }

    pub fn wrong_kind(message: impl Into<String>) -> Self {
        Self::new(TokenErrorKind::WrongKind, message)
    }
}

impl Display for TokenError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl Error for TokenError {}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(value: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;

        match value.kind() {
            ErrorKind::ExpiredSignature => TokenError::expired("token has expired"),
            ErrorKind::InvalidSignature => {
                TokenError::signature_invalid("token signature does not match")
            }
            _ => TokenError::malformed(value.to_string()),
        }
    }
}
