//! Turn-layer errors and classification.

use std::error::Error;
use std::fmt::{Display, Formatter};

use sprovider::ProviderError;

use crate::TurnPhase;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatErrorKind {
    /// No credential was presented.
    Unauthenticated,
    /// A credential was presented but is invalid, expired or of the wrong kind.
    AccessDenied,
    InvalidRequest,
    /// Generation or synthesis failed, timed out or returned an unusable payload.
    Upstream,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatError {
    pub kind: ChatErrorKind,
    pub message: String,
    pub phase: Option<TurnPhase>,
}

impl ChatError {
    pub fn new(kind: ChatErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            phase: None,
        }
    }

    pub fn with_phase(mut self, phase: TurnPhase) -> Self {
        self.phase = Some(phase);
        self
    }

    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::new(ChatErrorKind::Unauthenticated, message)
    }

    pub fn access_denied(message: impl Into<String>) -> Self {
        Self::new(ChatErrorKind::AccessDenied, message)
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ChatErrorKind::InvalidRequest, message)
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Self::new(ChatErrorKind::Upstream, message)
    }

    pub fn is_upstream(&self) -> bool {
        self.kind == ChatErrorKind::Upstream
    }
}

impl Display for ChatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.phase {
            Some(phase) => write!(f, "{:?} during {phase}: {}", self.kind, self.message),
            None => write!(f, "{:?}: {}", self.kind, self.message),
        }
    }
}

impl Error for ChatError {}

impl From<ProviderError> for ChatError {
    fn from(value: ProviderError) -> Self {
        ChatError::upstream(value.to_string())
    }
}
