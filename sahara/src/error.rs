//! Configuration and startup errors for the server facade.

use std::error::Error;
use std::fmt::{Display, Formatter};

use sauth::AuthError;
use sprovider::ProviderError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigErrorKind {
    Missing,
    Invalid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub kind: ConfigErrorKind,
    pub key: String,
    pub message: String,
}

impl ConfigError {
    pub fn missing(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            kind: ConfigErrorKind::Missing,
            message: format!("{key} must be set"),
            key,
        }
    }

    pub fn invalid(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: ConfigErrorKind::Invalid,
            key: key.into(),
            message: message.into(),
        }
    }
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} config {}: {}", self.kind, self.key, self.message)
    }
}

impl Error for ConfigError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartupErrorKind {
    Config,
    Storage,
    Session,
    Provider,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupError {
    pub kind: StartupErrorKind,
    pub message: String,
}

impl StartupError {
    pub fn new(kind: StartupErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl Display for StartupError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl Error for StartupError {}

impl From<ConfigError> for StartupError {
    fn from(error: ConfigError) -> Self {
        Self::new(StartupErrorKind::Config, error.to_string())
    }
}

impl From<ProviderError> for StartupError {
    fn from(error: ProviderError) -> Self {
        Self::new(StartupErrorKind::Provider, error.to_string())
    }
}

impl From<AuthError> for StartupError {
    fn from(error: AuthError) -> Self {
        let kind = match error.kind {
            sauth::AuthErrorKind::Storage => StartupErrorKind::Storage,
            _ => StartupErrorKind::Session,
        };
        Self::new(kind, error.to_string())
    }
}
