//! Environment-driven server configuration.
//!
//! ```rust
//! use sahara::ServerConfig;
//!
//! let config = ServerConfig::from_lookup(|key| match key {
//!     "GEMINI_API_KEY" => Some("gem-key".to_string()),
//!     "MURF_API_KEY" => Some("murf-key".to_string()),
//!     "ACCESS_TOKEN_SECRET" => Some("access".to_string()),
//!     "REFRESH_TOKEN_SECRET" => Some("refresh".to_string()),
//!     _ => None,
//! })
//! .expect("required keys are present");
//!
//! assert_eq!(config.port, 5001);
//! assert_eq!(config.bind_address(), "0.0.0.0:5001");
//! ```

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use axum::http::HeaderValue;
use sauth::{AccountBackendConfig, DEFAULT_ACCESS_TTL, DEFAULT_REFRESH_TTL, SessionConfig};
use schat::{DEFAULT_GENERATION_MODEL, DEFAULT_VOICE_ID};
use scommon::SecretString;

use crate::ConfigError;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5001;
pub const DEFAULT_DATABASE_PATH: &str = "sahara.sqlite3";
pub const DEFAULT_PROVIDER_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub gemini_api_key: SecretString,
    pub murf_api_key: SecretString,
    pub access_token_secret: SecretString,
    pub refresh_token_secret: SecretString,
    pub database: AccountBackendConfig,
    /// `None` allows any origin.
    pub cors_origin: Option<HeaderValue>,
    pub host: String,
    pub port: u16,
    pub gemini_model: String,
    pub murf_voice_id: String,
    pub provider_timeout: Duration,
    pub access_ttl: Duration,
    pub refresh_ttl: Duration,
    pub gemini_base_url: Option<String>,
    pub murf_base_url: Option<String>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let require = |key: &str| {
            get(key)
                .map(SecretString::from)
                .ok_or_else(|| ConfigError::missing(key))
        };

        let cors_origin = match get("CORS_ORIGIN") {
            Some(origin) => Some(
                HeaderValue::from_str(&origin)
                    .map_err(|_| ConfigError::invalid("CORS_ORIGIN", "not a valid header value"))?,
            ),
            None => None,
        };

        Ok(Self {
            gemini_api_key: require("GEMINI_API_KEY")?,
            murf_api_key: require("MURF_API_KEY")?,
            access_token_secret: require("ACCESS_TOKEN_SECRET")?,
            refresh_token_secret: require("REFRESH_TOKEN_SECRET")?,
            database: AccountBackendConfig::Sqlite {
                path: PathBuf::from(
                    get("DATABASE_PATH").unwrap_or_else(|| DEFAULT_DATABASE_PATH.to_string()),
                ),
            },
            cors_origin,
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_or("PORT", get("PORT"), DEFAULT_PORT)?,
            gemini_model: get("GEMINI_MODEL")
                .unwrap_or_else(|| DEFAULT_GENERATION_MODEL.to_string()),
            murf_voice_id: get("MURF_VOICE_ID").unwrap_or_else(|| DEFAULT_VOICE_ID.to_string()),
            provider_timeout: parse_secs_or(
                "PROVIDER_TIMEOUT_SECS",
                get("PROVIDER_TIMEOUT_SECS"),
                DEFAULT_PROVIDER_TIMEOUT,
            )?,
            access_ttl: parse_secs_or(
                "ACCESS_TOKEN_TTL_SECS",
                get("ACCESS_TOKEN_TTL_SECS"),
                DEFAULT_ACCESS_TTL,
            )?,
            refresh_ttl: parse_secs_or(
                "REFRESH_TOKEN_TTL_SECS",
                get("REFRESH_TOKEN_TTL_SECS"),
                DEFAULT_REFRESH_TTL,
            )?,
            gemini_base_url: get("GEMINI_BASE_URL"),
            murf_base_url: get("MURF_BASE_URL"),
        })
    }

    pub fn session_config(&self) -> SessionConfig {
        SessionConfig::new(
            self.access_token_secret.clone(),
            self.refresh_token_secret.clone(),
        )
        .with_access_ttl(self.access_ttl)
        .with_refresh_ttl(self.refresh_ttl)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T: FromStr>(key: &str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        Some(raw) => raw
            .parse()
            .map_err(|_| ConfigError::invalid(key, format!("cannot parse '{raw}'"))),
        None => Ok(default),
    }
}

fn parse_secs_or(key: &str, raw: Option<String>, default: Duration) -> Result<Duration, ConfigError> {
    let secs = parse_or(key, raw, default.as_secs())?;
    if secs == 0 {
        return Err(ConfigError::invalid(key, "must be at least one second"));
    }

    Ok(Duration::from_secs(secs))
}
