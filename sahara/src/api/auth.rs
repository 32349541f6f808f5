//! Registration, login and refresh handlers.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use sauth::TokenPair;
use serde::{Deserialize, Serialize};

use crate::AppState;

use super::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct CredentialsBody {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshBody {
    pub refresh_token: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPairBody {
    pub access_token: String,
    pub refresh_token: String,
}

impl From<TokenPair> for TokenPairBody {
    fn from(pair: TokenPair) -> Self {
        Self {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessTokenBody {
    pub access_token: String,
}

pub async fn register(
    State(state): State<AppState>,
    body: Result<Json<CredentialsBody>, JsonRejection>,
) -> Result<(StatusCode, Json<TokenPairBody>), ApiError> {
    let Json(body) = body?;
    let account = state
        .credentials
        .register(&body.username, body.password)
        .await?;
    let pair = state.sessions.issue(&account.id)?;

    Ok((StatusCode::CREATED, Json(pair.into())))
}

pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<CredentialsBody>, JsonRejection>,
) -> Result<Json<TokenPairBody>, ApiError> {
    let Json(body) = body?;
    let account = state
        .credentials
        .verify(&body.username, body.password)
        .await?;
    let pair = state.sessions.issue(&account.id)?;

    tracing::info!(account_id = %account.id, "login succeeded");
    Ok(Json(pair.into()))
}

/// Redeems a refresh token for a new access token. The account must still exist.
pub async fn refresh(
    State(state): State<AppState>,
    body: Result<Json<RefreshBody>, JsonRejection>,
) -> Result<Json<AccessTokenBody>, ApiError> {
    let Json(body) = body?;
    let account_id = state.sessions.verify_refresh(body.refresh_token.trim())?;

    if state.credentials.find_account(&account_id).await?.is_none() {
        tracing::debug!(account_id = %account_id, "refresh token names an unknown account");
        return Err(ApiError::unauthorized("Invalid or expired refresh token"));
    }

    let grant = state.sessions.issue_access(&account_id)?;
    Ok(Json(AccessTokenBody {
        access_token: grant.access_token,
    }))
}
