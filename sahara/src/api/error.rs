use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use sauth::{AuthError, AuthErrorKind, TokenError};
use serde_json::json;

pub const SERVER_ERROR_MESSAGE: &str = "Server error";

/// Error response rendered as `{"message": ...}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.into(),
        }
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            message: msg.into(),
        }
    }

    pub fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: SERVER_ERROR_MESSAGE.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "message": self.message }))).into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err.kind {
            AuthErrorKind::DuplicateAccount | AuthErrorKind::InvalidRequest => {
                ApiError::bad_request(err.message)
            }
            AuthErrorKind::InvalidCredentials => ApiError::unauthorized(err.message),
            AuthErrorKind::Storage | AuthErrorKind::Hashing | AuthErrorKind::Signing => {
                tracing::error!(error_kind = ?err.kind, error = %err, "auth request failed");
                ApiError::internal()
            }
        }
    }
}

impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        tracing::debug!(reason = ?err.kind, "refresh token rejected");
        ApiError::unauthorized("Invalid or expired refresh token")
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}
