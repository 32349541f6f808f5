//! The chat turn handler.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use schat::{TurnRequest, TurnResponse};
use scommon::TraceId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::AppState;

const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Debug, Deserialize)]
pub struct ChatBody {
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatReplyBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<TurnResponse> for ChatReplyBody {
    fn from(response: TurnResponse) -> Self {
        Self {
            reply: response.reply,
            audio_url: response.audio_url,
            message: response.message,
        }
    }
}

pub async fn chat(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<ChatBody>, JsonRejection>,
) -> Response {
    // An unreadable body still goes through the gate first, then fails as an empty message.
    let message = match body {
        Ok(Json(body)) => body.message,
        Err(rejection) => {
            tracing::debug!(error = %rejection.body_text(), "unreadable chat body");
            String::new()
        }
    };

    let mut request = TurnRequest::new(message).with_trace_id(trace_id(&headers));
    if let Some(token) = bearer_token(&headers) {
        request = request.with_credential(token);
    }

    let response = state.turns.respond(request).await;
    let status = StatusCode::from_u16(response.status.http_status())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    (status, Json(ChatReplyBody::from(response))).into_response()
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

fn trace_id(headers: &HeaderMap) -> TraceId {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.trim().is_empty())
        .map(TraceId::from)
        .unwrap_or_else(|| TraceId::new(Uuid::new_v4().to_string()))
}
