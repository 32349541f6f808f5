//! Turn request, result, phase and response-shaping types.

use std::fmt::{Display, Formatter};

use scommon::{AccountId, TraceId};

use crate::ScreeningResult;

/// Returned in place of a generated reply when the crisis screen escalates.
pub const CRISIS_SAFETY_MESSAGE: &str = "It sounds like you might be in a really difficult place right now. You're not alone. Please call your local emergency number or a suicide prevention hotline immediately.";

/// Returned to the client for every upstream failure.
pub const UPSTREAM_APOLOGY: &str =
    "I'm having a little trouble thinking right now. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnPhase {
    AuthPending,
    Authenticated,
    CrisisShortCircuit,
    Generating,
    Synthesizing,
    Responded,
    Failed,
}

impl TurnPhase {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AuthPending => "auth_pending",
            Self::Authenticated => "authenticated",
            Self::CrisisShortCircuit => "crisis_short_circuit",
            Self::Generating => "generating",
            Self::Synthesizing => "synthesizing",
            Self::Responded => "responded",
            Self::Failed => "failed",
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Responded | Self::Failed)
    }
}

impl Display for TurnPhase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnRequest {
    pub credential: Option<String>,
    pub message: String,
    pub trace_id: Option<TraceId>,
}

impl TurnRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            credential: None,
            message: message.into(),
            trace_id: None,
        }
    }

    pub fn with_credential(mut self, credential: impl Into<String>) -> Self {
        self.credential = Some(credential.into());
        self
    }

    pub fn with_trace_id(mut self, trace_id: impl Into<TraceId>) -> Self {
        self.trace_id = Some(trace_id.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnResult {
    pub account_id: AccountId,
    pub reply: String,
    pub audio_url: Option<String>,
    pub screening: ScreeningResult,
}

impl TurnResult {
    pub fn is_crisis(&self) -> bool {
        self.screening.is_escalation()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnStatus {
    Ok,
    BadRequest,
    Unauthorized,
    Forbidden,
    ServerError,
}

impl TurnStatus {
    pub fn http_status(self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::BadRequest => 400,
            Self::Unauthorized => 401,
            Self::Forbidden => 403,
            Self::ServerError => 500,
        }
    }
}

/// Client-facing outcome of a turn. Never carries provider detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnResponse {
    pub status: TurnStatus,
    pub reply: Option<String>,
    pub audio_url: Option<String>,
    pub message: Option<String>,
}

impl TurnResponse {
    pub fn ok(reply: impl Into<String>, audio_url: Option<String>) -> Self {
        Self {
            status: TurnStatus::Ok,
            reply: Some(reply.into()),
            audio_url,
            message: None,
        }
    }

    pub fn rejected(status: TurnStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            reply: None,
            audio_url: None,
            message: Some(message.into()),
        }
    }

    pub fn apology() -> Self {
        Self {
            status: TurnStatus::ServerError,
            reply: Some(UPSTREAM_APOLOGY.to_string()),
            audio_url: None,
            message: None,
        }
    }
}
