//! Observation points for turn phase transitions.

use scommon::TraceId;

use crate::{ChatError, TurnPhase};

pub trait TurnHooks: Send + Sync {
    fn on_transition(&self, _from: TurnPhase, _to: TurnPhase, _trace_id: Option<&TraceId>) {}

    fn on_failure(&self, _phase: TurnPhase, _error: &ChatError, _trace_id: Option<&TraceId>) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTurnHooks;

impl TurnHooks for NoopTurnHooks {}
