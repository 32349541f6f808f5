//! Tracing-based observability hooks for provider calls and turn phases.
//!
//! ```rust
//! use schat::TurnHooks;
//! use sobserve::TracingObservabilityHooks;
//!
//! fn accepts_turn_hooks(_hooks: &dyn TurnHooks) {}
//!
//! let hooks = TracingObservabilityHooks;
//! accepts_turn_hooks(&hooks);
//! ```

use std::time::Duration;

use schat::{ChatError, TurnHooks, TurnPhase};
use scommon::TraceId;
use sprovider::{ProviderError, ProviderId, ProviderOperationHooks};

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObservabilityHooks;

impl ProviderOperationHooks for TracingObservabilityHooks {
    fn on_call_start(&self, provider: ProviderId, operation: &str) {
        tracing::debug!(
            phase = "provider",
            event = "call_start",
            provider = %provider,
            operation
        );
    }

    fn on_success(&self, provider: ProviderId, operation: &str, elapsed: Duration) {
        tracing::info!(
            phase = "provider",
            event = "success",
            provider = %provider,
            operation,
            elapsed_ms = elapsed.as_millis() as u64
        );
    }

    fn on_failure(
        &self,
        provider: ProviderId,
        operation: &str,
        elapsed: Duration,
        error: &ProviderError,
    ) {
        tracing::error!(
            phase = "provider",
            event = "failure",
            provider = %provider,
            operation,
            elapsed_ms = elapsed.as_millis() as u64,
            error_kind = ?error.kind,
            status = error.status,
            error = %error
        );
    }
}

impl TurnHooks for TracingObservabilityHooks {
    fn on_transition(&self, from: TurnPhase, to: TurnPhase, trace_id: Option<&TraceId>) {
        tracing::debug!(
            phase = "turn",
            event = "transition",
            from = from.as_str(),
            to = to.as_str(),
            trace_id = trace_id.map(|id| id.as_str())
        );
    }

    fn on_failure(&self, phase: TurnPhase, error: &ChatError, trace_id: Option<&TraceId>) {
        if error.is_upstream() {
            tracing::error!(
                phase = "turn",
                event = "failure",
                turn_phase = phase.as_str(),
                trace_id = trace_id.map(|id| id.as_str()),
                error_kind = ?error.kind,
                error = %error
            );
        } else {
            tracing::warn!(
                phase = "turn",
                event = "rejected",
                turn_phase = phase.as_str(),
                trace_id = trace_id.map(|id| id.as_str()),
                error_kind = ?error.kind,
                error = %error
            );
        }
    }
}
