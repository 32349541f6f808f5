//! Metrics-based observability hooks for provider calls and turn phases.
//!
//! ```rust
//! use sobserve::MetricsObservabilityHooks;
//! use sprovider::ProviderOperationHooks;
//!
//! fn accepts_provider_hooks(_hooks: &dyn ProviderOperationHooks) {}
//!
//! let hooks = MetricsObservabilityHooks;
//! accepts_provider_hooks(&hooks);
//! ```

use std::time::Duration;

use schat::{ChatError, TurnHooks, TurnPhase};
use scommon::TraceId;
use sprovider::{ProviderError, ProviderId, ProviderOperationHooks};

#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsObservabilityHooks;

impl ProviderOperationHooks for MetricsObservabilityHooks {
    fn on_call_start(&self, provider: ProviderId, operation: &str) {
        metrics::counter!(
            "sahara_provider_calls_total",
            "provider" => provider.to_string(),
            "operation" => operation.to_string()
        )
        .increment(1);
    }

    fn on_success(&self, provider: ProviderId, operation: &str, elapsed: Duration) {
        metrics::counter!(
            "sahara_provider_success_total",
            "provider" => provider.to_string(),
            "operation" => operation.to_string()
        )
        .increment(1);
        metrics::histogram!(
            "sahara_provider_call_duration_seconds",
            "provider" => provider.to_string(),
            "operation" => operation.to_string(),
            "status" => "success"
        )
        .record(elapsed.as_secs_f64());
    }

    fn on_failure(
        &self,
        provider: ProviderId,
        operation: &str,
        elapsed: Duration,
        error: &ProviderError,
    ) {
        metrics::counter!(
            "sahara_provider_failure_total",
            "provider" => provider.to_string(),
            "operation" => operation.to_string(),
            "error_kind" => format!("{:?}", error.kind)
        )
        .increment(1);
        metrics::histogram!(
            "sahara_provider_call_duration_seconds",
            "provider" => provider.to_string(),
            "operation" => operation.to_string(),
            "status" => "failure"
        )
        .record(elapsed.as_secs_f64());
    }
}

impl TurnHooks for MetricsObservabilityHooks {
    fn on_transition(&self, from: TurnPhase, to: TurnPhase, _trace_id: Option<&TraceId>) {
        metrics::counter!(
            "sahara_turn_transitions_total",
            "from" => from.as_str(),
            "to" => to.as_str()
        )
        .increment(1);
    }

    fn on_failure(&self, phase: TurnPhase, error: &ChatError, _trace_id: Option<&TraceId>) {
        metrics::counter!(
            "sahara_turn_failures_total",
            "phase" => phase.as_str(),
            "error_kind" => format!("{:?}", error.kind)
        )
        .increment(1);
    }
}
