use std::panic::{AssertUnwindSafe, catch_unwind};
use std::time::Duration;

use schat::{ChatError, TurnHooks, TurnPhase};
use scommon::TraceId;
use sprovider::{ProviderError, ProviderId, ProviderOperationHooks};

/// Contains panics raised by the wrapped hooks so a broken observer never fails a provider call.
pub struct SafeProviderHooks<H> {
    inner: H,
}

impl<H> SafeProviderHooks<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<H> ProviderOperationHooks for SafeProviderHooks<H>
where
    H: ProviderOperationHooks,
{
    fn on_call_start(&self, provider: ProviderId, operation: &str) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_call_start(provider, operation)
        }));
    }

    fn on_success(&self, provider: ProviderId, operation: &str, elapsed: Duration) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_success(provider, operation, elapsed)
        }));
    }

    fn on_failure(
        &self,
        provider: ProviderId,
        operation: &str,
        elapsed: Duration,
        error: &ProviderError,
    ) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_failure(provider, operation, elapsed, error)
        }));
    }
}

/// Contains panics raised by the wrapped hooks so a broken observer never fails a turn.
pub struct SafeTurnHooks<H> {
    inner: H,
}

impl<H> SafeTurnHooks<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<H> TurnHooks for SafeTurnHooks<H>
where
    H: TurnHooks,
{
    fn on_transition(&self, from: TurnPhase, to: TurnPhase, trace_id: Option<&TraceId>) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_transition(from, to, trace_id)
        }));
    }

    fn on_failure(&self, phase: TurnPhase, error: &ChatError, trace_id: Option<&TraceId>) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_failure(phase, error, trace_id)
        }));
    }
}
