//! Broadcast one hook callback to several observers, in registration order.

use std::sync::Arc;
use std::time::Duration;

use schat::{ChatError, TurnHooks, TurnPhase};
use scommon::TraceId;
use sprovider::{ProviderError, ProviderId, ProviderOperationHooks};

#[derive(Default, Clone)]
pub struct FanoutProviderHooks {
    hooks: Vec<Arc<dyn ProviderOperationHooks>>,
}

impl FanoutProviderHooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, hooks: Arc<dyn ProviderOperationHooks>) -> Self {
        self.hooks.push(hooks);
        self
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

impl ProviderOperationHooks for FanoutProviderHooks {
    fn on_call_start(&self, provider: ProviderId, operation: &str) {
        for hooks in &self.hooks {
            hooks.on_call_start(provider, operation);
        }
    }

    fn on_success(&self, provider: ProviderId, operation: &str, elapsed: Duration) {
        for hooks in &self.hooks {
            hooks.on_success(provider, operation, elapsed);
        }
    }

    fn on_failure(
        &self,
        provider: ProviderId,
        operation: &str,
        elapsed: Duration,
        error: &ProviderError,
    ) {
        for hooks in &self.hooks {
            hooks.on_failure(provider, operation, elapsed, error);
        }
    }
}

#[derive(Default, Clone)]
pub struct FanoutTurnHooks {
    hooks: Vec<Arc<dyn TurnHooks>>,
}

impl FanoutTurnHooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, hooks: Arc<dyn TurnHooks>) -> Self {
        self.hooks.push(hooks);
        self
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

impl TurnHooks for FanoutTurnHooks {
    fn on_transition(&self, from: TurnPhase, to: TurnPhase, trace_id: Option<&TraceId>) {
        for hooks in &self.hooks {
            hooks.on_transition(from, to, trace_id);
        }
    }

    fn on_failure(&self, phase: TurnPhase, error: &ChatError, trace_id: Option<&TraceId>) {
        for hooks in &self.hooks {
            hooks.on_failure(phase, error, trace_id);
        }
    }
}
