//! Call boundary for external providers: an explicit timeout plus operational hooks.
//!
//! Provider calls are never retried. A single failure or timeout is returned
//! to the caller as-is.

use std::future::Future;
use std::time::{Duration, Instant};

use crate::{ProviderError, ProviderId};

#[derive(Debug, Clone, PartialEq)]
pub struct CallPolicy {
    pub timeout: Duration,
}

impl Default for CallPolicy {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
        }
    }
}

impl CallPolicy {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

pub trait ProviderOperationHooks: Send + Sync {
    fn on_call_start(&self, _provider: ProviderId, _operation: &str) {}

    fn on_success(&self, _provider: ProviderId, _operation: &str, _elapsed: Duration) {}

    fn on_failure(
        &self,
        _provider: ProviderId,
        _operation: &str,
        _elapsed: Duration,
        _error: &ProviderError,
    ) {
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopOperationHooks;

impl ProviderOperationHooks for NoopOperationHooks {}

pub async fn execute_with_timeout<T, Call>(
    provider: ProviderId,
    operation: &str,
    policy: &CallPolicy,
    hooks: &dyn ProviderOperationHooks,
    call: Call,
) -> Result<T, ProviderError>
where
    Call: Future<Output = Result<T, ProviderError>>,
{
    hooks.on_call_start(provider, operation);
    let started = Instant::now();

    let outcome = match tokio::time::timeout(policy.timeout, call).await {
        Ok(result) => result,
        Err(_) => Err(ProviderError::timeout(format!(
            "{provider} {operation} did not complete within {}ms",
            policy.timeout.as_millis()
        ))),
    };

    let elapsed = started.elapsed();
    match &outcome {
        Ok(_) => hooks.on_success(provider, operation, elapsed),
        Err(error) => hooks.on_failure(provider, operation, elapsed, error),
    }

    outcome
}
