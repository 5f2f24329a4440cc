use async_trait::async_trait;
use doh_relay_domain::ResolutionResult;
use std::sync::Arc;

/// One bulk-harness resolution attempt against a DoH-capable endpoint.
///
/// Infallible by contract: every failure (timeout, connection error, non-200)
/// is captured into the returned `ResolutionResult`, never raised.
#[async_trait]
pub trait DohProbe: Send + Sync {
    async fn probe(&self, domain: Arc<str>) -> ResolutionResult;

    /// Hostname of the probe target, used as the per-host concurrency key.
    fn target_host(&self) -> &str;
}
