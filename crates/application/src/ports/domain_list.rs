use async_trait::async_trait;
use doh_relay_domain::DomainError;
use std::sync::Arc;

/// Supplies the ordered domain list for a bulk run.
#[async_trait]
pub trait DomainListSource: Send + Sync {
    /// Fetch at most `max` domains, preserving source order.
    async fn fetch(&self, max: usize) -> Result<Vec<Arc<str>>, DomainError>;
}
