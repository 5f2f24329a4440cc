use async_trait::async_trait;
use doh_relay_domain::{Answer, DnsQuery, DomainError};

/// Forwards one DNS question to the upstream resolver and returns the decoded
/// answer. A single attempt per call; retry policy belongs to the caller.
#[async_trait]
pub trait DohResolverPort: Send + Sync {
    async fn resolve(&self, query: &DnsQuery) -> Result<Answer, DomainError>;
}
