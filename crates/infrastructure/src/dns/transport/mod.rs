pub mod https;

use async_trait::async_trait;
use bytes::Bytes;
use doh_relay_domain::DomainError;
use std::time::Duration;

pub use https::HttpsTransport;

/// Sends one raw wire-format DNS message and returns the raw response bytes.
#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(&self, message_bytes: &[u8], timeout: Duration) -> Result<Bytes, DomainError>;

    /// Upstream endpoint, for logging and error context.
    fn endpoint(&self) -> &str;

    /// Hostname of the upstream endpoint.
    fn host(&self) -> &str;
}
