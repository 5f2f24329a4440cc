use async_trait::async_trait;
use doh_relay_domain::{BulkReport, DomainError};

/// Persists the final bulk report.
#[async_trait]
pub trait ReportSink: Send + Sync {
    async fn write(&self, report: &BulkReport) -> Result<(), DomainError>;
}
