use async_trait::async_trait;
use doh_relay_application::ports::ReportSink;
use doh_relay_domain::{BulkReport, DomainError, ProbeStatus};
use std::path::PathBuf;
use tracing::info;

/// Writes the bulk report as CSV: `domain,status,response`, one row per input
/// domain in input order.
pub struct CsvReportSink {
    path: PathBuf,
}

impl CsvReportSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ReportSink for CsvReportSink {
    async fn write(&self, report: &BulkReport) -> Result<(), DomainError> {
        let path = self.path.clone();
        let rows: Vec<(String, String, String)> = report
            .results
            .iter()
            .map(|r| {
                let status = match r.status {
                    ProbeStatus::Http(code) => code.to_string(),
                    ProbeStatus::Error => "error".to_string(),
                };
                (
                    r.domain.to_string(),
                    status,
                    r.response.clone().unwrap_or_default(),
                )
            })
            .collect();

        let row_count = rows.len();
        tokio::task::spawn_blocking(move || -> Result<(), DomainError> {
            let mut writer = csv::Writer::from_path(&path).map_err(|e| {
                DomainError::IoError(format!("Failed to open {}: {}", path.display(), e))
            })?;

            writer
                .write_record(["domain", "status", "response"])
                .map_err(|e| DomainError::IoError(format!("Failed to write header: {}", e)))?;

            for (domain, status, response) in rows {
                writer
                    .write_record([&domain, &status, &response])
                    .map_err(|e| DomainError::IoError(format!("Failed to write row: {}", e)))?;
            }

            writer
                .flush()
                .map_err(|e| DomainError::IoError(format!("Failed to flush report: {}", e)))
        })
        .await
        .map_err(|e| DomainError::InternalError(format!("Report writer panicked: {}", e)))??;

        info!(
            path = %self.path.display(),
            rows = row_count,
            successful = report.success_count,
            partial = report.partial,
            "Bulk report written"
        );

        Ok(())
    }
}
