use serde::ser::Serializer;
use serde::Serialize;
use std::sync::Arc;

/// Outcome of one bulk probe. Transport failures are a status of their own,
/// not an HTTP code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeStatus {
    Http(u16),
    Error,
}

impl ProbeStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, ProbeStatus::Http(200))
    }
}

impl Serialize for ProbeStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ProbeStatus::Http(code) => serializer.serialize_u16(*code),
            ProbeStatus::Error => serializer.serialize_str("error"),
        }
    }
}

/// One row of the bulk report. Immutable once created.
#[derive(Debug, Clone, Serialize)]
pub struct ResolutionResult {
    pub domain: Arc<str>,
    pub status: ProbeStatus,
    pub response: Option<String>,
}

impl ResolutionResult {
    pub fn ok(domain: Arc<str>, status: u16, response: Option<String>) -> Self {
        Self {
            domain,
            status: ProbeStatus::Http(status),
            response,
        }
    }

    pub fn error(domain: Arc<str>) -> Self {
        Self {
            domain,
            status: ProbeStatus::Error,
            response: None,
        }
    }
}

/// Aggregate outcome of a bulk run. `results` preserves input order.
#[derive(Debug, Clone)]
pub struct BulkReport {
    pub results: Vec<ResolutionResult>,
    /// Size of the input list. Under cancellation this exceeds `results.len()`.
    pub total_requested: usize,
    pub success_count: usize,
    /// Set when the run was cancelled before every domain completed.
    pub partial: bool,
}

impl BulkReport {
    pub fn from_results(
        results: Vec<ResolutionResult>,
        total_requested: usize,
        partial: bool,
    ) -> Self {
        let success_count = results.iter().filter(|r| r.status.is_success()).count();
        Self {
            total_requested,
            success_count,
            partial,
            results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_count_matches_http_200_rows() {
        let results = vec![
            ResolutionResult::ok("a.example".into(), 200, Some("{}".into())),
            ResolutionResult::error("b.example".into()),
            ResolutionResult::ok("c.example".into(), 404, None),
        ];
        let report = BulkReport::from_results(results, 3, false);
        assert_eq!(report.success_count, 1);
        assert_eq!(report.total_requested, 3);
        assert!(!report.partial);
    }

    #[test]
    fn partial_report_keeps_the_requested_total() {
        let results = vec![ResolutionResult::ok("a.example".into(), 200, None)];
        let report = BulkReport::from_results(results, 10, true);
        assert_eq!(report.total_requested, 10);
        assert_eq!(report.results.len(), 1);
        assert!(report.partial);
    }

    #[test]
    fn probe_status_serializes_error_as_sentinel() {
        let row = ResolutionResult::error("x.example".into());
        let json = serde_json::to_string(&row).unwrap();
        assert!(json.contains("\"status\":\"error\""));
        assert!(json.contains("\"response\":null"));
    }
}
