use async_trait::async_trait;
use doh_relay_application::ports::{DohProbe, DomainListSource, ReportSink};
use doh_relay_domain::{BulkReport, DomainError, ResolutionResult};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Probe double that tracks concurrency instead of talking to the network.
///
/// Domains starting with `slow` sleep ten times longer; domains starting
/// with `bad` come back as transport errors.
pub struct RecordingProbe {
    host: String,
    delay: Duration,
    in_flight: AtomicUsize,
    high_water: AtomicUsize,
    calls: AtomicUsize,
}

impl RecordingProbe {
    pub fn new(delay: Duration) -> Self {
        Self {
            host: "dns.example".to_string(),
            delay,
            in_flight: AtomicUsize::new(0),
            high_water: AtomicUsize::new(0),
            calls: AtomicUsize::new(0),
        }
    }

    /// Highest number of probes observed in flight at once.
    pub fn peak_in_flight(&self) -> usize {
        self.high_water.load(Ordering::SeqCst)
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DohProbe for RecordingProbe {
    async fn probe(&self, domain: Arc<str>) -> ResolutionResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.high_water.fetch_max(now, Ordering::SeqCst);

        if domain.starts_with("slow") {
            tokio::time::sleep(self.delay * 10).await;
        } else {
            tokio::time::sleep(self.delay).await;
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if domain.starts_with("bad") {
            ResolutionResult::error(domain)
        } else {
            ResolutionResult::ok(domain, 200, Some("{\"Status\":0}".to_string()))
        }
    }

    fn target_host(&self) -> &str {
        &self.host
    }
}

pub struct StaticListSource {
    domains: Vec<Arc<str>>,
}

impl StaticListSource {
    pub fn new(domains: &[&str]) -> Self {
        Self {
            domains: domains.iter().map(|d| Arc::from(*d)).collect(),
        }
    }

    pub fn numbered(count: usize) -> Self {
        Self {
            domains: (0..count)
                .map(|i| Arc::from(format!("host{i}.example").as_str()))
                .collect(),
        }
    }
}

#[async_trait]
impl DomainListSource for StaticListSource {
    async fn fetch(&self, max: usize) -> Result<Vec<Arc<str>>, DomainError> {
        Ok(self.domains.iter().take(max).cloned().collect())
    }
}

#[derive(Default)]
pub struct CapturingSink {
    report: Mutex<Option<BulkReport>>,
}

impl CapturingSink {
    pub fn captured(&self) -> Option<BulkReport> {
        self.report.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReportSink for CapturingSink {
    async fn write(&self, report: &BulkReport) -> Result<(), DomainError> {
        *self.report.lock().unwrap() = Some(report.clone());
        Ok(())
    }
}
