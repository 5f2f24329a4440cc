use crate::limiter::ConcurrencyLimiter;
use doh_relay_application::ports::{DohProbe, DomainListSource, ReportSink};
use doh_relay_domain::config::HarnessConfig;
use doh_relay_domain::{BulkReport, DomainError, ResolutionResult};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Drives one bulk run end to end: fetch the domain list, probe every entry
/// through a fixed worker pool, write the report.
///
/// Workers pull list indices from a shared cursor and store each outcome in a
/// slot addressed by that index, so the report keeps input order no matter
/// how probes interleave. Cancellation stops workers from pulling new
/// indices and abandons probes still in flight (dropping the request future
/// closes its connection); abandoned slots stay unset and are omitted from
/// the report.
pub struct BulkRunner {
    list_source: Arc<dyn DomainListSource>,
    probe: Arc<dyn DohProbe>,
    sink: Arc<dyn ReportSink>,
    limiter: Arc<ConcurrencyLimiter>,
    max_domains: usize,
    max_concurrent: usize,
    progress_every: usize,
}

impl BulkRunner {
    pub fn new(
        list_source: Arc<dyn DomainListSource>,
        probe: Arc<dyn DohProbe>,
        sink: Arc<dyn ReportSink>,
        config: &HarnessConfig,
    ) -> Self {
        Self {
            list_source,
            probe,
            sink,
            limiter: Arc::new(ConcurrencyLimiter::new(
                config.max_concurrent,
                config.limit_per_host,
            )),
            max_domains: config.max_domains,
            max_concurrent: config.max_concurrent,
            progress_every: config.progress_every,
        }
    }

    pub async fn run(&self, cancel: CancellationToken) -> Result<BulkReport, DomainError> {
        let domains = Arc::new(self.list_source.fetch(self.max_domains).await?);
        let total = domains.len();

        if total == 0 {
            warn!("Domain list is empty, nothing to probe");
            let report = BulkReport::from_results(Vec::new(), 0, false);
            self.sink.write(&report).await?;
            return Ok(report);
        }

        let slots: Arc<Vec<OnceLock<ResolutionResult>>> =
            Arc::new((0..total).map(|_| OnceLock::new()).collect());
        let cursor = Arc::new(AtomicUsize::new(0));
        let completed = Arc::new(AtomicUsize::new(0));

        let workers = self.max_concurrent.min(total);
        info!(total, workers, "Starting bulk run");

        let mut join_set = JoinSet::new();
        for _ in 0..workers {
            let domains = Arc::clone(&domains);
            let slots = Arc::clone(&slots);
            let cursor = Arc::clone(&cursor);
            let completed = Arc::clone(&completed);
            let probe = Arc::clone(&self.probe);
            let limiter = Arc::clone(&self.limiter);
            let cancel = cancel.clone();
            let progress_every = self.progress_every;

            join_set.spawn(async move {
                loop {
                    if cancel.is_cancelled() {
                        break;
                    }
                    let index = cursor.fetch_add(1, Ordering::Relaxed);
                    if index >= domains.len() {
                        break;
                    }

                    let permit = tokio::select! {
                        permit = limiter.acquire(probe.target_host()) => match permit {
                            Ok(permit) => permit,
                            Err(e) => {
                                warn!(error = %e, "Limiter unavailable, worker stopping");
                                break;
                            }
                        },
                        _ = cancel.cancelled() => break,
                    };

                    let result = tokio::select! {
                        result = probe.probe(Arc::clone(&domains[index])) => result,
                        _ = cancel.cancelled() => break,
                    };
                    drop(permit);

                    // Each index is claimed by exactly one worker.
                    let _ = slots[index].set(result);

                    let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
                    if progress_every > 0 && done % progress_every == 0 {
                        info!(completed = done, total = domains.len(), "Bulk progress");
                    }
                }
            });
        }

        while let Some(joined) = join_set.join_next().await {
            if let Err(e) = joined {
                warn!(error = %e, "Bulk worker aborted");
            }
        }

        let slots = Arc::try_unwrap(slots).map_err(|_| {
            DomainError::InternalError("Result slots still shared after drain".to_string())
        })?;
        let results: Vec<ResolutionResult> =
            slots.into_iter().filter_map(OnceLock::into_inner).collect();

        let partial = cancel.is_cancelled() || results.len() < total;
        let report = BulkReport::from_results(results, total, partial);

        info!(
            requested = report.total_requested,
            completed = report.results.len(),
            successful = report.success_count,
            partial = report.partial,
            "Bulk run complete"
        );

        self.sink.write(&report).await?;
        Ok(report)
    }
}
