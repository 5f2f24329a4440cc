use dashmap::DashMap;
use doh_relay_domain::DomainError;
use std::sync::Arc;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

/// Two-tier in-flight gate: one global ceiling across all probes, plus a
/// separate ceiling per destination host.
///
/// Host semaphores are created lazily on first acquire and live for the
/// limiter's lifetime. Waiters on each semaphore are served in FIFO order, so
/// no acquirer is starved while others make progress.
pub struct ConcurrencyLimiter {
    global: Arc<Semaphore>,
    per_host: DashMap<String, Arc<Semaphore>>,
    limit_per_host: usize,
}

/// RAII pair covering one in-flight probe. Dropping it frees the host slot
/// and then the global slot.
pub struct LimiterPermit {
    _host: OwnedSemaphorePermit,
    _global: OwnedSemaphorePermit,
}

impl ConcurrencyLimiter {
    pub fn new(max_concurrent: usize, limit_per_host: usize) -> Self {
        Self {
            global: Arc::new(Semaphore::new(max_concurrent)),
            per_host: DashMap::new(),
            limit_per_host,
        }
    }

    /// Waits until both a global slot and a slot for `host` are free.
    ///
    /// The global slot is taken first and held while waiting for the host
    /// slot; both are released when the returned permit drops.
    pub async fn acquire(&self, host: &str) -> Result<LimiterPermit, DomainError> {
        let global = self
            .global
            .clone()
            .acquire_owned()
            .await
            .map_err(|_| DomainError::InternalError("Global limiter closed".to_string()))?;

        let host_semaphore = self
            .per_host
            .entry(host.to_string())
            .or_insert_with(|| Arc::new(Semaphore::new(self.limit_per_host)))
            .clone();

        let host = host_semaphore
            .acquire_owned()
            .await
            .map_err(|_| DomainError::InternalError("Host limiter closed".to_string()))?;

        Ok(LimiterPermit {
            _host: host,
            _global: global,
        })
    }

    pub fn available_global(&self) -> usize {
        self.global.available_permits()
    }
}
