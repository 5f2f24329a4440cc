//! Bulk resolution harness: drives many DoH probes against one target while
//! holding a global and a per-host concurrency ceiling.

pub mod limiter;
pub mod runner;

pub use limiter::{ConcurrencyLimiter, LimiterPermit};
pub use runner::BulkRunner;
