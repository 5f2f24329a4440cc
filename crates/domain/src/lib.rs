//! doh-relay domain layer: plain types shared by the gateway and the bulk harness.

pub mod answer;
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod errors;
pub mod resolution;
pub mod validators;

pub use answer::{Answer, AnswerRecord, Question};
pub use config::{CliOverrides, Config, ConfigError};
pub use dns_query::DnsQuery;
pub use dns_record::RecordType;
pub use errors::DomainError;
pub use resolution::{BulkReport, ProbeStatus, ResolutionResult};
