use crate::dns_record::RecordType;
use crate::errors::DomainError;
use crate::validators::validate_domain_name;
use std::sync::Arc;

/// A single DNS question (domain + record type).
///
/// `Arc<str>` keeps clones cheap when the same name travels through the
/// gateway, the harness and the report.
#[derive(Debug, Clone)]
pub struct DnsQuery {
    pub domain: Arc<str>,
    pub record_type: RecordType,
}

impl DnsQuery {
    /// Validates the domain name up front so encoding can assume syntactic
    /// plausibility.
    pub fn new(domain: impl Into<Arc<str>>, record_type: RecordType) -> Result<Self, DomainError> {
        let domain = domain.into();
        validate_domain_name(&domain)?;
        Ok(Self {
            domain,
            record_type,
        })
    }
}
