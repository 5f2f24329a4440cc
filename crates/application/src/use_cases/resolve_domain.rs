use crate::ports::DohResolverPort;
use doh_relay_domain::{Answer, DnsQuery, DomainError, RecordType};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

/// The gateway's single-query path: validate inputs, forward once, return the
/// decoded answer. Validation failures are distinguishable from upstream
/// failures by error variant.
pub struct ResolveDomainUseCase {
    resolver: Arc<dyn DohResolverPort>,
}

impl ResolveDomainUseCase {
    pub fn new(resolver: Arc<dyn DohResolverPort>) -> Self {
        Self { resolver }
    }

    pub async fn execute(&self, name: &str, type_text: &str) -> Result<Answer, DomainError> {
        let record_type = RecordType::from_str(type_text)?;
        let query = DnsQuery::new(name, record_type)?;

        let start = Instant::now();
        match self.resolver.resolve(&query).await {
            Ok(answer) => {
                debug!(
                    domain = %query.domain,
                    record_type = %query.record_type,
                    status = %answer.status,
                    records = answer.records.len(),
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "Query resolved"
                );
                Ok(answer)
            }
            Err(e) => {
                warn!(
                    domain = %query.domain,
                    record_type = %query.record_type,
                    error = %e,
                    "Query failed"
                );
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use doh_relay_domain::{AnswerRecord, Question};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubResolver {
        calls: AtomicUsize,
        outcome: Result<(), DomainError>,
    }

    impl StubResolver {
        fn ok() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                outcome: Ok(()),
            }
        }

        fn failing(err: DomainError) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                outcome: Err(err),
            }
        }
    }

    #[async_trait]
    impl DohResolverPort for StubResolver {
        async fn resolve(&self, query: &DnsQuery) -> Result<Answer, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.outcome {
                Ok(()) => Ok(Answer {
                    status: "NOERROR".to_string(),
                    question: Question::new(query.domain.to_string(), query.record_type),
                    records: vec![AnswerRecord {
                        name: query.domain.to_string(),
                        record_type: query.record_type.as_str().to_string(),
                        ttl: 300,
                        data: "192.0.2.1".to_string(),
                    }],
                }),
                Err(e) => Err(e.clone()),
            }
        }
    }

    #[tokio::test]
    async fn resolves_valid_query() {
        let resolver = Arc::new(StubResolver::ok());
        let use_case = ResolveDomainUseCase::new(resolver.clone());

        let answer = use_case.execute("example.com", "A").await.unwrap();
        assert_eq!(answer.status, "NOERROR");
        assert_eq!(answer.question.name, "example.com");
        assert_eq!(resolver.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn rejects_bad_type_before_forwarding() {
        let resolver = Arc::new(StubResolver::ok());
        let use_case = ResolveDomainUseCase::new(resolver.clone());

        let err = use_case.execute("example.com", "BOGUS").await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidRecordType(t) if t == "BOGUS"));
        assert_eq!(resolver.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn rejects_empty_name_before_forwarding() {
        let resolver = Arc::new(StubResolver::ok());
        let use_case = ResolveDomainUseCase::new(resolver.clone());

        let err = use_case.execute("", "A").await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidDomainName(_)));
        assert_eq!(resolver.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn single_attempt_no_retry_on_transport_error() {
        let resolver = Arc::new(StubResolver::failing(DomainError::TransportTimeout {
            server: "https://dns.example/dns-query".to_string(),
        }));
        let use_case = ResolveDomainUseCase::new(resolver.clone());

        let err = use_case.execute("example.com", "A").await.unwrap_err();
        assert!(err.is_transport());
        assert_eq!(resolver.calls.load(Ordering::SeqCst), 1);
    }
}
