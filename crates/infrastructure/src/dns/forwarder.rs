use super::forwarding::{MessageBuilder, ResponseParser};
use super::transport::DnsTransport;
use async_trait::async_trait;
use doh_relay_application::ports::DohResolverPort;
use doh_relay_domain::{Answer, DnsQuery, DomainError};
use std::sync::Arc;
use std::time::Duration;

/// The gateway's forwarding pipeline: encode the question, send it over the
/// transport, decode the response. One upstream attempt per call.
pub struct DohForwarder {
    transport: Arc<dyn DnsTransport>,
    timeout: Duration,
}

impl DohForwarder {
    pub fn new(transport: Arc<dyn DnsTransport>, timeout: Duration) -> Self {
        Self { transport, timeout }
    }
}

#[async_trait]
impl DohResolverPort for DohForwarder {
    async fn resolve(&self, query: &DnsQuery) -> Result<Answer, DomainError> {
        let request_bytes = MessageBuilder::build_query(query)?;
        let response_bytes = self.transport.send(&request_bytes, self.timeout).await?;
        ResponseParser::parse_bytes(response_bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use doh_relay_domain::RecordType;
    use hickory_proto::op::{Message, MessageType, OpCode};
    use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};

    /// Echoes a well-formed empty NOERROR response for any query.
    struct EchoTransport;

    #[async_trait]
    impl DnsTransport for EchoTransport {
        async fn send(
            &self,
            message_bytes: &[u8],
            _timeout: Duration,
        ) -> Result<Bytes, DomainError> {
            let request = Message::from_vec(message_bytes).unwrap();
            let mut response = Message::new(request.metadata.id, MessageType::Response, OpCode::Query);
            for q in &request.queries {
                response.add_query(q.clone());
            }

            let mut buf = Vec::new();
            let mut encoder = BinEncoder::new(&mut buf);
            response.emit(&mut encoder).unwrap();
            Ok(Bytes::from(buf))
        }

        fn endpoint(&self) -> &str {
            "https://stub.invalid/dns-query"
        }

        fn host(&self) -> &str {
            "stub.invalid"
        }
    }

    /// Always fails at the connection level.
    struct DeadTransport;

    #[async_trait]
    impl DnsTransport for DeadTransport {
        async fn send(&self, _: &[u8], _: Duration) -> Result<Bytes, DomainError> {
            Err(DomainError::TransportConnectionFailed {
                server: "https://dead.invalid/dns-query".to_string(),
                reason: "connection refused".to_string(),
            })
        }

        fn endpoint(&self) -> &str {
            "https://dead.invalid/dns-query"
        }

        fn host(&self) -> &str {
            "dead.invalid"
        }
    }

    #[tokio::test]
    async fn round_trips_the_question() {
        let forwarder = DohForwarder::new(Arc::new(EchoTransport), Duration::from_secs(5));
        let query = DnsQuery::new("Example.COM", RecordType::SOA).unwrap();

        let answer = forwarder.resolve(&query).await.unwrap();
        assert_eq!(answer.status, "NOERROR");
        assert_eq!(answer.question.name.to_lowercase(), "example.com");
        assert_eq!(answer.question.record_type, "SOA");
        assert!(answer.records.is_empty());
    }

    #[tokio::test]
    async fn transport_errors_pass_through() {
        let forwarder = DohForwarder::new(Arc::new(DeadTransport), Duration::from_secs(5));
        let query = DnsQuery::new("example.com", RecordType::A).unwrap();

        let err = forwarder.resolve(&query).await.unwrap_err();
        assert!(matches!(err, DomainError::TransportConnectionFailed { .. }));
    }
}
