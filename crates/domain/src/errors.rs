use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid record type: {0}")]
    InvalidRecordType(String),

    #[error("Malformed DNS message: {0}")]
    MalformedMessage(String),

    #[error("Transport timeout contacting {server}")]
    TransportTimeout { server: String },

    #[error("Transport connection to {server} failed: {reason}")]
    TransportConnectionFailed { server: String, reason: String },

    #[error("Upstream {server} returned HTTP {status}: {body}")]
    UpstreamHttpStatus {
        server: String,
        status: u16,
        body: String,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Transport-level failures: the upstream was never successfully spoken to,
    /// or answered outside the protocol. The bulk harness records these
    /// per-domain instead of raising them.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            DomainError::TransportTimeout { .. }
                | DomainError::TransportConnectionFailed { .. }
                | DomainError::UpstreamHttpStatus { .. }
        )
    }
}
