//! HTTPS transport for DNS queries, per DNS-over-HTTPS (RFC 8484).
//!
//! Sends the raw wire-format message as an HTTP POST body with
//! `application/dns-message` content type; the response body is the raw
//! wire-format answer.

use super::DnsTransport;
use async_trait::async_trait;
use bytes::Bytes;
use doh_relay_domain::config::UpstreamConfig;
use doh_relay_domain::DomainError;
use std::time::Duration;
use tracing::{debug, warn};

/// Expected content type for DNS-over-HTTPS exchanges (RFC 8484 §6).
const DNS_MESSAGE_CONTENT_TYPE: &str = "application/dns-message";

/// DNS-over-HTTPS transport against a single upstream resolver.
///
/// Owns its pooled HTTP/2 client: one transport is created per process from
/// configuration and shared by every concurrent query. The pool itself
/// bounds physical connections per host.
pub struct HttpsTransport {
    client: reqwest::Client,
    url: String,
    host: String,
}

impl HttpsTransport {
    pub fn new(config: &UpstreamConfig) -> Result<Self, DomainError> {
        if !config.verify_tls {
            warn!(
                url = %config.url,
                "TLS certificate verification is DISABLED for the upstream resolver"
            );
        }

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(Duration::from_secs(config.timeout_secs))
            .pool_max_idle_per_host(config.limit_per_host)
            .pool_idle_timeout(Duration::from_secs(config.pool_idle_timeout_secs))
            .http2_prior_knowledge()
            .danger_accept_invalid_certs(!config.verify_tls)
            .build()
            .map_err(|e| {
                DomainError::InternalError(format!("Failed to build HTTP client: {}", e))
            })?;

        let host = reqwest::Url::parse(&config.url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
            .ok_or_else(|| {
                DomainError::ConfigError(format!("Upstream URL has no host: {}", config.url))
            })?;

        Ok(Self {
            client,
            url: config.url.clone(),
            host,
        })
    }
}

#[async_trait]
impl DnsTransport for HttpsTransport {
    async fn send(&self, message_bytes: &[u8], timeout: Duration) -> Result<Bytes, DomainError> {
        debug!(
            url = %self.url,
            message_len = message_bytes.len(),
            "Sending DoH query"
        );

        // POST with application/dns-message (RFC 8484 §4.1)
        let response = tokio::time::timeout(
            timeout,
            self.client
                .post(&self.url)
                .header("Content-Type", DNS_MESSAGE_CONTENT_TYPE)
                .header("Accept", DNS_MESSAGE_CONTENT_TYPE)
                .body(message_bytes.to_vec())
                .send(),
        )
        .await
        .map_err(|_| DomainError::TransportTimeout {
            server: self.url.clone(),
        })?
        .map_err(|e| {
            if e.is_timeout() {
                DomainError::TransportTimeout {
                    server: self.url.clone(),
                }
            } else {
                DomainError::TransportConnectionFailed {
                    server: self.url.clone(),
                    reason: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::UpstreamHttpStatus {
                server: self.url.clone(),
                status: status.as_u16(),
                body,
            });
        }

        let response_bytes = tokio::time::timeout(timeout, response.bytes())
            .await
            .map_err(|_| DomainError::TransportTimeout {
                server: self.url.clone(),
            })?
            .map_err(|e| DomainError::TransportConnectionFailed {
                server: self.url.clone(),
                reason: format!("failed to read response body: {}", e),
            })?;

        debug!(
            url = %self.url,
            response_len = response_bytes.len(),
            "DoH response received"
        );

        Ok(response_bytes)
    }

    fn endpoint(&self) -> &str {
        &self.url
    }

    fn host(&self) -> &str {
        &self.host
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_from_default_config() {
        let config = UpstreamConfig::default();
        let transport = HttpsTransport::new(&config).unwrap();
        assert_eq!(transport.endpoint(), "https://cloudflare-dns.com/dns-query");
        assert_eq!(transport.host(), "cloudflare-dns.com");
    }

    #[test]
    fn rejects_url_without_host() {
        let config = UpstreamConfig {
            url: "https://".to_string(),
            ..Default::default()
        };
        assert!(HttpsTransport::new(&config).is_err());
    }
}
