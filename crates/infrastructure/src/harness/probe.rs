use async_trait::async_trait;
use doh_relay_application::ports::DohProbe;
use doh_relay_domain::config::{HarnessConfig, ProbeMode};
use doh_relay_domain::{DomainError, RecordType, ResolutionResult};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

const DNS_JSON_CONTENT_TYPE: &str = "application/dns-json";

/// One-shot DoH probe used by the bulk harness.
///
/// `Direct` mode issues the DNS-JSON GET the public resolvers accept;
/// `Gateway` mode goes through a running doh-relay instance's `/resolve`
/// endpoint instead, exercising the whole forwarding pipeline.
pub struct DohJsonProbe {
    client: reqwest::Client,
    mode: ProbeMode,
    target_url: String,
    host: String,
    record_type: RecordType,
    timeout: Duration,
}

impl DohJsonProbe {
    pub fn new(config: &HarnessConfig) -> Result<Self, DomainError> {
        let record_type = RecordType::from_str(&config.record_type)?;

        // Mirrors the transport pool the gateway uses: capped connections per
        // host, idle entries kept for the configured TTL so repeated probes
        // reuse sockets and resolved addresses.
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(Duration::from_secs(config.probe_timeout_secs))
            .pool_max_idle_per_host(config.limit_per_host)
            .pool_idle_timeout(Duration::from_secs(config.pool_idle_timeout_secs))
            .build()
            .map_err(|e| {
                DomainError::InternalError(format!("Failed to build HTTP client: {}", e))
            })?;

        let host = reqwest::Url::parse(&config.target_url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
            .ok_or_else(|| {
                DomainError::ConfigError(format!(
                    "Probe target URL has no host: {}",
                    config.target_url
                ))
            })?;

        Ok(Self {
            client,
            mode: config.mode,
            target_url: config.target_url.trim_end_matches('/').to_string(),
            host,
            record_type,
            timeout: Duration::from_secs(config.probe_timeout_secs),
        })
    }

    fn request(&self, domain: &str) -> reqwest::RequestBuilder {
        let builder = match self.mode {
            ProbeMode::Direct => self
                .client
                .get(&self.target_url)
                .header("Accept", DNS_JSON_CONTENT_TYPE)
                .query(&[("name", domain), ("type", self.record_type.as_str())]),
            ProbeMode::Gateway => self
                .client
                .get(format!("{}/resolve", self.target_url))
                .query(&[("url", domain), ("type", self.record_type.as_str())]),
        };
        builder.timeout(self.timeout)
    }
}

#[async_trait]
impl DohProbe for DohJsonProbe {
    async fn probe(&self, domain: Arc<str>) -> ResolutionResult {
        match self.request(&domain).send().await {
            Ok(response) => {
                let status = response.status().as_u16();
                // Body text is only kept for successful lookups; error pages
                // would bloat the report without adding signal.
                let body = if status == 200 {
                    response.text().await.ok()
                } else {
                    None
                };
                ResolutionResult::ok(domain, status, body)
            }
            Err(e) => {
                debug!(domain = %domain, error = %e, "Probe failed");
                ResolutionResult::error(domain)
            }
        }
    }

    fn target_host(&self) -> &str {
        &self.host
    }
}
