use serde::{Deserialize, Serialize};

/// The single backend DoH resolver the gateway forwards to.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// Full resolver endpoint, e.g. `https://dnsdist.internal/dns-query`.
    #[serde(default = "default_upstream_url")]
    pub url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// TLS certificate verification. Disabling this is an explicit,
    /// logged decision for deployments that trust the upstream by other means.
    #[serde(default = "default_true")]
    pub verify_tls: bool,

    /// Pooled connections per upstream host.
    #[serde(default = "default_limit_per_host")]
    pub limit_per_host: usize,

    /// How long idle pooled connections (and their resolved addresses) are
    /// kept, in seconds.
    #[serde(default = "default_pool_idle_secs")]
    pub pool_idle_timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            url: default_upstream_url(),
            timeout_secs: default_timeout_secs(),
            verify_tls: true,
            limit_per_host: default_limit_per_host(),
            pool_idle_timeout_secs: default_pool_idle_secs(),
        }
    }
}

fn default_upstream_url() -> String {
    "https://cloudflare-dns.com/dns-query".to_string()
}

fn default_timeout_secs() -> u64 {
    5
}

fn default_true() -> bool {
    true
}

fn default_limit_per_host() -> usize {
    20
}

fn default_pool_idle_secs() -> u64 {
    300
}
