use serde::{Deserialize, Serialize};

/// Shape of the remote domain list.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ListFormat {
    /// One domain per line, `#` comments and blank lines skipped.
    #[default]
    Lines,
    /// CSV with a named domain column.
    Csv,
}

/// Whether bulk probes hit the public DoH endpoint directly or go through a
/// running gateway instance.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProbeMode {
    #[default]
    Direct,
    Gateway,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HarnessConfig {
    /// Where the domain list is fetched from.
    #[serde(default = "default_list_url")]
    pub list_url: String,

    #[serde(default)]
    pub list_format: ListFormat,

    /// Column holding the domain when `list_format = "csv"`.
    #[serde(default = "default_csv_column")]
    pub csv_column: String,

    /// Truncate the list to at most this many domains.
    #[serde(default = "default_max_domains")]
    pub max_domains: usize,

    /// Global in-flight probe ceiling.
    #[serde(default = "default_max_concurrent")]
    pub max_concurrent: usize,

    /// In-flight probe ceiling per destination host.
    #[serde(default = "default_limit_per_host")]
    pub limit_per_host: usize,

    /// Record type each probe asks for.
    #[serde(default = "default_record_type")]
    pub record_type: String,

    /// Per-probe request timeout in seconds.
    #[serde(default = "default_probe_timeout_secs")]
    pub probe_timeout_secs: u64,

    #[serde(default)]
    pub mode: ProbeMode,

    /// Probe target: a DoH endpoint in `direct` mode (`?name=&type=` is
    /// appended), a gateway base URL in `gateway` mode (`/resolve` is used).
    #[serde(default = "default_target_url")]
    pub target_url: String,

    /// Where the CSV report is written.
    #[serde(default = "default_output_path")]
    pub output_path: String,

    /// Log a progress line every N completed probes.
    #[serde(default = "default_progress_every")]
    pub progress_every: usize,

    /// Idle lifetime of pooled probe connections, in seconds. Stands in for
    /// the transport's own name-resolution cache TTL.
    #[serde(default = "default_pool_idle_secs")]
    pub pool_idle_timeout_secs: u64,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            list_url: default_list_url(),
            list_format: ListFormat::default(),
            csv_column: default_csv_column(),
            max_domains: default_max_domains(),
            max_concurrent: default_max_concurrent(),
            limit_per_host: default_limit_per_host(),
            record_type: default_record_type(),
            probe_timeout_secs: default_probe_timeout_secs(),
            mode: ProbeMode::default(),
            target_url: default_target_url(),
            output_path: default_output_path(),
            progress_every: default_progress_every(),
            pool_idle_timeout_secs: default_pool_idle_secs(),
        }
    }
}

fn default_list_url() -> String {
    "https://downloads.majestic.com/majestic_million.csv".to_string()
}

fn default_csv_column() -> String {
    "Domain".to_string()
}

fn default_max_domains() -> usize {
    100_000
}

fn default_max_concurrent() -> usize {
    512
}

fn default_limit_per_host() -> usize {
    20
}

fn default_record_type() -> String {
    "SOA".to_string()
}

fn default_probe_timeout_secs() -> u64 {
    30
}

fn default_target_url() -> String {
    "https://cloudflare-dns.com/dns-query".to_string()
}

fn default_output_path() -> String {
    "doh-relay-report.csv".to_string()
}

fn default_progress_every() -> usize {
    1000
}

fn default_pool_idle_secs() -> u64 {
    300
}
