use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::harness::HarnessConfig;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::upstream::UpstreamConfig;

/// Main configuration for doh-relay.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub upstream: UpstreamConfig,

    #[serde(default)]
    pub harness: HarnessConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Command-line values that win over the config file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub web_port: Option<u16>,
    pub bind_address: Option<String>,
    pub upstream_url: Option<String>,
    pub log_level: Option<String>,
    pub max_domains: Option<usize>,
    pub max_concurrent: Option<usize>,
    pub limit_per_host: Option<usize>,
    pub output_path: Option<String>,
    pub target_url: Option<String>,
}

impl Config {
    /// Load configuration from file or use defaults.
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. doh-relay.toml in the current directory
    /// 3. /etc/doh-relay/config.toml
    /// 4. Defaults
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("doh-relay.toml").exists() {
            Self::from_file("doh-relay.toml")?
        } else if std::path::Path::new("/etc/doh-relay/config.toml").exists() {
            Self::from_file("/etc/doh-relay/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.web_port {
            self.server.web_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(url) = overrides.upstream_url {
            self.upstream.url = url;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(max) = overrides.max_domains {
            self.harness.max_domains = max;
        }
        if let Some(max) = overrides.max_concurrent {
            self.harness.max_concurrent = max;
        }
        if let Some(limit) = overrides.limit_per_host {
            self.harness.limit_per_host = limit;
        }
        if let Some(path) = overrides.output_path {
            self.harness.output_path = path;
        }
        if let Some(url) = overrides.target_url {
            self.harness.target_url = url;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.web_port == 0 {
            return Err(ConfigError::Validation("Web port cannot be 0".to_string()));
        }

        validate_http_url("upstream.url", &self.upstream.url)?;
        validate_http_url("harness.target_url", &self.harness.target_url)?;
        validate_http_url("harness.list_url", &self.harness.list_url)?;

        if self.upstream.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "upstream.timeout_secs must be at least 1".to_string(),
            ));
        }

        if self.harness.max_concurrent == 0 {
            return Err(ConfigError::Validation(
                "harness.max_concurrent must be at least 1".to_string(),
            ));
        }

        if self.harness.limit_per_host == 0 {
            return Err(ConfigError::Validation(
                "harness.limit_per_host must be at least 1".to_string(),
            ));
        }

        if self.harness.probe_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "harness.probe_timeout_secs must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

fn validate_http_url(field: &str, url: &str) -> Result<(), ConfigError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://, got '{url}'"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.upstream.timeout_secs, 5);
        assert_eq!(config.harness.max_concurrent, 512);
        assert_eq!(config.harness.max_domains, 100_000);
        assert!(config.upstream.verify_tls);
    }

    #[test]
    fn cli_overrides_win() {
        let overrides = CliOverrides {
            max_concurrent: Some(64),
            upstream_url: Some("https://dns.example/dns-query".to_string()),
            ..Default::default()
        };
        let mut config = Config::default();
        config.apply_cli_overrides(overrides);
        assert_eq!(config.harness.max_concurrent, 64);
        assert_eq!(config.upstream.url, "https://dns.example/dns-query");
    }

    #[test]
    fn zero_concurrency_is_rejected() {
        let mut config = Config::default();
        config.harness.max_concurrent = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_probe_timeout_is_rejected() {
        let mut config = Config::default();
        config.harness.probe_timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn parses_partial_toml() {
        let toml_str = r#"
            [upstream]
            url = "https://dnsdist.internal/dns-query"
            verify_tls = false

            [harness]
            max_concurrent = 128
            mode = "gateway"
            probe_timeout_secs = 10
        "#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.upstream.url, "https://dnsdist.internal/dns-query");
        assert!(!config.upstream.verify_tls);
        assert_eq!(config.harness.max_concurrent, 128);
        assert_eq!(config.harness.probe_timeout_secs, 10);
        assert_eq!(config.harness.mode, super::super::ProbeMode::Gateway);
        // untouched sections keep their defaults
        assert_eq!(config.harness.limit_per_host, 20);
        assert_eq!(config.server.web_port, 8000);
    }
}
