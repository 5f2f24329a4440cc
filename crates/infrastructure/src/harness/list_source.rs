use async_trait::async_trait;
use doh_relay_application::ports::DomainListSource;
use doh_relay_domain::config::{HarnessConfig, ListFormat};
use doh_relay_domain::DomainError;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

const LIST_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches the bulk-run domain list over HTTP.
///
/// Two source shapes: a plain list (one domain per line, `#` comments) and a
/// CSV with a named domain column (e.g. the Majestic Million's `Domain`).
pub struct HttpDomainListSource {
    client: reqwest::Client,
    url: String,
    format: ListFormat,
    csv_column: String,
}

impl HttpDomainListSource {
    pub fn new(config: &HarnessConfig) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(LIST_FETCH_TIMEOUT)
            .build()
            .map_err(|e| {
                DomainError::InternalError(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            url: config.list_url.clone(),
            format: config.list_format,
            csv_column: config.csv_column.clone(),
        })
    }

    fn parse_lines(text: &str, max: usize) -> Vec<Arc<str>> {
        text.lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .take(max)
            .map(Arc::from)
            .collect()
    }

    fn parse_csv(text: &str, column: &str, max: usize) -> Result<Vec<Arc<str>>, DomainError> {
        let mut reader = csv::Reader::from_reader(text.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| DomainError::IoError(format!("Failed to read CSV header: {}", e)))?;
        let idx = headers.iter().position(|h| h == column).ok_or_else(|| {
            DomainError::IoError(format!("CSV has no '{}' column", column))
        })?;

        let mut domains = Vec::new();
        for record in reader.records() {
            if domains.len() >= max {
                break;
            }
            let record =
                record.map_err(|e| DomainError::IoError(format!("Bad CSV row: {}", e)))?;
            if let Some(value) = record.get(idx) {
                let value = value.trim();
                if !value.is_empty() {
                    domains.push(Arc::from(value));
                }
            }
        }
        Ok(domains)
    }
}

#[async_trait]
impl DomainListSource for HttpDomainListSource {
    async fn fetch(&self, max: usize) -> Result<Vec<Arc<str>>, DomainError> {
        info!(url = %self.url, max = max, "Downloading domain list");

        let response = self.client.get(&self.url).send().await.map_err(|e| {
            DomainError::TransportConnectionFailed {
                server: self.url.clone(),
                reason: e.to_string(),
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::UpstreamHttpStatus {
                server: self.url.clone(),
                status: status.as_u16(),
                body: String::new(),
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| DomainError::IoError(format!("Failed to read list body: {}", e)))?;

        let domains = match self.format {
            ListFormat::Lines => Self::parse_lines(&text, max),
            ListFormat::Csv => Self::parse_csv(&text, &self.csv_column, max)?,
        };

        info!(count = domains.len(), "Domain list loaded");
        Ok(domains)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_lines_skipping_comments() {
        let text = "# a blocklist\nexample.com\n\n  tracker.example  \n# trailer\n";
        let domains = HttpDomainListSource::parse_lines(text, 100);
        assert_eq!(domains.len(), 2);
        assert_eq!(&*domains[0], "example.com");
        assert_eq!(&*domains[1], "tracker.example");
    }

    #[test]
    fn truncates_lines_to_max() {
        let text = "a.com\nb.com\nc.com\n";
        let domains = HttpDomainListSource::parse_lines(text, 2);
        assert_eq!(domains.len(), 2);
    }

    #[test]
    fn parses_csv_column_in_order() {
        let text = "GlobalRank,TldRank,Domain,TLD\n1,1,google.com,com\n2,2,facebook.com,com\n";
        let domains = HttpDomainListSource::parse_csv(text, "Domain", 100).unwrap();
        assert_eq!(domains.len(), 2);
        assert_eq!(&*domains[0], "google.com");
        assert_eq!(&*domains[1], "facebook.com");
    }

    #[test]
    fn csv_missing_column_is_an_error() {
        let text = "Rank,Name\n1,google.com\n";
        assert!(HttpDomainListSource::parse_csv(text, "Domain", 100).is_err());
    }

    #[test]
    fn csv_truncates_to_max() {
        let text = "Domain\na.com\nb.com\nc.com\n";
        let domains = HttpDomainListSource::parse_csv(text, "Domain", 2).unwrap();
        assert_eq!(domains.len(), 2);
    }
}
