use doh_relay_api::AppState;
use doh_relay_application::use_cases::ResolveDomainUseCase;
use doh_relay_domain::config::Config;
use doh_relay_domain::DomainError;
use doh_relay_harness::BulkRunner;
use doh_relay_infrastructure::dns::transport::{DnsTransport, HttpsTransport};
use doh_relay_infrastructure::dns::DohForwarder;
use doh_relay_infrastructure::harness::{CsvReportSink, DohJsonProbe, HttpDomainListSource};
use std::sync::Arc;
use std::time::Duration;

/// Wires the gateway: transport, forwarding pipeline, resolve use case.
pub fn build_gateway(config: &Config) -> Result<AppState, DomainError> {
    let transport: Arc<dyn DnsTransport> = Arc::new(HttpsTransport::new(&config.upstream)?);
    let forwarder = Arc::new(DohForwarder::new(
        transport,
        Duration::from_secs(config.upstream.timeout_secs),
    ));

    Ok(AppState {
        resolve: Arc::new(ResolveDomainUseCase::new(forwarder)),
    })
}

/// Wires the bulk harness: list source, probe, report sink, runner.
pub fn build_bulk_runner(config: &Config) -> Result<BulkRunner, DomainError> {
    let list_source = Arc::new(HttpDomainListSource::new(&config.harness)?);
    let probe = Arc::new(DohJsonProbe::new(&config.harness)?);
    let sink = Arc::new(CsvReportSink::new(&config.harness.output_path));

    Ok(BulkRunner::new(list_source, probe, sink, &config.harness))
}
