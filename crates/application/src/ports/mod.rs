mod doh_probe;
mod doh_resolver;
mod domain_list;
mod report_sink;

pub use doh_probe::DohProbe;
pub use doh_resolver::DohResolverPort;
pub use domain_list::DomainListSource;
pub use report_sink::ReportSink;
