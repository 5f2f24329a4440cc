pub mod list_source;
pub mod probe;
pub mod report;

pub use list_source::HttpDomainListSource;
pub use probe::DohJsonProbe;
pub use report::CsvReportSink;
