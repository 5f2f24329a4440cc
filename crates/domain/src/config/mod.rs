mod errors;
mod harness;
mod logging;
mod root;
mod server;
mod upstream;

pub use errors::ConfigError;
pub use harness::{HarnessConfig, ListFormat, ProbeMode};
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use upstream::UpstreamConfig;
