use clap::{Parser, Subcommand};
use doh_relay_domain::config::CliOverrides;
use std::net::SocketAddr;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "doh-relay")]
#[command(version)]
#[command(about = "DNS-over-HTTPS gateway and bulk resolution harness")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP gateway
    Serve {
        /// Web server port
        #[arg(short = 'p', long)]
        port: Option<u16>,

        /// Bind address
        #[arg(short = 'b', long)]
        bind: Option<String>,

        /// Upstream DoH resolver URL
        #[arg(long)]
        upstream: Option<String>,
    },

    /// Probe a domain list and write a CSV report
    Bulk {
        /// Probe target URL (DoH endpoint or gateway base URL)
        #[arg(long)]
        target: Option<String>,

        /// Maximum domains to process
        #[arg(long)]
        max_domains: Option<usize>,

        /// Global in-flight ceiling
        #[arg(long)]
        max_concurrent: Option<usize>,

        /// In-flight ceiling per destination host
        #[arg(long)]
        limit_per_host: Option<usize>,

        /// Report file path
        #[arg(short = 'o', long)]
        output: Option<String>,
    },
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        let mut overrides = CliOverrides {
            log_level: self.log_level.clone(),
            ..Default::default()
        };

        match &self.command {
            Command::Serve {
                port,
                bind,
                upstream,
            } => {
                overrides.web_port = *port;
                overrides.bind_address = bind.clone();
                overrides.upstream_url = upstream.clone();
            }
            Command::Bulk {
                target,
                max_domains,
                max_concurrent,
                limit_per_host,
                output,
            } => {
                overrides.target_url = target.clone();
                overrides.max_domains = *max_domains;
                overrides.max_concurrent = *max_concurrent;
                overrides.limit_per_host = *limit_per_host;
                overrides.output_path = output.clone();
            }
        }

        overrides
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;
    bootstrap::init_logging(&config);

    info!("doh-relay v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Command::Serve { .. } => {
            let state = di::build_gateway(&config)?;
            let addr: SocketAddr =
                format!("{}:{}", config.server.bind_address, config.server.web_port).parse()?;
            server::start_web_server(addr, state).await?;
        }

        Command::Bulk { .. } => {
            let runner = di::build_bulk_runner(&config)?;

            let cancel = CancellationToken::new();
            let trigger = cancel.clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    warn!("Interrupt received, abandoning in-flight probes");
                    trigger.cancel();
                }
            });

            let report = runner.run(cancel).await?;
            println!(
                "Completed {} successful requests out of {}",
                report.success_count, report.total_requested
            );
        }
    }

    Ok(())
}
