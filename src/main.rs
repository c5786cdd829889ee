//! MonkeyLines server
//!
//! Serves randomly generated insults and comebacks.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────────┐
//!                    │                   MONKEYLINES                    │
//!                    │                                                  │
//!   HTTP client      │  ┌─────────┐    ┌──────────┐                     │
//!   ─────────────────┼─▶│  http   │───▶│ handlers │──┐                  │
//!                    │  │ server  │    │ page/json│  │   ┌───────────┐  │
//!                    │  └─────────┘    └──────────┘  ├──▶│ generator │  │
//!   telnet / nc      │  ┌─────────┐    ┌──────────┐  │   │  corpus   │  │
//!   ─────────────────┼─▶│   net   │───▶│   line   │──┘   └───────────┘  │
//!                    │  │listener │    │  server  │                     │
//!                    │  └─────────┘    └──────────┘                     │
//!                    │                                                  │
//!                    │  config · observability · security · lifecycle   │
//!                    └──────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;

use monkeylines::config::{self, PortOverrides};
use monkeylines::generator;
use monkeylines::lifecycle;
use monkeylines::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "monkeylines", version)]
#[command(about = "Serves insults and comebacks over HTTP and TCP", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the HTTP listener port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override the TCP listener port
    #[arg(long)]
    tcp_port: Option<u16>,

    /// Validate configuration and corpus, then exit
    #[arg(long)]
    check: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = config::resolve(
        cli.config.as_deref(),
        PortOverrides {
            http: cli.http_port,
            tcp: cli.tcp_port,
        },
    )?;

    logging::init(&config.observability)?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "monkeylines starting");
    tracing::info!(
        http_bind_address = %config.listener.http_bind_address,
        tcp_bind_address = %config.listener.tcp_bind_address,
        max_connections = config.listener.max_connections,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if cli.check {
        let corpus = generator::init()?;
        tracing::info!(
            themes = corpus.themes().len(),
            templates = corpus.template_count(),
            "Configuration and corpus are valid"
        );
        return Ok(());
    }

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => {
                if let Err(e) = metrics::init_metrics(addr) {
                    tracing::error!(error = %e, "Failed to start metrics exporter");
                }
            }
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    lifecycle::run(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
