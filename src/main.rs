use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use merch_lense::config::{ConfigOverrides, ServerConfig};
use merch_lense::{logging, server};

/// Serve the Merch Lense web UI and forward its API calls to the backend
#[derive(Debug, Parser)]
#[command(name = "merch-lense", version, about)]
struct Cli {
    /// Config file (default: <config dir>/merch-lense/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen address, e.g. 127.0.0.1:3000
    #[arg(long)]
    bind: Option<SocketAddr>,

    /// Backend base URL that /api/* is forwarded to
    #[arg(long)]
    backend_url: Option<String>,

    /// Directory holding the built frontend
    #[arg(long)]
    dist_dir: Option<PathBuf>,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            bind_addr: self.bind,
            backend_url: self.backend_url.clone(),
            dist_dir: self.dist_dir.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = ServerConfig::load(cli.config.as_deref(), &cli.overrides())
        .context("Failed to load configuration")?;

    logging::init(&config.log_level, config.log_format);
    log::info!("{} v{} starting", merch_lense::NAME, merch_lense::VERSION);

    server::serve(config).await.context("Server failed")?;
    Ok(())
}
