use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use investguard::api::start_server;
use investguard::utils::logger::init_logger;
use investguard::utils::settings::load_config;

/// InvestGuard fraud-risk scoring API
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Directory for log files
    #[arg(long)]
    log_dir: Option<String>,
}

#[actix_web::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = load_config(args.config.as_deref())?;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(log_dir) = args.log_dir {
        config.log_dir = log_dir;
    }

    let log_file = init_logger(&config.log_dir)?;
    println!("Logging to {}", log_file.display());

    start_server(config).await
}
