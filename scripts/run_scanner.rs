use brandguard_adaptor_web::{ScanApiConfig, ScanApiServer};
use brandguard_core::utils::logger::init_logging;
use clap::Parser;
use dotenvy::dotenv;

#[derive(Parser, Debug)]
struct Cli {
    #[arg(long, env = "BRANDGUARD_LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Override BRANDGUARD_HOST
    #[arg(long)]
    host: Option<String>,

    /// Override BRANDGUARD_PORT
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> brandguard_core::Result<()> {
    let cli = Cli::parse();
    std::env::set_var("RUST_LOG", &cli.log_level);
    std::env::set_var("BRANDGUARD_LOG_LEVEL", &cli.log_level);
    init_logging();
    let _ = dotenv();

    let mut config = ScanApiConfig::from_env();
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }

    let server = ScanApiServer::new(config);
    server.start().await?;

    tokio::signal::ctrl_c().await.ok();
    tracing::info!("Shutting down");
    Ok(())
}
