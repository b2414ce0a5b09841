use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

mod api;
mod commands;
mod config;
mod models;
mod services;
mod utils;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenv::dotenv().ok();

    // Logs go to stderr; stdout only carries the report
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("btc_trend=info")))
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let cli = commands::Cli::parse();
    let config = config::Config::from_env();
    debug!("Pro API key configured: {}", config.api_key.is_some());

    if let Err(e) = commands::handle(cli, &config).await {
        error!("❌ {}", e);
        std::process::exit(1);
    }
}
