//! weather-forecast-mcp - Japanese regional weather forecasts for AI assistants
//!
//! Run with: `weather-forecast-mcp` (serves on stdio)

use anyhow::Context;
use clap::Parser;
use rmcp::{transport::stdio, ServiceExt};
use rmcp_forecast::{ClientConfig, ForecastServer, DEFAULT_BASE_URL};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Upstream forecast API origin
    #[arg(long, env = "FORECAST_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, env = "FORECAST_LOG", default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the protocol
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(cli).await {
        tracing::error!("Fatal error in main(): {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    tracing::info!(base_url = %cli.base_url, "Starting weather-forecast-mcp server");

    let server = ForecastServer::with_config(ClientConfig {
        base_url: cli.base_url,
    });
    let service = server
        .serve(stdio())
        .await
        .context("failed to attach stdio transport")?;

    tracing::info!("Weather forecast MCP server running on stdio");

    service.waiting().await?;

    tracing::info!("weather-forecast-mcp server stopped");
    Ok(())
}
