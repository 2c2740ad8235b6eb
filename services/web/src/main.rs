use anyhow::Result;
use clap::Parser;
use common::ClientConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cookbook::AppContext;
use cookbook::cli::{self, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    // Notifications are the user-facing surface; logs stay quiet unless asked for
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ClientConfig::load(cli.config.as_deref())?;
    info!("Using recipe service at {}", config.api_base_url);

    let ctx = AppContext::new(&config)?;
    let output = cli::execute(&ctx, cli.command).await?;
    println!("{}", output);

    Ok(())
}
