// src/main.rs

use clap::Parser;
use tracing_subscriber::EnvFilter;

use backoffice::{
    cli::{Cli, Console},
    config::AppConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .compact()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::from_env()?;
    if let Some(url) = cli.url.clone() {
        config.api_base_url = url;
        config.validate()?;
    }

    tracing::debug!("✅ Console apontando para {}", config.api_base_url);

    let console = Console::open(config)?;
    console.run(cli.command).await
}
