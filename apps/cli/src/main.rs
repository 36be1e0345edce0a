mod catalog;
mod cli;
mod client;
mod config;
mod errors;
mod generation;
mod validation;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::Cli;
use crate::client::OptimisationClient;
use crate::config::Config;
use crate::generation::generate;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (aborts on a malformed endpoint)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("endpoint: {}", config.endpoint);

    let generation = Cli::parse().into_generation()?;
    let client = OptimisationClient::new(config.endpoint.clone());

    let optimised = generate(&client, &generation).await?;
    println!("{optimised}");

    Ok(())
}
