//! farcaster-verify CLI entry point.

mod cli;

use clap::Parser;
use cli::Cli;
use farcaster_verifier::{FallbackOnError, FarcasterProvider, Provider, RequestPayload};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing; stdout is reserved for the JSON result
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    info!("farcaster-verify v{}", env!("CARGO_PKG_VERSION"));

    let mut builder = FarcasterProvider::builder().config(cli.provider_config()?);
    if cli.fallback_on_error {
        builder = builder.error_policy(Arc::new(FallbackOnError));
    }
    let provider = builder.build()?;

    let result = provider
        .verify(&RequestPayload::for_address(cli.address))
        .await?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
