//! Command-line interface definition.

use clap::Parser;
use farcaster_verifier::ProviderConfig;
use std::path::PathBuf;

/// Check whether a wallet address holds a Farcaster account attestation.
#[derive(Parser, Debug)]
#[command(name = "farcaster-verify")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Wallet address to verify (0x-prefixed, 20 bytes).
    pub address: String,

    /// EAS GraphQL endpoint.
    #[arg(long, env = "FARCASTER_EAS_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, env = "FARCASTER_TIMEOUT_SECS")]
    pub timeout: Option<u64>,

    /// Report "not found" instead of failing when the indexer is unreachable.
    #[arg(long)]
    pub fallback_on_error: bool,

    /// Log level.
    #[arg(long, default_value = "warn", env = "RUST_LOG")]
    pub log_level: String,

    /// Path to configuration file.
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Build the provider configuration from the config file and flags.
    ///
    /// An explicit `--config` must exist. Otherwise the default location is
    /// used when present.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be loaded.
    pub fn provider_config(&self) -> color_eyre::Result<ProviderConfig> {
        let path = self
            .config
            .clone()
            .or_else(|| ProviderConfig::default_path().filter(|p| p.exists()));

        let mut config = match path {
            Some(path) => ProviderConfig::from_file(&path)?,
            None => ProviderConfig::default(),
        };

        if let Some(endpoint) = &self.endpoint {
            config.endpoint.clone_from(endpoint);
        }
        if self.timeout.is_some() {
            config.request_timeout_secs = self.timeout;
        }

        Ok(config)
    }
}
