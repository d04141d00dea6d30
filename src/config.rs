//! Configuration for the Farcaster provider.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Address of the attester whose Farcaster verifications are trusted.
pub const FARCASTER_ATTESTER: &str = "0x372082138ea420eBe56078D73F0359D686A7E981";

/// GraphQL endpoint of the EAS indexer on Arbitrum.
pub const BASE_EAS_SCAN_URL: &str = "https://arbitrum.easscan.org/graphql";

/// Schema id of the "verified account" attestation.
pub const VERIFIED_ACCOUNT_SCHEMA: &str =
    "0xca168d038c5d527bb9724b3201f026520b498d334a2f3f446181d6420d7fb515";

/// Free-form provider options.
///
/// The platform hands every provider an options map at construction time.
/// The Farcaster provider accepts any keys and keeps them, but reads none.
pub type ProviderOptions = serde_json::Map<String, serde_json::Value>;

/// Provider configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// EAS GraphQL endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Trusted attester address.
    #[serde(default = "default_attester")]
    pub attester: String,

    /// Schema id an attestation must carry.
    #[serde(default = "default_schema_id")]
    pub schema_id: String,

    /// Optional request timeout in seconds. No timeout when unset.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            attester: default_attester(),
            schema_id: default_schema_id(),
            request_timeout_secs: None,
        }
    }
}

fn default_endpoint() -> String {
    BASE_EAS_SCAN_URL.to_string()
}

fn default_attester() -> String {
    FARCASTER_ATTESTER.to_string()
}

fn default_schema_id() -> String {
    VERIFIED_ACCOUNT_SCHEMA.to_string()
}

impl ProviderConfig {
    /// Request timeout, if one is configured.
    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Default location of the configuration file, if the platform has a
    /// config directory.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "farcaster-verifier")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn to_file(&self, path: &std::path::Path) -> crate::Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
