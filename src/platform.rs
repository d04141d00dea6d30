//! Platform metadata shown to users choosing what to verify.

use crate::config::ProviderOptions;
use crate::error::Result;
use crate::provider::{FarcasterProvider, Provider, FARCASTER_PROVIDER_TYPE};
use serde::Serialize;

/// Description of the Farcaster platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformDetails {
    /// Icon asset path.
    pub icon: &'static str,
    /// Platform identifier.
    pub platform: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Short description.
    pub description: &'static str,
    /// Platform website.
    pub website: &'static str,
    /// Label of the connect button.
    pub connect_message: &'static str,
    /// Whether verification is tied to an EVM address.
    #[serde(rename = "isEVM")]
    pub is_evm: bool,
}

/// One selectable provider inside a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderSpec {
    /// Display title.
    pub title: &'static str,
    /// What the user is agreeing to.
    pub description: &'static str,
    /// Provider type the entry maps to.
    pub name: &'static str,
}

/// A named group of providers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformGroupSpec {
    /// Group heading.
    pub platform_group: &'static str,
    /// Providers in the group.
    pub providers: Vec<ProviderSpec>,
}

/// Farcaster platform details.
pub const PLATFORM_DETAILS: PlatformDetails = PlatformDetails {
    icon: "./assets/farcasterLogoIcon.svg",
    platform: "Farcaster",
    name: "Farcaster",
    description: "Verify Your Farcaster Account & Onchain Identity",
    website: "https://farcaster.xyz/",
    connect_message: "Verify Account",
    is_evm: true,
};

/// Provider groups offered by the platform.
#[must_use]
pub fn provider_groups() -> Vec<PlatformGroupSpec> {
    vec![PlatformGroupSpec {
        platform_group: "Account & Onchain Identity",
        providers: vec![ProviderSpec {
            title: "Privacy-First Verification",
            description: "Your privacy is paramount. We only retain your Farcaster ID to acknowledge your account's verification.",
            name: FARCASTER_PROVIDER_TYPE,
        }],
    }]
}

/// Providers implemented by this platform, with default configuration.
///
/// # Errors
///
/// Returns an error if a provider cannot be constructed.
pub fn providers() -> Result<Vec<Box<dyn Provider>>> {
    Ok(vec![Box::new(FarcasterProvider::new(Some(
        ProviderOptions::new(),
    ))?)])
}
