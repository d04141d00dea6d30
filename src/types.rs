//! Request and result payloads exchanged with the platform.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A verification request as handed to a provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestPayload {
    /// Address the request is made for.
    #[serde(default)]
    pub address: Option<String>,

    /// Provider type the request targets.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub provider_type: Option<String>,

    /// Provider-specific proofs.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub proofs: BTreeMap<String, String>,
}

impl RequestPayload {
    /// Build a payload carrying only an address.
    #[must_use]
    pub fn for_address(address: impl Into<String>) -> Self {
        Self {
            address: Some(address.into()),
            ..Self::default()
        }
    }
}

/// The record attached to a verification result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationRecord {
    /// The address that was checked.
    pub address: String,
}

/// Outcome of one verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifiedPayload {
    /// Whether a valid attestation was found.
    pub valid: bool,
    /// Human readable reasons the verification failed. Empty when valid.
    pub errors: Vec<String>,
    /// Record describing what was verified.
    pub record: VerificationRecord,
}
