//! Address resolution for incoming requests.

use crate::error::{Error, Result};
use crate::types::RequestPayload;
use async_trait::async_trait;

/// Derives the wallet address a request should be checked against.
#[async_trait]
pub trait AddressResolver: Send + Sync {
    /// Resolve the address for `payload`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Resolution`] if no valid address can be derived.
    async fn resolve_address(&self, payload: &RequestPayload) -> Result<String>;
}

/// Uses the address carried in the payload.
///
/// The address must be `0x` followed by 40 hex digits. Its casing is kept
/// as supplied.
#[derive(Debug, Clone, Copy, Default)]
pub struct PayloadAddressResolver;

#[async_trait]
impl AddressResolver for PayloadAddressResolver {
    async fn resolve_address(&self, payload: &RequestPayload) -> Result<String> {
        let address = payload
            .address
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .ok_or_else(|| Error::Resolution("request payload has no address".to_string()))?;

        validate_address(address)?;
        Ok(address.to_string())
    }
}

/// Check that `address` is a `0x`-prefixed 20-byte hex string.
///
/// # Errors
///
/// Returns [`Error::Resolution`] describing what is wrong with it.
pub fn validate_address(address: &str) -> Result<()> {
    let digits = address
        .strip_prefix("0x")
        .ok_or_else(|| Error::Resolution(format!("address {address} is missing the 0x prefix")))?;

    let bytes = hex::decode(digits)
        .map_err(|e| Error::Resolution(format!("address {address} is not hex: {e}")))?;

    if bytes.len() != 20 {
        return Err(Error::Resolution(format!(
            "address {address} is {} bytes, expected 20",
            bytes.len()
        )));
    }
    Ok(())
}
