//! What to do when the attestation index cannot be reached.

use crate::attestation::client::TransportError;
use crate::attestation::Attestation;
use crate::error::{Error, Result};
use tracing::warn;

/// Decides whether a transport failure aborts verification or is replaced
/// by a fallback result.
pub trait TransportErrorPolicy: Send + Sync {
    /// Handle `error` raised while making a `context` request.
    ///
    /// # Errors
    ///
    /// Returns the normalized error when the policy chooses to raise.
    fn handle(
        &self,
        error: TransportError,
        context: &str,
        fallback: Vec<Attestation>,
    ) -> Result<Vec<Attestation>>;
}

/// Raises every transport failure as [`Error::ExternalVerification`].
///
/// Any configured secret appearing in the message is replaced by `[SECRET]`.
#[derive(Debug, Clone, Default)]
pub struct RaiseOnError {
    secrets_to_hide: Vec<String>,
}

impl RaiseOnError {
    /// Create a policy that redacts `secrets` from error messages.
    #[must_use]
    pub fn with_secrets(secrets: Vec<String>) -> Self {
        Self {
            secrets_to_hide: secrets,
        }
    }

    fn message(&self, error: &TransportError, context: &str) -> String {
        let mut message = format!("Error making {context} request, ");
        match error {
            TransportError::Status { status, body } => {
                message.push_str(&format!(
                    "received error response with code {status}: {body}"
                ));
            }
            TransportError::NoResponse(reason) => {
                message.push_str(&format!("no response received, {reason}"));
            }
            TransportError::Other(reason) => message.push_str(reason),
        }

        for secret in self.secrets_to_hide.iter().filter(|s| !s.is_empty()) {
            message = message.replace(secret.as_str(), "[SECRET]");
        }
        message
    }
}

impl TransportErrorPolicy for RaiseOnError {
    fn handle(
        &self,
        error: TransportError,
        context: &str,
        _fallback: Vec<Attestation>,
    ) -> Result<Vec<Attestation>> {
        Err(Error::ExternalVerification(self.message(&error, context)))
    }
}

/// Swallows transport failures and returns the fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackOnError;

impl TransportErrorPolicy for FallbackOnError {
    fn handle(
        &self,
        error: TransportError,
        context: &str,
        fallback: Vec<Attestation>,
    ) -> Result<Vec<Attestation>> {
        warn!("{context} request failed, using fallback: {error}");
        Ok(fallback)
    }
}
