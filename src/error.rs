//! Error types for farcaster-verifier.

use thiserror::Error;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can abort a verification attempt.
///
/// A missing or invalid attestation is not an error: it is reported through
/// [`crate::VerifiedPayload::errors`]. These variants cover the faults that
/// stop the provider from producing a result at all.
#[derive(Error, Debug)]
pub enum Error {
    /// No usable address could be derived from the request payload.
    #[error("address resolution failed: {0}")]
    Resolution(String),

    /// The attestation index could not be queried.
    #[error("{0}")]
    ExternalVerification(String),

    /// HTTP client error.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
