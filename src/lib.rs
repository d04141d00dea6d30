//! # farcaster-verifier
//!
//! Identity provider that checks whether a wallet address holds a Farcaster
//! account attestation on the Ethereum Attestation Service (EAS).
//!
//! ## Flow
//!
//! 1. Resolve the wallet address from the request payload
//! 2. Query the EAS GraphQL indexer for attestations issued by the trusted
//!    Farcaster attester, under the verified-account schema, to that address
//! 3. Accept if any attestation is neither revoked nor expiring
//!
//! ## Example
//!
//! ```rust,ignore
//! use farcaster_verifier::{FarcasterProvider, Provider, RequestPayload};
//!
//! let provider = FarcasterProvider::new(None)?;
//! let result = provider
//!     .verify(&RequestPayload::for_address("0x685c99E8780e5a7f158617cC2E9acc0e45a66120"))
//!     .await?;
//! println!("valid: {}", result.valid);
//! ```

pub mod attestation;
pub mod config;
pub mod error;
pub mod error_policy;
pub mod platform;
pub mod provider;
pub mod signer;
pub mod types;

pub use attestation::client::{GraphqlTransport, HttpTransport, TransportError};
pub use attestation::{is_valid_attestation, Attestation, AttestationSchema};
pub use config::{
    ProviderConfig, ProviderOptions, BASE_EAS_SCAN_URL, FARCASTER_ATTESTER,
    VERIFIED_ACCOUNT_SCHEMA,
};
pub use error::{Error, Result};
pub use error_policy::{FallbackOnError, RaiseOnError, TransportErrorPolicy};
pub use provider::{FarcasterProvider, FarcasterProviderBuilder, Provider};
pub use signer::{AddressResolver, PayloadAddressResolver};
pub use types::{RequestPayload, VerificationRecord, VerifiedPayload};
