//! The Farcaster verification provider.
//!
//! A request is verified in two sequential steps:
//!
//! ```text
//! RequestPayload
//!        │
//!        ▼
//! ┌─────────────────────┐
//! │ Resolve address     │──── fails ──▶ Err(Resolution)
//! └─────────┬───────────┘
//!           ▼
//! ┌─────────────────────┐
//! │ Query EAS indexer   │──── fails ──▶ TransportErrorPolicy
//! └─────────┬───────────┘                (raise, or fall back to [])
//!           ▼
//!   any live attestation
//!   under the schema?
//!    ┌──────┴──────┐
//!   YES            NO
//!    ▼             ▼
//!  valid      invalid + error message
//! ```

use crate::attestation::client::{GraphqlTransport, HttpTransport};
use crate::attestation::{attestations_query, is_valid_attestation, parse_attestations, Attestation};
use crate::config::{ProviderConfig, ProviderOptions};
use crate::error::Result;
use crate::error_policy::{RaiseOnError, TransportErrorPolicy};
use crate::signer::{AddressResolver, PayloadAddressResolver};
use crate::types::{RequestPayload, VerificationRecord, VerifiedPayload};
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info};

/// Provider type identifier.
pub const FARCASTER_PROVIDER_TYPE: &str = "Farcaster";

/// Context label passed to the transport error policy.
const ATTESTATION_CONTEXT: &str = "Farcaster attestation";

/// A credential provider the platform can dispatch requests to.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Type identifier used to route payloads to this provider.
    fn provider_type(&self) -> &str;

    /// Verify a request.
    ///
    /// # Errors
    ///
    /// Returns an error only for faults that prevent producing a result.
    async fn verify(&self, payload: &RequestPayload) -> Result<VerifiedPayload>;
}

/// Builder for [`FarcasterProvider`].
#[derive(Default)]
pub struct FarcasterProviderBuilder {
    config: ProviderConfig,
    options: ProviderOptions,
    resolver: Option<Arc<dyn AddressResolver>>,
    transport: Option<Arc<dyn GraphqlTransport>>,
    error_policy: Option<Arc<dyn TransportErrorPolicy>>,
}

impl FarcasterProviderBuilder {
    /// Start from the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `config` instead of the defaults.
    #[must_use]
    pub fn config(mut self, config: ProviderConfig) -> Self {
        self.config = config;
        self
    }

    /// Merge `options` over the current options.
    #[must_use]
    pub fn options(mut self, options: ProviderOptions) -> Self {
        self.options.extend(options);
        self
    }

    /// Use a custom address resolver.
    #[must_use]
    pub fn resolver(mut self, resolver: Arc<dyn AddressResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Use a custom GraphQL transport.
    #[must_use]
    pub fn transport(mut self, transport: Arc<dyn GraphqlTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Use a custom transport error policy.
    #[must_use]
    pub fn error_policy(mut self, policy: Arc<dyn TransportErrorPolicy>) -> Self {
        self.error_policy = Some(policy);
        self
    }

    /// Build the provider.
    ///
    /// # Errors
    ///
    /// Returns an error if the default HTTP transport cannot be created.
    pub fn build(self) -> Result<FarcasterProvider> {
        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(HttpTransport::new(self.config.request_timeout())?),
        };

        debug!(
            "Farcaster provider built (endpoint={}, attester={})",
            self.config.endpoint, self.config.attester
        );

        Ok(FarcasterProvider {
            config: self.config,
            options: self.options,
            resolver: self
                .resolver
                .unwrap_or_else(|| Arc::new(PayloadAddressResolver)),
            transport,
            error_policy: self
                .error_policy
                .unwrap_or_else(|| Arc::new(RaiseOnError::default())),
        })
    }
}

/// Verifies that an address holds a Farcaster account attestation.
///
/// Holds only immutable configuration and shared collaborators, so one
/// instance can serve concurrent requests.
pub struct FarcasterProvider {
    config: ProviderConfig,
    options: ProviderOptions,
    resolver: Arc<dyn AddressResolver>,
    transport: Arc<dyn GraphqlTransport>,
    error_policy: Arc<dyn TransportErrorPolicy>,
}

impl FarcasterProvider {
    /// Create a provider with default configuration and collaborators.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(options: Option<ProviderOptions>) -> Result<Self> {
        FarcasterProviderBuilder::new()
            .options(options.unwrap_or_default())
            .build()
    }

    /// Start building a provider.
    #[must_use]
    pub fn builder() -> FarcasterProviderBuilder {
        FarcasterProviderBuilder::new()
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Options supplied at construction.
    #[must_use]
    pub fn options(&self) -> &ProviderOptions {
        &self.options
    }

    /// Resolve the address to check for `payload`.
    ///
    /// # Errors
    ///
    /// Propagates the resolver's failure.
    pub async fn resolve_address(&self, payload: &RequestPayload) -> Result<String> {
        self.resolver.resolve_address(payload).await
    }

    /// Fetch the attestations the trusted attester issued to `address`
    /// under the configured schema.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails and the error policy raises.
    pub async fn query_attestations(&self, address: &str) -> Result<Vec<Attestation>> {
        let query = attestations_query(&self.config.schema_id, &self.config.attester, address);
        let body = json!({ "query": query });

        debug!("Querying attestations for {address} at {}", self.config.endpoint);

        match self.transport.post(&self.config.endpoint, &body).await {
            Ok(response) => {
                let attestations = parse_attestations(&response);
                debug!("Index returned {} attestations for {address}", attestations.len());
                Ok(attestations)
            }
            Err(e) => self.error_policy.handle(e, ATTESTATION_CONTEXT, Vec::new()),
        }
    }

    /// Whether `address` holds at least one valid Farcaster attestation.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails and the error policy raises.
    pub async fn verify_farcaster_attestation(&self, address: &str) -> Result<bool> {
        let attestations = self.query_attestations(address).await?;
        Ok(attestations
            .iter()
            .any(|a| is_valid_attestation(a, &self.config.schema_id)))
    }
}

#[async_trait]
impl Provider for FarcasterProvider {
    fn provider_type(&self) -> &str {
        FARCASTER_PROVIDER_TYPE
    }

    async fn verify(&self, payload: &RequestPayload) -> Result<VerifiedPayload> {
        let address = self.resolve_address(payload).await?;
        let valid = self.verify_farcaster_attestation(&address).await?;

        let mut errors = Vec::new();
        if !valid {
            errors.push(format!(
                "We could not find a Farcaster-verified onchain attestation for your address: {address}."
            ));
        }

        info!("Farcaster verification for {address}: valid={valid}");

        Ok(VerifiedPayload {
            valid,
            errors,
            record: VerificationRecord { address },
        })
    }
}
