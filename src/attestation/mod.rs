//! EAS attestation records and the Farcaster validity rules.
//!
//! The EAS indexer is queried with a single GraphQL `attestations` query
//! filtered by schema, attester and recipient. Its reply is read leniently:
//! anything that does not look like `{ "data": { "attestations": [...] } }`
//! is treated as "no attestations" rather than as a failure.

pub mod client;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use tracing::debug;

/// The schema an attestation was issued under.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttestationSchema {
    /// Schema UID.
    #[serde(default)]
    pub id: String,
}

/// An attestation as returned by the EAS GraphQL indexer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attestation {
    /// Attestation UID.
    #[serde(default)]
    pub id: String,
    /// Issuing address.
    #[serde(default)]
    pub attester: String,
    /// Address the attestation is about.
    #[serde(default)]
    pub recipient: String,
    /// UID of a referenced attestation.
    #[serde(default, rename = "refUID")]
    pub ref_uid: String,
    /// Whether the attester may revoke it.
    #[serde(default)]
    pub revocable: bool,
    /// Unix seconds of revocation, 0 when never revoked.
    #[serde(default)]
    pub revocation_time: Option<Number>,
    /// Revocation flag reported by the indexer. Informational only.
    #[serde(default)]
    pub revoked: bool,
    /// Unix seconds of expiry, 0 when it never expires.
    #[serde(default)]
    pub expiration_time: Option<Number>,
    /// ABI encoded attestation data.
    #[serde(default)]
    pub data: String,
    /// Schema reference.
    #[serde(default)]
    pub schema: AttestationSchema,
}

/// Whether `attestation` proves a live Farcaster verification.
///
/// The attestation must never have been revoked, must never expire and must
/// carry `schema_id`. Only `revocationTime` decides revocation: the `revoked`
/// flag is not consulted.
#[must_use]
pub fn is_valid_attestation(attestation: &Attestation, schema_id: &str) -> bool {
    is_zero(attestation.revocation_time.as_ref())
        && is_zero(attestation.expiration_time.as_ref())
        && attestation.schema.id == schema_id
}

fn is_zero(time: Option<&Number>) -> bool {
    time.is_some_and(|n| {
        n.as_u64() == Some(0) || n.as_i64() == Some(0) || n.as_f64() == Some(0.0)
    })
}

/// Build the GraphQL query for attestations matching all three filters.
#[must_use]
pub fn attestations_query(schema_id: &str, attester: &str, recipient: &str) -> String {
    format!(
        r"
    query Attestations {{
      attestations(
        where: {{
          schemaId: {{ equals: {schema} }},
          attester: {{ equals: {attester} }},
          recipient: {{ equals: {recipient} }}
        }}
      ) {{
        id
        attester
        recipient
        refUID
        revocable
        revocationTime
        revoked
        expirationTime
        data
        schema {{
          id
        }}
      }}
    }}
  ",
        schema = graphql_string(schema_id),
        attester = graphql_string(attester),
        recipient = graphql_string(recipient),
    )
}

// JSON string literals are valid GraphQL string literals.
fn graphql_string(value: &str) -> String {
    Value::String(value.to_string()).to_string()
}

/// Extract the attestation list from an indexer response body.
///
/// Missing or mistyped levels yield an empty list. Entries that fail to
/// decode are skipped.
#[must_use]
pub fn parse_attestations(body: &Value) -> Vec<Attestation> {
    let Some(entries) = body
        .get("data")
        .and_then(|data| data.get("attestations"))
        .and_then(Value::as_array)
    else {
        debug!("Response carried no attestation list");
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|entry| {
            serde_json::from_value(entry.clone())
                .map_err(|e| debug!("Skipping undecodable attestation: {e}"))
                .ok()
        })
        .collect()
}
