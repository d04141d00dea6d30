//! Verification against a mock EAS indexer over real HTTP.

use super::MockIndexer;
use farcaster_verifier::{
    Error, FallbackOnError, Provider, RequestPayload, VerificationRecord, VerifiedPayload,
    FARCASTER_ATTESTER, VERIFIED_ACCOUNT_SCHEMA,
};
use serde_json::json;
use std::sync::Arc;

const MOCK_ADDRESS: &str = "0x685c99E8780e5a7f158617cC2E9acc0e45a66120";

fn not_found(address: &str) -> String {
    format!("We could not find a Farcaster-verified onchain attestation for your address: {address}.")
}

#[tokio::test]
async fn test_valid_attestation_end_to_end() {
    let mut indexer = MockIndexer::with_attestations(json!([{
        "recipient": MOCK_ADDRESS,
        "revocationTime": 0,
        "revoked": false,
        "expirationTime": 0,
        "schema": { "id": VERIFIED_ACCOUNT_SCHEMA }
    }]))
    .await
    .expect("indexer");

    let result = indexer
        .provider()
        .verify(&RequestPayload::for_address(MOCK_ADDRESS))
        .await
        .expect("verify");

    assert_eq!(
        result,
        VerifiedPayload {
            valid: true,
            errors: Vec::new(),
            record: VerificationRecord {
                address: MOCK_ADDRESS.to_string(),
            },
        }
    );

    let request = indexer.next_request().await.expect("request recorded");
    assert!(!indexer.has_more_requests().await, "exactly one query expected");
    assert!(request
        .header("content-type")
        .is_some_and(|v| v.starts_with("application/json")));

    let body = request.body.as_object().expect("json object body");
    assert_eq!(body.len(), 1, "body should only carry the query");
    let query = body["query"].as_str().expect("query string");
    assert!(query.contains(VERIFIED_ACCOUNT_SCHEMA));
    assert!(query.contains(FARCASTER_ATTESTER));
    assert!(query.contains(MOCK_ADDRESS));
}

#[tokio::test]
async fn test_expired_attestation_is_rejected() {
    let expired = chrono::Utc::now().timestamp() - 10_000;
    let indexer = MockIndexer::with_attestations(json!([{
        "recipient": MOCK_ADDRESS,
        "revocationTime": 0,
        "revoked": false,
        "expirationTime": expired
    }]))
    .await
    .expect("indexer");

    let valid = indexer
        .provider()
        .verify_farcaster_attestation(MOCK_ADDRESS)
        .await
        .expect("query");
    assert!(!valid);
}

#[tokio::test]
async fn test_no_attestations_reports_not_found() {
    let indexer = MockIndexer::with_attestations(json!([]))
        .await
        .expect("indexer");

    let result = indexer
        .provider()
        .verify(&RequestPayload::for_address(MOCK_ADDRESS))
        .await
        .expect("verify");

    assert!(!result.valid);
    assert_eq!(result.errors, vec![not_found(MOCK_ADDRESS)]);
    assert_eq!(result.record.address, MOCK_ADDRESS);
}

#[tokio::test]
async fn test_revoked_flag_without_revocation_time_still_verifies() {
    let indexer = MockIndexer::with_attestations(json!([{
        "recipient": MOCK_ADDRESS,
        "revocationTime": 0,
        "revoked": true,
        "expirationTime": 0,
        "schema": { "id": VERIFIED_ACCOUNT_SCHEMA }
    }]))
    .await
    .expect("indexer");

    let result = indexer
        .provider()
        .verify(&RequestPayload::for_address(MOCK_ADDRESS))
        .await
        .expect("verify");

    assert!(result.valid);
}

#[tokio::test]
async fn test_one_valid_among_many_is_enough() {
    let indexer = MockIndexer::with_attestations(json!([
        { "revocationTime": 1_700_000_000, "expirationTime": 0, "schema": { "id": VERIFIED_ACCOUNT_SCHEMA } },
        { "revocationTime": 0, "expirationTime": 0, "schema": { "id": "0xsomething-else" } },
        { "revocationTime": 0, "expirationTime": 0, "schema": { "id": VERIFIED_ACCOUNT_SCHEMA } }
    ]))
    .await
    .expect("indexer");

    let result = indexer
        .provider()
        .verify(&RequestPayload::for_address(MOCK_ADDRESS))
        .await
        .expect("verify");

    assert!(result.valid);
}

#[tokio::test]
async fn test_malformed_body_counts_as_not_found() {
    let indexer = MockIndexer::start(200, json!({ "data": null, "errors": [{ "message": "oops" }] }))
        .await
        .expect("indexer");

    let result = indexer
        .provider()
        .verify(&RequestPayload::for_address(MOCK_ADDRESS))
        .await
        .expect("verify");

    assert!(!result.valid);
    assert_eq!(result.errors, vec![not_found(MOCK_ADDRESS)]);
}

#[tokio::test]
async fn test_non_json_success_reply_counts_as_not_found() {
    let indexer = MockIndexer::start_raw(200, "text/html", "<html>maintenance</html>".to_string())
        .await
        .expect("indexer");

    let result = indexer
        .provider()
        .verify(&RequestPayload::for_address(MOCK_ADDRESS))
        .await
        .expect("verify");

    assert!(!result.valid);
    assert_eq!(result.errors, vec![not_found(MOCK_ADDRESS)]);
    assert_eq!(result.record.address, MOCK_ADDRESS);
}

#[tokio::test]
async fn test_http_error_is_raised_by_default() {
    let indexer = MockIndexer::start(500, json!({ "error": "indexer down" }))
        .await
        .expect("indexer");

    let err = indexer
        .provider()
        .verify(&RequestPayload::for_address(MOCK_ADDRESS))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::ExternalVerification(_)), "got {err:?}");
    let message = err.to_string();
    assert!(
        message.starts_with(
            "Error making Farcaster attestation request, received error response with code 500"
        ),
        "got {message}"
    );
    assert!(message.contains("indexer down"));
}

#[tokio::test]
async fn test_http_error_with_fallback_policy_reports_not_found() {
    let indexer = MockIndexer::start(500, json!({ "error": "indexer down" }))
        .await
        .expect("indexer");

    let provider = indexer
        .provider_builder()
        .error_policy(Arc::new(FallbackOnError))
        .build()
        .expect("provider");

    let result = provider
        .verify(&RequestPayload::for_address(MOCK_ADDRESS))
        .await
        .expect("verify");

    assert!(!result.valid);
    assert_eq!(result.errors, vec![not_found(MOCK_ADDRESS)]);
    assert!(indexer.endpoint().ends_with("/graphql"));
}

#[tokio::test]
async fn test_invalid_address_never_reaches_indexer() {
    let mut indexer = MockIndexer::with_attestations(json!([]))
        .await
        .expect("indexer");

    let err = indexer
        .provider()
        .verify(&RequestPayload::for_address("not-an-address"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Resolution(_)));
    assert!(!indexer.has_more_requests().await);
}
