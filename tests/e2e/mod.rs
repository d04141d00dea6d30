//! End-to-end tests for the Farcaster provider.
//!
//! A loopback HTTP server stands in for the EAS GraphQL indexer so the
//! provider runs its real reqwest transport against canned replies.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod provider_tests;

pub use harness::MockIndexer;
