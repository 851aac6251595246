// crates/apollo-client/src/lib.rs
// ============================================================================
// Module: Apollo Client
// Description: HTTP transport and text normalizers for the Apollo.io API.
// Purpose: Provide a uniform success-or-error result for every API call.
// Dependencies: reqwest, serde_json, thiserror
// ============================================================================

//! ## Overview
//! This crate owns the leaf dependencies of every tool: the HTTP transport
//! that turns a [`request::ApiRequest`] into a uniform JSON result, and the
//! pure text normalizers used to shape request payloads before they are sent.
//! Security posture: the API key is attached to every outbound request and
//! must never appear in logs or results.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod normalize;
pub mod request;
pub mod transport;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use normalize::clean_domain;
pub use normalize::strip_undefined;
pub use request::ApiRequest;
pub use request::Method;
pub use transport::ApolloClient;
pub use transport::ApolloClientConfig;
pub use transport::TransportError;
