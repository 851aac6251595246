// crates/apollo-client/tests/transport.rs
// ============================================================================
// Module: HTTP Transport Tests
// Description: Integration tests for the Apollo HTTP transport.
// Purpose: Validate headers, query filtering, body rules, and normalization.
// Dependencies: apollo-client, tiny_http
// ============================================================================

//! ## Overview
//! Tests the transport against a local stub server:
//! - Happy path: 2xx bodies pass through verbatim
//! - Error normalization: message precedence and raw-response wrapping
//! - Request shaping: credential header, empty-query filtering, GET body rule

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use std::collections::BTreeMap;
use std::sync::mpsc;
use std::thread;

use apollo_client::ApiRequest;
use apollo_client::ApolloClient;
use apollo_client::ApolloClientConfig;
use serde_json::Value;
use serde_json::json;
use tiny_http::Response;
use tiny_http::Server;

// ============================================================================
// SECTION: Test Helpers
// ============================================================================

/// What the stub server observed about one request.
struct SeenRequest {
    method: String,
    url: String,
    api_key: Option<String>,
    content_type: Option<String>,
    body: String,
}

/// Spawns a stub server answering one request with the given status and body.
///
/// Returns the base URL, a receiver for the observed request, and the server
/// thread handle.
fn spawn_server(
    status: u16,
    body: &'static str,
) -> (String, mpsc::Receiver<SeenRequest>, thread::JoinHandle<()>) {
    let server = Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr().to_ip().unwrap();
    let base_url = format!("http://{addr}");
    let (tx, rx) = mpsc::channel();

    let handle = thread::spawn(move || {
        if let Ok(mut request) = server.recv() {
            let mut seen_body = String::new();
            let _ = request.as_reader().read_to_string(&mut seen_body);
            let header = |name: &str| {
                request
                    .headers()
                    .iter()
                    .find(|h| h.field.as_str().as_str().eq_ignore_ascii_case(name))
                    .map(|h| h.value.as_str().to_string())
            };
            let seen = SeenRequest {
                method: request.method().to_string(),
                url: request.url().to_string(),
                api_key: header("X-Api-Key"),
                content_type: header("Content-Type"),
                body: seen_body,
            };
            let _ = tx.send(seen);
            let response = Response::from_string(body).with_status_code(status);
            let _ = request.respond(response);
        }
    });

    (base_url, rx, handle)
}

/// Builds a client pointed at the stub server.
fn local_client(base_url: String) -> ApolloClient {
    ApolloClient::new(
        "test-key".to_string(),
        ApolloClientConfig {
            base_url,
            timeout_ms: 5_000,
            ..ApolloClientConfig::default()
        },
    )
    .unwrap()
}

// ============================================================================
// SECTION: Success Path
// ============================================================================

#[test]
fn success_body_passes_through_verbatim() {
    let (base_url, _rx, handle) = spawn_server(200, r#"{"people":[],"total":0}"#);
    let client = local_client(base_url);

    let result = client.execute(&ApiRequest::get("/api/v1/email_accounts")).unwrap();
    assert_eq!(result, json!({"people": [], "total": 0}));
    handle.join().unwrap();
}

#[test]
fn credential_and_content_type_headers_are_attached() {
    let (base_url, rx, handle) = spawn_server(200, "{}");
    let client = local_client(base_url);

    client.execute(&ApiRequest::get("/api/v1/email_accounts")).unwrap();
    let seen = rx.recv().unwrap();
    assert_eq!(seen.api_key.as_deref(), Some("test-key"));
    assert_eq!(seen.content_type.as_deref(), Some("application/json"));
    handle.join().unwrap();
}

#[test]
fn post_serializes_json_body() {
    let (base_url, rx, handle) = spawn_server(200, "{}");
    let client = local_client(base_url);

    let body = json!({"q_keywords": "rust", "page": 1});
    client.execute(&ApiRequest::post("/api/v1/contacts/search", body.clone())).unwrap();
    let seen = rx.recv().unwrap();
    assert_eq!(seen.method, "POST");
    let sent: Value = serde_json::from_str(&seen.body).unwrap();
    assert_eq!(sent, body);
    handle.join().unwrap();
}

#[test]
fn get_requests_carry_no_body() {
    let (base_url, rx, handle) = spawn_server(200, "{}");
    let client = local_client(base_url);

    client.execute(&ApiRequest::get("/api/v1/fields")).unwrap();
    let seen = rx.recv().unwrap();
    assert_eq!(seen.method, "GET");
    assert!(seen.body.is_empty());
    handle.join().unwrap();
}

// ============================================================================
// SECTION: Query Filtering
// ============================================================================

#[test]
fn empty_query_values_are_omitted() {
    let (base_url, rx, handle) = spawn_server(200, "{}");
    let client = local_client(base_url);

    let mut query = BTreeMap::new();
    query.insert("domain".to_string(), "example.com".to_string());
    query.insert("unused".to_string(), String::new());
    client
        .execute(&ApiRequest::get_with_query("/api/v1/organizations/enrich", query))
        .unwrap();
    let seen = rx.recv().unwrap();
    assert_eq!(seen.url, "/api/v1/organizations/enrich?domain=example.com");
    handle.join().unwrap();
}

#[test]
fn all_empty_query_values_yield_no_query_string() {
    let (base_url, rx, handle) = spawn_server(200, "{}");
    let client = local_client(base_url);

    let mut query = BTreeMap::new();
    query.insert("entity_type".to_string(), String::new());
    client.execute(&ApiRequest::get_with_query("/api/v1/fields", query)).unwrap();
    let seen = rx.recv().unwrap();
    assert_eq!(seen.url, "/api/v1/fields");
    handle.join().unwrap();
}

// ============================================================================
// SECTION: Error Normalization
// ============================================================================

#[test]
fn json_error_body_is_normalized_with_message() {
    let (base_url, _rx, handle) = spawn_server(422, r#"{"message":"Invalid request"}"#);
    let client = local_client(base_url);

    let result = client.execute(&ApiRequest::get("/api/v1/email_accounts")).unwrap();
    assert_eq!(result["error"], json!(true));
    assert_eq!(result["status"], json!(422));
    assert_eq!(result["message"], json!("Invalid request"));
    assert_eq!(result["details"], json!({"message": "Invalid request"}));
    handle.join().unwrap();
}

#[test]
fn unparsable_error_body_is_wrapped_as_raw_response() {
    let (base_url, _rx, handle) = spawn_server(503, "Service Unavailable");
    let client = local_client(base_url);

    let result = client.execute(&ApiRequest::get("/api/v1/email_accounts")).unwrap();
    assert_eq!(result["error"], json!(true));
    assert_eq!(result["status"], json!(503));
    assert_eq!(result["message"], json!("Service Unavailable"));
    assert_eq!(result["details"], json!({"raw_response": "Service Unavailable"}));
    handle.join().unwrap();
}

#[test]
fn connection_failure_raises_transport_error() {
    // Nothing listens on port 1; the connection is refused immediately.
    let client = local_client("http://127.0.0.1:1".to_string());
    let result = client.execute(&ApiRequest::get("/api/v1/email_accounts"));
    assert!(result.is_err());
}
