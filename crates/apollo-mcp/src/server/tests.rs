// crates/apollo-mcp/src/server/tests.rs
// ============================================================================
// Module: MCP Server Tests
// Description: Unit tests for JSON-RPC handling and stdio framing.
// Purpose: Lock protocol envelopes, error codes, and framing limits.
// Dependencies: apollo-client, serde_json, tiny_http
// ============================================================================

//! ## Overview
//! Exercises the JSON-RPC dispatcher directly, without a live transport:
//! tool listing shape, call result envelopes, protocol error codes, and
//! Content-Length framing limits.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    reason = "Test-only panic-based assertions are permitted."
)]

use std::io::BufReader;
use std::io::Cursor;
use std::thread;

use apollo_client::ApolloClient;
use apollo_client::ApolloClientConfig;
use serde_json::Value;
use serde_json::json;
use tiny_http::Response;
use tiny_http::Server;

use super::JsonRpcRequest;
use super::handle_request;
use super::jsonrpc_error;
use super::read_framed;
use crate::tools::ToolError;
use crate::tools::ToolRouter;
use crate::validation::SchemaRegistry;

// ============================================================================
// SECTION: Test Helpers
// ============================================================================

/// Builds a router pointed at the given base URL.
fn router_for(base_url: String) -> ToolRouter {
    let client = ApolloClient::new(
        "test-key".to_string(),
        ApolloClientConfig {
            base_url,
            timeout_ms: 5_000,
            ..ApolloClientConfig::default()
        },
    )
    .unwrap();
    ToolRouter::new(SchemaRegistry::compile().unwrap(), client)
}

/// Builds a router that fails fast on any network call.
fn offline_router() -> ToolRouter {
    router_for("http://127.0.0.1:1".to_string())
}

/// Builds a JSON-RPC request from a JSON document.
fn rpc(payload: Value) -> JsonRpcRequest {
    serde_json::from_value(payload).unwrap()
}

/// Spawns a stub server answering one request with the given status and body.
fn spawn_server(status: u16, body: &'static str) -> (String, thread::JoinHandle<()>) {
    let server = Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr().to_ip().unwrap();
    let base_url = format!("http://{addr}");
    let handle = thread::spawn(move || {
        if let Ok(mut request) = server.recv() {
            let mut seen_body = String::new();
            let _ = request.as_reader().read_to_string(&mut seen_body);
            let response = Response::from_string(body).with_status_code(status);
            let _ = request.respond(response);
        }
    });
    (base_url, handle)
}

// ============================================================================
// SECTION: Protocol Envelopes
// ============================================================================

#[test]
fn tools_list_returns_the_full_catalog() {
    let router = offline_router();
    let request = rpc(json!({"jsonrpc": "2.0", "id": 1, "method": "tools/list"}));
    let (status, response) = handle_request(&router, request);
    assert_eq!(status, axum::http::StatusCode::OK);
    let result = serde_json::to_value(&response).unwrap();
    let tools = result["result"]["tools"].as_array().unwrap();
    assert_eq!(tools.len(), 27);
    assert_eq!(tools[0]["name"], json!("search_people"));
    assert!(tools[0]["inputSchema"]["properties"].is_object());
}

#[test]
fn invalid_version_is_rejected_with_32600() {
    let router = offline_router();
    let request = rpc(json!({"jsonrpc": "1.0", "id": 1, "method": "tools/list"}));
    let (status, response) = handle_request(&router, request);
    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    let result = serde_json::to_value(&response).unwrap();
    assert_eq!(result["error"]["code"], json!(-32600));
}

#[test]
fn unknown_method_is_rejected_with_32601() {
    let router = offline_router();
    let request = rpc(json!({"jsonrpc": "2.0", "id": 1, "method": "resources/list"}));
    let (_, response) = handle_request(&router, request);
    let result = serde_json::to_value(&response).unwrap();
    assert_eq!(result["error"]["code"], json!(-32601));
}

#[test]
fn unknown_tool_is_rejected_with_32601() {
    let router = offline_router();
    let request = rpc(json!({
        "jsonrpc": "2.0",
        "id": 7,
        "method": "tools/call",
        "params": {"name": "no_such_tool", "arguments": {}}
    }));
    let (status, response) = handle_request(&router, request);
    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    let result = serde_json::to_value(&response).unwrap();
    assert_eq!(result["error"]["code"], json!(-32601));
    assert_eq!(result["id"], json!(7));
}

#[test]
fn malformed_call_params_are_rejected_with_32602() {
    let router = offline_router();
    let request = rpc(json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "tools/call",
        "params": {"arguments": {}}
    }));
    let (_, response) = handle_request(&router, request);
    let result = serde_json::to_value(&response).unwrap();
    assert_eq!(result["error"]["code"], json!(-32602));
}

#[test]
fn serialization_failure_maps_to_internal_error() {
    let (status, response) = jsonrpc_error(json!(9), &ToolError::Serialization);
    assert_eq!(status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    let result = serde_json::to_value(&response).unwrap();
    assert_eq!(result["error"]["code"], json!(-32603));
    assert_eq!(result["id"], json!(9));
}

// ============================================================================
// SECTION: Call Results
// ============================================================================

#[test]
fn successful_calls_omit_the_error_flag() {
    let (base_url, handle) = spawn_server(200, r#"{"email_accounts":[]}"#);
    let router = router_for(base_url);
    let request = rpc(json!({
        "jsonrpc": "2.0",
        "id": 2,
        "method": "tools/call",
        "params": {"name": "list_email_accounts", "arguments": {}}
    }));
    let (status, response) = handle_request(&router, request);
    assert_eq!(status, axum::http::StatusCode::OK);
    let result = serde_json::to_value(&response).unwrap();
    let call = &result["result"];
    assert_eq!(call["content"][0]["type"], json!("text"));
    assert!(call.get("isError").is_none());
    let text: Value =
        serde_json::from_str(call["content"][0]["text"].as_str().unwrap()).unwrap();
    assert_eq!(text, json!({"email_accounts": []}));
    handle.join().unwrap();
}

#[test]
fn validation_failures_set_the_error_flag() {
    let router = offline_router();
    let request = rpc(json!({
        "jsonrpc": "2.0",
        "id": 3,
        "method": "tools/call",
        "params": {"name": "search_people", "arguments": {"per_page": 0}}
    }));
    let (status, response) = handle_request(&router, request);
    assert_eq!(status, axum::http::StatusCode::OK);
    let result = serde_json::to_value(&response).unwrap();
    let call = &result["result"];
    assert_eq!(call["isError"], json!(true));
    let text: Value =
        serde_json::from_str(call["content"][0]["text"].as_str().unwrap()).unwrap();
    assert_eq!(text["error"], json!(true));
}

#[test]
fn missing_arguments_default_to_an_empty_object() {
    let (base_url, handle) = spawn_server(200, "{}");
    let router = router_for(base_url);
    let request = rpc(json!({
        "jsonrpc": "2.0",
        "id": 4,
        "method": "tools/call",
        "params": {"name": "get_api_usage_stats"}
    }));
    let (_, response) = handle_request(&router, request);
    let result = serde_json::to_value(&response).unwrap();
    assert!(result["result"]["content"][0]["text"].is_string());
    handle.join().unwrap();
}

// ============================================================================
// SECTION: Framing
// ============================================================================

#[test]
fn read_framed_rejects_payload_over_limit() {
    let payload = br#"{"jsonrpc":"2.0","id":1,"method":"tools/list"}"#;
    let framed = format!(
        "Content-Length: {}\r\n\r\n{}",
        payload.len(),
        String::from_utf8_lossy(payload)
    );
    let mut reader = BufReader::new(Cursor::new(framed.into_bytes()));
    let result = read_framed(&mut reader, payload.len() - 1);
    assert!(result.is_err());
}

#[test]
fn read_framed_accepts_payload_at_limit() {
    let payload = br#"{"jsonrpc":"2.0","id":1,"method":"tools/list"}"#;
    let framed = format!(
        "Content-Length: {}\r\n\r\n{}",
        payload.len(),
        String::from_utf8_lossy(payload)
    );
    let mut reader = BufReader::new(Cursor::new(framed.into_bytes()));
    let result = read_framed(&mut reader, payload.len());
    assert!(result.is_ok());
    let bytes = result.expect("payload read");
    assert_eq!(bytes, payload);
}

#[test]
fn read_framed_requires_a_content_length_header() {
    let framed = b"X-Other: 1\r\n\r\n{}".to_vec();
    let mut reader = BufReader::new(Cursor::new(framed));
    assert!(read_framed(&mut reader, 1024).is_err());
}
