// crates/apollo-mcp/src/server.rs
// ============================================================================
// Module: MCP Server
// Description: MCP server implementations for stdio and HTTP transports.
// Purpose: Expose Apollo CRM tools via JSON-RPC 2.0.
// Dependencies: apollo-client, axum, tokio
// ============================================================================

//! ## Overview
//! The MCP server exposes the Apollo tool catalog using JSON-RPC 2.0. It
//! supports stdio and HTTP transports and always routes calls through
//! [`crate::tools::ToolRouter`]. Tool results are text content blocks; a
//! validation or transport failure sets the result's error flag instead of
//! failing the JSON-RPC call. Security posture: request bodies are untrusted
//! and size-limited before parsing.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::BufRead;
use std::io::BufReader;
use std::io::Read;
use std::io::Write;
use std::net::SocketAddr;
use std::sync::Arc;

use apollo_client::ApolloClient;
use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::config::ApolloMcpConfig;
use crate::config::ServerTransport;
use crate::tools::ToolError;
use crate::tools::ToolResponse;
use crate::tools::ToolRouter;
use crate::validation::SchemaRegistry;

// ============================================================================
// SECTION: MCP Server
// ============================================================================

/// MCP server instance.
pub struct McpServer {
    /// Server configuration.
    config: ApolloMcpConfig,
    /// Tool router for request dispatch.
    router: ToolRouter,
}

impl McpServer {
    /// Builds a new MCP server from configuration.
    ///
    /// Compiles every tool schema up front so a malformed schema aborts
    /// startup instead of failing at first call.
    ///
    /// # Errors
    ///
    /// Returns [`McpServerError`] when initialization fails.
    pub fn from_config(config: ApolloMcpConfig) -> Result<Self, McpServerError> {
        config.validate().map_err(|err| McpServerError::Config(err.to_string()))?;
        let registry =
            SchemaRegistry::compile().map_err(|err| McpServerError::Init(err.to_string()))?;
        let client = ApolloClient::new(config.api_key.clone(), config.client.clone())
            .map_err(|err| McpServerError::Init(err.to_string()))?;
        let router = ToolRouter::new(registry, client);
        emit_non_loopback_warning(&config);
        Ok(Self {
            config,
            router,
        })
    }

    /// Serves requests using the configured transport.
    ///
    /// # Errors
    ///
    /// Returns [`McpServerError`] when the server fails.
    pub async fn serve(self) -> Result<(), McpServerError> {
        match self.config.transport {
            ServerTransport::Stdio => serve_stdio(&self.router, self.config.max_body_bytes),
            ServerTransport::Http => serve_http(self.config, self.router).await,
        }
    }
}

/// Warns when the HTTP transport binds beyond loopback.
fn emit_non_loopback_warning(config: &ApolloMcpConfig) {
    if config.transport != ServerTransport::Http {
        return;
    }
    let loopback = config
        .bind
        .as_deref()
        .and_then(|bind| bind.parse::<SocketAddr>().ok())
        .is_none_or(|addr| addr.ip().is_loopback());
    if !loopback {
        eprintln!(
            "apollo-mcp: WARNING: http transport bound to a non-loopback address; any peer that \
             can reach it can spend Apollo credits"
        );
    }
}

// ============================================================================
// SECTION: Stdio Transport
// ============================================================================

/// Serves JSON-RPC requests over stdin/stdout.
fn serve_stdio(router: &ToolRouter, max_body_bytes: usize) -> Result<(), McpServerError> {
    let mut reader = BufReader::new(std::io::stdin());
    let mut writer = std::io::stdout();
    loop {
        let bytes = read_framed(&mut reader, max_body_bytes)?;
        let request: JsonRpcRequest = serde_json::from_slice(&bytes)
            .map_err(|_| McpServerError::Transport("invalid json-rpc request".to_string()))?;
        let response = handle_request(router, request);
        let payload = serde_json::to_vec(&response.1)
            .map_err(|_| McpServerError::Transport("json-rpc serialization failed".to_string()))?;
        write_framed(&mut writer, &payload)?;
    }
}

// ============================================================================
// SECTION: HTTP Transport
// ============================================================================

/// Serves JSON-RPC requests over HTTP.
async fn serve_http(config: ApolloMcpConfig, router: ToolRouter) -> Result<(), McpServerError> {
    let bind = config
        .bind
        .as_ref()
        .ok_or_else(|| McpServerError::Config("bind address required".to_string()))?;
    let addr: SocketAddr =
        bind.parse().map_err(|_| McpServerError::Config("invalid bind address".to_string()))?;
    let state = Arc::new(ServerState {
        router,
        max_body_bytes: config.max_body_bytes,
    });
    let app = Router::new().route("/rpc", post(handle_http)).with_state(state);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|_| McpServerError::Transport("http bind failed".to_string()))?;
    axum::serve(listener, app)
        .await
        .map_err(|_| McpServerError::Transport("http server failed".to_string()))
}

/// Shared server state for HTTP handlers.
struct ServerState {
    /// Tool router for request dispatch.
    router: ToolRouter,
    /// Maximum allowed request body size.
    max_body_bytes: usize,
}

/// Handles HTTP JSON-RPC requests.
async fn handle_http(State(state): State<Arc<ServerState>>, bytes: Bytes) -> impl IntoResponse {
    let response = parse_request(&state, &bytes);
    (response.0, axum::Json(response.1))
}

// ============================================================================
// SECTION: JSON-RPC Handling
// ============================================================================

/// Incoming JSON-RPC request payload.
#[derive(Debug, Deserialize)]
struct JsonRpcRequest {
    /// JSON-RPC protocol version.
    jsonrpc: String,
    /// Request identifier.
    id: Value,
    /// Method name.
    method: String,
    /// Optional parameters payload.
    params: Option<Value>,
}

/// JSON-RPC response envelope.
#[derive(Debug, Serialize)]
struct JsonRpcResponse {
    /// JSON-RPC protocol version.
    jsonrpc: &'static str,
    /// Request identifier.
    id: Value,
    /// Successful result payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<Value>,
    /// Error payload when the request fails.
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<JsonRpcError>,
}

/// JSON-RPC error payload.
#[derive(Debug, Serialize)]
struct JsonRpcError {
    /// Error code.
    code: i64,
    /// Human-readable error message.
    message: String,
}

/// Tool call parameters for JSON-RPC requests.
#[derive(Debug, Deserialize)]
struct ToolCallParams {
    /// Tool name.
    name: String,
    /// Raw JSON arguments.
    #[serde(default)]
    arguments: Value,
}

/// Tool list response payload.
#[derive(Debug, Serialize)]
struct ToolListResult {
    /// Registered tool definitions.
    tools: Vec<ToolListEntry>,
}

/// One tool listing entry in MCP wire shape.
#[derive(Debug, Serialize)]
struct ToolListEntry {
    /// Tool name.
    name: String,
    /// Tool description.
    description: String,
    /// Input schema document.
    #[serde(rename = "inputSchema")]
    input_schema: Value,
}

/// Tool call response payload.
#[derive(Debug, Serialize)]
struct ToolCallResult {
    /// Tool output content.
    content: Vec<ToolContent>,
    /// Set when the content describes a dispatch failure.
    #[serde(rename = "isError", skip_serializing_if = "std::ops::Not::not")]
    is_error: bool,
}

/// Tool output payloads for JSON-RPC responses.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ToolContent {
    /// Text tool output carrying a JSON document.
    Text {
        /// JSON text payload.
        text: String,
    },
}

impl From<ToolResponse> for ToolCallResult {
    fn from(response: ToolResponse) -> Self {
        Self {
            content: vec![ToolContent::Text {
                text: response.text,
            }],
            is_error: response.is_error,
        }
    }
}

/// Dispatches a JSON-RPC request to the tool router.
fn handle_request(router: &ToolRouter, request: JsonRpcRequest) -> (StatusCode, JsonRpcResponse) {
    if request.jsonrpc != "2.0" {
        return (
            StatusCode::BAD_REQUEST,
            JsonRpcResponse {
                jsonrpc: "2.0",
                id: request.id,
                result: None,
                error: Some(JsonRpcError {
                    code: -32600,
                    message: "invalid json-rpc version".to_string(),
                }),
            },
        );
    }
    match request.method.as_str() {
        "tools/list" => {
            let tools = router
                .list_tools()
                .into_iter()
                .map(|definition| ToolListEntry {
                    name: definition.name.as_str().to_string(),
                    description: definition.description,
                    input_schema: definition.input_schema,
                })
                .collect();
            match serde_json::to_value(ToolListResult {
                tools,
            }) {
                Ok(value) => (
                    StatusCode::OK,
                    JsonRpcResponse {
                        jsonrpc: "2.0",
                        id: request.id,
                        result: Some(value),
                        error: None,
                    },
                ),
                Err(_) => jsonrpc_error(request.id, &ToolError::Serialization),
            }
        }
        "tools/call" => {
            let id = request.id;
            let params = request.params.unwrap_or(Value::Null);
            let call = serde_json::from_value::<ToolCallParams>(params);
            match call {
                Ok(call) => match call_tool_with_blocking(router, &call.name, call.arguments) {
                    Ok(response) => {
                        match serde_json::to_value(ToolCallResult::from(response)) {
                            Ok(value) => (
                                StatusCode::OK,
                                JsonRpcResponse {
                                    jsonrpc: "2.0",
                                    id,
                                    result: Some(value),
                                    error: None,
                                },
                            ),
                            Err(_) => jsonrpc_error(id, &ToolError::Serialization),
                        }
                    }
                    Err(err) => jsonrpc_error(id, &err),
                },
                Err(_) => (
                    StatusCode::BAD_REQUEST,
                    JsonRpcResponse {
                        jsonrpc: "2.0",
                        id,
                        result: None,
                        error: Some(JsonRpcError {
                            code: -32602,
                            message: "invalid tool params".to_string(),
                        }),
                    },
                ),
            }
        }
        _ => (
            StatusCode::BAD_REQUEST,
            JsonRpcResponse {
                jsonrpc: "2.0",
                id: request.id,
                result: None,
                error: Some(JsonRpcError {
                    code: -32601,
                    message: "method not found".to_string(),
                }),
            },
        ),
    }
}

/// Executes a tool call, shifting to a blocking context when available.
///
/// The upstream client is blocking; inside a multi-thread runtime the call
/// moves onto a blocking-capable thread so the executor is not starved.
fn call_tool_with_blocking(
    router: &ToolRouter,
    name: &str,
    arguments: Value,
) -> Result<ToolResponse, ToolError> {
    match tokio::runtime::Handle::try_current() {
        Ok(handle) if handle.runtime_flavor() == tokio::runtime::RuntimeFlavor::MultiThread => {
            tokio::task::block_in_place(|| router.handle_tool_call(name, arguments))
        }
        _ => router.handle_tool_call(name, arguments),
    }
}

/// Parses and validates a JSON-RPC request payload.
fn parse_request(state: &ServerState, bytes: &Bytes) -> (StatusCode, JsonRpcResponse) {
    if bytes.len() > state.max_body_bytes {
        return (
            StatusCode::PAYLOAD_TOO_LARGE,
            JsonRpcResponse {
                jsonrpc: "2.0",
                id: Value::Null,
                result: None,
                error: Some(JsonRpcError {
                    code: -32070,
                    message: "request body too large".to_string(),
                }),
            },
        );
    }
    let request: Result<JsonRpcRequest, _> = serde_json::from_slice(bytes.as_ref());
    request.map_or_else(
        |_| {
            (
                StatusCode::BAD_REQUEST,
                JsonRpcResponse {
                    jsonrpc: "2.0",
                    id: Value::Null,
                    result: None,
                    error: Some(JsonRpcError {
                        code: -32600,
                        message: "invalid json-rpc request".to_string(),
                    }),
                },
            )
        },
        |request| handle_request(&state.router, request),
    )
}

/// Builds a JSON-RPC error response for a dispatch failure.
fn jsonrpc_error(id: Value, error: &ToolError) -> (StatusCode, JsonRpcResponse) {
    let (status, code, message) = match error {
        ToolError::UnknownTool => (StatusCode::BAD_REQUEST, -32601, "unknown tool".to_string()),
        ToolError::Serialization => {
            (StatusCode::INTERNAL_SERVER_ERROR, -32603, "internal error".to_string())
        }
    };
    (
        status,
        JsonRpcResponse {
            jsonrpc: "2.0",
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message,
            }),
        },
    )
}

// ============================================================================
// SECTION: Framing Helpers
// ============================================================================

/// Reads a framed stdio payload using MCP Content-Length headers.
fn read_framed(
    reader: &mut BufReader<impl Read>,
    max_body_bytes: usize,
) -> Result<Vec<u8>, McpServerError> {
    let mut content_length: Option<usize> = None;
    let mut line = String::new();
    loop {
        line.clear();
        let bytes = reader
            .read_line(&mut line)
            .map_err(|_| McpServerError::Transport("stdio read failed".to_string()))?;
        if bytes == 0 {
            return Err(McpServerError::Transport("stdio closed".to_string()));
        }
        if line.trim().is_empty() {
            break;
        }
        if let Some(value) = line.strip_prefix("Content-Length:") {
            let parsed = value
                .trim()
                .parse::<usize>()
                .map_err(|_| McpServerError::Transport("invalid content length".to_string()))?;
            content_length = Some(parsed);
        }
    }
    let len = content_length
        .ok_or_else(|| McpServerError::Transport("missing content length".to_string()))?;
    if len > max_body_bytes {
        return Err(McpServerError::Transport("payload too large".to_string()));
    }
    let mut buf = vec![0u8; len];
    reader
        .read_exact(&mut buf)
        .map_err(|_| McpServerError::Transport("stdio read failed".to_string()))?;
    Ok(buf)
}

/// Writes a framed stdio payload using MCP Content-Length headers.
fn write_framed(writer: &mut impl Write, payload: &[u8]) -> Result<(), McpServerError> {
    let header = format!("Content-Length: {}\r\n\r\n", payload.len());
    writer
        .write_all(header.as_bytes())
        .map_err(|_| McpServerError::Transport("stdio write failed".to_string()))?;
    writer
        .write_all(payload)
        .map_err(|_| McpServerError::Transport("stdio write failed".to_string()))?;
    writer.flush().map_err(|_| McpServerError::Transport("stdio write failed".to_string()))
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// MCP server errors.
#[derive(Debug, thiserror::Error)]
pub enum McpServerError {
    /// Configuration errors.
    #[error("config error: {0}")]
    Config(String),
    /// Initialization errors.
    #[error("init error: {0}")]
    Init(String),
    /// Transport errors.
    #[error("transport error: {0}")]
    Transport(String),
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests;
