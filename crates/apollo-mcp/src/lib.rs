// crates/apollo-mcp/src/lib.rs
// ============================================================================
// Module: Apollo MCP
// Description: MCP server exposing Apollo.io CRM tools over JSON-RPC 2.0.
// Purpose: Validate, plan, and execute tool calls against the Apollo REST API.
// Dependencies: apollo-client, apollo-contract, axum, jsonschema, tokio
// ============================================================================

//! ## Overview
//! The Apollo MCP server exposes the fixed 27-tool catalog over stdio and
//! HTTP JSON-RPC transports. Every call flows through the same pipeline:
//! schema validation with default filling, request planning, then HTTP
//! execution through [`apollo_client::ApolloClient`]. Security posture: tool
//! inputs are untrusted and must be validated before any network activity;
//! the API credential is never echoed into results or logs.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod server;
pub mod tools;
pub mod validation;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::ApolloMcpConfig;
pub use config::ConfigError;
pub use config::ServerTransport;
pub use server::McpServer;
pub use server::McpServerError;
pub use tools::ToolError;
pub use tools::ToolResponse;
pub use tools::ToolRouter;
pub use validation::SchemaRegistry;
pub use validation::ValidationError;
