// crates/apollo-mcp/src/main.rs
// ============================================================================
// Module: Apollo MCP Entry Point
// Description: Binary entry point for the Apollo MCP server.
// Purpose: Load environment configuration and run the selected transport.
// Dependencies: apollo-mcp, tokio
// ============================================================================

//! ## Overview
//! Loads configuration from the environment and serves until the transport
//! closes. A missing `APOLLO_API_KEY` fails here, at startup, so a
//! misconfigured deployment never reaches first tool call.

#![allow(
    clippy::print_stderr,
    reason = "Startup failures are reported on stderr; stdout is the protocol channel."
)]

use std::process::ExitCode;

use apollo_mcp::ApolloMcpConfig;
use apollo_mcp::McpServer;

/// Binary entry point returning an exit code.
#[tokio::main(flavor = "multi_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("apollo-mcp: {message}");
            ExitCode::FAILURE
        }
    }
}

/// Loads configuration and serves the MCP transport.
async fn run() -> Result<(), String> {
    let config = ApolloMcpConfig::from_env().map_err(|err| err.to_string())?;
    let server = McpServer::from_config(config).map_err(|err| err.to_string())?;
    server.serve().await.map_err(|err| err.to_string())
}
