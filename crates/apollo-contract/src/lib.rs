// crates/apollo-contract/src/lib.rs
// ============================================================================
// Module: Apollo Contract
// Description: Canonical MCP tool names and input contracts for Apollo MCP.
// Purpose: Provide the declarative tool surface consumed by the dispatcher.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! This crate defines the canonical tool surface: one [`ToolDefinition`] per
//! remote Apollo.io capability, pairing a stable name and human-readable
//! description with a declarative JSON Schema input contract. The contracts
//! fully determine whether a raw argument object is acceptable; the
//! dispatcher interprets them uniformly instead of hand-writing per-tool
//! checks.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod tooling;
pub mod types;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use tooling::tool_definitions;
pub use types::ToolDefinition;
pub use types::ToolName;
