// crates/apollo-mcp/src/validation.rs
// ============================================================================
// Module: Input Validation
// Description: Compiled JSON Schema validation for tool call arguments.
// Purpose: Fill declared defaults and reject invalid inputs before dispatch.
// Dependencies: apollo-contract, jsonschema
// ============================================================================

//! ## Overview
//! All tool input schemas are compiled once at startup; a schema that fails
//! to compile aborts the server rather than degrading to unvalidated
//! dispatch. Validation fills declared defaults first and then checks the
//! completed arguments, so an out-of-range value is rejected outright and
//! never clamped toward its default.
//! Security posture: tool arguments are untrusted; see the crate overview.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use apollo_contract::ToolDefinition;
use apollo_contract::ToolName;
use apollo_contract::tool_definitions;
use jsonschema::Draft;
use jsonschema::Validator;
use serde_json::Map;
use serde_json::Value;
use thiserror::Error;

// ============================================================================
// SECTION: Schema Registry
// ============================================================================

/// One compiled tool schema alongside its source document.
struct CompiledTool {
    /// Source schema document, consulted for default filling.
    schema: Value,
    /// Compiled validator for the schema.
    validator: Validator,
}

/// Registry of compiled input validators for the tool catalog.
///
/// # Invariants
/// - Every tool in the catalog has exactly one compiled entry.
pub struct SchemaRegistry {
    /// Compiled entries keyed by tool name.
    entries: BTreeMap<ToolName, CompiledTool>,
}

impl SchemaRegistry {
    /// Compiles every catalog schema into a registry.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when a schema fails to compile or a tool
    /// name is registered twice.
    pub fn compile() -> Result<Self, ValidationError> {
        Self::compile_definitions(tool_definitions())
    }

    /// Compiles a specific definition list into a registry.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when a schema fails to compile or a tool
    /// name is registered twice.
    fn compile_definitions(definitions: Vec<ToolDefinition>) -> Result<Self, ValidationError> {
        let mut entries = BTreeMap::new();
        for definition in definitions {
            let validator = jsonschema::options()
                .with_draft(Draft::Draft202012)
                .build(&definition.input_schema)
                .map_err(|err| ValidationError::Schema {
                    tool: definition.name,
                    message: err.to_string(),
                })?;
            let compiled = CompiledTool {
                schema: definition.input_schema,
                validator,
            };
            if entries.insert(definition.name, compiled).is_some() {
                return Err(ValidationError::DuplicateTool(definition.name));
            }
        }
        Ok(Self {
            entries,
        })
    }

    /// Validates tool arguments, returning the default-filled arguments.
    ///
    /// Null or absent arguments are treated as an empty object so tools with
    /// all-optional inputs accept bare calls.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when the arguments violate the schema.
    pub fn validate(&self, tool: ToolName, arguments: Value) -> Result<Value, ValidationError> {
        let entry = self.entries.get(&tool).ok_or(ValidationError::UnregisteredTool(tool))?;
        let mut arguments = match arguments {
            Value::Null => Value::Object(Map::new()),
            other => other,
        };
        apply_defaults(&entry.schema, &mut arguments);
        let messages: Vec<String> =
            entry.validator.iter_errors(&arguments).map(|err| err.to_string()).collect();
        if messages.is_empty() {
            Ok(arguments)
        } else {
            Err(ValidationError::Invalid {
                tool,
                message: messages.join("; "),
            })
        }
    }
}

// ============================================================================
// SECTION: Default Filling
// ============================================================================

/// Recursively fills declared schema defaults into an instance.
///
/// Only absent properties receive defaults; present values are untouched so
/// validation still rejects out-of-range inputs.
fn apply_defaults(schema: &Value, instance: &mut Value) {
    let Some(schema) = schema.as_object() else {
        return;
    };
    match instance {
        Value::Object(map) => {
            let Some(properties) = schema.get("properties").and_then(Value::as_object) else {
                return;
            };
            for (key, property_schema) in properties {
                match map.get_mut(key) {
                    Some(existing) => apply_defaults(property_schema, existing),
                    None => {
                        if let Some(default) = property_schema.get("default") {
                            map.insert(key.clone(), default.clone());
                        }
                    }
                }
            }
        }
        Value::Array(items) => {
            if let Some(item_schema) = schema.get("items") {
                for item in items.iter_mut() {
                    apply_defaults(item_schema, item);
                }
            }
        }
        _ => {}
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Input validation errors.
///
/// # Invariants
/// - Variants are stable for validation error classification.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A catalog schema failed to compile at startup.
    #[error("schema for {tool} failed to compile: {message}")]
    Schema {
        /// Tool whose schema failed.
        tool: ToolName,
        /// Compiler error message.
        message: String,
    },
    /// A tool name appeared twice in the catalog.
    #[error("duplicate tool registration: {0}")]
    DuplicateTool(ToolName),
    /// A tool name has no compiled schema.
    #[error("no schema registered for {0}")]
    UnregisteredTool(ToolName),
    /// Tool arguments violate the input schema.
    #[error("invalid arguments for {tool}: {message}")]
    Invalid {
        /// Tool whose arguments were rejected.
        tool: ToolName,
        /// Joined validator error messages.
        message: String,
    },
}

// ============================================================================
// SECTION: Tests
// ============================================================================
