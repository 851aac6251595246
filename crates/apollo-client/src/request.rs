// crates/apollo-client/src/request.rs
// ============================================================================
// Module: Normalized Request
// Description: The fully-resolved method/path/query/body tuple for one call.
// Purpose: Let tool handlers build requests that tests can inspect offline.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! Tool handlers produce an [`ApiRequest`] describing exactly what goes over
//! the wire; the transport executes it. Keeping the two apart makes request
//! shaping (path interpolation, domain cleaning, forced flags) testable
//! without network access.

use std::collections::BTreeMap;

use serde_json::Value;

/// HTTP methods used by the Apollo API surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// HTTP GET; never carries a body.
    Get,
    /// HTTP POST.
    Post,
    /// HTTP PATCH.
    Patch,
    /// HTTP PUT.
    Put,
}

impl Method {
    /// Returns the canonical method token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Put => "PUT",
        }
    }

    /// Returns true when the method conventionally carries a payload.
    #[must_use]
    pub const fn carries_body(self) -> bool {
        matches!(self, Self::Post | Self::Patch | Self::Put)
    }
}

/// A fully-resolved request about to be sent to the Apollo API.
///
/// # Invariants
/// - `path` is service-relative and non-empty; interpolated IDs are the
///   caller's responsibility.
/// - `body` is only honored for methods where [`Method::carries_body`] holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: Method,
    /// Service-relative route, e.g. `/api/v1/contacts`.
    pub path: String,
    /// Query parameters; empty values are dropped at send time.
    pub query: BTreeMap<String, String>,
    /// JSON body for POST/PATCH/PUT requests.
    pub body: Option<Value>,
}

impl ApiRequest {
    /// Builds a GET request with no query parameters.
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            query: BTreeMap::new(),
            body: None,
        }
    }

    /// Builds a GET request with query parameters.
    #[must_use]
    pub fn get_with_query(path: impl Into<String>, query: BTreeMap<String, String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            query,
            body: None,
        }
    }

    /// Builds a POST request with a JSON body.
    #[must_use]
    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            query: BTreeMap::new(),
            body: Some(body),
        }
    }

    /// Builds a PATCH request with a JSON body.
    #[must_use]
    pub fn patch(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Patch,
            path: path.into(),
            query: BTreeMap::new(),
            body: Some(body),
        }
    }
}
