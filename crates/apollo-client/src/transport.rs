// crates/apollo-client/src/transport.rs
// ============================================================================
// Module: HTTP Transport
// Description: Executes normalized requests against the Apollo.io API.
// Purpose: Produce a uniform success-or-error JSON value for every call.
// Dependencies: reqwest, serde_json
// ============================================================================

//! ## Overview
//! The transport joins a fixed base origin with a service-relative route,
//! attaches the API-key credential, and normalizes every response into one of
//! two shapes: the decoded JSON body on success, or a uniform error value
//! `{error, status, message, details}` on a non-success status. Network-level
//! failures surface as [`TransportError`] and are caught at the invocation
//! boundary; a fault never crosses the transport undetected.
//!
//! ## Invariants
//! - One attempt per invocation: no retries, no backoff.
//! - The response body is always read as text first; JSON decode failure is
//!   not a failure of the call.
//! - The credential never appears in any returned value.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::Url;
use reqwest::blocking::Client;
use reqwest::blocking::RequestBuilder;
use serde_json::Value;
use serde_json::json;
use thiserror::Error;

use crate::request::ApiRequest;
use crate::request::Method;

/// Production origin for the Apollo.io REST API.
pub const DEFAULT_BASE_URL: &str = "https://api.apollo.io";

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Configuration for the Apollo HTTP transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApolloClientConfig {
    /// Base origin requests are joined against.
    pub base_url: String,
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
    /// User agent string for outbound requests.
    pub user_agent: String,
}

impl Default for ApolloClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: 30_000,
            user_agent: "apollo-mcp/0.1".to_string(),
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Network-level transport failures.
///
/// These are distinct from upstream HTTP errors, which are reported as a
/// uniform error value rather than raised.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The HTTP client could not be constructed.
    #[error("http client build failed: {0}")]
    Build(String),
    /// The request URL could not be constructed from base and path.
    #[error("invalid request url: {0}")]
    Url(String),
    /// The request could not be sent or the connection failed.
    #[error("request failed: {0}")]
    Network(String),
    /// The response body could not be read.
    #[error("response read failed: {0}")]
    Read(String),
}

// ============================================================================
// SECTION: Transport Implementation
// ============================================================================

/// HTTP transport for the Apollo.io API.
pub struct ApolloClient {
    /// Transport configuration.
    config: ApolloClientConfig,
    /// Opaque API key attached to every request.
    api_key: String,
    /// HTTP client used for outbound requests.
    client: Client,
}

impl ApolloClient {
    /// Creates a new transport holding the given credential.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the HTTP client cannot be created.
    pub fn new(api_key: String, config: ApolloClientConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|err| TransportError::Build(err.to_string()))?;
        Ok(Self {
            config,
            api_key,
            client,
        })
    }

    /// Executes a normalized request and returns the uniform result value.
    ///
    /// A 2xx status yields the decoded body verbatim; any other status yields
    /// the uniform error value. Only network-level failures are raised.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the request cannot be sent or the
    /// response body cannot be read.
    pub fn execute(&self, request: &ApiRequest) -> Result<Value, TransportError> {
        let url = self.build_url(request)?;
        let builder = self.apply_headers(self.builder_for(request.method, url));
        let builder = match (&request.body, request.method.carries_body()) {
            (Some(body), true) => builder.json(body),
            _ => builder,
        };
        let response = builder.send().map_err(|err| TransportError::Network(err.to_string()))?;
        let status = response.status();
        let text = response.text().map_err(|err| TransportError::Read(err.to_string()))?;
        let data = decode_body(&text);
        if status.is_success() {
            return Ok(data);
        }
        Ok(error_result(status, data))
    }

    /// Joins the base origin, route, and encoded query string.
    fn build_url(&self, request: &ApiRequest) -> Result<Url, TransportError> {
        let joined = format!("{}{}", self.config.base_url.trim_end_matches('/'), request.path);
        let mut url = Url::parse(&joined).map_err(|err| TransportError::Url(err.to_string()))?;
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &request.query {
                // Empty values are meaningless filters; drop them.
                if !value.is_empty() {
                    pairs.append_pair(key, value);
                }
            }
        }
        if url.query() == Some("") {
            url.set_query(None);
        }
        Ok(url)
    }

    /// Returns a request builder for the given method and URL.
    fn builder_for(&self, method: Method, url: Url) -> RequestBuilder {
        match method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
            Method::Patch => self.client.patch(url),
            Method::Put => self.client.put(url),
        }
    }

    /// Attaches the content-type and credential headers.
    fn apply_headers(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.header("Content-Type", "application/json").header("X-Api-Key", &self.api_key)
    }
}

// ============================================================================
// SECTION: Response Normalization
// ============================================================================

/// Decodes a response body, wrapping undecodable text.
///
/// The contract is "always produce a body value": non-JSON error pages and
/// empty bodies become `{"raw_response": text}` instead of failing the call.
#[must_use]
pub fn decode_body(text: &str) -> Value {
    serde_json::from_str(text).unwrap_or_else(|_| json!({ "raw_response": text }))
}

/// Builds the uniform error value for a non-success status.
///
/// `message` prefers the decoded body's `message` field, then its `error`
/// field, then the HTTP status line text. The remote service populates
/// `message` most reliably, so that order is load-bearing.
#[must_use]
pub fn error_result(status: StatusCode, details: Value) -> Value {
    let reason = status.canonical_reason().unwrap_or("");
    let message = body_text(&details, "message")
        .or_else(|| body_text(&details, "error"))
        .unwrap_or(reason);
    json!({
        "error": true,
        "status": status.as_u16(),
        "message": message,
        "details": details,
    })
}

/// Returns a non-empty string field from a decoded body, if present.
fn body_text<'a>(details: &'a Value, field: &str) -> Option<&'a str> {
    details.get(field).and_then(Value::as_str).filter(|text| !text.is_empty())
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(
        clippy::expect_used,
        clippy::unwrap_used,
        clippy::panic,
        reason = "Test-only assertions favor direct unwrap/expect for clarity."
    )]

    use reqwest::StatusCode;
    use serde_json::json;

    use super::decode_body;
    use super::error_result;

    #[test]
    fn decode_body_wraps_unparsable_text() {
        let decoded = decode_body("Service Unavailable");
        assert_eq!(decoded, json!({ "raw_response": "Service Unavailable" }));
    }

    #[test]
    fn decode_body_wraps_empty_text() {
        assert_eq!(decode_body(""), json!({ "raw_response": "" }));
    }

    #[test]
    fn decode_body_passes_valid_json_through() {
        assert_eq!(decode_body(r#"{"ok":true}"#), json!({ "ok": true }));
    }

    #[test]
    fn error_result_prefers_message_over_error_field() {
        let details = json!({ "message": "Invalid request", "error": "bad" });
        let result = error_result(StatusCode::UNPROCESSABLE_ENTITY, details);
        assert_eq!(result["error"], json!(true));
        assert_eq!(result["status"], json!(422));
        assert_eq!(result["message"], json!("Invalid request"));
    }

    #[test]
    fn error_result_falls_back_to_error_field() {
        let details = json!({ "error": "api key missing" });
        let result = error_result(StatusCode::UNAUTHORIZED, details);
        assert_eq!(result["message"], json!("api key missing"));
    }

    #[test]
    fn error_result_falls_back_to_status_text() {
        let details = json!({ "raw_response": "Service Unavailable" });
        let result = error_result(StatusCode::SERVICE_UNAVAILABLE, details.clone());
        assert_eq!(result["message"], json!("Service Unavailable"));
        assert_eq!(result["details"], details);
    }

    #[test]
    fn error_result_treats_empty_message_as_absent() {
        let details = json!({ "message": "", "error": "quota exceeded" });
        let result = error_result(StatusCode::TOO_MANY_REQUESTS, details);
        assert_eq!(result["message"], json!("quota exceeded"));
    }
}
