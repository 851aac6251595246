// crates/apollo-mcp/src/config.rs
// ============================================================================
// Module: MCP Configuration
// Description: Environment-driven configuration for the Apollo MCP server.
// Purpose: Provide strict, fail-closed config loading with hard limits.
// Dependencies: apollo-client, thiserror
// ============================================================================

//! ## Overview
//! Configuration is loaded from environment variables. A missing credential
//! fails closed at startup rather than at first tool call. The credential is
//! held verbatim for the `X-Api-Key` header and is redacted from debug
//! output; nothing in this module writes it anywhere.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fmt;

use apollo_client::ApolloClientConfig;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Environment variable holding the Apollo API credential.
pub const API_KEY_ENV_VAR: &str = "APOLLO_API_KEY";
/// Environment variable overriding the Apollo base URL.
pub(crate) const BASE_URL_ENV_VAR: &str = "APOLLO_BASE_URL";
/// Environment variable selecting the server transport.
pub(crate) const TRANSPORT_ENV_VAR: &str = "APOLLO_MCP_TRANSPORT";
/// Environment variable holding the HTTP bind address.
pub(crate) const BIND_ENV_VAR: &str = "APOLLO_MCP_BIND";
/// Environment variable overriding the maximum request body size.
pub(crate) const MAX_BODY_ENV_VAR: &str = "APOLLO_MCP_MAX_BODY_BYTES";
/// Environment variable overriding the upstream request timeout.
pub(crate) const TIMEOUT_ENV_VAR: &str = "APOLLO_TIMEOUT_MS";

/// Default maximum JSON-RPC request body size in bytes.
pub(crate) const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;
/// Maximum allowed JSON-RPC request body size in bytes.
pub(crate) const MAX_MAX_BODY_BYTES: usize = 10 * 1024 * 1024;
/// Minimum allowed upstream request timeout in milliseconds.
pub(crate) const MIN_TIMEOUT_MS: u64 = 500;
/// Maximum allowed upstream request timeout in milliseconds.
pub(crate) const MAX_TIMEOUT_MS: u64 = 120_000;

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Server transport selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServerTransport {
    /// Framed JSON-RPC over stdin/stdout.
    #[default]
    Stdio,
    /// JSON-RPC over HTTP POST.
    Http,
}

/// Apollo MCP server configuration.
#[derive(Clone)]
pub struct ApolloMcpConfig {
    /// Apollo API credential sent as `X-Api-Key`.
    pub api_key: String,
    /// Selected server transport.
    pub transport: ServerTransport,
    /// HTTP bind address, required for the HTTP transport.
    pub bind: Option<String>,
    /// Maximum JSON-RPC request body size in bytes.
    pub max_body_bytes: usize,
    /// Upstream HTTP client configuration.
    pub client: ApolloClientConfig,
}

impl fmt::Debug for ApolloMcpConfig {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ApolloMcpConfig")
            .field("api_key", &"<redacted>")
            .field("transport", &self.transport)
            .field("bind", &self.bind)
            .field("max_body_bytes", &self.max_body_bytes)
            .field("client", &self.client)
            .finish()
    }
}

impl ApolloMcpConfig {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the credential is absent or any override
    /// is out of range.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var(API_KEY_ENV_VAR)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;
        let transport = match env::var(TRANSPORT_ENV_VAR).ok().as_deref() {
            None | Some("stdio") => ServerTransport::Stdio,
            Some("http") => ServerTransport::Http,
            Some(other) => return Err(ConfigError::InvalidTransport(other.to_string())),
        };
        let bind = env::var(BIND_ENV_VAR).ok();
        let max_body_bytes = match env::var(MAX_BODY_ENV_VAR).ok() {
            Some(raw) => raw
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidLimit(MAX_BODY_ENV_VAR))?,
            None => DEFAULT_MAX_BODY_BYTES,
        };
        let mut client = ApolloClientConfig::default();
        if let Some(base_url) = env::var(BASE_URL_ENV_VAR).ok().filter(|url| !url.is_empty()) {
            client.base_url = base_url;
        }
        if let Ok(raw) = env::var(TIMEOUT_ENV_VAR) {
            client.timeout_ms =
                raw.parse::<u64>().map_err(|_| ConfigError::InvalidLimit(TIMEOUT_ENV_VAR))?;
        }
        let config = Self {
            api_key,
            transport,
            bind,
            max_body_bytes,
            client,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates limits and transport requirements.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a limit is out of range or the HTTP
    /// transport lacks a bind address.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_body_bytes == 0 || self.max_body_bytes > MAX_MAX_BODY_BYTES {
            return Err(ConfigError::InvalidLimit(MAX_BODY_ENV_VAR));
        }
        if self.client.timeout_ms < MIN_TIMEOUT_MS || self.client.timeout_ms > MAX_TIMEOUT_MS {
            return Err(ConfigError::InvalidLimit(TIMEOUT_ENV_VAR));
        }
        if self.transport == ServerTransport::Http && self.bind.is_none() {
            return Err(ConfigError::MissingBind);
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The credential environment variable is absent or empty.
    #[error("{API_KEY_ENV_VAR} environment variable is required")]
    MissingApiKey,
    /// The transport selection is not recognized.
    #[error("invalid transport: {0} (expected stdio or http)")]
    InvalidTransport(String),
    /// The HTTP transport requires a bind address.
    #[error("http transport requires {BIND_ENV_VAR}")]
    MissingBind,
    /// A numeric limit override is absent, malformed, or out of range.
    #[error("invalid value for {0}")]
    InvalidLimit(&'static str),
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        reason = "Test-only panic-based assertions are permitted."
    )]

    use super::ApolloMcpConfig;
    use super::ConfigError;
    use super::DEFAULT_MAX_BODY_BYTES;
    use super::ServerTransport;
    use apollo_client::ApolloClientConfig;

    /// Returns a valid baseline configuration for mutation in tests.
    fn base_config() -> ApolloMcpConfig {
        ApolloMcpConfig {
            api_key: "key".to_string(),
            transport: ServerTransport::Stdio,
            bind: None,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            client: ApolloClientConfig::default(),
        }
    }

    #[test]
    fn stdio_config_without_bind_is_valid() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn http_transport_requires_bind() {
        let mut config = base_config();
        config.transport = ServerTransport::Http;
        assert!(matches!(config.validate(), Err(ConfigError::MissingBind)));
        config.bind = Some("127.0.0.1:8420".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_body_limit_is_rejected() {
        let mut config = base_config();
        config.max_body_bytes = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn out_of_range_timeout_is_rejected() {
        let mut config = base_config();
        config.client.timeout_ms = 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn debug_output_redacts_the_credential() {
        let config = base_config();
        let rendered = format!("{config:?}");
        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains("key\""));
    }
}
