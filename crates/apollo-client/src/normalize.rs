// crates/apollo-client/src/normalize.rs
// ============================================================================
// Module: Text Normalizers
// Description: Pure string and object transforms shared by tool handlers.
// Purpose: Canonicalize domains and drop absent fields from payloads.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! Two pure, total functions used across the tool catalog: [`clean_domain`]
//! canonicalizes caller-supplied domain strings, and [`strip_undefined`]
//! removes absent fields so optional, unset values are never sent as explicit
//! nulls.
//!
//! ## Invariants
//! - Both functions are deterministic and total over any input.
//! - [`clean_domain`] is idempotent.
//! - [`strip_undefined`] preserves the key order of retained entries.

use serde_json::Map;
use serde_json::Value;

/// Canonicalizes a domain string.
///
/// Strips a leading `http://`/`https://` scheme, a leading `www.`, a leading
/// `@` (callers sometimes paste a handle instead of a domain), and any
/// path or query suffix after the first `/`.
#[must_use]
pub fn clean_domain(domain: &str) -> String {
    let stripped = domain
        .strip_prefix("https://")
        .or_else(|| domain.strip_prefix("http://"))
        .unwrap_or(domain);
    let stripped = stripped.strip_prefix("www.").unwrap_or(stripped);
    let stripped = stripped.strip_prefix('@').unwrap_or(stripped);
    match stripped.split_once('/') {
        Some((host, _)) => host.to_string(),
        None => stripped.to_string(),
    }
}

/// Returns a new mapping containing only the entries whose value is present.
///
/// `Value::Null` is the absent sentinel: optional fields that were never set
/// deserialize to null and must not reach the wire. Key order of retained
/// entries is preserved.
#[must_use]
pub fn strip_undefined(mapping: &Map<String, Value>) -> Map<String, Value> {
    let mut result = Map::new();
    for (key, value) in mapping {
        if !value.is_null() {
            result.insert(key.clone(), value.clone());
        }
    }
    result
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

    use serde_json::json;

    use super::clean_domain;
    use super::strip_undefined;

    #[test]
    fn clean_domain_strips_scheme_www_and_path() {
        assert_eq!(clean_domain("https://www.Example.com/path"), "Example.com");
        assert_eq!(clean_domain("http://example.com"), "example.com");
        assert_eq!(clean_domain("www.example.com"), "example.com");
        assert_eq!(clean_domain("example.com/about?x=1"), "example.com");
    }

    #[test]
    fn clean_domain_strips_leading_handle_marker() {
        assert_eq!(clean_domain("@example.com"), "example.com");
    }

    #[test]
    fn clean_domain_leaves_bare_domains_untouched() {
        assert_eq!(clean_domain("example.com"), "example.com");
        assert_eq!(clean_domain(""), "");
    }

    #[test]
    fn clean_domain_is_idempotent() {
        let inputs = ["https://www.example.com/a/b", "@example.com", "example.com", ""];
        for input in inputs {
            let once = clean_domain(input);
            assert_eq!(clean_domain(&once), once);
        }
    }

    #[test]
    fn strip_undefined_drops_null_entries_and_keeps_order() {
        let value = json!({"a": 1, "b": null, "c": "x"});
        let mapping = value.as_object().expect("object");
        let stripped = strip_undefined(mapping);
        let keys: Vec<&String> = stripped.keys().collect();
        assert_eq!(keys, ["a", "c"]);
        assert_eq!(stripped["a"], json!(1));
        assert_eq!(stripped["c"], json!("x"));
    }

    #[test]
    fn strip_undefined_keeps_false_and_empty_values() {
        let value = json!({"flag": false, "empty": "", "list": []});
        let mapping = value.as_object().expect("object");
        let stripped = strip_undefined(mapping);
        assert_eq!(stripped.len(), 3);
    }
}
