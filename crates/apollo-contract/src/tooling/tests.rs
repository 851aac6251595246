// crates/apollo-contract/src/tooling/tests.rs
// ============================================================================
// Module: Tool Contract Tests
// Description: Unit tests for the tool catalog and input schemas.
// Purpose: Lock the catalog shape, ordering, and declared constraints.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! Covers catalog completeness, name uniqueness, registration order, and the
//! paging and bulk bounds each schema declares.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    reason = "Test-only panic-based assertions are permitted."
)]

use std::collections::BTreeSet;

use serde_json::Value;
use serde_json::json;

use super::tool_definitions;
use crate::types::ToolName;

// ============================================================================
// SECTION: Test Helpers
// ============================================================================

/// Returns the input schema for the named tool.
fn schema_for(name: ToolName) -> Value {
    tool_definitions()
        .into_iter()
        .find(|definition| definition.name == name)
        .map(|definition| definition.input_schema)
        .unwrap_or_else(|| panic!("missing definition for {name}"))
}

// ============================================================================
// SECTION: Catalog Shape
// ============================================================================

#[test]
fn catalog_has_twenty_seven_tools() {
    assert_eq!(tool_definitions().len(), 27);
    assert_eq!(ToolName::all().len(), 27);
}

#[test]
fn catalog_order_matches_canonical_name_order() {
    let names: Vec<ToolName> = tool_definitions()
        .iter()
        .map(|definition| definition.name)
        .collect();
    assert_eq!(names.as_slice(), ToolName::all());
}

#[test]
fn tool_names_are_unique() {
    let names: BTreeSet<&'static str> = tool_definitions()
        .iter()
        .map(|definition| definition.name.as_str())
        .collect();
    assert_eq!(names.len(), 27);
}

#[test]
fn every_schema_is_an_object_schema() {
    for definition in tool_definitions() {
        assert_eq!(
            definition.input_schema["type"],
            json!("object"),
            "non-object schema for {}",
            definition.name
        );
        assert!(
            definition.input_schema["properties"].is_object(),
            "missing properties for {}",
            definition.name
        );
    }
}

#[test]
fn every_description_is_non_empty() {
    for definition in tool_definitions() {
        assert!(
            !definition.description.is_empty(),
            "empty description for {}",
            definition.name
        );
    }
}

#[test]
fn name_round_trips_through_parse() {
    for name in ToolName::all() {
        assert_eq!(ToolName::parse(name.as_str()), Some(*name));
    }
    assert_eq!(ToolName::parse("no_such_tool"), None);
}

// ============================================================================
// SECTION: Paging Bounds
// ============================================================================

#[test]
fn people_search_pages_cap_at_one_hundred_and_default_to_ten() {
    let schema = schema_for(ToolName::SearchPeople);
    assert_eq!(schema["properties"]["page"]["minimum"], json!(1));
    assert_eq!(schema["properties"]["page"]["default"], json!(1));
    assert_eq!(schema["properties"]["per_page"]["maximum"], json!(100));
    assert_eq!(schema["properties"]["per_page"]["default"], json!(10));
}

#[test]
fn crm_searches_default_to_twenty_five_per_page() {
    for name in [
        ToolName::SearchContacts,
        ToolName::SearchAccounts,
        ToolName::SearchSequences,
        ToolName::SearchOutreachEmails,
    ] {
        let schema = schema_for(name);
        assert_eq!(
            schema["properties"]["per_page"]["default"],
            json!(25),
            "wrong per_page default for {name}"
        );
        assert_eq!(schema["properties"]["per_page"]["maximum"], json!(100));
    }
}

#[test]
fn news_search_caps_at_twenty_five_per_page() {
    let schema = schema_for(ToolName::SearchNewsArticles);
    assert_eq!(schema["properties"]["per_page"]["maximum"], json!(25));
    assert_eq!(schema["properties"]["per_page"]["default"], json!(10));
}

// ============================================================================
// SECTION: Bulk Bounds
// ============================================================================

#[test]
fn bulk_enrich_accepts_one_to_ten_details() {
    let schema = schema_for(ToolName::BulkEnrichPeople);
    let details = &schema["properties"]["details"];
    assert_eq!(details["minItems"], json!(1));
    assert_eq!(details["maxItems"], json!(10));
    assert_eq!(schema["required"], json!(["details"]));
}

#[test]
fn bulk_contact_tools_accept_one_to_one_hundred_entries() {
    for name in [ToolName::BulkCreateContacts, ToolName::BulkUpdateContacts] {
        let schema = schema_for(name);
        let contacts = &schema["properties"]["contacts"];
        assert_eq!(contacts["minItems"], json!(1), "wrong minItems for {name}");
        assert_eq!(contacts["maxItems"], json!(100), "wrong maxItems for {name}");
    }
}

#[test]
fn bulk_update_items_require_an_id() {
    let schema = schema_for(ToolName::BulkUpdateContacts);
    let item = &schema["properties"]["contacts"]["items"];
    assert_eq!(item["required"], json!(["id"]));
}

// ============================================================================
// SECTION: Field Contracts
// ============================================================================

#[test]
fn phone_number_type_declares_work_default() {
    let schema = schema_for(ToolName::CreateContact);
    let phone_type = &schema["properties"]["phone_numbers"]["items"]["properties"]["type"];
    assert_eq!(phone_type["enum"], json!(["work", "mobile", "home", "other"]));
    assert_eq!(phone_type["default"], json!("work"));
}

#[test]
fn update_contact_requires_only_the_contact_id() {
    let schema = schema_for(ToolName::UpdateContact);
    assert_eq!(schema["required"], json!(["contact_id"]));
}

#[test]
fn bulk_create_items_omit_postal_code() {
    let schema = schema_for(ToolName::BulkCreateContacts);
    let item_properties = &schema["properties"]["contacts"]["items"]["properties"];
    assert!(item_properties.get("postal_code").is_none());
    assert!(item_properties.get("city").is_some());
}

#[test]
fn sequence_status_mode_is_a_closed_enum() {
    let schema = schema_for(ToolName::UpdateSequenceStatus);
    assert_eq!(schema["properties"]["mode"]["enum"], json!(["remove", "stop"]));
    assert_eq!(
        schema["required"],
        json!(["emailer_campaign_id", "contact_ids", "mode"])
    );
}

#[test]
fn custom_field_enums_cover_all_variants() {
    let schema = schema_for(ToolName::CreateCustomField);
    assert_eq!(
        schema["properties"]["field_type"]["enum"],
        json!(["text", "number", "date", "datetime", "boolean", "dropdown", "star_rating"])
    );
    assert_eq!(
        schema["properties"]["entity_type"]["enum"],
        json!(["contact", "account", "opportunity"])
    );
}

#[test]
fn reveal_flags_default_to_false() {
    let schema = schema_for(ToolName::EnrichPerson);
    assert_eq!(
        schema["properties"]["reveal_personal_emails"]["default"],
        json!(false)
    );
    assert_eq!(
        schema["properties"]["reveal_phone_number"]["default"],
        json!(false)
    );
}

#[test]
fn no_argument_tools_declare_empty_properties() {
    for name in [
        ToolName::ListEmailAccounts,
        ToolName::ListCustomFieldsDeprecated,
        ToolName::GetApiUsageStats,
    ] {
        let schema = schema_for(name);
        let properties = schema["properties"]
            .as_object()
            .unwrap_or_else(|| panic!("missing properties for {name}"));
        assert!(properties.is_empty(), "unexpected properties for {name}");
    }
}
