// crates/apollo-contract/src/tooling.rs
// ============================================================================
// Module: MCP Tool Contracts
// Description: Canonical tool definitions and input schemas for Apollo MCP.
// Purpose: Drive MCP tool listings and uniform input validation.
// Dependencies: serde_json, apollo-contract::types
// ============================================================================

//! ## Overview
//! One definition per remote Apollo.io capability. Each input schema declares,
//! per field, a semantic type, optionality, a default where applicable, and
//! range or length constraints. Paging bounds live here so out-of-range
//! values are rejected at validation time, never clamped at request time.
//! Security posture: tool inputs are untrusted; the dispatcher validates
//! every call against these schemas before any network activity.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;
use serde_json::json;

use crate::types::ToolDefinition;
use crate::types::ToolName;

// ============================================================================
// SECTION: Tool Catalog
// ============================================================================

/// Returns the canonical tool definitions in registration order.
///
/// The order matches [`ToolName::all`]: a stable grouping by CRM area with
/// no semantic meaning. Append new tools at the end of their group.
#[must_use]
pub fn tool_definitions() -> Vec<ToolDefinition> {
    vec![
        search_people_definition(),
        enrich_person_definition(),
        bulk_enrich_people_definition(),
        search_organizations_definition(),
        enrich_organization_definition(),
        get_organization_definition(),
        get_organization_job_postings_definition(),
        create_contact_definition(),
        update_contact_definition(),
        get_contact_definition(),
        search_contacts_definition(),
        bulk_create_contacts_definition(),
        bulk_update_contacts_definition(),
        create_account_definition(),
        update_account_definition(),
        search_accounts_definition(),
        search_sequences_definition(),
        add_contacts_to_sequence_definition(),
        update_sequence_status_definition(),
        search_outreach_emails_definition(),
        get_email_activities_definition(),
        list_email_accounts_definition(),
        list_fields_definition(),
        create_custom_field_definition(),
        list_custom_fields_deprecated_definition(),
        search_news_articles_definition(),
        get_api_usage_stats_definition(),
    ]
}

// ============================================================================
// SECTION: People Tools
// ============================================================================

/// Builds the definition for `search_people`.
fn search_people_definition() -> ToolDefinition {
    definition(
        ToolName::SearchPeople,
        "Search for people in Apollo's database. This is FREE and does not cost credits. Use \
         this as the primary discovery tool. Returns name, title, company, and LinkedIn URL. \
         Does NOT return email/phone - use enrich_person to get contact info (costs 1 credit). \
         Supports filtering by title, company, location, seniority, and more. Max 10 results \
         per page.",
        json!({
            "type": "object",
            "properties": {
                "q_keywords": string("General keyword search across all fields"),
                "person_titles": string_array("Job titles to filter by, e.g. ['CEO', 'CTO']"),
                "person_not_titles": string_array("Job titles to exclude"),
                "q_organization_domains": string_array(
                    "Company domains to search within, e.g. ['google.com']. Will be auto-cleaned."
                ),
                "organization_locations": string_array(
                    "HQ locations of the company, e.g. ['San Francisco, CA', 'New York']"
                ),
                "person_locations": string_array(
                    "Locations of the person, e.g. ['California, United States']"
                ),
                "person_seniorities": string_array(
                    "Seniority levels: 'founder', 'c_suite', 'vp', 'director', 'manager', \
                     'senior', 'entry'"
                ),
                "contact_email_status": string_array(
                    "Email status filter: 'verified', 'guessed', 'unavailable'"
                ),
                "organization_num_employees_ranges": string_array(
                    "Employee count ranges, e.g. ['1,10', '11,50', '51,200']"
                ),
                "organization_ids": string_array("Apollo organization IDs to filter by"),
                "page": page(),
                "per_page": per_page(100, 10),
            }
        }),
    )
}

/// Builds the definition for `enrich_person`.
fn enrich_person_definition() -> ToolDefinition {
    definition(
        ToolName::EnrichPerson,
        "Enrich a single person to get their email, phone, and detailed profile. COSTS 1 \
         CREDIT per successful match. Provide as many identifying fields as possible for best \
         match accuracy. At minimum provide name + domain, or LinkedIn URL, or email.",
        json!({
            "type": "object",
            "properties": {
                "first_name": string("Person's first name"),
                "last_name": string("Person's last name"),
                "name": string("Full name (use if you don't have first/last split)"),
                "email": string("Known email address"),
                "organization_name": string("Company name"),
                "domain": string("Company domain, e.g. 'google.com'. Will be auto-cleaned."),
                "linkedin_url": string(
                    "LinkedIn profile URL, e.g. 'linkedin.com/in/johndoe'"
                ),
                "reveal_personal_emails": boolean_default(
                    "If true, also return personal email addresses",
                    false
                ),
                "reveal_phone_number": boolean_default(
                    "If true, also return phone numbers",
                    false
                ),
            }
        }),
    )
}

/// Builds the definition for `bulk_enrich_people`.
fn bulk_enrich_people_definition() -> ToolDefinition {
    definition(
        ToolName::BulkEnrichPeople,
        "Enrich multiple people in a single request. COSTS 1 CREDIT PER PERSON matched. Each \
         detail object should contain identifying info (name, domain, email, linkedin_url). \
         Max 10 people per request.",
        json!({
            "type": "object",
            "properties": {
                "details": {
                    "type": "array",
                    "description": "Array of person details to enrich (max 10)",
                    "minItems": 1,
                    "maxItems": 10,
                    "items": {
                        "type": "object",
                        "properties": {
                            "first_name": { "type": "string" },
                            "last_name": { "type": "string" },
                            "name": { "type": "string" },
                            "email": { "type": "string" },
                            "organization_name": { "type": "string" },
                            "domain": { "type": "string" },
                            "linkedin_url": { "type": "string" },
                        }
                    }
                },
                "reveal_personal_emails": boolean_default("", false),
                "reveal_phone_number": boolean_default("", false),
            },
            "required": ["details"]
        }),
    )
}

// ============================================================================
// SECTION: Organization Tools
// ============================================================================

/// Builds the definition for `search_organizations`.
fn search_organizations_definition() -> ToolDefinition {
    definition(
        ToolName::SearchOrganizations,
        "Search for organizations/companies in Apollo's database. COSTS 1 CREDIT PER PAGE of \
         results. Prefer search_people (FREE) when possible. Use this when you specifically \
         need company-level data like revenue, tech stack, or funding info.",
        json!({
            "type": "object",
            "properties": {
                "q_organization_keyword_tags": string_array(
                    "Industry keyword tags, e.g. ['saas', 'fintech']"
                ),
                "q_organization_name": string("Company name to search for"),
                "organization_locations": string_array(
                    "HQ locations, e.g. ['San Francisco, CA']"
                ),
                "organization_num_employees_ranges": string_array(
                    "Employee count ranges, e.g. ['1,10', '51,200']"
                ),
                "organization_revenue_ranges": string_array(
                    "Revenue ranges in USD, e.g. ['1000000,10000000'] (1M-10M)"
                ),
                "q_organization_domains": string_array(
                    "Company domains to search, e.g. ['google.com']"
                ),
                "organization_ids": string_array("Specific Apollo organization IDs"),
                "page": page(),
                "per_page": per_page(100, 10),
            }
        }),
    )
}

/// Builds the definition for `enrich_organization`.
fn enrich_organization_definition() -> ToolDefinition {
    definition(
        ToolName::EnrichOrganization,
        "Enrich a single organization by domain to get detailed company info. COSTS 1 CREDIT. \
         Returns company size, industry, funding, tech stack, etc.",
        json!({
            "type": "object",
            "properties": {
                "domain": string(
                    "Company domain to enrich, e.g. 'google.com'. Will be auto-cleaned."
                ),
            },
            "required": ["domain"]
        }),
    )
}

/// Builds the definition for `get_organization`.
fn get_organization_definition() -> ToolDefinition {
    definition(
        ToolName::GetOrganization,
        "Get details for an organization by its Apollo ID. FREE - no credit cost. Use this \
         when you already have the organization ID from a previous search.",
        json!({
            "type": "object",
            "properties": {
                "organization_id": string("Apollo organization ID"),
            },
            "required": ["organization_id"]
        }),
    )
}

/// Builds the definition for `get_organization_job_postings`.
fn get_organization_job_postings_definition() -> ToolDefinition {
    definition(
        ToolName::GetOrganizationJobPostings,
        "Get current job postings for an organization. COSTS 1 CREDIT. Useful for \
         understanding hiring priorities and team growth areas.",
        json!({
            "type": "object",
            "properties": {
                "organization_id": string("Apollo organization ID"),
            },
            "required": ["organization_id"]
        }),
    )
}

// ============================================================================
// SECTION: Contact Tools
// ============================================================================

/// Builds the definition for `create_contact`.
fn create_contact_definition() -> ToolDefinition {
    definition(
        ToolName::CreateContact,
        "Create a new contact in your Apollo CRM. FREE. Deduplication is enforced \
         (run_dedupe=true) to prevent duplicates. Provide at least first_name, last_name, and \
         either email or organization_name.",
        json!({
            "type": "object",
            "properties": {
                "first_name": string("Contact's first name"),
                "last_name": string("Contact's last name"),
                "email": string("Contact's email address"),
                "title": string("Job title"),
                "organization_name": string("Company name"),
                "website_url": string("Company website URL"),
                "account_id": string("Apollo account ID to associate with"),
                "phone_numbers": phone_numbers("Phone numbers to add"),
                "label_names": string_array("Labels/tags to apply"),
                "present_raw_address": string("Full address string"),
                "city": { "type": "string" },
                "state": { "type": "string" },
                "country": { "type": "string" },
                "postal_code": { "type": "string" },
            },
            "required": ["first_name", "last_name"]
        }),
    )
}

/// Builds the definition for `update_contact`.
fn update_contact_definition() -> ToolDefinition {
    definition(
        ToolName::UpdateContact,
        "Update an existing contact in your Apollo CRM. FREE. Provide the contact ID and any \
         fields to update.",
        json!({
            "type": "object",
            "properties": {
                "contact_id": string("Apollo contact ID to update"),
                "first_name": { "type": "string" },
                "last_name": { "type": "string" },
                "email": { "type": "string" },
                "title": { "type": "string" },
                "organization_name": { "type": "string" },
                "website_url": { "type": "string" },
                "account_id": { "type": "string" },
                "phone_numbers": phone_numbers(""),
                "label_names": { "type": "array", "items": { "type": "string" } },
                "present_raw_address": { "type": "string" },
                "city": { "type": "string" },
                "state": { "type": "string" },
                "country": { "type": "string" },
                "postal_code": { "type": "string" },
            },
            "required": ["contact_id"]
        }),
    )
}

/// Builds the definition for `get_contact`.
fn get_contact_definition() -> ToolDefinition {
    definition(
        ToolName::GetContact,
        "Get a single contact by ID from your Apollo CRM. FREE.",
        json!({
            "type": "object",
            "properties": {
                "contact_id": string("Apollo contact ID"),
            },
            "required": ["contact_id"]
        }),
    )
}

/// Builds the definition for `search_contacts`.
fn search_contacts_definition() -> ToolDefinition {
    definition(
        ToolName::SearchContacts,
        "Search contacts in your Apollo CRM. FREE. These are contacts you've already saved - \
         not the global Apollo database. Use search_people for prospecting new contacts.",
        json!({
            "type": "object",
            "properties": {
                "q_keywords": string("Keyword search"),
                "contact_stage_ids": string_array("Filter by contact stage IDs"),
                "sort_by_field": string(
                    "Field to sort by, e.g. 'contact_last_activity_date'"
                ),
                "sort_ascending": { "type": "boolean", "description": "Sort direction" },
                "page": page(),
                "per_page": per_page(100, 25),
            }
        }),
    )
}

/// Builds the definition for `bulk_create_contacts`.
fn bulk_create_contacts_definition() -> ToolDefinition {
    definition(
        ToolName::BulkCreateContacts,
        "Create multiple contacts at once. FREE. Deduplication is enforced. Max 100 contacts \
         per request.",
        json!({
            "type": "object",
            "properties": {
                "contacts": {
                    "type": "array",
                    "description": "Array of contact objects to create",
                    "minItems": 1,
                    "maxItems": 100,
                    "items": {
                        "type": "object",
                        "properties": {
                            "first_name": { "type": "string" },
                            "last_name": { "type": "string" },
                            "email": { "type": "string" },
                            "title": { "type": "string" },
                            "organization_name": { "type": "string" },
                            "website_url": { "type": "string" },
                            "account_id": { "type": "string" },
                            "label_names": {
                                "type": "array",
                                "items": { "type": "string" }
                            },
                            "present_raw_address": { "type": "string" },
                            "city": { "type": "string" },
                            "state": { "type": "string" },
                            "country": { "type": "string" },
                        },
                        "required": ["first_name", "last_name"]
                    }
                }
            },
            "required": ["contacts"]
        }),
    )
}

/// Builds the definition for `bulk_update_contacts`.
fn bulk_update_contacts_definition() -> ToolDefinition {
    definition(
        ToolName::BulkUpdateContacts,
        "Update multiple contacts at once. FREE. Provide contact IDs and fields to update. \
         Max 100 per request.",
        json!({
            "type": "object",
            "properties": {
                "contacts": {
                    "type": "array",
                    "description": "Array of contact objects with IDs and updated fields",
                    "minItems": 1,
                    "maxItems": 100,
                    "items": {
                        "type": "object",
                        "properties": {
                            "id": string("Apollo contact ID"),
                            "first_name": { "type": "string" },
                            "last_name": { "type": "string" },
                            "email": { "type": "string" },
                            "title": { "type": "string" },
                            "organization_name": { "type": "string" },
                            "website_url": { "type": "string" },
                            "account_id": { "type": "string" },
                            "label_names": {
                                "type": "array",
                                "items": { "type": "string" }
                            },
                        },
                        "required": ["id"]
                    }
                }
            },
            "required": ["contacts"]
        }),
    )
}

// ============================================================================
// SECTION: Account Tools
// ============================================================================

/// Builds the definition for `create_account`.
fn create_account_definition() -> ToolDefinition {
    definition(
        ToolName::CreateAccount,
        "Create an account (company record) in your Apollo CRM. FREE. An account represents a \
         company you're tracking. Provide at least the name and domain.",
        json!({
            "type": "object",
            "properties": {
                "name": string("Company name"),
                "domain": string("Company domain, e.g. 'google.com'. Will be auto-cleaned."),
                "phone_number": string("Company phone number"),
                "raw_address": string("Full company address"),
                "owner_id": string("Apollo user ID of the account owner"),
            },
            "required": ["name"]
        }),
    )
}

/// Builds the definition for `update_account`.
fn update_account_definition() -> ToolDefinition {
    definition(
        ToolName::UpdateAccount,
        "Update an existing account in your Apollo CRM. FREE.",
        json!({
            "type": "object",
            "properties": {
                "account_id": string("Apollo account ID to update"),
                "name": { "type": "string" },
                "domain": { "type": "string" },
                "phone_number": { "type": "string" },
                "raw_address": { "type": "string" },
                "owner_id": { "type": "string" },
            },
            "required": ["account_id"]
        }),
    )
}

/// Builds the definition for `search_accounts`.
fn search_accounts_definition() -> ToolDefinition {
    definition(
        ToolName::SearchAccounts,
        "Search accounts in your Apollo CRM. FREE. These are company records you've already \
         saved.",
        json!({
            "type": "object",
            "properties": {
                "q_keywords": string("Keyword search"),
                "sort_by_field": string(
                    "Field to sort by, e.g. 'account_last_activity_date'"
                ),
                "sort_ascending": { "type": "boolean" },
                "page": page(),
                "per_page": per_page(100, 25),
            }
        }),
    )
}

// ============================================================================
// SECTION: Sequence Tools
// ============================================================================

/// Builds the definition for `search_sequences`.
fn search_sequences_definition() -> ToolDefinition {
    definition(
        ToolName::SearchSequences,
        "Search email sequences (campaigns) in your Apollo account. FREE. Returns sequence \
         name, status, stats, and IDs.",
        json!({
            "type": "object",
            "properties": {
                "q_name": string("Search by sequence name"),
                "sort_by_field": string("Field to sort by, e.g. 'name'"),
                "sort_ascending": { "type": "boolean" },
                "page": page(),
                "per_page": per_page(100, 25),
            }
        }),
    )
}

/// Builds the definition for `add_contacts_to_sequence`.
fn add_contacts_to_sequence_definition() -> ToolDefinition {
    definition(
        ToolName::AddContactsToSequence,
        "Add contacts to an email sequence. FREE. Provide the sequence ID and an array of \
         contact IDs. Contacts will start receiving the sequence emails. You must also \
         specify the email_account_id to send from.",
        json!({
            "type": "object",
            "properties": {
                "emailer_campaign_id": string("Sequence/campaign ID"),
                "contact_ids": {
                    "type": "array",
                    "description": "Contact IDs to add to the sequence",
                    "minItems": 1,
                    "items": { "type": "string" }
                },
                "emailer_campaign_step_id": string(
                    "Step ID to start from (defaults to first step)"
                ),
                "send_email_from_email_account_id": string(
                    "Email account ID to send from. Use list_email_accounts to find this."
                ),
                "sequence_active_in_other_campaigns": boolean_default(
                    "Allow adding contacts already active in other sequences",
                    false
                ),
            },
            "required": [
                "emailer_campaign_id",
                "contact_ids",
                "send_email_from_email_account_id"
            ]
        }),
    )
}

/// Builds the definition for `update_sequence_status`.
fn update_sequence_status_definition() -> ToolDefinition {
    definition(
        ToolName::UpdateSequenceStatus,
        "Remove or stop contacts in a sequence. FREE. Use this to pause or remove contacts \
         from an active sequence.",
        json!({
            "type": "object",
            "properties": {
                "emailer_campaign_id": string("Sequence/campaign ID"),
                "contact_ids": {
                    "type": "array",
                    "description": "Contact IDs to remove/stop",
                    "minItems": 1,
                    "items": { "type": "string" }
                },
                "mode": {
                    "type": "string",
                    "enum": ["remove", "stop"],
                    "description": "'remove' removes contacts entirely, 'stop' pauses their \
                                    sequence"
                },
            },
            "required": ["emailer_campaign_id", "contact_ids", "mode"]
        }),
    )
}

// ============================================================================
// SECTION: Email Tools
// ============================================================================

/// Builds the definition for `search_outreach_emails`.
fn search_outreach_emails_definition() -> ToolDefinition {
    definition(
        ToolName::SearchOutreachEmails,
        "Search outreach emails sent through Apollo sequences. FREE. Returns email messages \
         with status, open/click tracking, and content.",
        json!({
            "type": "object",
            "properties": {
                "emailer_campaign_id": string("Filter by sequence/campaign ID"),
                "contact_id": string("Filter by contact ID"),
                "email_account_id": string("Filter by sending email account ID"),
                "page": page(),
                "per_page": per_page(100, 25),
            }
        }),
    )
}

/// Builds the definition for `get_email_activities`.
fn get_email_activities_definition() -> ToolDefinition {
    definition(
        ToolName::GetEmailActivities,
        "Get activities (opens, clicks, replies) for a specific outreach email. FREE.",
        json!({
            "type": "object",
            "properties": {
                "emailer_message_id": string("Emailer message ID"),
            },
            "required": ["emailer_message_id"]
        }),
    )
}

/// Builds the definition for `list_email_accounts`.
fn list_email_accounts_definition() -> ToolDefinition {
    definition(
        ToolName::ListEmailAccounts,
        "List all email accounts connected to your Apollo workspace. FREE. Use this to find \
         the email_account_id needed for add_contacts_to_sequence. Requires a master API key.",
        empty_object_schema(),
    )
}

// ============================================================================
// SECTION: Field Tools
// ============================================================================

/// Builds the definition for `list_fields`.
fn list_fields_definition() -> ToolDefinition {
    definition(
        ToolName::ListFields,
        "List all available fields for contacts and accounts in Apollo. FREE. Useful for \
         understanding what data you can search/filter on.",
        json!({
            "type": "object",
            "properties": {
                "entity_type": {
                    "type": "string",
                    "enum": ["contact", "account", "opportunity"],
                    "description": "Filter fields by entity type"
                },
            }
        }),
    )
}

/// Builds the definition for `create_custom_field`.
fn create_custom_field_definition() -> ToolDefinition {
    definition(
        ToolName::CreateCustomField,
        "Create a custom field for contacts or accounts. FREE. Custom fields let you store \
         additional data on your CRM records.",
        json!({
            "type": "object",
            "properties": {
                "name": string("Display name for the field"),
                "field_type": {
                    "type": "string",
                    "enum": [
                        "text",
                        "number",
                        "date",
                        "datetime",
                        "boolean",
                        "dropdown",
                        "star_rating"
                    ],
                    "description": "Data type of the field"
                },
                "entity_type": {
                    "type": "string",
                    "enum": ["contact", "account", "opportunity"],
                    "description": "Which entity type this field applies to"
                },
                "picklist_values": string_array("Options for dropdown type fields"),
            },
            "required": ["name", "field_type", "entity_type"]
        }),
    )
}

/// Builds the definition for `list_custom_fields_deprecated`.
fn list_custom_fields_deprecated_definition() -> ToolDefinition {
    definition(
        ToolName::ListCustomFieldsDeprecated,
        "List custom fields using the legacy typed_custom_fields endpoint. FREE. Prefer \
         list_fields instead. This endpoint is deprecated but still functional.",
        empty_object_schema(),
    )
}

// ============================================================================
// SECTION: Usage Tools
// ============================================================================

/// Builds the definition for `search_news_articles`.
fn search_news_articles_definition() -> ToolDefinition {
    definition(
        ToolName::SearchNewsArticles,
        "Search news articles about companies in Apollo's database. COSTS CREDITS. Useful for \
         finding recent news about target companies for personalized outreach.",
        json!({
            "type": "object",
            "properties": {
                "q_organization_domains": string_array("Company domains to search news for"),
                "organization_ids": string_array("Apollo organization IDs"),
                "page": page(),
                "per_page": per_page(25, 10),
            }
        }),
    )
}

/// Builds the definition for `get_api_usage_stats`.
fn get_api_usage_stats_definition() -> ToolDefinition {
    definition(
        ToolName::GetApiUsageStats,
        "Get API usage statistics for your Apollo account. FREE. Shows credit usage, \
         remaining credits, and rate limit info. Call this first to verify your API key works.",
        empty_object_schema(),
    )
}

// ============================================================================
// SECTION: Schema Helpers
// ============================================================================

/// Assembles a tool definition.
fn definition(name: ToolName, description: &str, input_schema: Value) -> ToolDefinition {
    ToolDefinition {
        name,
        description: description.to_string(),
        input_schema,
    }
}

/// Returns a JSON schema for strings.
fn string(description: &str) -> Value {
    json!({
        "type": "string",
        "description": description
    })
}

/// Returns a JSON schema for string arrays.
fn string_array(description: &str) -> Value {
    json!({
        "type": "array",
        "items": { "type": "string" },
        "description": description
    })
}

/// Returns a JSON schema for booleans with a declared default.
fn boolean_default(description: &str, default: bool) -> Value {
    if description.is_empty() {
        return json!({ "type": "boolean", "default": default });
    }
    json!({
        "type": "boolean",
        "description": description,
        "default": default
    })
}

/// Returns the paging schema for `page` (starts at 1, defaults to 1).
fn page() -> Value {
    json!({
        "type": "integer",
        "minimum": 1,
        "default": 1,
        "description": "Page number (starts at 1)"
    })
}

/// Returns the paging schema for `per_page` with an operation-specific cap.
fn per_page(max: u32, default: u32) -> Value {
    json!({
        "type": "integer",
        "minimum": 1,
        "maximum": max,
        "default": default,
        "description": format!("Results per page (max {max}, default {default})")
    })
}

/// Returns the phone numbers array schema shared by contact tools.
fn phone_numbers(description: &str) -> Value {
    let items = json!({
        "type": "object",
        "properties": {
            "raw_number": { "type": "string" },
            "type": {
                "type": "string",
                "enum": ["work", "mobile", "home", "other"],
                "default": "work"
            }
        },
        "required": ["raw_number"]
    });
    if description.is_empty() {
        return json!({ "type": "array", "items": items });
    }
    json!({
        "type": "array",
        "description": description,
        "items": items
    })
}

/// Returns the schema for tools that accept no arguments.
fn empty_object_schema() -> Value {
    json!({
        "type": "object",
        "properties": {}
    })
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests;
