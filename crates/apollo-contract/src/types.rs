// crates/apollo-contract/src/types.rs
// ============================================================================
// Module: Contract Types
// Description: Tool name enumeration and tool definition shape.
// Purpose: Provide stable identifiers for the fixed 27-tool catalog.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! [`ToolName`] enumerates every tool in the fixed catalog; the dispatcher
//! routes on it and the registry lists it. Names are globally unique and the
//! canonical order groups tools by CRM area (people, organizations, contacts,
//! accounts, sequences, emails, fields, usage). The grouping is stable but
//! carries no semantic meaning.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

// ============================================================================
// SECTION: Tool Names
// ============================================================================

/// Canonical tool names for the Apollo MCP surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolName {
    /// Search people in the global Apollo database.
    SearchPeople,
    /// Enrich a single person for contact details.
    EnrichPerson,
    /// Enrich up to ten people in one request.
    BulkEnrichPeople,
    /// Search organizations in the global Apollo database.
    SearchOrganizations,
    /// Enrich a single organization by domain.
    EnrichOrganization,
    /// Fetch an organization by its Apollo ID.
    GetOrganization,
    /// Fetch current job postings for an organization.
    GetOrganizationJobPostings,
    /// Create a CRM contact.
    CreateContact,
    /// Update a CRM contact by ID.
    UpdateContact,
    /// Fetch a CRM contact by ID.
    GetContact,
    /// Search saved CRM contacts.
    SearchContacts,
    /// Create up to one hundred contacts in one request.
    BulkCreateContacts,
    /// Update up to one hundred contacts in one request.
    BulkUpdateContacts,
    /// Create a CRM account.
    CreateAccount,
    /// Update a CRM account by ID.
    UpdateAccount,
    /// Search saved CRM accounts.
    SearchAccounts,
    /// Search email sequences.
    SearchSequences,
    /// Add contacts to an email sequence.
    AddContactsToSequence,
    /// Remove or stop contacts in a sequence.
    UpdateSequenceStatus,
    /// Search outreach emails sent through sequences.
    SearchOutreachEmails,
    /// Fetch activities for one outreach email.
    GetEmailActivities,
    /// List connected email accounts.
    ListEmailAccounts,
    /// List available contact/account fields.
    ListFields,
    /// Create a custom field.
    CreateCustomField,
    /// List custom fields via the legacy endpoint.
    ListCustomFieldsDeprecated,
    /// Search news articles about companies.
    SearchNewsArticles,
    /// Fetch API usage statistics.
    GetApiUsageStats,
}

impl ToolName {
    /// Returns the canonical string name for the tool.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SearchPeople => "search_people",
            Self::EnrichPerson => "enrich_person",
            Self::BulkEnrichPeople => "bulk_enrich_people",
            Self::SearchOrganizations => "search_organizations",
            Self::EnrichOrganization => "enrich_organization",
            Self::GetOrganization => "get_organization",
            Self::GetOrganizationJobPostings => "get_organization_job_postings",
            Self::CreateContact => "create_contact",
            Self::UpdateContact => "update_contact",
            Self::GetContact => "get_contact",
            Self::SearchContacts => "search_contacts",
            Self::BulkCreateContacts => "bulk_create_contacts",
            Self::BulkUpdateContacts => "bulk_update_contacts",
            Self::CreateAccount => "create_account",
            Self::UpdateAccount => "update_account",
            Self::SearchAccounts => "search_accounts",
            Self::SearchSequences => "search_sequences",
            Self::AddContactsToSequence => "add_contacts_to_sequence",
            Self::UpdateSequenceStatus => "update_sequence_status",
            Self::SearchOutreachEmails => "search_outreach_emails",
            Self::GetEmailActivities => "get_email_activities",
            Self::ListEmailAccounts => "list_email_accounts",
            Self::ListFields => "list_fields",
            Self::CreateCustomField => "create_custom_field",
            Self::ListCustomFieldsDeprecated => "list_custom_fields_deprecated",
            Self::SearchNewsArticles => "search_news_articles",
            Self::GetApiUsageStats => "get_api_usage_stats",
        }
    }

    /// Returns all tool names in canonical registration order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::SearchPeople,
            Self::EnrichPerson,
            Self::BulkEnrichPeople,
            Self::SearchOrganizations,
            Self::EnrichOrganization,
            Self::GetOrganization,
            Self::GetOrganizationJobPostings,
            Self::CreateContact,
            Self::UpdateContact,
            Self::GetContact,
            Self::SearchContacts,
            Self::BulkCreateContacts,
            Self::BulkUpdateContacts,
            Self::CreateAccount,
            Self::UpdateAccount,
            Self::SearchAccounts,
            Self::SearchSequences,
            Self::AddContactsToSequence,
            Self::UpdateSequenceStatus,
            Self::SearchOutreachEmails,
            Self::GetEmailActivities,
            Self::ListEmailAccounts,
            Self::ListFields,
            Self::CreateCustomField,
            Self::ListCustomFieldsDeprecated,
            Self::SearchNewsArticles,
            Self::GetApiUsageStats,
        ]
    }

    /// Parses a canonical string name into a tool name.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|tool| tool.as_str() == name)
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Tool Definitions
// ============================================================================

/// Tool definition used by MCP tool listing.
///
/// # Invariants
/// - `name` is a stable MCP tool identifier, unique across the catalog.
/// - `input_schema` is a JSON Schema payload for the tool input shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// MCP tool name.
    pub name: ToolName,
    /// Tool description for clients, including cost annotations.
    pub description: String,
    /// JSON schema for tool input.
    pub input_schema: Value,
}
