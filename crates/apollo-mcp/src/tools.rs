// crates/apollo-mcp/src/tools.rs
// ============================================================================
// Module: Tool Dispatch
// Description: Tool router mapping validated MCP calls onto Apollo requests.
// Purpose: Validate arguments, plan the upstream request, and execute it.
// Dependencies: apollo-client, apollo-contract, serde, serde_json
// ============================================================================

//! ## Overview
//! The router runs every call through the same pipeline: schema validation
//! with default filling, typed decode (which drops unknown fields), request
//! planning, then execution. Planning is pure and separately testable; it
//! turns validated arguments into an [`ApiRequest`] without touching the
//! network. Upstream non-2xx responses are ordinary results carrying a
//! normalized error value; only validation failures and transport faults
//! surface as error responses.
//! Security posture: tool inputs are untrusted; the credential never appears
//! in any response text.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use apollo_client::ApiRequest;
use apollo_client::ApolloClient;
use apollo_client::clean_domain;
use apollo_client::strip_undefined;
use apollo_contract::ToolDefinition;
use apollo_contract::ToolName;
use apollo_contract::tool_definitions;
use serde::Deserialize;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use serde_json::json;
use thiserror::Error;

use crate::validation::SchemaRegistry;

// ============================================================================
// SECTION: Tool Router
// ============================================================================

/// Tool router for MCP request dispatch.
pub struct ToolRouter {
    /// Compiled input validators.
    registry: SchemaRegistry,
    /// Upstream HTTP client.
    client: ApolloClient,
}

/// Rendered tool call response.
///
/// # Invariants
/// - `text` is always a complete JSON document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolResponse {
    /// JSON text payload for the MCP content block.
    pub text: String,
    /// True when the payload describes a validation or transport failure.
    pub is_error: bool,
}

impl ToolRouter {
    /// Builds a router from a compiled registry and client.
    #[must_use]
    pub const fn new(registry: SchemaRegistry, client: ApolloClient) -> Self {
        Self {
            registry,
            client,
        }
    }

    /// Returns the tool catalog for `tools/list`.
    #[must_use]
    pub fn list_tools(&self) -> Vec<ToolDefinition> {
        tool_definitions()
    }

    /// Handles a `tools/call` invocation.
    ///
    /// Validation failures and transport faults become error-flagged
    /// responses rather than JSON-RPC errors; an unknown tool name is the
    /// one dispatch failure reported at the protocol level.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError`] for unknown tools or serialization failures.
    pub fn handle_tool_call(
        &self,
        name: &str,
        arguments: Value,
    ) -> Result<ToolResponse, ToolError> {
        let Some(tool) = ToolName::parse(name) else {
            return Err(ToolError::UnknownTool);
        };
        match self.invoke(tool, arguments) {
            Ok(result) => {
                let text =
                    serde_json::to_string_pretty(&result).map_err(|_| ToolError::Serialization)?;
                Ok(ToolResponse {
                    text,
                    is_error: false,
                })
            }
            Err(fault) => {
                let payload = json!({
                    "error": true,
                    "message": fault.to_string(),
                });
                let text =
                    serde_json::to_string(&payload).map_err(|_| ToolError::Serialization)?;
                Ok(ToolResponse {
                    text,
                    is_error: true,
                })
            }
        }
    }

    /// Validates, plans, and executes one tool call.
    fn invoke(&self, tool: ToolName, arguments: Value) -> Result<Value, ToolFault> {
        let arguments = self
            .registry
            .validate(tool, arguments)
            .map_err(|err| ToolFault::InvalidParams(err.to_string()))?;
        let request = plan_request(tool, arguments)?;
        self.client.execute(&request).map_err(|err| ToolFault::Transport(err.to_string()))
    }
}

// ============================================================================
// SECTION: Request Planning
// ============================================================================

/// Plans the upstream request for validated tool arguments.
///
/// Planning never performs network activity, so every route, body, and query
/// decision is testable offline.
pub(crate) fn plan_request(tool: ToolName, arguments: Value) -> Result<ApiRequest, ToolFault> {
    match tool {
        ToolName::SearchPeople => {
            let mut request: SearchPeopleRequest = decode(arguments)?;
            request.q_organization_domains = clean_domains(request.q_organization_domains);
            Ok(ApiRequest::post("/api/v1/mixed_people/search", body_of(&request)?))
        }
        ToolName::EnrichPerson => {
            let mut request: EnrichPersonRequest = decode(arguments)?;
            request.detail.domain = request.detail.domain.as_deref().map(clean_domain);
            Ok(ApiRequest::post("/api/v1/people/match", body_of(&request)?))
        }
        ToolName::BulkEnrichPeople => {
            let mut request: BulkEnrichPeopleRequest = decode(arguments)?;
            for detail in &mut request.details {
                detail.domain = detail.domain.as_deref().map(clean_domain);
            }
            Ok(ApiRequest::post("/api/v1/people/bulk_match", body_of(&request)?))
        }
        ToolName::SearchOrganizations => {
            let mut request: SearchOrganizationsRequest = decode(arguments)?;
            request.q_organization_domains = clean_domains(request.q_organization_domains);
            Ok(ApiRequest::post("/api/v1/mixed_companies/search", body_of(&request)?))
        }
        ToolName::EnrichOrganization => {
            let request: EnrichOrganizationRequest = decode(arguments)?;
            let mut query = BTreeMap::new();
            query.insert("domain".to_string(), clean_domain(&request.domain));
            Ok(ApiRequest::get_with_query("/api/v1/organizations/enrich", query))
        }
        ToolName::GetOrganization => {
            let request: OrganizationIdRequest = decode(arguments)?;
            Ok(ApiRequest::get(&format!("/api/v1/organizations/{}", request.organization_id)))
        }
        ToolName::GetOrganizationJobPostings => {
            let request: OrganizationIdRequest = decode(arguments)?;
            Ok(ApiRequest::get(&format!(
                "/api/v1/organizations/{}/job_postings",
                request.organization_id
            )))
        }
        ToolName::CreateContact => {
            let request: CreateContactRequest = decode(arguments)?;
            let mut body = object_body(body_of(&request)?)?;
            // Deduplication is not caller-selectable.
            body.insert("run_dedupe".to_string(), Value::Bool(true));
            Ok(ApiRequest::post("/api/v1/contacts", Value::Object(body)))
        }
        ToolName::UpdateContact => {
            let request: UpdateContactRequest = decode(arguments)?;
            Ok(ApiRequest::patch(
                &format!("/api/v1/contacts/{}", request.contact_id),
                body_of(&request.contact)?,
            ))
        }
        ToolName::GetContact => {
            let request: ContactIdRequest = decode(arguments)?;
            Ok(ApiRequest::get(&format!("/api/v1/contacts/{}", request.contact_id)))
        }
        ToolName::SearchContacts => {
            let request: SearchContactsRequest = decode(arguments)?;
            Ok(ApiRequest::post("/api/v1/contacts/search", body_of(&request)?))
        }
        ToolName::BulkCreateContacts => {
            let request: BulkCreateContactsRequest = decode(arguments)?;
            let mut body = object_body(body_of(&request)?)?;
            body.insert("run_dedupe".to_string(), Value::Bool(true));
            Ok(ApiRequest::post("/api/v1/contacts/bulk_create", Value::Object(body)))
        }
        ToolName::BulkUpdateContacts => {
            let request: BulkUpdateContactsRequest = decode(arguments)?;
            Ok(ApiRequest::post("/api/v1/contacts/bulk_update", body_of(&request)?))
        }
        ToolName::CreateAccount => {
            let mut request: CreateAccountRequest = decode(arguments)?;
            request.domain = request.domain.as_deref().map(clean_domain);
            Ok(ApiRequest::post("/api/v1/accounts", body_of(&request)?))
        }
        ToolName::UpdateAccount => {
            let mut request: UpdateAccountRequest = decode(arguments)?;
            request.account.domain = request.account.domain.as_deref().map(clean_domain);
            Ok(ApiRequest::patch(
                &format!("/api/v1/accounts/{}", request.account_id),
                body_of(&request.account)?,
            ))
        }
        ToolName::SearchAccounts => {
            let request: SearchAccountsRequest = decode(arguments)?;
            Ok(ApiRequest::post("/api/v1/accounts/search", body_of(&request)?))
        }
        ToolName::SearchSequences => {
            let request: SearchSequencesRequest = decode(arguments)?;
            Ok(ApiRequest::post("/api/v1/emailer_campaigns/search", body_of(&request)?))
        }
        ToolName::AddContactsToSequence => {
            let request: AddContactsToSequenceRequest = decode(arguments)?;
            Ok(ApiRequest::post(
                &format!(
                    "/api/v1/emailer_campaigns/{}/add_contact_ids",
                    request.emailer_campaign_id
                ),
                body_of(&request.body)?,
            ))
        }
        ToolName::UpdateSequenceStatus => {
            let request: UpdateSequenceStatusRequest = decode(arguments)?;
            Ok(ApiRequest::post(
                "/api/v1/emailer_campaigns/remove_or_stop_contact_ids",
                body_of(&request)?,
            ))
        }
        ToolName::SearchOutreachEmails => {
            let request: SearchOutreachEmailsRequest = decode(arguments)?;
            let mut query = BTreeMap::new();
            if let Some(campaign) = request.emailer_campaign_id {
                query.insert("emailer_campaign_id".to_string(), campaign);
            }
            if let Some(contact) = request.contact_id {
                query.insert("contact_id".to_string(), contact);
            }
            if let Some(account) = request.email_account_id {
                query.insert("email_account_id".to_string(), account);
            }
            query.insert("page".to_string(), request.page.to_string());
            query.insert("per_page".to_string(), request.per_page.to_string());
            Ok(ApiRequest::get_with_query("/api/v1/emailer_messages/search", query))
        }
        ToolName::GetEmailActivities => {
            let request: EmailerMessageIdRequest = decode(arguments)?;
            Ok(ApiRequest::get(&format!(
                "/api/v1/emailer_messages/{}/activities",
                request.emailer_message_id
            )))
        }
        ToolName::ListEmailAccounts => Ok(ApiRequest::get("/api/v1/email_accounts")),
        ToolName::ListFields => {
            let request: ListFieldsRequest = decode(arguments)?;
            let mut query = BTreeMap::new();
            if let Some(entity_type) = request.entity_type {
                query.insert("entity_type".to_string(), entity_type);
            }
            Ok(ApiRequest::get_with_query("/api/v1/fields", query))
        }
        ToolName::CreateCustomField => {
            let request: CreateCustomFieldRequest = decode(arguments)?;
            Ok(ApiRequest::post("/api/v1/fields", body_of(&request)?))
        }
        ToolName::ListCustomFieldsDeprecated => {
            Ok(ApiRequest::get("/api/v1/typed_custom_fields"))
        }
        ToolName::SearchNewsArticles => {
            let request: SearchNewsArticlesRequest = decode(arguments)?;
            Ok(ApiRequest::post("/api/v1/news_articles/search", body_of(&request)?))
        }
        ToolName::GetApiUsageStats => {
            Ok(ApiRequest::post("/api/v1/usage_stats/api_usage_stats", json!({})))
        }
    }
}

// ============================================================================
// SECTION: Planning Helpers
// ============================================================================

/// Decodes validated arguments into a typed request, dropping unknown fields.
fn decode<T: DeserializeOwned>(arguments: Value) -> Result<T, ToolFault> {
    serde_json::from_value(arguments).map_err(|err| ToolFault::InvalidParams(err.to_string()))
}

/// Serializes a request body, dropping null members.
fn body_of<T: Serialize>(body: &T) -> Result<Value, ToolFault> {
    let value = serde_json::to_value(body)
        .map_err(|_| ToolFault::Internal("body serialization failed".to_string()))?;
    match value {
        Value::Object(map) => Ok(Value::Object(strip_undefined(&map))),
        other => Ok(other),
    }
}

/// Unwraps a body value known to be an object.
fn object_body(body: Value) -> Result<serde_json::Map<String, Value>, ToolFault> {
    match body {
        Value::Object(map) => Ok(map),
        _ => Err(ToolFault::Internal("request body must be an object".to_string())),
    }
}

/// Normalizes every domain in an optional list.
fn clean_domains(domains: Option<Vec<String>>) -> Option<Vec<String>> {
    domains.map(|domains| domains.iter().map(|domain| clean_domain(domain)).collect())
}

// ============================================================================
// SECTION: People Requests
// ============================================================================

/// Arguments for `search_people`.
#[derive(Debug, Serialize, Deserialize)]
struct SearchPeopleRequest {
    /// General keyword filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    q_keywords: Option<String>,
    /// Job titles to include.
    #[serde(skip_serializing_if = "Option::is_none")]
    person_titles: Option<Vec<String>>,
    /// Job titles to exclude.
    #[serde(skip_serializing_if = "Option::is_none")]
    person_not_titles: Option<Vec<String>>,
    /// Company domains, normalized before dispatch.
    #[serde(skip_serializing_if = "Option::is_none")]
    q_organization_domains: Option<Vec<String>>,
    /// Company HQ locations.
    #[serde(skip_serializing_if = "Option::is_none")]
    organization_locations: Option<Vec<String>>,
    /// Person locations.
    #[serde(skip_serializing_if = "Option::is_none")]
    person_locations: Option<Vec<String>>,
    /// Seniority levels.
    #[serde(skip_serializing_if = "Option::is_none")]
    person_seniorities: Option<Vec<String>>,
    /// Email status filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    contact_email_status: Option<Vec<String>>,
    /// Employee count ranges.
    #[serde(skip_serializing_if = "Option::is_none")]
    organization_num_employees_ranges: Option<Vec<String>>,
    /// Organization ID filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    organization_ids: Option<Vec<String>>,
    /// Page number, defaulted by the schema.
    page: u32,
    /// Page size, defaulted by the schema.
    per_page: u32,
}

/// Identifying fields for one person to enrich.
#[derive(Debug, Serialize, Deserialize)]
struct PersonDetail {
    /// First name.
    #[serde(skip_serializing_if = "Option::is_none")]
    first_name: Option<String>,
    /// Last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    last_name: Option<String>,
    /// Full name.
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    /// Known email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    /// Company name.
    #[serde(skip_serializing_if = "Option::is_none")]
    organization_name: Option<String>,
    /// Company domain, normalized before dispatch.
    #[serde(skip_serializing_if = "Option::is_none")]
    domain: Option<String>,
    /// LinkedIn profile URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    linkedin_url: Option<String>,
}

/// Arguments for `enrich_person`.
#[derive(Debug, Serialize, Deserialize)]
struct EnrichPersonRequest {
    /// Identifying fields, forwarded inline.
    #[serde(flatten)]
    detail: PersonDetail,
    /// Whether to return personal email addresses.
    reveal_personal_emails: bool,
    /// Whether to return phone numbers.
    reveal_phone_number: bool,
}

/// Arguments for `bulk_enrich_people`.
#[derive(Debug, Serialize, Deserialize)]
struct BulkEnrichPeopleRequest {
    /// People to enrich, bounded by the schema.
    details: Vec<PersonDetail>,
    /// Whether to return personal email addresses.
    reveal_personal_emails: bool,
    /// Whether to return phone numbers.
    reveal_phone_number: bool,
}

// ============================================================================
// SECTION: Organization Requests
// ============================================================================

/// Arguments for `search_organizations`.
#[derive(Debug, Serialize, Deserialize)]
struct SearchOrganizationsRequest {
    /// Industry keyword tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    q_organization_keyword_tags: Option<Vec<String>>,
    /// Company name filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    q_organization_name: Option<String>,
    /// Company HQ locations.
    #[serde(skip_serializing_if = "Option::is_none")]
    organization_locations: Option<Vec<String>>,
    /// Employee count ranges.
    #[serde(skip_serializing_if = "Option::is_none")]
    organization_num_employees_ranges: Option<Vec<String>>,
    /// Revenue ranges in USD.
    #[serde(skip_serializing_if = "Option::is_none")]
    organization_revenue_ranges: Option<Vec<String>>,
    /// Company domains, normalized before dispatch.
    #[serde(skip_serializing_if = "Option::is_none")]
    q_organization_domains: Option<Vec<String>>,
    /// Organization ID filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    organization_ids: Option<Vec<String>>,
    /// Page number, defaulted by the schema.
    page: u32,
    /// Page size, defaulted by the schema.
    per_page: u32,
}

/// Arguments for `enrich_organization`.
#[derive(Debug, Deserialize)]
struct EnrichOrganizationRequest {
    /// Company domain, normalized into the query string.
    domain: String,
}

/// Arguments for organization lookups by ID.
#[derive(Debug, Deserialize)]
struct OrganizationIdRequest {
    /// Apollo organization ID, interpolated into the route.
    organization_id: String,
}

// ============================================================================
// SECTION: Contact Requests
// ============================================================================

/// One phone number entry for contact writes.
#[derive(Debug, Serialize, Deserialize)]
struct PhoneNumber {
    /// Raw phone number string.
    raw_number: String,
    /// Phone number kind, defaulted to `work` by the schema.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    kind: Option<String>,
}

/// Arguments for `create_contact`.
#[derive(Debug, Serialize, Deserialize)]
struct CreateContactRequest {
    /// First name.
    first_name: String,
    /// Last name.
    last_name: String,
    /// Email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    /// Job title.
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    /// Company name.
    #[serde(skip_serializing_if = "Option::is_none")]
    organization_name: Option<String>,
    /// Company website URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    website_url: Option<String>,
    /// Associated account ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    account_id: Option<String>,
    /// Phone number entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    phone_numbers: Option<Vec<PhoneNumber>>,
    /// Labels to apply.
    #[serde(skip_serializing_if = "Option::is_none")]
    label_names: Option<Vec<String>>,
    /// Full address string.
    #[serde(skip_serializing_if = "Option::is_none")]
    present_raw_address: Option<String>,
    /// City.
    #[serde(skip_serializing_if = "Option::is_none")]
    city: Option<String>,
    /// State.
    #[serde(skip_serializing_if = "Option::is_none")]
    state: Option<String>,
    /// Country.
    #[serde(skip_serializing_if = "Option::is_none")]
    country: Option<String>,
    /// Postal code.
    #[serde(skip_serializing_if = "Option::is_none")]
    postal_code: Option<String>,
}

/// Updatable contact fields, excluding the route-bound contact ID.
#[derive(Debug, Serialize, Deserialize)]
struct ContactPatch {
    /// First name.
    #[serde(skip_serializing_if = "Option::is_none")]
    first_name: Option<String>,
    /// Last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    last_name: Option<String>,
    /// Email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    /// Job title.
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    /// Company name.
    #[serde(skip_serializing_if = "Option::is_none")]
    organization_name: Option<String>,
    /// Company website URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    website_url: Option<String>,
    /// Associated account ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    account_id: Option<String>,
    /// Phone number entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    phone_numbers: Option<Vec<PhoneNumber>>,
    /// Labels to apply.
    #[serde(skip_serializing_if = "Option::is_none")]
    label_names: Option<Vec<String>>,
    /// Full address string.
    #[serde(skip_serializing_if = "Option::is_none")]
    present_raw_address: Option<String>,
    /// City.
    #[serde(skip_serializing_if = "Option::is_none")]
    city: Option<String>,
    /// State.
    #[serde(skip_serializing_if = "Option::is_none")]
    state: Option<String>,
    /// Country.
    #[serde(skip_serializing_if = "Option::is_none")]
    country: Option<String>,
    /// Postal code.
    #[serde(skip_serializing_if = "Option::is_none")]
    postal_code: Option<String>,
}

/// Arguments for `update_contact`.
#[derive(Debug, Deserialize)]
struct UpdateContactRequest {
    /// Contact ID, interpolated into the route and kept out of the body.
    contact_id: String,
    /// Fields to update.
    #[serde(flatten)]
    contact: ContactPatch,
}

/// Arguments for contact lookups by ID.
#[derive(Debug, Deserialize)]
struct ContactIdRequest {
    /// Apollo contact ID, interpolated into the route.
    contact_id: String,
}

/// Arguments for `search_contacts`.
#[derive(Debug, Serialize, Deserialize)]
struct SearchContactsRequest {
    /// Keyword filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    q_keywords: Option<String>,
    /// Contact stage ID filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    contact_stage_ids: Option<Vec<String>>,
    /// Sort field.
    #[serde(skip_serializing_if = "Option::is_none")]
    sort_by_field: Option<String>,
    /// Sort direction.
    #[serde(skip_serializing_if = "Option::is_none")]
    sort_ascending: Option<bool>,
    /// Page number, defaulted by the schema.
    page: u32,
    /// Page size, defaulted by the schema.
    per_page: u32,
}

/// One contact entry for `bulk_create_contacts`.
#[derive(Debug, Serialize, Deserialize)]
struct BulkContactEntry {
    /// First name.
    first_name: String,
    /// Last name.
    last_name: String,
    /// Email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    /// Job title.
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    /// Company name.
    #[serde(skip_serializing_if = "Option::is_none")]
    organization_name: Option<String>,
    /// Company website URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    website_url: Option<String>,
    /// Associated account ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    account_id: Option<String>,
    /// Labels to apply.
    #[serde(skip_serializing_if = "Option::is_none")]
    label_names: Option<Vec<String>>,
    /// Full address string.
    #[serde(skip_serializing_if = "Option::is_none")]
    present_raw_address: Option<String>,
    /// City.
    #[serde(skip_serializing_if = "Option::is_none")]
    city: Option<String>,
    /// State.
    #[serde(skip_serializing_if = "Option::is_none")]
    state: Option<String>,
    /// Country.
    #[serde(skip_serializing_if = "Option::is_none")]
    country: Option<String>,
}

/// Arguments for `bulk_create_contacts`.
#[derive(Debug, Serialize, Deserialize)]
struct BulkCreateContactsRequest {
    /// Contacts to create, bounded by the schema.
    contacts: Vec<BulkContactEntry>,
}

/// One contact entry for `bulk_update_contacts`.
#[derive(Debug, Serialize, Deserialize)]
struct BulkUpdateEntry {
    /// Apollo contact ID.
    id: String,
    /// First name.
    #[serde(skip_serializing_if = "Option::is_none")]
    first_name: Option<String>,
    /// Last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    last_name: Option<String>,
    /// Email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    /// Job title.
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    /// Company name.
    #[serde(skip_serializing_if = "Option::is_none")]
    organization_name: Option<String>,
    /// Company website URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    website_url: Option<String>,
    /// Associated account ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    account_id: Option<String>,
    /// Labels to apply.
    #[serde(skip_serializing_if = "Option::is_none")]
    label_names: Option<Vec<String>>,
}

/// Arguments for `bulk_update_contacts`.
#[derive(Debug, Serialize, Deserialize)]
struct BulkUpdateContactsRequest {
    /// Contacts to update, bounded by the schema.
    contacts: Vec<BulkUpdateEntry>,
}

// ============================================================================
// SECTION: Account Requests
// ============================================================================

/// Arguments for `create_account`.
#[derive(Debug, Serialize, Deserialize)]
struct CreateAccountRequest {
    /// Company name.
    name: String,
    /// Company domain, normalized before dispatch.
    #[serde(skip_serializing_if = "Option::is_none")]
    domain: Option<String>,
    /// Company phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    phone_number: Option<String>,
    /// Full company address.
    #[serde(skip_serializing_if = "Option::is_none")]
    raw_address: Option<String>,
    /// Owner user ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    owner_id: Option<String>,
}

/// Updatable account fields, excluding the route-bound account ID.
#[derive(Debug, Serialize, Deserialize)]
struct AccountPatch {
    /// Company name.
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    /// Company domain, normalized before dispatch.
    #[serde(skip_serializing_if = "Option::is_none")]
    domain: Option<String>,
    /// Company phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    phone_number: Option<String>,
    /// Full company address.
    #[serde(skip_serializing_if = "Option::is_none")]
    raw_address: Option<String>,
    /// Owner user ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    owner_id: Option<String>,
}

/// Arguments for `update_account`.
#[derive(Debug, Deserialize)]
struct UpdateAccountRequest {
    /// Account ID, interpolated into the route and kept out of the body.
    account_id: String,
    /// Fields to update.
    #[serde(flatten)]
    account: AccountPatch,
}

/// Arguments for `search_accounts`.
#[derive(Debug, Serialize, Deserialize)]
struct SearchAccountsRequest {
    /// Keyword filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    q_keywords: Option<String>,
    /// Sort field.
    #[serde(skip_serializing_if = "Option::is_none")]
    sort_by_field: Option<String>,
    /// Sort direction.
    #[serde(skip_serializing_if = "Option::is_none")]
    sort_ascending: Option<bool>,
    /// Page number, defaulted by the schema.
    page: u32,
    /// Page size, defaulted by the schema.
    per_page: u32,
}

// ============================================================================
// SECTION: Sequence Requests
// ============================================================================

/// Arguments for `search_sequences`.
#[derive(Debug, Serialize, Deserialize)]
struct SearchSequencesRequest {
    /// Sequence name filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    q_name: Option<String>,
    /// Sort field.
    #[serde(skip_serializing_if = "Option::is_none")]
    sort_by_field: Option<String>,
    /// Sort direction.
    #[serde(skip_serializing_if = "Option::is_none")]
    sort_ascending: Option<bool>,
    /// Page number, defaulted by the schema.
    page: u32,
    /// Page size, defaulted by the schema.
    per_page: u32,
}

/// Body fields for `add_contacts_to_sequence`, excluding the route-bound ID.
#[derive(Debug, Serialize, Deserialize)]
struct SequenceAdditionBody {
    /// Contacts to add.
    contact_ids: Vec<String>,
    /// Step to start from.
    #[serde(skip_serializing_if = "Option::is_none")]
    emailer_campaign_step_id: Option<String>,
    /// Sending email account ID.
    send_email_from_email_account_id: String,
    /// Whether contacts active in other sequences may be added.
    sequence_active_in_other_campaigns: bool,
}

/// Arguments for `add_contacts_to_sequence`.
#[derive(Debug, Deserialize)]
struct AddContactsToSequenceRequest {
    /// Sequence ID, interpolated into the route and kept out of the body.
    emailer_campaign_id: String,
    /// Body fields forwarded upstream.
    #[serde(flatten)]
    body: SequenceAdditionBody,
}

/// Arguments for `update_sequence_status`.
#[derive(Debug, Serialize, Deserialize)]
struct UpdateSequenceStatusRequest {
    /// Sequence ID, carried in the body for this route.
    emailer_campaign_id: String,
    /// Contacts to remove or stop.
    contact_ids: Vec<String>,
    /// Either `remove` or `stop`, enforced by the schema.
    mode: String,
}

// ============================================================================
// SECTION: Email Requests
// ============================================================================

/// Arguments for `search_outreach_emails`.
#[derive(Debug, Deserialize)]
struct SearchOutreachEmailsRequest {
    /// Sequence filter.
    emailer_campaign_id: Option<String>,
    /// Contact filter.
    contact_id: Option<String>,
    /// Sending account filter.
    email_account_id: Option<String>,
    /// Page number, defaulted by the schema.
    page: u32,
    /// Page size, defaulted by the schema.
    per_page: u32,
}

/// Arguments for `get_email_activities`.
#[derive(Debug, Deserialize)]
struct EmailerMessageIdRequest {
    /// Emailer message ID, interpolated into the route.
    emailer_message_id: String,
}

// ============================================================================
// SECTION: Field Requests
// ============================================================================

/// Arguments for `list_fields`.
#[derive(Debug, Deserialize)]
struct ListFieldsRequest {
    /// Optional entity type filter.
    entity_type: Option<String>,
}

/// Arguments for `create_custom_field`.
#[derive(Debug, Serialize, Deserialize)]
struct CreateCustomFieldRequest {
    /// Display name for the field.
    name: String,
    /// Field data type, enforced by the schema.
    field_type: String,
    /// Entity type the field applies to, enforced by the schema.
    entity_type: String,
    /// Options for dropdown fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    picklist_values: Option<Vec<String>>,
}

// ============================================================================
// SECTION: Usage Requests
// ============================================================================

/// Arguments for `search_news_articles`.
#[derive(Debug, Serialize, Deserialize)]
struct SearchNewsArticlesRequest {
    /// Company domain filter, forwarded as given.
    #[serde(skip_serializing_if = "Option::is_none")]
    q_organization_domains: Option<Vec<String>>,
    /// Organization ID filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    organization_ids: Option<Vec<String>>,
    /// Page number, defaulted by the schema.
    page: u32,
    /// Page size, defaulted by the schema.
    per_page: u32,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Dispatch-level tool errors reported at the JSON-RPC layer.
///
/// # Invariants
/// - Variants are stable for protocol error classification.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool name is not in the catalog.
    #[error("unknown tool")]
    UnknownTool,
    /// Response serialization failed.
    #[error("serialization failed")]
    Serialization,
}

/// Call-level faults rendered into error-flagged tool responses.
#[derive(Debug, Error)]
pub(crate) enum ToolFault {
    /// Arguments failed validation or typed decode.
    #[error("{0}")]
    InvalidParams(String),
    /// The upstream request could not be completed.
    #[error("{0}")]
    Transport(String),
    /// Internal planning failure.
    #[error("{0}")]
    Internal(String),
}

// ============================================================================
// SECTION: Tests
// ============================================================================
