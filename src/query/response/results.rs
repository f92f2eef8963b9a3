//! Typed results of Query-protocol operations.
//!
//! Each operation family decodes into its own record rather than a
//! generic string-keyed map, so optional-field omission (a verification
//! entry without a status, a listing without a token) is visible in the
//! types. Every record carries the `RequestId` the service stamped on the
//! response.

use std::collections::BTreeMap;

/// Result of operations that return nothing beyond a request id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleResponse {
    /// Request id from the response metadata.
    pub request_id: String,
}

/// Result of `VerifyDomainIdentity`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyDomainIdentityResponse {
    /// Request id from the response metadata.
    pub request_id: String,
    /// TXT record value that proves domain ownership.
    pub verification_token: String,
}

/// Result of `VerifyDomainDkim`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyDomainDkimResponse {
    /// Request id from the response metadata.
    pub request_id: String,
    /// CNAME tokens, in the order the service listed them.
    pub dkim_tokens: Vec<String>,
}

/// Verification state of one identity.
///
/// Either field may be absent in the response; absence is preserved, not
/// null-filled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentityVerificationAttributes {
    /// Domain verification token, when the identity is a domain.
    pub verification_token: Option<String>,
    /// Verification status (`Pending`, `Success`, `Failed`, ...).
    pub verification_status: Option<String>,
}

/// Result of `GetIdentityVerificationAttributes`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetIdentityVerificationAttributesResponse {
    /// Request id from the response metadata.
    pub request_id: String,
    /// Per-identity verification state, keyed by identity.
    pub verification_attributes: BTreeMap<String, IdentityVerificationAttributes>,
}

/// Result of `ListIdentities`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListIdentitiesResponse {
    /// Request id from the response metadata.
    pub request_id: String,
    /// Identities on this page, in service order.
    pub identities: Vec<String>,
    /// Continuation token; empty when the listing is exhausted.
    pub next_token: String,
}

/// Result of `ListConfigurationSets`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListConfigurationSetsResponse {
    /// Request id from the response metadata.
    pub request_id: String,
    /// Configuration set names on this page.
    pub configuration_sets: Vec<String>,
    /// Continuation token; empty when the listing is exhausted.
    pub next_token: String,
}

/// Result of the single-message send operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendResponse {
    /// Request id from the response metadata.
    pub request_id: String,
    /// Message id assigned by the service.
    pub message_id: String,
}

/// Per-destination outcome of a bulk templated send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkMessageResult {
    /// Message id; absent when the entry was rejected.
    pub message_id: Option<String>,
    /// Outcome status (`Success`, `MessageRejected`, ...).
    pub status: String,
}

/// Result of `SendBulkTemplatedEmail`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendBulkTemplatedEmailResponse {
    /// Request id from the response metadata.
    pub request_id: String,
    /// One outcome per destination entry, in request order.
    pub messages: Vec<BulkMessageResult>,
}

/// A stored template's full content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateInfo {
    /// Template name.
    pub template_name: String,
    /// Subject line.
    pub subject_part: String,
    /// HTML part, when the template has one.
    pub html_part: Option<String>,
    /// Plain-text part, when the template has one.
    pub text_part: Option<String>,
}

/// Result of `GetTemplate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetTemplateResponse {
    /// Request id from the response metadata.
    pub request_id: String,
    /// The stored template.
    pub template: TemplateInfo,
}

/// One entry of the template listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSummary {
    /// Template name.
    pub name: String,
    /// Creation time, as the service formats it.
    pub created_timestamp: Option<String>,
}

/// Result of `ListTemplates`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListTemplatesResponse {
    /// Request id from the response metadata.
    pub request_id: String,
    /// Template summaries on this page.
    pub templates: Vec<TemplateSummary>,
    /// Continuation token; empty when the listing is exhausted.
    pub next_token: String,
}

/// One entry of the custom-verification-template listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomVerificationTemplateSummary {
    /// Template name.
    pub template_name: String,
    /// Address the verification email is sent from.
    pub from_email_address: String,
    /// Subject line of the verification email.
    pub template_subject: String,
    /// Redirect after successful verification.
    pub success_redirection_url: String,
    /// Redirect after failed verification.
    pub failure_redirection_url: String,
}

/// Result of `ListCustomVerificationEmailTemplates`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListCustomVerificationTemplatesResponse {
    /// Request id from the response metadata.
    pub request_id: String,
    /// Template summaries on this page.
    pub templates: Vec<CustomVerificationTemplateSummary>,
    /// Continuation token; empty when the listing is exhausted.
    pub next_token: String,
}

/// Result of `GetCustomVerificationEmailTemplate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetCustomVerificationTemplateResponse {
    /// Request id from the response metadata.
    pub request_id: String,
    /// The template's summary fields.
    pub template: CustomVerificationTemplateSummary,
    /// HTML content of the verification email.
    pub template_content: String,
}

/// Metadata of a receipt rule set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptRuleSetMetadata {
    /// Rule set name.
    pub name: String,
    /// Creation time, as the service formats it.
    pub created_timestamp: Option<String>,
}

/// One receipt rule of a rule set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptRule {
    /// Rule name.
    pub name: String,
    /// Whether the rule is active.
    pub enabled: bool,
    /// Whether incoming mail is scanned for spam and viruses.
    pub scan_enabled: bool,
    /// TLS policy (`Optional`/`Require`), when stated.
    pub tls_policy: Option<String>,
    /// Recipient patterns the rule applies to.
    pub recipients: Vec<String>,
}

/// Result of `DescribeReceiptRuleSet`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescribeReceiptRuleSetResponse {
    /// Request id from the response metadata.
    pub request_id: String,
    /// Rule set metadata.
    pub metadata: ReceiptRuleSetMetadata,
    /// Rules in evaluation order.
    pub rules: Vec<ReceiptRule>,
}

/// A decoded Query-protocol response, one variant per result family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryResponse {
    /// Request id only.
    Simple(SimpleResponse),
    /// Domain verification token.
    VerifyDomainIdentity(VerifyDomainIdentityResponse),
    /// DKIM tokens.
    VerifyDomainDkim(VerifyDomainDkimResponse),
    /// Per-identity verification state.
    IdentityVerificationAttributes(GetIdentityVerificationAttributesResponse),
    /// Identity listing.
    Identities(ListIdentitiesResponse),
    /// Configuration set listing.
    ConfigurationSets(ListConfigurationSetsResponse),
    /// Single-message send outcome.
    Send(SendResponse),
    /// Bulk send outcomes.
    BulkSend(SendBulkTemplatedEmailResponse),
    /// A stored template's content.
    Template(GetTemplateResponse),
    /// Template listing.
    Templates(ListTemplatesResponse),
    /// A custom verification template.
    CustomVerificationTemplate(GetCustomVerificationTemplateResponse),
    /// Custom verification template listing.
    CustomVerificationTemplates(ListCustomVerificationTemplatesResponse),
    /// Receipt rule set description.
    ReceiptRuleSet(DescribeReceiptRuleSetResponse),
}

impl QueryResponse {
    /// The request id carried by every successful response.
    pub fn request_id(&self) -> &str {
        match self {
            QueryResponse::Simple(r) => &r.request_id,
            QueryResponse::VerifyDomainIdentity(r) => &r.request_id,
            QueryResponse::VerifyDomainDkim(r) => &r.request_id,
            QueryResponse::IdentityVerificationAttributes(r) => &r.request_id,
            QueryResponse::Identities(r) => &r.request_id,
            QueryResponse::ConfigurationSets(r) => &r.request_id,
            QueryResponse::Send(r) => &r.request_id,
            QueryResponse::BulkSend(r) => &r.request_id,
            QueryResponse::Template(r) => &r.request_id,
            QueryResponse::Templates(r) => &r.request_id,
            QueryResponse::CustomVerificationTemplate(r) => &r.request_id,
            QueryResponse::CustomVerificationTemplates(r) => &r.request_id,
            QueryResponse::ReceiptRuleSet(r) => &r.request_id,
        }
    }
}
