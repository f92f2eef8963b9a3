//! Email sending for the v2 protocol.

use serde::{Deserialize, Serialize};

use super::V2Operation;
use crate::http::HttpMethod;
use crate::types::{Destination, EmailContent, ResourceTag};

/// Contact-list integration of a v2 send.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListManagementOptions {
    /// Contact list consulted for suppression and unsubscribe handling.
    pub contact_list_name: String,
    /// Topic the message belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_name: Option<String>,
}

/// Request body of the v2 `SendEmail` operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SendEmailRequest {
    /// Sender address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_email_address: Option<String>,
    /// Recipients.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<Destination>,
    /// Reply-to addresses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_addresses: Option<Vec<String>>,
    /// Address bounces and complaints are forwarded to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback_forwarding_email_address: Option<String>,
    /// Message content: simple, raw or template.
    pub content: EmailContent,
    /// Message tags published to event destinations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_tags: Option<Vec<ResourceTag>>,
    /// Configuration set to apply to the send.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration_set_name: Option<String>,
    /// Contact-list integration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_management_options: Option<ListManagementOptions>,
}

impl SendEmailRequest {
    /// Create a request carrying only content.
    pub fn new(content: EmailContent) -> Self {
        Self {
            from_email_address: None,
            destination: None,
            reply_to_addresses: None,
            feedback_forwarding_email_address: None,
            content,
            email_tags: None,
            configuration_set_name: None,
            list_management_options: None,
        }
    }

    /// Set the sender address.
    pub fn with_from(mut self, from: impl Into<String>) -> Self {
        self.from_email_address = Some(from.into());
        self
    }

    /// Set the recipients.
    pub fn with_destination(mut self, destination: Destination) -> Self {
        self.destination = Some(destination);
        self
    }

    /// Set the configuration set.
    pub fn with_configuration_set(mut self, name: impl Into<String>) -> Self {
        self.configuration_set_name = Some(name.into());
        self
    }

    /// Add a message tag.
    pub fn add_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.email_tags
            .get_or_insert_with(Vec::new)
            .push(ResourceTag::new(key, value));
        self
    }
}

/// Build the v2 `SendEmail` operation.
pub fn send_email(request: &SendEmailRequest) -> V2Operation {
    V2Operation::new(HttpMethod::Post, "/v2/email/outbound-emails").with_json(request)
}
