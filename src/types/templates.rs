//! Template and send-content types for the v2 protocol.

use base64::Engine as _;
use serde::{Deserialize, Serialize};

use super::email::{Message, RawMessage};

/// Subject/HTML/text triple stored under a template name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EmailTemplateContent {
    /// Subject line, with `{{placeholder}}` substitution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// HTML part.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    /// Plain-text part.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl EmailTemplateContent {
    /// Create empty template content.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the subject.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set the HTML part.
    pub fn with_html(mut self, html: impl Into<String>) -> Self {
        self.html = Some(html.into());
        self
    }

    /// Set the plain-text part.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

/// Reference to a stored template in a v2 send.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Template {
    /// Template name.
    pub template_name: String,
    /// Template data, JSON-encoded into a string on the wire.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_data: Option<String>,
    /// Template ARN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_arn: Option<String>,
}

impl Template {
    /// Reference a template by name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            template_name: name.into(),
            template_data: None,
            template_arn: None,
        }
    }

    /// Attach template data.
    pub fn with_data(mut self, data: &serde_json::Value) -> Self {
        self.template_data = Some(data.to_string());
        self
    }

    /// Reference the template by ARN as well.
    pub fn with_arn(mut self, arn: impl Into<String>) -> Self {
        self.template_arn = Some(arn.into());
        self
    }
}

/// Content of a v2 send: exactly one of simple, raw or template.
///
/// The choice is the caller's; the service rejects requests carrying more
/// than one variant, which this type cannot express by construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EmailContent {
    /// Structured subject-plus-body message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simple: Option<Message>,
    /// Raw MIME message, base64-encoded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<RawContent>,
    /// Stored-template reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<Template>,
}

impl EmailContent {
    /// Content from a structured message.
    pub fn simple(message: Message) -> Self {
        Self {
            simple: Some(message),
            raw: None,
            template: None,
        }
    }

    /// Content from a raw MIME message; bytes are base64-encoded here.
    pub fn raw(message: &RawMessage) -> Self {
        Self {
            simple: None,
            raw: Some(RawContent {
                data: base64::engine::general_purpose::STANDARD.encode(&message.data),
            }),
            template: None,
        }
    }

    /// Content from a stored template.
    pub fn template(template: Template) -> Self {
        Self {
            simple: None,
            raw: None,
            template: Some(template),
        }
    }
}

/// Base64-encoded raw message data for a v2 send.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawContent {
    /// Base64-encoded MIME message.
    pub data: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::email::build_message;

    #[test]
    fn test_template_content_pruned() {
        let content = EmailTemplateContent::new().with_subject("Hello {{name}}");
        let json = serde_json::to_value(&content).unwrap();
        assert_eq!(json, serde_json::json!({"Subject": "Hello {{name}}"}));
    }

    #[test]
    fn test_template_data_is_encoded_string() {
        let template =
            Template::new("welcome").with_data(&serde_json::json!({"name": "Ana"}));
        let json = serde_json::to_value(&template).unwrap();
        assert_eq!(json["TemplateData"], serde_json::json!(r#"{"name":"Ana"}"#));
    }

    #[test]
    fn test_email_content_simple_keeps_single_variant() {
        let content = EmailContent::simple(build_message("<p>hi</p>", "hi", "s"));
        let json = serde_json::to_value(&content).unwrap();

        assert!(json.get("Simple").is_some());
        assert!(json.get("Raw").is_none());
        assert!(json.get("Template").is_none());
    }

    #[test]
    fn test_email_content_raw_is_base64() {
        let content = EmailContent::raw(&RawMessage::from_mime("Subject: x\r\n\r\ny"));
        let data = content.raw.as_ref().unwrap().data.clone();
        let decoded = base64::engine::general_purpose::STANDARD
            .decode(data)
            .unwrap();
        assert_eq!(decoded, b"Subject: x\r\n\r\ny");
    }
}
