//! Custom verification email templates for the v2 protocol.
//!
//! The redirection-URL body keys end in `URL` on the wire, which
//! PascalCase renaming would produce as `Url`; they carry explicit
//! renames instead.

use serde::{Deserialize, Serialize};

use super::{encode_path_segment, V2Operation};
use crate::http::HttpMethod;

/// Body fields of a custom verification template, shared by create and
/// update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomVerificationTemplateContent {
    /// Address the verification email is sent from.
    pub from_email_address: String,
    /// Subject line of the verification email.
    pub template_subject: String,
    /// HTML content of the verification email.
    pub template_content: String,
    /// Where recipients land after a successful verification.
    #[serde(rename = "SuccessRedirectionURL")]
    pub success_redirection_url: String,
    /// Where recipients land after a failed verification.
    #[serde(rename = "FailureRedirectionURL")]
    pub failure_redirection_url: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct CreateCustomVerificationTemplateRequest<'a> {
    template_name: &'a str,
    #[serde(flatten)]
    content: &'a CustomVerificationTemplateContent,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct SendCustomVerificationEmailRequest<'a> {
    email_address: &'a str,
    template_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    configuration_set_name: Option<&'a str>,
}

/// Build a v2 `CreateCustomVerificationEmailTemplate` operation.
pub fn create_custom_verification_email_template(
    template_name: &str,
    content: &CustomVerificationTemplateContent,
) -> V2Operation {
    V2Operation::new(
        HttpMethod::Post,
        "/v2/email/custom-verification-email-templates",
    )
    .with_json(&CreateCustomVerificationTemplateRequest {
        template_name,
        content,
    })
}

/// Build a v2 `GetCustomVerificationEmailTemplate` operation.
pub fn get_custom_verification_email_template(template_name: &str) -> V2Operation {
    V2Operation::new(HttpMethod::Get, custom_template_path(template_name))
}

/// Build a v2 `UpdateCustomVerificationEmailTemplate` operation.
pub fn update_custom_verification_email_template(
    template_name: &str,
    content: &CustomVerificationTemplateContent,
) -> V2Operation {
    V2Operation::new(HttpMethod::Put, custom_template_path(template_name)).with_json(content)
}

/// Build a v2 `DeleteCustomVerificationEmailTemplate` operation.
pub fn delete_custom_verification_email_template(template_name: &str) -> V2Operation {
    V2Operation::new(HttpMethod::Delete, custom_template_path(template_name))
}

/// Build a v2 `SendCustomVerificationEmail` operation.
pub fn send_custom_verification_email(
    email_address: &str,
    template_name: &str,
    configuration_set_name: Option<&str>,
) -> V2Operation {
    V2Operation::new(
        HttpMethod::Post,
        "/v2/email/outbound-custom-verification-emails",
    )
    .with_json(&SendCustomVerificationEmailRequest {
        email_address,
        template_name,
        configuration_set_name,
    })
}

fn custom_template_path(template_name: &str) -> String {
    format!(
        "/v2/email/custom-verification-email-templates/{}",
        encode_path_segment(template_name)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content() -> CustomVerificationTemplateContent {
        CustomVerificationTemplateContent {
            from_email_address: "no-reply@example.com".to_string(),
            template_subject: "Please verify".to_string(),
            template_content: "<p>Click</p>".to_string(),
            success_redirection_url: "https://example.com/ok".to_string(),
            failure_redirection_url: "https://example.com/fail".to_string(),
        }
    }

    #[test]
    fn test_create_uses_literal_url_keys() {
        let op = create_custom_verification_email_template("verify", &content());

        assert_eq!(op.method(), HttpMethod::Post);
        assert_eq!(op.path(), "/v2/email/custom-verification-email-templates");
        let body = op.body().unwrap();
        assert_eq!(body["TemplateName"], "verify");
        assert_eq!(body["SuccessRedirectionURL"], "https://example.com/ok");
        assert!(body.get("SuccessRedirectionUrl").is_none());
    }

    #[test]
    fn test_update_addresses_by_path() {
        let op = update_custom_verification_email_template("verify", &content());

        assert_eq!(op.method(), HttpMethod::Put);
        assert_eq!(
            op.path(),
            "/v2/email/custom-verification-email-templates/verify"
        );
        assert!(op.body().unwrap().get("TemplateName").is_none());
    }

    #[test]
    fn test_send_prunes_absent_configuration_set() {
        let op = send_custom_verification_email("user@example.com", "verify", None);

        assert_eq!(op.path(), "/v2/email/outbound-custom-verification-emails");
        let body = op.body().unwrap();
        assert_eq!(body["EmailAddress"], "user@example.com");
        assert_eq!(body["TemplateName"], "verify");
        assert!(body.get("ConfigurationSetName").is_none());
    }
}
