//! Custom verification email template operations for the Query protocol.
//!
//! The redirection-URL parameters end in `URL` (not `Url`) on the wire,
//! so they are written out literally instead of going through the key
//! formatter.

use super::params::{insert_opt, Params};
use super::{QueryAction, QueryOperation};

/// A custom verification email template definition.
#[derive(Debug, Clone)]
pub struct CustomVerificationTemplate {
    /// Template name.
    pub template_name: String,
    /// Address the verification email is sent from.
    pub from_email_address: String,
    /// Subject line of the verification email.
    pub template_subject: String,
    /// HTML content of the verification email.
    pub template_content: String,
    /// Where recipients land after a successful verification.
    pub success_redirection_url: String,
    /// Where recipients land after a failed verification.
    pub failure_redirection_url: String,
}

/// Optional parameters of [`send_custom_verification_email`].
#[derive(Debug, Clone, Default)]
pub struct SendCustomVerificationEmailOpts {
    /// Configuration set to apply to the send.
    pub configuration_set_name: Option<String>,
}

/// Optional parameters of the custom-verification-template listing.
#[derive(Debug, Clone, Default)]
pub struct ListCustomVerificationTemplatesOpts {
    /// Maximum number of templates per page.
    pub max_results: Option<u32>,
    /// Pagination token from a previous listing.
    pub next_token: Option<String>,
}

/// Build a `CreateCustomVerificationEmailTemplate` operation.
pub fn create_custom_verification_email_template(
    template: &CustomVerificationTemplate,
) -> QueryOperation {
    QueryOperation::new(
        QueryAction::CreateCustomVerificationEmailTemplate,
        custom_template_params(template),
    )
}

/// Build an `UpdateCustomVerificationEmailTemplate` operation.
pub fn update_custom_verification_email_template(
    template: &CustomVerificationTemplate,
) -> QueryOperation {
    QueryOperation::new(
        QueryAction::UpdateCustomVerificationEmailTemplate,
        custom_template_params(template),
    )
}

/// Build a `DeleteCustomVerificationEmailTemplate` operation.
pub fn delete_custom_verification_email_template(template_name: &str) -> QueryOperation {
    let mut params = Params::new();
    params.insert("TemplateName".to_string(), template_name.to_string());
    QueryOperation::new(QueryAction::DeleteCustomVerificationEmailTemplate, params)
}

/// Build a `GetCustomVerificationEmailTemplate` operation.
pub fn get_custom_verification_email_template(template_name: &str) -> QueryOperation {
    let mut params = Params::new();
    params.insert("TemplateName".to_string(), template_name.to_string());
    QueryOperation::new(QueryAction::GetCustomVerificationEmailTemplate, params)
}

/// Build a `SendCustomVerificationEmail` operation.
pub fn send_custom_verification_email(
    email_address: &str,
    template_name: &str,
    opts: &SendCustomVerificationEmailOpts,
) -> QueryOperation {
    let mut params = Params::new();
    params.insert("EmailAddress".to_string(), email_address.to_string());
    params.insert("TemplateName".to_string(), template_name.to_string());
    insert_opt(&mut params, "ConfigurationSetName", &opts.configuration_set_name);
    QueryOperation::new(QueryAction::SendCustomVerificationEmail, params)
}

/// Build a `ListCustomVerificationEmailTemplates` operation.
pub fn list_custom_verification_email_templates(
    opts: &ListCustomVerificationTemplatesOpts,
) -> QueryOperation {
    let mut params = Params::new();
    if let Some(max_results) = opts.max_results {
        params.insert("MaxResults".to_string(), max_results.to_string());
    }
    insert_opt(&mut params, "NextToken", &opts.next_token);
    QueryOperation::new(QueryAction::ListCustomVerificationEmailTemplates, params)
}

fn custom_template_params(template: &CustomVerificationTemplate) -> Params {
    let mut params = Params::new();
    params.insert("TemplateName".to_string(), template.template_name.clone());
    params.insert(
        "FromEmailAddress".to_string(),
        template.from_email_address.clone(),
    );
    params.insert(
        "TemplateSubject".to_string(),
        template.template_subject.clone(),
    );
    params.insert(
        "TemplateContent".to_string(),
        template.template_content.clone(),
    );
    params.insert(
        "SuccessRedirectionURL".to_string(),
        template.success_redirection_url.clone(),
    );
    params.insert(
        "FailureRedirectionURL".to_string(),
        template.failure_redirection_url.clone(),
    );
    params
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template() -> CustomVerificationTemplate {
        CustomVerificationTemplate {
            template_name: "verify".to_string(),
            from_email_address: "no-reply@example.com".to_string(),
            template_subject: "Please verify".to_string(),
            template_content: "<p>Click to verify</p>".to_string(),
            success_redirection_url: "https://example.com/ok".to_string(),
            failure_redirection_url: "https://example.com/fail".to_string(),
        }
    }

    #[test]
    fn test_create_uses_literal_url_keys() {
        let op = create_custom_verification_email_template(&template());
        let params = op.params();

        assert_eq!(params["Action"], "CreateCustomVerificationEmailTemplate");
        assert_eq!(params["SuccessRedirectionURL"], "https://example.com/ok");
        assert_eq!(params["FailureRedirectionURL"], "https://example.com/fail");
        assert!(!params.contains_key("SuccessRedirectionUrl"));
    }

    #[test]
    fn test_update_same_shape() {
        let op = update_custom_verification_email_template(&template());
        assert_eq!(op.params()["Action"], "UpdateCustomVerificationEmailTemplate");
        assert_eq!(op.params()["FromEmailAddress"], "no-reply@example.com");
    }

    #[test]
    fn test_send_with_configuration_set() {
        let opts = SendCustomVerificationEmailOpts {
            configuration_set_name: Some("onboarding".to_string()),
        };
        let op = send_custom_verification_email("user@example.com", "verify", &opts);

        assert_eq!(op.params()["EmailAddress"], "user@example.com");
        assert_eq!(op.params()["TemplateName"], "verify");
        assert_eq!(op.params()["ConfigurationSetName"], "onboarding");
    }

    #[test]
    fn test_list_uses_max_results() {
        let opts = ListCustomVerificationTemplatesOpts {
            max_results: Some(25),
            next_token: None,
        };
        let op = list_custom_verification_email_templates(&opts);
        assert_eq!(op.params()["MaxResults"], "25");
        assert!(!op.params().contains_key("NextToken"));
    }
}
