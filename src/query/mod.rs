//! Operation builders for the form-encoded Query protocol.
//!
//! Every operation is a pure function from typed arguments (plus a typed
//! options struct) to a [`QueryOperation`] descriptor: the flat parameter
//! map a transport signs and POSTs to `/`, tagged with the
//! [`QueryAction`] that later selects the response parser. Builders never
//! fail; optional arguments left `None` contribute no parameters.

pub mod configuration_sets;
pub mod custom_verification;
pub mod emails;
pub mod identities;
pub mod params;
pub mod receipts;
pub mod response;
pub mod templates;

use tracing::trace;

use self::params::Params;
use crate::http::HttpMethod;

/// Identity of a Query-protocol operation.
///
/// A closed enum: response parsing dispatches on it exhaustively, so a new
/// operation cannot be added without also adding its parser arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryAction {
    /// SendEmail
    SendEmail,
    /// SendRawEmail
    SendRawEmail,
    /// SendTemplatedEmail
    SendTemplatedEmail,
    /// SendBulkTemplatedEmail
    SendBulkTemplatedEmail,
    /// VerifyEmailIdentity
    VerifyEmailIdentity,
    /// VerifyDomainIdentity
    VerifyDomainIdentity,
    /// VerifyDomainDkim
    VerifyDomainDkim,
    /// ListIdentities
    ListIdentities,
    /// GetIdentityVerificationAttributes
    GetIdentityVerificationAttributes,
    /// DeleteIdentity
    DeleteIdentity,
    /// SetIdentityNotificationTopic
    SetIdentityNotificationTopic,
    /// SetIdentityFeedbackForwardingEnabled
    SetIdentityFeedbackForwardingEnabled,
    /// SetIdentityHeadersInNotificationsEnabled
    SetIdentityHeadersInNotificationsEnabled,
    /// ListConfigurationSets
    ListConfigurationSets,
    /// CreateTemplate
    CreateTemplate,
    /// UpdateTemplate
    UpdateTemplate,
    /// DeleteTemplate
    DeleteTemplate,
    /// GetTemplate
    GetTemplate,
    /// ListTemplates
    ListTemplates,
    /// CreateCustomVerificationEmailTemplate
    CreateCustomVerificationEmailTemplate,
    /// UpdateCustomVerificationEmailTemplate
    UpdateCustomVerificationEmailTemplate,
    /// DeleteCustomVerificationEmailTemplate
    DeleteCustomVerificationEmailTemplate,
    /// GetCustomVerificationEmailTemplate
    GetCustomVerificationEmailTemplate,
    /// SendCustomVerificationEmail
    SendCustomVerificationEmail,
    /// ListCustomVerificationEmailTemplates
    ListCustomVerificationEmailTemplates,
    /// DescribeReceiptRuleSet
    DescribeReceiptRuleSet,
}

impl QueryAction {
    /// The PascalCase action name stamped into the `Action` parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryAction::SendEmail => "SendEmail",
            QueryAction::SendRawEmail => "SendRawEmail",
            QueryAction::SendTemplatedEmail => "SendTemplatedEmail",
            QueryAction::SendBulkTemplatedEmail => "SendBulkTemplatedEmail",
            QueryAction::VerifyEmailIdentity => "VerifyEmailIdentity",
            QueryAction::VerifyDomainIdentity => "VerifyDomainIdentity",
            QueryAction::VerifyDomainDkim => "VerifyDomainDkim",
            QueryAction::ListIdentities => "ListIdentities",
            QueryAction::GetIdentityVerificationAttributes => {
                "GetIdentityVerificationAttributes"
            }
            QueryAction::DeleteIdentity => "DeleteIdentity",
            QueryAction::SetIdentityNotificationTopic => "SetIdentityNotificationTopic",
            QueryAction::SetIdentityFeedbackForwardingEnabled => {
                "SetIdentityFeedbackForwardingEnabled"
            }
            QueryAction::SetIdentityHeadersInNotificationsEnabled => {
                "SetIdentityHeadersInNotificationsEnabled"
            }
            QueryAction::ListConfigurationSets => "ListConfigurationSets",
            QueryAction::CreateTemplate => "CreateTemplate",
            QueryAction::UpdateTemplate => "UpdateTemplate",
            QueryAction::DeleteTemplate => "DeleteTemplate",
            QueryAction::GetTemplate => "GetTemplate",
            QueryAction::ListTemplates => "ListTemplates",
            QueryAction::CreateCustomVerificationEmailTemplate => {
                "CreateCustomVerificationEmailTemplate"
            }
            QueryAction::UpdateCustomVerificationEmailTemplate => {
                "UpdateCustomVerificationEmailTemplate"
            }
            QueryAction::DeleteCustomVerificationEmailTemplate => {
                "DeleteCustomVerificationEmailTemplate"
            }
            QueryAction::GetCustomVerificationEmailTemplate => {
                "GetCustomVerificationEmailTemplate"
            }
            QueryAction::SendCustomVerificationEmail => "SendCustomVerificationEmail",
            QueryAction::ListCustomVerificationEmailTemplates => {
                "ListCustomVerificationEmailTemplates"
            }
            QueryAction::DescribeReceiptRuleSet => "DescribeReceiptRuleSet",
        }
    }
}

/// A built Query-protocol operation.
///
/// Inert data: the transport reads the method, path and parameters, signs
/// and sends them, and feeds the raw response together with
/// [`action()`](Self::action) into [`response::parse`]. Constructed once,
/// never mutated, consumed once.
#[derive(Debug, Clone)]
pub struct QueryOperation {
    action: QueryAction,
    params: Params,
}

impl QueryOperation {
    /// SigV4 signing name of the service.
    pub const SERVICE_ID: &'static str = "email";

    pub(crate) fn new(action: QueryAction, mut params: Params) -> Self {
        params.insert("Action".to_string(), action.as_str().to_string());
        trace!(action = action.as_str(), params = params.len(), "built query operation");
        Self { action, params }
    }

    /// The operation's identity, used to select the response parser.
    pub fn action(&self) -> QueryAction {
        self.action
    }

    /// The flat form-encoded parameter map, `Action` included.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// HTTP method; the Query protocol always POSTs.
    pub fn http_method(&self) -> HttpMethod {
        HttpMethod::Post
    }

    /// Request path; the Query protocol addresses the service root.
    pub fn path(&self) -> &'static str {
        "/"
    }

    /// Consume the descriptor, yielding the parameter map for encoding.
    pub fn into_params(self) -> Params {
        self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_always_stamped() {
        let op = QueryOperation::new(QueryAction::ListIdentities, Params::new());
        assert_eq!(op.params()["Action"], "ListIdentities");
        assert_eq!(op.action(), QueryAction::ListIdentities);
    }

    #[test]
    fn test_descriptor_shape() {
        let op = QueryOperation::new(QueryAction::SendEmail, Params::new());
        assert_eq!(op.http_method(), HttpMethod::Post);
        assert_eq!(op.path(), "/");
        assert_eq!(QueryOperation::SERVICE_ID, "email");
    }

    #[test]
    fn test_action_names_are_pascal_case() {
        assert_eq!(
            QueryAction::SetIdentityHeadersInNotificationsEnabled.as_str(),
            "SetIdentityHeadersInNotificationsEnabled"
        );
        assert_eq!(
            QueryAction::GetIdentityVerificationAttributes.as_str(),
            "GetIdentityVerificationAttributes"
        );
    }
}
