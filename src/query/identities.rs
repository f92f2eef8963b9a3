//! Identity verification and management operations for the Query protocol.

use super::params::{insert_opt, member_list, Params};
use super::{QueryAction, QueryOperation};

/// Kind of identity to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityType {
    /// Verified email addresses.
    EmailAddress,
    /// Verified domains.
    Domain,
}

impl IdentityType {
    /// Wire form of the identity type.
    pub fn as_str(&self) -> &'static str {
        match self {
            IdentityType::EmailAddress => "EmailAddress",
            IdentityType::Domain => "Domain",
        }
    }
}

/// Feedback notification kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    /// Hard bounce notifications.
    Bounce,
    /// Complaint notifications.
    Complaint,
    /// Delivery confirmations.
    Delivery,
}

impl NotificationType {
    /// Wire form of the notification type.
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationType::Bounce => "Bounce",
            NotificationType::Complaint => "Complaint",
            NotificationType::Delivery => "Delivery",
        }
    }
}

/// Optional parameters of [`list_identities`].
#[derive(Debug, Clone, Default)]
pub struct ListIdentitiesOpts {
    /// Restrict the listing to one identity kind.
    pub identity_type: Option<IdentityType>,
    /// Maximum number of identities per page.
    pub max_items: Option<u32>,
    /// Pagination token from a previous listing.
    pub next_token: Option<String>,
}

/// Build a `VerifyEmailIdentity` operation.
pub fn verify_email_identity(email: &str) -> QueryOperation {
    let mut params = Params::new();
    params.insert("EmailAddress".to_string(), email.to_string());
    QueryOperation::new(QueryAction::VerifyEmailIdentity, params)
}

/// Build a `VerifyDomainIdentity` operation.
pub fn verify_domain_identity(domain: &str) -> QueryOperation {
    let mut params = Params::new();
    params.insert("Domain".to_string(), domain.to_string());
    QueryOperation::new(QueryAction::VerifyDomainIdentity, params)
}

/// Build a `VerifyDomainDkim` operation.
pub fn verify_domain_dkim(domain: &str) -> QueryOperation {
    let mut params = Params::new();
    params.insert("Domain".to_string(), domain.to_string());
    QueryOperation::new(QueryAction::VerifyDomainDkim, params)
}

/// Build a `ListIdentities` operation.
pub fn list_identities(opts: &ListIdentitiesOpts) -> QueryOperation {
    let mut params = Params::new();
    if let Some(identity_type) = opts.identity_type {
        params.insert("IdentityType".to_string(), identity_type.as_str().to_string());
    }
    if let Some(max_items) = opts.max_items {
        params.insert("MaxItems".to_string(), max_items.to_string());
    }
    insert_opt(&mut params, "NextToken", &opts.next_token);
    QueryOperation::new(QueryAction::ListIdentities, params)
}

/// Build a `GetIdentityVerificationAttributes` operation.
pub fn get_identity_verification_attributes<S: AsRef<str>>(
    identities: &[S],
) -> QueryOperation {
    let params = member_list("Identities", Some(identities));
    QueryOperation::new(QueryAction::GetIdentityVerificationAttributes, params)
}

/// Build a `DeleteIdentity` operation.
pub fn delete_identity(identity: &str) -> QueryOperation {
    let mut params = Params::new();
    params.insert("Identity".to_string(), identity.to_string());
    QueryOperation::new(QueryAction::DeleteIdentity, params)
}

/// Build a `SetIdentityNotificationTopic` operation.
///
/// `sns_topic` left `None` clears the topic, reverting the notification
/// kind to email feedback. The service throttles this operation to one
/// request per second; pacing is the transport's concern.
pub fn set_identity_notification_topic(
    identity: &str,
    notification_type: NotificationType,
    sns_topic: Option<&str>,
) -> QueryOperation {
    let mut params = Params::new();
    params.insert("Identity".to_string(), identity.to_string());
    params.insert(
        "NotificationType".to_string(),
        notification_type.as_str().to_string(),
    );
    if let Some(topic) = sns_topic {
        params.insert("SnsTopic".to_string(), topic.to_string());
    }
    QueryOperation::new(QueryAction::SetIdentityNotificationTopic, params)
}

/// Build a `SetIdentityFeedbackForwardingEnabled` operation.
pub fn set_identity_feedback_forwarding_enabled(
    enabled: bool,
    identity: &str,
) -> QueryOperation {
    let mut params = Params::new();
    params.insert("ForwardingEnabled".to_string(), enabled.to_string());
    params.insert("Identity".to_string(), identity.to_string());
    QueryOperation::new(QueryAction::SetIdentityFeedbackForwardingEnabled, params)
}

/// Build a `SetIdentityHeadersInNotificationsEnabled` operation.
pub fn set_identity_headers_in_notifications_enabled(
    identity: &str,
    notification_type: NotificationType,
    enabled: bool,
) -> QueryOperation {
    let mut params = Params::new();
    params.insert("Identity".to_string(), identity.to_string());
    params.insert(
        "NotificationType".to_string(),
        notification_type.as_str().to_string(),
    );
    params.insert("Enabled".to_string(), enabled.to_string());
    QueryOperation::new(
        QueryAction::SetIdentityHeadersInNotificationsEnabled,
        params,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_email_identity_exact_params() {
        let op = verify_email_identity("user@example.com");

        let mut expected = Params::new();
        expected.insert("Action".to_string(), "VerifyEmailIdentity".to_string());
        expected.insert("EmailAddress".to_string(), "user@example.com".to_string());
        assert_eq!(op.params(), &expected);
    }

    #[test]
    fn test_verify_domain_operations() {
        assert_eq!(
            verify_domain_identity("example.com").params()["Domain"],
            "example.com"
        );
        assert_eq!(
            verify_domain_dkim("example.com").params()["Action"],
            "VerifyDomainDkim"
        );
    }

    #[test]
    fn test_list_identities_opts() {
        let opts = ListIdentitiesOpts {
            identity_type: Some(IdentityType::Domain),
            max_items: Some(50),
            next_token: Some("token".to_string()),
        };
        let params_full = list_identities(&opts);
        assert_eq!(params_full.params()["IdentityType"], "Domain");
        assert_eq!(params_full.params()["MaxItems"], "50");
        assert_eq!(params_full.params()["NextToken"], "token");

        let params_bare = list_identities(&ListIdentitiesOpts::default());
        assert_eq!(params_bare.params().len(), 1);
    }

    #[test]
    fn test_get_identity_verification_attributes_indexing() {
        let op = get_identity_verification_attributes(&["a@b.com", "example.com"]);
        assert_eq!(op.params()["Identities.member.1"], "a@b.com");
        assert_eq!(op.params()["Identities.member.2"], "example.com");
    }

    #[test]
    fn test_set_identity_notification_topic_clears_when_absent() {
        let set = set_identity_notification_topic(
            "example.com",
            NotificationType::Bounce,
            Some("arn:aws:sns:us-east-1:123:bounces"),
        );
        assert_eq!(set.params()["SnsTopic"], "arn:aws:sns:us-east-1:123:bounces");
        assert_eq!(set.params()["NotificationType"], "Bounce");

        let clear =
            set_identity_notification_topic("example.com", NotificationType::Bounce, None);
        assert!(!clear.params().contains_key("SnsTopic"));
    }

    #[test]
    fn test_feedback_and_headers_toggles() {
        let forwarding = set_identity_feedback_forwarding_enabled(true, "example.com");
        assert_eq!(forwarding.params()["ForwardingEnabled"], "true");

        let headers = set_identity_headers_in_notifications_enabled(
            "example.com",
            NotificationType::Complaint,
            false,
        );
        assert_eq!(headers.params()["Enabled"], "false");
        assert_eq!(headers.params()["NotificationType"], "Complaint");
    }
}
