//! Contact list and contact management for the v2 protocol.
//!
//! List names and contact addresses travel in the path and are
//! percent-encoded; a contact address like `test+bar@example.com` must
//! reach the wire as `test%2Bbar%40example.com`.

use serde::{Deserialize, Serialize};

use super::{encode_path_segment, paginate, PageOpts, V2Operation};
use crate::http::HttpMethod;
use crate::types::{ContactList, ResourceTag, Topic, TopicPreference};

/// Mutable attributes of a contact, shared by create and update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContactData {
    /// Per-topic subscription preferences.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_preferences: Option<Vec<TopicPreference>>,
    /// Whether the contact is unsubscribed from everything.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unsubscribe_all: Option<bool>,
    /// Caller-defined attributes, JSON-encoded into a string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes_data: Option<String>,
}

impl ContactData {
    /// Create empty contact data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a topic preference.
    pub fn add_topic_preference(mut self, preference: TopicPreference) -> Self {
        self.topic_preferences
            .get_or_insert_with(Vec::new)
            .push(preference);
        self
    }

    /// Set the unsubscribe-all flag.
    pub fn with_unsubscribe_all(mut self, unsubscribe: bool) -> Self {
        self.unsubscribe_all = Some(unsubscribe);
        self
    }

    /// Attach caller-defined attributes.
    pub fn with_attributes(mut self, attributes: &serde_json::Value) -> Self {
        self.attributes_data = Some(attributes.to_string());
        self
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct CreateContactListRequest<'a> {
    contact_list_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    topics: Option<&'a [Topic]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<&'a [ResourceTag]>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct UpdateContactListRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    topics: Option<&'a [Topic]>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct CreateContactRequest<'a> {
    email_address: &'a str,
    #[serde(flatten)]
    data: &'a ContactData,
}

/// Build a `CreateContactList` operation.
pub fn create_contact_list(
    list: &ContactList,
    tags: Option<&[ResourceTag]>,
) -> V2Operation {
    V2Operation::new(HttpMethod::Post, "/v2/email/contact-lists").with_json(
        &CreateContactListRequest {
            contact_list_name: &list.contact_list_name,
            description: list.description.as_deref(),
            topics: list.topics.as_deref(),
            tags,
        },
    )
}

/// Build a `GetContactList` operation.
pub fn get_contact_list(list_name: &str) -> V2Operation {
    V2Operation::new(HttpMethod::Get, contact_list_path(list_name))
}

/// Build a `ListContactLists` operation.
pub fn list_contact_lists(opts: &PageOpts) -> V2Operation {
    V2Operation::new(HttpMethod::Get, paginate("/v2/email/contact-lists", opts))
}

/// Build an `UpdateContactList` operation.
///
/// The list name addresses the resource through the path; only
/// description and topics are updatable.
pub fn update_contact_list(list: &ContactList) -> V2Operation {
    V2Operation::new(HttpMethod::Put, contact_list_path(&list.contact_list_name)).with_json(
        &UpdateContactListRequest {
            description: list.description.as_deref(),
            topics: list.topics.as_deref(),
        },
    )
}

/// Build a `DeleteContactList` operation.
pub fn delete_contact_list(list_name: &str) -> V2Operation {
    V2Operation::new(HttpMethod::Delete, contact_list_path(list_name))
}

/// Build a `CreateContact` operation.
pub fn create_contact(
    list_name: &str,
    email_address: &str,
    data: &ContactData,
) -> V2Operation {
    V2Operation::new(HttpMethod::Post, contacts_path(list_name)).with_json(
        &CreateContactRequest {
            email_address,
            data,
        },
    )
}

/// Build a `GetContact` operation.
pub fn get_contact(list_name: &str, email_address: &str) -> V2Operation {
    V2Operation::new(HttpMethod::Get, contact_path(list_name, email_address))
}

/// Build a `ListContacts` operation.
pub fn list_contacts(list_name: &str, opts: &PageOpts) -> V2Operation {
    V2Operation::new(HttpMethod::Get, paginate(&contacts_path(list_name), opts))
}

/// Build an `UpdateContact` operation.
///
/// The contact is addressed through the path; the body carries only the
/// mutable attributes.
pub fn update_contact(
    list_name: &str,
    email_address: &str,
    data: &ContactData,
) -> V2Operation {
    V2Operation::new(HttpMethod::Put, contact_path(list_name, email_address)).with_json(data)
}

/// Build a `DeleteContact` operation.
pub fn delete_contact(list_name: &str, email_address: &str) -> V2Operation {
    V2Operation::new(HttpMethod::Delete, contact_path(list_name, email_address))
}

fn contact_list_path(list_name: &str) -> String {
    format!("/v2/email/contact-lists/{}", encode_path_segment(list_name))
}

fn contacts_path(list_name: &str) -> String {
    format!("{}/contacts", contact_list_path(list_name))
}

fn contact_path(list_name: &str, email_address: &str) -> String {
    format!(
        "{}/{}",
        contacts_path(list_name),
        encode_path_segment(email_address)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SubscriptionStatus;

    #[test]
    fn test_create_contact_list_body() {
        let list = ContactList::new("weekly")
            .with_description("Weekly digest")
            .add_topic(Topic::new("digest", "Digest", SubscriptionStatus::OptIn));
        let op = create_contact_list(&list, Some(&[ResourceTag::new("env", "prod")]));

        assert_eq!(op.method(), HttpMethod::Post);
        assert_eq!(op.path(), "/v2/email/contact-lists");

        let body = op.body().unwrap();
        assert_eq!(body["ContactListName"], "weekly");
        assert_eq!(body["Description"], "Weekly digest");
        assert_eq!(body["Topics"][0]["TopicName"], "digest");
        assert_eq!(body["Tags"][0]["Key"], "env");
    }

    #[test]
    fn test_update_contact_percent_encodes_address() {
        let op = update_contact("list", "test+bar@example.com", &ContactData::new());
        assert_eq!(op.method(), HttpMethod::Put);
        assert_eq!(
            op.path(),
            "/v2/email/contact-lists/list/contacts/test%2Bbar%40example.com"
        );
    }

    #[test]
    fn test_create_contact_flattens_data() {
        let data = ContactData::new()
            .add_topic_preference(TopicPreference::subscribed("digest"))
            .with_attributes(&serde_json::json!({"plan": "pro"}));
        let op = create_contact("weekly", "user@example.com", &data);

        let body = op.body().unwrap();
        assert_eq!(body["EmailAddress"], "user@example.com");
        assert_eq!(body["TopicPreferences"][0]["TopicName"], "digest");
        assert_eq!(body["AttributesData"], r#"{"plan":"pro"}"#);
        assert!(body.get("UnsubscribeAll").is_none());
    }

    #[test]
    fn test_list_contacts_pagination() {
        let opts = PageOpts {
            next_token: Some("tok".to_string()),
            page_size: Some(50),
        };
        let op = list_contacts("weekly", &opts);
        assert_eq!(
            op.path(),
            "/v2/email/contact-lists/weekly/contacts?NextToken=tok&PageSize=50"
        );
        assert!(op.body().is_none());
    }

    #[test]
    fn test_get_and_delete_contact_list() {
        assert_eq!(
            get_contact_list("my list").path(),
            "/v2/email/contact-lists/my%20list"
        );
        assert_eq!(
            delete_contact_list("weekly").method(),
            HttpMethod::Delete
        );
    }
}
