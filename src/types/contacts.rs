//! Contact-list management types for the v2 protocol.
//!
//! These entities appear in v2 request bodies only; the service's JSON
//! replies are handed back to the caller undecoded.

use serde::{Deserialize, Serialize};

/// A contact list definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContactList {
    /// The name of the contact list.
    pub contact_list_name: String,
    /// Description of the contact list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Topics subscribers can opt in or out of.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topics: Option<Vec<Topic>>,
}

impl ContactList {
    /// Create a contact list with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            contact_list_name: name.into(),
            description: None,
            topics: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add a topic.
    pub fn add_topic(mut self, topic: Topic) -> Self {
        self.topics.get_or_insert_with(Vec::new).push(topic);
        self
    }
}

/// A topic within a contact list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Topic {
    /// The name of the topic.
    pub topic_name: String,
    /// The display name shown to subscribers.
    pub display_name: String,
    /// Description of the topic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Subscription status applied to contacts with no explicit preference.
    pub default_subscription_status: SubscriptionStatus,
}

impl Topic {
    /// Create a new topic.
    pub fn new(
        topic_name: impl Into<String>,
        display_name: impl Into<String>,
        default_status: SubscriptionStatus,
    ) -> Self {
        Self {
            topic_name: topic_name.into(),
            display_name: display_name.into(),
            description: None,
            default_subscription_status: default_status,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A contact's per-topic subscription preference.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TopicPreference {
    /// The name of the topic.
    pub topic_name: String,
    /// Subscription status for this topic.
    pub subscription_status: SubscriptionStatus,
}

impl TopicPreference {
    /// Create a preference.
    pub fn new(topic_name: impl Into<String>, status: SubscriptionStatus) -> Self {
        Self {
            topic_name: topic_name.into(),
            subscription_status: status,
        }
    }

    /// Opted-in preference for a topic.
    pub fn subscribed(topic_name: impl Into<String>) -> Self {
        Self::new(topic_name, SubscriptionStatus::OptIn)
    }

    /// Opted-out preference for a topic.
    pub fn unsubscribed(topic_name: impl Into<String>) -> Self {
        Self::new(topic_name, SubscriptionStatus::OptOut)
    }
}

/// Subscription status for a topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubscriptionStatus {
    /// Contact receives emails for this topic.
    OptIn,
    /// Contact does not receive emails for this topic.
    OptOut,
}
