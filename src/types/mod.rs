//! Wire-level data types for the SES Query and v2 protocols.
//!
//! Everything here is value-typed and transient: constructed by the
//! caller, consumed by an operation builder, and discarded once the
//! descriptor exists.

mod contacts;
mod email;
mod templates;

pub use contacts::{ContactList, SubscriptionStatus, Topic, TopicPreference};
pub use email::{
    build_message, build_message_with_charset, Body, BulkDestination, Content, Destination,
    Message, RawMessage, ResourceTag, Tag,
};
pub use templates::{EmailContent, EmailTemplateContent, RawContent, Template};
