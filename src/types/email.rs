//! Email message types shared by the Query and v2 protocols.

use serde::{Deserialize, Serialize};

/// Email destination (recipients).
///
/// Absent recipient classes contribute nothing on the wire: a `Destination`
/// with only `to_addresses` set serializes no `CcAddresses`/`BccAddresses`
/// keys at all, which is distinct from sending empty lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Destination {
    /// "To" recipients.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_addresses: Option<Vec<String>>,
    /// "CC" recipients.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc_addresses: Option<Vec<String>>,
    /// "BCC" recipients.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bcc_addresses: Option<Vec<String>>,
}

impl Destination {
    /// Create an empty destination.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a "To" recipient.
    pub fn add_to(mut self, address: impl Into<String>) -> Self {
        self.to_addresses
            .get_or_insert_with(Vec::new)
            .push(address.into());
        self
    }

    /// Replace the "To" recipients.
    pub fn with_to(mut self, addresses: Vec<String>) -> Self {
        self.to_addresses = Some(addresses);
        self
    }

    /// Add a "CC" recipient.
    pub fn add_cc(mut self, address: impl Into<String>) -> Self {
        self.cc_addresses
            .get_or_insert_with(Vec::new)
            .push(address.into());
        self
    }

    /// Replace the "CC" recipients.
    pub fn with_cc(mut self, addresses: Vec<String>) -> Self {
        self.cc_addresses = Some(addresses);
        self
    }

    /// Add a "BCC" recipient.
    pub fn add_bcc(mut self, address: impl Into<String>) -> Self {
        self.bcc_addresses
            .get_or_insert_with(Vec::new)
            .push(address.into());
        self
    }

    /// Replace the "BCC" recipients.
    pub fn with_bcc(mut self, addresses: Vec<String>) -> Self {
        self.bcc_addresses = Some(addresses);
        self
    }
}

/// A piece of content with an optional character set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Content {
    /// Content data.
    pub data: String,
    /// Character set; omitted from the wire when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charset: Option<String>,
}

impl Content {
    /// Create content without an explicit charset.
    pub fn new(data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            charset: None,
        }
    }

    /// Create content with an explicit charset.
    pub fn with_charset(data: impl Into<String>, charset: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            charset: Some(charset.into()),
        }
    }
}

/// Email body with optional HTML and plain-text parts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Body {
    /// HTML part.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<Content>,
    /// Plain-text part.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Content>,
}

/// A structured email message: subject plus HTML and/or text body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Message {
    /// Message subject.
    pub subject: Content,
    /// Message body parts.
    pub body: Body,
}

impl Message {
    /// Create a message with a subject and no body parts.
    pub fn new(subject: Content) -> Self {
        Self {
            subject,
            body: Body::default(),
        }
    }

    /// Set the HTML body part.
    pub fn with_html(mut self, html: Content) -> Self {
        self.body.html = Some(html);
        self
    }

    /// Set the plain-text body part.
    pub fn with_text(mut self, text: Content) -> Self {
        self.body.text = Some(text);
        self
    }
}

/// Build a complete [`Message`] with HTML and text parts in UTF-8.
///
/// Convenience constructor for the common case; use the [`Message`]
/// builder methods when parts are optional or need another charset.
pub fn build_message(
    html: impl Into<String>,
    text: impl Into<String>,
    subject: impl Into<String>,
) -> Message {
    build_message_with_charset(html, text, subject, "UTF-8")
}

/// Build a complete [`Message`] with an explicit charset on every part.
pub fn build_message_with_charset(
    html: impl Into<String>,
    text: impl Into<String>,
    subject: impl Into<String>,
    charset: impl Into<String>,
) -> Message {
    let charset = charset.into();
    Message {
        subject: Content::with_charset(subject, charset.clone()),
        body: Body {
            html: Some(Content::with_charset(html, charset.clone())),
            text: Some(Content::with_charset(text, charset)),
        },
    }
}

/// Message tag for the Query protocol.
///
/// Serializes as `Name`/`Value`. The v2 resource tag ([`ResourceTag`])
/// uses `Key`/`Value`; the two shapes are part of their respective wire
/// contracts and are deliberately not unified.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    /// Tag name.
    pub name: String,
    /// Tag value.
    pub value: String,
}

impl Tag {
    /// Create a new tag.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Resource tag for the v2 protocol (`Key`/`Value` on the wire).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceTag {
    /// Tag key.
    pub key: String,
    /// Tag value.
    pub value: String,
}

impl ResourceTag {
    /// Create a new resource tag.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A raw MIME message.
///
/// The Query protocol carries it base64-encoded in `RawMessage.Data`;
/// encoding happens when the send operation is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMessage {
    /// Raw MIME message bytes.
    pub data: Vec<u8>,
}

impl RawMessage {
    /// Create a raw message from bytes.
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Create a raw message from MIME text.
    pub fn from_mime(mime: impl Into<String>) -> Self {
        Self {
            data: mime.into().into_bytes(),
        }
    }
}

/// One destination entry of a bulk templated send.
#[derive(Debug, Clone, PartialEq)]
pub struct BulkDestination {
    /// Recipients for this entry.
    pub destination: Destination,
    /// Per-entry template replacement data, JSON-encoded on the wire.
    pub replacement_template_data: Option<serde_json::Value>,
}

impl BulkDestination {
    /// Create an entry without replacement data.
    pub fn new(destination: Destination) -> Self {
        Self {
            destination,
            replacement_template_data: None,
        }
    }

    /// Attach replacement template data.
    pub fn with_template_data(mut self, data: serde_json::Value) -> Self {
        self.replacement_template_data = Some(data);
        self
    }
}
