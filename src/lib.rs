//! AWS SES protocol layer: request construction and response parsing.
//!
//! Type-safe, transport-free interface to the two generations of the
//! Amazon SES HTTP API: the form-encoded Query protocol and the JSON v2
//! protocol.
//!
//! # Features
//!
//! - **Query protocol**: one builder per operation producing the flat
//!   PascalCase parameter map (`Destination.ToAddresses.member.1`, ...),
//!   plus an XML decoder turning responses into typed results
//! - **v2 protocol**: one builder per operation producing method + path +
//!   pruned JSON body descriptors, with path identifiers percent-encoded
//! - **No I/O**: descriptors are inert; a transport collaborator
//!   implementing [`Transport`] signs and executes them
//! - **Uniform errors**: every Query error body decodes into the same
//!   [`SesApiError`] value, regardless of operation
//!
//! # Quick Start
//!
//! ```rust
//! use integrations_aws_ses_protocol::query::emails::{send_email, SendEmailOpts};
//! use integrations_aws_ses_protocol::types::{build_message, Destination};
//!
//! let destination = Destination::new().add_to("recipient@example.com");
//! let message = build_message("<h1>Hello</h1>", "Hello", "Greetings");
//!
//! let operation = send_email(&destination, &message, "sender@example.com", &SendEmailOpts::default());
//! assert_eq!(operation.params()["Action"], "SendEmail");
//! assert_eq!(operation.params()["Destination.ToAddresses.member.1"], "recipient@example.com");
//! ```
//!
//! Executing the descriptor belongs to the transport; decoding what comes
//! back belongs here:
//!
//! ```rust
//! use http::StatusCode;
//! use integrations_aws_ses_protocol::query::response::{parse, results::QueryResponse};
//! use integrations_aws_ses_protocol::query::QueryAction;
//! use integrations_aws_ses_protocol::RawResponse;
//!
//! let body = "<VerifyDomainIdentityResponse>\
//!     <VerifyDomainIdentityResult><VerificationToken>token</VerificationToken></VerifyDomainIdentityResult>\
//!     <ResponseMetadata><RequestId>rid</RequestId></ResponseMetadata>\
//!     </VerifyDomainIdentityResponse>";
//! let raw = RawResponse::new(StatusCode::OK, body.as_bytes().to_vec());
//!
//! match parse(&raw, QueryAction::VerifyDomainIdentity).unwrap() {
//!     QueryResponse::VerifyDomainIdentity(result) => {
//!         assert_eq!(result.verification_token, "token");
//!         assert_eq!(result.request_id, "rid");
//!     }
//!     _ => unreachable!(),
//! }
//! ```
//!
//! v2 operations address resources through the path; user-supplied
//! segments are percent-encoded:
//!
//! ```rust
//! use integrations_aws_ses_protocol::v2::contacts::{update_contact, ContactData};
//!
//! let operation = update_contact("list", "test+bar@example.com", &ContactData::new());
//! assert_eq!(
//!     operation.path(),
//!     "/v2/email/contact-lists/list/contacts/test%2Bbar%40example.com"
//! );
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

// Module declarations
pub mod error;
pub mod http;
pub mod query;
pub mod types;
pub mod v2;

// Re-export descriptor and boundary types
pub use self::http::{HttpMethod, RawResponse, Transport, TransportError};
pub use query::{QueryAction, QueryOperation};
pub use v2::{PageOpts, V2Operation};

// Re-export error types
pub use error::{SesApiError, SesError, SesResult};

// Re-export the response decoder
pub use query::response::{parse, results::QueryResponse};

// Re-export common wire types
pub use types::{
    build_message, build_message_with_charset, Body, BulkDestination, ContactList, Content,
    Destination, EmailContent, EmailTemplateContent, Message, RawMessage, ResourceTag, Tag,
    Template, Topic, TopicPreference,
};

/// Result type alias for SES protocol operations.
pub type Result<T> = std::result::Result<T, SesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crate_exports() {
        // Verify all major types are exported
        let _ = std::any::type_name::<SesError>();
        let _ = std::any::type_name::<QueryOperation>();
        let _ = std::any::type_name::<V2Operation>();
        let _ = std::any::type_name::<QueryResponse>();
        let _ = std::any::type_name::<RawResponse>();
    }
}
