//! Error types for the AWS SES protocol layer.
//!
//! Two kinds of failure exist at this layer:
//!
//! - **Remote service errors**: the service answered with an error status
//!   and a structured error body. These are decoded into the uniform
//!   [`SesApiError`] value and surfaced as [`SesError::Api`], never as a
//!   panic, and never retried here.
//! - **Decoding failures**: the response body could not be parsed, or a
//!   mandatory element for the operation was absent. These indicate a
//!   protocol mismatch and fail explicitly rather than returning partial
//!   data.
//!
//! Everything else (transport failures, credential problems, throttling
//! policy) belongs to the transport collaborator and has no variant here.

use http::StatusCode;
use thiserror::Error;

/// Result type alias for SES protocol operations.
pub type SesResult<T> = std::result::Result<T, SesError>;

/// Top-level error type for the SES protocol layer.
#[derive(Debug, Error)]
pub enum SesError {
    /// JSON encoding of a request payload failed.
    #[error("serialization error: {message}")]
    Serialization {
        /// Description of the serialization failure.
        message: String,
    },

    /// The response body was not well-formed XML or not valid UTF-8.
    #[error("malformed response: {message}")]
    MalformedResponse {
        /// Description of the decode failure.
        message: String,
    },

    /// A response element the operation requires was absent.
    #[error("missing element {element} in {action} response")]
    MissingElement {
        /// Name of the absent XML element.
        element: &'static str,
        /// PascalCase action name the response belongs to.
        action: &'static str,
    },

    /// The service rejected the request.
    #[error(transparent)]
    Api(#[from] SesApiError),
}

impl From<serde_json::Error> for SesError {
    fn from(err: serde_json::Error) -> Self {
        SesError::Serialization {
            message: err.to_string(),
        }
    }
}

/// A decoded SES error response.
///
/// The shape is uniform across every Query operation: `Type`, `Code` and
/// `Message` come from the `<Error>` element, `RequestId` from its sibling
/// at the document root. The HTTP status the transport observed travels
/// alongside so callers can distinguish client from server faults.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("SES error {code} ({error_type}): {message} [request id {request_id}]")]
pub struct SesApiError {
    /// Fault classification reported by the service (`Sender`/`Receiver`).
    pub error_type: String,
    /// Machine-readable error code, e.g. `MessageRejected`.
    pub code: String,
    /// Human-readable description.
    pub message: String,
    /// Request id for support correlation.
    pub request_id: String,
    /// HTTP status of the error response.
    pub status: StatusCode,
}

impl SesApiError {
    /// Whether the fault was attributed to the caller.
    pub fn is_sender_fault(&self) -> bool {
        self.error_type == "Sender"
    }
}
