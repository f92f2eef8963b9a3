//! HTTP boundary types shared with the transport collaborator.
//!
//! This layer performs no network I/O. Builders return inert operation
//! descriptors ([`QueryOperation`](crate::query::QueryOperation),
//! [`V2Operation`](crate::v2::V2Operation)); a transport component, which
//! owns signing, retries and connection management, executes them and
//! hands back a [`RawResponse`]. The [`Transport`] trait is the seam where
//! that component plugs in.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────┐
//! │  Operation builders  │  - parameter flattening, member.N indexing
//! │  (query::*, v2::*)   │  - JSON body assembly, path encoding
//! └──────────┬───────────┘
//!            │ descriptor
//!            ▼
//! ┌──────────────────────┐
//! │      Transport       │  - SigV4 signing, HTTP, retries (external)
//! └──────────┬───────────┘
//!            │ RawResponse
//!            ▼
//! ┌──────────────────────┐
//! │   query::response    │  - XML decoding into typed results
//! └──────────────────────┘
//! ```

use async_trait::async_trait;
use http::StatusCode;

use crate::error::{SesError, SesResult};
use crate::query::QueryOperation;
use crate::v2::V2Operation;

/// Errors produced by transport implementations.
///
/// Transports have their own failure taxonomy (DNS, TLS, timeouts); this
/// layer treats them as opaque.
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

/// HTTP methods used by the SES v2 API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// GET request
    Get,
    /// POST request
    Post,
    /// PUT request
    Put,
    /// DELETE request
    Delete,
}

impl HttpMethod {
    /// The method as a wire-format string.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// A raw response handed back by the transport.
///
/// Carries exactly what response decoding needs: the status code and the
/// unparsed body bytes.
#[derive(Debug, Clone)]
pub struct RawResponse {
    status: StatusCode,
    body: Vec<u8>,
}

impl RawResponse {
    /// Create a response from a status code and body bytes.
    pub fn new(status: StatusCode, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// The HTTP status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The unparsed body bytes.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// The body as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns [`SesError::MalformedResponse`] if the body is not valid
    /// UTF-8.
    pub fn body_str(&self) -> SesResult<&str> {
        std::str::from_utf8(&self.body).map_err(|e| SesError::MalformedResponse {
            message: format!("response body is not valid UTF-8: {}", e),
        })
    }

    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// Trait for components that execute operation descriptors.
///
/// Implementations own endpoint resolution, SigV4 signing and the HTTP
/// round trip. Descriptors are consumed exactly once; nothing in them is
/// mutated by execution.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute a Query-protocol operation (form-encoded POST to `/`).
    async fn execute_query(
        &self,
        operation: &QueryOperation,
    ) -> Result<RawResponse, TransportError>;

    /// Execute a v2 operation (JSON request under `/v2/email`).
    async fn execute_v2(&self, operation: &V2Operation) -> Result<RawResponse, TransportError>;
}
