//! Operation builders for the JSON-based v2 protocol.
//!
//! v2 operations are REST-ish: an HTTP method, a path under `/v2/email`
//! with identifiers interpolated (and percent-encoded) into it, and an
//! optional JSON body with absent fields pruned. Builders return an inert
//! [`V2Operation`]; response bodies are generic JSON and are handed back
//! to the caller undecoded, so no parser reference travels with the
//! descriptor.

pub mod contacts;
pub mod custom_verification;
pub mod emails;
pub mod import_jobs;
pub mod suppression;
pub mod templates;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;
use serde_json::Value;
use tracing::trace;

use crate::http::HttpMethod;

/// Characters escaped in user-supplied path segments and query values.
///
/// Everything outside the RFC 3986 unreserved set is encoded; `@` and `+`
/// in email addresses must not survive literally, or signed paths break.
const STRICT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// A built v2 operation.
///
/// Inert data: method, path (a literal query string included when the
/// operation paginates) and an optional pruned JSON body. Constructed
/// once, never mutated, consumed once by the transport.
#[derive(Debug, Clone)]
pub struct V2Operation {
    method: HttpMethod,
    path: String,
    body: Option<Value>,
}

impl V2Operation {
    pub(crate) fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        let path = path.into();
        trace!(method = method.as_str(), path = path.as_str(), "built v2 operation");
        Self {
            method,
            path,
            body: None,
        }
    }

    pub(crate) fn with_json<T: Serialize>(mut self, body: &T) -> Self {
        let tree =
            serde_json::to_value(body).expect("wire types serialize to JSON infallibly");
        self.body = Some(prune_nulls(tree));
        self
    }

    /// The HTTP method.
    pub fn method(&self) -> HttpMethod {
        self.method
    }

    /// The request path, query string included when present.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The JSON body, with all absent fields pruned.
    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }
}

/// Remove every null-valued entry from a JSON tree, recursively.
///
/// The typed request structs already skip absent options, but bodies can
/// embed caller-supplied JSON; nulls anywhere would reach the wire as
/// explicit fields the service treats as present.
fn prune_nulls(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k, prune_nulls(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(prune_nulls).collect()),
        other => other,
    }
}

/// Percent-encode a user-supplied value for use as a path segment.
pub(crate) fn encode_path_segment(segment: &str) -> String {
    utf8_percent_encode(segment, STRICT_ENCODE_SET).to_string()
}

/// Pagination options shared by the v2 listing operations.
#[derive(Debug, Clone, Default)]
pub struct PageOpts {
    /// Continuation token from a previous page.
    pub next_token: Option<String>,
    /// Maximum number of results per page.
    pub page_size: Option<u32>,
}

/// Append a literal query string built from the present pagination
/// options, in fixed `NextToken`, `PageSize` order.
pub(crate) fn paginate(path: &str, opts: &PageOpts) -> String {
    let mut pairs: Vec<String> = Vec::new();
    if let Some(token) = &opts.next_token {
        pairs.push(format!("NextToken={}", encode_path_segment(token)));
    }
    if let Some(size) = opts.page_size {
        pairs.push(format!("PageSize={}", size));
    }
    if pairs.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, pairs.join("&"))
    }
}
