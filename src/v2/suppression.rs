//! Account-level suppression list operations for the v2 protocol.

use serde::{Deserialize, Serialize};

use super::{encode_path_segment, V2Operation};
use crate::http::HttpMethod;

/// Why an address is on the suppression list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SuppressionListReason {
    /// The address hard-bounced.
    Bounce,
    /// The recipient complained.
    Complaint,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct PutSuppressedDestinationRequest<'a> {
    email_address: &'a str,
    reason: SuppressionListReason,
}

/// Build a `PutSuppressedDestination` operation.
pub fn put_suppressed_destination(
    email_address: &str,
    reason: SuppressionListReason,
) -> V2Operation {
    V2Operation::new(HttpMethod::Put, "/v2/email/suppression/addresses").with_json(
        &PutSuppressedDestinationRequest {
            email_address,
            reason,
        },
    )
}

/// Build a `DeleteSuppressedDestination` operation.
pub fn delete_suppressed_destination(email_address: &str) -> V2Operation {
    V2Operation::new(
        HttpMethod::Delete,
        format!(
            "/v2/email/suppression/addresses/{}",
            encode_path_segment(email_address)
        ),
    )
}
