//! Response builders for the Lambda proxy contract.

use serde_json::{Value, json};

/// Returns a 200 OK response with no body.
///
/// Duplicate deliveries, filtered messages, and fully processed messages all
/// answer with this shape; anything else invites Slack to re-deliver.
#[must_use]
pub fn ok_status() -> Value {
    json!({ "statusCode": 200 })
}

/// Returns the 400 response for envelopes with no usable body.
#[must_use]
pub fn bad_request() -> Value {
    json!({ "statusCode": 400, "body": "Bad Request" })
}

/// Echoes the Events API `url_verification` challenge.
#[must_use]
pub fn challenge_response(challenge: &str) -> Value {
    json!({ "statusCode": 200, "body": challenge })
}
