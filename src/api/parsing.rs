use serde_json::Value;

use crate::core::models::MessageEvent;
use crate::errors::BotError;

/// Header Slack sets when re-delivering an event it considers unacknowledged.
pub const RETRY_HEADER: &str = "X-Slack-Retry-Num";

/// Extract the webhook body from the Lambda envelope.
///
/// # Errors
///
/// Returns the 400 response payload to send back when the body is missing or
/// not a string.
pub fn extract_body(payload: &Value) -> Result<&str, Value> {
    let Some(body) = payload.get("body") else {
        return Err(super::helpers::bad_request());
    };

    let Some(body_str) = body.as_str() else {
        return Err(super::helpers::bad_request());
    };

    Ok(body_str)
}

/// Case-insensitive header lookup; API Gateway does not normalize casing.
pub fn get_header_value<'a>(headers: &'a Value, name: &str) -> Option<&'a str> {
    if let Some(v) = headers.get(name).and_then(|s| s.as_str()) {
        return Some(v);
    }
    headers.as_object().and_then(|map| {
        map.iter().find_map(|(k, v)| {
            if k.eq_ignore_ascii_case(name) {
                v.as_str()
            } else {
                None
            }
        })
    })
}

/// Whether the envelope carries Slack's delivery-retry marker.
pub fn is_retry_delivery(payload: &Value) -> bool {
    payload
        .get("headers")
        .and_then(|headers| get_header_value(headers, RETRY_HEADER))
        .is_some()
}

/// Pull the message event out of a decoded `event_callback` body.
///
/// # Errors
///
/// Returns `BotError::Parse` when the `event` object is absent or missing the
/// consumed fields.
pub fn parse_message_event(body: &Value) -> Result<MessageEvent, BotError> {
    let event = body
        .get("event")
        .ok_or_else(|| BotError::Parse("missing event object".to_string()))?;
    serde_json::from_value(event.clone()).map_err(BotError::from)
}
