use momonga::api::parsing::{
    RETRY_HEADER, extract_body, get_header_value, is_retry_delivery, parse_message_event,
};
use momonga::errors::BotError;
use serde_json::json;

/// Tests for Lambda envelope parsing: body extraction and the
/// delivery-retry header check.

#[test]
fn test_extract_body_success() {
    let payload = json!({ "body": "{\"type\":\"event_callback\"}" });

    let body = extract_body(&payload).expect("body should be extracted");
    assert_eq!(body, "{\"type\":\"event_callback\"}");
}

#[test]
fn test_extract_body_missing() {
    // An envelope without a body maps to the 400 response
    let payload = json!({ "headers": {} });

    let err = extract_body(&payload).expect_err("missing body should be an error");
    assert_eq!(err.get("statusCode").and_then(|v| v.as_i64()), Some(400));
    assert_eq!(err.get("body").and_then(|v| v.as_str()), Some("Bad Request"));
}

#[test]
fn test_extract_body_not_a_string() {
    // API Gateway always delivers the body as a string; anything else is malformed
    let payload = json!({ "body": { "nested": "object" } });

    let err = extract_body(&payload).expect_err("non-string body should be an error");
    assert_eq!(err.get("statusCode").and_then(|v| v.as_i64()), Some(400));
}

#[test]
fn test_get_header_value_exact_case() {
    let headers = json!({ "X-Slack-Retry-Num": "1" });
    assert_eq!(get_header_value(&headers, RETRY_HEADER), Some("1"));
}

#[test]
fn test_get_header_value_case_insensitive() {
    // API Gateway v2 lowercases header names
    let headers = json!({ "x-slack-retry-num": "2" });
    assert_eq!(get_header_value(&headers, RETRY_HEADER), Some("2"));
}

#[test]
fn test_get_header_value_absent() {
    let headers = json!({ "Content-Type": "application/json" });
    assert_eq!(get_header_value(&headers, RETRY_HEADER), None);
}

#[test]
fn test_parse_message_event_success() {
    let body = json!({
        "type": "event_callback",
        "event": {
            "channel": "C1",
            "text": "モモンガくん 元気?",
            "event_ts": "100.0"
        }
    });

    let event = parse_message_event(&body).expect("event should parse");
    assert_eq!(event.channel, "C1");
    assert_eq!(event.event_ts, "100.0");
}

#[test]
fn test_parse_message_event_missing_event_object() {
    let body = json!({ "type": "event_callback" });

    let err = parse_message_event(&body).expect_err("missing event should fail");
    assert!(matches!(err, BotError::Parse(_)));
}

#[test]
fn test_parse_message_event_missing_fields() {
    // A channel_joined-style event without text or event_ts is not a
    // message we can reply to
    let body = json!({
        "type": "event_callback",
        "event": { "channel": "C1" }
    });

    let err = parse_message_event(&body).expect_err("incomplete event should fail");
    assert!(matches!(err, BotError::Parse(_)));
}

#[test]
fn test_is_retry_delivery() {
    let retry = json!({
        "headers": { "X-Slack-Retry-Num": "1" },
        "body": "{}"
    });
    assert!(is_retry_delivery(&retry));

    let first_delivery = json!({
        "headers": { "Content-Type": "application/json" },
        "body": "{}"
    });
    assert!(!is_retry_delivery(&first_delivery));

    // No headers at all means no retry marker
    let no_headers = json!({ "body": "{}" });
    assert!(!is_retry_delivery(&no_headers));
}
