//! API Lambda handler - the webhook pipeline from inbound event to posted
//! reply.
//!
//! This module handles:
//! - Envelope validation (body, delivery-retry marker)
//! - The Events API `url_verification` handshake
//! - Gatekeeping (delegated to the `gate` module)
//! - The reply pipeline: token fetch, optional retrieval, generation, notify

use lambda_runtime::{Error, LambdaEvent};
use once_cell::sync::Lazy;
use serde_json::Value;
use tracing::{error, info};

use super::{gate, helpers, parsing};
use crate::ai::{ReplyGenerator, retrieve_context};
use crate::core::config::AppConfig;
use crate::core::cursor::ChannelCursor;
use crate::core::models::OutboundMessage;
use crate::core::secrets;
use crate::slack;

pub use self::function_handler as handler;

/// Per-channel dedup state for the lifetime of this process.
static CURSOR: Lazy<ChannelCursor> = Lazy::new(ChannelCursor::new);

/// Lambda handler for the API entrypoint.
///
/// # Errors
///
/// Returns an error when configuration is unusable or a fatal pipeline stage
/// (secret fetch, retrieval, generation) fails; the platform surfaces those
/// as an unhandled invocation error. Everything else maps to a JSON response
/// payload.
#[tracing::instrument(level = "info", skip(event))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;

    handle_request(&config, &CURSOR, &event.payload).await
}

/// Process one webhook envelope. Split out from the Lambda wrapper so tests
/// can drive it with their own config and cursor.
pub async fn handle_request(
    config: &AppConfig,
    cursor: &ChannelCursor,
    payload: &Value,
) -> Result<Value, Error> {
    // ========================================================================
    // Envelope checks: body present, not a platform redelivery
    // ========================================================================

    let body_str = match parsing::extract_body(payload) {
        Ok(b) => b,
        Err(response) => {
            error!("Event does not contain body");
            return Ok(response);
        }
    };
    info!(body = %body_str, "Received Slack event");

    if parsing::is_retry_delivery(payload) {
        // Slack re-sends events it considers unacknowledged; answering 200
        // without acting is what stops the redelivery loop.
        info!("Ignoring Slack delivery retry");
        return Ok(helpers::ok_status());
    }

    let body: Value = match serde_json::from_str(body_str) {
        Ok(v) => v,
        Err(e) => {
            error!("Failed to parse event body: {}", e);
            return Ok(helpers::bad_request());
        }
    };

    // ========================================================================
    // Events API URL verification handshake
    // ========================================================================

    if body.get("type").and_then(|t| t.as_str()) == Some("url_verification") {
        let challenge = body.get("challenge").and_then(|c| c.as_str()).unwrap_or("");
        return Ok(helpers::challenge_response(challenge));
    }

    // ========================================================================
    // Gatekeeper
    // ========================================================================

    let event = match parsing::parse_message_event(&body) {
        Ok(event) => event,
        Err(e) => {
            error!("Malformed event payload: {}", e);
            return Ok(helpers::bad_request());
        }
    };

    let accepted = match gate::accept(config, cursor, &event) {
        gate::GateDecision::Accepted(msg) => msg,
        gate::GateDecision::Rejected(reason) => {
            info!(?reason, "Message filtered");
            return Ok(helpers::ok_status());
        }
    };

    // ========================================================================
    // Reply pipeline: token, optional retrieval, generation, notify
    // ========================================================================

    let token = secrets::fetch_bot_token(&config.token_parameter).await?;

    let context = match &config.knowledge_base_id {
        Some(kb_id) => Some(retrieve_context(kb_id, &accepted.text).await?),
        None => None,
    };

    let generator = ReplyGenerator::from_config(config);
    let reply = generator.generate(&accepted.text, context.as_deref()).await?;

    let outbound = OutboundMessage {
        channel: accepted.channel.clone(),
        text: reply,
        thread_ts: config.thread_reply.then(|| accepted.event_ts.clone()),
    };

    // Notify failures are logged and swallowed: reporting anything but
    // success here would make Slack re-deliver the event, and retries are
    // filtered out above anyway.
    if let Err(e) = slack::post_message(&token, &outbound).await {
        error!("Failed to post reply: {}", e);
    }

    Ok(helpers::ok_status())
}
