//! Outbound Slack messaging via `chat.postMessage`.
//!
//! The caller decides what a failure means. The handler logs and swallows
//! notify errors so Slack never re-delivers the originating event over a
//! failed reply.

use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::info;

use crate::core::models::OutboundMessage;
use crate::errors::BotError;

const POST_MESSAGE_URL: &str = "https://slack.com/api/chat.postMessage";

static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .expect("Failed to create HTTP client")
});

/// `chat.postMessage` response envelope. Slack reports API-level failures as
/// HTTP 200 with `ok: false`.
#[derive(Debug, Deserialize)]
struct PostMessageResponse {
    ok: bool,
    error: Option<String>,
}

/// Post a message to a channel, optionally as a threaded reply.
///
/// # Errors
///
/// Returns `BotError::Http` on transport errors, non-2xx responses, or an
/// `ok: false` Slack envelope.
pub async fn post_message(token: &str, message: &OutboundMessage) -> Result<(), BotError> {
    let resp = HTTP_CLIENT
        .post(POST_MESSAGE_URL)
        .bearer_auth(token)
        .json(message)
        .send()
        .await?;

    let status = resp.status();
    if !status.is_success() {
        let body_text = resp
            .text()
            .await
            .unwrap_or_else(|_| "<failed to read body>".to_string());
        return Err(BotError::Http(format!(
            "chat.postMessage failed: status={status} body={body_text}"
        )));
    }

    let envelope: PostMessageResponse = resp.json().await?;
    if !envelope.ok {
        return Err(BotError::Http(format!(
            "chat.postMessage rejected: {}",
            envelope.error.as_deref().unwrap_or("unknown error")
        )));
    }

    info!(channel = %message.channel, "Posted reply to Slack");
    Ok(())
}
