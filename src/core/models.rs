use serde::{Deserialize, Serialize};

/// Fields consumed from the `event` object of a Slack Events API callback.
///
/// `event_ts` stays a string here; it doubles as the thread anchor when
/// replying, and only the gatekeeper interprets it as an ordering token.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageEvent {
    pub channel: String,
    pub text: String,
    pub event_ts: String,
    #[serde(default)]
    pub bot_id: Option<String>,
}

/// A message that passed every gatekeeper check. The cursor has already been
/// advanced past `ts` by the time one of these exists.
#[derive(Debug, Clone)]
pub struct AcceptedMessage {
    pub channel: String,
    pub text: String,
    pub event_ts: String,
    /// `event_ts` parsed as the per-channel ordering token.
    pub ts: f64,
}

/// Serializes directly as the `chat.postMessage` request body.
#[derive(Debug, Clone, Serialize)]
pub struct OutboundMessage {
    pub channel: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_ts: Option<String>,
}
