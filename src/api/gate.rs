//! Event gatekeeper: decides whether an inbound message deserves a reply.
//!
//! Checks run cheapest-first and short-circuit; a rejected event never
//! touches the cursor. The envelope-level checks (missing body, delivery
//! retry) live in the handler, before this module sees the event.

use tracing::{info, warn};

use crate::core::config::AppConfig;
use crate::core::cursor::ChannelCursor;
use crate::core::models::{AcceptedMessage, MessageEvent};

/// Why a message was dropped without a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// A trigger word is configured and the text does not contain it.
    MissingTrigger,
    /// The message was sent by a bot (including this one).
    BotAuthored,
    /// `event_ts` is not a parseable timestamp.
    InvalidTimestamp,
    /// The message is at or behind the channel's cursor.
    Stale,
}

#[derive(Debug)]
pub enum GateDecision {
    Accepted(AcceptedMessage),
    Rejected(RejectReason),
}

/// Run the gatekeeper checks in order: trigger word, bot author, timestamp
/// parse, staleness. Accepting advances the channel cursor to the event's
/// timestamp in the same locked step as the staleness comparison.
pub fn accept(config: &AppConfig, cursor: &ChannelCursor, event: &MessageEvent) -> GateDecision {
    if let Some(trigger) = &config.trigger_word {
        if !event.text.contains(trigger.as_str()) {
            return GateDecision::Rejected(RejectReason::MissingTrigger);
        }
    }

    if event.bot_id.is_some() {
        info!("Ignoring message from bot");
        return GateDecision::Rejected(RejectReason::BotAuthored);
    }

    let Ok(ts) = event.event_ts.parse::<f64>() else {
        warn!(event_ts = %event.event_ts, "Ignoring message with unparseable event_ts");
        return GateDecision::Rejected(RejectReason::InvalidTimestamp);
    };

    if !cursor.advance(&event.channel, ts) {
        info!("Ignoring duplicate or old message");
        return GateDecision::Rejected(RejectReason::Stale);
    }

    GateDecision::Accepted(AcceptedMessage {
        channel: event.channel.clone(),
        text: event.text.clone(),
        event_ts: event.event_ts.clone(),
        ts,
    })
}
