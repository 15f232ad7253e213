use std::collections::HashMap;
use std::sync::Mutex;

/// Last accepted event timestamp per channel.
///
/// Slack event timestamps increase monotonically within a channel, so a
/// message at or below the stored value has already been handled (or arrived
/// out of order) and must not get a second reply. The comparison and the
/// advance happen under one lock; overlapping deliveries of the same message
/// cannot both pass.
///
/// The map lives for the lifetime of the process only. A cold start forgets
/// it, which at worst re-answers one message after a redeploy.
#[derive(Debug, Default)]
pub struct ChannelCursor {
    last_seen: Mutex<HashMap<String, f64>>,
}

impl ChannelCursor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the cursor for `channel` to `ts` if `ts` is strictly newer.
    ///
    /// Returns `false` and leaves the cursor untouched when `ts` is a
    /// duplicate or older than the last accepted timestamp.
    pub fn advance(&self, channel: &str, ts: f64) -> bool {
        let mut last_seen = self.last_seen.lock().expect("cursor mutex poisoned");
        let current = last_seen.get(channel).copied().unwrap_or(0.0);
        if ts <= current {
            return false;
        }
        last_seen.insert(channel.to_string(), ts);
        true
    }

    /// The last accepted timestamp for `channel`, if any message was accepted.
    pub fn last_seen(&self, channel: &str) -> Option<f64> {
        self.last_seen
            .lock()
            .expect("cursor mutex poisoned")
            .get(channel)
            .copied()
    }
}
