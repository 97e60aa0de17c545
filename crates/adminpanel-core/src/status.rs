//! Transient status line shown after an action completes.

use serde::Serialize;
use std::time::Duration;
use tokio::time::Instant;

/// Whether a status reports success or failure.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Success,
    Error,
}

/// A message for the operator.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub tone: Tone,
}

impl StatusMessage {
    pub const fn is_error(&self) -> bool {
        matches!(self.tone, Tone::Error)
    }
}

/// Holds at most one status message.
///
/// With a TTL the message expires on its own; without one it stays until the
/// next action replaces it. Expiry is evaluated lazily on read.
#[derive(Debug, Clone, Default)]
pub struct StatusSlot {
    current: Option<(StatusMessage, Instant)>,
    ttl: Option<Duration>,
}

impl StatusSlot {
    /// Messages persist until replaced.
    pub const fn persistent() -> Self {
        Self { current: None, ttl: None }
    }

    /// Messages clear themselves `ttl` after being set.
    pub const fn expiring(ttl: Duration) -> Self {
        Self { current: None, ttl: Some(ttl) }
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.set(StatusMessage { text: text.into(), tone: Tone::Success });
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.set(StatusMessage { text: text.into(), tone: Tone::Error });
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    /// The live message, if any.
    pub fn current(&self) -> Option<&StatusMessage> {
        let (message, set_at) = self.current.as_ref()?;
        match self.ttl {
            Some(ttl) if set_at.elapsed() >= ttl => None,
            _ => Some(message),
        }
    }

    fn set(&mut self, message: StatusMessage) {
        self.current = Some((message, Instant::now()));
    }
}
