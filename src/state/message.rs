//! Shared transient message region (info/success/error toast).
//!
//! DESIGN
//! ======
//! Every `show` bumps a sequence number. The hide timer captures the sequence
//! it was scheduled for and only clears that message, so a replacement message
//! is never cut short by the previous message's timer.

#[cfg(test)]
#[path = "message_test.rs"]
mod message_test;

use std::time::Duration;

/// How long a transient message stays visible.
pub const MESSAGE_TTL: Duration = Duration::from_secs(4);

/// Classification of a transient message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MessageKind {
    #[default]
    Info,
    Success,
    Error,
}

impl MessageKind {
    /// CSS modifier class for this kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// A message currently on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransientMessage {
    pub kind: MessageKind,
    pub text: String,
    pub seq: u64,
}

#[derive(Clone, Debug, Default)]
pub struct MessageState {
    pub current: Option<TransientMessage>,
    last_seq: u64,
}

impl MessageState {
    /// Replace whatever is showing and return the sequence number the hide
    /// timer must pass to [`MessageState::expire`].
    pub fn show(&mut self, kind: MessageKind, text: impl Into<String>) -> u64 {
        self.last_seq += 1;
        self.current = Some(TransientMessage {
            kind,
            text: text.into(),
            seq: self.last_seq,
        });
        self.last_seq
    }

    /// Hide the message shown under `seq`. Returns `false` if it was already
    /// replaced or hidden.
    pub fn expire(&mut self, seq: u64) -> bool {
        if self.current.as_ref().is_some_and(|m| m.seq == seq) {
            self.current = None;
            return true;
        }
        false
    }

    /// Class list for the message region: `message {kind}` or `message hidden`.
    #[must_use]
    pub fn class(&self) -> String {
        match &self.current {
            Some(message) => format!("message {}", message.kind.as_str()),
            None => "message hidden".to_owned(),
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        self.current.as_ref().map_or("", |m| m.text.as_str())
    }
}
