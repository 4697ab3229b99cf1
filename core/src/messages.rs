//! Message sink collaborator.
//!
//! Every client operation reports its outcome as one human-readable line
//! through a [`MessageSink`]. The sink is a side channel — nothing in the
//! return values depends on it. [`MessageLog`] is the shipped in-memory
//! implementation; tests read it back to assert on operation outcomes.

use std::sync::{Mutex, PoisonError};

/// Receiver for one unstructured log line per completed operation.
///
/// No severity levels, no structured fields. Implementations must tolerate
/// calls from multiple tasks; the client imposes no ordering between lines
/// appended by concurrent callers.
pub trait MessageSink: Send + Sync {
    fn add(&self, message: String);
}

/// Append-only in-memory message log.
#[derive(Debug, Default)]
pub struct MessageLog {
    messages: Mutex<Vec<String>>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all messages recorded so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn clear(&self) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl MessageSink for MessageLog {
    fn add(&self, message: String) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_appended_in_order() {
        let log = MessageLog::new();
        log.add("first".to_string());
        log.add("second".to_string());
        assert_eq!(log.messages(), vec!["first", "second"]);
    }

    #[test]
    fn clear_empties_the_log() {
        let log = MessageLog::new();
        log.add("one".to_string());
        log.clear();
        assert!(log.messages().is_empty());
    }
}
