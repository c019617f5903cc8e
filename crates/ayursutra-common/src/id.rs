use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a message within a transcript.
///
/// Ids are strictly increasing within one transcript. They are derived from
/// the wall clock in milliseconds, so they also sort by creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MessageId(pub u64);

impl MessageId {
    /// Id reserved for the seeded greeting.
    pub const GREETING: MessageId = MessageId(1);

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "msg-{}", self.0)
    }
}

/// Hands out monotonic message ids.
///
/// A candidate id that is not strictly greater than the last one issued is
/// bumped to `last + 1`.
#[derive(Debug, Clone)]
pub struct MessageIdAllocator {
    last: u64,
}

impl MessageIdAllocator {
    /// Start after the greeting id.
    pub fn new() -> Self {
        Self {
            last: MessageId::GREETING.0,
        }
    }

    /// Allocate an id from the current wall clock.
    pub fn next(&mut self) -> MessageId {
        let now_ms = chrono::Utc::now().timestamp_millis().max(0) as u64;
        self.next_at(now_ms)
    }

    /// Allocate an id for a given millisecond timestamp.
    pub fn next_at(&mut self, now_ms: u64) -> MessageId {
        let id = if now_ms > self.last {
            now_ms
        } else {
            self.last.saturating_add(1)
        };
        self.last = id;
        MessageId(id)
    }

    /// Forget everything issued so far; the next id follows the greeting.
    pub fn reset(&mut self) {
        self.last = MessageId::GREETING.0;
    }

    pub fn last(&self) -> MessageId {
        MessageId(self.last)
    }
}

impl Default for MessageIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
