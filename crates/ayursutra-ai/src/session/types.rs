//! Session types and the awaiting-response guard.

use ayursutra_common::{EventBus, Message, MessageIdAllocator, SessionEvent};

use crate::classify::FailureKind;
use crate::token_tracker::TokenTracker;

/// Fixed texts that shape every conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Persona {
    /// First bot message of every freshly opened transcript.
    pub greeting: String,
    /// Persona and domain guidance prepended to each user message.
    pub preamble: String,
}

impl Persona {
    pub fn new(greeting: impl Into<String>, preamble: impl Into<String>) -> Self {
        Self {
            greeting: greeting.into(),
            preamble: preamble.into(),
        }
    }

    /// The single prompt sent for one user message.
    pub fn compose_prompt(&self, message: &str) -> String {
        format!("{}\n\nUser message: {}", self.preamble, message)
    }
}

/// What happened to a call to `submit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing was appended.
    Ignored(IgnoredReason),
    /// The service's reply was appended.
    Answered,
    /// An apology for the given failure was appended.
    Failed(FailureKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoredReason {
    /// Empty or whitespace-only input.
    Blank,
    /// A request is already outstanding.
    AwaitingResponse,
}

/// Mutable state behind the session lock.
#[derive(Debug)]
pub(super) struct SessionState {
    pub open: bool,
    pub pending_input: String,
    pub awaiting: bool,
    pub transcript: Vec<Message>,
    pub ids: MessageIdAllocator,
    pub tracker: TokenTracker,
}

impl SessionState {
    pub fn new(greeting: &str) -> Self {
        let mut state = Self {
            open: false,
            pending_input: String::new(),
            awaiting: false,
            transcript: Vec::new(),
            ids: MessageIdAllocator::new(),
            tracker: TokenTracker::new(),
        };
        state.seed(greeting);
        state
    }

    /// Replace the transcript with the greeting alone.
    pub fn seed(&mut self, greeting: &str) {
        self.ids.reset();
        self.transcript.clear();
        self.transcript
            .push(Message::bot(ayursutra_common::MessageId::GREETING, greeting));
    }
}

/// Guard that clears the awaiting flag on drop, so the gate is released
/// even if the submitting future is dropped mid-request.
pub(super) struct AwaitGuard<'a> {
    state: &'a std::sync::Mutex<SessionState>,
    events: &'a EventBus,
}

impl<'a> AwaitGuard<'a> {
    /// Must be created after `awaiting` was set, and never while the
    /// state lock is held by the caller at drop time.
    pub fn new(state: &'a std::sync::Mutex<SessionState>, events: &'a EventBus) -> Self {
        Self { state, events }
    }
}

impl Drop for AwaitGuard<'_> {
    fn drop(&mut self) {
        let mut state = self
            .state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        state.awaiting = false;
        drop(state);
        self.events.publish(SessionEvent::AwaitingChanged(false));
    }
}
