//! ChatSession struct, open/close lifecycle, and read accessors.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use ayursutra_common::{EventBus, Message, SessionEvent};
use tokio::sync::broadcast;
use tracing::debug;

use crate::token_tracker::TokenTracker;
use crate::CompletionService;

use super::types::{Persona, SessionState};

/// Chat session behind the assistant panel.
///
/// Cloning yields another handle to the same session, so a front-end can
/// close the panel while a submission is still awaiting its reply.
#[derive(Clone)]
pub struct ChatSession {
    pub(super) inner: Arc<Inner>,
}

pub(super) struct Inner {
    pub service: Arc<dyn CompletionService>,
    pub persona: Persona,
    pub state: Mutex<SessionState>,
    pub events: EventBus,
}

impl ChatSession {
    /// Create the session for a freshly mounted widget: closed, with the
    /// greeting already seeded.
    pub fn new(service: Arc<dyn CompletionService>, persona: Persona) -> Self {
        Self::with_event_bus(service, persona, EventBus::default())
    }

    pub fn with_event_bus(
        service: Arc<dyn CompletionService>,
        persona: Persona,
        events: EventBus,
    ) -> Self {
        let state = SessionState::new(&persona.greeting);
        Self {
            inner: Arc::new(Inner {
                service,
                persona,
                state: Mutex::new(state),
                events,
            }),
        }
    }

    pub(super) fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.inner
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Open the panel. A closed -> open transition starts a fresh
    /// transcript and clears the draft.
    pub fn open(&self) {
        let mut state = self.lock();
        if state.open {
            return;
        }
        state.open = true;
        state.pending_input.clear();
        state.seed(&self.inner.persona.greeting);
        let greeting = state.transcript[0].clone();
        drop(state);

        debug!("chat session opened");
        self.inner.events.publish(SessionEvent::Opened);
        self.inner
            .events
            .publish(SessionEvent::MessageAppended(greeting));
    }

    /// Close the panel. Transcript and draft stay until the next open.
    pub fn close(&self) {
        let mut state = self.lock();
        if !state.open {
            return;
        }
        state.open = false;
        drop(state);

        debug!("chat session closed");
        self.inner.events.publish(SessionEvent::Closed);
    }

    pub fn toggle(&self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn is_open(&self) -> bool {
        self.lock().open
    }

    pub fn is_awaiting_response(&self) -> bool {
        self.lock().awaiting
    }

    pub fn pending_input(&self) -> String {
        self.lock().pending_input.clone()
    }

    /// Replace the draft input.
    pub fn set_pending_input(&self, text: impl Into<String>) {
        self.lock().pending_input = text.into();
    }

    /// Snapshot of the transcript, oldest first.
    pub fn transcript(&self) -> Vec<Message> {
        self.lock().transcript.clone()
    }

    pub fn transcript_len(&self) -> usize {
        self.lock().transcript.len()
    }

    /// Snapshot of token usage across the session's lifetime.
    pub fn usage(&self) -> TokenTracker {
        self.lock().tracker.clone()
    }

    pub fn persona(&self) -> &Persona {
        &self.inner.persona
    }

    /// Subscribe to session events. Dropping the receiver unsubscribes.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.inner.events.subscribe()
    }
}
