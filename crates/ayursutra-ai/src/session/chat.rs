//! Submission: the single request/response cycle of a chat session.

use ayursutra_common::{Message, SessionEvent};
use tracing::{debug, warn};

use crate::classify::classify;

use super::manager::ChatSession;
use super::types::{AwaitGuard, IgnoredReason, SubmitOutcome};

impl ChatSession {
    /// Submit one user message and wait for the bot's reply.
    ///
    /// Blank input, or input arriving while a request is outstanding, is
    /// ignored. Otherwise exactly one user message and then exactly one bot
    /// message (the reply or an apology) are appended. Failures are never
    /// returned as errors.
    pub async fn submit(&self, text: &str) -> SubmitOutcome {
        let text = text.trim();
        if text.is_empty() {
            return SubmitOutcome::Ignored(IgnoredReason::Blank);
        }

        let user_message = {
            let mut state = self.lock();
            if state.awaiting {
                debug!("submission ignored, awaiting response");
                return SubmitOutcome::Ignored(IgnoredReason::AwaitingResponse);
            }
            state.awaiting = true;
            let message = Message::user(state.ids.next(), text);
            state.transcript.push(message.clone());
            state.pending_input.clear();
            message
        };
        let _guard = AwaitGuard::new(&self.inner.state, &self.inner.events);

        self.inner
            .events
            .publish(SessionEvent::MessageAppended(user_message));
        self.inner.events.publish(SessionEvent::AwaitingChanged(true));

        let prompt = self.inner.persona.compose_prompt(text);
        let (reply, outcome) = match self.inner.service.complete(&prompt).await {
            Ok(completion) => {
                self.lock().tracker.record(&completion.usage);
                (completion.text, SubmitOutcome::Answered)
            }
            Err(e) => {
                let kind = classify(&e);
                warn!(kind = ?kind, error = %e, "completion request failed");
                self.lock().tracker.record_failure();
                (kind.apology().to_string(), SubmitOutcome::Failed(kind))
            }
        };

        self.append_reply(reply);
        outcome
    }

    /// Submit the current draft input.
    pub async fn submit_pending(&self) -> SubmitOutcome {
        let draft = self.pending_input();
        self.submit(&draft).await
    }

    /// Append a bot reply to whatever transcript is current. After a
    /// close and reopen that is the fresh one, after its greeting.
    fn append_reply(&self, text: String) {
        let mut state = self.lock();
        let message = Message::bot(state.ids.next(), text);
        state.transcript.push(message.clone());
        drop(state);

        self.inner
            .events
            .publish(SessionEvent::MessageAppended(message));
    }
}
