//! Chat session management.
//!
//! A `ChatSession` owns the transcript shown in the chat panel, the draft
//! input, and the awaiting-response gate. It drives one completion request
//! per accepted submission and turns failures into apology messages.

mod chat;
mod manager;
mod types;


pub use manager::ChatSession;
pub use types::{IgnoredReason, Persona, SubmitOutcome};
