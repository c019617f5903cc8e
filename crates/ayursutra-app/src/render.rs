//! Plain-text rendering of transcript entries and usage.

use ayursutra_ai::TokenTracker;
use ayursutra_common::{Message, Sender};
use chrono::Local;

/// `[14:05] AyurSutra Assistant: text`
pub fn message_line(message: &Message, bot_name: &str) -> String {
    let who = match message.sender {
        Sender::User => "You",
        Sender::Bot => bot_name,
    };
    let time = message.timestamp.with_timezone(&Local).format("%H:%M");
    format!("[{time}] {who}: {}", message.text)
}

pub fn usage_line(usage: &TokenTracker) -> String {
    format!(
        "{} request(s), {} failed, {} tokens ({} in / {} out)",
        usage.call_count(),
        usage.failure_count(),
        usage.total_tokens(),
        usage.total().input_tokens,
        usage.total().output_tokens
    )
}
