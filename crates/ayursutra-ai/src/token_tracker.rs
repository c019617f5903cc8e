//! Token usage tracking for a chat session.

use crate::TokenUsage;

/// Tracks cumulative token usage and call outcomes.
#[derive(Debug, Clone, Default)]
pub struct TokenTracker {
    /// Total usage across all successful calls.
    total: TokenUsage,
    /// Number of completion calls issued.
    call_count: u64,
    /// Number of calls that ended in a classified failure.
    failure_count: u64,
}

impl TokenTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record token usage from a successful call.
    pub fn record(&mut self, usage: &TokenUsage) {
        self.total.input_tokens = self.total.input_tokens.saturating_add(usage.input_tokens);
        self.total.output_tokens = self.total.output_tokens.saturating_add(usage.output_tokens);
        self.call_count += 1;
    }

    /// Record a call that produced no completion.
    pub fn record_failure(&mut self) {
        self.call_count += 1;
        self.failure_count += 1;
    }

    /// Get total token usage.
    pub fn total(&self) -> &TokenUsage {
        &self.total
    }

    /// Get total tokens (input + output).
    pub fn total_tokens(&self) -> u64 {
        self.total.total_tokens()
    }

    /// Get number of completion calls.
    pub fn call_count(&self) -> u64 {
        self.call_count
    }

    pub fn failure_count(&self) -> u64 {
        self.failure_count
    }

    /// Reset all counters.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_usage() {
        let mut tracker = TokenTracker::new();
        tracker.record(&TokenUsage {
            input_tokens: 120,
            output_tokens: 30,
        });
        tracker.record(&TokenUsage {
            input_tokens: 80,
            output_tokens: 20,
        });
        assert_eq!(tracker.total().input_tokens, 200);
        assert_eq!(tracker.total().output_tokens, 50);
        assert_eq!(tracker.total_tokens(), 250);
        assert_eq!(tracker.call_count(), 2);
        assert_eq!(tracker.failure_count(), 0);
    }

    #[test]
    fn failures_count_as_calls() {
        let mut tracker = TokenTracker::new();
        tracker.record_failure();
        tracker.record(&TokenUsage::default());
        assert_eq!(tracker.call_count(), 2);
        assert_eq!(tracker.failure_count(), 1);
        assert_eq!(tracker.total_tokens(), 0);
    }

    #[test]
    fn reset_clears_everything() {
        let mut tracker = TokenTracker::new();
        tracker.record(&TokenUsage {
            input_tokens: 1,
            output_tokens: 1,
        });
        tracker.record_failure();
        tracker.reset();
        assert_eq!(tracker.call_count(), 0);
        assert_eq!(tracker.failure_count(), 0);
        assert_eq!(tracker.total_tokens(), 0);
    }
}
