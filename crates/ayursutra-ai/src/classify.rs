//! Maps completion failures to the fixed apologies shown in the transcript.
//!
//! Malformed responses land in the same bucket as network failures; users
//! see one "trouble connecting" message for both.

use crate::AiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// 401/403: the key was rejected.
    Auth,
    /// 429.
    RateLimited,
    /// Any 5xx.
    ServiceUnavailable,
    /// Everything else: transport errors, timeouts, other statuses, bad bodies.
    Connectivity,
}

impl FailureKind {
    pub fn apology(self) -> &'static str {
        match self {
            FailureKind::Auth => {
                "I'm sorry, there seems to be an authentication issue. Please check the API configuration."
            }
            FailureKind::RateLimited => {
                "I'm receiving too many requests right now. Please wait a moment and try again."
            }
            FailureKind::ServiceUnavailable => {
                "The AI service is temporarily unavailable. Please try again in a few moments."
            }
            FailureKind::Connectivity => {
                "I'm sorry, I'm having trouble connecting to the server. Please try again later."
            }
        }
    }
}

/// Classify an HTTP status, or the absence of one.
pub fn classify_status(status: Option<u16>) -> FailureKind {
    match status {
        Some(401 | 403) => FailureKind::Auth,
        Some(429) => FailureKind::RateLimited,
        Some(500..=599) => FailureKind::ServiceUnavailable,
        _ => FailureKind::Connectivity,
    }
}

pub fn classify(err: &AiError) -> FailureKind {
    classify_status(err.status())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status: u16) -> AiError {
        AiError::Http {
            status,
            body: String::new(),
        }
    }

    #[test]
    fn forbidden_is_auth() {
        assert_eq!(classify(&http(403)), FailureKind::Auth);
        assert_eq!(classify(&http(401)), FailureKind::Auth);
        assert!(classify(&http(403)).apology().contains("authentication issue"));
    }

    #[test]
    fn too_many_requests_is_rate_limited() {
        assert_eq!(classify(&http(429)), FailureKind::RateLimited);
        assert!(classify(&http(429)).apology().contains("too many requests"));
    }

    #[test]
    fn server_errors_are_unavailable() {
        for status in [500, 502, 503, 504, 599] {
            assert_eq!(classify(&http(status)), FailureKind::ServiceUnavailable);
        }
        assert!(FailureKind::ServiceUnavailable
            .apology()
            .contains("temporarily unavailable"));
    }

    #[test]
    fn other_statuses_are_connectivity() {
        for status in [400, 404, 418, 600] {
            assert_eq!(classify(&http(status)), FailureKind::Connectivity);
        }
    }

    #[test]
    fn transport_and_decode_failures_are_connectivity() {
        assert_eq!(
            classify(&AiError::Network("connection refused".into())),
            FailureKind::Connectivity
        );
        assert_eq!(classify(&AiError::Timeout), FailureKind::Connectivity);
        assert_eq!(
            classify(&AiError::Decode("missing candidates".into())),
            FailureKind::Connectivity
        );
        assert!(FailureKind::Connectivity
            .apology()
            .contains("trouble connecting"));
    }

    #[test]
    fn apologies_are_distinct() {
        let all = [
            FailureKind::Auth,
            FailureKind::RateLimited,
            FailureKind::ServiceUnavailable,
            FailureKind::Connectivity,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.apology(), b.apology());
            }
        }
    }
}
