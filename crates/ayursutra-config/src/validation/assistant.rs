//! Validation for the `[assistant]` section.

use crate::schema::AyurConfig;

use super::helpers::{validate_not_blank, validate_range, validate_range_f64};

pub(crate) fn validate_assistant(errors: &mut Vec<String>, config: &AyurConfig) {
    let a = &config.assistant;

    validate_not_blank(errors, "assistant.model", &a.model);
    if !(a.api_base.starts_with("https://") || a.api_base.starts_with("http://")) {
        errors.push(format!(
            "assistant.api_base = {:?} must be an http(s) URL",
            a.api_base
        ));
    }

    validate_range_f64(errors, "assistant.temperature", a.temperature, 0.0, 2.0);
    validate_range(errors, "assistant.top_k", a.top_k, 1, 100);
    validate_range_f64(errors, "assistant.top_p", a.top_p, 0.0, 1.0);
    validate_range(
        errors,
        "assistant.max_output_tokens",
        a.max_output_tokens,
        1,
        8192,
    );
    validate_range(errors, "assistant.connect_timeout", a.connect_timeout, 1, 60);
    validate_range(errors, "assistant.request_timeout", a.request_timeout, 1, 600);
}
