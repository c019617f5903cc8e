//! Validation for the `[persona]` section.

use crate::schema::AyurConfig;

use super::helpers::validate_not_blank;

pub(crate) fn validate_persona(errors: &mut Vec<String>, config: &AyurConfig) {
    validate_not_blank(errors, "persona.name", &config.persona.name);
    // An empty transcript is never shown, so the greeting is mandatory.
    validate_not_blank(errors, "persona.greeting", &config.persona.greeting);
    validate_not_blank(errors, "persona.preamble", &config.persona.preamble);
}
