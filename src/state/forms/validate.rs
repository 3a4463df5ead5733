//! Per-step field validation
//!
//! Pure functions: same step and values always produce the same errors.

use super::draft::QuoteDraft;
use super::field::{FieldId, FieldKind};
use super::steps::step_def;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

/// Expected phone length after stripping non-digits
pub const PHONE_DIGITS: usize = 10;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Keep only ASCII digits
pub fn digits_of(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Validate the fields a step requires.
///
/// Returns an empty map iff every required field is present and, where the
/// field has a format, well-formed. Never touches storage or the network.
pub fn validate_step(step: usize, draft: &QuoteDraft) -> BTreeMap<FieldId, String> {
    let mut errors = BTreeMap::new();

    for &field in step_def(step).required {
        let value = draft.get(field).trim();
        if value.is_empty() {
            errors.insert(field, format!("{} is required", field.label()));
            continue;
        }

        match field.kind() {
            FieldKind::Email => {
                if !EMAIL_RE.is_match(value) {
                    errors.insert(field, "Enter a valid email address".to_string());
                }
            }
            FieldKind::Phone => {
                if digits_of(value).len() != PHONE_DIGITS {
                    errors.insert(field, format!("Enter a {PHONE_DIGITS}-digit phone number"));
                }
            }
            FieldKind::Text | FieldKind::Multiline | FieldKind::Choice(_) => {}
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::steps::STEP_COUNT;
    use pretty_assertions::assert_eq;

    fn valid_draft() -> QuoteDraft {
        QuoteDraft {
            name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            phone: "9876543210".to_string(),
            service_type: "Renovation".to_string(),
            project_type: "Residential".to_string(),
            property_size: "1000 - 2000 sq ft".to_string(),
            timeline: "Within 1 month".to_string(),
            budget: "5 - 15 Lakh".to_string(),
            message: String::new(),
        }
    }

    #[test]
    fn test_complete_draft_passes_every_step() {
        let draft = valid_draft();
        for step in 1..=STEP_COUNT {
            assert_eq!(validate_step(step, &draft), BTreeMap::new());
        }
    }

    #[test]
    fn test_empty_draft_flags_all_required_fields() {
        let draft = QuoteDraft::default();
        let errors = validate_step(1, &draft);
        assert_eq!(errors.len(), 3);
        assert!(errors.contains_key(&FieldId::Name));
        assert!(errors.contains_key(&FieldId::Email));
        assert!(errors.contains_key(&FieldId::Phone));
    }

    #[test]
    fn test_missing_email_is_flagged() {
        let mut draft = valid_draft();
        draft.email.clear();
        let errors = validate_step(1, &draft);
        assert_eq!(errors.len(), 1);
        assert!(errors[&FieldId::Email].contains("required"));
    }

    #[test]
    fn test_malformed_email_is_flagged() {
        let mut draft = valid_draft();
        for bad in ["asha", "asha@", "@example.com", "asha@example", "a b@example.com"] {
            draft.email = bad.to_string();
            let errors = validate_step(1, &draft);
            assert!(errors.contains_key(&FieldId::Email), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_plus_addressing_is_accepted() {
        let mut draft = valid_draft();
        draft.email = "asha+site@example.co.in".to_string();
        assert!(validate_step(1, &draft).is_empty());
    }

    #[test]
    fn test_phone_must_reduce_to_ten_digits() {
        let mut draft = valid_draft();

        draft.phone = "98765 43210".to_string(); // formatting stripped
        assert!(validate_step(1, &draft).is_empty());

        draft.phone = "987654321".to_string(); // nine digits
        assert!(validate_step(1, &draft).contains_key(&FieldId::Phone));

        draft.phone = "98765432100".to_string(); // eleven digits
        assert!(validate_step(1, &draft).contains_key(&FieldId::Phone));
    }

    #[test]
    fn test_whitespace_only_counts_as_missing() {
        let mut draft = valid_draft();
        draft.name = "   ".to_string();
        assert!(validate_step(1, &draft).contains_key(&FieldId::Name));
    }

    #[test]
    fn test_optional_message_never_blocks_step_three() {
        let mut draft = valid_draft();
        draft.message.clear();
        assert!(validate_step(3, &draft).is_empty());
    }

    #[test]
    fn test_validation_is_deterministic() {
        let mut draft = valid_draft();
        draft.email = "not-an-email".to_string();
        draft.phone.clear();
        let first = validate_step(1, &draft);
        let second = validate_step(1, &draft);
        assert_eq!(first, second);
    }

    #[test]
    fn test_digits_of_strips_everything_else() {
        assert_eq!(digits_of("+91 98765-43210"), "919876543210");
        assert_eq!(digits_of("abc"), "");
    }
}
