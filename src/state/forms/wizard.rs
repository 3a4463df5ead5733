//! Quote wizard state machine
//!
//! Owns the in-progress draft, the current step, and the validation errors
//! surfaced by the last navigation attempt. Forward navigation is gated by
//! the step validator; backward navigation is not.

use super::draft::QuoteDraft;
use super::field::{FieldId, FieldKind};
use super::steps::{step_def, StepDef, STEP_COUNT};
use super::validate::validate_step;
use std::collections::BTreeMap;

/// Multi-step quote form controller
#[derive(Debug, Clone)]
pub struct QuoteWizard {
    pub draft: QuoteDraft,
    /// 1-based, between 1 and [`STEP_COUNT`]
    current_step: usize,
    /// Errors from the last failed advance, keyed by field
    pub errors: BTreeMap<FieldId, String>,
    /// Index into the current step's field list
    pub active_field_index: usize,
}

impl QuoteWizard {
    pub fn new() -> Self {
        Self {
            draft: QuoteDraft::default(),
            current_step: 1,
            errors: BTreeMap::new(),
            active_field_index: 0,
        }
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn step(&self) -> &'static StepDef {
        step_def(self.current_step)
    }

    pub fn is_last_step(&self) -> bool {
        self.current_step == STEP_COUNT
    }

    /// Field currently holding focus
    pub fn active_field(&self) -> FieldId {
        let fields = self.step().fields;
        fields[self.active_field_index.min(fields.len() - 1)]
    }

    /// Move focus to the next field on this step (wraps)
    pub fn next_field(&mut self) {
        let count = self.step().fields.len();
        self.active_field_index = (self.active_field_index + 1) % count;
    }

    /// Move focus to the previous field on this step (wraps)
    pub fn prev_field(&mut self) {
        let count = self.step().fields.len();
        if self.active_field_index == 0 {
            self.active_field_index = count - 1;
        } else {
            self.active_field_index -= 1;
        }
    }

    /// Append a character to the focused field.
    ///
    /// Phone fields accept digits only; choice fields ignore typed characters.
    pub fn input_char(&mut self, c: char) {
        let field = self.active_field();
        match field.kind() {
            FieldKind::Phone => {
                if c.is_ascii_digit() {
                    self.draft.get_mut(field).push(c);
                }
            }
            FieldKind::Choice(_) => {}
            FieldKind::Text | FieldKind::Multiline | FieldKind::Email => {
                self.draft.get_mut(field).push(c);
            }
        }
        // Editing a field clears its stale error immediately
        self.errors.remove(&field);
    }

    /// Remove the last character from the focused field
    pub fn backspace(&mut self) {
        let field = self.active_field();
        if field.is_choice() {
            self.draft.get_mut(field).clear();
        } else {
            self.draft.get_mut(field).pop();
        }
        self.errors.remove(&field);
    }

    /// Cycle the focused choice field through its options.
    ///
    /// No-op on non-choice fields. An empty value cycles to the first option.
    pub fn cycle_choice(&mut self, forward: bool) {
        let field = self.active_field();
        let FieldKind::Choice(options) = field.kind() else {
            return;
        };

        let current = options.iter().position(|o| *o == self.draft.get(field));
        let next = match (current, forward) {
            (None, _) => 0,
            (Some(i), true) => (i + 1) % options.len(),
            (Some(0), false) => options.len() - 1,
            (Some(i), false) => i - 1,
        };
        self.draft.set(field, options[next]);
        self.errors.remove(&field);
    }

    /// Validate the current step and move forward if it passes.
    ///
    /// On failure the step is unchanged and per-field errors are recorded.
    /// On the last step a successful validation returns true without moving;
    /// the caller hands the draft to the submission client.
    pub fn advance(&mut self) -> bool {
        self.errors = validate_step(self.current_step, &self.draft);
        if !self.errors.is_empty() {
            return false;
        }
        if self.current_step < STEP_COUNT {
            self.current_step += 1;
            self.active_field_index = 0;
        }
        true
    }

    /// Move back one step without validating. No-op at step 1.
    pub fn retreat(&mut self) {
        if self.current_step > 1 {
            self.current_step -= 1;
            self.active_field_index = 0;
            self.errors.clear();
        }
    }

    /// Clear all values and return to step 1
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Validate every step before submission.
    ///
    /// Jumps to the first failing step so its errors are visible. Earlier
    /// steps can only regress through edits made after retreating past them.
    pub fn validate_all(&mut self) -> bool {
        for step in 1..=STEP_COUNT {
            let errors = validate_step(step, &self.draft);
            if !errors.is_empty() {
                self.current_step = step;
                self.active_field_index = 0;
                self.errors = errors;
                return false;
            }
        }
        self.errors.clear();
        true
    }

    /// Merge a previously saved draft into this wizard (empty values skipped).
    /// Returns how many fields were restored.
    pub fn restore(&mut self, saved: &QuoteDraft) -> usize {
        self.draft.merge_saved(saved)
    }

    /// Error message for a field, if the last advance flagged it
    pub fn error_for(&self, field: FieldId) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }
}

impl Default for QuoteWizard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled_step_one(wizard: &mut QuoteWizard) {
        wizard.draft.set(FieldId::Name, "Asha Rao");
        wizard.draft.set(FieldId::Email, "asha@example.com");
        wizard.draft.set(FieldId::Phone, "9876543210");
    }

    #[test]
    fn test_new_starts_at_step_one_with_no_errors() {
        let wizard = QuoteWizard::new();
        assert_eq!(wizard.current_step(), 1);
        assert!(wizard.errors.is_empty());
        assert_eq!(wizard.active_field(), FieldId::Name);
    }

    #[test]
    fn test_advance_with_valid_contact_moves_to_step_two() {
        let mut wizard = QuoteWizard::new();
        filled_step_one(&mut wizard);

        assert!(wizard.advance());
        assert_eq!(wizard.current_step(), 2);
        assert!(wizard.errors.is_empty());
        assert_eq!(wizard.active_field_index, 0);
    }

    #[test]
    fn test_advance_with_missing_email_stays_on_step_one() {
        let mut wizard = QuoteWizard::new();
        wizard.draft.set(FieldId::Name, "Asha Rao");
        wizard.draft.set(FieldId::Phone, "9876543210");

        assert!(!wizard.advance());
        assert_eq!(wizard.current_step(), 1);
        assert!(wizard.error_for(FieldId::Email).is_some());
    }

    #[test]
    fn test_advance_never_moves_while_errors_remain() {
        let mut wizard = QuoteWizard::new();
        for _ in 0..5 {
            assert!(!wizard.advance());
            assert_eq!(wizard.current_step(), 1);
        }
    }

    #[test]
    fn test_retreat_is_ungated_and_noop_at_step_one() {
        let mut wizard = QuoteWizard::new();
        wizard.retreat();
        assert_eq!(wizard.current_step(), 1);

        filled_step_one(&mut wizard);
        wizard.advance();
        wizard.draft.email.clear(); // invalid now, retreat must still work
        wizard.retreat();
        assert_eq!(wizard.current_step(), 1);
    }

    #[test]
    fn test_advance_on_last_step_validates_without_moving() {
        let mut wizard = QuoteWizard::new();
        filled_step_one(&mut wizard);
        wizard.advance();
        wizard.cycle_choice(true); // service type
        wizard.next_field();
        wizard.cycle_choice(true); // project type
        wizard.next_field();
        wizard.cycle_choice(true); // property size
        assert!(wizard.advance());
        assert_eq!(wizard.current_step(), 3);

        wizard.cycle_choice(true); // timeline
        wizard.next_field();
        wizard.cycle_choice(true); // budget

        assert!(wizard.advance());
        assert_eq!(wizard.current_step(), 3);
    }

    #[test]
    fn test_reset_clears_values_and_returns_to_step_one() {
        let mut wizard = QuoteWizard::new();
        filled_step_one(&mut wizard);
        wizard.advance();
        wizard.reset();
        assert_eq!(wizard.current_step(), 1);
        assert!(wizard.draft.is_empty());
        assert!(wizard.errors.is_empty());
    }

    #[test]
    fn test_phone_input_rejects_non_digits() {
        let mut wizard = QuoteWizard::new();
        wizard.next_field();
        wizard.next_field();
        assert_eq!(wizard.active_field(), FieldId::Phone);

        for c in "98a-76".chars() {
            wizard.input_char(c);
        }
        assert_eq!(wizard.draft.phone, "9876");
    }

    #[test]
    fn test_field_focus_wraps_within_step() {
        let mut wizard = QuoteWizard::new();
        wizard.next_field();
        wizard.next_field();
        wizard.next_field();
        assert_eq!(wizard.active_field(), FieldId::Name);
        wizard.prev_field();
        assert_eq!(wizard.active_field(), FieldId::Phone);
    }

    #[test]
    fn test_cycle_choice_wraps_both_directions() {
        let mut wizard = QuoteWizard::new();
        filled_step_one(&mut wizard);
        wizard.advance();
        assert_eq!(wizard.active_field(), FieldId::ServiceType);

        wizard.cycle_choice(true);
        assert_eq!(wizard.draft.service_type, "Construction");
        wizard.cycle_choice(false);
        assert_eq!(wizard.draft.service_type, "Turnkey Project");
        wizard.cycle_choice(true);
        assert_eq!(wizard.draft.service_type, "Construction");
    }

    #[test]
    fn test_typing_clears_stale_field_error() {
        let mut wizard = QuoteWizard::new();
        assert!(!wizard.advance());
        assert!(wizard.error_for(FieldId::Name).is_some());
        wizard.input_char('A');
        assert!(wizard.error_for(FieldId::Name).is_none());
    }

    #[test]
    fn test_validate_all_jumps_to_first_failing_step() {
        let mut wizard = QuoteWizard::new();
        filled_step_one(&mut wizard);
        wizard.advance();
        wizard.retreat();
        wizard.draft.email = "broken".to_string();
        // Pretend the user tabbed forward again and filled everything else
        wizard.draft.set(FieldId::ServiceType, "Construction");
        wizard.draft.set(FieldId::ProjectType, "Residential");
        wizard.draft.set(FieldId::PropertySize, "Under 1000 sq ft");
        wizard.draft.set(FieldId::Timeline, "Immediately");
        wizard.draft.set(FieldId::Budget, "Under 5 Lakh");

        assert!(!wizard.validate_all());
        assert_eq!(wizard.current_step(), 1);
        assert!(wizard.error_for(FieldId::Email).is_some());

        wizard.draft.email = "asha@example.com".to_string();
        assert!(wizard.validate_all());
        assert!(wizard.errors.is_empty());
    }

    #[test]
    fn test_restore_skips_empty_fields() {
        let mut wizard = QuoteWizard::new();
        let saved = QuoteDraft {
            name: "Asha Rao".to_string(),
            ..Default::default()
        };
        assert_eq!(wizard.restore(&saved), 1);
        assert_eq!(wizard.draft.name, "Asha Rao");
        assert_eq!(wizard.current_step(), 1);
    }
}
