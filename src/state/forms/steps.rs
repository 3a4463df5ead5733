//! Static step table for the quote wizard
//!
//! Which fields each step shows and which of them gate forward navigation.
//! This is data, not code: the validator and the renderer both read it.

use super::field::FieldId;

/// Number of steps in the wizard
pub const STEP_COUNT: usize = 3;

/// One screen's worth of fields
#[derive(Debug)]
pub struct StepDef {
    /// 1-based step number
    pub number: usize,
    pub title: &'static str,
    /// Fields rendered on this step, in order
    pub fields: &'static [FieldId],
    /// Fields that must pass validation before advancing
    pub required: &'static [FieldId],
}

pub const STEPS: [StepDef; STEP_COUNT] = [
    StepDef {
        number: 1,
        title: "Contact",
        fields: &[FieldId::Name, FieldId::Email, FieldId::Phone],
        required: &[FieldId::Name, FieldId::Email, FieldId::Phone],
    },
    StepDef {
        number: 2,
        title: "Project",
        fields: &[
            FieldId::ServiceType,
            FieldId::ProjectType,
            FieldId::PropertySize,
        ],
        required: &[
            FieldId::ServiceType,
            FieldId::ProjectType,
            FieldId::PropertySize,
        ],
    },
    StepDef {
        number: 3,
        title: "Details",
        fields: &[FieldId::Timeline, FieldId::Budget, FieldId::Message],
        required: &[FieldId::Timeline, FieldId::Budget],
    },
];

/// Look up a step by its 1-based number, clamping out-of-range values
pub fn step_def(number: usize) -> &'static StepDef {
    &STEPS[number.clamp(1, STEP_COUNT) - 1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_numbers_match_positions() {
        for (idx, step) in STEPS.iter().enumerate() {
            assert_eq!(step.number, idx + 1);
        }
    }

    #[test]
    fn test_required_fields_are_shown_on_their_step() {
        for step in &STEPS {
            for field in step.required {
                assert!(
                    step.fields.contains(field),
                    "step {} requires {field:?} but does not show it",
                    step.number
                );
            }
        }
    }

    #[test]
    fn test_every_field_appears_exactly_once() {
        let shown: Vec<_> = STEPS.iter().flat_map(|s| s.fields.iter()).collect();
        assert_eq!(shown.len(), FieldId::ALL.len());
        for field in &FieldId::ALL {
            assert_eq!(shown.iter().filter(|f| ***f == *field).count(), 1);
        }
    }

    #[test]
    fn test_message_is_optional() {
        assert!(!step_def(3).required.contains(&FieldId::Message));
    }

    #[test]
    fn test_step_def_clamps_out_of_range() {
        assert_eq!(step_def(0).number, 1);
        assert_eq!(step_def(99).number, STEP_COUNT);
    }
}
