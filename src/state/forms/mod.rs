//! Quote form domain: fields, step table, validation, wizard state

mod draft;
mod field;
pub mod steps;
pub mod validate;
mod wizard;

pub use draft::QuoteDraft;
pub use field::{FieldId, FieldKind};
pub use wizard::QuoteWizard;
