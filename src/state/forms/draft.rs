//! In-progress quote request values

use super::field::FieldId;
use serde::{Deserialize, Serialize};

/// All answers the user has entered so far.
///
/// Serialized wholesale to the draft file on every change; keys match the
/// submission payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuoteDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service_type: String,
    pub project_type: String,
    pub property_size: String,
    pub timeline: String,
    pub budget: String,
    pub message: String,
}

impl QuoteDraft {
    /// Read a field by id
    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::Name => &self.name,
            FieldId::Email => &self.email,
            FieldId::Phone => &self.phone,
            FieldId::ServiceType => &self.service_type,
            FieldId::ProjectType => &self.project_type,
            FieldId::PropertySize => &self.property_size,
            FieldId::Timeline => &self.timeline,
            FieldId::Budget => &self.budget,
            FieldId::Message => &self.message,
        }
    }

    /// Mutable access to a field by id
    pub fn get_mut(&mut self, field: FieldId) -> &mut String {
        match field {
            FieldId::Name => &mut self.name,
            FieldId::Email => &mut self.email,
            FieldId::Phone => &mut self.phone,
            FieldId::ServiceType => &mut self.service_type,
            FieldId::ProjectType => &mut self.project_type,
            FieldId::PropertySize => &mut self.property_size,
            FieldId::Timeline => &mut self.timeline,
            FieldId::Budget => &mut self.budget,
            FieldId::Message => &mut self.message,
        }
    }

    /// Overwrite a field value
    pub fn set(&mut self, field: FieldId, value: impl Into<String>) {
        *self.get_mut(field) = value.into();
    }

    /// Copy non-empty values from a previously saved draft.
    ///
    /// Empty strings in the saved copy are skipped so they never clobber a
    /// value typed in the meantime. Returns how many fields were restored.
    pub fn merge_saved(&mut self, saved: &QuoteDraft) -> usize {
        let mut restored = 0;
        for field in FieldId::ALL {
            let value = saved.get(field);
            if !value.is_empty() {
                self.set(field, value);
                restored += 1;
            }
        }
        restored
    }

    /// True when every field is empty
    pub fn is_empty(&self) -> bool {
        FieldId::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

impl FieldId {
    /// Every field, in form order
    pub const ALL: [FieldId; 9] = [
        FieldId::Name,
        FieldId::Email,
        FieldId::Phone,
        FieldId::ServiceType,
        FieldId::ProjectType,
        FieldId::PropertySize,
        FieldId::Timeline,
        FieldId::Budget,
        FieldId::Message,
    ];
}
