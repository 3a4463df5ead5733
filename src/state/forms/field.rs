//! Quote form field definitions

/// Choice options for the service type field
pub const SERVICE_TYPES: &[&str] = &[
    "Construction",
    "Interior Design",
    "Renovation",
    "Turnkey Project",
];

/// Choice options for the project type field
pub const PROJECT_TYPES: &[&str] = &["Residential", "Commercial"];

/// Choice options for the property size field
pub const PROPERTY_SIZES: &[&str] = &[
    "Under 1000 sq ft",
    "1000 - 2000 sq ft",
    "2000 - 4000 sq ft",
    "Above 4000 sq ft",
];

/// Choice options for the timeline field
pub const TIMELINES: &[&str] = &[
    "Immediately",
    "Within 1 month",
    "1 - 3 months",
    "3 - 6 months",
    "Just exploring",
];

/// Choice options for the budget field
pub const BUDGETS: &[&str] = &[
    "Under 5 Lakh",
    "5 - 15 Lakh",
    "15 - 50 Lakh",
    "Above 50 Lakh",
];

/// How a field accepts and renders input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text, single line
    Text,
    /// Free text, rendered taller
    Multiline,
    /// Free text, validated as an email address
    Email,
    /// Digits only
    Phone,
    /// One of a fixed option list, cycled with Left/Right/Space
    Choice(&'static [&'static str]),
}

/// Every field in the quote form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    Name,
    Email,
    Phone,
    ServiceType,
    ProjectType,
    PropertySize,
    Timeline,
    Budget,
    Message,
}

impl FieldId {
    /// Stable name, matches the submission payload keys
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::ServiceType => "serviceType",
            Self::ProjectType => "projectType",
            Self::PropertySize => "propertySize",
            Self::Timeline => "timeline",
            Self::Budget => "budget",
            Self::Message => "message",
        }
    }

    /// Label shown next to the field
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Full Name",
            Self::Email => "Email",
            Self::Phone => "Phone (10 digits)",
            Self::ServiceType => "Service",
            Self::ProjectType => "Project Type",
            Self::PropertySize => "Property Size",
            Self::Timeline => "Timeline",
            Self::Budget => "Budget",
            Self::Message => "Anything else? (optional)",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Self::Name => FieldKind::Text,
            Self::Email => FieldKind::Email,
            Self::Phone => FieldKind::Phone,
            Self::ServiceType => FieldKind::Choice(SERVICE_TYPES),
            Self::ProjectType => FieldKind::Choice(PROJECT_TYPES),
            Self::PropertySize => FieldKind::Choice(PROPERTY_SIZES),
            Self::Timeline => FieldKind::Choice(TIMELINES),
            Self::Budget => FieldKind::Choice(BUDGETS),
            Self::Message => FieldKind::Multiline,
        }
    }

    pub fn is_choice(self) -> bool {
        matches!(self.kind(), FieldKind::Choice(_))
    }

    pub fn is_multiline(self) -> bool {
        matches!(self.kind(), FieldKind::Multiline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str_matches_payload_keys() {
        assert_eq!(FieldId::Name.as_str(), "name");
        assert_eq!(FieldId::ServiceType.as_str(), "serviceType");
        assert_eq!(FieldId::PropertySize.as_str(), "propertySize");
    }

    #[test]
    fn test_choice_fields_have_options() {
        for field in [
            FieldId::ServiceType,
            FieldId::ProjectType,
            FieldId::PropertySize,
            FieldId::Timeline,
            FieldId::Budget,
        ] {
            match field.kind() {
                FieldKind::Choice(options) => assert!(!options.is_empty()),
                other => panic!("{field:?} should be a choice field, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_message_is_multiline() {
        assert!(FieldId::Message.is_multiline());
        assert!(!FieldId::Name.is_multiline());
    }

    #[test]
    fn test_phone_is_not_choice() {
        assert!(!FieldId::Phone.is_choice());
        assert!(FieldId::Budget.is_choice());
    }
}
