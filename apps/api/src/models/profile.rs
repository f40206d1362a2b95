use serde::{Deserialize, Serialize};

/// The user profile shared across all feature pages.
///
/// Serialized camelCase — the same shape the frontend stores and sends.
/// Created with empty defaults on first load; every mutation is persisted
/// wholesale through the profile store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub name: String,
    pub field: String,
    pub skills: Vec<String>,
    pub visa_type: String,
    pub language_level: String,
    pub preferences: String,
}

impl UserProfile {
    /// Completeness gate: a profile counts as complete once a name is set.
    /// Feature pages are locked behind this.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Full form validity — name, field, and visa type are all required
    /// before the profile form accepts a save-and-continue.
    pub fn is_form_valid(&self) -> bool {
        self.is_complete() && !self.field.is_empty() && !self.visa_type.is_empty()
    }

    /// First name for greetings ("Welcome back, Sarah!").
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or("")
    }
}

/// Supported fields of study, offered by the profile and job-search forms.
pub const FIELDS: &[&str] = &[
    "Software Engineering",
    "Data Science",
    "Business / Management",
    "Luxury / Fashion",
    "Hospitality / Tourism",
    "Engineering / Industry",
    "Arts / Design",
];

/// Supported visa statuses for students and recent graduates in France.
pub const VISA_TYPES: &[&str] = &[
    "VLS-TS Student",
    "APS / Recepissee",
    "Passeport Talent",
    "Work Visa (Salarié)",
    "EU Blue Card",
];

/// CEFR language-level codes accepted in `language_level`.
pub const LANGUAGE_LEVELS: &[&str] = &["A1", "A2", "B1", "B2", "C1", "C2"];
