use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Profile fields collected on the first wizard step.
///
/// `email` and `organization` arrive pre-filled from the invitation and are
/// display-only; validation never touches them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    #[serde(skip_serializing, default)]
    pub password: String,
    pub email: String,
    pub organization: String,
}

/// The editable, validated profile fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PersonalField {
    FirstName,
    LastName,
    Role,
    Password,
}

impl PersonalField {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PersonalField::FirstName => "first_name",
            PersonalField::LastName => "last_name",
            PersonalField::Role => "role",
            PersonalField::Password => "password",
        }
    }
}

impl fmt::Display for PersonalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Field-level validation outcome: a mapping from field to message.
///
/// An empty mapping means the info is valid. This is an expected everyday
/// value, not a fault, so it is always returned and never raised.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<PersonalField, &'static str>);

impl FieldErrors {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.0.is_empty()
    }

    /// The message for one field, if it failed validation.
    #[must_use]
    pub fn message(&self, field: PersonalField) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PersonalField, &'static str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, *message))
    }

    /// Drop the message for one field, e.g. once the user edits it again.
    pub fn clear(&mut self, field: PersonalField) {
        self.0.remove(&field);
    }

    fn insert(&mut self, field: PersonalField, message: &'static str) {
        self.0.insert(field, message);
    }
}

impl PersonalInfo {
    /// Builds the info pre-filled from an invitation.
    #[must_use]
    pub fn from_invitation(email: impl Into<String>, organization: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            organization: organization.into(),
            ..Self::default()
        }
    }

    /// Set one editable field's value.
    pub fn set_field(&mut self, field: PersonalField, value: impl Into<String>) {
        let value = value.into();
        match field {
            PersonalField::FirstName => self.first_name = value,
            PersonalField::LastName => self.last_name = value,
            PersonalField::Role => self.role = value,
            PersonalField::Password => self.password = value,
        }
    }

    /// Current value of one editable field.
    #[must_use]
    pub fn field(&self, field: PersonalField) -> &str {
        match field {
            PersonalField::FirstName => &self.first_name,
            PersonalField::LastName => &self.last_name,
            PersonalField::Role => &self.role,
            PersonalField::Password => &self.password,
        }
    }

    /// Validate the editable fields.
    ///
    /// Names and role must be non-empty after trimming; the password must be
    /// at least [`MIN_PASSWORD_LEN`] characters. Email and organization are
    /// invitation-owned and not checked here.
    #[must_use]
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        if self.first_name.trim().is_empty() {
            errors.insert(PersonalField::FirstName, "First name is required");
        }
        if self.last_name.trim().is_empty() {
            errors.insert(PersonalField::LastName, "Last name is required");
        }
        if self.role.trim().is_empty() {
            errors.insert(PersonalField::Role, "Role/job title is required");
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.insert(
                PersonalField::Password,
                "Password must be at least 8 characters",
            );
        }
        errors
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
