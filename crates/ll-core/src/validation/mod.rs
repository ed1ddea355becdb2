//! Profile validation policy
//!
//! One set of named rules shared by the onboarding and profile-edit flows.
//! The onboarding form checks names and email; the profile form checks the
//! same rules plus the phone number.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::profile::{ProfileRecord, ProfileUpdate};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

/// Profile fields that carry validation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    FirstName,
    LastName,
    Email,
    PhoneNumber,
}

impl ProfileField {
    pub fn as_str(self) -> &'static str {
        match self {
            ProfileField::FirstName => "first_name",
            ProfileField::LastName => "last_name",
            ProfileField::Email => "email",
            ProfileField::PhoneNumber => "phone_number",
        }
    }

    fn value(self, profile: &ProfileRecord) -> &str {
        match self {
            ProfileField::FirstName => &profile.first_name,
            ProfileField::LastName => &profile.last_name,
            ProfileField::Email => &profile.email,
            ProfileField::PhoneNumber => &profile.phone_number,
        }
    }
}

impl std::fmt::Display for ProfileField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationRule {
    /// Non-empty, ASCII letters only.
    NonEmptyAlphabetic,
    /// `local@domain.tld`.
    EmailAddress,
    /// Exactly ten ASCII digits.
    TenDigitPhone,
}

impl ValidationRule {
    pub fn check(self, value: &str) -> bool {
        match self {
            ValidationRule::NonEmptyAlphabetic => {
                !value.is_empty() && value.chars().all(|c| c.is_ascii_alphabetic())
            }
            ValidationRule::EmailAddress => EMAIL_RE.is_match(value),
            ValidationRule::TenDigitPhone => {
                value.len() == 10 && value.chars().all(|c| c.is_ascii_digit())
            }
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            ValidationRule::NonEmptyAlphabetic => "must be non-empty and contain only letters",
            ValidationRule::EmailAddress => "must be a valid email address",
            ValidationRule::TenDigitPhone => "must be a 10-digit phone number",
        }
    }
}

/// One rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{field} {}", .rule.describe())]
pub struct ValidationError {
    pub field: ProfileField,
    pub rule: ValidationRule,
}

/// All violations found in one check, in field order.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("invalid profile: {}", join(.0))]
pub struct ValidationErrors(pub Vec<ValidationError>);

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    pub fn fields(&self) -> Vec<ProfileField> {
        self.0.iter().map(|e| e.field).collect()
    }

    pub fn contains(&self, field: ProfileField) -> bool {
        self.0.iter().any(|e| e.field == field)
    }
}

/// Which rule applies to which field, per flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationPolicy {
    onboarding: Vec<(ProfileField, ValidationRule)>,
    profile: Vec<(ProfileField, ValidationRule)>,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        let onboarding = vec![
            (ProfileField::FirstName, ValidationRule::NonEmptyAlphabetic),
            (ProfileField::LastName, ValidationRule::NonEmptyAlphabetic),
            (ProfileField::Email, ValidationRule::EmailAddress),
        ];
        let mut profile = onboarding.clone();
        profile.push((ProfileField::PhoneNumber, ValidationRule::TenDigitPhone));
        Self {
            onboarding,
            profile,
        }
    }
}

impl ValidationPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rules for the onboarding form: names and email.
    pub fn check_onboarding(&self, profile: &ProfileRecord) -> Result<(), ValidationErrors> {
        Self::check(&self.onboarding, profile)
    }

    /// Rules for the profile form: names, email and phone number.
    pub fn check_profile(&self, profile: &ProfileRecord) -> Result<(), ValidationErrors> {
        Self::check(&self.profile, profile)
    }

    /// Profile rules applied to `current` with `update` merged in.
    pub fn check_update(
        &self,
        current: &ProfileRecord,
        update: &ProfileUpdate,
    ) -> Result<(), ValidationErrors> {
        self.check_profile(&current.merged(update))
    }

    fn check(
        rules: &[(ProfileField, ValidationRule)],
        profile: &ProfileRecord,
    ) -> Result<(), ValidationErrors> {
        let errors: Vec<ValidationError> = rules
            .iter()
            .filter(|(field, rule)| !rule.check(field.value(profile)))
            .map(|&(field, rule)| ValidationError { field, rule })
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(errors))
        }
    }
}
