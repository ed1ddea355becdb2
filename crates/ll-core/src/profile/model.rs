use serde::{Deserialize, Serialize};

/// Email notification preferences shown on the profile screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationPrefs {
    pub order_statuses: bool,
    pub password_changes: bool,
    pub special_offers: bool,
    pub newsletter: bool,
}

/// The durable user profile.
///
/// A value type: transitions replace it wholesale or merge a
/// [`ProfileUpdate`](super::ProfileUpdate) into a copy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub notification_prefs: NotificationPrefs,
    /// Empty string means no avatar.
    pub avatar_uri: String,
}

impl ProfileRecord {
    /// Profile with the three fields collected during onboarding.
    pub fn onboarding(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            ..Default::default()
        }
    }

    pub fn has_avatar(&self) -> bool {
        !self.avatar_uri.is_empty()
    }

    /// Placeholder text for the avatar slot when no image is set.
    ///
    /// First character of the first name followed by the first character
    /// of the last name; either may be missing.
    pub fn initials(&self) -> String {
        self.first_name
            .chars()
            .next()
            .into_iter()
            .chain(self.last_name.chars().next())
            .collect()
    }

    /// Display name used in greetings, e.g. "Ana Lee".
    pub fn full_name(&self) -> String {
        match (self.first_name.is_empty(), self.last_name.is_empty()) {
            (false, false) => format!("{} {}", self.first_name, self.last_name),
            (false, true) => self.first_name.clone(),
            (true, false) => self.last_name.clone(),
            (true, true) => String::new(),
        }
    }
}
