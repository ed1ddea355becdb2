use serde::{Deserialize, Serialize};

use super::model::{NotificationPrefs, ProfileRecord};

/// Key-by-key update of [`NotificationPrefs`]. `None` keeps the prior value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationPrefsUpdate {
    pub order_statuses: Option<bool>,
    pub password_changes: Option<bool>,
    pub special_offers: Option<bool>,
    pub newsletter: Option<bool>,
}

impl NotificationPrefsUpdate {
    pub fn is_empty(&self) -> bool {
        self.order_statuses.is_none()
            && self.password_changes.is_none()
            && self.special_offers.is_none()
            && self.newsletter.is_none()
    }

    fn apply(&self, prefs: &mut NotificationPrefs) {
        if let Some(v) = self.order_statuses {
            prefs.order_statuses = v;
        }
        if let Some(v) = self.password_changes {
            prefs.password_changes = v;
        }
        if let Some(v) = self.special_offers {
            prefs.special_offers = v;
        }
        if let Some(v) = self.newsletter {
            prefs.newsletter = v;
        }
    }
}

/// Partial profile submitted by the profile screen.
///
/// Scalar fields replace the current value when present. Notification
/// preferences merge key by key, so omitted keys keep their prior values.
/// Removing the avatar is `avatar_uri: Some(String::new())`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub notification_prefs: NotificationPrefsUpdate,
    pub avatar_uri: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.changed_fields().is_empty()
    }

    /// The update that turns `current` into `edited`.
    ///
    /// Only fields that differ are carried, so merging the result into
    /// `current` yields `edited`.
    pub fn between(current: &ProfileRecord, edited: &ProfileRecord) -> Self {
        fn changed<T: PartialEq + Clone>(old: &T, new: &T) -> Option<T> {
            (old != new).then(|| new.clone())
        }

        let (old, new) = (&current.notification_prefs, &edited.notification_prefs);
        Self {
            first_name: changed(&current.first_name, &edited.first_name),
            last_name: changed(&current.last_name, &edited.last_name),
            email: changed(&current.email, &edited.email),
            phone_number: changed(&current.phone_number, &edited.phone_number),
            notification_prefs: NotificationPrefsUpdate {
                order_statuses: changed(&old.order_statuses, &new.order_statuses),
                password_changes: changed(&old.password_changes, &new.password_changes),
                special_offers: changed(&old.special_offers, &new.special_offers),
                newsletter: changed(&old.newsletter, &new.newsletter),
            },
            avatar_uri: changed(&current.avatar_uri, &edited.avatar_uri),
        }
    }

    /// Names of the fields this update carries, in record order.
    pub fn changed_fields(&self) -> Vec<&'static str> {
        let prefs = &self.notification_prefs;
        [
            ("first_name", self.first_name.is_some()),
            ("last_name", self.last_name.is_some()),
            ("email", self.email.is_some()),
            ("phone_number", self.phone_number.is_some()),
            ("notification_prefs.order_statuses", prefs.order_statuses.is_some()),
            ("notification_prefs.password_changes", prefs.password_changes.is_some()),
            ("notification_prefs.special_offers", prefs.special_offers.is_some()),
            ("notification_prefs.newsletter", prefs.newsletter.is_some()),
            ("avatar_uri", self.avatar_uri.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, present)| present.then_some(name))
        .collect()
    }
}

impl ProfileRecord {
    /// Returns a copy of this record with `update` applied.
    pub fn merged(&self, update: &ProfileUpdate) -> ProfileRecord {
        let mut next = self.clone();
        if let Some(v) = &update.first_name {
            next.first_name = v.clone();
        }
        if let Some(v) = &update.last_name {
            next.last_name = v.clone();
        }
        if let Some(v) = &update.email {
            next.email = v.clone();
        }
        if let Some(v) = &update.phone_number {
            next.phone_number = v.clone();
        }
        update.notification_prefs.apply(&mut next.notification_prefs);
        if let Some(v) = &update.avatar_uri {
            next.avatar_uri = v.clone();
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn onboarded() -> ProfileRecord {
        ProfileRecord {
            phone_number: "5550000000".into(),
            notification_prefs: NotificationPrefs {
                order_statuses: false,
                password_changes: true,
                special_offers: true,
                newsletter: false,
            },
            avatar_uri: "file:///avatar.png".into(),
            ..ProfileRecord::onboarding("Ana", "Lee", "ana@x.com")
        }
    }

    #[test]
    fn merge_replaces_only_present_fields() {
        let current = onboarded();
        let update = ProfileUpdate {
            phone_number: Some("5551234567".into()),
            ..Default::default()
        };

        let merged = current.merged(&update);

        assert_eq!(merged.phone_number, "5551234567");
        assert_eq!(merged.first_name, "Ana");
        assert_eq!(merged.last_name, "Lee");
        assert_eq!(merged.email, "ana@x.com");
        assert_eq!(merged.notification_prefs, current.notification_prefs);
    }

    #[test]
    fn merge_notification_prefs_key_by_key() {
        let current = onboarded();
        let update = ProfileUpdate {
            notification_prefs: NotificationPrefsUpdate {
                order_statuses: Some(true),
                ..Default::default()
            },
            ..Default::default()
        };

        let merged = current.merged(&update);

        assert!(merged.notification_prefs.order_statuses);
        assert!(merged.notification_prefs.password_changes);
        assert!(merged.notification_prefs.special_offers);
        assert!(!merged.notification_prefs.newsletter);
    }

    #[test]
    fn empty_avatar_uri_removes_avatar() {
        let update = ProfileUpdate {
            avatar_uri: Some(String::new()),
            ..Default::default()
        };
        assert!(!onboarded().merged(&update).has_avatar());
    }

    #[test]
    fn between_yields_update_that_reproduces_edit() {
        let current = onboarded();
        let mut edited = current.clone();
        edited.email = "ana@lemon.com".into();
        edited.notification_prefs.newsletter = true;

        let update = ProfileUpdate::between(&current, &edited);

        assert_eq!(
            update.changed_fields(),
            vec!["email", "notification_prefs.newsletter"]
        );
        assert_eq!(current.merged(&update), edited);
    }

    #[test]
    fn between_identical_records_is_empty() {
        let current = onboarded();
        assert!(ProfileUpdate::between(&current, &current).is_empty());
    }

    #[test]
    fn partial_update_deserializes_from_sparse_json() {
        let update: ProfileUpdate =
            serde_json::from_str(r#"{"notificationPrefs":{"orderStatuses":true}}"#).unwrap();

        assert_eq!(update.notification_prefs.order_statuses, Some(true));
        assert!(update.notification_prefs.newsletter.is_none());
        assert!(update.first_name.is_none());
    }
}
