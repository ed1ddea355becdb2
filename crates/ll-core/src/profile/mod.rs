//! Profile domain models
//!
//! The user profile collected during onboarding and edited on the profile
//! screen, partial updates to it, and the versioned envelope it is stored in.

pub mod envelope;
pub mod model;
pub mod update;

pub use envelope::{EnvelopeError, StoredProfile, CURRENT_SCHEMA_VERSION, LEGACY_SCHEMA_VERSION};
pub use model::{NotificationPrefs, ProfileRecord};
pub use update::{NotificationPrefsUpdate, ProfileUpdate};
