//! # ll-core
//!
//! Core domain models and session logic for Little Lemon.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

pub mod app_dirs;
pub mod config;
pub mod ports;
pub mod profile;
pub mod session;
pub mod validation;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use profile::{NotificationPrefs, NotificationPrefsUpdate, ProfileRecord, ProfileUpdate};
pub use session::{AppRoute, SessionEvent, SessionPhase, SessionState, SessionStateMachine};
pub use validation::{ProfileField, ValidationPolicy, ValidationRule};
