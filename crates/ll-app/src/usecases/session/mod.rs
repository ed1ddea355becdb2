//! Session use cases: startup restore, onboarding, profile edits and logout.

pub mod context;
pub mod error;
pub mod orchestrator;

pub use context::{SessionContext, SessionOperation};
pub use error::{LogoutOutcome, RestoreOutcome, SessionError};
pub use orchestrator::SessionOrchestrator;
