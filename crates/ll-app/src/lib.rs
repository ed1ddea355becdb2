//! Little Lemon application layer
//!
//! This crate drives the session state machine: it performs the profile
//! storage side effects and commits the resulting transitions.

pub mod app_paths;
pub mod deps;
pub mod usecases;

pub use app_paths::AppPaths;
pub use deps::AppDeps;
pub use usecases::{
    LogoutOutcome, RestoreOutcome, SessionError, SessionOperation, SessionOrchestrator,
};
