//! Port interfaces for the application layer
//!
//! Ports define the contract between the session logic and infrastructure
//! implementations, so the state machine never depends on how or where the
//! profile is actually stored.

pub mod app_dirs;
pub mod errors;
mod migration;
pub mod profile_store;

pub use app_dirs::AppDirsPort;
pub use errors::AppDirsError;
pub use migration::ProfileMigrationPort;
pub use profile_store::{ProfileStoreError, ProfileStorePort};

#[cfg(test)]
pub use profile_store::MockProfileStore;
