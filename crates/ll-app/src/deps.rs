//! # Application Dependencies
//!
//! Dependency grouping for constructing the session orchestrator.
//!
//! **Note**: This is NOT a Builder pattern. No build steps, no hidden
//! logic. Just parameter grouping.

use std::sync::Arc;

use ll_core::ports::ProfileStorePort;
use ll_core::validation::ValidationPolicy;

/// Application dependency grouping.
///
/// All dependencies are required.
pub struct AppDeps {
    pub profile_store: Arc<dyn ProfileStorePort>,
    pub validation_policy: ValidationPolicy,
}
