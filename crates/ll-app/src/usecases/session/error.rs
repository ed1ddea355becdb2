use ll_core::ports::ProfileStoreError;
use ll_core::session::{SessionPhase, SessionState};
use ll_core::validation::ValidationErrors;

/// Failures reported to the caller of a session action.
///
/// The committed state is unchanged whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("profile rejected: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("saving profile failed: {0}")]
    StorageWrite(#[source] ProfileStoreError),

    #[error("{operation} is not available while the session is {phase}")]
    InvalidPhase {
        operation: &'static str,
        phase: SessionPhase,
    },
}

impl SessionError {
    /// Whether the same call may succeed if simply retried.
    pub fn is_retryable(&self) -> bool {
        matches!(self, SessionError::StorageWrite(_))
    }
}

/// Result of the startup restore. Never an error: failures fail open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestoreOutcome {
    pub state: SessionState,
    /// Set when the store could not be read and the session fell back to onboarding.
    pub read_error: Option<ProfileStoreError>,
}

/// Result of a logout. Memory is always reset; the clear may have failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoutOutcome {
    pub state: SessionState,
    /// Set when the stored profile could not be removed.
    pub clear_error: Option<ProfileStoreError>,
}

impl LogoutOutcome {
    pub fn cleared(&self) -> bool {
        self.clear_error.is_none()
    }
}
