use std::sync::Arc;

use ll_core::session::{SessionEvent, SessionState, SessionStateMachine};
use tokio::sync::{watch, Mutex, MutexGuard};

/// Store-touching operation kinds. Calls of the same kind run one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOperation {
    Restore,
    Onboard,
    UpdateProfile,
    Logout,
}

impl SessionOperation {
    pub fn as_str(self) -> &'static str {
        match self {
            SessionOperation::Restore => "restore",
            SessionOperation::Onboard => "onboard",
            SessionOperation::UpdateProfile => "update_profile",
            SessionOperation::Logout => "logout",
        }
    }
}

impl std::fmt::Display for SessionOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shared session context: the committed state and the per-operation locks.
///
/// ## Lock Ordering
/// Acquire the operation lock first, then commit. Commits go through the
/// watch sender's internal lock, so a commit is a single read-modify-write
/// and readers only ever see committed states.
#[derive(Clone)]
pub struct SessionContext {
    /// Committed state; receivers are notified on every commit.
    state: Arc<watch::Sender<SessionState>>,
    restore_lock: Arc<Mutex<()>>,
    onboard_lock: Arc<Mutex<()>>,
    update_lock: Arc<Mutex<()>>,
    logout_lock: Arc<Mutex<()>>,
}

impl SessionContext {
    /// Creates a new SessionContext with the given initial state.
    pub fn new(initial_state: SessionState) -> Self {
        let (state, _) = watch::channel(initial_state);
        Self {
            state: Arc::new(state),
            restore_lock: Arc::new(Mutex::new(())),
            onboard_lock: Arc::new(Mutex::new(())),
            update_lock: Arc::new(Mutex::new(())),
            logout_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Returns the context wrapped in Arc for shared ownership.
    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Copy of the last committed state. Never waits on an operation lock.
    pub fn get_state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// Serializes calls of one operation kind.
    ///
    /// Returns a guard that releases the lock when dropped.
    pub async fn acquire_operation_lock(&self, op: SessionOperation) -> MutexGuard<'_, ()> {
        match op {
            SessionOperation::Restore => self.restore_lock.lock().await,
            SessionOperation::Onboard => self.onboard_lock.lock().await,
            SessionOperation::UpdateProfile => self.update_lock.lock().await,
            SessionOperation::Logout => self.logout_lock.lock().await,
        }
    }

    /// Applies `event` to the committed state and notifies subscribers.
    ///
    /// Returns `(from, to)`.
    pub fn commit(&self, event: SessionEvent) -> (SessionState, SessionState) {
        let mut committed = None;
        self.state.send_modify(|state| {
            let next = SessionStateMachine::transition(state.clone(), event);
            let previous = std::mem::replace(state, next.clone());
            committed = Some((previous, next));
        });
        committed.unwrap_or_else(|| {
            let state = self.get_state();
            (state.clone(), state)
        })
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new(SessionState::initial())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ll_core::profile::ProfileRecord;

    #[tokio::test]
    async fn commit_notifies_subscribers() {
        let context = SessionContext::default();
        let mut rx = context.subscribe();

        let (from, to) = context.commit(SessionEvent::Restored { profile: None });

        assert!(from.loading);
        assert!(!to.loading);
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), to);
    }

    #[tokio::test]
    async fn commit_without_subscribers_still_applies() {
        let context = SessionContext::default();
        context.commit(SessionEvent::Onboarded {
            profile: ProfileRecord::onboarding("Ana", "Lee", "ana@x.com"),
        });
        assert!(context.get_state().onboarding_completed);
    }

    #[tokio::test]
    async fn operation_locks_are_independent() {
        let context = SessionContext::default();
        let _update = context
            .acquire_operation_lock(SessionOperation::UpdateProfile)
            .await;

        let logout = tokio::time::timeout(
            std::time::Duration::from_millis(100),
            context.acquire_operation_lock(SessionOperation::Logout),
        )
        .await;
        assert!(logout.is_ok(), "logout must not wait on update");

        let second_update = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            context.acquire_operation_lock(SessionOperation::UpdateProfile),
        )
        .await;
        assert!(second_update.is_err(), "same-kind calls must serialize");
    }
}
