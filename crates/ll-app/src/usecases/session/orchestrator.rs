//! Session orchestrator.
//!
//! This module coordinates the session state machine and profile storage.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, error, info, info_span, warn, Instrument};

use ll_core::{
    ports::ProfileStorePort,
    profile::{ProfileRecord, ProfileUpdate},
    session::{SessionEvent, SessionPhase, SessionState},
    validation::ValidationPolicy,
};

use crate::deps::AppDeps;
use crate::usecases::session::context::{SessionContext, SessionOperation};
use crate::usecases::session::error::{LogoutOutcome, RestoreOutcome, SessionError};

/// Orchestrator that drives session state and its storage side effects.
pub struct SessionOrchestrator {
    context: Arc<SessionContext>,
    store: Arc<dyn ProfileStorePort>,
    policy: ValidationPolicy,
}

impl SessionOrchestrator {
    pub fn new(store: Arc<dyn ProfileStorePort>, policy: ValidationPolicy) -> Self {
        Self {
            context: SessionContext::default().arc(),
            store,
            policy,
        }
    }

    pub fn from_deps(deps: AppDeps) -> Self {
        Self::new(deps.profile_store, deps.validation_policy)
    }

    /// Last committed state.
    pub fn snapshot(&self) -> SessionState {
        self.context.get_state()
    }

    /// Receiver notified after every committed transition.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.context.subscribe()
    }

    pub fn policy(&self) -> &ValidationPolicy {
        &self.policy
    }

    /// Loads the stored profile once at startup.
    ///
    /// Store failures fall back to onboarding and are reported in the
    /// outcome. Calls after the session left `Loading` return the current
    /// state without touching the store.
    pub async fn restore(&self) -> RestoreOutcome {
        let _guard = self
            .context
            .acquire_operation_lock(SessionOperation::Restore)
            .await;

        let span = info_span!("usecase.session.restore");
        async {
            let current = self.context.get_state();
            if !current.loading {
                debug!(phase = %current.phase(), "session already restored, skipping load");
                return RestoreOutcome {
                    state: current,
                    read_error: None,
                };
            }

            let (event, read_error) = match self.store.load().await {
                Ok(profile) => (SessionEvent::Restored { profile }, None),
                Err(err) => {
                    warn!(error = %err, "profile load failed, falling back to onboarding");
                    (SessionEvent::RestoreFailed, Some(err))
                }
            };

            let state = self.commit(event);
            RestoreOutcome { state, read_error }
        }
        .instrument(span)
        .await
    }

    /// Persists the onboarding profile and enters `Active`.
    pub async fn onboard(&self, profile: ProfileRecord) -> Result<SessionState, SessionError> {
        let _guard = self
            .context
            .acquire_operation_lock(SessionOperation::Onboard)
            .await;

        let span = info_span!("usecase.session.onboard");
        async {
            if let Err(errors) = self.policy.check_onboarding(&profile) {
                warn!(fields = ?errors.fields(), "onboarding profile rejected");
                return Err(SessionError::Validation(errors));
            }

            self.store.save(&profile).await.map_err(|err| {
                error!(error = %err, "saving onboarding profile failed");
                SessionError::StorageWrite(err)
            })?;

            Ok(self.commit(SessionEvent::Onboarded { profile }))
        }
        .instrument(span)
        .await
    }

    /// Merges `update` into the current profile, persists it, then commits it.
    ///
    /// The update is not validated here; collaborators check it through
    /// [`ValidationPolicy::check_update`] before calling.
    pub async fn update_profile(&self, update: ProfileUpdate) -> Result<SessionState, SessionError> {
        let _guard = self
            .context
            .acquire_operation_lock(SessionOperation::UpdateProfile)
            .await;

        let span = info_span!("usecase.session.update_profile");
        async {
            let current = self.context.get_state();
            let phase = current.phase();
            if phase != SessionPhase::Active {
                warn!(%phase, "profile update outside an active session");
                return Err(SessionError::InvalidPhase {
                    operation: SessionOperation::UpdateProfile.as_str(),
                    phase,
                });
            }

            if update.is_empty() {
                debug!("empty profile update, nothing to save");
                return Ok(current);
            }

            let merged = current.profile.merged(&update);
            self.store.save(&merged).await.map_err(|err| {
                error!(error = %err, "saving profile update failed");
                SessionError::StorageWrite(err)
            })?;

            info!(changed = ?update.changed_fields(), "profile updated");
            Ok(self.commit(SessionEvent::ProfileUpdated { profile: merged }))
        }
        .instrument(span)
        .await
    }

    /// Clears storage and resets the session to onboarding.
    ///
    /// Memory is reset even if the clear fails.
    pub async fn logout(&self) -> LogoutOutcome {
        let _guard = self
            .context
            .acquire_operation_lock(SessionOperation::Logout)
            .await;

        let span = info_span!("usecase.session.logout");
        async {
            let clear_error = match self.store.clear().await {
                Ok(()) => None,
                Err(err) => {
                    error!(error = %err, "clearing stored profile failed, resetting session anyway");
                    Some(err)
                }
            };

            let state = self.commit(SessionEvent::SignedOut);
            LogoutOutcome { state, clear_error }
        }
        .instrument(span)
        .await
    }

    /// Records a session token. Memory only.
    pub fn sign_in(&self, token: impl Into<String>) -> SessionState {
        self.commit(SessionEvent::SignedIn {
            token: token.into(),
        })
    }

    fn commit(&self, event: SessionEvent) -> SessionState {
        let event_name = event.name();
        let (from, to) = self.context.commit(event);
        info!(
            from = %from.phase(),
            to = %to.phase(),
            event = event_name,
            "session state transition"
        );
        to
    }
}
