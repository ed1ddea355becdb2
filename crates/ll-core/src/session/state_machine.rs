//! Session state machine.
//!
//! Defines a pure state transition function for the session flow. Side
//! effects (storage) happen before an event is fed in; the reducer only
//! describes what the committed state looks like afterwards.

use crate::profile::ProfileRecord;

use super::state::SessionState;

/// Facts that drive the session flow.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SessionEvent {
    /// Initial load answered. `None` means nothing was stored.
    Restored { profile: Option<ProfileRecord> },
    /// Initial load failed; nothing recoverable.
    RestoreFailed,
    /// Onboarding profile was persisted.
    Onboarded { profile: ProfileRecord },
    /// Merged profile was persisted.
    ProfileUpdated { profile: ProfileRecord },
    /// A session token was issued.
    SignedIn { token: String },
    /// User signed out; storage clear may or may not have succeeded.
    SignedOut,
}

impl SessionEvent {
    pub fn name(&self) -> &'static str {
        match self {
            SessionEvent::Restored { .. } => "restored",
            SessionEvent::RestoreFailed => "restore_failed",
            SessionEvent::Onboarded { .. } => "onboarded",
            SessionEvent::ProfileUpdated { .. } => "profile_updated",
            SessionEvent::SignedIn { .. } => "signed_in",
            SessionEvent::SignedOut => "signed_out",
        }
    }
}

/// Pure session state machine.
///
/// No transition sets `loading` back to true.
pub struct SessionStateMachine;

impl SessionStateMachine {
    pub fn transition(state: SessionState, event: SessionEvent) -> SessionState {
        match event {
            SessionEvent::Restored { profile } if state.loading => match profile {
                Some(profile) => SessionState {
                    loading: false,
                    onboarding_completed: true,
                    profile,
                    ..state
                },
                None => SessionState {
                    loading: false,
                    onboarding_completed: false,
                    profile: ProfileRecord::default(),
                    ..state
                },
            },
            SessionEvent::RestoreFailed if state.loading => SessionState {
                loading: false,
                onboarding_completed: false,
                profile: ProfileRecord::default(),
                ..state
            },
            SessionEvent::Restored { .. } | SessionEvent::RestoreFailed => {
                #[cfg(feature = "tracing")]
                tracing::debug!("ignoring restore result after initial restore");
                state
            }
            SessionEvent::Onboarded { profile } => SessionState {
                loading: false,
                onboarding_completed: true,
                profile,
                ..state
            },
            SessionEvent::ProfileUpdated { profile }
                if state.onboarding_completed && !state.loading =>
            {
                SessionState { profile, ..state }
            }
            SessionEvent::ProfileUpdated { .. } => {
                #[cfg(feature = "tracing")]
                tracing::debug!("ignoring profile update outside an active session");
                state
            }
            SessionEvent::SignedIn { token } => SessionState {
                session_token: Some(token),
                ..state
            },
            SessionEvent::SignedOut => SessionState {
                loading: false,
                onboarding_completed: false,
                session_token: None,
                profile: ProfileRecord::default(),
            },
        }
    }
}
