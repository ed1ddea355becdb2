use serde::{Deserialize, Serialize};

use crate::profile::ProfileRecord;

/// In-memory session record owned by the session orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    /// True only from construction until the first restore resolves.
    pub loading: bool,
    /// Sticky until logout.
    pub onboarding_completed: bool,
    /// Reserved for future auth; only set by a sign-in.
    pub session_token: Option<String>,
    pub profile: ProfileRecord,
}

impl SessionState {
    /// State before the initial restore.
    pub fn initial() -> Self {
        Self {
            loading: true,
            onboarding_completed: false,
            session_token: None,
            profile: ProfileRecord::default(),
        }
    }

    pub fn phase(&self) -> SessionPhase {
        if self.loading {
            SessionPhase::Loading
        } else if self.onboarding_completed {
            SessionPhase::Active
        } else {
            SessionPhase::Onboarding
        }
    }

    pub fn route(&self) -> AppRoute {
        match self.phase() {
            SessionPhase::Loading => AppRoute::Splash,
            SessionPhase::Onboarding => AppRoute::Onboarding,
            SessionPhase::Active => AppRoute::Home,
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::initial()
    }
}

/// Coarse state of the session machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    Loading,
    Onboarding,
    Active,
}

impl SessionPhase {
    pub fn as_str(self) -> &'static str {
        match self {
            SessionPhase::Loading => "loading",
            SessionPhase::Onboarding => "onboarding",
            SessionPhase::Active => "active",
        }
    }
}

impl std::fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Navigator entry point for a given session phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppRoute {
    Splash,
    Onboarding,
    Home,
}

/// A screen reachable from an [`AppRoute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    Splash,
    Onboarding,
    Home,
    Profile,
}

impl AppRoute {
    pub fn screens(self) -> &'static [Screen] {
        match self {
            AppRoute::Splash => &[Screen::Splash],
            AppRoute::Onboarding => &[Screen::Onboarding],
            AppRoute::Home => &[Screen::Home, Screen::Profile],
        }
    }
}
