//! Runs one CLI command against a restored session.

use anyhow::Context;
use serde::Serialize;
use tracing::{info, warn};

use ll_app::SessionOrchestrator;
use ll_core::profile::ProfileRecord;
use ll_core::session::{AppRoute, Screen, SessionPhase, SessionState};

use crate::cli::Commands;

/// What the screens would render for a session state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusView {
    pub phase: SessionPhase,
    pub route: AppRoute,
    pub screens: Vec<Screen>,
    pub signed_in: bool,
    pub full_name: String,
    pub initials: String,
    pub has_avatar: bool,
    pub profile: ProfileRecord,
    /// Storage problem that did not stop the command.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl StatusView {
    pub fn from_state(state: &SessionState) -> Self {
        let route = state.route();
        Self {
            phase: state.phase(),
            route,
            screens: route.screens().to_vec(),
            signed_in: state.session_token.is_some(),
            full_name: state.profile.full_name(),
            initials: state.profile.initials(),
            has_avatar: state.profile.has_avatar(),
            profile: state.profile.clone(),
            warning: None,
        }
    }

    fn with_warning(mut self, warning: Option<String>) -> Self {
        self.warning = warning;
        self
    }
}

/// Restores the session, then applies `command`.
pub async fn run_command(
    orchestrator: &SessionOrchestrator,
    command: Commands,
) -> anyhow::Result<StatusView> {
    let restored = orchestrator.restore().await;
    let restore_warning = restored
        .read_error
        .map(|err| format!("stored profile could not be read: {err}"));

    match command {
        Commands::Status => {
            Ok(StatusView::from_state(&restored.state).with_warning(restore_warning))
        }
        Commands::Onboard(args) => {
            let state = orchestrator
                .onboard(args.into_profile())
                .await
                .context("Onboarding failed")?;
            info!(phase = %state.phase(), "onboarding complete");
            Ok(StatusView::from_state(&state))
        }
        Commands::Update(args) => {
            let update = args.into_update();
            // Outside an active session the orchestrator rejects the phase itself.
            if restored.state.phase() == SessionPhase::Active {
                orchestrator
                    .policy()
                    .check_update(&restored.state.profile, &update)
                    .context("Profile not saved")?;
            }
            let state = orchestrator
                .update_profile(update)
                .await
                .context("Profile not saved")?;
            Ok(StatusView::from_state(&state))
        }
        Commands::Logout => {
            let outcome = orchestrator.logout().await;
            let warning = outcome.clear_error.map(|err| {
                warn!(error = %err, "stored profile may reappear on next start");
                format!("stored profile could not be removed: {err}")
            });
            Ok(StatusView::from_state(&outcome.state).with_warning(warning))
        }
    }
}
