use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use ll_app::SessionOrchestrator;
use ll_core::ports::{ProfileStoreError, ProfileStorePort};
use ll_core::profile::{NotificationPrefsUpdate, ProfileRecord, ProfileUpdate};
use ll_core::session::SessionState;
use ll_core::validation::ValidationPolicy;
use ll_infra::InMemoryProfileStore;

/// Store whose calls suspend for a while before reaching the inner store.
struct SlowStore {
    inner: InMemoryProfileStore,
    delay: Duration,
}

#[async_trait]
impl ProfileStorePort for SlowStore {
    async fn load(&self) -> Result<Option<ProfileRecord>, ProfileStoreError> {
        tokio::time::sleep(self.delay).await;
        self.inner.load().await
    }

    async fn save(&self, profile: &ProfileRecord) -> Result<(), ProfileStoreError> {
        tokio::time::sleep(self.delay).await;
        self.inner.save(profile).await
    }

    async fn clear(&self) -> Result<(), ProfileStoreError> {
        tokio::time::sleep(self.delay).await;
        self.inner.clear().await
    }
}

fn ana() -> ProfileRecord {
    ProfileRecord::onboarding("Ana", "Lee", "ana@x.com")
}

fn slow_orchestrator() -> (Arc<SessionOrchestrator>, Arc<SlowStore>) {
    let store = Arc::new(SlowStore {
        inner: InMemoryProfileStore::with_profile(ana()),
        delay: Duration::from_millis(20),
    });
    let orchestrator = Arc::new(SessionOrchestrator::new(
        store.clone(),
        ValidationPolicy::new(),
    ));
    (orchestrator, store)
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn rapid_updates_both_land() {
    let (orchestrator, store) = slow_orchestrator();
    orchestrator.restore().await;

    let first = {
        let orchestrator = orchestrator.clone();
        tokio::spawn(async move {
            orchestrator
                .update_profile(ProfileUpdate {
                    phone_number: Some("5551234567".into()),
                    ..Default::default()
                })
                .await
        })
    };
    let second = {
        let orchestrator = orchestrator.clone();
        tokio::spawn(async move {
            orchestrator
                .update_profile(ProfileUpdate {
                    notification_prefs: NotificationPrefsUpdate {
                        newsletter: Some(true),
                        ..Default::default()
                    },
                    ..Default::default()
                })
                .await
        })
    };
    first.await.unwrap().expect("first update");
    second.await.unwrap().expect("second update");

    let profile = orchestrator.snapshot().profile;
    assert_eq!(profile.phone_number, "5551234567");
    assert!(profile.notification_prefs.newsletter);
    assert_eq!(store.inner.stored().await, Some(profile));
}

#[tokio::test]
async fn snapshot_never_shows_pending_update() {
    let (orchestrator, _) = slow_orchestrator();
    orchestrator.restore().await;

    let pending = {
        let orchestrator = orchestrator.clone();
        tokio::spawn(async move {
            orchestrator
                .update_profile(ProfileUpdate {
                    email: Some("bo@x.com".into()),
                    ..Default::default()
                })
                .await
        })
    };

    tokio::time::sleep(Duration::from_millis(5)).await;
    assert_eq!(orchestrator.snapshot().profile.email, "ana@x.com");

    pending.await.unwrap().expect("update");
    assert_eq!(orchestrator.snapshot().profile.email, "bo@x.com");
}

#[tokio::test]
async fn observed_states_never_show_loading_and_end_logged_out() {
    let (orchestrator, _) = slow_orchestrator();
    let mut rx = orchestrator.subscribe();

    let observer = tokio::spawn(async move {
        let mut seen: Vec<SessionState> = Vec::new();
        while rx.changed().await.is_ok() {
            let state = rx.borrow_and_update().clone();
            let done = !state.onboarding_completed && !state.loading && !seen.is_empty();
            seen.push(state);
            if done {
                break;
            }
        }
        seen
    });

    orchestrator.restore().await;
    orchestrator
        .update_profile(ProfileUpdate {
            last_name: Some("Park".into()),
            ..Default::default()
        })
        .await
        .expect("update");
    orchestrator.restore().await;
    orchestrator.logout().await;

    let seen = observer.await.unwrap();
    assert!(seen.iter().all(|s| !s.loading));
    assert_eq!(seen.first().map(|s| s.profile.last_name.as_str()), Some("Lee"));
    assert!(!seen.last().unwrap().onboarding_completed);
}

#[tokio::test]
async fn concurrent_restores_agree_on_state() {
    let (orchestrator, _) = slow_orchestrator();

    let (a, b) = tokio::join!(orchestrator.restore(), orchestrator.restore());

    assert_eq!(a.state, b.state);
    assert!(a.state.onboarding_completed);
}

#[tokio::test]
async fn update_committing_after_logout_keeps_default_profile() {
    let (orchestrator, _) = slow_orchestrator();
    orchestrator.restore().await;

    // Logout commits while the update's save is still in flight.
    let logout = {
        let orchestrator = orchestrator.clone();
        tokio::spawn(async move { orchestrator.logout().await })
    };
    tokio::time::sleep(Duration::from_millis(5)).await;
    let update = orchestrator.update_profile(ProfileUpdate {
        last_name: Some("Park".into()),
        ..Default::default()
    });

    let (logout, update) = tokio::join!(logout, update);
    assert!(logout.unwrap().cleared());
    update.expect("update save itself succeeds");

    let state = orchestrator.snapshot();
    assert!(!state.onboarding_completed);
    assert_eq!(state.profile, ProfileRecord::default());
}
