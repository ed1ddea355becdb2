use std::sync::Arc;

use ll_core::ports::ProfileStorePort;
use ll_core::profile::ProfileRecord;
use ll_infra::FileProfileStore;
use tempfile::TempDir;

fn profile(n: usize) -> ProfileRecord {
    ProfileRecord {
        phone_number: format!("{n:010}"),
        ..ProfileRecord::onboarding("Ana", "Lee", "ana@x.com")
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_reads_never_observe_a_torn_record() {
    let temp_dir = TempDir::new().unwrap();
    let store = Arc::new(FileProfileStore::new(temp_dir.path().join("profile.json")));
    store.save(&profile(0)).await.unwrap();

    let writer = {
        let store = store.clone();
        tokio::spawn(async move {
            for n in 1..=50 {
                store.save(&profile(n)).await.unwrap();
            }
        })
    };

    let reader = {
        let store = store.clone();
        tokio::spawn(async move {
            for _ in 0..200 {
                let loaded = store
                    .load()
                    .await
                    .expect("load must not fail mid-write")
                    .expect("record must stay present");
                assert_eq!(loaded.first_name, "Ana");
                assert_eq!(loaded.phone_number.len(), 10);
            }
        })
    };

    writer.await.unwrap();
    reader.await.unwrap();

    assert_eq!(store.load().await.unwrap(), Some(profile(50)));
}

#[tokio::test]
async fn record_survives_a_new_store_instance() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("profile.json");

    FileProfileStore::new(path.clone())
        .save(&profile(7))
        .await
        .unwrap();

    let reopened = FileProfileStore::new(path);
    assert_eq!(reopened.load().await.unwrap(), Some(profile(7)));
}

#[tokio::test]
async fn concurrent_writers_each_leave_a_complete_record() {
    let temp_dir = TempDir::new().unwrap();
    let store = Arc::new(FileProfileStore::new(temp_dir.path().join("profile.json")));

    let tasks: Vec<_> = (1..=8)
        .map(|n| {
            let store = store.clone();
            tokio::spawn(async move { store.save(&profile(n)).await })
        })
        .collect();
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    let loaded = store.load().await.unwrap().unwrap();
    assert!((1..=8).any(|n| loaded == profile(n)));
}
