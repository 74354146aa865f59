//! File-backed profile persistence across repository instances.

use std::sync::Arc;

use ls_core::ports::{KeyValueStoragePort, ProfileRepositoryPort};
use ls_core::{UserProfile, PROFILE_STORAGE_KEY};
use ls_infra::{FileKeyValueStore, KeyValueProfileRepository};
use tempfile::tempdir;

fn repository_at(root: &std::path::Path) -> KeyValueProfileRepository {
    KeyValueProfileRepository::new(Arc::new(FileKeyValueStore::new(root)))
}

#[tokio::test]
async fn profile_survives_reopening_the_store() {
    let dir = tempdir().unwrap();

    let profiles = [
        UserProfile {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            language: "french".to_string(),
            notifications: false,
            theme: Some("dark".to_string()),
        },
        UserProfile {
            name: "".to_string(),
            email: "not-an-email".to_string(),
            language: "klingon".to_string(),
            notifications: true,
            theme: None,
        },
    ];

    for profile in profiles {
        repository_at(dir.path()).write(&profile).await.unwrap();

        let loaded = repository_at(dir.path()).read().await.unwrap();
        assert_eq!(loaded, Some(profile));
    }
}

#[tokio::test]
async fn record_is_stored_under_the_fixed_key() {
    let dir = tempdir().unwrap();
    repository_at(dir.path())
        .write(&UserProfile::default())
        .await
        .unwrap();

    let store = FileKeyValueStore::new(dir.path());
    let raw = store.get(PROFILE_STORAGE_KEY).await.unwrap().unwrap();

    assert!(dir.path().join("userProfile.json").is_file());
    assert!(raw.contains(r#""name":"John Doe""#));
}

#[tokio::test]
async fn garbage_on_disk_is_reported_not_replaced() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("userProfile.json");
    std::fs::write(&path, "{{{ definitely not json").unwrap();

    let err = repository_at(dir.path()).read().await.unwrap_err();

    assert!(err.is_malformed());
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "{{{ definitely not json"
    );
}

#[tokio::test]
async fn zero_byte_file_reads_as_no_profile() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("userProfile.json"), "").unwrap();

    let loaded = repository_at(dir.path()).read().await.unwrap();

    assert!(loaded.is_none());
}
