//! Integration tests for the profile store over real storage adapters
//!
//! Tests the complete flow from use case to the persisted slot

use std::sync::Arc;

use ls_app::{LoadProfile, ProfileStore, UpdateProfile};
use ls_core::ports::{KeyValueStoragePort, ProfileRepositoryPort};
use ls_core::{ProfileError, ProfilePatch, UserProfile, PROFILE_STORAGE_KEY};
use ls_infra::{FileKeyValueStore, InMemoryKeyValueStore, KeyValueProfileRepository};
use tempfile::tempdir;

fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("debug")
        .with_test_writer()
        .try_init();
}

fn store_over(slot: Arc<dyn KeyValueStoragePort>) -> Arc<ProfileStore> {
    let repository: Arc<dyn ProfileRepositoryPort> = Arc::new(KeyValueProfileRepository::new(slot));
    Arc::new(ProfileStore::new(repository))
}

fn profile_a() -> UserProfile {
    UserProfile {
        name: "A".to_string(),
        email: "a@x.com".to_string(),
        language: "english".to_string(),
        notifications: true,
        theme: None,
    }
}

fn seeded_slot(profile: &UserProfile) -> Arc<InMemoryKeyValueStore> {
    Arc::new(InMemoryKeyValueStore::with_entry(
        PROFILE_STORAGE_KEY,
        serde_json::to_string(profile).unwrap(),
    ))
}

#[tokio::test]
async fn default_profile_is_created_and_persisted_on_first_run() {
    init_test_tracing();
    let slot = Arc::new(InMemoryKeyValueStore::new());
    let store = store_over(slot.clone());

    let profile = LoadProfile::new(store).execute().await.unwrap();

    assert_eq!(profile.name, "John Doe");
    assert_eq!(profile.email, "john.doe@example.com");
    assert_eq!(profile.language, "english");
    assert!(profile.notifications);
    assert_eq!(profile.theme, None);

    let raw = slot.get(PROFILE_STORAGE_KEY).await.unwrap().unwrap();
    assert_eq!(
        raw,
        r#"{"name":"John Doe","email":"john.doe@example.com","language":"english","notifications":true}"#
    );
}

#[tokio::test]
async fn partial_update_preserves_untouched_fields() {
    let store = store_over(seeded_slot(&profile_a()));
    LoadProfile::new(store.clone()).execute().await.unwrap();

    let updated = UpdateProfile::new(store)
        .execute(ProfilePatch {
            name: Some("B".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(
        updated,
        UserProfile {
            name: "B".to_string(),
            ..profile_a()
        }
    );
}

#[tokio::test]
async fn explicit_false_notifications_is_applied() {
    let store = store_over(seeded_slot(&profile_a()));
    store.load().await.unwrap();

    let updated = store
        .update(ProfilePatch {
            notifications: Some(false),
            ..Default::default()
        })
        .await
        .unwrap();

    assert!(!updated.notifications);
}

#[tokio::test]
async fn sequential_updates_compose() {
    let slot = seeded_slot(&profile_a());
    let store = store_over(slot.clone());
    store.load().await.unwrap();

    store
        .update(ProfilePatch {
            name: Some("B".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    let updated = store
        .update(ProfilePatch {
            email: Some("b@x.com".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(updated.name, "B");
    assert_eq!(updated.email, "b@x.com");

    // A fresh session sees the composed record too.
    let reopened = store_over(slot).load().await.unwrap();
    assert_eq!(reopened, updated);
}

#[tokio::test]
async fn concurrent_updates_are_serialized_without_lost_writes() {
    let store = store_over(Arc::new(InMemoryKeyValueStore::new()));
    store.load().await.unwrap();

    let name_task = {
        let store = store.clone();
        tokio::spawn(async move {
            store
                .update(ProfilePatch {
                    name: Some("B".to_string()),
                    ..Default::default()
                })
                .await
        })
    };
    let email_task = {
        let store = store.clone();
        tokio::spawn(async move {
            store
                .update(ProfilePatch {
                    email: Some("b@x.com".to_string()),
                    ..Default::default()
                })
                .await
        })
    };
    let theme_task = {
        let store = store.clone();
        tokio::spawn(async move {
            store
                .update(ProfilePatch {
                    theme: Some("dark".to_string()),
                    ..Default::default()
                })
                .await
        })
    };

    name_task.await.unwrap().unwrap();
    email_task.await.unwrap().unwrap();
    theme_task.await.unwrap().unwrap();

    let current = store.current().await.unwrap();
    assert_eq!(current.name, "B");
    assert_eq!(current.email, "b@x.com");
    assert_eq!(current.theme.as_deref(), Some("dark"));
    assert_eq!(store.load().await.unwrap(), current);
}

#[tokio::test]
async fn load_is_idempotent_and_does_not_rewrite() {
    let dir = tempdir().unwrap();
    let store = store_over(Arc::new(FileKeyValueStore::new(dir.path())));
    let path = dir.path().join("userProfile.json");

    let first = store.load().await.unwrap();

    // Swap in a pretty-printed equivalent; any rewrite would put compact
    // JSON back.
    let pretty = serde_json::to_string_pretty(&first).unwrap();
    std::fs::write(&path, &pretty).unwrap();

    let second = store.load().await.unwrap();

    assert_eq!(first, second);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), pretty);
}

#[tokio::test]
async fn malformed_storage_is_reported_and_kept() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("userProfile.json");
    std::fs::write(&path, "garbage").unwrap();
    let store = store_over(Arc::new(FileKeyValueStore::new(dir.path())));

    let err = LoadProfile::new(store.clone()).execute().await.unwrap_err();

    let profile_err = err.downcast_ref::<ProfileError>().unwrap();
    assert!(profile_err.is_malformed());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "garbage");
    assert!(!store.is_loaded().await);
    assert_eq!(store.greeting_name().await, "User");
}

#[tokio::test]
async fn update_without_load_fails_fast() {
    let store = store_over(seeded_slot(&profile_a()));

    let err = UpdateProfile::new(store)
        .execute(ProfilePatch {
            name: Some("B".to_string()),
            ..Default::default()
        })
        .await
        .unwrap_err();

    assert!(err.downcast_ref::<ProfileError>().unwrap().is_uninitialized());
}

#[tokio::test]
async fn empty_stored_value_is_replaced_by_default() {
    let slot = Arc::new(InMemoryKeyValueStore::with_entry(PROFILE_STORAGE_KEY, ""));
    let store = store_over(slot.clone());

    let profile = store.load().await.unwrap();

    assert_eq!(profile, UserProfile::default());
    let raw = slot.get(PROFILE_STORAGE_KEY).await.unwrap().unwrap();
    assert_eq!(raw, serde_json::to_string(&UserProfile::default()).unwrap());
}
