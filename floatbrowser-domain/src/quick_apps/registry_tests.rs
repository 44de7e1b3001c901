use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::sync::RwLock;

use super::defaults::default_apps;
use super::registry::{AppRegistry, DefaultAppRegistry, STORAGE_KEY};
use super::types::AppDefinition;
use crate::quick_apps::RegistryError;
use crate::storage::{StorageError, SyncStore};

/// Store double that records writes and can be switched into failure modes.
#[derive(Default)]
struct MockSyncStore {
    cells: RwLock<HashMap<String, Value>>,
    set_calls: AtomicUsize,
    fail_get: AtomicBool,
    fail_set: AtomicBool,
}

impl MockSyncStore {
    fn new() -> Self {
        Self::default()
    }

    async fn seed_raw(&self, key: &str, value: Value) {
        self.cells.write().await.insert(key.to_string(), value);
    }

    fn set_calls(&self) -> usize {
        self.set_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SyncStore for MockSyncStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        if self.fail_get.load(Ordering::SeqCst) {
            return Err(StorageError::AccessDenied {
                message: format!("forced get failure on '{}'", key),
            });
        }
        Ok(self.cells.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), StorageError> {
        self.set_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_set.load(Ordering::SeqCst) {
            return Err(StorageError::QuotaExceeded {
                key: key.to_string(),
            });
        }
        self.cells.write().await.insert(key.to_string(), value);
        Ok(())
    }
}

fn registry_over(store: Arc<MockSyncStore>) -> DefaultAppRegistry {
    DefaultAppRegistry::new(store)
}

#[tokio::test]
async fn test_first_load_seeds_defaults_and_persists_them() {
    let store = Arc::new(MockSyncStore::new());
    let registry = registry_over(store.clone());

    let apps = registry.load().await.unwrap();

    assert_eq!(apps, default_apps());
    assert_eq!(store.set_calls(), 1);
    let persisted = store.cells.read().await.get(STORAGE_KEY).cloned();
    assert_eq!(persisted, Some(serde_json::to_value(default_apps()).unwrap()));
}

#[tokio::test]
async fn test_second_load_does_not_rewrite() {
    let store = Arc::new(MockSyncStore::new());
    let registry = registry_over(store.clone());

    let first = registry.load().await.unwrap();
    let second = registry.load().await.unwrap();

    assert_eq!(first, second);
    assert_eq!(store.set_calls(), 1, "seeding must happen at most once");
}

#[tokio::test]
async fn test_save_then_load_round_trips_exactly() {
    let store = Arc::new(MockSyncStore::new());
    let registry = registry_over(store.clone());

    let list = vec![
        AppDefinition::new("docs", "Docs", "https://docs.example.com", 800, 600),
        AppDefinition::new("mail", "Mail", "https://mail.example.com", 420, 720),
    ];
    registry.save(&list).await.unwrap();

    assert_eq!(registry.load().await.unwrap(), list);
}

#[tokio::test]
async fn test_save_empty_list_persists_empty_not_reseeded() {
    let store = Arc::new(MockSyncStore::new());
    let registry = registry_over(store.clone());

    registry.save(&[]).await.unwrap();

    // The key exists with an empty list, so load must NOT seed defaults.
    assert_eq!(registry.load().await.unwrap(), Vec::<AppDefinition>::new());
    assert_eq!(store.set_calls(), 1);
}

#[tokio::test]
async fn test_save_is_total_replacement() {
    let store = Arc::new(MockSyncStore::new());
    let registry = registry_over(store.clone());

    registry.load().await.unwrap(); // seeds 7 defaults
    let shorter = vec![AppDefinition::new(
        "solo", "Solo", "https://solo.example.com", 500, 500,
    )];
    registry.save(&shorter).await.unwrap();

    assert_eq!(registry.load().await.unwrap(), shorter);
}

#[tokio::test]
async fn test_reset_returns_equal_but_independent_copies() {
    let store = Arc::new(MockSyncStore::new());
    let registry = registry_over(store.clone());

    let mut first = registry.reset_to_defaults().await.unwrap();
    first[0].name = "Scribbled over".to_string();

    let second = registry.reset_to_defaults().await.unwrap();

    assert_eq!(second, default_apps());
    assert_eq!(second[0].name, "Gmail");
}

#[tokio::test]
async fn test_malformed_record_is_reported_not_repaired() {
    let store = Arc::new(MockSyncStore::new());
    store.seed_raw(STORAGE_KEY, json!({"oops": "not a list"})).await;
    let registry = registry_over(store.clone());

    let result = registry.load().await;

    assert!(matches!(result, Err(RegistryError::Corrupted { .. })));
    // The malformed value must remain untouched for manual recovery.
    assert_eq!(store.set_calls(), 0);
}

#[tokio::test]
async fn test_get_failure_propagates_as_storage_error() {
    let store = Arc::new(MockSyncStore::new());
    store.fail_get.store(true, Ordering::SeqCst);
    let registry = registry_over(store);

    let result = registry.load().await;

    assert!(matches!(
        result,
        Err(RegistryError::Storage(StorageError::AccessDenied { .. }))
    ));
}

#[tokio::test]
async fn test_set_failure_propagates_from_save() {
    let store = Arc::new(MockSyncStore::new());
    store.fail_set.store(true, Ordering::SeqCst);
    let registry = registry_over(store);

    let result = registry.save(&default_apps()).await;

    assert!(matches!(
        result,
        Err(RegistryError::Storage(StorageError::QuotaExceeded { .. }))
    ));
}

#[tokio::test]
async fn test_seeding_write_failure_propagates_from_first_load() {
    let store = Arc::new(MockSyncStore::new());
    store.fail_set.store(true, Ordering::SeqCst);
    let registry = registry_over(store);

    let result = registry.load().await;

    assert!(matches!(result, Err(RegistryError::Storage(_))));
}

#[tokio::test]
async fn test_custom_storage_key_is_respected() {
    let store = Arc::new(MockSyncStore::new());
    let registry = DefaultAppRegistry::with_storage_key(store.clone(), "testQuickApps");

    registry.load().await.unwrap();

    assert!(store.cells.read().await.contains_key("testQuickApps"));
    assert!(!store.cells.read().await.contains_key(STORAGE_KEY));
}
