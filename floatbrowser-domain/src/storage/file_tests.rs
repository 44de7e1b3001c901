use super::file::FileSyncStore;
use super::store_iface::SyncStore;
use crate::storage::StorageError;
use floatbrowser_core::config::StorageConfig;
use serde_json::json;
use tempfile::tempdir;

#[tokio::test]
async fn get_on_missing_file_is_none() {
    let dir = tempdir().unwrap();
    let store = FileSyncStore::new(dir.path().join("quick_apps.json"));

    assert_eq!(store.get("floatbrowserQuickApps").await.unwrap(), None);
}

#[tokio::test]
async fn set_then_get_round_trips() {
    let dir = tempdir().unwrap();
    let store = FileSyncStore::new(dir.path().join("quick_apps.json"));

    let value = json!([{"id": "gmail", "name": "Gmail"}]);
    store.set("floatbrowserQuickApps", value.clone()).await.unwrap();

    assert_eq!(
        store.get("floatbrowserQuickApps").await.unwrap(),
        Some(value)
    );
}

#[tokio::test]
async fn set_creates_missing_parent_directories() {
    let dir = tempdir().unwrap();
    let nested = dir.path().join("state").join("float").join("quick_apps.json");
    let store = FileSyncStore::new(&nested);

    store.set("k", json!(1)).await.unwrap();

    assert!(nested.is_file());
}

#[tokio::test]
async fn keys_are_independent_cells() {
    let dir = tempdir().unwrap();
    let store = FileSyncStore::new(dir.path().join("quick_apps.json"));

    store.set("a", json!(1)).await.unwrap();
    store.set("b", json!(2)).await.unwrap();

    assert_eq!(store.get("a").await.unwrap(), Some(json!(1)));
    assert_eq!(store.get("b").await.unwrap(), Some(json!(2)));
}

#[tokio::test]
async fn set_replaces_whole_value() {
    let dir = tempdir().unwrap();
    let store = FileSyncStore::new(dir.path().join("quick_apps.json"));

    store.set("k", json!([1, 2, 3])).await.unwrap();
    store.set("k", json!([])).await.unwrap();

    assert_eq!(store.get("k").await.unwrap(), Some(json!([])));
}

#[tokio::test]
async fn unreadable_json_surfaces_serialization_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("quick_apps.json");
    std::fs::write(&path, b"{not json").unwrap();
    let store = FileSyncStore::new(&path);

    let result = store.get("k").await;

    assert!(matches!(result, Err(StorageError::Serialization(_))));
}

#[tokio::test]
async fn empty_file_reads_as_empty_store() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("quick_apps.json");
    std::fs::write(&path, b"").unwrap();
    let store = FileSyncStore::new(&path);

    assert_eq!(store.get("k").await.unwrap(), None);
}

#[test]
fn from_config_uses_configured_path() {
    let config = StorageConfig {
        data_file: Some("/tmp/floatbrowser-test/apps.json".into()),
    };
    let store = FileSyncStore::from_config(&config).unwrap();
    assert_eq!(
        store.data_path(),
        std::path::Path::new("/tmp/floatbrowser-test/apps.json")
    );
}
