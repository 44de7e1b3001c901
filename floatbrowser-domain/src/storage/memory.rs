//! In-memory implementation of the synchronized key-value store.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use super::errors::StorageError;
use super::store_iface::SyncStore;

/// A [`SyncStore`] backed by a process-local map.
///
/// Nothing is replicated or persisted; this is the embedded default for
/// headless use and the backend most tests run against.
#[derive(Debug, Default)]
pub struct InMemorySyncStore {
    cells: RwLock<HashMap<String, Value>>,
}

impl InMemorySyncStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SyncStore for InMemorySyncStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        let cells = self.cells.read().await;
        Ok(cells.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), StorageError> {
        let mut cells = self.cells.write().await;
        cells.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn get_on_missing_key_is_none() {
        let store = InMemorySyncStore::new();
        assert_eq!(store.get("absent").await.unwrap(), None);
    }

    #[tokio::test]
    async fn set_then_get_round_trips() {
        let store = InMemorySyncStore::new();
        store.set("k", json!({"a": 1})).await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), Some(json!({"a": 1})));
    }

    #[tokio::test]
    async fn set_replaces_previous_value() {
        let store = InMemorySyncStore::new();
        store.set("k", json!([1, 2, 3])).await.unwrap();
        store.set("k", json!([])).await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), Some(json!([])));
    }
}
