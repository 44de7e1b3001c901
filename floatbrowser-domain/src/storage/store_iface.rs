//! Trait for the synchronized key-value store the popup persists into.

use async_trait::async_trait;
use serde_json::Value;

use super::errors::StorageError;

/// A key-value store whose values are replicated across the user's browser
/// instances by the host environment.
///
/// The popup treats the store as opaque: whole JSON values go in and out
/// under string keys, and replication timing is entirely the host's business.
/// Implementations must be `Send + Sync` as they are shared behind `Arc`
/// across async operations.
#[async_trait]
pub trait SyncStore: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// Returns `Ok(None)` when the key has never been written; that case is
    /// distinct from every error.
    async fn get(&self, key: &str) -> Result<Option<Value>, StorageError>;

    /// Writes `value` under `key`, replacing whatever was there.
    async fn set(&self, key: &str, value: Value) -> Result<(), StorageError>;
}
