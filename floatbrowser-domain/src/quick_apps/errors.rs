//! Error types for the quick-app registry.

use thiserror::Error;

use crate::storage::StorageError;

/// Errors surfaced by [`super::AppRegistry`] operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The backing store failed; propagated unchanged.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The persisted record exists but does not decode into an app list.
    ///
    /// The record is left untouched; the explicit reset operation is the
    /// recovery path.
    #[error("Persisted quick-app record under '{key}' is malformed")]
    Corrupted {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}
