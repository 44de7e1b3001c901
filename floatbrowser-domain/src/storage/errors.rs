//! Error types for the synchronized key-value store boundary.

use thiserror::Error;

/// Errors surfaced by [`super::SyncStore`] implementations.
///
/// The taxonomy mirrors what a browser sync store can actually report:
/// exhausted quota, denied access, plain I/O trouble, and values that will
/// not encode or decode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing store refused the write because its quota is exhausted.
    #[error("Storage quota exceeded while writing key '{key}'")]
    QuotaExceeded { key: String },

    /// The backing store denied access (e.g., sync disabled by policy).
    #[error("Access to the backing store was denied: {message}")]
    AccessDenied { message: String },

    /// An I/O error occurred while touching the backing store.
    #[error("I/O error while accessing the backing store")]
    Io(#[from] std::io::Error),

    /// A stored value could not be serialized or deserialized.
    #[error("Stored value could not be encoded or decoded")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn quota_exceeded_display_names_the_key() {
        let err = StorageError::QuotaExceeded {
            key: "floatbrowserQuickApps".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "Storage quota exceeded while writing key 'floatbrowserQuickApps'"
        );
        assert!(err.source().is_none());
    }

    #[test]
    fn io_variant_keeps_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Interrupted, "interrupted");
        let err = StorageError::Io(io_err);
        assert!(err.source().unwrap().is::<std::io::Error>());
    }

    #[test]
    fn serialization_variant_keeps_source() {
        let json_err = serde_json::from_str::<serde_json::Value>("{broken").unwrap_err();
        let err = StorageError::Serialization(json_err);
        assert!(err.source().unwrap().is::<serde_json::Error>());
    }
}
