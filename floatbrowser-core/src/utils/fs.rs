//! Filesystem Utilities.
//!
//! This module provides helper functions for common filesystem operations
//! that integrate with the crate's error handling by returning `CoreError`.

use crate::error::CoreError;
use std::fs;
use std::path::Path;

/// Ensures that a directory exists at the given path.
///
/// If the path does not exist, this function will attempt to create it,
/// including any necessary parent directories. If the path already exists but
/// is not a directory, an error is returned. If the path exists and is a
/// directory, the function succeeds.
///
/// # Arguments
///
/// * `path`: The directory whose existence should be ensured.
///
/// # Returns
///
/// * `Ok(())` if the directory exists or was successfully created.
/// * `Err(CoreError)` if the path exists but is not a directory, or if
///   directory creation fails.
pub fn ensure_dir_exists(path: &Path) -> Result<(), CoreError> {
    if path.exists() {
        if !path.is_dir() {
            Err(CoreError::Filesystem {
                message: "Path exists but is not a directory".to_string(),
                path: path.to_path_buf(),
                source: std::io::Error::new(
                    std::io::ErrorKind::AlreadyExists,
                    "Path exists but is not a directory",
                ),
            })
        } else {
            Ok(())
        }
    } else {
        fs::create_dir_all(path).map_err(|e| CoreError::Filesystem {
            message: "Failed to create directory".to_string(),
            path: path.to_path_buf(),
            source: e,
        })
    }
}
