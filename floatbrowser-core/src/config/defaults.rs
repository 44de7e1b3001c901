//! Default configuration values for FloatBrowser Core.
//!
//! These functions are used by `serde`'s `default` attribute in the configuration
//! structures to provide sensible default values when they are not specified in
//! the configuration file.

use crate::config::{LoggingConfig, StorageConfig};
use std::path::PathBuf;

/// Returns the default `LoggingConfig`.
///
/// Used by `CoreConfig` if the `logging` section is missing from `config.toml`.
pub(super) fn default_logging_config() -> LoggingConfig {
    LoggingConfig {
        level: default_log_level(),
        file_path: default_log_file_path(),
        format: default_log_format(),
    }
}

/// Returns the default log level string (`"info"`).
///
/// Used by `LoggingConfig` if `level` is not specified.
pub(super) fn default_log_level() -> String {
    "info".to_string()
}

/// Returns the default log file path (`None`).
///
/// Used by `LoggingConfig` if `file_path` is not specified.
pub(super) fn default_log_file_path() -> Option<PathBuf> {
    None // No log file by default
}

/// Returns the default log format string (`"text"`).
///
/// Used by `LoggingConfig` if `format` is not specified.
pub(super) fn default_log_format() -> String {
    "text".to_string()
}

/// Returns the default `StorageConfig`.
///
/// Used by `CoreConfig` if the `storage` section is missing from `config.toml`.
pub(super) fn default_storage_config() -> StorageConfig {
    StorageConfig {
        data_file: default_data_file(),
    }
}

/// Returns the default quick-app data file path (`None`).
///
/// `None` means the file-backed store resolves its own location under the
/// application data directory.
pub(super) fn default_data_file() -> Option<PathBuf> {
    None
}
