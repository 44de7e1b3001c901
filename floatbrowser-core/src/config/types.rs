//! Configuration Data Structures for FloatBrowser Core.
//!
//! This module defines the structures used to represent the configuration of
//! the FloatBrowser core layer. These structs are typically populated by
//! deserializing a TOML configuration file.
//!
//! # Key Structs
//! - [`CoreConfig`]: The root configuration structure.
//! - [`LoggingConfig`]: Configuration specific to the logging subsystem.
//! - [`StorageConfig`]: Configuration for the persisted quick-app data file.
//!
//! These structs utilize `serde` for deserialization and apply default values
//! for fields not present in the configuration source, referencing functions
//! from the [`super::defaults`] module. They also enforce that no unknown
//! fields are present during deserialization via `#[serde(deny_unknown_fields)]`.

use super::defaults;
use serde::Deserialize;
use std::path::PathBuf;

/// Configuration settings for the logging subsystem.
///
/// Defines parameters such as the log level, optional log file path, and log
/// format. These settings are used by the `floatbrowser_core::logging` module
/// to initialize the global logger.
///
/// # Examples
///
/// ```
/// use floatbrowser_core::config::LoggingConfig;
/// use std::path::PathBuf;
///
/// let default_log_config = LoggingConfig::default();
/// assert_eq!(default_log_config.level, "info");
/// assert_eq!(default_log_config.file_path, None);
/// assert_eq!(default_log_config.format, "text");
///
/// let toml_str = r#"
/// level = "debug"
/// file_path = "/var/log/floatbrowser.log"
/// format = "json"
/// "#;
/// let log_config: LoggingConfig = toml::from_str(toml_str).unwrap();
/// assert_eq!(log_config.level, "debug");
/// assert_eq!(log_config.file_path, Some(PathBuf::from("/var/log/floatbrowser.log")));
/// assert_eq!(log_config.format, "json");
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// The minimum log level to record.
    /// Valid values (case-insensitive): "trace", "debug", "info", "warn", "error".
    /// Defaults to "info" via [`defaults::default_log_level`].
    #[serde(default = "defaults::default_log_level")]
    pub level: String,
    /// Optional path to a file where logs should be written.
    /// If `None`, file logging is disabled.
    /// Relative paths are resolved against the application's state directory.
    /// Defaults to `None` via [`defaults::default_log_file_path`].
    #[serde(default = "defaults::default_log_file_path")]
    pub file_path: Option<PathBuf>,
    /// The format for log messages written to a file.
    /// Valid values (case-insensitive): "text", "json".
    /// Defaults to "text" via [`defaults::default_log_format`].
    #[serde(default = "defaults::default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        defaults::default_logging_config()
    }
}

/// Configuration for the persisted quick-app store.
///
/// # Examples
///
/// ```
/// use floatbrowser_core::config::StorageConfig;
/// use std::path::PathBuf;
///
/// let default_storage = StorageConfig::default();
/// assert_eq!(default_storage.data_file, None);
///
/// let toml_str = r#"data_file = "/tmp/quick_apps.json""#;
/// let storage: StorageConfig = toml::from_str(toml_str).unwrap();
/// assert_eq!(storage.data_file, Some(PathBuf::from("/tmp/quick_apps.json")));
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Optional path of the JSON file backing the quick-app store.
    /// If `None`, the store resolves `quick_apps.json` under the application
    /// data directory. Relative paths are resolved against that directory.
    /// Defaults to `None` via [`defaults::default_data_file`].
    #[serde(default = "defaults::default_data_file")]
    pub data_file: Option<PathBuf>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        defaults::default_storage_config()
    }
}

/// Root configuration structure for the FloatBrowser core layer.
///
/// This struct aggregates all core configuration settings: the logging
/// subsystem and the backing store location. It is designed to be
/// deserialized from a TOML file and uses default values for missing
/// sections or fields.
///
/// # Examples
///
/// ```
/// use floatbrowser_core::config::CoreConfig;
///
/// let core_config = CoreConfig::default();
/// assert_eq!(core_config.logging.level, "info");
///
/// let toml_str = r#"
/// [logging]
/// level = "warn"
/// format = "json"
/// "#;
/// let loaded_config: CoreConfig = toml::from_str(toml_str).unwrap();
/// assert_eq!(loaded_config.logging.level, "warn");
/// assert_eq!(loaded_config.logging.format, "json");
/// assert_eq!(loaded_config.logging.file_path, None); // Default for file_path
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CoreConfig {
    /// Configuration for the logging subsystem.
    /// Defaults are provided by [`defaults::default_logging_config`].
    #[serde(default = "defaults::default_logging_config")]
    pub logging: LoggingConfig,
    /// Configuration for the persisted quick-app store.
    /// Defaults are provided by [`defaults::default_storage_config`].
    #[serde(default = "defaults::default_storage_config")]
    pub storage: StorageConfig,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            logging: defaults::default_logging_config(),
            storage: defaults::default_storage_config(),
        }
    }
}
