//! Configuration Loading for FloatBrowser Core.
//!
//! This module provides the [`ConfigLoader`] struct, which is responsible for
//! loading, parsing, and validating the `CoreConfig`. It handles locating the
//! configuration file, deserializing it from TOML format, applying default
//! values, and performing validation checks on the loaded configuration.
//!
//! # Usage
//!
//! The primary entry point is the static `ConfigLoader::load()` method:
//!
//! ```rust,ignore
//! use floatbrowser_core::config::ConfigLoader;
//!
//! match ConfigLoader::load() {
//!     Ok(config) => {
//!         println!("Logging level: {}", config.logging.level);
//!     }
//!     Err(e) => {
//!         floatbrowser_core::logging::init_minimal_logging();
//!         tracing::error!("Configuration loading failed: {}", e);
//!     }
//! }
//! ```
//!
//! ## Configuration File Location
//!
//! `ConfigLoader::load()` attempts to load `config.toml` from the
//! application-specific configuration directory, as determined by
//! [`crate::utils::paths::get_app_config_dir`]. If the file is not found, a
//! default configuration is used.
//!
//! ## Validation
//!
//! After loading (or generating defaults), the configuration undergoes
//! validation via `validate_config`:
//! - Log level and format strings are normalized to lowercase and checked
//!   against the known sets.
//! - A relative log file path is resolved into the application state
//!   directory, and its parent directory is created.
//! - A relative quick-app data file path is resolved into the application
//!   data directory. The file store itself creates parent directories on
//!   first write, so none are created here.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::config::CoreConfig;
use crate::error::{ConfigError, CoreError};
use crate::utils::fs::ensure_dir_exists;
use crate::utils::paths::{get_app_config_dir, get_app_data_dir, get_app_state_dir};

/// File name of the core configuration file inside the app config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const VALID_LOG_FORMATS: [&str; 2] = ["text", "json"];

/// `ConfigLoader` provides static methods to load and validate `CoreConfig`.
///
/// This is an empty struct used as a namespace for configuration loading
/// logic. The main entry point is the `load()` method.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads and validates the `CoreConfig` for the application.
    ///
    /// Reads `config.toml` from the application config directory. A missing
    /// file yields the default configuration; any other read failure, a parse
    /// failure, or a validation failure is returned as a [`CoreError`].
    pub fn load() -> Result<CoreConfig, CoreError> {
        let config_path = get_app_config_dir()?.join(CONFIG_FILE_NAME);

        let config = match fs::read_to_string(&config_path) {
            Ok(content) => toml::from_str(&content)
                .map_err(|e| CoreError::Config(ConfigError::ParseError(e)))?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(
                    "No configuration file at {:?}, using defaults",
                    config_path
                );
                CoreConfig::default()
            }
            Err(e) => {
                return Err(CoreError::Config(ConfigError::ReadError {
                    path: config_path,
                    source: e,
                }));
            }
        };

        Self::validate_config(config)
    }

    /// Loads and validates a `CoreConfig` from an explicit file path.
    ///
    /// Unlike [`ConfigLoader::load`], a missing file is an error here: the
    /// caller asked for that specific file.
    pub fn load_from_path(path: &Path) -> Result<CoreConfig, CoreError> {
        let content = fs::read_to_string(path).map_err(|e| {
            CoreError::Config(ConfigError::ReadError {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        let config =
            toml::from_str(&content).map_err(|e| CoreError::Config(ConfigError::ParseError(e)))?;
        Self::validate_config(config)
    }

    /// Normalizes and checks a parsed configuration.
    fn validate_config(mut config: CoreConfig) -> Result<CoreConfig, CoreError> {
        let level = config.logging.level.trim().to_lowercase();
        if !VALID_LOG_LEVELS.contains(&level.as_str()) {
            return Err(CoreError::Config(ConfigError::ValidationError(format!(
                "unknown log level '{}', expected one of {:?}",
                config.logging.level, VALID_LOG_LEVELS
            ))));
        }
        config.logging.level = level;

        let format = config.logging.format.trim().to_lowercase();
        if !VALID_LOG_FORMATS.contains(&format.as_str()) {
            return Err(CoreError::Config(ConfigError::ValidationError(format!(
                "unknown log format '{}', expected one of {:?}",
                config.logging.format, VALID_LOG_FORMATS
            ))));
        }
        config.logging.format = format;

        if let Some(path) = config.logging.file_path.take() {
            let resolved = if path.is_relative() {
                get_app_state_dir()?.join(path)
            } else {
                path
            };
            if let Some(parent) = resolved.parent() {
                ensure_dir_exists(parent)?;
            }
            config.logging.file_path = Some(resolved);
        }

        if let Some(path) = config.storage.data_file.take() {
            let resolved = if path.is_relative() {
                get_app_data_dir()?.join(path)
            } else {
                path
            };
            config.storage.data_file = Some(resolved);
        }

        Ok(config)
    }
}
