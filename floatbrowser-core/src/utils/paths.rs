//! XDG Base Directory and Application-Specific Path Resolution.
//!
//! This module provides utility functions for resolving standard directory
//! paths according to the XDG Base Directory Specification and for
//! constructing paths specific to the FloatBrowser application. It relies on
//! the `directories-next` crate.
//!
//! # Key Functions
//!
//! - **XDG Base Directories**:
//!   - [`get_config_base_dir()`]: Returns `$XDG_CONFIG_HOME` (e.g., `~/.config`).
//!   - [`get_data_base_dir()`]: Returns `$XDG_DATA_HOME` (e.g., `~/.local/share`).
//!   - [`get_state_base_dir()`]: Returns `$XDG_STATE_HOME` (e.g., `~/.local/state` on Linux).
//!
//! - **Application-Specific Directories** (derived from XDG paths):
//!   - [`get_app_config_dir()`]: e.g., `~/.config/floatbrowser` (holds `config.toml`).
//!   - [`get_app_data_dir()`]: e.g., `~/.local/share/floatbrowser` (holds the quick-app store).
//!   - [`get_app_state_dir()`]: e.g., `~/.local/state/floatbrowser` (holds log files).
//!
//! All functions return `Result<PathBuf, CoreError>`, typically yielding
//! [`CoreError::Config`] with [`ConfigError::DirectoryUnavailable`] if a
//! required directory cannot be determined (e.g., when the HOME directory is
//! not found).

use crate::error::{ConfigError, CoreError};
use directories_next::{BaseDirs, ProjectDirs};
use std::path::PathBuf;

const QUALIFIER: &str = "org";
const ORGANIZATION: &str = "FloatBrowser";
const APPLICATION: &str = "FloatBrowser";

/// Returns the primary base directory for user-specific configuration files.
///
/// This path typically corresponds to `$XDG_CONFIG_HOME` on Linux systems
/// (e.g., `~/.config`). On other platforms, it resolves to the conventional
/// user-specific configuration directory.
///
/// # Errors
/// Returns [`ConfigError::DirectoryUnavailable`] wrapped in [`CoreError::Config`]
/// if the base configuration directory cannot be determined.
pub fn get_config_base_dir() -> Result<PathBuf, CoreError> {
    BaseDirs::new()
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| {
            CoreError::Config(ConfigError::DirectoryUnavailable {
                dir_type: "Config Base".to_string(),
            })
        })
}

/// Returns the primary base directory for user-specific data files.
///
/// This path typically corresponds to `$XDG_DATA_HOME` on Linux systems
/// (e.g., `~/.local/share`).
///
/// # Errors
/// Returns [`ConfigError::DirectoryUnavailable`] wrapped in [`CoreError::Config`]
/// if the base data directory cannot be determined.
pub fn get_data_base_dir() -> Result<PathBuf, CoreError> {
    BaseDirs::new()
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            CoreError::Config(ConfigError::DirectoryUnavailable {
                dir_type: "Data Base".to_string(),
            })
        })
}

/// Returns the primary base directory for user-specific state files.
///
/// This path typically corresponds to `$XDG_STATE_HOME` on Linux systems
/// (e.g., `~/.local/state`). If `$XDG_STATE_HOME` is not set on Linux, it
/// falls back to `$HOME/.local/state`. Non-Linux platforms use the local
/// data directory, as `directories-next` has no generic state directory.
///
/// # Errors
/// Returns [`ConfigError::DirectoryUnavailable`] wrapped in [`CoreError::Config`]
/// if the base state directory cannot be determined.
pub fn get_state_base_dir() -> Result<PathBuf, CoreError> {
    BaseDirs::new()
        .map(|dirs| {
            #[cfg(target_os = "linux")]
            {
                match std::env::var("XDG_STATE_HOME") {
                    Ok(state_home) if !state_home.is_empty() => PathBuf::from(state_home),
                    _ => dirs.home_dir().join(".local/state"),
                }
            }
            #[cfg(not(target_os = "linux"))]
            {
                dirs.data_local_dir().to_path_buf()
            }
        })
        .ok_or_else(|| {
            CoreError::Config(ConfigError::DirectoryUnavailable {
                dir_type: "State Base".to_string(),
            })
        })
}

/// Returns the application-specific configuration directory.
///
/// Derived via `ProjectDirs` from the `QUALIFIER`, `ORGANIZATION`, and
/// `APPLICATION` constants. On Linux this typically resolves to
/// `~/.config/floatbrowser`.
///
/// # Errors
/// Returns [`ConfigError::DirectoryUnavailable`] wrapped in [`CoreError::Config`]
/// if `ProjectDirs` cannot be initialized.
pub fn get_app_config_dir() -> Result<PathBuf, CoreError> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| {
            CoreError::Config(ConfigError::DirectoryUnavailable {
                dir_type: "App Config".to_string(),
            })
        })
}

/// Returns the application-specific data directory.
///
/// On Linux this typically resolves to `~/.local/share/floatbrowser`. The
/// file-backed quick-app store keeps its JSON file here unless configured
/// otherwise.
///
/// # Errors
/// Returns [`ConfigError::DirectoryUnavailable`] wrapped in [`CoreError::Config`]
/// if the application data directory cannot be determined.
pub fn get_app_data_dir() -> Result<PathBuf, CoreError> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            CoreError::Config(ConfigError::DirectoryUnavailable {
                dir_type: "App Data".to_string(),
            })
        })
}

/// Returns the application-specific state directory.
///
/// Built from [`get_state_base_dir`] plus the application name; log files are
/// written here when file logging is enabled.
///
/// # Errors
/// Returns [`ConfigError::DirectoryUnavailable`] wrapped in [`CoreError::Config`]
/// if the base state directory cannot be determined.
pub fn get_app_state_dir() -> Result<PathBuf, CoreError> {
    get_state_base_dir().map(|base| base.join("floatbrowser"))
}
