//! Error handling for the FloatBrowser core layer.
//!
//! This module defines the error types shared by the foundation crate using
//! the `thiserror` crate for ergonomic error definition and handling.
//!
//! The main error type is [`CoreError`], which encapsulates more specific
//! errors like [`ConfigError`] and [`LoggingError`]. Higher layers wrap
//! `CoreError` into their own umbrella types.
//!
//! # Examples
//!
//! ```rust,ignore
//! use floatbrowser_core::error::CoreError;
//!
//! fn resolve_state_dir() -> Result<(), CoreError> {
//!     // return Err(CoreError::Internal("state dir probe failed".to_string()));
//!     Ok(())
//! }
//! ```

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Core error type for the FloatBrowser foundation layer.
///
/// This enum represents all possible errors that can occur in the core layer.
/// It is designed to be used as a common error type throughout the crate,
/// often by wrapping more specific error types.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Errors related to configuration loading, parsing, or validation.
    /// Wraps a [`ConfigError`].
    #[error("Configuration Error: {0}")]
    Config(#[from] ConfigError),

    /// Errors raised while setting up or reconfiguring the logging system.
    /// Wraps a [`LoggingError`].
    #[error("Logging Error: {0}")]
    Logging(#[from] LoggingError),

    /// Errors related to filesystem operations, such as creating directories,
    /// that are not covered by more specific configuration or logging errors.
    /// Includes a message, the path involved, and the source I/O error.
    #[error("Filesystem Error: {message} (Path: {path:?})")]
    Filesystem {
        message: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// General I/O errors not covered by other specific variants.
    /// Wraps a `std::io::Error`.
    #[error("I/O Error: {0}")]
    Io(#[from] io::Error),

    /// Errors due to invalid input provided to a function or method.
    /// Contains a descriptive message.
    #[error("Invalid Input: {0}")]
    InvalidInput(String),

    /// Catch-all for unexpected internal errors within the core library.
    /// Contains a descriptive message.
    #[error("An unexpected internal error occurred: {0}")]
    Internal(String),
}

/// Error type for configuration-related operations.
///
/// This enum represents errors that can occur during configuration
/// loading, parsing, or access. It is typically wrapped by [`CoreError::Config`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An error occurred while attempting to read a configuration file.
    /// Includes the path to the file and the source I/O error.
    #[error("Failed to read configuration file from {path:?}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An error occurred while parsing a configuration file (e.g., invalid TOML).
    /// Wraps a `toml::de::Error`.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),

    /// An error occurred due to invalid configuration values after successful parsing.
    /// Contains a descriptive message of the validation failure.
    #[error("Configuration validation failed: {0}")]
    ValidationError(String),

    /// A required base directory (e.g., XDG config/data home) could not be determined.
    /// Contains a string identifying the type of directory that was unavailable.
    #[error("Could not determine base directory for {dir_type}")]
    DirectoryUnavailable { dir_type: String },
}

/// Error type for logging-related operations.
///
/// This enum represents errors that can occur while initializing or
/// reconfiguring the tracing subscriber stack. It is wrapped by
/// [`CoreError::Logging`] at the crate boundary.
#[derive(Error, Debug)]
pub enum LoggingError {
    /// The subscriber stack could not be installed.
    #[error("Failed to initialize logging: {0}")]
    InitializationFailure(String),

    /// A log filter directive (e.g., the configured level string) did not parse.
    #[error("Failed to set log filter: {0}")]
    FilterError(String),

    /// An I/O error occurred while preparing a log destination, such as
    /// creating the log file directory. Wraps a `std::io::Error`.
    #[error("Logging I/O error: {0}")]
    IoError(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error; // To use the .source() method
    use std::io::{Error as IoError, ErrorKind};

    // --- CoreError Tests ---

    #[test]
    fn test_core_error_config_variant() {
        let original_config_err = ConfigError::ValidationError("bad level".to_string());
        let core_err = CoreError::Config(original_config_err);

        assert_eq!(
            format!("{}", core_err),
            "Configuration Error: Configuration validation failed: bad level"
        );
        assert!(core_err.source().is_some());
        match core_err.source().unwrap().downcast_ref::<ConfigError>() {
            Some(ConfigError::ValidationError(msg)) => assert_eq!(msg, "bad level"),
            _ => panic!("Incorrect source for CoreError::Config"),
        }
    }

    #[test]
    fn test_core_error_logging_variant() {
        let log_err = LoggingError::InitializationFailure("subscriber already set".to_string());
        let core_err = CoreError::Logging(log_err);

        assert_eq!(
            format!("{}", core_err),
            "Logging Error: Failed to initialize logging: subscriber already set"
        );
        assert!(core_err.source().is_some());
        assert!(core_err.source().unwrap().is::<LoggingError>());
    }

    #[test]
    fn test_core_error_filesystem_variant() {
        let path = PathBuf::from("/tmp/quick_apps.json");
        let io_err_source = IoError::new(ErrorKind::PermissionDenied, "denied");
        let core_err = CoreError::Filesystem {
            message: "Could not create data directory".to_string(),
            path: path.clone(),
            source: io_err_source,
        };

        assert_eq!(
            format!("{}", core_err),
            format!("Filesystem Error: Could not create data directory (Path: {:?})", path)
        );
        assert_eq!(
            core_err
                .source()
                .unwrap()
                .downcast_ref::<IoError>()
                .unwrap()
                .kind(),
            ErrorKind::PermissionDenied
        );
    }

    #[test]
    fn test_core_error_io_variant() {
        let io_err_source = IoError::new(ErrorKind::NotFound, "missing file");
        let core_err = CoreError::Io(io_err_source); // Uses #[from]

        assert_eq!(format!("{}", core_err), "I/O Error: missing file");
        assert!(core_err.source().is_some());
    }

    #[test]
    fn test_core_error_invalid_input_variant() {
        let core_err = CoreError::InvalidInput("empty key".to_string());

        assert_eq!(format!("{}", core_err), "Invalid Input: empty key");
        assert!(core_err.source().is_none());
    }

    #[test]
    fn test_core_error_internal_variant() {
        let core_err = CoreError::Internal("unreachable state".to_string());

        assert_eq!(
            format!("{}", core_err),
            "An unexpected internal error occurred: unreachable state"
        );
        assert!(core_err.source().is_none());
    }

    // --- ConfigError Tests ---

    #[test]
    fn test_config_error_read_error_variant() {
        let path = PathBuf::from("/config/config.toml");
        let io_err_source = IoError::new(ErrorKind::NotFound, "no such file");
        let config_err = ConfigError::ReadError {
            path: path.clone(),
            source: io_err_source,
        };

        assert_eq!(
            format!("{}", config_err),
            format!("Failed to read configuration file from {:?}", path)
        );
        assert!(config_err.source().is_some());
    }

    #[test]
    fn test_config_error_parse_error_variant() {
        // Parse an invalid TOML string to obtain a real toml::de::Error.
        let toml_err_source: toml::de::Error = toml::from_str::<toml::Value>("not = valid = toml").unwrap_err();
        let toml_err_display = format!("{}", toml_err_source);

        let config_err = ConfigError::ParseError(toml_err_source);

        assert_eq!(
            format!("{}", config_err),
            format!("Failed to parse configuration file: {}", toml_err_display)
        );
        assert!(config_err.source().unwrap().is::<toml::de::Error>());
    }

    #[test]
    fn test_config_error_directory_unavailable_variant() {
        let config_err = ConfigError::DirectoryUnavailable {
            dir_type: "XDG Data".to_string(),
        };

        assert_eq!(
            format!("{}", config_err),
            "Could not determine base directory for XDG Data"
        );
        assert!(config_err.source().is_none());
    }

    // --- LoggingError Tests ---

    #[test]
    fn test_logging_error_filter_error_variant() {
        let log_err = LoggingError::FilterError("unknown level 'loud'".to_string());

        assert_eq!(
            format!("{}", log_err),
            "Failed to set log filter: unknown level 'loud'"
        );
        assert!(log_err.source().is_none());
    }

    #[test]
    fn test_logging_error_io_error_variant() {
        let io_err_source = IoError::new(ErrorKind::BrokenPipe, "log pipe closed");
        let log_err = LoggingError::IoError(io_err_source); // Uses #[from]

        assert_eq!(format!("{}", log_err), "Logging I/O error: log pipe closed");
        assert!(log_err.source().is_some());
    }
}
