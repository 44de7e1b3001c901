//! Flexible Logging System for FloatBrowser Core.
//!
//! This module provides a configurable logging framework for the FloatBrowser
//! core library, built upon the `tracing` ecosystem. It supports console
//! output and optional file logging with configurable formats.

use crate::config::LoggingConfig;
use crate::error::{CoreError, LoggingError};
use crate::utils;

use atty;
use once_cell::sync::Lazy;
use std::io::stdout;
use std::path::Path;
use std::sync::Mutex;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

/// Initializes a minimal logging setup, directing messages to `stderr`.
///
/// This function is intended for use in tests, early application startup
/// before configuration is loaded, or as a fallback if detailed logging
/// initialization fails. It filters messages based on the `RUST_LOG`
/// environment variable, defaulting to "info" level if `RUST_LOG` is not set
/// or is invalid. Errors during initialization (e.g., if a global logger is
/// already set) are ignored.
pub fn init_minimal_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(Level::INFO.to_string()));

    let _ = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr)) // Colors only if stderr is a TTY
        .try_init(); // Ignore error if already initialized
}

/// Creates a file logging layer.
///
/// Ensures the parent directory for the log file exists, sets up a daily
/// rolling file appender, and configures the log format (text or JSON).
///
/// Returns the boxed `Layer` for file logging together with its
/// `WorkerGuard`; the guard must stay alive for buffered lines to reach the
/// file.
fn create_file_layer(
    log_path: &Path,
    format: &str,
) -> Result<(Box<dyn Layer<Registry> + Send + Sync + 'static>, WorkerGuard), CoreError> {
    if let Some(parent) = log_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            utils::fs::ensure_dir_exists(parent)?;
        }
    }

    let file_appender = tracing_appender::rolling::daily(
        log_path.parent().unwrap_or_else(|| Path::new(".")),
        log_path
            .file_name()
            .unwrap_or_else(|| std::ffi::OsStr::new("floatbrowser.log")),
    );

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);

    match format.to_lowercase().as_str() {
        "json" => {
            let layer = fmt::layer()
                .json()
                .with_writer(non_blocking_writer)
                .with_ansi(false); // No ANSI colors in files
            Ok((Box::new(layer), guard))
        }
        _ => {
            let layer = fmt::layer()
                .with_writer(non_blocking_writer)
                .with_ansi(false);
            Ok((Box::new(layer), guard))
        }
    }
}

/// Global static holding the `WorkerGuard` for the file logger.
///
/// Keeping the guard alive for the duration of the application lets the
/// non-blocking writer flush properly; replacing it on reload drops the old
/// guard and flushes its pending output.
static LOG_WORKER_GUARD: Lazy<Mutex<Option<WorkerGuard>>> = Lazy::new(|| Mutex::new(None));

/// Initializes the global logging system based on the provided [`LoggingConfig`].
///
/// Configures and sets the global `tracing` subscriber with a console layer
/// and an optional file logging layer.
///
/// # Arguments
///
/// * `config`: The logging configuration to apply.
/// * `is_reload`: If `true`, an already-installed subscriber is tolerated
///   (the previous logger keeps running and a note is printed); if `false`,
///   that situation is an error.
///
/// # Errors
///
/// Returns [`CoreError::Logging`] if the configured level does not parse or
/// if setting the global subscriber fails on an initial setup.
pub fn init_logging(config: &LoggingConfig, is_reload: bool) -> Result<(), CoreError> {
    // The loader normalizes the level, but init may be called with a
    // hand-built config too.
    let level_filter_str = match config.level.to_lowercase().as_str() {
        "trace" => Level::TRACE.to_string(),
        "debug" => Level::DEBUG.to_string(),
        "info" => Level::INFO.to_string(),
        "warn" => Level::WARN.to_string(),
        "error" => Level::ERROR.to_string(),
        invalid_level => {
            return Err(CoreError::Logging(LoggingError::FilterError(format!(
                "invalid log level '{}'",
                invalid_level
            ))));
        }
    };

    let stdout_filter = EnvFilter::new(level_filter_str.clone());
    let stdout_layer = match config.format.to_lowercase().as_str() {
        "json" => fmt::layer()
            .json()
            .with_writer(stdout)
            .with_ansi(false)
            .with_filter(stdout_filter)
            .boxed(),
        _ => fmt::layer()
            .with_writer(stdout)
            .with_ansi(atty::is(atty::Stream::Stdout))
            .with_filter(stdout_filter)
            .boxed(),
    };

    let mut new_file_guard: Option<WorkerGuard> = None;
    let file_layer_opt: Option<Box<dyn Layer<Registry> + Send + Sync + 'static>> =
        if let Some(log_path) = &config.file_path {
            let file_filter = EnvFilter::new(level_filter_str);
            let (base_file_layer, guard) = create_file_layer(log_path, &config.format)?;
            new_file_guard = Some(guard);
            Some(base_file_layer.with_filter(file_filter).boxed())
        } else {
            None
        };

    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync + 'static>> = Vec::new();
    layers.push(stdout_layer);
    if let Some(file_layer) = file_layer_opt {
        layers.push(file_layer);
    }

    let result = Registry::default().with(layers).try_init();

    // Swap in the new guard either way; the old one drops here and flushes.
    match LOG_WORKER_GUARD.lock() {
        Ok(mut guard_slot) => {
            *guard_slot = new_file_guard;
        }
        Err(e) => {
            // tracing may be in an uncertain state, fall back to stderr.
            eprintln!(
                "[ERROR] Failed to lock LOG_WORKER_GUARD: {}. Log flushing may be affected.",
                e
            );
        }
    }

    match result {
        Ok(()) => Ok(()),
        Err(e) => {
            if !is_reload {
                Err(CoreError::Logging(LoggingError::InitializationFailure(
                    format!(
                        "Failed to set global tracing subscriber. Was it already initialized? Error: {}",
                        e
                    ),
                )))
            } else {
                eprintln!(
                    "[INFO] Logging re-initialization attempted; previous logger persists. Error: {}",
                    e
                );
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LoggingConfig;
    use tempfile::TempDir;

    // The global subscriber can only ever be installed once per process, so
    // these tests stay away from asserting that init_logging with
    // is_reload=false succeeds; test order would decide the outcome.

    #[test]
    fn test_init_minimal_logging_runs_without_panic() {
        init_minimal_logging();
        // Repeat calls ignore the already-initialized error.
        init_minimal_logging();
        tracing::info!("Minimal logging test message.");
    }

    #[test]
    fn test_create_file_layer_text_format() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("test_text.log");

        let result = create_file_layer(&log_path, "text");
        assert!(result.is_ok(), "create_file_layer failed: {:?}", result.err());
        let (_layer, _guard) = result.unwrap();
    }

    #[test]
    fn test_create_file_layer_json_format() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("test_json.log");

        let result = create_file_layer(&log_path, "json");
        assert!(result.is_ok(), "create_file_layer failed: {:?}", result.err());
    }

    #[test]
    fn test_create_file_layer_ensures_parent_dir_exists() {
        let temp_dir = TempDir::new().unwrap();
        let nested_log_path = temp_dir.path().join("new_parent_dir/nested.log");

        assert!(!nested_log_path.parent().unwrap().exists());

        let result = create_file_layer(&nested_log_path, "text");
        assert!(result.is_ok(), "create_file_layer failed: {:?}", result.err());
        assert!(nested_log_path.parent().unwrap().exists(), "Parent directory was not created");
    }

    #[test]
    fn test_init_logging_invalid_level_returns_error() {
        let config = LoggingConfig {
            level: "supertrace".to_string(),
            file_path: None,
            format: "text".to_string(),
        };
        let result = init_logging(&config, false);
        match result {
            Err(CoreError::Logging(LoggingError::FilterError(msg))) => {
                assert!(msg.contains("supertrace"));
            }
            other => panic!("Expected FilterError, got {:?}", other),
        }
    }

    #[test]
    fn test_init_logging_reload_is_ok_regardless_of_prior_state() {
        let config = LoggingConfig {
            level: "debug".to_string(),
            file_path: None,
            format: "text".to_string(),
        };
        // With is_reload=true the call succeeds whether or not another
        // subscriber already claimed the global slot.
        let result = init_logging(&config, true);
        assert!(result.is_ok(), "reload init should not error: {:?}", result.err());
    }
}
