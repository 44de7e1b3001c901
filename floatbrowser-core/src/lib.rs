//! # FloatBrowser Core Library (`floatbrowser-core`)
//!
//! `floatbrowser-core` is the foundational library for FloatBrowser, the
//! popup panel that turns web apps into floating desktop-style windows. It
//! provides the core functionality the domain layer builds on.
//!
//! ## Purpose
//!
//! - **Error Handling**: A unified error system through the [`CoreError`]
//!   enum and its associated specific error types [`ConfigError`] and
//!   [`LoggingError`].
//! - **Core Data Types**: Integer geometry (`PointInt`, `SizeInt`,
//!   `RectInt`) for popup window bounds.
//! - **Configuration Management**: TOML-based configuration loading with
//!   default fallbacks and validation, through [`ConfigLoader`] and
//!   [`CoreConfig`].
//! - **Logging**: A flexible logging framework built on top of the `tracing`
//!   crate, configurable for console and file output in text or JSON format.
//! - **Utilities**: Filesystem helpers (`utils::fs`) and XDG path resolution
//!   (`utils::paths`).
//!
//! ## Usage
//!
//! ```rust,ignore
//! use floatbrowser_core::config::ConfigLoader;
//! use floatbrowser_core::error::CoreError;
//! use floatbrowser_core::logging::init_logging;
//!
//! fn main() -> Result<(), CoreError> {
//!     let core_config = ConfigLoader::load()?;
//!     init_logging(&core_config.logging, false)?;
//!
//!     tracing::info!("FloatBrowser core initialized.");
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod types;
pub mod utils;

// Re-export key types for convenience
pub use config::{ConfigLoader, CoreConfig, LoggingConfig, StorageConfig};
pub use error::{ConfigError, CoreError, LoggingError};
pub use logging::{init_logging, init_minimal_logging};
pub use types::{PointInt, RectInt, SizeInt};
pub use utils::ensure_dir_exists;
