//! Configuration Management for FloatBrowser Core.
//!
//! This module provides the structures and mechanisms for handling
//! configuration within the FloatBrowser core library.
//!
//! ## Key Components:
//!
//! - **Submodules**:
//!   - [`types`]: Contains the configuration struct definitions like
//!     [`CoreConfig`], [`LoggingConfig`], and [`StorageConfig`]. These structs
//!     define the schema of the configuration.
//!   - [`defaults`]: Provides functions that return default values for the
//!     configuration settings. These are used when a configuration file is
//!     missing or incomplete.
//!   - [`loader`]: Implements the logic for loading configuration data from a
//!     TOML file. The central piece is the [`ConfigLoader`] struct.
//!
//! ## Configuration Loading Process:
//!
//! 1. `ConfigLoader::load()` looks for `config.toml` in the application
//!    configuration directory (determined by `utils::paths`).
//! 2. A missing file yields the default `CoreConfig`; a present file is
//!    parsed as TOML.
//! 3. The result is validated: log level and format strings are normalized,
//!    and relative file paths are resolved against the application state and
//!    data directories.

pub mod defaults;
pub mod loader;
pub mod types;

pub use loader::{ConfigLoader, CONFIG_FILE_NAME};
pub use types::{CoreConfig, LoggingConfig, StorageConfig};
