//! General Utilities for FloatBrowser Core.
//!
//! # Submodules
//!
//! - [`fs`]: Filesystem utilities, currently directory-existence handling.
//! - [`paths`]: Utilities for resolving standard XDG directories and
//!   application-specific paths.
//!
//! Functions from the `paths` module are accessed via their submodule path
//! (e.g., `floatbrowser_core::utils::paths::get_app_config_dir()`); the most
//! common filesystem helper is re-exported here.

pub mod fs;
pub mod paths;

pub use fs::ensure_dir_exists;
