//! Quick-app catalog: data types, built-in defaults, and the persistence
//! service.
//!
//! A quick app is a web app the user launches as a floating popup window.
//! The catalog is a flat, ordered list persisted wholesale under a single
//! store key ([`registry::STORAGE_KEY`]); first access seeds the built-in
//! defaults from [`defaults::default_apps`].

pub mod defaults;
pub mod errors;
pub mod registry;
pub mod types;

#[cfg(test)]
mod registry_tests;

pub use defaults::default_apps;
pub use errors::RegistryError;
pub use registry::{AppRegistry, DefaultAppRegistry, STORAGE_KEY};
pub use types::AppDefinition;
