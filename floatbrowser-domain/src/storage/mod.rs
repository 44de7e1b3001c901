//! Synchronized key-value store boundary.
//!
//! The popup persists its quick-app list into a host-provided key-value
//! store that the browser replicates across the user's devices. This module
//! defines that boundary as the [`SyncStore`] trait plus two shipped
//! implementations:
//!
//! - [`InMemorySyncStore`]: process-local, for tests and headless embedding.
//! - [`FileSyncStore`]: a JSON file on disk, for running the core outside a
//!   browser.
//!
//! A real browser bridge implements [`SyncStore`] over the extension storage
//! API and injects it at assembly time.

pub mod errors;
pub mod file;
pub mod memory;
pub mod store_iface;

#[cfg(test)]
mod file_tests;

pub use errors::StorageError;
pub use file::{FileSyncStore, DEFAULT_DATA_FILE_NAME};
pub use memory::InMemorySyncStore;
pub use store_iface::SyncStore;
