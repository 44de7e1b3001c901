//! Error module for the FloatBrowser domain layer.
//!
//! Each domain module defines its own error enum next to its service; this
//! module provides the umbrella [`DomainError`] they all convert into at the
//! controller boundary.

use floatbrowser_core::CoreError;
use thiserror::Error;

use crate::launch::LaunchError;
use crate::quick_apps::RegistryError;
use crate::storage::StorageError;

/// A general Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

/// The primary error type for the domain layer.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Core error.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Backing store error.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Quick-app registry error.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Window launch error.
    #[error(transparent)]
    Launch(#[from] LaunchError),

    /// Other error.
    #[error("Domain error: {0}")]
    Other(String),
}
