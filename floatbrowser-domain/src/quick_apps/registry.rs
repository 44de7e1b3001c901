//! Persistence service for the user's quick-app catalog.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use super::defaults::default_apps;
use super::errors::RegistryError;
use super::types::AppDefinition;
use crate::storage::{StorageError, SyncStore};

/// Key under which the app list lives in the synchronized store.
pub const STORAGE_KEY: &str = "floatbrowserQuickApps";

/// Service managing the persisted quick-app list.
///
/// The list is stored wholesale under a single key; every save replaces the
/// previous value. Storage failures propagate unchanged to the caller.
#[async_trait]
pub trait AppRegistry: Send + Sync {
    /// Loads the current app list, seeding the built-in defaults if the
    /// store has never been written.
    async fn load(&self) -> Result<Vec<AppDefinition>, RegistryError>;

    /// Persists `apps` as the complete new list. No merging, no diffing;
    /// an empty slice persists as an empty list.
    async fn save(&self, apps: &[AppDefinition]) -> Result<(), RegistryError>;

    /// Replaces the persisted list with a fresh copy of the built-in
    /// defaults and returns that copy.
    async fn reset_to_defaults(&self) -> Result<Vec<AppDefinition>, RegistryError>;
}

/// Default [`AppRegistry`] over an injected [`SyncStore`].
pub struct DefaultAppRegistry {
    store: Arc<dyn SyncStore>,
    storage_key: String,
}

impl DefaultAppRegistry {
    /// Creates a registry using the standard storage key.
    pub fn new(store: Arc<dyn SyncStore>) -> Self {
        Self::with_storage_key(store, STORAGE_KEY)
    }

    /// Creates a registry over a custom storage key.
    pub fn with_storage_key(store: Arc<dyn SyncStore>, storage_key: impl Into<String>) -> Self {
        Self {
            store,
            storage_key: storage_key.into(),
        }
    }

    async fn persist(&self, apps: &[AppDefinition]) -> Result<(), RegistryError> {
        let value = serde_json::to_value(apps).map_err(StorageError::from)?;
        self.store.set(&self.storage_key, value).await?;
        Ok(())
    }
}

#[async_trait]
impl AppRegistry for DefaultAppRegistry {
    async fn load(&self) -> Result<Vec<AppDefinition>, RegistryError> {
        match self.store.get(&self.storage_key).await? {
            Some(value) => {
                let apps: Vec<AppDefinition> =
                    serde_json::from_value(value).map_err(|e| {
                        warn!(
                            "Quick-app record under '{}' is malformed: {}",
                            self.storage_key, e
                        );
                        RegistryError::Corrupted {
                            key: self.storage_key.clone(),
                            source: e,
                        }
                    })?;
                debug!("Loaded {} quick apps from '{}'", apps.len(), self.storage_key);
                Ok(apps)
            }
            None => {
                let defaults = default_apps();
                info!(
                    "No quick apps stored under '{}', seeding {} built-in defaults",
                    self.storage_key,
                    defaults.len()
                );
                self.persist(&defaults).await?;
                Ok(defaults)
            }
        }
    }

    async fn save(&self, apps: &[AppDefinition]) -> Result<(), RegistryError> {
        debug!("Saving {} quick apps to '{}'", apps.len(), self.storage_key);
        self.persist(apps).await
    }

    async fn reset_to_defaults(&self) -> Result<Vec<AppDefinition>, RegistryError> {
        let defaults = default_apps();
        self.persist(&defaults).await?;
        info!("Quick apps reset to the {} built-in defaults", defaults.len());
        Ok(defaults)
    }
}
