//! Domain layer of the FloatBrowser popup.
//!
//! Everything the popup does lives here: the persisted quick-app catalog,
//! the static workflow library, cascade window placement, batch launching,
//! and the [`PopupController`] that ties them together. Host capabilities
//! (key-value storage, window creation, screen metrics, notifications) are
//! traits; render layers and browser bridges implement them and observe
//! state through [`PopupEvent`] broadcasts.

pub use floatbrowser_core as core;

pub mod error;
pub mod launch;
pub mod notifications;
pub mod placement;
pub mod popup;
pub mod quick_apps;
pub mod shared_types;
pub mod storage;
pub mod workflows;

pub use error::{DomainError, DomainResult};
pub use launch::{
    CreateWindowRequest, DefaultLaunchOrchestrator, FixedScreenMetrics, LaunchError,
    LaunchOrchestrator, ScreenMetrics, WindowHandle, WindowKind, WindowSystem,
};
pub use notifications::{LogNotificationSink, NotificationSink, TOAST_AUTO_DISMISS};
pub use popup::{AppForm, PopupController, PopupEvent};
pub use quick_apps::{AppDefinition, AppRegistry, DefaultAppRegistry, RegistryError};
pub use shared_types::{AppId, WorkflowId};
pub use storage::{FileSyncStore, InMemorySyncStore, StorageError, SyncStore};
pub use workflows::{WorkflowAvailability, WorkflowCatalog, WorkflowDefinition};

use std::sync::Arc;

use floatbrowser_core::config::CoreConfig;

/// Assembles the popup over the given capabilities and loads its state.
///
/// The returned controller is ready to use: the catalog is loaded (seeded
/// with defaults on first run) and the built-in workflow library is
/// attached.
pub async fn initialize(
    store: Arc<dyn SyncStore>,
    windows: Arc<dyn WindowSystem>,
    screen: Arc<dyn ScreenMetrics>,
    notifier: Arc<dyn NotificationSink>,
) -> DomainResult<PopupController> {
    let registry = Arc::new(DefaultAppRegistry::new(store));
    let launcher = Arc::new(DefaultLaunchOrchestrator::new(windows, screen));
    let controller = PopupController::new(
        registry,
        WorkflowCatalog::builtin(),
        launcher,
        notifier,
    );
    controller.initialize().await?;
    Ok(controller)
}

/// Like [`initialize`], backed by a file store resolved from configuration.
///
/// Used by headless embeddings that persist to disk instead of a browser's
/// synchronized storage.
pub async fn initialize_from_config(
    config: &CoreConfig,
    windows: Arc<dyn WindowSystem>,
    screen: Arc<dyn ScreenMetrics>,
    notifier: Arc<dyn NotificationSink>,
) -> DomainResult<PopupController> {
    let store = Arc::new(FileSyncStore::from_config(&config.storage)?);
    initialize(store, windows, screen, notifier).await
}
