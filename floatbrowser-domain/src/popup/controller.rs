//! Popup controller wiring user intents to the underlying services.
//!
//! The controller owns an in-memory snapshot of the app catalog, delegates
//! persistence to the [`AppRegistry`], window opening to the
//! [`LaunchOrchestrator`], and user feedback to the [`NotificationSink`].
//! Render layers observe state through [`PopupEvent`] broadcasts instead of
//! polling.

use std::sync::Arc;

use tokio::sync::{broadcast, RwLock};
use tracing::{debug, info};
use url::Url;

use crate::error::DomainResult;
use crate::launch::orchestrator::LaunchOrchestrator;
use crate::launch::window_system::WindowHandle;
use crate::notifications::NotificationSink;
use crate::placement::DEFAULT_POPUP_SIZE;
use crate::quick_apps::registry::AppRegistry;
use crate::quick_apps::types::AppDefinition;
use crate::shared_types::{AppId, WorkflowId};
use crate::workflows::catalog::WorkflowCatalog;
use crate::workflows::types::WorkflowAvailability;

use super::events::{PopupEvent, DEFAULT_EVENT_CAPACITY};

/// Raw add-app form input, exactly as the user typed it.
///
/// Dimensions stay strings here; the controller parses them and falls back
/// to the default popup size when they are empty or not a positive integer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppForm {
    pub name: String,
    pub url: String,
    pub width: String,
    pub height: String,
}

/// Coordinates the popup's state, launches, and notifications.
pub struct PopupController {
    registry: Arc<dyn AppRegistry>,
    catalog: WorkflowCatalog,
    launcher: Arc<dyn LaunchOrchestrator>,
    notifier: Arc<dyn NotificationSink>,
    apps: RwLock<Vec<AppDefinition>>,
    event_sender: broadcast::Sender<PopupEvent>,
}

impl PopupController {
    pub fn new(
        registry: Arc<dyn AppRegistry>,
        catalog: WorkflowCatalog,
        launcher: Arc<dyn LaunchOrchestrator>,
        notifier: Arc<dyn NotificationSink>,
    ) -> Self {
        let (event_sender, _) = broadcast::channel(DEFAULT_EVENT_CAPACITY);
        PopupController {
            registry,
            catalog,
            launcher,
            notifier,
            apps: RwLock::new(Vec::new()),
            event_sender,
        }
    }

    /// Loads the persisted catalog (seeding defaults on first run) and
    /// publishes the initial state.
    pub async fn initialize(&self) -> DomainResult<()> {
        let apps = self.registry.load().await?;
        info!(count = apps.len(), "Popup state initialized");
        {
            let mut cache = self.apps.write().await;
            *cache = apps.clone();
        }
        self.publish_catalog_changed(&apps);
        Ok(())
    }

    /// Current app catalog snapshot.
    pub async fn apps(&self) -> Vec<AppDefinition> {
        self.apps.read().await.clone()
    }

    /// Workflows projected against the current catalog.
    pub async fn workflow_availability(&self) -> Vec<WorkflowAvailability> {
        let apps = self.apps.read().await;
        self.catalog.list_with_availability(&apps)
    }

    /// Subscribes to state change events.
    pub fn subscribe(&self) -> broadcast::Receiver<PopupEvent> {
        self.event_sender.subscribe()
    }

    /// Opens a focused popup window for the given app.
    ///
    /// Unknown ids are ignored and reported as `Ok(None)`; the list shown
    /// to the user may lag behind a removal on another surface.
    pub async fn launch_app(&self, id: &AppId) -> DomainResult<Option<WindowHandle>> {
        let app = {
            let apps = self.apps.read().await;
            apps.iter().find(|app| &app.id == id).cloned()
        };
        let app = match app {
            Some(app) => app,
            None => {
                debug!(app_id = %id, "Ignoring launch for unknown app");
                return Ok(None);
            }
        };

        let handle = self.launcher.launch_one(&app).await?;
        self.notifier.show(&format!("Launched {}", app.name)).await;
        Ok(Some(handle))
    }

    /// Removes an app from the catalog and persists the shortened list.
    ///
    /// Removing an id that is not present still persists and confirms; the
    /// end state is the same either way.
    pub async fn remove_app(&self, id: &AppId) -> DomainResult<()> {
        let next = {
            let mut apps = self.apps.write().await;
            apps.retain(|app| &app.id != id);
            apps.clone()
        };

        self.registry.save(&next).await?;
        info!(app_id = %id, remaining = next.len(), "Removed quick app");
        self.publish_catalog_changed(&next);
        self.notifier.show("App removed").await;
        Ok(())
    }

    /// Adds an app from form input, assigning it a fresh id.
    ///
    /// Invalid input (blank name, or a URL that does not parse as an
    /// absolute URL) aborts silently with `Ok(None)`; the form surface
    /// keeps the user's input for correction.
    pub async fn add_app(&self, form: &AppForm) -> DomainResult<Option<AppDefinition>> {
        let app = match sanitize_form(form) {
            Some(app) => app,
            None => {
                debug!("Discarding app form that fails validation");
                return Ok(None);
            }
        };

        let next = {
            let mut apps = self.apps.write().await;
            apps.push(app.clone());
            apps.clone()
        };

        self.registry.save(&next).await?;
        info!(app_id = %app.id, name = %app.name, "Added quick app");
        // Generated ids are fresh, so no workflow reference can start
        // resolving because of an add; availability is unchanged.
        self.publish_app_list(&next);
        self.notifier.show(&format!("{} saved", app.name)).await;
        Ok(Some(app))
    }

    /// Replaces the catalog with the built-in defaults.
    pub async fn reset_apps(&self) -> DomainResult<Vec<AppDefinition>> {
        let defaults = self.registry.reset_to_defaults().await?;
        {
            let mut cache = self.apps.write().await;
            *cache = defaults.clone();
        }
        info!(count = defaults.len(), "Restored default quick apps");
        self.publish_catalog_changed(&defaults);
        self.notifier.show("Defaults restored").await;
        Ok(defaults)
    }

    /// Launches every resolvable app of a workflow as one cascade.
    ///
    /// References that do not resolve against the current catalog are
    /// dropped without comment; an unknown workflow id is `Ok(None)`.
    pub async fn launch_workflow(
        &self,
        id: &WorkflowId,
    ) -> DomainResult<Option<Vec<WindowHandle>>> {
        let workflow = match self.catalog.get(id) {
            Some(workflow) => workflow.clone(),
            None => {
                debug!(workflow_id = %id, "Ignoring launch for unknown workflow");
                return Ok(None);
            }
        };

        let resolved = {
            let apps = self.apps.read().await;
            workflow.resolve(&apps)
        };
        if resolved.len() < workflow.apps.len() {
            debug!(
                workflow_id = %id,
                requested = workflow.apps.len(),
                resolved = resolved.len(),
                "Launching workflow with missing apps"
            );
        }

        let handles = self.launcher.launch_many(&resolved).await?;
        self.notifier
            .show(&format!("{} workspace live", workflow.name))
            .await;
        Ok(Some(handles))
    }

    fn publish_app_list(&self, apps: &[AppDefinition]) {
        self.publish(PopupEvent::AppListChanged { apps: apps.to_vec() });
    }

    fn publish_catalog_changed(&self, apps: &[AppDefinition]) {
        self.publish_app_list(apps);
        self.publish(PopupEvent::WorkflowAvailabilityChanged {
            entries: self.catalog.list_with_availability(apps),
        });
    }

    fn publish(&self, event: PopupEvent) {
        if self.event_sender.receiver_count() == 0 {
            return;
        }
        if let Err(error) = self.event_sender.send(event) {
            debug!("Popup event dropped: {}", error);
        }
    }
}

/// Validates the form and builds the app to store, or `None` to abort.
fn sanitize_form(form: &AppForm) -> Option<AppDefinition> {
    let name = form.name.trim();
    if name.is_empty() {
        return None;
    }
    let url = form.url.trim();
    if Url::parse(url).is_err() {
        return None;
    }
    Some(AppDefinition::new(
        AppId::generate(),
        name,
        url,
        parse_dimension(&form.width, DEFAULT_POPUP_SIZE.width),
        parse_dimension(&form.height, DEFAULT_POPUP_SIZE.height),
    ))
}

fn parse_dimension(raw: &str, default: u32) -> u32 {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|px| *px > 0)
        .unwrap_or(default)
}
