//! Fan-out launcher for one or many popup windows.

use std::sync::Arc;

use async_trait::async_trait;
use futures::future::join_all;
use tracing::{debug, info};

use crate::placement::{cascade_bounds, FALLBACK_SCREEN_WIDTH};
use crate::quick_apps::types::AppDefinition;

use super::errors::LaunchError;
use super::window_system::{
    CreateWindowRequest, ScreenMetrics, WindowHandle, WindowKind, WindowSystem,
};

/// Opens popup windows for quick apps.
#[async_trait]
pub trait LaunchOrchestrator: Send + Sync {
    /// Opens a single window at the head of the cascade, focused.
    async fn launch_one(&self, app: &AppDefinition) -> Result<WindowHandle, LaunchError>;

    /// Opens one window per app, cascaded by position.
    ///
    /// All creation requests are issued before any result is awaited, so
    /// a failing window never prevents the rest of the batch from being
    /// attempted. Only the first window is focused. If any request fails,
    /// the first failure in request order is returned after every request
    /// has settled; windows that did open stay open.
    async fn launch_many(&self, apps: &[AppDefinition]) -> Result<Vec<WindowHandle>, LaunchError>;
}

/// Default [`LaunchOrchestrator`] backed by host capabilities.
pub struct DefaultLaunchOrchestrator {
    windows: Arc<dyn WindowSystem>,
    screen: Arc<dyn ScreenMetrics>,
}

impl DefaultLaunchOrchestrator {
    pub fn new(windows: Arc<dyn WindowSystem>, screen: Arc<dyn ScreenMetrics>) -> Self {
        DefaultLaunchOrchestrator { windows, screen }
    }

    fn build_request(&self, app: &AppDefinition, stack_index: usize) -> CreateWindowRequest {
        let screen_width = self
            .screen
            .available_width()
            .unwrap_or(FALLBACK_SCREEN_WIDTH);
        CreateWindowRequest {
            url: app.url.clone(),
            kind: WindowKind::Popup,
            // Only the head of the cascade takes focus.
            focused: stack_index == 0,
            bounds: cascade_bounds(app.width, app.height, stack_index, screen_width),
        }
    }
}

#[async_trait]
impl LaunchOrchestrator for DefaultLaunchOrchestrator {
    async fn launch_one(&self, app: &AppDefinition) -> Result<WindowHandle, LaunchError> {
        let request = self.build_request(app, 0);
        debug!(app_id = %app.id, url = %app.url, "Launching quick app");
        self.windows.create_window(request).await
    }

    async fn launch_many(&self, apps: &[AppDefinition]) -> Result<Vec<WindowHandle>, LaunchError> {
        if apps.is_empty() {
            return Ok(Vec::new());
        }

        info!(count = apps.len(), "Launching app batch");
        let creations = apps
            .iter()
            .enumerate()
            .map(|(stack_index, app)| {
                let request = self.build_request(app, stack_index);
                self.windows.create_window(request)
            })
            .collect::<Vec<_>>();

        // Every request settles before errors are inspected; no rollback
        // of windows that did open.
        let results = join_all(creations).await;
        let mut handles = Vec::with_capacity(results.len());
        for result in results {
            handles.push(result?);
        }
        Ok(handles)
    }
}
