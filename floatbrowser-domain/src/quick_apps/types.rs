//! Core data types for the quick-app catalog.

use serde::{Deserialize, Serialize};

use crate::shared_types::AppId;

/// A single launchable web app in the user's catalog.
///
/// The serde field names match the records the popup has always persisted,
/// so existing stored data round-trips unchanged. Unknown extra fields in a
/// stored record are ignored; missing or mistyped known fields are a decode
/// error handled by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppDefinition {
    /// Stable identity; referenced by workflows.
    pub id: AppId,
    /// Display name shown in the popup list.
    pub name: String,
    /// Absolute URL the popup window opens.
    pub url: String,
    /// Preferred window width in pixels.
    pub width: u32,
    /// Preferred window height in pixels.
    pub height: u32,
}

impl AppDefinition {
    /// Creates a new `AppDefinition`.
    pub fn new(
        id: impl Into<AppId>,
        name: impl Into<String>,
        url: impl Into<String>,
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            url: url.into(),
            width,
            height,
        }
    }

    /// Host component of the app's URL, for display next to the name.
    ///
    /// Returns `None` when the stored URL does not parse; render layers fall
    /// back to showing nothing rather than failing.
    pub fn host(&self) -> Option<String> {
        url::Url::parse(&self.url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_owned))
    }
}
