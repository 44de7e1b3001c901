//! Core data types for the workflow library.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::quick_apps::AppDefinition;
use crate::shared_types::{AppId, WorkflowId};

/// A named bundle of quick-app references launched together.
///
/// Workflows reference apps by id only; whether the reference currently
/// resolves depends on the user's catalog at the moment of projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowDefinition {
    pub id: WorkflowId,
    pub name: String,
    pub description: String,
    /// Referenced app ids, in launch order.
    pub apps: Vec<AppId>,
}

impl WorkflowDefinition {
    /// Creates a new `WorkflowDefinition`.
    pub fn new(
        id: impl Into<WorkflowId>,
        name: impl Into<String>,
        description: impl Into<String>,
        apps: Vec<AppId>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            apps,
        }
    }

    /// Resolves the referenced apps against the current catalog, preserving
    /// the declared order. References that do not resolve are silently
    /// dropped; the caller launches whatever is left.
    pub fn resolve(&self, current_apps: &[AppDefinition]) -> Vec<AppDefinition> {
        self.apps
            .iter()
            .filter_map(|id| current_apps.iter().find(|app| &app.id == id))
            .cloned()
            .collect()
    }
}

/// A workflow paired with its availability against a concrete app list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowAvailability {
    pub workflow: WorkflowDefinition,
    /// True iff every referenced app id is present in the catalog.
    pub launchable: bool,
    /// Referenced ids with no matching app.
    pub missing: BTreeSet<AppId>,
}
