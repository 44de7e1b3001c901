//! The static workflow library and its availability projection.

use std::collections::BTreeSet;

use crate::quick_apps::AppDefinition;
use crate::shared_types::{AppId, WorkflowId};

use super::types::{WorkflowAvailability, WorkflowDefinition};

/// Read-only library of workflow definitions.
///
/// The library itself never changes at runtime; only its availability
/// against the current app list does, and that is recomputed on every call
/// rather than cached, so it can never drift from the catalog.
#[derive(Debug, Clone)]
pub struct WorkflowCatalog {
    workflows: Vec<WorkflowDefinition>,
}

impl WorkflowCatalog {
    /// Creates a catalog over an explicit workflow list.
    pub fn new(workflows: Vec<WorkflowDefinition>) -> Self {
        Self { workflows }
    }

    /// The built-in workflow library shipped with the popup.
    pub fn builtin() -> Self {
        Self::new(vec![
            WorkflowDefinition::new(
                "daily-planning",
                "Daily Planning",
                "Calendar + Notion + Linear",
                vec![AppId::from("calendar"), AppId::from("notion"), AppId::from("linear")],
            ),
            WorkflowDefinition::new(
                "design-review",
                "Design Review",
                "Figma + Slack huddle",
                vec![AppId::from("figma"), AppId::from("slack")],
            ),
            WorkflowDefinition::new(
                "deep-focus",
                "Deep Focus",
                "Notion doc + Spotify mix",
                vec![AppId::from("notion"), AppId::from("spotify")],
            ),
        ])
    }

    /// All workflows in declaration order.
    pub fn workflows(&self) -> &[WorkflowDefinition] {
        &self.workflows
    }

    /// Looks up a workflow by id.
    pub fn get(&self, id: &WorkflowId) -> Option<&WorkflowDefinition> {
        self.workflows.iter().find(|w| &w.id == id)
    }

    /// Projects every workflow against `current_apps`.
    ///
    /// Pure: nothing is mutated or stored, and the same inputs always yield
    /// the same output. A workflow is launchable iff every referenced app id
    /// is present; the ids of unmatched references are reported alongside.
    pub fn list_with_availability(
        &self,
        current_apps: &[AppDefinition],
    ) -> Vec<WorkflowAvailability> {
        self.workflows
            .iter()
            .map(|workflow| {
                let missing: BTreeSet<AppId> = workflow
                    .apps
                    .iter()
                    .filter(|id| !current_apps.iter().any(|app| app.id == **id))
                    .cloned()
                    .collect();
                WorkflowAvailability {
                    launchable: missing.is_empty(),
                    workflow: workflow.clone(),
                    missing,
                }
            })
            .collect()
    }
}

impl Default for WorkflowCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
