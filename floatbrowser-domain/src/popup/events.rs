//! Events published by the popup controller.

use crate::quick_apps::types::AppDefinition;
use crate::workflows::types::WorkflowAvailability;

/// Broadcast channel capacity for popup events.
///
/// Render layers consume events promptly; a small backlog only has to
/// absorb the burst caused by a reset.
pub const DEFAULT_EVENT_CAPACITY: usize = 32;

/// State change notifications for render layers.
///
/// Each event carries the full snapshot it describes, so a late
/// subscriber only needs the most recent event of each kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopupEvent {
    /// The app catalog changed (add, remove, reset, or initial load).
    AppListChanged { apps: Vec<AppDefinition> },
    /// Workflow availability was recomputed against a changed catalog.
    WorkflowAvailabilityChanged { entries: Vec<WorkflowAvailability> },
}
