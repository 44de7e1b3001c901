//! Workflow library: static bundles of quick apps launched together.
//!
//! Workflows are read-only at runtime. What changes is whether a workflow is
//! currently launchable, which is a pure projection of the user's app
//! catalog computed by [`WorkflowCatalog::list_with_availability`].

pub mod catalog;
pub mod types;

pub use catalog::WorkflowCatalog;
pub use types::{WorkflowAvailability, WorkflowDefinition};
