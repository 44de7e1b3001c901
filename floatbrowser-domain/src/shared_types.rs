use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};

/// Represents a unique identifier for a quick app.
///
/// Built-in apps carry short well-known ids ("gmail", "notion"); user-added
/// apps get a generated UUID via [`AppId::generate`].
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default, PartialOrd, Ord)]
#[serde(transparent)]
pub struct AppId(String);

impl AppId {
    /// Creates a new `AppId`.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the provided `id` is empty.
    pub fn new(id: impl Into<String>) -> Self {
        let id_str = id.into();
        debug_assert!(!id_str.is_empty(), "AppId must not be empty.");
        Self(id_str)
    }

    /// Creates a fresh, unique `AppId` from a random UUID.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Returns a string slice of the app id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Debug for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AppId").field(&self.0).finish()
    }
}

impl Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for AppId {
    fn from(id: String) -> Self {
        debug_assert!(!id.is_empty(), "AppId must not be empty.");
        Self(id)
    }
}

impl From<&str> for AppId {
    fn from(id: &str) -> Self {
        debug_assert!(!id.is_empty(), "AppId must not be empty.");
        Self(id.to_string())
    }
}

/// Represents a unique identifier for a workflow.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default, PartialOrd, Ord)]
#[serde(transparent)]
pub struct WorkflowId(String);

impl WorkflowId {
    /// Creates a new `WorkflowId`.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the provided `id` is empty.
    pub fn new(id: impl Into<String>) -> Self {
        let id_str = id.into();
        debug_assert!(!id_str.is_empty(), "WorkflowId must not be empty.");
        Self(id_str)
    }

    /// Returns a string slice of the workflow id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Debug for WorkflowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("WorkflowId").field(&self.0).finish()
    }
}

impl Display for WorkflowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for WorkflowId {
    fn from(id: String) -> Self {
        debug_assert!(!id.is_empty(), "WorkflowId must not be empty.");
        Self(id)
    }
}

impl From<&str> for WorkflowId {
    fn from(id: &str) -> Self {
        debug_assert!(!id.is_empty(), "WorkflowId must not be empty.");
        Self(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn app_id_new_and_as_str() {
        let app_id = AppId::new("gmail");
        assert_eq!(app_id.as_str(), "gmail");
    }

    #[test]
    fn app_id_from_str_and_string() {
        assert_eq!(AppId::from("notion").as_str(), "notion");
        assert_eq!(AppId::from("linear".to_string()).as_str(), "linear");
    }

    #[test]
    fn app_id_display_is_bare_value() {
        assert_eq!(format!("{}", AppId::new("slack")), "slack");
    }

    #[test]
    fn app_id_debug_is_tuple_form() {
        assert_eq!(format!("{:?}", AppId::new("figma")), "AppId(\"figma\")");
    }

    #[test]
    fn app_id_generate_yields_parseable_unique_uuids() {
        let a = AppId::generate();
        let b = AppId::generate();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(a.as_str()).is_ok());
    }

    #[test]
    fn app_id_serde_is_transparent() {
        let id = AppId::new("calendar");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"calendar\"");
        let back: AppId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "AppId must not be empty")]
    fn app_id_new_empty_panics_in_debug() {
        let _ = AppId::new("");
    }

    #[test]
    fn workflow_id_round_trip() {
        let id = WorkflowId::new("daily-planning");
        assert_eq!(id.as_str(), "daily-planning");
        assert_eq!(format!("{}", id), "daily-planning");
        assert_eq!(WorkflowId::from("daily-planning"), id);
    }
}
