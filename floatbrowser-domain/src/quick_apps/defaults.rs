//! Built-in quick apps seeded on first run.

use super::types::AppDefinition;

/// Returns the built-in quick-app catalog.
///
/// Each call constructs a fresh list, so callers can hand out or mutate the
/// result without sharing structure with anyone else. Seeded into the store
/// on first load and re-applied by the reset operation.
pub fn default_apps() -> Vec<AppDefinition> {
    vec![
        AppDefinition::new("gmail", "Gmail", "https://mail.google.com", 420, 720),
        AppDefinition::new("notion", "Notion HQ", "https://www.notion.so", 960, 720),
        AppDefinition::new("linear", "Linear", "https://linear.app", 520, 720),
        AppDefinition::new("calendar", "Google Calendar", "https://calendar.google.com", 720, 720),
        AppDefinition::new("slack", "Slack", "https://app.slack.com/client", 420, 720),
        AppDefinition::new("figma", "Figma", "https://www.figma.com/files", 1200, 780),
        AppDefinition::new("spotify", "Spotify", "https://open.spotify.com", 420, 640),
    ]
}
