//! Capability traits for window creation and screen geometry.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use floatbrowser_core::types::geometry::RectInt;

use super::errors::LaunchError;

/// Kind of window requested from the host.
///
/// Popups are chromeless single-page windows; the host API spells the
/// kind as a lowercase string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowKind {
    Popup,
}

/// A fully resolved window creation request.
///
/// Placement has already been applied, so the window system only has to
/// hand the request to the host verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateWindowRequest {
    pub url: String,
    pub kind: WindowKind,
    pub focused: bool,
    pub bounds: RectInt,
}

/// Opaque identifier of a created window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowHandle {
    pub id: u64,
}

impl WindowHandle {
    pub const fn new(id: u64) -> Self {
        WindowHandle { id }
    }
}

/// Host capability that opens windows.
#[async_trait]
pub trait WindowSystem: Send + Sync {
    /// Asks the host to create a window; resolves once the host has
    /// accepted or rejected the request.
    async fn create_window(&self, request: CreateWindowRequest) -> Result<WindowHandle, LaunchError>;
}

/// Host capability reporting the usable screen width.
///
/// Kept synchronous: hosts answer this from cached display metrics.
/// `None` means the host cannot tell, in which case placement falls back
/// to [`FALLBACK_SCREEN_WIDTH`](crate::placement::FALLBACK_SCREEN_WIDTH).
pub trait ScreenMetrics: Send + Sync {
    fn available_width(&self) -> Option<u32>;
}

/// [`ScreenMetrics`] returning a fixed answer.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedScreenMetrics {
    width: Option<u32>,
}

impl FixedScreenMetrics {
    pub const fn new(width: Option<u32>) -> Self {
        FixedScreenMetrics { width }
    }
}

impl ScreenMetrics for FixedScreenMetrics {
    fn available_width(&self) -> Option<u32> {
        self.width
    }
}
