//! Window launching.
//!
//! [`WindowSystem`] and [`ScreenMetrics`] abstract the host capabilities;
//! [`LaunchOrchestrator`] composes them with the cascade placement rules
//! to open one window or a whole batch.

pub mod errors;
pub mod orchestrator;
pub mod window_system;


pub use errors::LaunchError;
pub use orchestrator::{DefaultLaunchOrchestrator, LaunchOrchestrator};
pub use window_system::{
    CreateWindowRequest, FixedScreenMetrics, ScreenMetrics, WindowHandle, WindowKind, WindowSystem,
};
