//! The popup surface: controller, form input, and change events.

pub mod controller;
pub mod events;


pub use controller::{AppForm, PopupController};
pub use events::{PopupEvent, DEFAULT_EVENT_CAPACITY};
