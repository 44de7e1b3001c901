//! Foundational data types for FloatBrowser Core.
//!
//! # Submodules
//!
//! - [`geometry`]: Integer point, size, and rectangle types used for popup
//!   window bounds.

pub mod geometry;

pub use geometry::{PointInt, RectInt, SizeInt};
