//! Integer geometry primitives for popup window placement.
//!
//! The popup panel only ever deals in whole pixels: window origins may sit at
//! negative coordinates on multi-monitor setups, sizes are always
//! non-negative. [`PointInt`], [`SizeInt`], and [`RectInt`] capture that with
//! `i32` origins and `u32` dimensions.

use serde::{Deserialize, Serialize};

/// An integer point with `i32` coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PointInt {
    pub x: i32,
    pub y: i32,
}

impl PointInt {
    /// Creates a new `PointInt`.
    pub const fn new(x: i32, y: i32) -> Self {
        PointInt { x, y }
    }
}

/// An integer size with `u32` dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SizeInt {
    pub width: u32,
    pub height: u32,
}

impl SizeInt {
    /// Creates a new `SizeInt`.
    pub const fn new(width: u32, height: u32) -> Self {
        SizeInt { width, height }
    }

    /// Checks if the area is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// An integer rectangle with `i32` origin and `u32` size.
///
/// Used for the bounds handed to the host window system: origin is the
/// top-left corner in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RectInt {
    /// The origin point (top-left corner) of the rectangle.
    pub origin: PointInt,
    /// The size (width and height) of the rectangle.
    pub size: SizeInt,
}

impl RectInt {
    /// Creates a new `RectInt` from an origin point and a size.
    pub const fn new(origin: PointInt, size: SizeInt) -> Self {
        RectInt { origin, size }
    }

    /// Creates a new `RectInt` from individual coordinate and dimension values.
    pub const fn from_coords(x: i32, y: i32, width: u32, height: u32) -> Self {
        RectInt {
            origin: PointInt::new(x, y),
            size: SizeInt::new(width, height),
        }
    }

    /// Returns the x-coordinate of the rectangle's origin.
    pub fn x(&self) -> i32 {
        self.origin.x
    }
    /// Returns the y-coordinate of the rectangle's origin.
    pub fn y(&self) -> i32 {
        self.origin.y
    }
    /// Returns the width of the rectangle.
    pub fn width(&self) -> u32 {
        self.size.width
    }
    /// Returns the height of the rectangle.
    pub fn height(&self) -> u32 {
        self.size.height
    }

    /// Returns the x-coordinate of the left edge.
    pub fn left(&self) -> i32 {
        self.origin.x
    }
    /// Returns the y-coordinate of the top edge.
    pub fn top(&self) -> i32 {
        self.origin.y
    }
    /// Calculates the x-coordinate of the right edge.
    pub fn right(&self) -> i32 {
        self.origin.x + self.size.width as i32 // Lossy for very large widths, consistent with i32 rects
    }
    /// Calculates the y-coordinate of the bottom edge.
    pub fn bottom(&self) -> i32 {
        self.origin.y + self.size.height as i32
    }

    /// Checks if the rectangle has zero width or height.
    pub fn is_empty(&self) -> bool {
        self.size.is_empty()
    }
}
