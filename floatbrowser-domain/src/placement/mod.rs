//! Cascade placement arithmetic for popup windows.
//!
//! Windows stack from the top-right of the screen toward the bottom-left:
//! each subsequent window in a batch moves 30px further from the right edge
//! and 40px further down. All math is pure; the current screen width is an
//! input, not an ambient lookup.

use floatbrowser_core::types::geometry::{PointInt, RectInt, SizeInt};

/// Size substituted for a missing or zero dimension.
pub const DEFAULT_POPUP_SIZE: SizeInt = SizeInt::new(460, 720);

/// Screen width assumed when the host cannot report one.
pub const FALLBACK_SCREEN_WIDTH: u32 = 1280;

/// Gap kept between a window's right edge and the screen's right edge.
const RIGHT_EDGE_MARGIN: i64 = 40;
/// Horizontal shift per stack position.
const CASCADE_STEP_X: i64 = 30;
/// Top coordinate of the first window in a stack.
const CASCADE_TOP_BASE: i64 = 80;
/// Vertical shift per stack position.
const CASCADE_STEP_Y: i64 = 40;

/// Replaces zero dimensions with the matching default axis.
///
/// Stored records can carry a zero width or height (the persisted form of
/// "no preference"); launching substitutes 460x720 per axis.
pub fn normalize_size(width: u32, height: u32) -> SizeInt {
    SizeInt::new(
        if width == 0 { DEFAULT_POPUP_SIZE.width } else { width },
        if height == 0 { DEFAULT_POPUP_SIZE.height } else { height },
    )
}

/// Computes the bounds of the window at `stack_index` within a cascade.
///
/// `left = max(0, screen_width - width - 40 - stack_index * 30)` and
/// `top = max(0, 80 + stack_index * 40)`; both clamped so a window wider
/// than the screen pins to the left edge instead of going off-screen. The
/// returned rect carries the (normalized) size unchanged.
pub fn cascade_bounds(width: u32, height: u32, stack_index: usize, screen_width: u32) -> RectInt {
    let size = normalize_size(width, height);
    let index = stack_index as i64;

    let left = screen_width as i64 - size.width as i64 - RIGHT_EDGE_MARGIN - index * CASCADE_STEP_X;
    let top = CASCADE_TOP_BASE + index * CASCADE_STEP_Y;

    RectInt::new(
        PointInt::new(clamp_coordinate(left), clamp_coordinate(top)),
        size,
    )
}

fn clamp_coordinate(coordinate: i64) -> i32 {
    coordinate.clamp(0, i32::MAX as i64) as i32
}
