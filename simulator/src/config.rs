//! Layout and display configuration for the desktop simulator.
//!
//! The greeting screen is laid out in dp around the viewport center. The
//! simulator maps a 480 x 854 dp phone onto a 240 x 427 px display.

use embedded_graphics::prelude::Point;

// =============================================================================
// Display
// =============================================================================

pub const SCREEN_WIDTH: u32 = 240;
pub const SCREEN_HEIGHT: u32 = 427;

/// Pixels per dp (and per sp).
pub const PX_PER_DP: f32 = 0.5;

/// Horizontal padding of the text column, in dp.
pub const COLUMN_PADDING_DP: f32 = 16.0;

pub const WINDOW_TITLE: &str = "Happy Birthday";

/// Default window pixel scale.
pub const DEFAULT_WINDOW_SCALE: u32 = 2;

const _: () = assert!(SCREEN_WIDTH > 0 && SCREEN_HEIGHT > 0);

// =============================================================================
// Coordinate Mapping
// =============================================================================

pub const CENTER: Point = Point::new(SCREEN_WIDTH as i32 / 2, SCREEN_HEIGHT as i32 / 2);

/// Convert a length in dp to whole pixels.
#[inline]
pub fn dp_to_px(dp: f32) -> i32 { (dp * PX_PER_DP).round() as i32 }

/// Convert an offset from the viewport center (dp) to a display point.
#[inline]
pub fn to_screen(
    x_dp: f32,
    y_dp: f32,
) -> Point {
    Point::new(CENTER.x + dp_to_px(x_dp), CENTER.y + dp_to_px(y_dp))
}

/// Widest text line that fits inside the column padding, in pixels.
pub fn text_column_width_px() -> u32 { SCREEN_WIDTH.saturating_sub(2 * dp_to_px(COLUMN_PADDING_DP) as u32) }
