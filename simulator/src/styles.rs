//! Text styles and font selection.
//!
//! The text style is `const`. Fonts are picked per draw call because the
//! greeting scale pulses continuously.

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::text::{Alignment, Baseline, TextStyle, TextStyleBuilder};
use profont::{
    PROFONT_7_POINT,
    PROFONT_9_POINT,
    PROFONT_10_POINT,
    PROFONT_12_POINT,
    PROFONT_14_POINT,
    PROFONT_18_POINT,
    PROFONT_24_POINT,
};

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Centered on the anchor point, both axes.
pub const CENTERED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

// =============================================================================
// Fonts
// =============================================================================

/// Small font for the diagnostics overlay.
pub const LABEL_FONT: &MonoFont = &FONT_6X10;

/// `ProFont` sizes, smallest first.
const SCALED_FONTS: [&MonoFont<'static>; 7] = [
    &PROFONT_7_POINT,
    &PROFONT_9_POINT,
    &PROFONT_10_POINT,
    &PROFONT_12_POINT,
    &PROFONT_14_POINT,
    &PROFONT_18_POINT,
    &PROFONT_24_POINT,
];

/// Largest font whose glyph height does not exceed `height_px`.
///
/// Falls back to the smallest font for tiny sizes.
pub fn font_for_height(height_px: f32) -> &'static MonoFont<'static> {
    SCALED_FONTS
        .iter()
        .rev()
        .find(|font| font.character_size.height as f32 <= height_px)
        .copied()
        .unwrap_or(SCALED_FONTS[0])
}
