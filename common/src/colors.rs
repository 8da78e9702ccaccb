//! Color constants for the greeting screen.
//!
//! # Palette Format
//!
//! Palette entries are stored as [`PaletteColor`], a plain `{ r, g, b }`
//! triple that serializes cleanly into scene configuration files. At runtime
//! they are converted once into `embedded_graphics` [`Rgb888`] values, which
//! is the color type every animator and surface works with.
//!
//! The background cycles through exactly [`PALETTE_SIZE`] colors, so the
//! palette is a fixed-size array: the active index can never leave `0..8`.

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
use serde::{Deserialize, Serialize};

/// Number of colors in the background palette.
pub const PALETTE_SIZE: usize = 8;

/// A serializable 24-bit palette entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaletteColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl PaletteColor {
    pub const fn new(
        r: u8,
        g: u8,
        b: u8,
    ) -> Self {
        Self { r, g, b }
    }

    /// Build a color from a `0xRRGGBB` literal.
    pub const fn from_hex(rgb: u32) -> Self { Self::new((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8) }

    #[inline]
    pub const fn to_rgb888(self) -> Rgb888 { Rgb888::new(self.r, self.g, self.b) }
}

impl From<PaletteColor> for Rgb888 {
    fn from(color: PaletteColor) -> Self { color.to_rgb888() }
}

impl From<Rgb888> for PaletteColor {
    fn from(color: Rgb888) -> Self { Self::new(color.r(), color.g(), color.b()) }
}

// =============================================================================
// Background Palette (pastel, cycled in this order)
// =============================================================================

pub const PASTEL_PINK: PaletteColor = PaletteColor::from_hex(0xF8BBD0);
pub const LAVENDER: PaletteColor = PaletteColor::from_hex(0xE6E6FA);
pub const MINT_GREEN: PaletteColor = PaletteColor::from_hex(0xC8E6C9);
pub const PASTEL_BLUE: PaletteColor = PaletteColor::from_hex(0xB3E5FC);
pub const PALE_ROSE: PaletteColor = PaletteColor::from_hex(0xFCE4EC);
pub const PALE_SKY: PaletteColor = PaletteColor::from_hex(0xE1F5FE);
pub const SOFT_PEACH: PaletteColor = PaletteColor::from_hex(0xFFE0B2);
pub const SOFT_YELLOW: PaletteColor = PaletteColor::from_hex(0xFFF9C4);

/// Default background palette in cycling order.
pub const DEFAULT_PALETTE: [PaletteColor; PALETTE_SIZE] = [
    PASTEL_PINK,
    LAVENDER,
    MINT_GREEN,
    PASTEL_BLUE,
    PALE_ROSE,
    PALE_SKY,
    SOFT_PEACH,
    SOFT_YELLOW,
];

// =============================================================================
// Text Colors
// =============================================================================

/// Near-black used for the greeting text on the light pastel backgrounds.
pub const TEXT_COLOR: Rgb888 = Rgb888::new(0x1C, 0x1B, 0x1F);

/// Pure white, used by the diagnostics overlay.
pub const WHITE: Rgb888 = Rgb888::WHITE;

/// Pure black, used by the diagnostics overlay.
pub const BLACK: Rgb888 = Rgb888::BLACK;
