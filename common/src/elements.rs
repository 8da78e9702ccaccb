//! Floating glyph configuration shared by balloons and confetti.

use heapless::{String, Vec};
use serde::{Deserialize, Serialize};

/// Maximum number of floating elements per animator.
pub const MAX_ELEMENTS: usize = 16;

/// Maximum UTF-8 byte length of a glyph (an emoji plus variation selector fits).
pub const GLYPH_CAPACITY: usize = 16;

/// Text drawn for a floating element.
pub type Glyph = String<GLYPH_CAPACITY>;

/// Fixed-capacity element list.
pub type Elements = Vec<FloatingElement, MAX_ELEMENTS>;

/// Immutable per-element configuration.
///
/// Created once when the scene is configured and shared by reference with
/// every wave or cycle that animates it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FloatingElement {
    /// Glyph to draw (usually a single emoji).
    pub glyph: Glyph,
    /// Horizontal offset from the viewport center, in dp.
    pub horizontal_offset: f32,
    /// Delay from the start of each cycle before the element starts moving.
    pub phase_delay_ms: u32,
}

impl FloatingElement {
    /// Build an element, truncating the glyph if it exceeds [`GLYPH_CAPACITY`].
    pub fn new(
        glyph: &str,
        horizontal_offset: f32,
        phase_delay_ms: u32,
    ) -> Self {
        let mut stored = Glyph::new();
        for c in glyph.chars() {
            if stored.push(c).is_err() {
                break;
            }
        }
        Self {
            glyph: stored,
            horizontal_offset,
            phase_delay_ms,
        }
    }
}

/// Build an element list from `(glyph, horizontal offset, phase delay)` rows.
///
/// Rows beyond [`MAX_ELEMENTS`] are dropped.
pub fn elements(rows: &[(&str, f32, u32)]) -> Elements {
    let mut list = Elements::new();
    for &(glyph, offset, delay) in rows {
        if list.push(FloatingElement::new(glyph, offset, delay)).is_err() {
            break;
        }
    }
    list
}

/// Where an element is within the current cycle.
///
/// ```text
///            phase delay            rise / fall            cycle end
/// |-------- Waiting --------|------ Animating ------|--- Complete ---|
///                                                  ^ (balloons only)
/// ```
///
/// The cycle boundary always forces the element back to `Waiting`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementPhase {
    /// Phase delay has not elapsed in the current cycle.
    Waiting,
    /// Progress is rising.
    Animating,
    /// Progress reached 1 before the cycle ended.
    Complete,
}

/// Where and how to draw one floating element in a frame.
///
/// Offsets are dp relative to the viewport center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement<'a> {
    pub element: &'a FloatingElement,
    pub x: f32,
    pub y: f32,
    pub opacity: f32,
    /// Glyph size in sp.
    pub size: f32,
}

/// Placements of one animator, in element order.
pub type Placements<'a> = Vec<Placement<'a>, MAX_ELEMENTS>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_emoji_with_variation_selector() {
        let element = FloatingElement::new("\u{1F973}\u{FE0F}", -32.0, 1720);
        assert_eq!(element.glyph.as_str(), "\u{1F973}\u{FE0F}");
        assert_eq!(element.phase_delay_ms, 1720);
    }

    #[test]
    fn test_new_truncates_long_glyph() {
        let element = FloatingElement::new("abcdefghijklmnopqrstuvwxyz", 0.0, 0);
        assert_eq!(element.glyph.len(), GLYPH_CAPACITY);
        assert!(element.glyph.starts_with("abcdef"));
    }

    #[test]
    fn test_elements_caps_at_capacity() {
        let rows = [("*", 0.0, 0); MAX_ELEMENTS + 4];
        assert_eq!(elements(&rows).len(), MAX_ELEMENTS);
    }
}
