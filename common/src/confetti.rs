//! Falling confetti loop.
//!
//! Each confetti glyph follows the same sawtooth every cycle: parked at the
//! top until its phase delay has passed, then a linear fall that reaches the
//! bottom exactly at the end of the cycle, where it jumps back up.
//!
//! ```text
//! fraction
//!   1 |            /|            /|
//!     |          /  |          /  |
//!   0 |_________/   |_________/   |
//!     0      delay cycle       ...
//! ```
//!
//! The position is a pure function of time, so confetti carries no state
//! beyond its configuration.

use crate::animations::{Interpolate, Millis, clamp_fraction};
use crate::config::ConfettiConfig;
use crate::elements::{ElementPhase, Placement, Placements};

/// Fall fraction of an element with `phase_delay_ms` at time `now`.
///
/// A delay at or beyond the cycle length parks the element at 0.
pub fn fall_fraction(
    phase_delay_ms: u32,
    cycle_ms: u32,
    now: Millis,
) -> f32 {
    let cycle = Millis::from(cycle_ms.max(1));
    let delay = Millis::from(phase_delay_ms);
    if delay >= cycle {
        return 0.0;
    }
    let local = now % cycle;
    if local < delay {
        return 0.0;
    }
    clamp_fraction((local - delay) as f32 / (cycle - delay) as f32)
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConfettiLoop {
    config: ConfettiConfig,
}

impl ConfettiLoop {
    pub fn new(config: &ConfettiConfig) -> Self { Self { config: config.clone() } }

    pub fn fall_fraction(
        &self,
        element: usize,
        now: Millis,
    ) -> f32 {
        self.config
            .elements
            .get(element)
            .map_or(0.0, |e| fall_fraction(e.phase_delay_ms, self.config.cycle_ms, now))
    }

    /// Vertical offset of confetti `element` in dp from the viewport center.
    pub fn vertical_offset(
        &self,
        element: usize,
        now: Millis,
    ) -> f32 {
        self.config
            .top_offset
            .lerp(self.config.bottom_offset, self.fall_fraction(element, now))
    }

    pub fn phase(
        &self,
        element: usize,
        now: Millis,
    ) -> ElementPhase {
        let Some(e) = self.config.elements.get(element) else {
            return ElementPhase::Waiting;
        };
        let cycle = Millis::from(self.config.cycle_ms.max(1));
        let delay = Millis::from(e.phase_delay_ms);
        if delay >= cycle || now % cycle < delay {
            ElementPhase::Waiting
        } else {
            ElementPhase::Animating
        }
    }

    #[inline]
    pub fn len(&self) -> usize { self.config.elements.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.config.elements.is_empty() }

    /// Where to draw every confetti glyph at `now`.
    pub fn placements(
        &self,
        now: Millis,
    ) -> Placements<'_> {
        let mut placements = Placements::new();
        for (i, element) in self.config.elements.iter().enumerate() {
            placements
                .push(Placement {
                    element,
                    x: element.horizontal_offset,
                    y: self.vertical_offset(i, now),
                    opacity: self.config.opacity,
                    size: self.config.glyph_size,
                })
                .ok();
        }
        placements
    }
}

impl Default for ConfettiLoop {
    fn default() -> Self { Self::new(&ConfettiConfig::default()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    #[test]
    fn test_sawtooth_with_320ms_delay() {
        assert_eq!(fall_fraction(320, 5000, 0), 0.0);
        assert_eq!(fall_fraction(320, 5000, 319), 0.0);
        assert_eq!(fall_fraction(320, 5000, 320), 0.0);
        assert!((fall_fraction(320, 5000, 2660) - 0.5).abs() < EPS);
        assert!(fall_fraction(320, 5000, 4999) > 0.99);
        assert_eq!(fall_fraction(320, 5000, 5000), 0.0, "Restart jumps back to the top");
        assert!((fall_fraction(320, 5000, 7660) - 0.5).abs() < EPS);
    }

    #[test]
    fn test_delay_beyond_cycle_parks_element() {
        assert_eq!(fall_fraction(5000, 5000, 4999), 0.0);
        assert_eq!(fall_fraction(9000, 5000, 12_345), 0.0);
    }

    #[test]
    fn test_vertical_offset_spans_top_to_bottom() {
        let confetti = ConfettiLoop::default();
        // Element 1 is the 320 ms party popper.
        assert_eq!(confetti.vertical_offset(1, 100), -500.0);
        assert!((confetti.vertical_offset(1, 2660) - 50.0).abs() < 1e-3);
        assert_eq!(confetti.phase(1, 100), ElementPhase::Waiting);
        assert_eq!(confetti.phase(1, 2660), ElementPhase::Animating);
    }

    #[test]
    fn test_cycle_is_exact() {
        let confetti = ConfettiLoop::default();
        for i in 0..confetti.len() {
            for t in [0, 150, 999, 2000, 4321] {
                assert_eq!(confetti.vertical_offset(i, t), confetti.vertical_offset(i, t + 5000 * 7));
            }
        }
    }

    #[test]
    fn test_placements() {
        let confetti = ConfettiLoop::default();
        let placements = confetti.placements(1000);
        assert_eq!(placements.len(), 11);
        assert_eq!(placements[6].x, -189.0);
        assert_eq!(placements[6].opacity, 0.7);
        assert_eq!(placements[6].size, 35.0);
        assert_eq!(placements[6].element.glyph.as_str(), "\u{1F451}");
    }
}
