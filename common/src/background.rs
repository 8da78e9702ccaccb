//! Cycling background color.
//!
//! A discrete palette index advances every `advance_period_ms`, and the
//! displayed color crossfades to the new palette entry:
//!
//! ```text
//! index   0         1         2
//!         |---------|---------|------
//! color   [pink]----\__lav----\__mint
//!         0ms      1000ms    2000ms
//! ```
//!
//! Boundaries are processed one at a time at their exact boundary instant, so
//! a late frame (or a large clock jump) replays every step the same way a
//! smooth 60 FPS clock would.

use embedded_graphics::pixelcolor::Rgb888;

use crate::animations::{AnimatedColor, Millis};
use crate::colors::PALETTE_SIZE;
use crate::config::BackgroundConfig;
use crate::easing::Easing;
use crate::events::{TimelineEvent, TimelineEvents, record};

#[derive(Clone, Debug, PartialEq)]
pub struct BackgroundCycler {
    palette: [Rgb888; PALETTE_SIZE],
    color_index: usize,
    color: AnimatedColor,
    next_advance_at: Millis,
    advance_period_ms: Millis,
    crossfade_ms: u32,
    crossfade_easing: Easing,
}

impl BackgroundCycler {
    pub fn new(config: &BackgroundConfig) -> Self {
        let palette = config.palette.map(|c| c.to_rgb888());
        let advance_period_ms = Millis::from(config.advance_period_ms.max(1));
        Self {
            palette,
            color_index: 0,
            color: AnimatedColor::new(palette[0]),
            next_advance_at: advance_period_ms,
            advance_period_ms,
            crossfade_ms: config.crossfade_ms,
            crossfade_easing: config.crossfade_easing,
        }
    }

    /// Process every palette step due at or before `now`.
    pub fn advance_to(
        &mut self,
        now: Millis,
        events: &mut TimelineEvents,
    ) {
        while self.next_advance_at <= now {
            let at = self.next_advance_at;
            self.color_index = (self.color_index + 1) % PALETTE_SIZE;
            self.color
                .animate_to(at, self.palette[self.color_index], self.crossfade_ms, self.crossfade_easing);
            record(
                events,
                TimelineEvent::ColorAdvanced {
                    index: self.color_index,
                    at,
                },
            );
            self.next_advance_at = at.saturating_add(self.advance_period_ms);
        }
    }

    /// Displayed background color at `now`.
    #[inline]
    pub fn current_color(
        &self,
        now: Millis,
    ) -> Rgb888 {
        self.color.value_at(now)
    }

    /// Index of the palette entry the background is heading to.
    #[inline]
    pub const fn color_index(&self) -> usize { self.color_index }

    #[inline]
    pub fn target_color(&self) -> Rgb888 { self.color.target() }

    #[inline]
    pub const fn next_advance_at(&self) -> Millis { self.next_advance_at }
}

impl Default for BackgroundCycler {
    fn default() -> Self { Self::new(&BackgroundConfig::default()) }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::pixelcolor::RgbColor;

    use super::*;
    use crate::animations::Interpolate;
    use crate::colors::DEFAULT_PALETTE;

    fn palette(i: usize) -> Rgb888 { DEFAULT_PALETTE[i % PALETTE_SIZE].to_rgb888() }

    fn within(
        c: Rgb888,
        a: Rgb888,
        b: Rgb888,
    ) -> bool {
        let ok = |x: u8, p: u8, q: u8| x >= p.min(q) && x <= p.max(q);
        ok(c.r(), a.r(), b.r()) && ok(c.g(), a.g(), b.g()) && ok(c.b(), a.b(), b.b())
    }

    #[test]
    fn test_first_color_before_first_step() {
        let mut bg = BackgroundCycler::default();
        let mut events = TimelineEvents::new();
        bg.advance_to(999, &mut events);

        assert!(events.is_empty());
        assert_eq!(bg.color_index(), 0);
        assert_eq!(bg.current_color(0), palette(0));
        assert_eq!(bg.current_color(999), palette(0));
    }

    #[test]
    fn test_index_after_n_periods() {
        for n in [0u64, 1, 7, 8, 9, 23, 64] {
            let mut bg = BackgroundCycler::default();
            let mut events = TimelineEvents::new();
            bg.advance_to(n * 1000, &mut events);
            assert_eq!(bg.color_index(), (n % 8) as usize, "after {n} periods");
        }
    }

    #[test]
    fn test_crossfade_lands_on_palette_color() {
        let mut bg = BackgroundCycler::default();
        let mut events = TimelineEvents::new();
        bg.advance_to(1000, &mut events);

        assert_eq!(bg.current_color(1000), palette(0), "Crossfade starts from the old color");
        assert_eq!(bg.target_color(), palette(1));

        bg.advance_to(2000, &mut events);
        assert_eq!(bg.current_color(2000), palette(1), "Previous crossfade is complete at the boundary");
        assert_eq!(events.len(), 2);
        assert_eq!(events[1], TimelineEvent::ColorAdvanced { index: 2, at: 2000 });
    }

    #[test]
    fn test_crossfade_follows_fast_out_linear_in() {
        let mut bg = BackgroundCycler::default();
        let mut events = TimelineEvents::new();
        bg.advance_to(1500, &mut events);

        let expected = palette(0).lerp(palette(1), Easing::FAST_OUT_LINEAR_IN.transform(0.5));
        assert_eq!(bg.current_color(1500), expected);
        assert_ne!(bg.current_color(1500), palette(0).lerp(palette(1), 0.5));
    }

    #[test]
    fn test_colors_stay_between_consecutive_entries() {
        let mut bg = BackgroundCycler::default();
        let mut events = TimelineEvents::new();
        for t in (0..20_000).step_by(37) {
            bg.advance_to(t, &mut events);
            events.clear();
            let i = bg.color_index();
            let prev = palette(i + PALETTE_SIZE - 1);
            let c = bg.current_color(t);
            assert!(within(c, prev, palette(i)), "color {c:?} at {t}ms out of gamut");
        }
    }

    #[test]
    fn test_large_jump_replays_every_step() {
        let mut smooth = BackgroundCycler::default();
        let mut jumped = BackgroundCycler::default();
        let mut events = TimelineEvents::new();

        for t in (0..=12_345).step_by(16) {
            smooth.advance_to(t, &mut events);
        }
        smooth.advance_to(12_345, &mut events);
        events.clear();

        jumped.advance_to(12_345, &mut events);
        assert_eq!(events.len(), 12);
        assert_eq!(jumped, smooth);
        assert_eq!(jumped.current_color(12_345), smooth.current_color(12_345));
    }

    #[test]
    fn test_short_period_supersedes_crossfade() {
        let config = BackgroundConfig {
            advance_period_ms: 400,
            ..BackgroundConfig::default()
        };
        let mut bg = BackgroundCycler::new(&config);
        let mut events = TimelineEvents::new();

        bg.advance_to(400, &mut events);
        let mid = bg.current_color(800);
        bg.advance_to(800, &mut events);
        assert_eq!(bg.current_color(800), mid, "Retarget continues from the displayed color");
        assert_eq!(bg.color_index(), 2);
    }
}
