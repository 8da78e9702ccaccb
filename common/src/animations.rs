//! Retargetable animated values.
//!
//! This module provides the building block every timed animation uses:
//! - **Interpolation**: [`Interpolate`] blends two values of the same type
//! - **Animated values**: [`AnimatedValue`] moves from a start value to a
//!   target over a duration, shaped by an [`Easing`] curve
//!
//! # Retargeting
//!
//! An [`AnimatedValue`] may be given a new target while it is still moving.
//! The new animation always starts from the value *currently displayed* at
//! the retarget instant, never from the old target:
//!
//! ```text
//! value
//!   B |          .-----x  <- retarget to C here
//!     |       .-'      \
//!   A |----'            '---.___ C
//!     +-------------------------- time
//! ```
//!
//! so retargeting mid-flight never produces a visible jump.
//!
//! # Time
//!
//! Time is plain [`Millis`] since the scene started. Values are queried with
//! `value_at(now)`, which only reads state: calling it twice with the same
//! time returns the same value.

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};

use crate::easing::Easing;

/// Elapsed scene time in milliseconds.
pub type Millis = u64;

/// Clamp an animation fraction to `[0, 1]`.
///
/// NaN maps to `0.0` so a broken computation parks an element at its start
/// position instead of propagating through the renderer.
#[inline]
pub fn clamp_fraction(fraction: f32) -> f32 {
    if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    }
}

// =============================================================================
// Interpolation
// =============================================================================

/// Types that can be blended linearly.
pub trait Interpolate: Copy {
    /// Blend from `self` (fraction 0) to `other` (fraction 1).
    ///
    /// The fraction is clamped, so the result always lies between the two
    /// inputs.
    fn lerp(
        self,
        other: Self,
        fraction: f32,
    ) -> Self;
}

impl Interpolate for f32 {
    fn lerp(
        self,
        other: Self,
        fraction: f32,
    ) -> Self {
        let f = clamp_fraction(fraction);
        if f >= 1.0 {
            return other;
        }
        self + (other - self) * f
    }
}

impl Interpolate for Rgb888 {
    fn lerp(
        self,
        other: Self,
        fraction: f32,
    ) -> Self {
        lerp_rgb888(self, other, fraction)
    }
}

/// Per-channel linear interpolation between two 24-bit colors.
///
/// Each channel is rounded to the nearest integer and clamped between the two
/// input channels, so the blend can never leave the box spanned by the
/// endpoints.
fn lerp_rgb888(
    from: Rgb888,
    to: Rgb888,
    fraction: f32,
) -> Rgb888 {
    let f = clamp_fraction(fraction);
    Rgb888::new(
        lerp_channel(from.r(), to.r(), f),
        lerp_channel(from.g(), to.g(), f),
        lerp_channel(from.b(), to.b(), f),
    )
}

#[inline]
fn lerp_channel(
    from: u8,
    to: u8,
    f: f32,
) -> u8 {
    let start = f32::from(from);
    let value = start + (f32::from(to) - start) * f;
    let rounded = micromath::F32(value).round().0 as u8;
    rounded.clamp(from.min(to), from.max(to))
}

// =============================================================================
// Animated Value
// =============================================================================

/// A value that animates from `start` to `target` over `duration_ms`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimatedValue<T> {
    start: T,
    target: T,
    started_at: Millis,
    duration_ms: u32,
    easing: Easing,
}

/// Animated `f32` (progress fractions, offsets).
pub type AnimatedScalar = AnimatedValue<f32>;

/// Animated background color.
pub type AnimatedColor = AnimatedValue<Rgb888>;

impl<T: Interpolate> AnimatedValue<T> {
    /// Create a value resting at `value`.
    pub const fn new(value: T) -> Self {
        Self {
            start: value,
            target: value,
            started_at: 0,
            duration_ms: 0,
            easing: Easing::Linear,
        }
    }

    /// Jump to `value` immediately, cancelling any running animation.
    pub fn snap_to(
        &mut self,
        value: T,
    ) {
        *self = Self::new(value);
    }

    /// Start animating towards `target` at time `now`.
    ///
    /// The animation starts from whatever value is displayed at `now`, so a
    /// running animation is superseded without a jump.
    pub fn animate_to(
        &mut self,
        now: Millis,
        target: T,
        duration_ms: u32,
        easing: Easing,
    ) {
        self.start = self.value_at(now);
        self.target = target;
        self.started_at = now;
        self.duration_ms = duration_ms;
        self.easing = easing;
    }

    /// Linear (un-eased) progress in `[0, 1]` at time `now`.
    pub fn progress_at(
        &self,
        now: Millis,
    ) -> f32 {
        if self.duration_ms == 0 || now >= self.finishes_at() {
            return 1.0;
        }
        if now <= self.started_at {
            return 0.0;
        }
        clamp_fraction((now - self.started_at) as f32 / self.duration_ms as f32)
    }

    /// Displayed value at time `now`.
    pub fn value_at(
        &self,
        now: Millis,
    ) -> T {
        let progress = self.progress_at(now);
        if progress >= 1.0 {
            return self.target;
        }
        self.start.lerp(self.target, self.easing.transform(progress))
    }

    /// Whether the animation is still moving at time `now`.
    #[inline]
    pub fn is_running_at(
        &self,
        now: Millis,
    ) -> bool {
        self.progress_at(now) < 1.0
    }

    /// Value the animation is heading towards.
    #[inline]
    pub fn target(&self) -> T { self.target }

    /// Time at which the current animation started.
    #[inline]
    pub const fn started_at(&self) -> Millis { self.started_at }

    /// Time at which the current animation lands on its target.
    #[inline]
    pub const fn finishes_at(&self) -> Millis { self.started_at.saturating_add(self.duration_ms as Millis) }
}

impl<T: Interpolate + Default> Default for AnimatedValue<T> {
    fn default() -> Self { Self::new(T::default()) }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLACK, WHITE};

    const RED: Rgb888 = Rgb888::new(255, 0, 0);

    // -------------------------------------------------------------------------
    // Interpolation Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_clamp_fraction() {
        assert_eq!(clamp_fraction(-0.1), 0.0);
        assert_eq!(clamp_fraction(0.4), 0.4);
        assert_eq!(clamp_fraction(1.0001), 1.0);
        assert_eq!(clamp_fraction(f32::NAN), 0.0);
    }

    #[test]
    fn test_lerp_f32_endpoints_exact() {
        assert_eq!(600.0f32.lerp(-800.0, 0.0), 600.0);
        assert_eq!(600.0f32.lerp(-800.0, 1.0), -800.0);
        assert_eq!(600.0f32.lerp(-800.0, 0.5), -100.0);
        assert_eq!(0.9f32.lerp(1.1, 7.0), 1.1, "Fraction above 1 should clamp");
    }

    #[test]
    fn test_lerp_rgb888_same_color() {
        assert_eq!(RED.lerp(RED, 0.5), RED, "Lerping RED to RED should return RED");
    }

    #[test]
    fn test_lerp_rgb888_endpoints() {
        assert_eq!(BLACK.lerp(WHITE, 0.0), BLACK, "At t=0, should return 'from' color");
        assert_eq!(BLACK.lerp(WHITE, 1.0), WHITE, "At t=1, should return 'to' color");
    }

    #[test]
    fn test_lerp_rgb888_midpoint() {
        let mid = BLACK.lerp(WHITE, 0.5);
        assert_eq!(mid, Rgb888::new(128, 128, 128));
        assert_eq!(BLACK.lerp(WHITE, 0.25), Rgb888::new(64, 64, 64), "Channels round to nearest");
    }

    #[test]
    fn test_lerp_rgb888_stays_between_endpoints() {
        let from = Rgb888::new(0xF8, 0xBB, 0xD0);
        let to = Rgb888::new(0xE6, 0xE6, 0xFA);
        for step in 0..=100 {
            let c = from.lerp(to, step as f32 / 100.0);
            assert!(c.r() <= from.r().max(to.r()) && c.r() >= from.r().min(to.r()));
            assert!(c.g() <= from.g().max(to.g()) && c.g() >= from.g().min(to.g()));
            assert!(c.b() <= from.b().max(to.b()) && c.b() >= from.b().min(to.b()));
        }
    }

    // -------------------------------------------------------------------------
    // AnimatedValue Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_new_value_is_at_rest() {
        let value = AnimatedScalar::new(0.25);
        assert_eq!(value.value_at(0), 0.25);
        assert_eq!(value.value_at(10_000), 0.25);
        assert!(!value.is_running_at(0));
    }

    #[test]
    fn test_animate_to_linear() {
        let mut value = AnimatedScalar::new(0.0);
        value.animate_to(1000, 1.0, 1000, Easing::Linear);

        assert_eq!(value.value_at(500), 0.0, "Before start the start value is shown");
        assert_eq!(value.value_at(1000), 0.0);
        assert!((value.value_at(1250) - 0.25).abs() < 1e-6);
        assert_eq!(value.value_at(2000), 1.0);
        assert_eq!(value.value_at(9000), 1.0);
        assert!(value.is_running_at(1999));
        assert!(!value.is_running_at(2000));
    }

    #[test]
    fn test_retarget_starts_from_current_value() {
        let mut value = AnimatedScalar::new(0.0);
        value.animate_to(0, 100.0, 1000, Easing::Linear);
        let mid = value.value_at(400);

        value.animate_to(400, -50.0, 1000, Easing::Linear);

        assert_eq!(value.value_at(400), mid, "Retarget must not jump");
        assert!((mid - 40.0).abs() < 1e-4);
        assert_eq!(value.value_at(1400), -50.0);
    }

    #[test]
    fn test_retarget_after_landing_starts_from_target() {
        let mut color = AnimatedColor::new(BLACK);
        color.animate_to(0, WHITE, 1000, Easing::FAST_OUT_LINEAR_IN);
        color.animate_to(1000, RED, 1000, Easing::FAST_OUT_LINEAR_IN);

        assert_eq!(color.value_at(1000), WHITE, "Landed crossfade hands over its exact target");
        assert_eq!(color.value_at(2000), RED);
    }

    #[test]
    fn test_snap_cancels_animation() {
        let mut value = AnimatedScalar::new(0.0);
        value.animate_to(0, 1.0, 10_000, Easing::EASE);
        value.snap_to(0.0);

        assert_eq!(value.value_at(5000), 0.0);
        assert!(!value.is_running_at(5000));
    }

    #[test]
    fn test_value_at_is_idempotent() {
        let mut value = AnimatedScalar::new(0.0);
        value.animate_to(100, 1.0, 777, Easing::EASE);
        for t in [0, 150, 400, 876, 877, 5000] {
            assert_eq!(value.value_at(t), value.value_at(t));
        }
    }
}
