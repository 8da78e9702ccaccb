//! Easing curves mapping linear progress to eased progress.
//!
//! Every timed animation on the greeting screen is driven by one of a handful
//! of cubic-bezier curves. A curve is described by its two inner control
//! points; the outer points are fixed at `(0, 0)` and `(1, 1)`.
//!
//! ```text
//! y
//! 1 |            ___....
//!   |        _.-'
//!   |     .-'             EASE (0.25, 0.1, 0.25, 1.0)
//!   |   .'
//!   | .'
//! 0 +------------------ x
//!   0                  1
//! ```
//!
//! Evaluating a curve means solving `x(t) = progress` for the curve parameter
//! `t` and returning `y(t)`. Newton-Raphson converges in a few steps for the
//! curves used here; bisection is the fallback when the slope flattens out.
//!
//! All math is plain `f32` arithmetic, so the module works in `no_std`.

use serde::{Deserialize, Serialize};

use crate::animations::clamp_fraction;

const NEWTON_ITERATIONS: usize = 8;
const BISECTION_ITERATIONS: usize = 32;
const SOLVE_EPSILON: f32 = 1e-6;

/// An easing curve.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Easing {
    /// Output equals input.
    Linear,
    /// CSS-style cubic bezier with control points `(x1, y1)` and `(x2, y2)`.
    CubicBezier { x1: f32, y1: f32, x2: f32, y2: f32 },
}

impl Easing {
    /// General purpose ease: quick start, long gentle settle.
    pub const EASE: Self = Self::cubic(0.25, 0.1, 0.25, 1.0);

    /// Symmetric acceleration and deceleration.
    pub const EASE_IN_OUT: Self = Self::cubic(0.42, 0.0, 0.58, 1.0);

    /// Starts at full speed and decelerates.
    pub const EASE_OUT: Self = Self::cubic(0.0, 0.0, 0.58, 1.0);

    /// Accelerates from rest and finishes at full (linear) speed.
    pub const FAST_OUT_LINEAR_IN: Self = Self::cubic(0.4, 0.0, 1.0, 1.0);

    pub const fn cubic(
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
    ) -> Self {
        Self::CubicBezier { x1, y1, x2, y2 }
    }

    /// Map linear progress to eased progress.
    ///
    /// Input is clamped to `[0, 1]`; the endpoints map exactly to `0.0` and
    /// `1.0` so finished animations land on their target value.
    pub fn transform(
        self,
        fraction: f32,
    ) -> f32 {
        let x = clamp_fraction(fraction);
        match self {
            Self::Linear => x,
            Self::CubicBezier { x1, y1, x2, y2 } => {
                if x <= 0.0 {
                    return 0.0;
                }
                if x >= 1.0 {
                    return 1.0;
                }
                let t = solve_curve_x(x1, x2, x);
                bezier(y1, y2, t)
            }
        }
    }
}

impl Default for Easing {
    fn default() -> Self { Self::Linear }
}

/// One coordinate of a cubic bezier whose end points are 0 and 1.
#[inline]
fn bezier(
    a1: f32,
    a2: f32,
    t: f32,
) -> f32 {
    let u = 1.0 - t;
    3.0 * a1 * u * u * t + 3.0 * a2 * u * t * t + t * t * t
}

/// Derivative of [`bezier`] with respect to `t`.
#[inline]
fn bezier_slope(
    a1: f32,
    a2: f32,
    t: f32,
) -> f32 {
    let u = 1.0 - t;
    3.0 * a1 * u * u + 6.0 * (a2 - a1) * u * t + 3.0 * (1.0 - a2) * t * t
}

/// Find the curve parameter whose x coordinate equals `x`.
fn solve_curve_x(
    x1: f32,
    x2: f32,
    x: f32,
) -> f32 {
    let mut t = x;
    for _ in 0..NEWTON_ITERATIONS {
        let error = bezier(x1, x2, t) - x;
        if error.abs() < SOLVE_EPSILON {
            return t.clamp(0.0, 1.0);
        }
        let slope = bezier_slope(x1, x2, t);
        if slope.abs() < SOLVE_EPSILON {
            break;
        }
        t -= error / slope;
    }

    let mut lo = 0.0f32;
    let mut hi = 1.0f32;
    t = x;
    for _ in 0..BISECTION_ITERATIONS {
        let value = bezier(x1, x2, t);
        if (value - x).abs() < SOLVE_EPSILON {
            break;
        }
        if value < x {
            lo = t;
        } else {
            hi = t;
        }
        t = (lo + hi) * 0.5;
    }
    t
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURVES: [Easing; 5] = [
        Easing::Linear,
        Easing::EASE,
        Easing::EASE_IN_OUT,
        Easing::EASE_OUT,
        Easing::FAST_OUT_LINEAR_IN,
    ];

    #[test]
    fn test_endpoints_are_exact() {
        for curve in CURVES {
            assert_eq!(curve.transform(0.0), 0.0, "{curve:?} should start at 0");
            assert_eq!(curve.transform(1.0), 1.0, "{curve:?} should end at 1");
        }
    }

    #[test]
    fn test_input_is_clamped() {
        for curve in CURVES {
            assert_eq!(curve.transform(-0.5), 0.0);
            assert_eq!(curve.transform(1.5), 1.0);
            assert_eq!(curve.transform(f32::NAN), 0.0, "NaN progress should clamp to 0");
        }
    }

    #[test]
    fn test_curves_are_monotonic_and_bounded() {
        for curve in CURVES {
            let mut prev = 0.0f32;
            for step in 0..=200 {
                let y = curve.transform(step as f32 / 200.0);
                assert!((0.0..=1.0).contains(&y), "{curve:?} left [0, 1] at step {step}: {y}");
                assert!(y + 1e-4 >= prev, "{curve:?} decreased at step {step}");
                prev = y;
            }
        }
    }

    #[test]
    fn test_linear_is_identity() {
        assert_eq!(Easing::Linear.transform(0.25), 0.25);
        assert_eq!(Easing::Linear.transform(0.8), 0.8);
    }

    #[test]
    fn test_ease_in_out_is_symmetric() {
        let mid = Easing::EASE_IN_OUT.transform(0.5);
        assert!((mid - 0.5).abs() < 1e-3, "EASE_IN_OUT midpoint should be 0.5, got {mid}");

        let a = Easing::EASE_IN_OUT.transform(0.2);
        let b = Easing::EASE_IN_OUT.transform(0.8);
        assert!((a + b - 1.0).abs() < 1e-3, "EASE_IN_OUT should mirror around the midpoint");
    }

    #[test]
    fn test_curve_shapes() {
        // Accelerating curve stays under the diagonal
        assert!(Easing::FAST_OUT_LINEAR_IN.transform(0.25) < 0.25);
        // Decelerating curves stay above it
        assert!(Easing::EASE_OUT.transform(0.25) > 0.25);
        assert!(Easing::EASE.transform(0.25) > 0.25);
    }

    #[test]
    fn test_solver_matches_curve() {
        let (x1, x2) = (0.25, 0.25);
        for step in 1..100 {
            let x = step as f32 / 100.0;
            let t = solve_curve_x(x1, x2, x);
            assert!((bezier(x1, x2, t) - x).abs() < 1e-4, "solver missed x={x}");
        }
    }
}
