//! Greeting text pulse.
//!
//! Two independent, infinitely repeating oscillations:
//! - the greeting line scales between 0.9 and 1.1 (500 ms each way)
//! - the signature line fades between 0.5 and 1.0 opacity (1000 ms each way)
//!
//! Both are pure functions of time. The way back replays the forward curve
//! mirrored, so the value at `t` and at `2 * half_period - t` are equal.

use serde::{Deserialize, Serialize};

use crate::animations::{Interpolate, Millis};
use crate::config::PulseConfig;
use crate::easing::Easing;

/// A value that swings between `from` and `to` forever.
///
/// ```text
///  to  |    /\      /\
///      |   /  \    /  \
/// from |__/    \__/    \__
///         |half|
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Oscillator {
    pub from: f32,
    pub to: f32,
    /// Time for one sweep from `from` to `to`.
    pub half_period_ms: u32,
    pub easing: Easing,
}

impl Oscillator {
    pub const fn new(
        from: f32,
        to: f32,
        half_period_ms: u32,
        easing: Easing,
    ) -> Self {
        Self {
            from,
            to,
            half_period_ms,
            easing,
        }
    }

    /// Linear position in the sweep at time `now`: 0 at `from`, 1 at `to`.
    pub fn ramp_at(
        &self,
        now: Millis,
    ) -> f32 {
        let half = Millis::from(self.half_period_ms.max(1));
        let local = now % (half * 2);
        if local < half {
            local as f32 / half as f32
        } else {
            (half * 2 - local) as f32 / half as f32
        }
    }

    /// Oscillating value at time `now`.
    pub fn value_at(
        &self,
        now: Millis,
    ) -> f32 {
        self.from.lerp(self.to, self.easing.transform(self.ramp_at(now)))
    }
}

/// Drives the greeting scale and signature opacity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextPulser {
    scale: Oscillator,
    subtitle_opacity: Oscillator,
}

impl TextPulser {
    pub fn new(config: &PulseConfig) -> Self {
        Self {
            scale: config.scale,
            subtitle_opacity: config.subtitle_opacity,
        }
    }

    /// Scale factor of the greeting line.
    #[inline]
    pub fn scale(
        &self,
        now: Millis,
    ) -> f32 {
        self.scale.value_at(now)
    }

    /// Opacity of the signature line.
    #[inline]
    pub fn subtitle_opacity(
        &self,
        now: Millis,
    ) -> f32 {
        self.subtitle_opacity.value_at(now)
    }
}

impl Default for TextPulser {
    fn default() -> Self { Self::new(&PulseConfig::default()) }
}
