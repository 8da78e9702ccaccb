//! Scene configuration.
//!
//! Every timing constant, offset and element list of the greeting screen is
//! gathered in [`SceneConfig`]. `SceneConfig::default()` reproduces the
//! shipped screen; hosts may load an alternative from a file, since the whole
//! tree is `serde`-serializable. Missing fields fall back to their defaults.
//!
//! # Units
//!
//! - Durations and periods are milliseconds.
//! - Offsets are dp relative to the viewport center (positive = down/right).
//! - Glyph sizes are sp.
//!
//! # Validation
//!
//! [`SceneConfig::validate`] rejects configurations that would stall or
//! divide by zero (zero periods) and opacities outside `[0, 1]`.
//! [`GreetingScene::new`](crate::scene::GreetingScene::new) calls it, so the
//! animators themselves can assume sane values.

use serde::{Deserialize, Serialize};

use crate::colors::{DEFAULT_PALETTE, PALETTE_SIZE, PaletteColor};
use crate::easing::Easing;
use crate::elements::{Elements, elements};
use crate::error::ConfigError;
use crate::pulse::Oscillator;

// =============================================================================
// Background Defaults
// =============================================================================

/// Time between palette steps.
pub const COLOR_ADVANCE_PERIOD_MS: u32 = 1000;

/// Duration of each crossfade. Equal to the advance period, so a crossfade
/// lands exactly when the next one starts.
pub const COLOR_CROSSFADE_MS: u32 = 1000;

// =============================================================================
// Text Pulse Defaults
// =============================================================================

pub const GREETING_SCALE_MIN: f32 = 0.9;
pub const GREETING_SCALE_MAX: f32 = 1.1;
pub const GREETING_SCALE_HALF_PERIOD_MS: u32 = 500;

pub const SUBTITLE_OPACITY_MIN: f32 = 0.5;
pub const SUBTITLE_OPACITY_MAX: f32 = 1.0;
pub const SUBTITLE_OPACITY_HALF_PERIOD_MS: u32 = 1000;

const _: () = assert!(GREETING_SCALE_MIN < GREETING_SCALE_MAX);
const _: () = assert!(SUBTITLE_OPACITY_MIN < SUBTITLE_OPACITY_MAX);

// =============================================================================
// Balloon Defaults
// =============================================================================

/// Time between balloon waves.
pub const BALLOON_WAVE_PERIOD_MS: u32 = 5000;

/// Time for a balloon to travel from bottom to top. Longer than the wave
/// period: every balloon is reset mid-flight by the next wave.
pub const BALLOON_RISE_MS: u32 = 10_000;

pub const BALLOON_BOTTOM_OFFSET: f32 = 600.0;
pub const BALLOON_TOP_OFFSET: f32 = -800.0;
pub const BALLOON_OPACITY: f32 = 0.8;
pub const BALLOON_GLYPH_SIZE: f32 = 60.0;

const _: () = assert!(BALLOON_TOP_OFFSET < BALLOON_BOTTOM_OFFSET);

// =============================================================================
// Confetti Defaults
// =============================================================================

/// Length of one confetti fall cycle.
pub const CONFETTI_CYCLE_MS: u32 = 5000;

pub const CONFETTI_TOP_OFFSET: f32 = -500.0;
pub const CONFETTI_BOTTOM_OFFSET: f32 = 600.0;
pub const CONFETTI_OPACITY: f32 = 0.7;
pub const CONFETTI_GLYPH_SIZE: f32 = 35.0;

const _: () = assert!(CONFETTI_TOP_OFFSET < CONFETTI_BOTTOM_OFFSET);

// =============================================================================
// Configuration Types
// =============================================================================

/// Complete configuration of the greeting screen animations.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub background: BackgroundConfig,
    pub pulse: PulseConfig,
    pub balloons: BalloonConfig,
    pub confetti: ConfettiConfig,
}

impl SceneConfig {
    /// Check every section, reporting the first invalid field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.background.validate()?;
        self.pulse.validate()?;
        self.balloons.validate()?;
        self.confetti.validate()
    }
}

/// Cycling background.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundConfig {
    pub palette: [PaletteColor; PALETTE_SIZE],
    pub advance_period_ms: u32,
    pub crossfade_ms: u32,
    pub crossfade_easing: Easing,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            palette: DEFAULT_PALETTE,
            advance_period_ms: COLOR_ADVANCE_PERIOD_MS,
            crossfade_ms: COLOR_CROSSFADE_MS,
            crossfade_easing: Easing::FAST_OUT_LINEAR_IN,
        }
    }
}

impl BackgroundConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        non_zero("background.advance_period_ms", self.advance_period_ms)?;
        non_zero("background.crossfade_ms", self.crossfade_ms)
    }
}

/// Greeting scale pulse and subtitle fade.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PulseConfig {
    pub scale: Oscillator,
    pub subtitle_opacity: Oscillator,
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self {
            scale: Oscillator::new(
                GREETING_SCALE_MIN,
                GREETING_SCALE_MAX,
                GREETING_SCALE_HALF_PERIOD_MS,
                Easing::EASE_IN_OUT,
            ),
            subtitle_opacity: Oscillator::new(
                SUBTITLE_OPACITY_MIN,
                SUBTITLE_OPACITY_MAX,
                SUBTITLE_OPACITY_HALF_PERIOD_MS,
                Easing::EASE_OUT,
            ),
        }
    }
}

impl PulseConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        non_zero("pulse.scale.half_period_ms", self.scale.half_period_ms)?;
        finite("pulse.scale.from", self.scale.from)?;
        finite("pulse.scale.to", self.scale.to)?;
        non_zero("pulse.subtitle_opacity.half_period_ms", self.subtitle_opacity.half_period_ms)?;
        opacity("pulse.subtitle_opacity.from", self.subtitle_opacity.from)?;
        opacity("pulse.subtitle_opacity.to", self.subtitle_opacity.to)
    }
}

/// Rising balloon waves.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalloonConfig {
    pub elements: Elements,
    pub wave_period_ms: u32,
    pub rise_duration_ms: u32,
    pub rise_easing: Easing,
    pub bottom_offset: f32,
    pub top_offset: f32,
    pub opacity: f32,
    pub glyph_size: f32,
}

impl Default for BalloonConfig {
    fn default() -> Self {
        Self {
            elements: elements(&[
                ("\u{1F388}", 45.0, 1834),
                ("\u{1F388}", -87.0, 1540),
                ("\u{1F388}", -10.0, 1265),
            ]),
            wave_period_ms: BALLOON_WAVE_PERIOD_MS,
            rise_duration_ms: BALLOON_RISE_MS,
            rise_easing: Easing::EASE,
            bottom_offset: BALLOON_BOTTOM_OFFSET,
            top_offset: BALLOON_TOP_OFFSET,
            opacity: BALLOON_OPACITY,
            glyph_size: BALLOON_GLYPH_SIZE,
        }
    }
}

impl BalloonConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        non_zero("balloons.wave_period_ms", self.wave_period_ms)?;
        non_zero("balloons.rise_duration_ms", self.rise_duration_ms)?;
        finite("balloons.bottom_offset", self.bottom_offset)?;
        finite("balloons.top_offset", self.top_offset)?;
        positive("balloons.glyph_size", self.glyph_size)?;
        opacity("balloons.opacity", self.opacity)?;
        offsets("balloons.elements", &self.elements)
    }
}

/// Falling confetti loop.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfettiConfig {
    pub elements: Elements,
    pub cycle_ms: u32,
    pub top_offset: f32,
    pub bottom_offset: f32,
    pub opacity: f32,
    pub glyph_size: f32,
}

impl Default for ConfettiConfig {
    fn default() -> Self {
        Self {
            elements: elements(&[
                ("\u{1F389}", -147.0, 1280),
                ("\u{1F38A}", 103.0, 320),
                ("\u{1F973}\u{FE0F}", -32.0, 1720),
                ("\u{1F370}", 198.0, 470),
                ("\u{1F369}", -115.0, 930),
                ("\u{1F607}", 36.0, 1840),
                ("\u{1F451}", -189.0, 150),
                ("\u{1F9F8}", 57.0, 1130),
                ("\u{1F36A}", 122.0, 740),
                ("\u{1F9C1}", -61.0, 2000),
                ("\u{1F36B}", 171.0, 290),
            ]),
            cycle_ms: CONFETTI_CYCLE_MS,
            top_offset: CONFETTI_TOP_OFFSET,
            bottom_offset: CONFETTI_BOTTOM_OFFSET,
            opacity: CONFETTI_OPACITY,
            glyph_size: CONFETTI_GLYPH_SIZE,
        }
    }
}

impl ConfettiConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        non_zero("confetti.cycle_ms", self.cycle_ms)?;
        finite("confetti.top_offset", self.top_offset)?;
        finite("confetti.bottom_offset", self.bottom_offset)?;
        positive("confetti.glyph_size", self.glyph_size)?;
        opacity("confetti.opacity", self.opacity)?;
        offsets("confetti.elements", &self.elements)
    }
}

// =============================================================================
// Validation Helpers
// =============================================================================

fn non_zero(
    field: &'static str,
    value: u32,
) -> Result<(), ConfigError> {
    if value == 0 { Err(ConfigError::ZeroDuration { field }) } else { Ok(()) }
}

fn finite(
    field: &'static str,
    value: f32,
) -> Result<(), ConfigError> {
    if value.is_finite() { Ok(()) } else { Err(ConfigError::InvalidRange { field }) }
}

fn positive(
    field: &'static str,
    value: f32,
) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidRange { field })
    }
}

fn opacity(
    field: &'static str,
    value: f32,
) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OpacityOutOfRange { field })
    }
}

fn offsets(
    field: &'static str,
    elements: &Elements,
) -> Result<(), ConfigError> {
    if elements.iter().all(|e| e.horizontal_offset.is_finite()) {
        Ok(())
    } else {
        Err(ConfigError::InvalidRange { field })
    }
}
