//! Animation timing engine for the birthday greeting screen.
//!
//! This crate contains the platform-agnostic core shared by every host:
//!
//! - [`colors`]: Background palette and text colors
//! - [`easing`]: Cubic bezier easing curves
//! - [`animations`]: Interpolation and retargetable animated values
//! - [`config`]: Scene configuration with the shipped defaults
//! - [`background`]: Cycling, crossfading background color
//! - [`pulse`]: Greeting scale and signature opacity oscillators
//! - [`balloons`]: Rising balloon waves with generation-stamped launches
//! - [`confetti`]: Falling confetti sawtooth
//! - [`scene`]: The clock and the four animators, producing [`Frame`]s
//! - [`render`]: Draw commands for a frame against a [`Surface`]
//! - [`strings`]: Localized string lookup
//! - [`events`]: Timeline events reported while advancing
//! - [`profiling`]: Event log ring buffer (no time dependencies)
//!
//! # no_std Compatibility
//!
//! This crate is `no_std` compatible and never allocates. Time is passed in
//! as plain milliseconds, so nothing depends on `std::time` or a platform
//! clock.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod animations;
pub mod background;
pub mod balloons;
pub mod colors;
pub mod confetti;
pub mod config;
pub mod easing;
pub mod elements;
pub mod error;
pub mod events;
pub mod profiling;
pub mod pulse;
pub mod render;
pub mod scene;
pub mod strings;

// Re-export commonly used items
pub use animations::Millis;
pub use colors::*;
pub use config::SceneConfig;
pub use easing::Easing;
pub use elements::{ElementPhase, FloatingElement, Placement};
pub use error::ConfigError;
pub use events::{TimelineEvent, TimelineEvents};
pub use render::{GlyphCommand, Surface, TextLayout, render_frame};
pub use scene::{Frame, GreetingScene};
pub use strings::{GreetingStrings, StringKey, StringResources};
