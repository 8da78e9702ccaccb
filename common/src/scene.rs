//! The greeting screen animation state.
//!
//! [`GreetingScene`] owns the scene clock and the four animators. The host
//! drives it from its frame loop:
//!
//! ```ignore
//! let mut scene = GreetingScene::new(&SceneConfig::default())?;
//! loop {
//!     for event in scene.advance(elapsed_ms) {
//!         // log, count, ...
//!     }
//!     render_frame(&mut surface, &scene.frame(), &strings, &layout)?;
//! }
//! ```
//!
//! Frames depend only on the scene time, never on how the clock was stepped
//! to reach it.

use core::mem;

use embedded_graphics::pixelcolor::Rgb888;

use crate::animations::Millis;
use crate::background::BackgroundCycler;
use crate::balloons::BalloonWave;
use crate::config::SceneConfig;
use crate::confetti::ConfettiLoop;
use crate::elements::Placements;
use crate::error::ConfigError;
use crate::events::TimelineEvents;
use crate::pulse::TextPulser;

/// Everything needed to draw the screen at one instant.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame<'a> {
    pub at: Millis,
    pub background: Rgb888,
    pub greeting_scale: f32,
    pub subtitle_opacity: f32,
    pub balloons: Placements<'a>,
    pub confetti: Placements<'a>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GreetingScene {
    now: Millis,
    background: BackgroundCycler,
    pulse: TextPulser,
    balloons: BalloonWave,
    confetti: ConfettiLoop,
    /// Events not yet handed to the caller.
    pending_events: TimelineEvents,
}

impl GreetingScene {
    /// Validate `config` and build the scene at t = 0.
    ///
    /// Events of t = 0 itself (the first balloon wave) are returned by the
    /// first call to [`advance`](Self::advance) or
    /// [`advance_to`](Self::advance_to).
    pub fn new(config: &SceneConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut scene = Self {
            now: 0,
            background: BackgroundCycler::new(&config.background),
            pulse: TextPulser::new(&config.pulse),
            balloons: BalloonWave::new(&config.balloons),
            confetti: ConfettiLoop::new(&config.confetti),
            pending_events: TimelineEvents::new(),
        };
        scene.catch_up(0);
        Ok(scene)
    }

    /// Move the clock forward by `delta_ms`.
    pub fn advance(
        &mut self,
        delta_ms: Millis,
    ) -> TimelineEvents {
        self.advance_to(self.now.saturating_add(delta_ms))
    }

    /// Move the clock to `now`, returning the events that happened on the
    /// way in chronological order.
    ///
    /// Times earlier than the current scene time are ignored.
    pub fn advance_to(
        &mut self,
        now: Millis,
    ) -> TimelineEvents {
        if now > self.now {
            self.catch_up(now);
        }
        mem::take(&mut self.pending_events)
    }

    /// Step both animators boundary by boundary up to `now`.
    ///
    /// Each step only produces events of a single instant, so the pending
    /// events stay chronological and a full buffer keeps the earliest ones.
    fn catch_up(
        &mut self,
        now: Millis,
    ) {
        self.now = now;
        loop {
            let at = self.background.next_advance_at().min(self.balloons.next_event_at());
            if at > now {
                break;
            }
            self.background.advance_to(at, &mut self.pending_events);
            self.balloons.advance_to(at, &mut self.pending_events);
        }
    }

    /// Snapshot of every visual property at the current scene time.
    pub fn frame(&self) -> Frame<'_> {
        let now = self.now;
        Frame {
            at: now,
            background: self.background.current_color(now),
            greeting_scale: self.pulse.scale(now),
            subtitle_opacity: self.pulse.subtitle_opacity(now),
            balloons: self.balloons.placements(now),
            confetti: self.confetti.placements(now),
        }
    }

    #[inline]
    pub const fn now(&self) -> Millis { self.now }

    #[inline]
    pub const fn background(&self) -> &BackgroundCycler { &self.background }

    #[inline]
    pub const fn pulse(&self) -> &TextPulser { &self.pulse }

    #[inline]
    pub const fn balloons(&self) -> &BalloonWave { &self.balloons }

    #[inline]
    pub const fn confetti(&self) -> &ConfettiLoop { &self.confetti }
}
