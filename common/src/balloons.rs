//! Rising balloon waves.
//!
//! Every `wave_period_ms` a new wave starts: all balloons snap back to the
//! bottom, and each one is scheduled to start rising after its own phase
//! delay. The rise lasts longer than the wave period, so each wave cuts the
//! previous one short.
//!
//! # Launch tickets
//!
//! A scheduled launch is a [`LaunchTicket`] stamped with the generation of
//! the wave that issued it. When a ticket comes due it only takes effect if
//! its generation is still the current one; tickets outliving their wave are
//! dropped and reported as [`TimelineEvent::StaleLaunchSkipped`].
//!
//! ```text
//! wave #1                          wave #2
//! |--- delay ---|== rise ==========|--- delay ---|== rise ====...
//! 0            1834               5000          6834
//! ```
//!
//! A ticket due exactly on the next wave boundary belongs to the old wave and
//! is stale.

use heapless::Vec;

use crate::animations::{AnimatedScalar, Interpolate, Millis, clamp_fraction};
use crate::config::BalloonConfig;
use crate::elements::{ElementPhase, MAX_ELEMENTS, Placement, Placements};
use crate::events::{TimelineEvent, TimelineEvents, record};

/// Pending launches across the current and at most one superseded wave.
const TICKET_CAPACITY: usize = MAX_ELEMENTS * 2;

/// Rise progress of one balloon within the current wave.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct RiseState {
    progress: AnimatedScalar,
    launched_at: Option<Millis>,
}

/// A scheduled balloon launch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LaunchTicket {
    pub generation: u32,
    pub element: usize,
    pub fire_at: Millis,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BalloonWave {
    config: BalloonConfig,
    rises: Vec<RiseState, MAX_ELEMENTS>,
    tickets: Vec<LaunchTicket, TICKET_CAPACITY>,
    generation: u32,
    wave_started_at: Millis,
    next_wave_at: Millis,
}

impl BalloonWave {
    /// Create the animator. The first wave starts at t = 0.
    pub fn new(config: &BalloonConfig) -> Self {
        let mut rises = Vec::new();
        for _ in config.elements.iter() {
            rises.push(RiseState::default()).ok();
        }
        Self {
            config: config.clone(),
            rises,
            tickets: Vec::new(),
            generation: 0,
            wave_started_at: 0,
            next_wave_at: 0,
        }
    }

    /// Start waves and fire launch tickets due at or before `now`, in time
    /// order.
    pub fn advance_to(
        &mut self,
        now: Millis,
        events: &mut TimelineEvents,
    ) {
        loop {
            if let Some(index) = self.next_due_ticket(now) {
                let ticket = self.tickets.swap_remove(index);
                self.fire(ticket, events);
            } else if self.next_wave_at <= now {
                self.start_wave(self.next_wave_at, events);
            } else {
                break;
            }
        }
    }

    /// Earliest ticket due at `now` that fires before the next wave.
    fn next_due_ticket(
        &self,
        now: Millis,
    ) -> Option<usize> {
        self.tickets
            .iter()
            .enumerate()
            .filter(|(_, t)| t.fire_at <= now && t.fire_at < self.next_wave_at)
            .min_by_key(|(i, t)| (t.fire_at, *i))
            .map(|(i, _)| i)
    }

    fn start_wave(
        &mut self,
        at: Millis,
        events: &mut TimelineEvents,
    ) {
        self.generation = self.generation.wrapping_add(1);
        self.wave_started_at = at;
        self.next_wave_at = at.saturating_add(Millis::from(self.config.wave_period_ms.max(1)));

        for rise in &mut self.rises {
            rise.progress.snap_to(0.0);
            rise.launched_at = None;
        }
        record(
            events,
            TimelineEvent::WaveStarted {
                generation: self.generation,
                at,
            },
        );

        for (element, balloon) in self.config.elements.iter().enumerate() {
            let ticket = LaunchTicket {
                generation: self.generation,
                element,
                fire_at: at.saturating_add(Millis::from(balloon.phase_delay_ms)),
            };
            if let Err(ticket) = self.tickets.push(ticket) {
                // Out of room: forget older waves, their launches would be skipped anyway.
                let generation = self.generation;
                self.tickets.retain(|t| t.generation == generation);
                self.tickets.push(ticket).ok();
            }
        }
    }

    fn fire(
        &mut self,
        ticket: LaunchTicket,
        events: &mut TimelineEvents,
    ) {
        let LaunchTicket {
            generation,
            element,
            fire_at: at,
        } = ticket;

        if generation != self.generation {
            record(events, TimelineEvent::StaleLaunchSkipped { element, generation, at });
            return;
        }
        let Some(rise) = self.rises.get_mut(element) else {
            return;
        };
        rise.progress
            .animate_to(at, 1.0, self.config.rise_duration_ms, self.config.rise_easing);
        rise.launched_at = Some(at);
        record(events, TimelineEvent::BalloonLaunched { element, generation, at });
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Eased rise fraction of balloon `element` at `now`: 0 at the bottom,
    /// 1 at the top.
    pub fn rise_fraction(
        &self,
        element: usize,
        now: Millis,
    ) -> f32 {
        self.rises
            .get(element)
            .map_or(0.0, |rise| clamp_fraction(rise.progress.value_at(now)))
    }

    /// Vertical offset of balloon `element` in dp from the viewport center.
    pub fn vertical_offset(
        &self,
        element: usize,
        now: Millis,
    ) -> f32 {
        self.config
            .bottom_offset
            .lerp(self.config.top_offset, self.rise_fraction(element, now))
    }

    pub fn horizontal_offset(
        &self,
        element: usize,
    ) -> f32 {
        self.config
            .elements
            .get(element)
            .map_or(0.0, |e| e.horizontal_offset)
    }

    pub fn phase(
        &self,
        element: usize,
        now: Millis,
    ) -> ElementPhase {
        match self.rises.get(element) {
            Some(RiseState {
                launched_at: Some(_),
                progress,
            }) if progress.is_running_at(now) => ElementPhase::Animating,
            Some(RiseState {
                launched_at: Some(_), ..
            }) => ElementPhase::Complete,
            _ => ElementPhase::Waiting,
        }
    }

    /// Time of the next wave start or launch ticket, whichever comes first.
    pub fn next_event_at(&self) -> Millis {
        self.tickets
            .iter()
            .map(|t| t.fire_at)
            .fold(self.next_wave_at, Millis::min)
    }

    /// Generation of the current wave (0 before the first wave).
    #[inline]
    pub const fn generation(&self) -> u32 { self.generation }

    #[inline]
    pub const fn wave_started_at(&self) -> Millis { self.wave_started_at }

    #[inline]
    pub const fn next_wave_at(&self) -> Millis { self.next_wave_at }

    /// Number of launches still scheduled, stale ones included.
    #[inline]
    pub fn pending_launches(&self) -> usize { self.tickets.len() }

    #[inline]
    pub fn len(&self) -> usize { self.rises.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.rises.is_empty() }

    /// Where to draw every balloon at `now`.
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

impl Default for BalloonWave {
    fn default() -> Self { Self::new(&BalloonConfig::default()) }
}
