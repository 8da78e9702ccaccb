//! Timeline events reported by the animators.
//!
//! The core does no logging of its own. Instead every discrete state change
//! (color step, wave start, balloon launch) is returned to the caller of
//! [`GreetingScene::advance`](crate::scene::GreetingScene::advance), which
//! decides whether to log, count, or display it.

use core::fmt;

use heapless::Vec;

use crate::animations::Millis;

/// Maximum number of events returned by a single advance.
///
/// A normal frame produces at most a handful. Animators are stepped in time
/// order, so after a long jump the earliest events are kept and later ones
/// are dropped. Animation state is unaffected.
pub const EVENT_CAPACITY: usize = 64;

/// A discrete change on the animation timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimelineEvent {
    /// The background advanced to palette entry `index`.
    ColorAdvanced { index: usize, at: Millis },
    /// A new balloon wave started.
    WaveStarted { generation: u32, at: Millis },
    /// A balloon began rising.
    BalloonLaunched { element: usize, generation: u32, at: Millis },
    /// A launch ticket from a superseded wave came due and was ignored.
    StaleLaunchSkipped { element: usize, generation: u32, at: Millis },
}

impl TimelineEvent {
    /// Scene time at which the event happened.
    pub const fn at(&self) -> Millis {
        match self {
            Self::ColorAdvanced { at, .. }
            | Self::WaveStarted { at, .. }
            | Self::BalloonLaunched { at, .. }
            | Self::StaleLaunchSkipped { at, .. } => *at,
        }
    }
}

impl fmt::Display for TimelineEvent {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::ColorAdvanced { index, at } => write!(f, "{at}ms color -> {index}"),
            Self::WaveStarted { generation, at } => write!(f, "{at}ms wave #{generation}"),
            Self::BalloonLaunched { element, generation, at } => {
                write!(f, "{at}ms balloon {element} up (#{generation})")
            }
            Self::StaleLaunchSkipped { element, generation, at } => {
                write!(f, "{at}ms balloon {element} stale (#{generation})")
            }
        }
    }
}

/// Events produced by one advance, in chronological order.
pub type TimelineEvents = Vec<TimelineEvent, EVENT_CAPACITY>;

#[inline]
pub(crate) fn record(
    events: &mut TimelineEvents,
    event: TimelineEvent,
) {
    events.push(event).ok();
}
