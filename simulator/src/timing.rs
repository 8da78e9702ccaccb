//! Frame pacing and the scene clock.
//!
//! These use `std::time` which is not available in `no_std` environments, so
//! they live here rather than in the common crate.

use std::thread;
use std::time::{Duration, Instant};

use greeting_common::Millis;

/// Target frame time (~60 FPS). The main loop sleeps if a frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(16);

/// Monotonic millisecond clock started when the greeting screen appears.
pub struct FrameClock {
    start: Instant,
}

impl FrameClock {
    pub fn start() -> Self { Self { start: Instant::now() } }

    /// Milliseconds since [`start`](Self::start).
    pub fn now_ms(&self) -> Millis { self.start.elapsed().as_millis() as Millis }
}

/// Sleep out the rest of the frame that began at `frame_start`.
///
/// Returns the time actually slept.
pub fn pace_frame(frame_start: Instant) -> Duration {
    let busy = frame_start.elapsed();
    if let Some(remaining) = FRAME_TIME.checked_sub(busy) {
        thread::sleep(remaining);
    }
    frame_start.elapsed().saturating_sub(busy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_is_monotonic() {
        let clock = FrameClock::start();
        let a = clock.now_ms();
        let b = clock.now_ms();
        assert!(b >= a);
    }

    #[test]
    fn test_pace_frame_fills_frame_time() {
        let frame_start = Instant::now();
        pace_frame(frame_start);
        assert!(frame_start.elapsed() >= FRAME_TIME);
    }
}
