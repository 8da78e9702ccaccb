//! Profiling metrics with time-based measurements.
//!
//! Provides frame timing statistics and timeline event counters.
//! The `EventLog` type is in the common crate since it doesn't need time.

use std::fmt::Write;
use std::time::{Duration, Instant};

use greeting_common::TimelineEvent;
use heapless::String;

/// Frame timing and animation statistics for the diagnostics overlay.
pub struct ProfilingMetrics {
    // Frame timing (microseconds)
    pub frame_time_us: u32,
    pub render_time_us: u32,
    pub sleep_time_us: u32,

    // Statistics
    pub frame_time_min_us: u32,
    pub frame_time_max_us: u32,
    frame_time_avg_us: f32,

    // Counters
    pub total_frames: u64,
    pub color_advances: u32,
    pub waves_started: u32,
    pub balloons_launched: u32,
    pub stale_launches: u32,

    // Uptime tracking
    start_time: Instant,
}

impl ProfilingMetrics {
    const EMA_ALPHA: f32 = 0.1;

    pub fn new() -> Self {
        Self {
            frame_time_us: 0,
            render_time_us: 0,
            sleep_time_us: 0,
            frame_time_min_us: u32::MAX,
            frame_time_max_us: 0,
            frame_time_avg_us: 0.0,
            total_frames: 0,
            color_advances: 0,
            waves_started: 0,
            balloons_launched: 0,
            stale_launches: 0,
            start_time: Instant::now(),
        }
    }

    /// Record frame timing for this frame.
    pub fn record_frame(
        &mut self,
        total_time: Duration,
        render_time: Duration,
        sleep_time: Duration,
    ) {
        let total_us = total_time.as_micros() as u32;

        self.frame_time_us = total_us;
        self.render_time_us = render_time.as_micros() as u32;
        self.sleep_time_us = sleep_time.as_micros() as u32;

        self.frame_time_min_us = self.frame_time_min_us.min(total_us);
        self.frame_time_max_us = self.frame_time_max_us.max(total_us);

        if self.total_frames == 0 {
            self.frame_time_avg_us = total_us as f32;
        } else {
            self.frame_time_avg_us =
                Self::EMA_ALPHA.mul_add(total_us as f32, (1.0 - Self::EMA_ALPHA) * self.frame_time_avg_us);
        }

        self.total_frames += 1;
    }

    /// Count a timeline event.
    pub fn record_event(
        &mut self,
        event: &TimelineEvent,
    ) {
        let counter = match event {
            TimelineEvent::ColorAdvanced { .. } => &mut self.color_advances,
            TimelineEvent::WaveStarted { .. } => &mut self.waves_started,
            TimelineEvent::BalloonLaunched { .. } => &mut self.balloons_launched,
            TimelineEvent::StaleLaunchSkipped { .. } => &mut self.stale_launches,
        };
        *counter = counter.saturating_add(1);
    }

    /// Average frame time in microseconds.
    #[inline]
    pub const fn frame_time_avg_us(&self) -> u32 { self.frame_time_avg_us as u32 }

    #[inline]
    pub fn uptime(&self) -> Duration { self.start_time.elapsed() }

    /// Format uptime as HH:MM:SS.
    pub fn uptime_string(&self) -> String<12> { format_hms(self.uptime().as_secs()) }
}

impl Default for ProfilingMetrics {
    fn default() -> Self { Self::new() }
}

fn format_hms(secs: u64) -> String<12> {
    let mut s = String::new();
    let _ = write!(s, "{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60);
    s
}
