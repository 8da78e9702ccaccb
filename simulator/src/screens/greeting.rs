//! Interactive greeting screen loop.

use std::time::{Duration, Instant};

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics_simulator::{SimulatorDisplay, SimulatorEvent, Window};
use greeting_common::profiling::EventLog;
use greeting_common::{GreetingScene, GreetingStrings, TextLayout, render_frame};
use tracing::{info, trace};

use super::overlay::draw_overlay;
use super::report_event;
use crate::profiling::ProfilingMetrics;
use crate::surface::DisplaySurface;
use crate::timing::{FrameClock, pace_frame};

/// Switches for [`run_greeting_screen`].
#[derive(Clone, Copy, Debug, Default)]
pub struct GreetingOptions {
    /// Draw the diagnostics overlay.
    pub overlay: bool,
    /// Quit after this much scene time.
    pub duration: Option<Duration>,
}

/// Run the greeting animation until the window closes or the duration
/// elapses.
///
/// Returns `false` if the user closed the window.
pub fn run_greeting_screen(
    display: &mut SimulatorDisplay<Rgb888>,
    window: &mut Window,
    scene: &mut GreetingScene,
    strings: &GreetingStrings<'_>,
    options: GreetingOptions,
) -> bool {
    let clock = FrameClock::start();
    let layout = TextLayout::default();
    let limit_ms = options.duration.map(|d| d.as_millis() as u64);

    let mut metrics = ProfilingMetrics::new();
    let mut log = EventLog::new();
    let mut last_fps_calc = Instant::now();
    let mut fps_frame_count = 0u32;
    let mut current_fps = 0.0f32;

    loop {
        let frame_start = Instant::now();

        for ev in window.events() {
            if matches!(ev, SimulatorEvent::Quit) {
                info!(frames = metrics.total_frames, "window closed");
                return false;
            }
        }

        for event in scene.advance_to(clock.now_ms()) {
            report_event(&event);
            metrics.record_event(&event);
            log.record(&event);
        }

        render_frame(&mut DisplaySurface::new(display), &scene.frame(), strings, &layout).ok();
        if options.overlay {
            draw_overlay(display, &metrics, &log, scene, current_fps);
        }
        let render_time = frame_start.elapsed();

        window.update(display);

        fps_frame_count += 1;
        let since_fps = last_fps_calc.elapsed();
        if since_fps >= Duration::from_secs(1) {
            current_fps = fps_frame_count as f32 / since_fps.as_secs_f32();
            fps_frame_count = 0;
            last_fps_calc = Instant::now();
        }

        if limit_ms.is_some_and(|limit| scene.now() >= limit) {
            info!(scene_ms = scene.now(), frames = metrics.total_frames, "duration reached");
            return true;
        }

        let sleep_time = pace_frame(frame_start);
        metrics.record_frame(frame_start.elapsed(), render_time, sleep_time);
        trace!(
            frame_us = metrics.frame_time_us,
            render_us = metrics.render_time_us,
            "frame"
        );
    }
}
