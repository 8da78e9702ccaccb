//! Headless rendering of a single frame to a PNG file.

use std::path::Path;

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay};
use greeting_common::{GreetingScene, GreetingStrings, Millis, TextLayout, render_frame};
use tracing::info;

use super::report_event;
use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::error::{Result, SimulatorError};
use crate::surface::DisplaySurface;

/// Render the frame at `at_ms` into a display buffer.
pub fn render_at(
    scene: &mut GreetingScene,
    strings: &GreetingStrings<'_>,
    at_ms: Millis,
) -> SimulatorDisplay<Rgb888> {
    for event in scene.advance_to(at_ms) {
        report_event(&event);
    }

    let mut display = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    render_frame(
        &mut DisplaySurface::new(&mut display),
        &scene.frame(),
        strings,
        &TextLayout::default(),
    )
    .ok();
    display
}

/// Render the frame at `at_ms` and write it to `path` as PNG.
pub fn save_snapshot(
    scene: &mut GreetingScene,
    strings: &GreetingStrings<'_>,
    at_ms: Millis,
    path: &Path,
    scale: u32,
) -> Result<()> {
    let display = render_at(scene, strings, at_ms);
    let settings = OutputSettingsBuilder::new().scale(scale.max(1)).build();
    display
        .to_rgb_output_image(&settings)
        .save_png(path)
        .map_err(|e| SimulatorError::Snapshot(e.to_string()))?;
    info!(path = %path.display(), at_ms, "snapshot written");
    Ok(())
}
