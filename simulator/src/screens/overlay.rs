//! Diagnostics overlay drawn over the greeting screen.

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};
use embedded_graphics_simulator::SimulatorDisplay;
use greeting_common::GreetingScene;
use greeting_common::colors::WHITE;
use greeting_common::profiling::EventLog;
use heapless::String;

use crate::config::SCREEN_WIDTH;
use crate::profiling::ProfilingMetrics;
use crate::styles::LABEL_FONT;

const PANEL_HEIGHT: u32 = 168;
const PANEL_Y: i32 = 0;
const LINE_HEIGHT: i32 = 11;
const COL1_X: i32 = 4;
const COL2_X: i32 = 124;
const STATS_Y: i32 = 4;
const STAT_ROWS: usize = 7;
const LOG_DIVIDER_Y: i32 = STATS_Y + LINE_HEIGHT * STAT_ROWS as i32 + 2;
const LOG_Y: i32 = LOG_DIVIDER_Y + 4;

const PANEL_BG: Rgb888 = Rgb888::new(0x10, 0x10, 0x14);
const VALUE_COLOR: Rgb888 = WHITE;
const HIGHLIGHT_COLOR: Rgb888 = Rgb888::new(0xFF, 0xEB, 0x3B);
const LOG_PROMPT_COLOR: Rgb888 = Rgb888::new(0x66, 0xBB, 0x6A);
const LOG_TEXT_COLOR: Rgb888 = Rgb888::new(0xFF, 0xA7, 0x26);
const DIVIDER_COLOR: Rgb888 = Rgb888::new(0x75, 0x75, 0x75);

pub fn draw_overlay(
    display: &mut SimulatorDisplay<Rgb888>,
    metrics: &ProfilingMetrics,
    log: &EventLog,
    scene: &GreetingScene,
    fps: f32,
) {
    Rectangle::new(Point::new(0, PANEL_Y), Size::new(SCREEN_WIDTH, PANEL_HEIGHT))
        .into_styled(PrimitiveStyle::with_fill(PANEL_BG))
        .draw(display)
        .ok();

    draw_column(display, &timing_lines(metrics, fps), COL1_X);
    draw_column(display, &scene_lines(metrics, scene), COL2_X);

    Line::new(Point::new(2, LOG_DIVIDER_Y), Point::new(SCREEN_WIDTH as i32 - 2, LOG_DIVIDER_Y))
        .into_styled(PrimitiveStyle::with_stroke(DIVIDER_COLOR, 1))
        .draw(display)
        .ok();

    draw_log_terminal(display, log);
}

fn draw_line(
    display: &mut SimulatorDisplay<Rgb888>,
    text: &str,
    x: i32,
    y: i32,
    color: Rgb888,
) {
    Text::with_baseline(text, Point::new(x, y), MonoTextStyle::new(LABEL_FONT, color), Baseline::Top)
        .draw(display)
        .ok();
}

type StatLine = String<20>;

fn stat_line(args: core::fmt::Arguments<'_>) -> StatLine {
    let mut s = StatLine::new();
    let _ = s.write_fmt(args);
    s
}

fn timing_lines(
    metrics: &ProfilingMetrics,
    fps: f32,
) -> [StatLine; STAT_ROWS] {
    let ms = |us: u32| us as f32 / 1000.0;
    let min_us = if metrics.total_frames == 0 { 0 } else { metrics.frame_time_min_us };
    [
        stat_line(format_args!("{fps:.0} FPS")),
        stat_line(format_args!("Frame: {:.1}ms", ms(metrics.frame_time_us))),
        stat_line(format_args!("Render:{:.1}ms", ms(metrics.render_time_us))),
        stat_line(format_args!("Sleep: {:.1}ms", ms(metrics.sleep_time_us))),
        stat_line(format_args!("Min/Max:{:.0}/{:.0}", ms(min_us), ms(metrics.frame_time_max_us))),
        stat_line(format_args!("Avg:   {:.1}ms", ms(metrics.frame_time_avg_us()))),
        stat_line(format_args!("UP {}", metrics.uptime_string())),
    ]
}

fn scene_lines(
    metrics: &ProfilingMetrics,
    scene: &GreetingScene,
) -> [StatLine; STAT_ROWS] {
    [
        stat_line(format_args!("t: {}ms", scene.now())),
        stat_line(format_args!("Color: {}", scene.background().color_index())),
        stat_line(format_args!("Wave:  #{}", scene.balloons().generation())),
        stat_line(format_args!("Steps: {}", metrics.color_advances)),
        stat_line(format_args!("Waves: {}", metrics.waves_started)),
        stat_line(format_args!("Up:    {}", metrics.balloons_launched)),
        stat_line(format_args!("Stale: {}", metrics.stale_launches)),
    ]
}

fn draw_column(
    display: &mut SimulatorDisplay<Rgb888>,
    lines: &[StatLine],
    x: i32,
) {
    let mut y = STATS_Y;
    for (i, line) in lines.iter().enumerate() {
        let color = if i == 0 { HIGHLIGHT_COLOR } else { VALUE_COLOR };
        draw_line(display, line, x, y, color);
        y += LINE_HEIGHT;
    }
}

fn draw_log_terminal(
    display: &mut SimulatorDisplay<Rgb888>,
    log: &EventLog,
) {
    let mut y = LOG_Y;

    for line in log.iter() {
        draw_line(display, ">", COL1_X, y, LOG_PROMPT_COLOR);
        draw_line(display, line, COL1_X + 10, y, LOG_TEXT_COLOR);
        y += LINE_HEIGHT;
    }

    draw_line(display, "> _", COL1_X, y, LOG_PROMPT_COLOR);
}

#[cfg(test)]
mod tests {
    use greeting_common::SceneConfig;
    use greeting_common::colors::BLACK;

    use std::time::Duration;

    use super::*;
    use crate::config::SCREEN_HEIGHT;

    #[test]
    fn test_log_fits_in_panel() {
        let last_line = LOG_Y + LINE_HEIGHT * greeting_common::profiling::LOG_BUFFER_SIZE as i32;
        assert!(last_line + LINE_HEIGHT <= PANEL_Y + PANEL_HEIGHT as i32);
    }

    #[test]
    fn test_timing_lines_show_frame_statistics() {
        let mut metrics = ProfilingMetrics::new();
        metrics.record_frame(Duration::from_millis(16), Duration::from_millis(4), Duration::from_millis(12));
        metrics.record_frame(Duration::from_millis(20), Duration::from_millis(9), Duration::from_millis(11));

        let lines = timing_lines(&metrics, 60.0);
        assert_eq!(lines[0].as_str(), "60 FPS");
        assert_eq!(lines[3].as_str(), "Sleep: 11.0ms");
        assert_eq!(lines[4].as_str(), "Min/Max:16/20");
        assert_eq!(lines[5].as_str(), "Avg:   16.4ms");
    }

    #[test]
    fn test_scene_lines_show_event_counters() {
        let mut scene = GreetingScene::new(&SceneConfig::default()).unwrap();
        let mut metrics = ProfilingMetrics::new();
        for event in scene.advance_to(6000) {
            metrics.record_event(&event);
        }

        let lines = scene_lines(&metrics, &scene);
        assert_eq!(lines[0].as_str(), "t: 6000ms");
        assert_eq!(lines[2].as_str(), "Wave:  #2");
        assert_eq!(lines[3].as_str(), "Steps: 6");
        assert_eq!(lines[4].as_str(), "Waves: 2");
        assert_eq!(lines[5].as_str(), "Up:    3");
    }

    #[test]
    fn test_overlay_only_covers_panel() {
        let mut display: SimulatorDisplay<Rgb888> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        display.clear(BLACK).ok();
        let scene = GreetingScene::new(&SceneConfig::default()).unwrap();
        let mut log = EventLog::new();
        log.push("0ms wave #1");

        draw_overlay(&mut display, &ProfilingMetrics::new(), &log, &scene, 60.0);

        assert_eq!(display.get_pixel(Point::new(0, 0)), PANEL_BG);
        assert_eq!(display.get_pixel(Point::new(0, SCREEN_HEIGHT as i32 - 1)), BLACK);
    }
}
