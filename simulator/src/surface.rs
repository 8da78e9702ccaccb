//! `embedded-graphics` backend for the greeting render commands.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use greeting_common::animations::Interpolate;
use greeting_common::render::FontWeight;
use greeting_common::{GlyphCommand, Surface};

use crate::config::{PX_PER_DP, text_column_width_px, to_screen};
use crate::sprites::{draw_sprite, is_pictograph, sprite_for};
use crate::styles::{CENTERED, font_for_height};

/// Draws greeting frames onto any RGB888 draw target.
///
/// Text and sprites have no alpha channel, so opacity is applied by blending
/// towards the most recent background fill.
pub struct DisplaySurface<'d, D> {
    display: &'d mut D,
    background: Rgb888,
}

impl<'d, D> DisplaySurface<'d, D>
where
    D: DrawTarget<Color = Rgb888>,
{
    pub fn new(display: &'d mut D) -> Self {
        Self {
            display,
            background: Rgb888::WHITE,
        }
    }

    fn draw_text(
        &mut self,
        glyph: &GlyphCommand<'_>,
        center: Point,
        height_px: f32,
    ) -> Result<(), D::Error> {
        let font = font_for_height(height_px);
        let color = self.background.lerp(glyph.color, glyph.opacity);
        let style = MonoTextStyle::new(font, color);

        let max_chars = (text_column_width_px() / font.character_size.width.max(1)) as usize;
        let lines = wrap_lines(glyph.text, max_chars);
        let line_height = (glyph.line_height * glyph.scale * PX_PER_DP)
            .round()
            .max(font.character_size.height as f32) as i32;
        let first_y = center.y - line_height * (lines.len() as i32 - 1) / 2;

        for (i, line) in lines.iter().enumerate() {
            let position = Point::new(center.x, first_y + line_height * i as i32);
            Text::with_text_style(line, position, style, CENTERED).draw(self.display)?;
            if glyph.weight == FontWeight::SemiBold {
                Text::with_text_style(line, position + Point::new(1, 0), style, CENTERED).draw(self.display)?;
            }
        }
        Ok(())
    }
}

impl<D> Surface for DisplaySurface<'_, D>
where
    D: DrawTarget<Color = Rgb888>,
{
    type Error = D::Error;

    fn fill(
        &mut self,
        color: Rgb888,
    ) -> Result<(), Self::Error> {
        self.background = color;
        self.display.clear(color)
    }

    fn draw_glyph(
        &mut self,
        glyph: &GlyphCommand<'_>,
    ) -> Result<(), Self::Error> {
        let center = to_screen(glyph.x, glyph.y);
        let height_px = glyph.size * glyph.scale * PX_PER_DP;

        if is_pictograph(glyph.text) {
            draw_sprite(
                self.display,
                sprite_for(glyph.text),
                center,
                height_px.round() as u32,
                self.background,
                glyph.opacity,
            )
        } else {
            self.draw_text(glyph, center, height_px)
        }
    }
}

/// Greedy word wrap to at most `max_chars` characters per line.
///
/// Words longer than a line are kept whole on a line of their own.
pub fn wrap_lines(
    text: &str,
    max_chars: usize,
) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_chars = 0;

    for word in text.split_whitespace() {
        let word_chars = word.chars().count();
        if line_chars > 0 && line_chars + 1 + word_chars > max_chars {
            lines.push(std::mem::take(&mut line));
            line_chars = 0;
        }
        if line_chars > 0 {
            line.push(' ');
            line_chars += 1;
        }
        line.push_str(word);
        line_chars += word_chars;
    }

    if line_chars > 0 || lines.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use embedded_graphics_simulator::SimulatorDisplay;
    use greeting_common::render::TextLayout;
    use greeting_common::{GreetingScene, GreetingStrings, SceneConfig, render_frame};

    use super::*;
    use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

    fn display() -> SimulatorDisplay<Rgb888> { SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT)) }

    fn changed_pixels(
        display: &SimulatorDisplay<Rgb888>,
        background: Rgb888,
    ) -> usize {
        let mut count = 0;
        for y in 0..SCREEN_HEIGHT as i32 {
            for x in 0..SCREEN_WIDTH as i32 {
                if display.get_pixel(Point::new(x, y)) != background {
                    count += 1;
                }
            }
        }
        count
    }

    fn text(
        text: &str,
        opacity: f32,
    ) -> GlyphCommand<'_> {
        GlyphCommand {
            text,
            x: 0.0,
            y: 0.0,
            size: 35.0,
            line_height: 35.0,
            opacity,
            scale: 1.0,
            color: Rgb888::BLACK,
            weight: FontWeight::Normal,
        }
    }

    #[test]
    fn test_wrap_lines() {
        assert_eq!(wrap_lines("Happy Birthday!", 40), vec!["Happy Birthday!"]);
        assert_eq!(wrap_lines("Happy Birthday!", 10), vec!["Happy", "Birthday!"]);
        assert_eq!(wrap_lines("Wszystkiego najlepszego!", 5), vec!["Wszystkiego", "najlepszego!"]);
        assert_eq!(wrap_lines("", 10), vec![""]);
    }

    #[test]
    fn test_fill_covers_display() {
        let mut display = display();
        let color = Rgb888::new(0xE6, 0xE6, 0xFA);
        DisplaySurface::new(&mut display).fill(color).ok();
        assert_eq!(changed_pixels(&display, color), 0);
    }

    #[test]
    fn test_transparent_text_draws_nothing() {
        let mut display = display();
        let background = Rgb888::new(0xC8, 0xE6, 0xC9);
        let mut surface = DisplaySurface::new(&mut display);
        surface.fill(background).ok();
        surface.draw_glyph(&text("from your friends", 0.0)).ok();
        assert_eq!(changed_pixels(&display, background), 0);
    }

    #[test]
    fn test_opaque_text_draws_pixels() {
        let mut display = display();
        let background = Rgb888::new(0xC8, 0xE6, 0xC9);
        let mut surface = DisplaySurface::new(&mut display);
        surface.fill(background).ok();
        surface.draw_glyph(&text("from your friends", 1.0)).ok();
        assert!(changed_pixels(&display, background) > 0);
    }

    #[test]
    fn test_text_is_centered_on_anchor() {
        let mut display = display();
        let background = Rgb888::WHITE;
        let mut surface = DisplaySurface::new(&mut display);
        surface.fill(background).ok();
        surface.draw_glyph(&text("from your friends", 1.0)).ok();

        let center_x = SCREEN_WIDTH as i32 / 2;
        let inked = |range: core::ops::Range<i32>| {
            range.into_iter().any(|x| {
                (0..SCREEN_HEIGHT as i32).any(|y| display.get_pixel(Point::new(x, y)) != background)
            })
        };
        assert!(inked(0..center_x - 20), "Text should extend left of the anchor");
        assert!(inked(center_x + 20..SCREEN_WIDTH as i32), "Text should extend right of the anchor");
    }

    #[test]
    fn test_render_frame_leaves_corners_background() {
        let mut scene = GreetingScene::new(&SceneConfig::default()).unwrap();
        scene.advance_to(0);
        let frame = scene.frame();
        let strings = GreetingStrings {
            greeting: "Happy Birthday!",
            from: "from your friends",
        };

        let mut display = display();
        render_frame(&mut DisplaySurface::new(&mut display), &frame, &strings, &TextLayout::default()).ok();

        assert_eq!(display.get_pixel(Point::new(0, 0)), frame.background);
        assert_eq!(
            display.get_pixel(Point::new(SCREEN_WIDTH as i32 - 1, SCREEN_HEIGHT as i32 - 1)),
            frame.background
        );
        assert!(changed_pixels(&display, frame.background) > 0, "Greeting text should be visible");
    }
}
