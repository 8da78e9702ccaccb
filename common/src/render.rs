//! Render commands for a [`Frame`].
//!
//! The core does not know how to draw text or emoji. It describes each frame
//! as a short list of commands issued to a [`Surface`], which the host
//! implements on top of its graphics stack.
//!
//! # Draw Order
//!
//! 1. Background fill
//! 2. Balloons (element order)
//! 3. Confetti (element order)
//! 4. Greeting line
//! 5. From line
//!
//! # Coordinates
//!
//! All positions are dp relative to the viewport center, positive x to the
//! right and positive y down. Sizes are sp.

use embedded_graphics::pixelcolor::Rgb888;

use crate::colors::TEXT_COLOR;
use crate::elements::Placement;
use crate::scene::Frame;
use crate::strings::GreetingStrings;

// =============================================================================
// Text Layout
// =============================================================================

pub const GREETING_FONT_SIZE: f32 = 60.0;
pub const GREETING_LINE_HEIGHT: f32 = 75.0;
pub const GREETING_BOTTOM_PADDING: f32 = 8.0;
pub const FROM_FONT_SIZE: f32 = 35.0;
pub const FROM_BOTTOM_PADDING: f32 = 24.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontWeight {
    Normal,
    SemiBold,
}

/// Placement of the two text lines, stacked as a column centered in the
/// viewport.
///
/// ```text
/// +----------------------+  <- top = -height / 2
/// |   Happy Birthday!    |  greeting line (line height 75)
/// |                      |  8 dp
/// |       from Sam       |  from line (35)
/// |                      |  24 dp
/// +----------------------+  <- top + height
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextLayout {
    pub greeting_size: f32,
    pub greeting_line_height: f32,
    pub greeting_bottom_padding: f32,
    pub from_size: f32,
    pub from_bottom_padding: f32,
    pub color: Rgb888,
}

impl TextLayout {
    /// Total height of the text column.
    pub fn column_height(&self) -> f32 {
        self.greeting_line_height + self.greeting_bottom_padding + self.from_size + self.from_bottom_padding
    }

    /// Vertical center of the greeting line.
    pub fn greeting_y(&self) -> f32 { -self.column_height() / 2.0 + self.greeting_line_height / 2.0 }

    /// Vertical center of the from line.
    pub fn from_y(&self) -> f32 {
        -self.column_height() / 2.0 + self.greeting_line_height + self.greeting_bottom_padding + self.from_size / 2.0
    }
}

impl Default for TextLayout {
    fn default() -> Self {
        Self {
            greeting_size: GREETING_FONT_SIZE,
            greeting_line_height: GREETING_LINE_HEIGHT,
            greeting_bottom_padding: GREETING_BOTTOM_PADDING,
            from_size: FROM_FONT_SIZE,
            from_bottom_padding: FROM_BOTTOM_PADDING,
            color: TEXT_COLOR,
        }
    }
}

// =============================================================================
// Surface
// =============================================================================

/// One run of text (or a single emoji) to draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphCommand<'a> {
    pub text: &'a str,
    /// Center of the glyph run, dp from the viewport center.
    pub x: f32,
    pub y: f32,
    /// Font size in sp, before `scale`.
    pub size: f32,
    pub line_height: f32,
    pub opacity: f32,
    pub scale: f32,
    pub color: Rgb888,
    pub weight: FontWeight,
}

impl<'a> GlyphCommand<'a> {
    /// Command for a balloon or confetti element.
    pub fn floating(placement: &Placement<'a>) -> Self {
        Self {
            text: placement.element.glyph.as_str(),
            x: placement.x,
            y: placement.y,
            size: placement.size,
            line_height: placement.size,
            opacity: placement.opacity,
            scale: 1.0,
            color: TEXT_COLOR,
            weight: FontWeight::Normal,
        }
    }
}

/// A drawing backend.
pub trait Surface {
    type Error;

    /// Fill the whole viewport.
    fn fill(
        &mut self,
        color: Rgb888,
    ) -> Result<(), Self::Error>;

    fn draw_glyph(
        &mut self,
        glyph: &GlyphCommand<'_>,
    ) -> Result<(), Self::Error>;
}

/// Issue the draw commands for `frame`.
pub fn render_frame<S>(
    surface: &mut S,
    frame: &Frame<'_>,
    strings: &GreetingStrings<'_>,
    layout: &TextLayout,
) -> Result<(), S::Error>
where
    S: Surface + ?Sized,
{
    surface.fill(frame.background)?;

    for placement in frame.balloons.iter().chain(frame.confetti.iter()) {
        surface.draw_glyph(&GlyphCommand::floating(placement))?;
    }

    surface.draw_glyph(&GlyphCommand {
        text: strings.greeting,
        x: 0.0,
        y: layout.greeting_y(),
        size: layout.greeting_size,
        line_height: layout.greeting_line_height,
        opacity: 1.0,
        scale: frame.greeting_scale,
        color: layout.color,
        weight: FontWeight::SemiBold,
    })?;

    surface.draw_glyph(&GlyphCommand {
        text: strings.from,
        x: 0.0,
        y: layout.from_y(),
        size: layout.from_size,
        line_height: layout.from_size,
        opacity: frame.subtitle_opacity,
        scale: 1.0,
        color: layout.color,
        weight: FontWeight::Normal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SceneConfig;
    use crate::scene::GreetingScene;

    #[derive(Debug, PartialEq)]
    enum Command {
        Fill(Rgb888),
        Glyph { text: String, y: f32, opacity: f32, scale: f32 },
    }

    #[derive(Default)]
    struct Recorder {
        commands: Vec<Command>,
    }

    impl Surface for Recorder {
        type Error = ();

        fn fill(
            &mut self,
            color: Rgb888,
        ) -> Result<(), Self::Error> {
            self.commands.push(Command::Fill(color));
            Ok(())
        }

        fn draw_glyph(
            &mut self,
            glyph: &GlyphCommand<'_>,
        ) -> Result<(), Self::Error> {
            self.commands.push(Command::Glyph {
                text: glyph.text.to_string(),
                y: glyph.y,
                opacity: glyph.opacity,
                scale: glyph.scale,
            });
            Ok(())
        }
    }

    struct Failing;

    impl Surface for Failing {
        type Error = &'static str;

        fn fill(
            &mut self,
            _color: Rgb888,
        ) -> Result<(), Self::Error> {
            Err("no display")
        }

        fn draw_glyph(
            &mut self,
            _glyph: &GlyphCommand<'_>,
        ) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    const STRINGS: GreetingStrings<'static> = GreetingStrings {
        greeting: "Happy Birthday!",
        from: "from Sam",
    };

    #[test]
    fn test_layout_centers_column() {
        let layout = TextLayout::default();
        assert_eq!(layout.column_height(), 142.0);
        assert_eq!(layout.greeting_y(), -33.5);
        assert_eq!(layout.from_y(), 29.5);
    }

    #[test]
    fn test_render_order() {
        let mut scene = GreetingScene::new(&SceneConfig::default()).unwrap();
        scene.advance_to(2500);
        let frame = scene.frame();
        let mut surface = Recorder::default();

        render_frame(&mut surface, &frame, &STRINGS, &TextLayout::default()).unwrap();

        let commands = &surface.commands;
        assert_eq!(commands.len(), 1 + 3 + 11 + 2);
        assert_eq!(commands[0], Command::Fill(frame.background));
        assert!(matches!(&commands[1], Command::Glyph { text, .. } if text == "\u{1F388}"));
        assert!(matches!(&commands[4], Command::Glyph { text, .. } if text == "\u{1F389}"));
        assert!(matches!(
            &commands[15],
            Command::Glyph { text, scale, .. } if text == "Happy Birthday!" && *scale == frame.greeting_scale
        ));
        assert!(matches!(
            &commands[16],
            Command::Glyph { text, opacity, .. } if text == "from Sam" && *opacity == frame.subtitle_opacity
        ));
    }

    #[test]
    fn test_render_stops_on_error() {
        let scene = GreetingScene::new(&SceneConfig::default()).unwrap();
        assert_eq!(
            render_frame(&mut Failing, &scene.frame(), &STRINGS, &TextLayout::default()),
            Err("no display")
        );
    }
}
