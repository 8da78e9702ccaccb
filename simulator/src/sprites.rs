//! Primitive-shape stand-ins for emoji glyphs.
//!
//! The bitmap fonts only cover ASCII, so balloons and confetti are drawn as
//! small shapes tinted after the emoji they replace.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Ellipse, Line, PrimitiveStyle, Rectangle, Triangle};
use greeting_common::animations::Interpolate;

/// Outline drawn for a glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    /// Ellipse with a knot and a string.
    Balloon,
    Disc,
    Ring,
    Wedge,
    Block,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sprite {
    pub shape: Shape,
    pub color: Rgb888,
}

impl Sprite {
    const fn new(
        shape: Shape,
        color: Rgb888,
    ) -> Self {
        Self { shape, color }
    }
}

const BALLOON_RED: Rgb888 = Rgb888::new(0xE5, 0x39, 0x35);
const STRING_GRAY: Rgb888 = Rgb888::new(0x75, 0x75, 0x75);

/// Whether `text` starts with a pictograph the fonts cannot draw.
pub fn is_pictograph(text: &str) -> bool { text.chars().next().is_some_and(|c| u32::from(c) >= 0x1F000) }

/// Sprite standing in for `glyph`.
pub fn sprite_for(glyph: &str) -> Sprite {
    match glyph.chars().next() {
        Some('\u{1F388}') => Sprite::new(Shape::Balloon, BALLOON_RED),
        Some('\u{1F389}' | '\u{1F38A}') => Sprite::new(Shape::Wedge, Rgb888::new(0xFF, 0xB3, 0x00)),
        Some('\u{1F973}' | '\u{1F607}') => Sprite::new(Shape::Disc, Rgb888::new(0xFF, 0xCA, 0x28)),
        Some('\u{1F370}' | '\u{1F9C1}') => Sprite::new(Shape::Wedge, Rgb888::new(0xF4, 0x8F, 0xB1)),
        Some('\u{1F369}') => Sprite::new(Shape::Ring, Rgb888::new(0xD8, 0x1B, 0x60)),
        Some('\u{1F451}') => Sprite::new(Shape::Wedge, Rgb888::new(0xFF, 0xD5, 0x4F)),
        Some('\u{1F9F8}' | '\u{1F36A}') => Sprite::new(Shape::Disc, Rgb888::new(0xA1, 0x88, 0x7F)),
        Some('\u{1F36B}') => Sprite::new(Shape::Block, Rgb888::new(0x6D, 0x4C, 0x41)),
        _ => Sprite::new(Shape::Disc, Rgb888::new(0x9E, 0x9E, 0x9E)),
    }
}

/// Draw `sprite` centered on `center`, `size` pixels tall.
///
/// Opacity is approximated by blending the sprite color into `background`.
pub fn draw_sprite<D>(
    display: &mut D,
    sprite: Sprite,
    center: Point,
    size: u32,
    background: Rgb888,
    opacity: f32,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    let size = size.max(2);
    let color = background.lerp(sprite.color, opacity);
    let fill = PrimitiveStyle::with_fill(color);

    match sprite.shape {
        Shape::Balloon => {
            let body = Size::new(size * 3 / 4, size * 5 / 6);
            let body_center = center - Point::new(0, (size / 8) as i32);
            Ellipse::with_center(body_center, body).into_styled(fill).draw(display)?;

            let knot_top = body_center + Point::new(0, (body.height / 2) as i32);
            let knot = (size / 10).max(1) as i32;
            Triangle::new(
                knot_top,
                knot_top + Point::new(-knot, knot),
                knot_top + Point::new(knot, knot),
            )
            .into_styled(fill)
            .draw(display)?;

            let string = PrimitiveStyle::with_stroke(background.lerp(STRING_GRAY, opacity), 1);
            Line::new(knot_top + Point::new(0, knot), center + Point::new(0, (size / 2) as i32))
                .into_styled(string)
                .draw(display)
        }
        Shape::Disc => Circle::with_center(center, size * 2 / 3).into_styled(fill).draw(display),
        Shape::Ring => Circle::with_center(center, size * 2 / 3)
            .into_styled(PrimitiveStyle::with_stroke(color, (size / 6).max(1)))
            .draw(display),
        Shape::Wedge => {
            let half = (size / 3) as i32;
            Triangle::new(
                center + Point::new(0, -half),
                center + Point::new(-half, half),
                center + Point::new(half, half),
            )
            .into_styled(fill)
            .draw(display)
        }
        Shape::Block => Rectangle::with_center(center, Size::new(size / 2, size * 2 / 3))
            .into_styled(fill)
            .draw(display),
    }
}
