//! Bitmap Text Rasterizer
//!
//! Turns text into square "pixels" using a 3x5 bitmap font, so backends
//! without a font engine (plain SDL2 without TTF) can still draw the HUD
//! and the game-over banner. Lowercase letters use the uppercase glyphs.

use crate::render::TextAlign;

pub const GLYPH_WIDTH: i32 = 3;
pub const GLYPH_HEIGHT: i32 = 5;
/// Glyph width plus one column of spacing.
pub const ADVANCE: i32 = GLYPH_WIDTH + 1;

/// One filled square of a rasterized glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub size: u32,
}

/// Rows of a glyph, top to bottom; bit 2 is the leftmost column.
pub fn glyph(c: char) -> [u8; 5] {
    match c.to_ascii_uppercase() {
        'A' => [0b010, 0b101, 0b111, 0b101, 0b101],
        'B' => [0b110, 0b101, 0b110, 0b101, 0b110],
        'C' => [0b011, 0b100, 0b100, 0b100, 0b011],
        'D' => [0b110, 0b101, 0b101, 0b101, 0b110],
        'E' => [0b111, 0b100, 0b110, 0b100, 0b111],
        'F' => [0b111, 0b100, 0b110, 0b100, 0b100],
        'G' => [0b011, 0b100, 0b101, 0b101, 0b011],
        'H' => [0b101, 0b101, 0b111, 0b101, 0b101],
        'I' => [0b111, 0b010, 0b010, 0b010, 0b111],
        'J' => [0b001, 0b001, 0b001, 0b101, 0b010],
        'K' => [0b101, 0b101, 0b110, 0b101, 0b101],
        'L' => [0b100, 0b100, 0b100, 0b100, 0b111],
        'M' => [0b101, 0b111, 0b111, 0b101, 0b101],
        'N' => [0b110, 0b101, 0b101, 0b101, 0b101],
        'O' => [0b010, 0b101, 0b101, 0b101, 0b010],
        'P' => [0b110, 0b101, 0b110, 0b100, 0b100],
        'Q' => [0b010, 0b101, 0b101, 0b110, 0b011],
        'R' => [0b110, 0b101, 0b110, 0b101, 0b101],
        'S' => [0b011, 0b100, 0b010, 0b001, 0b110],
        'T' => [0b111, 0b010, 0b010, 0b010, 0b010],
        'U' => [0b101, 0b101, 0b101, 0b101, 0b111],
        'V' => [0b101, 0b101, 0b101, 0b101, 0b010],
        'W' => [0b101, 0b101, 0b111, 0b111, 0b101],
        'X' => [0b101, 0b101, 0b010, 0b101, 0b101],
        'Y' => [0b101, 0b101, 0b010, 0b010, 0b010],
        'Z' => [0b111, 0b001, 0b010, 0b100, 0b111],
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b110, 0b001, 0b010, 0b100, 0b111],
        '3' => [0b110, 0b001, 0b010, 0b001, 0b110],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b110, 0b001, 0b110],
        '6' => [0b011, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b010, 0b010, 0b010],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b110],
        ':' => [0b000, 0b010, 0b000, 0b010, 0b000],
        '-' => [0b000, 0b000, 0b111, 0b000, 0b000],
        ',' => [0b000, 0b000, 0b000, 0b010, 0b100],
        '.' => [0b000, 0b000, 0b000, 0b000, 0b010],
        '!' => [0b010, 0b010, 0b010, 0b000, 0b010],
        ' ' => [0; 5],
        _ => [0b110, 0b001, 0b010, 0b000, 0b010], // '?'
    }
}

/// Pixel scale for a nominal font size (16px text is drawn at 2x).
pub fn scale_for(size: f32) -> i32 {
    ((size / 8.0).round() as i32).max(1)
}

pub fn text_width(text: &str, scale: i32) -> i32 {
    text.chars().count() as i32 * ADVANCE * scale
}

/// Rasterizes `text` with its top-left corner at (`x`, `top`).
pub fn rasterize(text: &str, x: i32, top: i32, scale: i32) -> Vec<PixelRect> {
    let mut pixels = Vec::new();

    for (i, c) in text.chars().enumerate() {
        let char_x = x + i as i32 * ADVANCE * scale;
        for (row, bits) in glyph(c).iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if bits & (0b100 >> col) != 0 {
                    pixels.push(PixelRect {
                        x: char_x + col * scale,
                        y: top + row as i32 * scale,
                        size: scale as u32,
                    });
                }
            }
        }
    }

    pixels
}

/// Rasterizes a `DrawCommand::Text`: `y` is the baseline, `x` the left
/// edge or the center depending on `align`.
pub fn rasterize_text(text: &str, x: f32, y: f32, size: f32, align: TextAlign) -> Vec<PixelRect> {
    let scale = scale_for(size);
    let left = match align {
        TextAlign::Left => x.round() as i32,
        TextAlign::Center => x.round() as i32 - text_width(text, scale) / 2,
    };
    let top = y.round() as i32 - GLYPH_HEIGHT * scale;
    rasterize(text, left, top, scale)
}
