//! SDL2 render surface and key mapping for the desktop host.
//!
//! Replays [`DrawCommand`]s onto an SDL2 canvas. SDL2 has no circle or text
//! primitives, so circles are filled one scanline at a time and text goes
//! through the bitmap rasterizer in [`crate::text`].

use sdl2::keyboard::Keycode;
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Canvas};
use sdl2::video::Window;

use crate::error::{GameError, Result};
use crate::input_system::Key;
use crate::render::{Color, DrawCommand, RenderSurface};
use crate::text::rasterize_text;

/// Maps an SDL keycode to a game key. Keys the game ignores map to `None`.
pub fn key_from_keycode(keycode: Keycode) -> Option<Key> {
    match keycode {
        Keycode::Left => Some(Key::ArrowLeft),
        Keycode::Right => Some(Key::ArrowRight),
        Keycode::Up => Some(Key::ArrowUp),
        Keycode::A => Some(Key::KeyA),
        Keycode::D => Some(Key::KeyD),
        Keycode::W => Some(Key::KeyW),
        Keycode::Space => Some(Key::Space),
        _ => None,
    }
}

fn sdl_err(e: String) -> GameError {
    GameError::Surface(e)
}

pub struct SdlSurface {
    canvas: Canvas<Window>,
}

impl SdlSurface {
    pub fn new(canvas: Canvas<Window>) -> Self {
        SdlSurface { canvas }
    }

    /// Sets the draw color, blending only when the color is translucent.
    fn set_color(&mut self, color: Color) {
        let blend = if color.a < 255 {
            BlendMode::Blend
        } else {
            BlendMode::None
        };
        self.canvas.set_blend_mode(blend);
        self.canvas
            .set_draw_color(sdl2::pixels::Color::RGBA(color.r, color.g, color.b, color.a));
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color) -> Result<()> {
        let rows = circle_rows(cx, cy, radius);
        if rows.is_empty() {
            return Ok(());
        }
        self.set_color(color);
        self.canvas.fill_rects(&rows).map_err(sdl_err)
    }
}

/// One-pixel-high spans covering a filled circle. Empty unless the radius
/// is positive.
fn circle_rows(cx: f32, cy: f32, radius: f32) -> Vec<Rect> {
    if radius <= 0.0 {
        return Vec::new();
    }
    let r = radius.round() as i32;
    let (cx, cy) = (cx.round() as i32, cy.round() as i32);

    let mut rows = Vec::with_capacity((2 * r + 1) as usize);
    for dy in -r..=r {
        let half = ((r * r - dy * dy) as f32).sqrt() as i32;
        rows.push(Rect::new(cx - half, cy + dy, (2 * half + 1) as u32, 1));
    }
    rows
}

impl RenderSurface for SdlSurface {
    fn size(&self) -> (u32, u32) {
        self.canvas.output_size().unwrap_or((0, 0))
    }

    fn draw(&mut self, command: &DrawCommand) -> Result<()> {
        match command {
            DrawCommand::Clear(color) => {
                self.set_color(*color);
                self.canvas.clear();
                Ok(())
            }
            DrawCommand::FillRect { x, y, w, h, color } => {
                if *w <= 0.0 || *h <= 0.0 {
                    return Ok(());
                }
                self.set_color(*color);
                let rect = Rect::new(
                    x.round() as i32,
                    y.round() as i32,
                    w.round() as u32,
                    h.round() as u32,
                );
                self.canvas.fill_rect(rect).map_err(sdl_err)
            }
            DrawCommand::FillCircle {
                x,
                y,
                radius,
                color,
            } => self.fill_circle(*x, *y, *radius, *color),
            DrawCommand::Line { x1, y1, x2, y2, color } => {
                self.set_color(*color);
                self.canvas
                    .draw_line(
                        (x1.round() as i32, y1.round() as i32),
                        (x2.round() as i32, y2.round() as i32),
                    )
                    .map_err(sdl_err)
            }
            DrawCommand::Text {
                text,
                x,
                y,
                size,
                align,
                color,
            } => {
                self.set_color(*color);
                let rects: Vec<Rect> = rasterize_text(text, *x, *y, *size, *align)
                    .into_iter()
                    .map(|p| Rect::new(p.x, p.y, p.size, p.size))
                    .collect();
                if rects.is_empty() {
                    return Ok(());
                }
                self.canvas.fill_rects(&rects).map_err(sdl_err)
            }
        }
    }

    fn present(&mut self) -> Result<()> {
        self.canvas.present();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wasd_and_arrows_map_to_same_actions() {
        use crate::input_system::InputSnapshot;

        let arrows: Vec<Key> = [Keycode::Left, Keycode::Up]
            .into_iter()
            .filter_map(key_from_keycode)
            .collect();
        let wasd: Vec<Key> = [Keycode::A, Keycode::W]
            .into_iter()
            .filter_map(key_from_keycode)
            .collect();
        assert_eq!(InputSnapshot::from_keys(&arrows), InputSnapshot::from_keys(&wasd));
    }

    #[test]
    fn test_circle_rows_skip_non_positive_radius() {
        assert!(circle_rows(100.0, 100.0, 0.0).is_empty());
        assert!(circle_rows(100.0, 100.0, -1.0).is_empty());
        assert!(circle_rows(100.0, 100.0, -25.0).is_empty());
    }

    #[test]
    fn test_circle_rows_span_the_diameter() {
        let rows = circle_rows(100.0, 50.0, 4.0);
        assert_eq!(rows.len(), 9);
        assert_eq!(rows[0].y(), 46);
        assert_eq!(rows[8].y(), 54);
        // Widest row passes through the center
        assert_eq!(rows[4], Rect::new(96, 50, 9, 1));
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(key_from_keycode(Keycode::Q), None);
        assert_eq!(key_from_keycode(Keycode::Return), None);
    }
}
