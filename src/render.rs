/// Draw commands and render surfaces
///
/// The game loop never touches a real canvas. Each tick produces an ordered
/// list of [`DrawCommand`]s, and the host replays that list onto whatever
/// [`RenderSurface`] it owns (an SDL2 window, or a [`RecordingSurface`] in
/// tests and headless runs).
///
/// # Frame layout
///
/// Commands are issued back to front:
///
/// 1. Clear + background grid
/// 2. Ground strip
/// 3. Player, enemy, uncollected coins
/// 4. HUD (score, control hint)
/// 5. Game-over overlay, only on the frame that ends the session
///
/// Building the list only reads simulation state. Nothing here mutates it.
use crate::coin::Coin;
use crate::config::GameConfig;
use crate::enemy::EnemyState;
use crate::error::Result;
use crate::player::PlayerState;

/// An RGBA8 color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }

    /// `0xRRGGBB`, fully opaque.
    pub const fn from_hex(hex: u32) -> Self {
        Color::rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Color { a, ..self }
    }
}

// Palette
pub const BACKGROUND: Color = Color::from_hex(0x0a0a0a);
pub const GRID: Color = Color::from_hex(0x00f0ff).with_alpha(26);
pub const GROUND: Color = Color::from_hex(0x00ff88);
pub const PLAYER: Color = Color::from_hex(0x00f0ff);
pub const ENEMY: Color = Color::from_hex(0xff00aa);
pub const COIN: Color = Color::from_hex(0xfbbf24);
pub const HIGHLIGHT: Color = Color::from_hex(0xffffff);
pub const HUD_TEXT: Color = Color::from_hex(0x00f0ff);
pub const GAME_OVER_OVERLAY: Color = Color::rgba(255, 0, 100, 128);
pub const GAME_OVER_TEXT: Color = Color::from_hex(0xff6b6b);

pub const GROUND_HEIGHT: f32 = 40.0;
pub const PLAYER_WIDTH: f32 = 30.0;
pub const PLAYER_HEIGHT: f32 = 50.0;
pub const ENEMY_RADIUS: f32 = 25.0;
pub const COIN_RADIUS: f32 = 12.0;
pub const HUD_FONT_SIZE: f32 = 16.0;
pub const BANNER_FONT_SIZE: f32 = 24.0;

pub const CONTROL_HINT: &str = "Use Arrow Keys or WASD to move, Space to jump";
pub const GAME_OVER_MESSAGE: &str = "GAME OVER - Press Stop then Play to restart";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// One primitive drawing operation in canvas pixel coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole surface.
    Clear(Color),
    FillRect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Color,
    },
    FillCircle {
        x: f32,
        y: f32,
        radius: f32,
        color: Color,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        color: Color,
    },
    /// `y` is the text baseline; `x` is the left edge or the center,
    /// depending on `align`.
    Text {
        text: String,
        x: f32,
        y: f32,
        size: f32,
        align: TextAlign,
        color: Color,
    },
}

/// A 2D surface the host owns and the game draws into.
pub trait RenderSurface {
    /// Surface size in pixels.
    fn size(&self) -> (u32, u32);

    fn draw(&mut self, command: &DrawCommand) -> Result<()>;

    /// Shows everything drawn since the last present.
    fn present(&mut self) -> Result<()> {
        Ok(())
    }

    /// Replays a whole frame, then presents it.
    fn submit(&mut self, commands: &[DrawCommand]) -> Result<()> {
        for command in commands {
            self.draw(command)?;
        }
        self.present()
    }
}

/// Keeps draw commands in memory instead of drawing them.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    pending: Vec<DrawCommand>,
    last_frame: Vec<DrawCommand>,
    frames_presented: u64,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        RecordingSurface {
            width,
            height,
            ..Default::default()
        }
    }

    /// Commands of the most recently presented frame.
    pub fn last_frame(&self) -> &[DrawCommand] {
        &self.last_frame
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }
}

impl RenderSurface for RecordingSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn draw(&mut self, command: &DrawCommand) -> Result<()> {
        self.pending.push(command.clone());
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        self.last_frame = std::mem::take(&mut self.pending);
        self.frames_presented += 1;
        Ok(())
    }
}

/// Read-only view of everything one frame needs to draw.
pub struct SceneView<'a> {
    pub config: &'a GameConfig,
    pub player: &'a PlayerState,
    pub enemy: &'a EnemyState,
    pub coins: &'a [Coin],
    pub score: u32,
}

impl SceneView<'_> {
    /// Clear followed by the reference grid.
    pub fn draw_background(&self, out: &mut Vec<DrawCommand>) {
        let width = self.config.canvas_width;
        let height = self.config.canvas_height;
        let spacing = self.config.grid_spacing;

        out.push(DrawCommand::Clear(BACKGROUND));

        let mut x = 0.0;
        while x < width {
            out.push(DrawCommand::Line {
                x1: x,
                y1: 0.0,
                x2: x,
                y2: height,
                color: GRID,
            });
            x += spacing;
        }

        let mut y = 0.0;
        while y < height {
            out.push(DrawCommand::Line {
                x1: 0.0,
                y1: y,
                x2: width,
                y2: y,
                color: GRID,
            });
            y += spacing;
        }
    }

    /// Ground, player, enemy, coins, HUD.
    pub fn draw_world(&self, out: &mut Vec<DrawCommand>) {
        let config = self.config;

        out.push(DrawCommand::FillRect {
            x: 0.0,
            y: config.canvas_height - GROUND_HEIGHT,
            w: config.canvas_width,
            h: GROUND_HEIGHT,
            color: GROUND,
        });

        // Player body, anchored 30px above and 20px below its y
        let (px, py) = self.player.position();
        out.push(DrawCommand::FillRect {
            x: px - PLAYER_WIDTH / 2.0,
            y: py - 30.0,
            w: PLAYER_WIDTH,
            h: PLAYER_HEIGHT,
            color: PLAYER,
        });
        for eye_x in [px - 8.0, px + 2.0] {
            out.push(DrawCommand::FillRect {
                x: eye_x,
                y: py - 20.0,
                w: 6.0,
                h: 6.0,
                color: HIGHLIGHT,
            });
        }

        // Enemy sits on the floor line regardless of its patrol y
        let ex = self.enemy.x;
        let ey = config.floor_y;
        out.push(DrawCommand::FillCircle {
            x: ex,
            y: ey,
            radius: ENEMY_RADIUS,
            color: ENEMY,
        });
        for eye_x in [ex - 8.0, ex + 8.0] {
            out.push(DrawCommand::FillCircle {
                x: eye_x,
                y: ey - 5.0,
                radius: 4.0,
                color: HIGHLIGHT,
            });
        }

        for coin in self.coins.iter().filter(|c| !c.collected) {
            out.push(DrawCommand::FillCircle {
                x: coin.x,
                y: coin.y,
                radius: COIN_RADIUS,
                color: COIN,
            });
            out.push(DrawCommand::FillCircle {
                x: coin.x - 4.0,
                y: coin.y - 4.0,
                radius: 4.0,
                color: HIGHLIGHT,
            });
        }

        out.push(DrawCommand::Text {
            text: format!("Score: {}", self.score),
            x: 20.0,
            y: 30.0,
            size: HUD_FONT_SIZE,
            align: TextAlign::Left,
            color: HUD_TEXT,
        });
        out.push(DrawCommand::Text {
            text: CONTROL_HINT.to_string(),
            x: 20.0,
            y: config.canvas_height - 10.0,
            size: HUD_FONT_SIZE,
            align: TextAlign::Left,
            color: HUD_TEXT,
        });
    }

    /// Translucent overlay and the centered banner.
    pub fn draw_game_over(&self, out: &mut Vec<DrawCommand>) {
        let config = self.config;
        out.push(DrawCommand::FillRect {
            x: 0.0,
            y: 0.0,
            w: config.canvas_width,
            h: config.canvas_height,
            color: GAME_OVER_OVERLAY,
        });
        out.push(DrawCommand::Text {
            text: GAME_OVER_MESSAGE.to_string(),
            x: config.canvas_width / 2.0,
            y: config.canvas_height / 2.0,
            size: BANNER_FONT_SIZE,
            align: TextAlign::Center,
            color: GAME_OVER_TEXT,
        });
    }
}
