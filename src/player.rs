use crate::config::GameConfig;
use crate::input_system::InputSnapshot;

/// Position and velocity of the player character.
///
/// Position is the sprite's anchor in canvas pixels; velocity is in pixels
/// per tick. Owned exclusively by the game world and reset on every start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerState {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
}

impl PlayerState {
    pub fn new(x: f32, y: f32) -> Self {
        PlayerState {
            x,
            y,
            vx: 0.0,
            vy: 0.0,
        }
    }

    /// The player at the configured origin, at rest.
    pub fn spawn(config: &GameConfig) -> Self {
        let (x, y) = config.player_start;
        Self::new(x, y)
    }

    /// Grounded means "may jump". Anything above the threshold is airborne.
    pub fn is_grounded(&self, config: &GameConfig) -> bool {
        self.y >= config.jump_threshold
    }

    /// Resolves horizontal movement and jumping from this frame's input.
    ///
    /// Returns true if a jump started. Holding jump while airborne does
    /// nothing, so there is no double jump.
    pub fn apply_input(&mut self, input: &InputSnapshot, config: &GameConfig) -> bool {
        // Left wins over right when both are held
        self.vx = if input.left {
            -config.move_speed
        } else if input.right {
            config.move_speed
        } else {
            0.0
        };

        if input.jump && self.is_grounded(config) {
            self.vy = config.jump_impulse;
            return true;
        }
        false
    }

    /// Gravity, integration and the floor.
    ///
    /// Landing zeroes vertical velocity; nothing else stops falling speed
    /// from accumulating.
    pub fn integrate(&mut self, config: &GameConfig) {
        self.vy += config.gravity;
        self.x += self.vx;
        self.y += self.vy;

        if self.y > config.floor_y {
            self.y = config.floor_y;
            self.vy = 0.0;
        }
    }

    pub fn keep_in_bounds(&mut self, config: &GameConfig) {
        self.x = self.x.clamp(config.x_min(), config.x_max());
    }

    /// One full tick of player simulation. Returns true if a jump started.
    pub fn update(&mut self, input: &InputSnapshot, config: &GameConfig) -> bool {
        let jumped = self.apply_input(input, config);
        self.integrate(config);
        self.keep_in_bounds(config);
        jumped
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    pub fn velocity(&self) -> (f32, f32) {
        (self.vx, self.vy)
    }
}
