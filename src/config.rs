//! Tuning constants and level layout
//!
//! Every physics constant is expressed in units *per rendered frame* (one
//! `tick`), not per second. The defaults reproduce the Game Studio tab: a
//! 600x280 canvas, a player that moves 4px per frame and jumps with an
//! impulse of -8, and two coins worth 10 points each.
//!
//! A config can be loaded from JSON. Missing fields fall back to the
//! defaults, so a file only needs to name what it changes:
//!
//! ```json
//! { "gravity": 0.5, "coins": [[120.0, 200.0]] }
//! ```

use crate::error::{GameError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration for one game session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub canvas_width: f32,
    pub canvas_height: f32,

    // === Player ===
    pub player_start: (f32, f32),
    pub move_speed: f32,
    /// Vertical velocity set when a jump starts (negative = up).
    pub jump_impulse: f32,
    pub gravity: f32,
    /// The player counts as grounded (may jump) while `y >= jump_threshold`.
    pub jump_threshold: f32,
    /// Lowest y the player can reach. Landing here zeroes vertical velocity.
    pub floor_y: f32,
    pub margin_left: f32,
    pub margin_right: f32,

    // === Enemy ===
    pub enemy_start: (f32, f32),
    pub enemy_speed: f32,
    pub patrol_min: f32,
    /// Upper patrol bound is `canvas_width - patrol_margin`.
    pub patrol_margin: f32,
    pub enemy_contact_x: f32,
    pub enemy_contact_y: f32,

    // === Coins ===
    pub coins: Vec<(f32, f32)>,
    pub pickup_radius: f32,
    pub coin_reward: u32,

    pub grid_spacing: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            canvas_width: 600.0,
            canvas_height: 280.0,
            player_start: (200.0, 150.0),
            move_speed: 4.0,
            jump_impulse: -8.0,
            gravity: 0.4,
            jump_threshold: 150.0,
            floor_y: 200.0,
            margin_left: 20.0,
            margin_right: 40.0,
            enemy_start: (400.0, 150.0),
            enemy_speed: 2.0,
            patrol_min: 100.0,
            patrol_margin: 50.0,
            enemy_contact_x: 35.0,
            enemy_contact_y: 150.0,
            coins: vec![(300.0, 200.0), (450.0, 180.0)],
            pickup_radius: 30.0,
            coin_reward: 10,
            grid_spacing: 40.0,
        }
    }
}

impl GameConfig {
    /// Parses and validates a JSON config.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded game config from {}", path.display());
        Ok(config)
    }

    /// Replaces the coin layout, e.g. with the coins placed in the editor.
    pub fn with_coin_layout(mut self, coins: Vec<(f32, f32)>) -> Self {
        self.coins = coins;
        self
    }

    /// Leftmost x the player may occupy.
    pub fn x_min(&self) -> f32 {
        self.margin_left
    }

    /// Rightmost x the player may occupy.
    pub fn x_max(&self) -> f32 {
        self.canvas_width - self.margin_right
    }

    /// Enemy turns around once it moves past this x.
    pub fn patrol_max(&self) -> f32 {
        self.canvas_width - self.patrol_margin
    }

    /// Rejects configs that would break the clamp and patrol invariants.
    pub fn validate(&self) -> Result<()> {
        if self.canvas_width <= 0.0 || self.canvas_height <= 0.0 {
            return Err(GameError::Config(format!(
                "canvas must be non-empty, got {}x{}",
                self.canvas_width, self.canvas_height
            )));
        }
        if self.x_min() > self.x_max() {
            return Err(GameError::Config(format!(
                "horizontal bounds inverted: [{}, {}]",
                self.x_min(),
                self.x_max()
            )));
        }
        if self.patrol_min >= self.patrol_max() {
            return Err(GameError::Config(format!(
                "patrol bounds inverted: [{}, {}]",
                self.patrol_min,
                self.patrol_max()
            )));
        }
        let enemy_x = self.enemy_start.0;
        if enemy_x < self.patrol_min || enemy_x > self.patrol_max() {
            return Err(GameError::Config(format!(
                "enemy starts at x={enemy_x}, outside its patrol [{}, {}]",
                self.patrol_min,
                self.patrol_max()
            )));
        }
        if self.gravity <= 0.0 {
            return Err(GameError::Config("gravity must pull downward".into()));
        }
        if self.move_speed < 0.0 || self.enemy_speed < 0.0 {
            return Err(GameError::Config("speeds must not be negative".into()));
        }
        if self.pickup_radius <= 0.0 || self.grid_spacing <= 0.0 {
            return Err(GameError::Config(
                "pickup radius and grid spacing must be positive".into(),
            ));
        }
        Ok(())
    }
}
