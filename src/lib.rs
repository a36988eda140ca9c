//! Game Studio: a small side-view platformer session.
//!
//! A player runs and jumps along a floor, an enemy patrols back and forth,
//! and coins add to the score until the enemy catches the player. The
//! simulation lives in [`game::GameWorld`]; [`game::FrameLoop`] drives it
//! from host key events and frame callbacks and replays each frame's draw
//! list onto a [`render::RenderSurface`].
//!
//! The editor side ([`registry`], [`scene`]) keeps a list of placeable
//! objects and saves it to disk. Its coin layout can seed a session through
//! [`config::GameConfig::with_coin_layout`].

pub mod coin;
pub mod collision;
pub mod config;
pub mod enemy;
pub mod error;
pub mod game;
pub mod input_system;
pub mod player;
pub mod registry;
pub mod render;
pub mod scene;
pub mod text;

#[cfg(feature = "sdl")]
pub mod sdl_backend;

pub use config::GameConfig;
pub use error::{GameError, Result};
pub use game::{FrameEvent, FrameLoop, FrameOutput, GameWorld, SessionPhase};
pub use input_system::{InputSnapshot, Key};
pub use render::{DrawCommand, RecordingSurface, RenderSurface};
