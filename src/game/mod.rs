// Game module - the platformer loop and its scheduling
//
// This module contains:
// - types.rs: SessionPhase, FrameEvent and FrameOutput
// - world.rs: GameWorld, the owned simulation state and its tick
// - frame_loop.rs: FrameLoop, host-side frame requests and key recording

pub mod frame_loop;
pub mod types;
pub mod world;

// Re-export types for convenience
pub use frame_loop::FrameLoop;
pub use types::*;
pub use world::GameWorld;
