// FrameLoop - host-side frame scheduling for a GameWorld
//
// The world itself never schedules anything. This struct plays the part of
// the host: it records key events, remembers whether a frame was requested,
// and on each animation frame takes one input snapshot, ticks the world and
// replays the draw list onto the surface.

use crate::config::GameConfig;
use crate::error::Result;
use crate::input_system::{Key, KeyState};
use crate::render::RenderSurface;

use super::{FrameOutput, GameWorld, SessionPhase};

pub struct FrameLoop {
    world: GameWorld,
    keys: KeyState,
    frame_requested: bool,
}

impl FrameLoop {
    pub fn new(config: GameConfig) -> Self {
        FrameLoop {
            world: GameWorld::new(config),
            keys: KeyState::new(),
            frame_requested: false,
        }
    }

    pub fn world(&self) -> &GameWorld {
        &self.world
    }

    pub fn keys(&self) -> &KeyState {
        &self.keys
    }

    pub fn phase(&self) -> SessionPhase {
        self.world.phase()
    }

    pub fn score(&self) -> u32 {
        self.world.score()
    }

    /// True while a frame is scheduled and `on_frame` will do work.
    pub fn frame_requested(&self) -> bool {
        self.frame_requested
    }

    // Key events are recorded in every phase. They only matter once a frame
    // runs and snapshots them.
    pub fn key_down(&mut self, key: Key) {
        self.keys.key_down(key);
    }

    pub fn key_up(&mut self, key: Key) {
        self.keys.key_up(key);
    }

    /// Starts a session and schedules the first frame.
    ///
    /// Without a mounted surface this is a silent no-op: the host may call
    /// it before its canvas exists. Returns whether the session is running.
    pub fn play(&mut self, surface_mounted: bool) -> bool {
        if !surface_mounted {
            log::debug!("play ignored: no render surface mounted");
            return false;
        }
        if self.world.phase().is_running() {
            return true;
        }

        self.world.start();
        self.frame_requested = true;
        true
    }

    /// Halts scheduling, keeps the score on display.
    pub fn pause(&mut self) {
        self.world.pause();
        self.teardown();
    }

    /// Halts scheduling and zeroes the score.
    pub fn stop(&mut self) {
        self.world.stop();
        self.teardown();
    }

    /// Runs the scheduled frame, if any, and draws it onto `surface`.
    ///
    /// Returns `None` when no frame was requested. The next frame is only
    /// requested while the session keeps running, so a game over halts the
    /// loop by itself.
    pub fn on_frame(&mut self, surface: &mut dyn RenderSurface) -> Result<Option<FrameOutput>> {
        if !self.frame_requested {
            return Ok(None);
        }
        self.frame_requested = false;

        let input = self.keys.snapshot();
        let output = self.world.tick(&input);
        self.frame_requested = output.reschedule;

        for event in &output.events {
            log::trace!("frame {}: {:?}", self.world.frame_count(), event);
        }

        surface.submit(&output.commands)?;
        Ok(Some(output))
    }

    // Cancels the pending frame and drops held keys. Runs on every exit path.
    fn teardown(&mut self) {
        self.frame_requested = false;
        self.keys.release_all();
    }
}
