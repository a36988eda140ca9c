// Shared enums and result structs for the game loop

use crate::enemy::PatrolDirection;
use crate::render::DrawCommand;

/// Where a session is in its lifecycle. Exactly one holds at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    /// Nothing advances. Before the first start, after pause or stop.
    #[default]
    Idle,
    /// Every tick advances the simulation.
    Running,
    /// Player touched the enemy. Frozen until the next start.
    GameOver,
}

impl SessionPhase {
    pub fn is_running(&self) -> bool {
        matches!(self, SessionPhase::Running)
    }
}

/// Something notable that happened during one tick.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameEvent {
    Jumped,
    CoinCollected { index: usize, reward: u32, score: u32 },
    EnemyTurned { direction: PatrolDirection },
    GameOver { score: u32 },
}

/// Everything one tick hands back to the host.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameOutput {
    /// Draw commands in paint order. Empty when nothing ran.
    pub commands: Vec<DrawCommand>,
    pub events: Vec<FrameEvent>,
    pub phase: SessionPhase,
    pub score: u32,
    /// True if the host should request another frame.
    pub reschedule: bool,
}

impl FrameOutput {
    /// Output of a tick that did not run (phase was not Running).
    pub fn halted(phase: SessionPhase, score: u32) -> Self {
        FrameOutput {
            commands: Vec::new(),
            events: Vec::new(),
            phase,
            score,
            reschedule: false,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == SessionPhase::GameOver
    }
}
