// GameWorld - the single owned context of a game session
//
// All simulation state lives here and nowhere else: player, enemy, coins,
// score and phase. The host calls `tick` once per rendered frame; the tick is
// synchronous and its only side effects are state mutation and the returned
// draw list.

use crate::coin::{Coin, spawn_coins};
use crate::collision::{coins_in_reach, enemy_contact};
use crate::config::GameConfig;
use crate::enemy::EnemyState;
use crate::input_system::InputSnapshot;
use crate::player::PlayerState;
use crate::render::{DrawCommand, SceneView};

use super::{FrameEvent, FrameOutput, SessionPhase};

pub struct GameWorld {
    config: GameConfig,
    player: PlayerState,
    enemy: EnemyState,
    coins: Vec<Coin>,
    score: u32,
    phase: SessionPhase,
    frame: u64,
}

impl GameWorld {
    /// An idle world laid out from `config`. Nothing moves until `start`.
    pub fn new(config: GameConfig) -> Self {
        let player = PlayerState::spawn(&config);
        let enemy = EnemyState::spawn(&config);
        let coins = spawn_coins(&config);

        GameWorld {
            config,
            player,
            enemy,
            coins,
            score: 0,
            phase: SessionPhase::Idle,
            frame: 0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn enemy(&self) -> &EnemyState {
        &self.enemy
    }

    pub fn coins(&self) -> &[Coin] {
        &self.coins
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Ticks run since the last start.
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    /// Resets every entity and the score, then runs.
    ///
    /// Calling it again while already running does nothing.
    pub fn start(&mut self) {
        if self.phase.is_running() {
            log::debug!("start ignored: session already running");
            return;
        }

        self.player = PlayerState::spawn(&self.config);
        self.enemy = EnemyState::spawn(&self.config);
        self.coins = spawn_coins(&self.config);
        self.score = 0;
        self.frame = 0;
        self.phase = SessionPhase::Running;
        log::info!("Game session started ({} coins)", self.coins.len());
    }

    /// Stops advancing but keeps all state, score included.
    pub fn pause(&mut self) {
        if self.phase == SessionPhase::Idle {
            return;
        }
        self.phase = SessionPhase::Idle;
        log::info!("Game paused at frame {} (score {})", self.frame, self.score);
    }

    /// Stops advancing and zeroes the displayed score.
    pub fn stop(&mut self) {
        if self.phase != SessionPhase::Idle || self.score != 0 {
            log::info!("Game stopped (final score {})", self.score);
        }
        self.phase = SessionPhase::Idle;
        self.score = 0;
    }

    /// Advances one frame and returns what to draw.
    ///
    /// Does nothing unless the session is running; in particular, once the
    /// game is over no position, coin or score changes until `start`.
    pub fn tick(&mut self, input: &InputSnapshot) -> FrameOutput {
        if !self.phase.is_running() {
            return FrameOutput::halted(self.phase, self.score);
        }
        self.frame += 1;

        let mut commands = Vec::new();
        let mut events = Vec::new();

        self.view().draw_background(&mut commands);

        if self.player.update(input, &self.config) {
            events.push(FrameEvent::Jumped);
        }

        if self.enemy.update(&self.config) {
            events.push(FrameEvent::EnemyTurned {
                direction: self.enemy.direction,
            });
        }

        for index in coins_in_reach(&self.player, &self.coins, self.config.pickup_radius) {
            if self.coins[index].collect() {
                self.score = self.score.saturating_add(self.config.coin_reward);
                log::debug!("Coin {index} collected, score {}", self.score);
                events.push(FrameEvent::CoinCollected {
                    index,
                    reward: self.config.coin_reward,
                    score: self.score,
                });
            }
        }

        self.view().draw_world(&mut commands);

        if enemy_contact(&self.player, &self.enemy, &self.config) {
            self.phase = SessionPhase::GameOver;
            self.view().draw_game_over(&mut commands);
            events.push(FrameEvent::GameOver { score: self.score });
            log::info!("Game over at frame {} (score {})", self.frame, self.score);
        }

        FrameOutput {
            commands,
            events,
            phase: self.phase,
            score: self.score,
            reschedule: self.phase.is_running(),
        }
    }

    /// Draw list of the current state without advancing it. Hosts show this
    /// while the session is idle.
    pub fn preview(&self) -> Vec<DrawCommand> {
        let mut commands = Vec::new();
        let view = self.view();
        view.draw_background(&mut commands);
        view.draw_world(&mut commands);
        if self.phase == SessionPhase::GameOver {
            view.draw_game_over(&mut commands);
        }
        commands
    }

    fn view(&self) -> SceneView<'_> {
        SceneView {
            config: &self.config,
            player: &self.player,
            enemy: &self.enemy,
            coins: &self.coins,
            score: self.score,
        }
    }

    /// Places entities directly. Test-only: real sessions go through `start`.
    #[cfg(test)]
    pub(crate) fn set_state(
        &mut self,
        player: PlayerState,
        enemy: EnemyState,
        coins: Vec<Coin>,
    ) {
        self.player = player;
        self.enemy = enemy;
        self.coins = coins;
    }
}
