use crate::config::GameConfig;

/// Direction of the enemy's patrol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatrolDirection {
    Left,
    Right,
}

impl PatrolDirection {
    /// +1 for right, -1 for left.
    pub fn sign(&self) -> f32 {
        match self {
            PatrolDirection::Left => -1.0,
            PatrolDirection::Right => 1.0,
        }
    }

    pub fn reversed(&self) -> Self {
        match self {
            PatrolDirection::Left => PatrolDirection::Right,
            PatrolDirection::Right => PatrolDirection::Left,
        }
    }
}

/// The patrolling enemy. Moves deterministically, no randomness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyState {
    pub x: f32,
    pub y: f32,
    pub direction: PatrolDirection,
}

impl EnemyState {
    pub fn new(x: f32, y: f32, direction: PatrolDirection) -> Self {
        EnemyState { x, y, direction }
    }

    pub fn spawn(config: &GameConfig) -> Self {
        let (x, y) = config.enemy_start;
        Self::new(x, y, PatrolDirection::Right)
    }

    /// Ping-pong patrol: step, then turn around if a bound was crossed.
    ///
    /// Returns true if the direction flipped this tick.
    pub fn update(&mut self, config: &GameConfig) -> bool {
        self.x += self.direction.sign() * config.enemy_speed;

        if self.x > config.patrol_max() || self.x < config.patrol_min {
            self.direction = self.direction.reversed();
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_moves_right() {
        let enemy = EnemyState::spawn(&GameConfig::default());
        assert_eq!(enemy.x, 400.0);
        assert_eq!(enemy.direction, PatrolDirection::Right);
    }

    #[test]
    fn test_turns_at_upper_bound() {
        let config = GameConfig::default();
        let mut enemy = EnemyState::new(config.patrol_max(), 150.0, PatrolDirection::Right);

        assert!(enemy.update(&config));
        assert_eq!(enemy.direction, PatrolDirection::Left);
        let after_turn = enemy.x;

        assert!(!enemy.update(&config));
        assert!(enemy.x < after_turn);
    }

    #[test]
    fn test_turns_at_lower_bound() {
        let config = GameConfig::default();
        let mut enemy = EnemyState::new(config.patrol_min, 150.0, PatrolDirection::Left);

        assert!(enemy.update(&config));
        assert_eq!(enemy.direction, PatrolDirection::Right);
    }

    #[test]
    fn test_never_flips_between_bounds() {
        let config = GameConfig::default();
        let mut enemy = EnemyState::spawn(&config);

        // 400 -> 550 takes 75 steps without crossing the bound
        for _ in 0..75 {
            assert!(!enemy.update(&config));
        }
        assert_eq!(enemy.x, config.patrol_max());
        assert!(enemy.update(&config));
    }

    #[test]
    fn test_patrol_is_periodic() {
        let config = GameConfig::default();
        let mut enemy = EnemyState::spawn(&config);
        let mut flips = 0;
        for _ in 0..1000 {
            if enemy.update(&config) {
                flips += 1;
            }
            assert!(enemy.x >= config.patrol_min - config.enemy_speed);
            assert!(enemy.x <= config.patrol_max() + config.enemy_speed);
        }
        assert!(flips >= 4);
    }
}
