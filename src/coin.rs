use crate::config::GameConfig;

/// A collectible coin.
///
/// `collected` only ever goes from false to true within a session; a new
/// session builds fresh coins instead of resetting old ones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coin {
    pub x: f32,
    pub y: f32,
    pub collected: bool,
}

impl Coin {
    pub fn new(x: f32, y: f32) -> Self {
        Coin {
            x,
            y,
            collected: false,
        }
    }

    /// Marks the coin collected. Returns true only on the first call.
    pub fn collect(&mut self) -> bool {
        if self.collected {
            return false;
        }
        self.collected = true;
        true
    }
}

/// Fresh, uncollected coins for the configured layout.
pub fn spawn_coins(config: &GameConfig) -> Vec<Coin> {
    config.coins.iter().map(|&(x, y)| Coin::new(x, y)).collect()
}
