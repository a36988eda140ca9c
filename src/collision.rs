/// Collision checks for the platformer loop
///
/// Two kinds of contact exist, and neither is a full bounding-box test:
///
/// - **Pickups**: Euclidean distance between centers below a radius
/// - **Enemy contact**: horizontal distance below a threshold while the
///   player is low enough to be touching the enemy (a 1D overlap plus a
///   coarse height check)
///
/// The enemy check never looks at the enemy's y. Keep it that way: level
/// layouts are tuned against this exact shape, not against AABB.
use crate::coin::Coin;
use crate::config::GameConfig;
use crate::enemy::EnemyState;
use crate::player::PlayerState;

/// Anything with a center point that can take part in a collision check.
pub trait Collidable {
    fn center(&self) -> (f32, f32);
}

impl Collidable for PlayerState {
    fn center(&self) -> (f32, f32) {
        (self.x, self.y)
    }
}

impl Collidable for EnemyState {
    fn center(&self) -> (f32, f32) {
        (self.x, self.y)
    }
}

impl Collidable for Coin {
    fn center(&self) -> (f32, f32) {
        (self.x, self.y)
    }
}

/// Euclidean distance between two centers.
pub fn distance(a: &impl Collidable, b: &impl Collidable) -> f32 {
    let (ax, ay) = a.center();
    let (bx, by) = b.center();
    let dx = ax - bx;
    let dy = ay - by;
    (dx * dx + dy * dy).sqrt()
}

/// Strictly closer than `radius`. Touching at exactly `radius` is a miss.
pub fn within_radius(a: &impl Collidable, b: &impl Collidable, radius: f32) -> bool {
    distance(a, b) < radius
}

/// Indices of uncollected coins the player is close enough to pick up.
///
/// Each coin is checked independently, so iteration order never changes
/// which coins are returned.
pub fn coins_in_reach(player: &PlayerState, coins: &[Coin], radius: f32) -> Vec<usize> {
    coins
        .iter()
        .enumerate()
        .filter(|(_, coin)| !coin.collected && within_radius(player, *coin, radius))
        .map(|(index, _)| index)
        .collect()
}

/// Player/enemy overlap: close horizontally and not safely above the enemy.
pub fn enemy_contact(player: &PlayerState, enemy: &EnemyState, config: &GameConfig) -> bool {
    let dx = player.x - enemy.x;
    dx.abs() < config.enemy_contact_x && player.y > config.enemy_contact_y
}
