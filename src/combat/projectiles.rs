use bevy::log::debug;
use bevy::prelude::*;

use crate::config::ProjectileConfig;
use crate::motion::Facing;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProjectileId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Owner {
    Player,
    Enemy,
}

/// A request to fire, produced by the player or a shooter enemy.
/// The session turns it into a [`Projectile`] with an id and timestamp.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShotRequest {
    pub position: Vec3,
    pub direction: Facing,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub id: ProjectileId,
    pub position: Vec3,
    pub direction: Facing,
    pub owner: Owner,
    pub created_at: f64,
}

impl Projectile {
    pub fn from_request(id: ProjectileId, request: ShotRequest, owner: Owner, now: f64) -> Self {
        Self {
            id,
            position: request.position,
            direction: request.direction,
            owner,
            created_at: now,
        }
    }

    pub fn is_enemy_owned(&self) -> bool {
        self.owner == Owner::Enemy
    }

    pub fn age(&self, now: f64) -> f64 {
        now - self.created_at
    }

    pub fn is_expired(&self, now: f64, config: &ProjectileConfig) -> bool {
        self.age(now) >= config.lifetime || self.position.x.abs() >= config.bound
    }
}

/// Move every shot along its heading, then drop the ones that are too old
/// or out of the level. Expiry is judged on the moved position.
pub fn advance_projectiles(
    shots: &[Projectile],
    dt: f32,
    now: f64,
    config: &ProjectileConfig,
) -> Vec<Projectile> {
    shots
        .iter()
        .filter_map(|shot| {
            let mut moved = shot.clone();
            moved.position.x += shot.direction.sign() * config.speed * dt;

            if moved.is_expired(now, config) {
                debug!("projectile {:?} expired at x={:.2}", moved.id, moved.position.x);
                None
            } else {
                Some(moved)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn shot(id: u64, x: f32, direction: Facing, created_at: f64) -> Projectile {
        Projectile {
            id: ProjectileId(id),
            position: Vec3::new(x, 1.0, 0.0),
            direction,
            owner: Owner::Player,
            created_at,
        }
    }

    // ==================== Advance Tests ====================

    #[test]
    fn test_advance_moves_along_direction() {
        let config = ProjectileConfig::default();
        let shots = vec![shot(1, 0.0, Facing::Right, 0.0), shot(2, 0.0, Facing::Left, 0.0)];

        let moved = advance_projectiles(&shots, 0.5, 0.5, &config);

        assert_eq!(moved.len(), 2);
        assert!(approx_eq(moved[0].position.x, 3.5));
        assert!(approx_eq(moved[1].position.x, -3.5));
        // No vertical motion
        assert!(approx_eq(moved[0].position.y, 1.0));
    }

    #[test]
    fn test_advance_keeps_ids_and_order() {
        let config = ProjectileConfig::default();
        let shots = vec![shot(4, 0.0, Facing::Right, 0.0), shot(9, 1.0, Facing::Right, 0.0)];

        let moved = advance_projectiles(&shots, 0.1, 0.1, &config);

        assert_eq!(moved[0].id, ProjectileId(4));
        assert_eq!(moved[1].id, ProjectileId(9));
    }

    // ==================== Expiry Tests ====================

    #[test]
    fn test_expires_exactly_at_lifetime() {
        let config = ProjectileConfig::default();
        let shots = vec![shot(1, 0.0, Facing::Right, 0.0)];

        assert_eq!(advance_projectiles(&shots, 0.0, 2.999, &config).len(), 1);
        assert!(advance_projectiles(&shots, 0.0, 3.0, &config).is_empty());
    }

    #[test]
    fn test_expires_at_level_bound_after_move() {
        let config = ProjectileConfig::default();
        let shots = vec![shot(1, 14.0, Facing::Right, 0.0), shot(2, -14.0, Facing::Right, 0.0)];

        // First crosses +15 this tick, second moves away from -15
        let moved = advance_projectiles(&shots, 0.2, 0.2, &config);

        assert_eq!(moved.len(), 1);
        assert_eq!(moved[0].id, ProjectileId(2));
    }

    #[test]
    fn test_age_grows_with_time() {
        let projectile = shot(1, 0.0, Facing::Right, 1.0);

        assert!(projectile.age(1.5) < projectile.age(1.6));
        assert!(!projectile.is_enemy_owned());
    }
}
