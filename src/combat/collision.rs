use bevy::log::info;
use bevy::prelude::*;

use super::explosion::{Explosion, ExplosionId};
use super::projectiles::{Projectile, ProjectileId};
use crate::enemies::{Archetype, Enemy, EnemyId};
use crate::motion::within;

/// One projectile overlapping one enemy
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnemyHit {
    pub enemy: EnemyId,
    pub projectile: ProjectileId,
    pub position: Vec3,
    pub remaining_health: i32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DefeatedEnemy {
    pub id: EnemyId,
    pub archetype: Archetype,
    pub position: Vec3,
}

#[derive(Debug, Default)]
pub struct CollisionOutcome {
    /// Enemies still standing, defeated ones filtered out
    pub enemies: Vec<Enemy>,
    /// Player shots that did not connect with anything
    pub player_shots: Vec<Projectile>,
    pub hits: Vec<EnemyHit>,
    pub defeated: Vec<DefeatedEnemy>,
    pub explosions: Vec<Explosion>,
}

/// Resolve player projectiles against enemies after both have moved.
///
/// Every overlapping (projectile, enemy) pair counts, so two shots landing
/// on the same enemy in one tick take two points off it. Removal of defeated
/// enemies and spent shots happens once at the end of the pass.
pub fn resolve_player_shots(
    enemies: &[Enemy],
    shots: &[Projectile],
    hit_radius: f32,
    next_explosion_id: &mut u64,
) -> CollisionOutcome {
    let mut survivors = enemies.to_vec();
    let mut outcome = CollisionOutcome::default();
    let mut spent: Vec<ProjectileId> = Vec::new();

    for shot in shots {
        for enemy in survivors.iter_mut() {
            if !within(shot.position, enemy.position, hit_radius) {
                continue;
            }

            enemy.health.take_hit();

            outcome.hits.push(EnemyHit {
                enemy: enemy.id,
                projectile: shot.id,
                position: enemy.position,
                remaining_health: enemy.health.current,
            });

            outcome.explosions.push(Explosion {
                id: ExplosionId(*next_explosion_id),
                position: enemy.position,
            });
            *next_explosion_id += 1;

            if !spent.contains(&shot.id) {
                spent.push(shot.id);
            }

            let already_defeated = outcome.defeated.iter().any(|d| d.id == enemy.id);
            if enemy.health.is_dead() && !already_defeated {
                info!("{} {:?} defeated", enemy.archetype.name(), enemy.id);
                outcome.defeated.push(DefeatedEnemy {
                    id: enemy.id,
                    archetype: enemy.archetype,
                    position: enemy.position,
                });
            }
        }
    }

    survivors.retain(|enemy| !outcome.defeated.iter().any(|d| d.id == enemy.id));
    outcome.enemies = survivors;
    outcome.player_shots = shots
        .iter()
        .filter(|shot| !spent.contains(&shot.id))
        .cloned()
        .collect();

    outcome
}
