//! Enemy archetypes and their patrol behaviour
//! Walkers pace the ground, jumpers hop on the middle platform, shooters fire from the top one

use bevy::log::debug;
use bevy::prelude::*;

use crate::combat::{Health, ShotRequest};
use crate::config::EnemyConfig;
use crate::motion::Facing;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EnemyId(pub u32);

/// Archetype determines behaviour. A cooldown of zero or less disables the
/// special action.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Archetype {
    Walker,
    Jumper { cooldown: f64 },
    Shooter { cooldown: f64 },
}

impl Archetype {
    pub fn name(&self) -> &'static str {
        match self {
            Archetype::Walker => "walker",
            Archetype::Jumper { .. } => "jumper",
            Archetype::Shooter { .. } => "shooter",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub id: EnemyId,
    pub position: Vec3,
    pub direction: Facing,
    pub archetype: Archetype,
    pub last_jump_at: f64,
    pub last_shoot_at: f64,
    pub shots_fired: u32,
    pub health: Health,
}

impl Enemy {
    pub fn walker(id: EnemyId, position: Vec3, direction: Facing, now: f64) -> Self {
        Self {
            id,
            position,
            direction,
            archetype: Archetype::Walker,
            last_jump_at: now,
            last_shoot_at: now,
            shots_fired: 0,
            health: Health::new(1),
        }
    }

    pub fn jumper(id: EnemyId, position: Vec3, direction: Facing, cooldown: f64, now: f64) -> Self {
        Self {
            archetype: Archetype::Jumper { cooldown },
            ..Self::walker(id, position, direction, now)
        }
    }

    pub fn shooter(id: EnemyId, position: Vec3, direction: Facing, cooldown: f64, now: f64) -> Self {
        Self {
            archetype: Archetype::Shooter { cooldown },
            health: Health::new(2),
            ..Self::walker(id, position, direction, now)
        }
    }

    /// Resting height of the platform this archetype patrols
    pub fn floor(&self, config: &EnemyConfig) -> f32 {
        match self.archetype {
            Archetype::Walker => config.walker_floor,
            Archetype::Jumper { .. } => config.jumper_floor,
            Archetype::Shooter { .. } => config.shooter_floor,
        }
    }

    pub fn is_jumping(&self) -> bool {
        matches!(self.archetype, Archetype::Jumper { .. })
    }

    /// True for a short flash after a shooter fires
    pub fn is_shooting(&self, now: f64, config: &EnemyConfig) -> bool {
        matches!(self.archetype, Archetype::Shooter { .. })
            && self.shots_fired > 0
            && now - self.last_shoot_at < config.shooting_flash
    }
}

/// The fixed three-enemy roster installed on every (re)start
pub fn initial_roster(now: f64) -> Vec<Enemy> {
    vec![
        Enemy::walker(EnemyId(1), Vec3::new(5.0, 1.0, 0.0), Facing::Left, now),
        Enemy::jumper(EnemyId(2), Vec3::new(-3.0, 4.5, 0.0), Facing::Right, 2.0, now),
        Enemy::shooter(EnemyId(3), Vec3::new(4.0, 6.5, 0.0), Facing::Left, 3.0, now),
    ]
}

/// Output of one AI pass
#[derive(Debug, Default)]
pub struct EnemyTick {
    pub enemies: Vec<Enemy>,
    pub shots: Vec<ShotRequest>,
}

/// Advance every enemy from the previous tick's state. Each enemy only sees
/// its own pre-tick snapshot, never a neighbour's updated state.
pub fn update_enemies(enemies: &[Enemy], dt: f32, now: f64, config: &EnemyConfig) -> EnemyTick {
    let mut tick = EnemyTick {
        enemies: Vec::with_capacity(enemies.len()),
        shots: Vec::new(),
    };

    for enemy in enemies {
        let (next, shot) = step_enemy(enemy, dt, now, config);
        tick.enemies.push(next);
        tick.shots.extend(shot);
    }

    tick
}

fn cooldown_elapsed(cooldown: f64, last: f64, now: f64) -> bool {
    cooldown > 0.0 && now - last > cooldown
}

fn step_enemy(enemy: &Enemy, dt: f32, now: f64, config: &EnemyConfig) -> (Enemy, Option<ShotRequest>) {
    let mut next = enemy.clone();

    // Patrol drift, turning around past the platform edge
    next.position.x += enemy.direction.sign() * config.patrol_speed * dt;
    let heading_out = next.position.x.signum() == enemy.direction.sign();
    if next.position.x.abs() > config.patrol_bound && heading_out {
        next.direction = enemy.direction.flipped();
    }

    if let Archetype::Jumper { cooldown } = enemy.archetype {
        if cooldown_elapsed(cooldown, enemy.last_jump_at, now) {
            next.position.y += config.jump_impulse * dt;
            next.last_jump_at = now;
        }
    }

    // Snap back onto the patrol platform
    let floor = enemy.floor(config);
    if next.position.y > floor {
        next.position.y -= config.gravity * dt;
    }
    if next.position.y < floor {
        next.position.y = floor;
    }

    let mut shot = None;
    if let Archetype::Shooter { cooldown } = enemy.archetype {
        if cooldown_elapsed(cooldown, enemy.last_shoot_at, now) {
            shot = Some(ShotRequest {
                position: enemy.position,
                direction: enemy.direction,
            });
            next.last_shoot_at = now;
            next.shots_fired += 1;
            debug!("{} {:?} fired at x={:.2}", enemy.archetype.name(), enemy.id, next.position.x);
        }
    }

    (next, shot)
}
