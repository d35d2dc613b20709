use bevy::prelude::*;

/// Player kinematics and combat tuning
#[derive(Clone, Debug)]
pub struct PlayerConfig {
    pub move_speed: f32,          // Horizontal speed while a direction is held (units/sec)
    pub gravity: f32,             // Downward acceleration (units/sec^2)
    pub jump_speed: f32,          // Vertical velocity applied on jump
    pub ground_height: f32,       // Standing height; y never goes below this
    pub max_health: i32,
    pub muzzle_offset: f32,       // Horizontal spawn offset for shots
    pub shoot_pulse: f64,         // Seconds the shooting flag stays raised
    pub invulnerability: f64,     // Seconds of damage immunity after a hit
    pub blink_interval: f64,      // Seconds between visibility toggles while invulnerable
    pub projectile_hit_radius: f32,
    pub contact_radius: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            gravity: 9.8,
            jump_speed: 5.0,
            ground_height: 1.0,
            max_health: 3,
            muzzle_offset: 0.5,
            shoot_pulse: 0.2,
            invulnerability: 1.5,
            blink_interval: 0.15,
            projectile_hit_radius: 0.5,
            contact_radius: 1.0,
        }
    }
}

/// Enemy patrol tuning shared by every archetype
#[derive(Clone, Debug)]
pub struct EnemyConfig {
    pub patrol_speed: f32,
    pub patrol_bound: f32,  // |x| beyond this flips direction
    pub gravity: f32,
    pub jump_impulse: f32,
    pub walker_floor: f32,
    pub jumper_floor: f32,
    pub shooter_floor: f32,
    pub shooting_flash: f64, // Seconds after a shot the shooter renders as firing
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            patrol_speed: 2.0,
            patrol_bound: 7.0,
            gravity: 9.8,
            jump_impulse: 5.0,
            walker_floor: 1.0,
            jumper_floor: 4.5,
            shooter_floor: 6.5,
            shooting_flash: 0.2,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ProjectileConfig {
    pub speed: f32,
    pub lifetime: f64,
    pub bound: f32,
}

impl Default for ProjectileConfig {
    fn default() -> Self {
        Self {
            speed: 7.0,
            lifetime: 3.0,
            bound: 15.0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ScoringConfig {
    pub enemy_hit_radius: f32,
    pub points_per_shot: u32,
    pub points_per_kill: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            enemy_hit_radius: 0.8,
            points_per_shot: 1,
            points_per_kill: 10,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Delay before leftover projectiles are cleared after game over
    pub game_over_cleanup: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            game_over_cleanup: 2.0,
        }
    }
}

/// All simulation tuning in one place. The session keeps its own copy.
#[derive(Resource, Clone, Debug, Default)]
pub struct GameConfig {
    pub player: PlayerConfig,
    pub enemy: EnemyConfig,
    pub projectile: ProjectileConfig,
    pub scoring: ScoringConfig,
    pub session: SessionConfig,
}
