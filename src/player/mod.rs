use bevy::log::info;
use bevy::prelude::*;

use crate::GameSet;
use crate::combat::{Health, Projectile, ProjectileId, ShotRequest};
use crate::config::PlayerConfig;
use crate::enemies::{Enemy, EnemyId};
use crate::motion::{Facing, within};

pub mod input;
pub mod movement;

pub use input::*;
use movement::*;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<KeyBindings>()
            .init_resource::<InputFrame>()
            .init_resource::<CommandFrame>()
            .add_systems(Update, gather_input.in_set(GameSet::Input));
    }
}

/// What hurt the player this tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DamageSource {
    Projectile(ProjectileId),
    Contact(EnemyId),
}

/// Everything the player produced during one update
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlayerTick {
    pub shot: Option<ShotRequest>,
    pub damage: Option<DamageSource>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub position: Vec3,
    pub velocity: Vec3,
    pub facing: Facing,
    pub is_jumping: bool,
    pub is_shooting: bool,
    pub is_invulnerable: bool,
    pub is_moving: bool,
    /// Toggled by the blink timer while invulnerable
    pub blink_hidden: bool,
    pub health: Health,
}

impl Player {
    pub fn spawn(config: &PlayerConfig) -> Self {
        Self {
            position: Vec3::new(0.0, config.ground_height, 0.0),
            velocity: Vec3::ZERO,
            facing: Facing::Right,
            is_jumping: false,
            is_shooting: false,
            is_invulnerable: false,
            is_moving: false,
            blink_hidden: false,
            health: Health::new(config.max_health),
        }
    }

    pub fn is_grounded(&self, config: &PlayerConfig) -> bool {
        !self.is_jumping && self.position.y <= config.ground_height
    }

    pub fn is_dead(&self) -> bool {
        self.health.is_dead()
    }

    /// Advance one tick: movement, actions, then damage from the enemies and
    /// enemy shots as they stood before this tick.
    pub fn update(
        &mut self,
        input: &InputFrame,
        dt: f32,
        enemies: &[Enemy],
        enemy_shots: &[Projectile],
        config: &PlayerConfig,
    ) -> PlayerTick {
        let mut tick = PlayerTick::default();

        let (vx, facing) = horizontal_velocity(input.left, input.right, config.move_speed);
        self.velocity.x = vx;
        self.is_moving = facing.is_some();
        if let Some(facing) = facing {
            self.facing = facing;
        }
        self.position.x += vx * dt;

        let step = integrate_vertical(
            self.position.y,
            self.velocity.y,
            dt,
            config.gravity,
            config.ground_height,
        );
        self.position.y = step.y;
        self.velocity.y = step.vy;
        if step.landed {
            self.is_jumping = false;
        }

        // Jump from the resting state the clamp left behind, so a zero-length
        // tick still takes the press
        if input.jump && self.is_grounded(config) {
            self.velocity.y = config.jump_speed;
            self.is_jumping = true;
        }

        // The shoot pulse doubles as the fire-rate limit
        if input.shoot && !self.is_shooting {
            self.is_shooting = true;
            tick.shot = Some(ShotRequest {
                position: self.position + Vec3::X * self.facing.sign() * config.muzzle_offset,
                direction: self.facing,
            });
        }

        if let Some(source) = self.find_damage_source(enemies, enemy_shots, config) {
            if self.take_damage() {
                tick.damage = Some(source);
            }
        }

        tick
    }

    fn find_damage_source(
        &self,
        enemies: &[Enemy],
        enemy_shots: &[Projectile],
        config: &PlayerConfig,
    ) -> Option<DamageSource> {
        if self.is_invulnerable {
            return None;
        }

        if let Some(shot) = enemy_shots
            .iter()
            .find(|shot| within(shot.position, self.position, config.projectile_hit_radius))
        {
            return Some(DamageSource::Projectile(shot.id));
        }

        enemies
            .iter()
            .find(|enemy| within(enemy.position, self.position, config.contact_radius))
            .map(|enemy| DamageSource::Contact(enemy.id))
    }

    /// Lose one health point and start the invulnerability window.
    /// Returns false when the hit was absorbed by an active window.
    pub fn take_damage(&mut self) -> bool {
        if self.is_invulnerable {
            return false;
        }

        self.health.current = (self.health.current - 1).max(0);
        self.is_invulnerable = true;
        info!("player hit, health now {}", self.health.current);
        true
    }

    pub fn end_shoot_pulse(&mut self) {
        self.is_shooting = false;
    }

    pub fn end_invulnerability(&mut self) {
        self.is_invulnerable = false;
        self.blink_hidden = false;
    }

    /// Flip visibility while invulnerable. Returns whether blinking continues.
    pub fn toggle_blink(&mut self) -> bool {
        if !self.is_invulnerable {
            self.blink_hidden = false;
            return false;
        }
        self.blink_hidden = !self.blink_hidden;
        true
    }
}
