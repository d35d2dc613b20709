//! Presentation: mirrors the latest `FrameSnapshot` into meshes, animates
//! explosions and draws the HUD. Nothing here feeds back into the simulation.

mod animation;
mod hud;

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use bevy::log::debug;
use bevy::prelude::*;

use crate::GameSet;
use crate::combat::{ExplosionEffect, ProjectileId};
use crate::enemies::{Archetype, EnemyId};
use crate::motion::Facing;
use crate::session::{EnemyView, FrameSnapshot, GameEvent, PlayerView, ProjectileView};

pub use animation::{AnimationState, Animator};

pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_visual_assets).add_systems(
            Update,
            (
                sync_player_visual,
                sync_enemy_visuals,
                sync_projectile_visuals,
                spawn_explosions,
                animate_explosions,
            )
                .in_set(GameSet::Present),
        );
        hud::add_hud_systems(app);
    }
}

#[derive(Component)]
pub struct PlayerVisual;

#[derive(Component)]
pub struct EnemyVisual(pub EnemyId);

#[derive(Component)]
pub struct ProjectileVisual(pub ProjectileId);

/// Shared meshes and materials for everything the snapshot can show
#[derive(Resource)]
pub struct VisualAssets {
    character: Handle<Mesh>,
    projectile: Handle<Mesh>,
    explosion: Handle<Mesh>,
    player_idle: Handle<StandardMaterial>,
    player_shooting: Handle<StandardMaterial>,
    walker: Handle<StandardMaterial>,
    jumper: Handle<StandardMaterial>,
    shooter: Handle<StandardMaterial>,
    shooter_firing: Handle<StandardMaterial>,
    player_shot: Handle<StandardMaterial>,
    enemy_shot: Handle<StandardMaterial>,
}

impl VisualAssets {
    fn player_material(&self, view: &PlayerView) -> Handle<StandardMaterial> {
        if view.is_shooting {
            self.player_shooting.clone()
        } else {
            self.player_idle.clone()
        }
    }

    fn enemy_material(&self, view: &EnemyView) -> Handle<StandardMaterial> {
        match view.archetype {
            Archetype::Walker => self.walker.clone(),
            Archetype::Jumper { .. } => self.jumper.clone(),
            Archetype::Shooter { .. } if view.is_shooting => self.shooter_firing.clone(),
            Archetype::Shooter { .. } => self.shooter.clone(),
        }
    }

    fn projectile_material(&self, view: &ProjectileView) -> Handle<StandardMaterial> {
        if view.enemy_owned {
            self.enemy_shot.clone()
        } else {
            self.player_shot.clone()
        }
    }
}

fn load_visual_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mut flat = |color: Color| {
        materials.add(StandardMaterial {
            base_color: color,
            perceptual_roughness: 0.7,
            ..default()
        })
    };

    let player_idle = flat(Color::srgb(0.2, 0.4, 1.0));
    let player_shooting = flat(Color::srgb(1.0, 0.2, 0.2));
    let walker = flat(Color::srgb(0.6, 0.3, 0.1));
    let jumper = flat(Color::srgb(0.2, 0.7, 0.3));
    let shooter = flat(Color::srgb(0.5, 0.2, 0.6));
    let shooter_firing = flat(Color::srgb(0.9, 0.4, 1.0));

    let mut glowing = |color: Color, emissive: LinearRgba| {
        materials.add(StandardMaterial {
            base_color: color,
            emissive,
            unlit: true,
            ..default()
        })
    };
    let player_shot = glowing(Color::srgb(1.0, 1.0, 0.3), LinearRgba::rgb(2.0, 2.0, 0.5));
    let enemy_shot = glowing(Color::srgb(1.0, 0.5, 0.1), LinearRgba::rgb(2.0, 0.8, 0.1));

    commands.insert_resource(VisualAssets {
        character: meshes.add(Cuboid::new(0.6, 1.0, 0.6)),
        projectile: meshes.add(Sphere::new(0.12)),
        explosion: meshes.add(Sphere::new(0.5)),
        player_idle,
        player_shooting,
        walker,
        jumper,
        shooter,
        shooter_firing,
        player_shot,
        enemy_shot,
    });
}

/// Which ids need a new visual and which visuals lost their entity
#[derive(Debug, PartialEq, Eq)]
pub struct VisualDiff<K> {
    pub spawn: Vec<K>,
    pub despawn: Vec<K>,
}

pub fn diff_ids<K: Copy + Eq + Hash + Ord>(
    existing: impl IntoIterator<Item = K>,
    wanted: impl IntoIterator<Item = K>,
) -> VisualDiff<K> {
    let existing: HashSet<K> = existing.into_iter().collect();
    let wanted: HashSet<K> = wanted.into_iter().collect();

    let mut spawn: Vec<K> = wanted.difference(&existing).copied().collect();
    let mut despawn: Vec<K> = existing.difference(&wanted).copied().collect();
    spawn.sort();
    despawn.sort();

    VisualDiff { spawn, despawn }
}

/// Rotation that turns a character toward its facing along x
fn facing_rotation(facing: Facing) -> Quat {
    match facing {
        Facing::Right => Quat::IDENTITY,
        Facing::Left => Quat::from_rotation_y(std::f32::consts::PI),
    }
}

fn sync_player_visual(
    mut commands: Commands,
    snapshot: Res<FrameSnapshot>,
    assets: Option<Res<VisualAssets>>,
    time: Res<Time>,
    mut query: Query<
        (
            Entity,
            &mut Transform,
            &mut Visibility,
            &mut MeshMaterial3d<StandardMaterial>,
            &mut Animator,
        ),
        With<PlayerVisual>,
    >,
) {
    let Some(assets) = assets else {
        return;
    };

    let Some(view) = snapshot.player.as_ref() else {
        for (entity, ..) in &query {
            commands.entity(entity).despawn();
        }
        return;
    };

    let Ok((_, mut transform, mut visibility, mut material, mut animator)) = query.single_mut()
    else {
        commands.spawn((
            Mesh3d(assets.character.clone()),
            MeshMaterial3d(assets.player_material(view)),
            Transform::from_translation(view.position).with_rotation(facing_rotation(view.facing)),
            Animator::default(),
            PlayerVisual,
        ));
        return;
    };

    animator.play(AnimationState::for_player(view));
    animator.advance(time.delta_secs());

    transform.translation = view.position;
    transform.rotation = facing_rotation(view.facing);
    transform.scale = Vec3::new(1.0, animator.squash(), 1.0);
    material.0 = assets.player_material(view);
    *visibility = if view.visible {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    };
}

fn sync_enemy_visuals(
    mut commands: Commands,
    snapshot: Res<FrameSnapshot>,
    assets: Option<Res<VisualAssets>>,
    time: Res<Time>,
    mut query: Query<(
        Entity,
        &EnemyVisual,
        &mut Transform,
        &mut MeshMaterial3d<StandardMaterial>,
        &mut Animator,
    )>,
) {
    let Some(assets) = assets else {
        return;
    };

    let views: HashMap<EnemyId, &EnemyView> =
        snapshot.enemies.iter().map(|view| (view.id, view)).collect();
    let visuals: HashMap<EnemyId, Entity> =
        query.iter().map(|(entity, visual, ..)| (visual.0, entity)).collect();
    let diff = diff_ids(visuals.keys().copied(), views.keys().copied());

    for id in &diff.despawn {
        if let Some(entity) = visuals.get(id) {
            commands.entity(*entity).despawn();
        }
    }

    for (_, visual, mut transform, mut material, mut animator) in &mut query {
        let Some(view) = views.get(&visual.0) else {
            continue;
        };

        animator.play(AnimationState::for_enemy(view));
        animator.advance(time.delta_secs());

        transform.translation = view.position;
        transform.rotation = facing_rotation(view.facing);
        transform.scale = Vec3::new(1.0, animator.squash(), 1.0);
        material.0 = assets.enemy_material(view);
    }

    for id in diff.spawn {
        let Some(view) = views.get(&id) else {
            continue;
        };
        debug!("spawning visual for {} {:?}", view.archetype.name(), id);
        commands.spawn((
            Mesh3d(assets.character.clone()),
            MeshMaterial3d(assets.enemy_material(view)),
            Transform::from_translation(view.position).with_rotation(facing_rotation(view.facing)),
            Animator::default(),
            EnemyVisual(id),
        ));
    }
}

fn sync_projectile_visuals(
    mut commands: Commands,
    snapshot: Res<FrameSnapshot>,
    assets: Option<Res<VisualAssets>>,
    mut query: Query<(Entity, &ProjectileVisual, &mut Transform)>,
) {
    let Some(assets) = assets else {
        return;
    };

    let views: HashMap<ProjectileId, &ProjectileView> =
        snapshot.projectiles.iter().map(|view| (view.id, view)).collect();
    let visuals: HashMap<ProjectileId, Entity> =
        query.iter().map(|(entity, visual, _)| (visual.0, entity)).collect();
    let diff = diff_ids(visuals.keys().copied(), views.keys().copied());

    for id in &diff.despawn {
        if let Some(entity) = visuals.get(id) {
            commands.entity(*entity).despawn();
        }
    }

    for (_, visual, mut transform) in &mut query {
        if let Some(view) = views.get(&visual.0) {
            transform.translation = view.position;
        }
    }

    for id in diff.spawn {
        let Some(view) = views.get(&id) else {
            continue;
        };
        commands.spawn((
            Mesh3d(assets.projectile.clone()),
            MeshMaterial3d(assets.projectile_material(view)),
            Transform::from_translation(view.position),
            ProjectileVisual(id),
        ));
    }
}

fn spawn_explosions(
    mut commands: Commands,
    mut events: EventReader<GameEvent>,
    assets: Option<Res<VisualAssets>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let Some(assets) = assets else {
        return;
    };

    for event in events.read() {
        let GameEvent::Explosion(explosion) = event else {
            continue;
        };

        // Each explosion fades on its own, so it owns its material
        let material = materials.add(StandardMaterial {
            base_color: Color::srgba(1.0, 0.6, 0.2, 1.0),
            emissive: LinearRgba::rgb(5.0, 2.0, 0.5),
            unlit: true,
            alpha_mode: AlphaMode::Blend,
            ..default()
        });

        let effect = ExplosionEffect::default();
        commands.spawn((
            Mesh3d(assets.explosion.clone()),
            MeshMaterial3d(material),
            Transform::from_translation(explosion.position).with_scale(Vec3::splat(effect.scale())),
            effect,
        ));
    }
}

fn animate_explosions(
    mut commands: Commands,
    time: Res<Time>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut query: Query<(
        Entity,
        &mut ExplosionEffect,
        &mut Transform,
        &MeshMaterial3d<StandardMaterial>,
    )>,
) {
    for (entity, mut effect, mut transform, material) in &mut query {
        effect.advance(time.delta_secs());

        if effect.is_finished() {
            materials.remove(&material.0);
            commands.entity(entity).despawn();
            continue;
        }

        transform.scale = Vec3::splat(effect.scale());
        if let Some(material) = materials.get_mut(&material.0) {
            material.base_color.set_alpha(effect.opacity());
        }
    }
}
