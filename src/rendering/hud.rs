use bevy::prelude::*;

use crate::GameState;
use crate::session::FrameSnapshot;

#[derive(Component)]
pub struct ScoreHud;

#[derive(Component)]
pub struct HealthHud;

/// Full-screen message shown on the title screen
#[derive(Component)]
pub struct TitleOverlay;

#[derive(Component)]
pub struct GameOverOverlay;

pub fn score_label(score: u32) -> String {
    format!("SCORE: {score}")
}

pub fn health_label(health: i32) -> String {
    format!("HP: {}", health.max(0))
}

pub fn game_over_label(score: u32) -> String {
    format!("GAME OVER\nFinal score: {score}\nPress Enter to play again")
}

/// Score and health, top-left
pub fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        Text::new(score_label(0)),
        TextFont {
            font_size: 24.0,
            ..default()
        },
        TextColor(Color::srgb(1.0, 1.0, 1.0)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(10.0),
            top: Val::Px(10.0),
            ..default()
        },
        ScoreHud,
    ));

    commands.spawn((
        Text::new(health_label(0)),
        TextFont {
            font_size: 24.0,
            ..default()
        },
        TextColor(Color::srgb(0.3, 1.0, 0.3)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(10.0),
            top: Val::Px(40.0),
            ..default()
        },
        HealthHud,
    ));
}

pub fn spawn_title_overlay(mut commands: Commands) {
    commands.spawn((
        Text::new("PIXEL CONTRA\nPress Enter to start"),
        TextFont {
            font_size: 48.0,
            ..default()
        },
        TextColor(Color::srgb(1.0, 0.9, 0.3)),
        TextLayout::new_with_justify(JustifyText::Center),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Percent(30.0),
            top: Val::Percent(35.0),
            ..default()
        },
        TitleOverlay,
    ));
}

pub fn spawn_game_over_overlay(mut commands: Commands, snapshot: Res<FrameSnapshot>) {
    commands.spawn((
        Text::new(game_over_label(snapshot.score)),
        TextFont {
            font_size: 48.0,
            ..default()
        },
        TextColor(Color::srgb(1.0, 0.2, 0.2)),
        TextLayout::new_with_justify(JustifyText::Center),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Percent(28.0),
            top: Val::Percent(35.0),
            ..default()
        },
        GameOverOverlay,
    ));
}

pub fn despawn_overlay<T: Component>(mut commands: Commands, query: Query<Entity, With<T>>) {
    for entity in &query {
        commands.entity(entity).despawn();
    }
}

pub fn update_hud(
    snapshot: Res<FrameSnapshot>,
    mut score_query: Query<&mut Text, (With<ScoreHud>, Without<HealthHud>)>,
    mut health_query: Query<(&mut Text, &mut TextColor), (With<HealthHud>, Without<ScoreHud>)>,
) {
    if let Ok(mut text) = score_query.single_mut() {
        **text = score_label(snapshot.score);
    }

    let Ok((mut text, mut color)) = health_query.single_mut() else {
        return;
    };
    let (health, fraction) = snapshot
        .player
        .as_ref()
        .map_or((0, 0.0), |player| (player.health, player.health_fraction));
    **text = health_label(health);
    color.0 = health_color(fraction);
}

/// Green at full health, yellow once hurt, red on the last point
pub fn health_color(fraction: f32) -> Color {
    if fraction > 0.99 {
        Color::srgb(0.3, 1.0, 0.3)
    } else if fraction > 0.5 {
        Color::srgb(1.0, 0.8, 0.2)
    } else {
        Color::srgb(1.0, 0.2, 0.2)
    }
}

pub(super) fn add_hud_systems(app: &mut App) {
    app.add_systems(Startup, spawn_hud)
        .add_systems(OnEnter(GameState::Menu), spawn_title_overlay)
        .add_systems(OnExit(GameState::Menu), despawn_overlay::<TitleOverlay>)
        .add_systems(OnEnter(GameState::GameOver), spawn_game_over_overlay)
        .add_systems(OnExit(GameState::GameOver), despawn_overlay::<GameOverOverlay>)
        .add_systems(
            Update,
            update_hud
                .run_if(in_state(GameState::Playing))
                .in_set(crate::GameSet::Present),
        );
}
