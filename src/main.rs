use bevy::prelude::*;

mod combat;
mod config;
mod enemies;
mod level;
mod motion;
mod player;
mod rendering;
mod session;

/// Game states, mirrored from the session every frame
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    #[default]
    Menu,
    Playing,
    GameOver,
}

/// Frame phases: read the keyboard, step the session, draw the result
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameSet {
    Input,
    Simulate,
    Present,
}

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Pixel Contra".into(),
                resolution: (1280.0, 720.0).into(),
                ..default()
            }),
            ..default()
        }))
        .init_state::<GameState>()
        .configure_sets(
            Update,
            (GameSet::Input, GameSet::Simulate, GameSet::Present).chain(),
        )
        .add_plugins((
            player::PlayerPlugin,
            session::SessionPlugin,
            level::LevelPlugin,
            rendering::RenderPlugin,
        ))
        .run();
}
