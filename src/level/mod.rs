use bevy::prelude::*;

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_level, spawn_camera_and_lights));
    }
}

#[derive(Component)]
pub struct LevelGeometry;

/// Marker for the main ground box
#[derive(Component)]
pub struct GroundFloor;

/// Marker for the sky backdrop
#[derive(Component)]
pub struct Backdrop;

pub const GROUND_CENTER: Vec3 = Vec3::new(0.0, -0.5, 0.0);
pub const GROUND_SIZE: Vec3 = Vec3::new(10.0, 1.0, 3.0);
pub const PLATFORM_SIZE: Vec3 = Vec3::new(2.0, 0.5, 3.0);

/// Platform centers, left to right and climbing
pub const PLATFORMS: [Vec3; 3] = [
    Vec3::new(-4.0, 2.0, 0.0),
    Vec3::new(0.0, 4.0, 0.0),
    Vec3::new(4.0, 6.0, 0.0),
];

pub const CAMERA_POSITION: Vec3 = Vec3::new(0.0, 5.0, 10.0);
pub const CAMERA_FOV_DEGREES: f32 = 50.0;

/// Top surface height of a box centered at `center`
pub fn top_of(center: Vec3, size: Vec3) -> f32 {
    center.y + size.y / 2.0
}

fn spawn_level(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Ground box, top face at y=0
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::from_size(GROUND_SIZE))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.35, 0.55, 0.25),
            perceptual_roughness: 0.9,
            ..default()
        })),
        Transform::from_translation(GROUND_CENTER),
        LevelGeometry,
        GroundFloor,
    ));

    let platform_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.55, 0.4, 0.3),
        perceptual_roughness: 0.8,
        ..default()
    });
    let platform_mesh = meshes.add(Cuboid::from_size(PLATFORM_SIZE));

    for center in PLATFORMS {
        commands.spawn((
            Mesh3d(platform_mesh.clone()),
            MeshMaterial3d(platform_material.clone()),
            Transform::from_translation(center),
            LevelGeometry,
        ));
    }

    // Sky backdrop, facing the camera
    commands.spawn((
        Mesh3d(meshes.add(Rectangle::new(30.0, 20.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.45, 0.7, 0.95),
            unlit: true,
            ..default()
        })),
        Transform::from_xyz(0.0, 10.0, -5.0),
        Backdrop,
    ));

    // Tree: trunk plus canopy
    let trunk_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.4, 0.25, 0.1),
        perceptual_roughness: 0.9,
        ..default()
    });
    let leaf_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.1, 0.5, 0.15),
        perceptual_roughness: 0.8,
        ..default()
    });
    commands.spawn((
        Mesh3d(meshes.add(Cylinder::new(0.2, 1.5))),
        MeshMaterial3d(trunk_material),
        Transform::from_xyz(-5.0, 0.75, -1.0),
        LevelGeometry,
    ));
    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(0.8))),
        MeshMaterial3d(leaf_material),
        Transform::from_xyz(-5.0, 2.0, -1.0),
        LevelGeometry,
    ));

    // Rock
    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(0.5))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.5, 0.5, 0.5),
            perceptual_roughness: 1.0,
            ..default()
        })),
        Transform::from_xyz(6.0, 0.3, -1.0).with_scale(Vec3::new(1.2, 0.7, 1.0)),
        LevelGeometry,
    ));
}

fn spawn_camera_and_lights(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            ..default()
        }),
        Transform::from_translation(CAMERA_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 400.0,
        ..default()
    });

    commands.spawn((
        DirectionalLight {
            illuminance: 8000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(10.0, 10.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}
