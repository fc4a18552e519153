//! Entity spawning functions for arena construction.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::data::PlatformDef;
use super::layers::ENVIRONMENT_GROUP;

/// How many world units one window pixel covers.
const CAMERA_SCALE: f32 = 0.02;

/// Marker for entities that belong to the loaded arena.
#[derive(Component)]
pub struct ArenaGeometry;

/// Spawn one static platform with its collider.
pub fn spawn_platform(commands: &mut Commands, platform: &PlatformDef) {
    let half = platform.half_extents();

    commands.spawn((
        ArenaGeometry,
        Sprite {
            color: Color::srgb(0.25, 0.23, 0.30),
            custom_size: Some(half * 2.0),
            ..default()
        },
        Transform::from_translation(platform.center().extend(0.0)),
        RigidBody::Fixed,
        Collider::cuboid(half.x, half.y),
        CollisionGroups::new(ENVIRONMENT_GROUP, Group::ALL),
    ));
}

/// Spawn the fixed 2D camera framing the arena.
pub fn spawn_camera(commands: &mut Commands) {
    commands.spawn((
        ArenaGeometry,
        Camera2d,
        OrthographicProjection {
            scale: CAMERA_SCALE,
            ..OrthographicProjection::default_2d()
        },
        Transform::from_xyz(0.0, 4.0, 0.0),
    ));
}
