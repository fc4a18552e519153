//! World plugin - arena loading, setup, and physics pause.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::{GameState, PlayState};
use crate::player::{spawn_player, MovementConfig, Player};

use super::data::{load_arena_definition, ArenaDefinition};
use super::spawning::{spawn_camera, spawn_platform, ArenaGeometry};

/// World plugin - handles arena loading and world setup.
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_arena_definition)
            .add_systems(OnEnter(GameState::InGame), setup_arena)
            .add_systems(OnExit(GameState::InGame), cleanup_arena)
            // The controller systems stop on pause; the integrator has to
            // stop with them or the body keeps falling unattended.
            .add_systems(OnEnter(PlayState::Paused), suspend_physics)
            .add_systems(OnExit(PlayState::Paused), resume_physics);
    }
}

/// Build the arena and drop the player in.
pub fn setup_arena(
    mut commands: Commands,
    arena: Res<ArenaDefinition>,
    config: Res<MovementConfig>,
) {
    info!("Building arena with {} platforms", arena.platforms.len());

    spawn_camera(&mut commands);
    for platform in &arena.platforms {
        spawn_platform(&mut commands, platform);
    }

    spawn_player(&mut commands, arena.player_start(), &config);
}

/// Clean up arena entities when leaving InGame state.
fn cleanup_arena(
    mut commands: Commands,
    arena_query: Query<Entity, With<ArenaGeometry>>,
    player_query: Query<Entity, With<Player>>,
) {
    for entity in arena_query.iter() {
        commands.entity(entity).despawn_recursive();
    }
    for entity in player_query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}

fn suspend_physics(mut configs: Query<&mut RapierConfiguration>) {
    for mut config in configs.iter_mut() {
        config.physics_pipeline_active = false;
    }
}

fn resume_physics(mut configs: Query<&mut RapierConfiguration>) {
    for mut config in configs.iter_mut() {
        config.physics_pipeline_active = true;
    }
}
