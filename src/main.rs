//! Duskrunner - Entry Point
//!
//! A small 2D action platformer: run, jump, dash, chain attacks.
//!
//! Controls:
//! - A/D or arrows: Move
//! - Space or K: Jump
//! - Left Shift or L: Dash
//! - Left Mouse or J: Attack
//! - Escape: Pause/Unpause

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

fn main() {
    App::new()
        // Bevy default plugins
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Duskrunner".to_string(),
                resolution: (1280.0, 720.0).into(),
                ..default()
            }),
            ..default()
        }))
        // Physics
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
        // Our game plugin
        .add_plugins(duskrunner::DuskrunnerPlugin)
        .run();
}
