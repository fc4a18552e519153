//! Duskrunner - a 2D action-platformer movement prototype in Bevy.
//!
//! The playable core is one finite-state controller: run, jump, dash, and a
//! three-hit attack chain, with facing resolved from velocity and a ground
//! probe deciding what the player may do. Physics integration and attack
//! clip timing live outside the controller and talk to it through narrow
//! seams.
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Game states, global events, pause flow
//! - **Player**: The controller state machine, input sampling, spawning
//! - **Animation**: Attack clip playback and the finish relay
//! - **World**: Arena layout, static colliders, camera

pub mod animation;
pub mod core;
pub mod player;
pub mod world;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
pub struct DuskrunnerPlugin;

impl Plugin for DuskrunnerPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)
            // Player systems
            .add_plugins(player::PlayerPlugin)
            // Animation systems
            .add_plugins(animation::AnimationPlugin)
            // World systems
            .add_plugins(world::WorldPlugin);
    }
}
