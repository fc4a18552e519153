//! Player module - the movement state machine and its engine glue.

mod components;
mod config;
mod controller;
mod plugin;
mod systems;

pub use components::{Player, PlayerInput};
pub use config::{ConfigError, MovementConfig, MOVEMENT_CONFIG_PATH};
pub use controller::{Facing, PlayerController, TickInput, TickOutput};
pub use plugin::PlayerPlugin;
pub use systems::{spawn_player, ControlSet};
