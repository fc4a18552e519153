//! World module - the arena the controller runs in.

mod data;
mod error;
mod layers;
mod plugin;
mod spawning;

pub use data::{ArenaDefinition, PlatformDef, ARENA_CONFIG_PATH};
pub use error::DataError;
pub use layers::{ENVIRONMENT_GROUP, PLAYER_GROUP};
pub use plugin::{setup_arena, WorldPlugin};
pub use spawning::ArenaGeometry;
