//! Arena data structures and RON loading.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;

use super::error::DataError;

/// Where the arena layout lives on disk.
pub const ARENA_CONFIG_PATH: &str = "assets/data/arena.ron";

/// A single static platform: center position and full extents, world units.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PlatformDef {
    pub pos: (f32, f32),
    pub size: (f32, f32),
}

impl PlatformDef {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.pos.0, self.pos.1)
    }

    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.size.0 / 2.0, self.size.1 / 2.0)
    }
}

/// Arena layout loaded from RON.
#[derive(Resource, Debug, Clone, Deserialize)]
pub struct ArenaDefinition {
    /// Where the player drops in.
    pub player_start: (f32, f32),
    pub platforms: Vec<PlatformDef>,
}

impl Default for ArenaDefinition {
    fn default() -> Self {
        Self {
            player_start: (0.0, 2.0),
            platforms: vec![
                // Ground strip
                PlatformDef {
                    pos: (0.0, -0.5),
                    size: (24.0, 1.0),
                },
                // Side walls
                PlatformDef {
                    pos: (-12.5, 2.5),
                    size: (1.0, 7.0),
                },
                PlatformDef {
                    pos: (12.5, 2.5),
                    size: (1.0, 7.0),
                },
                // Floating platforms
                PlatformDef {
                    pos: (-5.0, 2.0),
                    size: (4.0, 0.5),
                },
                PlatformDef {
                    pos: (5.0, 3.5),
                    size: (4.0, 0.5),
                },
            ],
        }
    }
}

impl ArenaDefinition {
    /// Load the arena layout, falling back to the built-in one when the file
    /// is missing, malformed, or fails validation.
    pub fn load() -> Self {
        match Self::try_load(ARENA_CONFIG_PATH) {
            Ok(arena) => {
                info!(
                    "Loaded arena from {} ({} platforms)",
                    ARENA_CONFIG_PATH,
                    arena.platforms.len()
                );
                arena
            }
            Err(e @ DataError::Read { .. }) => {
                warn!("{}. Using the built-in arena.", e);
                Self::default()
            }
            Err(e) => {
                error!("{}. Using the built-in arena.", e);
                Self::default()
            }
        }
    }

    /// Read, parse and validate an arena file.
    pub fn try_load(path: &str) -> Result<Self, DataError> {
        let contents = fs::read_to_string(path).map_err(|e| DataError::Read {
            path: path.to_string(),
            details: e.to_string(),
        })?;
        let arena: Self = ron::from_str(&contents).map_err(|e| DataError::Parse {
            path: path.to_string(),
            details: e.to_string(),
        })?;
        arena.validate()?;
        Ok(arena)
    }

    /// Reject arenas that cannot produce usable colliders.
    pub fn validate(&self) -> Result<(), DataError> {
        if self.platforms.is_empty() {
            return Err(DataError::EmptyArena);
        }
        for (index, platform) in self.platforms.iter().enumerate() {
            if platform.size.0 <= 0.0 || platform.size.1 <= 0.0 {
                return Err(DataError::DegeneratePlatform {
                    index,
                    width: platform.size.0,
                    height: platform.size.1,
                });
            }
        }
        Ok(())
    }

    pub fn player_start(&self) -> Vec2 {
        Vec2::new(self.player_start.0, self.player_start.1)
    }
}

/// System to load the arena definition at startup.
pub fn load_arena_definition(mut commands: Commands) {
    let arena = ArenaDefinition::load();
    commands.insert_resource(arena);
}
