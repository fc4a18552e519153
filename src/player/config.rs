//! Movement tunables loaded from an external RON file.
//!
//! Allows tweaking speeds, timers and the ground probe without recompilation.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;
use thiserror::Error;

/// Where the movement tunables live on disk.
pub const MOVEMENT_CONFIG_PATH: &str = "assets/data/player.ron";

/// Errors produced while loading or validating movement tunables.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read '{path}': {details}")]
    Read { path: String, details: String },
    #[error("could not parse '{path}': {details}")]
    Parse { path: String, details: String },
    /// Speeds, forces, durations and distances must all be zero or positive.
    #[error("movement config field '{field}' is negative ({value})")]
    NegativeValue { field: &'static str, value: f32 },
}

/// Tunables for the player controller.
///
/// All durations are in seconds, speeds in world units per second. Zero is
/// legal everywhere (a zero `dash_duration` makes the dash a no-op, a zero
/// `combo_window` makes every attack restart the chain); negative values are
/// rejected by [`MovementConfig::validate`].
#[derive(Resource, Clone, Debug, PartialEq, Deserialize)]
pub struct MovementConfig {
    /// Horizontal run speed.
    pub move_speed: f32,
    /// Vertical velocity applied on jump.
    pub jump_force: f32,
    /// Horizontal speed while a dash is active.
    pub dash_speed: f32,
    /// How long a dash lasts.
    pub dash_duration: f32,
    /// Delay before another dash may start, measured from dash start.
    pub dash_cooldown: f32,
    /// How long after an attack press the combo chain stays alive.
    pub combo_window: f32,
    /// Length of the downward ground probe, measured from the body center.
    pub ground_check_distance: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            jump_force: 10.0,
            dash_speed: 20.0,
            dash_duration: 0.2,
            dash_cooldown: 1.0,
            combo_window: 0.3,
            ground_check_distance: 0.8,
        }
    }
}

impl MovementConfig {
    /// Load movement tunables from RON, falling back to defaults when the
    /// file is missing, malformed, or fails validation.
    pub fn load() -> Self {
        match Self::try_load(MOVEMENT_CONFIG_PATH) {
            Ok(config) => {
                info!("Loaded movement config from {}", MOVEMENT_CONFIG_PATH);
                config
            }
            // A missing file is the expected dev setup, not a fault.
            Err(e @ ConfigError::Read { .. }) => {
                warn!("{}. Using defaults.", e);
                Self::default()
            }
            Err(e) => {
                error!("{}. Using defaults.", e);
                Self::default()
            }
        }
    }

    /// Load and validate movement tunables from a RON file.
    pub fn try_load(path: &str) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_string(),
            details: e.to_string(),
        })?;
        Self::from_ron(path, &contents)
    }

    /// Parse and validate a RON document.
    pub fn from_ron(path: &str, contents: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(contents).map_err(|e| ConfigError::Parse {
            path: path.to_string(),
            details: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations with negative fields.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("move_speed", self.move_speed),
            ("jump_force", self.jump_force),
            ("dash_speed", self.dash_speed),
            ("dash_duration", self.dash_duration),
            ("dash_cooldown", self.dash_cooldown),
            ("combo_window", self.combo_window),
            ("ground_check_distance", self.ground_check_distance),
        ] {
            if value < 0.0 {
                return Err(ConfigError::NegativeValue { field, value });
            }
        }
        Ok(())
    }
}

/// System to load the movement config at startup.
pub fn load_movement_config(mut commands: Commands) {
    let config = MovementConfig::load();
    commands.insert_resource(config);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(MovementConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_fields_are_legal() {
        let config = MovementConfig {
            move_speed: 0.0,
            jump_force: 0.0,
            dash_speed: 0.0,
            dash_duration: 0.0,
            dash_cooldown: 0.0,
            combo_window: 0.0,
            ground_check_distance: 0.0,
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn each_negative_field_is_rejected() {
        let make = |field: usize| {
            let mut config = MovementConfig::default();
            let slots: [&mut f32; 7] = [
                &mut config.move_speed,
                &mut config.jump_force,
                &mut config.dash_speed,
                &mut config.dash_duration,
                &mut config.dash_cooldown,
                &mut config.combo_window,
                &mut config.ground_check_distance,
            ];
            *slots[field] = -1.0;
            config
        };

        for field in 0..7 {
            let config = make(field);
            match config.validate() {
                Err(ConfigError::NegativeValue { value, .. }) => {
                    assert_eq!(value, -1.0);
                }
                other => panic!("field {} accepted a negative value: {:?}", field, other),
            }
        }
    }

    #[test]
    fn shipped_config_file_matches_defaults() {
        let config = MovementConfig::try_load(MOVEMENT_CONFIG_PATH).unwrap();
        assert_eq!(config, MovementConfig::default());
    }

    #[test]
    fn parses_ron_document() {
        let source = r#"(
            move_speed: 7.5,
            jump_force: 12.0,
            dash_speed: 25.0,
            dash_duration: 0.15,
            dash_cooldown: 0.8,
            combo_window: 0.4,
            ground_check_distance: 0.9,
        )"#;
        let config = MovementConfig::from_ron("inline", source).unwrap();
        assert_eq!(config.move_speed, 7.5);
        assert_eq!(config.combo_window, 0.4);
    }

    #[test]
    fn negative_field_in_ron_is_an_error() {
        let source = r#"(
            move_speed: 5.0,
            jump_force: 10.0,
            dash_speed: -20.0,
            dash_duration: 0.2,
            dash_cooldown: 1.0,
            combo_window: 0.3,
            ground_check_distance: 0.8,
        )"#;
        let err = MovementConfig::from_ron("inline", source).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::NegativeValue { field: "dash_speed", .. }
        ));
    }
}
