//! Player plugin - controller, input sampling, and spawning support.

use bevy::prelude::*;

use super::systems;

/// Player plugin - wires the controller state machine into the frame loop.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        systems::setup_control_systems(app);
    }
}
