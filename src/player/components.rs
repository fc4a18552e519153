//! Player-related components and the sampled input seam.

use bevy::prelude::*;

/// Marker component for the player entity.
#[derive(Component)]
pub struct Player;

/// Input sampled for one tick.
///
/// This is the seam between input devices and the controller: the sampling
/// system writes it from keyboard and mouse state, the drive system reads it,
/// and headless runs may write it directly. The pressed flags are
/// edge-triggered, true only on the tick of the press.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct PlayerInput {
    /// Horizontal axis in [-1, 1]; the keyboard quantizes to {-1, 0, 1}.
    pub axis: f32,
    pub attack_pressed: bool,
    pub jump_pressed: bool,
    pub dash_pressed: bool,
}
