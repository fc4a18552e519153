//! The flat parameter set the controller publishes for presentation.

use bevy::prelude::*;

/// Snapshot of the controller state that drives animation selection.
///
/// Written once per tick by the controller drive system; consumers treat it
/// as read-only. The fields deliberately carry no gameplay authority: clearing
/// the attack latch, for example, goes through [`crate::core::AttackFinished`]
/// rather than by writing back into this component.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimationParams {
    /// Vertical velocity as resolved this tick. Blend between jump rise and
    /// fall poses on the sign.
    pub y_velocity: f32,
    /// True when horizontal velocity is nonzero.
    pub is_moving: bool,
    /// Result of this tick's ground probe.
    pub is_grounded: bool,
    /// True while the dash timer is running.
    pub is_dashing: bool,
    /// True while the attack latch is set.
    pub is_attacking: bool,
    /// Which hit of the chain the next (or current) attack clip shows: 0, 1 or 2.
    pub combo_counter: u8,
}
