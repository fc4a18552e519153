//! Animation plugin - clip timings and attack playback.

use bevy::prelude::*;

use super::relay;
use crate::player::ControlSet;

/// Animation plugin - stands in for an animator on the presentation side.
pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        app
            .add_systems(Startup, relay::load_animation_clips)
            // Playback runs after the controller tick so the latch it reacts
            // to is this frame's.
            .add_systems(
                Update,
                (relay::start_attack_playback, relay::update_attack_playback)
                    .chain()
                    .in_set(ControlSet::Presentation),
            );
    }
}
