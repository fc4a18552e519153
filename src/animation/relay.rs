//! Attack clip playback and the finish relay.
//!
//! The controller latches `is_attacking` and then waits: it never decides on
//! its own when an attack ends. These systems stand in for an animator. When
//! the latch rises they start a one-shot clip timer sized per combo step, and
//! when the timer fires they send [`AttackFinished`], which the player module
//! applies back to the controller.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;

use super::params::AnimationParams;
use crate::core::AttackFinished;
use crate::player::Player;

/// Where the clip timings live on disk.
pub const ANIMATION_CONFIG_PATH: &str = "assets/data/animation.ron";

/// Attack clip lengths in seconds, indexed by combo step.
///
/// The first two entries must stay at or below the combo window for the
/// three-hit chain to be reachable; the finisher may run longer.
#[derive(Resource, Clone, Debug, Deserialize)]
pub struct AnimationClips {
    pub attack_durations: [f32; 3],
}

impl Default for AnimationClips {
    fn default() -> Self {
        Self {
            attack_durations: [0.25, 0.25, 0.3],
        }
    }
}

impl AnimationClips {
    /// Load clip timings from RON file.
    pub fn load() -> Self {
        let path = ANIMATION_CONFIG_PATH;
        match fs::read_to_string(path) {
            Ok(contents) => match ron::from_str::<AnimationClips>(&contents) {
                Ok(clips) if clips.is_valid() => {
                    info!("Loaded animation clips from {}", path);
                    clips
                }
                Ok(_) => {
                    error!(
                        "Attack durations in {} must be zero or positive. Using defaults.",
                        path
                    );
                    Self::default()
                }
                Err(e) => {
                    error!("Failed to parse {}: {}. Using defaults.", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Could not read {}: {}. Using defaults.", path, e);
                Self::default()
            }
        }
    }

    /// Clip length for a combo step, saturating at the finisher.
    pub fn attack_duration(&self, combo_step: u8) -> f32 {
        self.attack_durations[usize::from(combo_step.min(2))]
    }

    fn is_valid(&self) -> bool {
        self.attack_durations.iter().all(|d| *d >= 0.0)
    }
}

/// System to load clip timings at startup.
pub fn load_animation_clips(mut commands: Commands) {
    let clips = AnimationClips::load();
    commands.insert_resource(clips);
}

/// One-shot playback of the attack clip currently showing.
///
/// Present only while a clip runs; removed when the timer fires.
#[derive(Component)]
pub struct AttackPlayback {
    pub timer: Timer,
    /// Which hit of the chain this clip represents.
    pub combo_step: u8,
}

/// Starts a clip timer when the attack latch rises.
///
/// While a clip is already running, further latch ticks are ignored; a press
/// mid-clip refreshes the combo window but never restarts playback.
pub fn start_attack_playback(
    mut commands: Commands,
    clips: Res<AnimationClips>,
    query: Query<(Entity, &AnimationParams), (With<Player>, Without<AttackPlayback>)>,
) {
    for (entity, params) in query.iter() {
        if !params.is_attacking {
            continue;
        }

        let step = params.combo_counter.min(2);
        commands.entity(entity).insert(AttackPlayback {
            timer: Timer::from_seconds(clips.attack_duration(step), TimerMode::Once),
            combo_step: step,
        });
    }
}

/// Ticks running clips and reports completion.
pub fn update_attack_playback(
    mut commands: Commands,
    time: Res<Time>,
    mut finished: EventWriter<AttackFinished>,
    mut query: Query<(Entity, &mut AttackPlayback)>,
) {
    for (entity, mut playback) in query.iter_mut() {
        playback.timer.tick(time.delta());

        if playback.timer.finished() {
            commands.entity(entity).remove::<AttackPlayback>();
            finished.send(AttackFinished { player: entity });
        }
    }
}
