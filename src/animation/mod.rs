//! Animation module - controller-facing parameters and attack clip playback.

mod params;
mod plugin;
mod relay;

pub use params::AnimationParams;
pub use plugin::AnimationPlugin;
pub use relay::{AnimationClips, AttackPlayback, ANIMATION_CONFIG_PATH};
