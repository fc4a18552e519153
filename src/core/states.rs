//! Game state definitions that control the overall flow of the game.
//!
//! States determine which systems run at any given time. The control and
//! animation systems only run while gameplay is active.

use bevy::prelude::*;

/// Main game states - controls overall game flow.
///
/// - Start in `Loading` while data files are read
/// - Enter `InGame` once the arena is ready
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Initial state - loading data files
    #[default]
    Loading,
    /// Active gameplay
    InGame,
}

/// Sub-states for gameplay - only active when GameState::InGame.
///
/// Pausing stays inside InGame so the arena and the player survive it;
/// leaving InGame is what tears the world down.
#[derive(SubStates, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
#[source(GameState = GameState::InGame)]
pub enum PlayState {
    /// Normal gameplay - the controller runs
    #[default]
    Running,
    /// Gameplay is frozen but the world stays visible
    Paused,
}
