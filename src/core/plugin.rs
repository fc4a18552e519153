//! Core plugin that sets up game states, events, and game flow.

use bevy::prelude::*;

use super::events::*;
use super::states::*;

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Game states (Loading, InGame and the Running/Paused sub-state)
/// - Global events (AttackFinished)
/// - Pause handling
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            // Initialize game states
            .init_state::<GameState>()
            .add_sub_state::<PlayState>()
            // Register global events
            .add_event::<AttackFinished>()
            // Loading state - transition to InGame when ready
            // Data files load during Startup, so nothing to wait for here
            .add_systems(OnEnter(GameState::Loading), transition_to_in_game)
            // Pause/unpause with Escape key
            .add_systems(
                Update,
                handle_pause_input.run_if(in_state(GameState::InGame)),
            );
    }
}

/// Immediately transition from Loading to InGame.
fn transition_to_in_game(mut next_state: ResMut<NextState<GameState>>) {
    next_state.set(GameState::InGame);
}

/// Handle Escape key to pause/unpause the game.
fn handle_pause_input(
    keyboard: Option<Res<ButtonInput<KeyCode>>>,
    current_state: Res<State<PlayState>>,
    mut next_state: ResMut<NextState<PlayState>>,
) {
    let Some(keyboard) = keyboard else {
        return;
    };

    if keyboard.just_pressed(KeyCode::Escape) {
        match current_state.get() {
            PlayState::Running => next_state.set(PlayState::Paused),
            PlayState::Paused => next_state.set(PlayState::Running),
        }
    }
}
