//! Controller integration test
//!
//! Runs the full plugin stack headless with a fixed timestep and scripted
//! input, with the real physics integrator in the loop.
//!
//! Covered:
//! - spawn, settle on the ground, run, stop
//! - jump arc: leaves the ground, comes back, probe agrees
//! - dash: overrides velocity, cancels gravity, expires
//! - attack: roots the player, clip finish advances the combo, chain wraps
//! - airborne attack presses are ignored
//! - pause freezes body and controller
//! - two identical scripted runs stay bit-identical

use std::time::Duration;

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;
use bevy::transform::TransformPlugin;
use bevy_rapier2d::prelude::*;

use duskrunner::animation::AnimationParams;
use duskrunner::core::PlayState;
use duskrunner::player::{Player, PlayerInput};
use duskrunner::DuskrunnerPlugin;

const STEP: f64 = 1.0 / 60.0;

/// Helper: create a headless app with physics and the full game stack.
fn create_game_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin, TransformPlugin))
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
        .add_plugins(DuskrunnerPlugin)
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
            STEP,
        )));
    app
}

fn step(app: &mut App, ticks: usize) {
    for _ in 0..ticks {
        app.update();
    }
}

fn set_input(app: &mut App, input: PlayerInput) {
    *app.world_mut().resource_mut::<PlayerInput>() = input;
}

/// Helper: hold a pressed flag for exactly one tick, keeping the axis.
fn press(app: &mut App, input: PlayerInput) {
    set_input(app, input);
    app.update();
    set_input(
        app,
        PlayerInput {
            axis: input.axis,
            ..Default::default()
        },
    );
}

fn player_params(app: &mut App) -> AnimationParams {
    let world = app.world_mut();
    let mut query = world.query_filtered::<&AnimationParams, With<Player>>();
    *query.single(world)
}

fn try_player_params(app: &mut App) -> Option<AnimationParams> {
    let world = app.world_mut();
    let mut query = world.query_filtered::<&AnimationParams, With<Player>>();
    query.get_single(world).ok().copied()
}

fn player_velocity(app: &mut App) -> Vec2 {
    let world = app.world_mut();
    let mut query = world.query_filtered::<&Velocity, With<Player>>();
    query.single(world).linvel
}

fn player_position(app: &mut App) -> Vec2 {
    let world = app.world_mut();
    let mut query = world.query_filtered::<&Transform, With<Player>>();
    query.single(world).translation.truncate()
}

/// Helper: run until the player rests on the ground.
fn settle(app: &mut App) {
    let mut grounded = false;
    for _ in 0..240 {
        app.update();
        if try_player_params(app).is_some_and(|p| p.is_grounded) {
            grounded = true;
            break;
        }
    }
    assert!(grounded, "player never settled on the ground");

    // A few extra ticks so the landing contact stabilizes.
    step(app, 10);
}

/// Helper: run until the attack latch clears, at most `max_ticks`.
fn step_until_attack_clears(app: &mut App, max_ticks: usize) {
    for _ in 0..max_ticks {
        app.update();
        if !player_params(app).is_attacking {
            return;
        }
    }
    panic!("attack latch never cleared within {} ticks", max_ticks);
}

#[test]
fn settles_runs_and_stops() {
    let mut app = create_game_app();
    settle(&mut app);

    let params = player_params(&mut app);
    assert!(params.is_grounded);
    assert!(!params.is_moving);
    assert!(player_velocity(&mut app).y.abs() < 1.0);

    // Hold right for half a second.
    let start_x = player_position(&mut app).x;
    set_input(
        &mut app,
        PlayerInput {
            axis: 1.0,
            ..Default::default()
        },
    );
    for tick in 0..30 {
        app.update();
        let velocity = player_velocity(&mut app);
        assert!(
            (velocity.x - 5.0).abs() < 1e-3,
            "tick {}: expected run speed 5.0, got {}",
            tick,
            velocity.x
        );
    }
    assert!(player_params(&mut app).is_moving);
    assert!(player_position(&mut app).x > start_x + 2.0);

    // Release: the body stops on the spot.
    set_input(&mut app, PlayerInput::default());
    step(&mut app, 2);
    assert_eq!(player_velocity(&mut app).x, 0.0);
    assert!(!player_params(&mut app).is_moving);
}

#[test]
fn jump_rises_leaves_the_ground_and_lands() {
    let mut app = create_game_app();
    settle(&mut app);

    press(&mut app, PlayerInput {
        jump_pressed: true,
        ..Default::default()
    });
    assert_eq!(player_params(&mut app).y_velocity, 10.0);

    // A few ticks later the probe no longer reaches the ground and gravity
    // has started eating the launch velocity.
    step(&mut app, 5);
    let params = player_params(&mut app);
    assert!(!params.is_grounded);
    assert!(params.y_velocity > 0.0 && params.y_velocity < 10.0);

    let mut landed = false;
    for _ in 0..300 {
        app.update();
        let params = player_params(&mut app);
        if params.is_grounded && params.y_velocity <= 0.0 {
            landed = true;
            break;
        }
    }
    assert!(landed, "player never landed after the jump");
}

#[test]
fn dash_overrides_velocity_and_expires() {
    let mut app = create_game_app();
    settle(&mut app);

    press(&mut app, PlayerInput {
        dash_pressed: true,
        ..Default::default()
    });

    let params = player_params(&mut app);
    assert!(params.is_dashing);
    // The dash both sets the speed and cancels gravity for the tick.
    assert_eq!(params.y_velocity, 0.0);
    assert!((player_velocity(&mut app).x - 20.0).abs() < 1e-3);

    for tick in 0..5 {
        app.update();
        let params = player_params(&mut app);
        assert!(params.is_dashing, "tick {}: dash ended early", tick);
        assert_eq!(params.y_velocity, 0.0, "tick {}: gravity leaked in", tick);
        assert!((player_velocity(&mut app).x - 20.0).abs() < 1e-3);
    }

    // Well past the 0.2s duration the dash is over and, with no input held,
    // the body stands still.
    step(&mut app, 10);
    let params = player_params(&mut app);
    assert!(!params.is_dashing);
    assert_eq!(player_velocity(&mut app).x, 0.0);
}

#[test]
fn attack_roots_the_player_and_the_combo_chain_wraps() {
    let mut app = create_game_app();
    settle(&mut app);

    let run = PlayerInput {
        axis: 1.0,
        ..Default::default()
    };
    let run_and_attack = PlayerInput {
        axis: 1.0,
        attack_pressed: true,
        ..Default::default()
    };

    set_input(&mut app, run);
    step(&mut app, 5);

    // First hit: latch rises, horizontal velocity drops to zero even though
    // the axis stays held.
    press(&mut app, run_and_attack);
    for tick in 0..3 {
        let params = player_params(&mut app);
        assert!(params.is_attacking, "tick {}: latch dropped early", tick);
        assert_eq!(player_velocity(&mut app).x, 0.0);
        app.update();
    }
    step_until_attack_clears(&mut app, 25);
    assert_eq!(player_params(&mut app).combo_counter, 1);

    // Pressing right after the clip end lands inside the combo window, so
    // the chain continues instead of restarting.
    press(&mut app, run_and_attack);
    assert!(player_params(&mut app).is_attacking);
    assert_eq!(player_params(&mut app).combo_counter, 1);
    step_until_attack_clears(&mut app, 25);
    assert_eq!(player_params(&mut app).combo_counter, 2);

    // Third hit wraps the counter back to zero.
    press(&mut app, run_and_attack);
    step_until_attack_clears(&mut app, 30);
    assert_eq!(player_params(&mut app).combo_counter, 0);

    // With the latch gone the held axis moves the body again.
    app.update();
    assert!((player_velocity(&mut app).x - 5.0).abs() < 1e-3);
}

#[test]
fn airborne_attack_presses_are_ignored() {
    let mut app = create_game_app();
    settle(&mut app);

    press(&mut app, PlayerInput {
        jump_pressed: true,
        ..Default::default()
    });
    step(&mut app, 5);
    assert!(!player_params(&mut app).is_grounded);

    // Hammer the attack button all the way up; none of it sticks.
    set_input(
        &mut app,
        PlayerInput {
            attack_pressed: true,
            ..Default::default()
        },
    );
    for tick in 0..20 {
        app.update();
        let params = player_params(&mut app);
        if params.is_grounded {
            break;
        }
        assert!(
            !params.is_attacking,
            "tick {}: airborne press latched an attack",
            tick
        );
    }
}

#[test]
fn pause_freezes_the_body_and_the_controller() {
    let mut app = create_game_app();
    settle(&mut app);

    app.world_mut()
        .resource_mut::<NextState<PlayState>>()
        .set(PlayState::Paused);
    app.update();

    // Input held during pause must not move the body.
    let frozen_at = player_position(&mut app);
    set_input(
        &mut app,
        PlayerInput {
            axis: 1.0,
            ..Default::default()
        },
    );
    step(&mut app, 30);
    assert_eq!(player_position(&mut app), frozen_at);

    app.world_mut()
        .resource_mut::<NextState<PlayState>>()
        .set(PlayState::Running);
    step(&mut app, 5);
    assert!((player_velocity(&mut app).x - 5.0).abs() < 1e-3);
    assert!(player_position(&mut app).x > frozen_at.x);
}

#[test]
fn identical_scripted_runs_are_bit_identical() {
    let script = |app: &mut App| -> Vec<[f32; 4]> {
        settle(app);

        let mut trace = Vec::new();
        let record = |app: &mut App| {
            let position = player_position(app);
            let velocity = player_velocity(app);
            [position.x, position.y, velocity.x, velocity.y]
        };

        set_input(app, PlayerInput {
            axis: 1.0,
            ..Default::default()
        });
        for _ in 0..30 {
            app.update();
            trace.push(record(app));
        }

        press(app, PlayerInput {
            axis: 1.0,
            jump_pressed: true,
            ..Default::default()
        });
        for _ in 0..60 {
            app.update();
            trace.push(record(app));
        }

        press(app, PlayerInput {
            dash_pressed: true,
            ..Default::default()
        });
        for _ in 0..30 {
            app.update();
            trace.push(record(app));
        }

        trace
    };

    let mut first = create_game_app();
    let mut second = create_game_app();
    let trace_a = script(&mut first);
    let trace_b = script(&mut second);

    assert_eq!(trace_a, trace_b, "two identical runs diverged");
}
