//! Controller glue: input sampling, the per-frame drive, and spawning.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::components::{Player, PlayerInput};
use super::config::{self, MovementConfig};
use super::controller::{PlayerController, TickInput};
use crate::animation::AnimationParams;
use crate::core::{AttackFinished, PlayState};
use crate::world::{ENVIRONMENT_GROUP, PLAYER_GROUP};

/// Capsule half height (cylindrical part) for the player body.
pub const PLAYER_CAPSULE_HALF_HEIGHT: f32 = 0.45;
/// Capsule cap radius. Bottom of the body sits 0.7 below its center.
pub const PLAYER_CAPSULE_RADIUS: f32 = 0.25;

/// Per-frame control flow. The sets run chained, so everything in `Tick`
/// observes the input sampled this frame, and everything in `Presentation`
/// observes this frame's controller output.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ControlSet {
    /// Device sampling into [`PlayerInput`].
    Input,
    /// Controller tick and controller-side event application.
    Tick,
    /// Animation playback reacting to the published parameters.
    Presentation,
}

/// Set up the control systems and their ordering.
pub fn setup_control_systems(app: &mut App) {
    app.init_resource::<PlayerInput>()
        .configure_sets(
            Update,
            (ControlSet::Input, ControlSet::Tick, ControlSet::Presentation)
                .chain()
                .run_if(in_state(PlayState::Running)),
        )
        .add_systems(Startup, config::load_movement_config)
        .add_systems(Update, sample_input.in_set(ControlSet::Input))
        .add_systems(
            Update,
            // Finish events from the previous frame's playback clear the
            // latch before this frame's tick resolves velocity.
            (apply_attack_finished, drive_controller)
                .chain()
                .in_set(ControlSet::Tick),
        );
}

/// Sample keyboard and mouse state into [`PlayerInput`].
pub fn sample_input(
    keyboard: Option<Res<ButtonInput<KeyCode>>>,
    mouse: Option<Res<ButtonInput<MouseButton>>>,
    mut input: ResMut<PlayerInput>,
) {
    // Device resources are absent in headless runs; leave the sampled
    // values to whoever wrote them.
    let (Some(keyboard), Some(mouse)) = (keyboard, mouse) else {
        return;
    };

    let mut axis = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        axis -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        axis += 1.0;
    }

    input.axis = axis;
    input.attack_pressed =
        mouse.just_pressed(MouseButton::Left) || keyboard.just_pressed(KeyCode::KeyJ);
    input.jump_pressed =
        keyboard.just_pressed(KeyCode::Space) || keyboard.just_pressed(KeyCode::KeyK);
    input.dash_pressed =
        keyboard.just_pressed(KeyCode::ShiftLeft) || keyboard.just_pressed(KeyCode::KeyL);
}

/// Run the controller once for this frame.
///
/// Probes for ground, feeds the sampled input and the integrator's vertical
/// velocity into the state machine, then writes the resolved velocity back to
/// the body, mirrors the sprite, and publishes the animation parameters.
pub fn drive_controller(
    time: Res<Time>,
    input: Res<PlayerInput>,
    rapier_context: Query<&RapierContext>,
    mut player_query: Query<
        (
            Entity,
            &Transform,
            &mut PlayerController,
            &mut Velocity,
            &mut Sprite,
            &mut AnimationParams,
        ),
        With<Player>,
    >,
) {
    let Ok((player_entity, transform, mut controller, mut velocity, mut sprite, mut params)) =
        player_query.get_single_mut()
    else {
        return;
    };

    // Downward probe from the body center against environment geometry only.
    let ground_hit = if let Ok(context) = rapier_context.get_single() {
        let ray_origin = transform.translation.truncate();
        let filter = QueryFilter::default()
            .exclude_collider(player_entity)
            .groups(CollisionGroups::new(Group::ALL, ENVIRONMENT_GROUP));

        context
            .cast_ray(
                ray_origin,
                Vec2::NEG_Y,
                controller.config().ground_check_distance,
                true,
                filter,
            )
            .is_some()
    } else {
        // Fallback: assume grounded if no physics context
        true
    };

    let tick_input = TickInput {
        axis: input.axis,
        attack_pressed: input.attack_pressed,
        jump_pressed: input.jump_pressed,
        dash_pressed: input.dash_pressed,
        ground_hit,
        vertical_velocity: velocity.linvel.y,
    };

    let output = controller.tick(time.delta_secs(), &tick_input);

    velocity.linvel = output.velocity;
    sprite.flip_x = !output.facing.is_right();
    *params = output.animation;
}

/// Apply attack-finished signals from the animation side.
pub fn apply_attack_finished(
    mut events: EventReader<AttackFinished>,
    mut player_query: Query<&mut PlayerController>,
) {
    for event in events.read() {
        if let Ok(mut controller) = player_query.get_mut(event.player) {
            controller.finish_attack();
        }
    }
}

/// Spawn the player entity with its physics body.
pub fn spawn_player(commands: &mut Commands, position: Vec2, config: &MovementConfig) -> Entity {
    let controller = PlayerController::new(config.clone()).unwrap_or_else(|e| {
        error!("Invalid movement config: {}. Using defaults.", e);
        PlayerController::with_defaults()
    });

    commands
        .spawn((
            Player,
            controller,
            AnimationParams::default(),
            Sprite {
                color: Color::srgb(0.85, 0.35, 0.25),
                custom_size: Some(Vec2::new(
                    PLAYER_CAPSULE_RADIUS * 2.0,
                    (PLAYER_CAPSULE_HALF_HEIGHT + PLAYER_CAPSULE_RADIUS) * 2.0,
                )),
                ..default()
            },
            Transform::from_translation(position.extend(0.0)),
            // Rapier physics components
            RigidBody::Dynamic,
            Collider::capsule_y(PLAYER_CAPSULE_HALF_HEIGHT, PLAYER_CAPSULE_RADIUS),
            Velocity::zero(),
            LockedAxes::ROTATION_LOCKED,
            // Horizontal velocity is authored by the controller, not by
            // contact friction.
            Friction {
                coefficient: 0.0,
                combine_rule: CoefficientCombineRule::Min,
            },
            CollisionGroups::new(PLAYER_GROUP, Group::ALL),
        ))
        .id()
}
