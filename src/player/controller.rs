//! The player controller state machine.
//!
//! A plain state object driven by an external loop: one [`PlayerController::tick`]
//! per frame, plus [`PlayerController::finish_attack`] applied from the
//! animation side when the attack clip ends. The controller knows nothing about
//! entities, colliders or input devices. Everything it reads arrives in a
//! [`TickInput`], everything it decides leaves in a [`TickOutput`], so the whole
//! state machine is testable without an engine.
//!
//! Movement, dashing and attacking coexist as independent flags and timers
//! rather than one exclusive enum. Velocity resolution gives them a strict
//! priority (attack lock, then dash, then free movement), and the dash guard's
//! `!is_attacking` check is what keeps attacking and dashing mutually
//! exclusive in practice.

use bevy::prelude::*;

use super::config::{ConfigError, MovementConfig};
use crate::animation::AnimationParams;

/// Signed horizontal orientation. The "facing right" view is derived from
/// this, never stored alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// +1.0 for right, -1.0 for left. Directs dash velocity.
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }

    pub fn is_right(self) -> bool {
        matches!(self, Facing::Right)
    }
}

/// Everything the controller reads from its collaborators for one tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Horizontal input axis in [-1, 1]. Discrete devices quantize to
    /// {-1, 0, 1}; anything outside the range is clamped.
    pub axis: f32,
    /// Attack was pressed this tick (edge, not held).
    pub attack_pressed: bool,
    /// Jump was pressed this tick.
    pub jump_pressed: bool,
    /// Dash was pressed this tick.
    pub dash_pressed: bool,
    /// Result of the downward ground probe for this tick.
    pub ground_hit: bool,
    /// Vertical velocity as the physics integrator left it after the
    /// previous step. Gravity lives out there, not in here.
    pub vertical_velocity: f32,
}

/// What the controller decided this tick.
#[derive(Debug, Clone, Copy)]
pub struct TickOutput {
    /// Velocity to hand to the physics integrator.
    pub velocity: Vec2,
    /// Orientation after facing resolution. Drives sprite mirroring.
    pub facing: Facing,
    /// Flat parameter set for the presentation side.
    pub animation: AnimationParams,
}

/// Finite-state movement controller for the player.
///
/// Construction validates the config; all runtime guards fail silently by
/// no-op, so a tick never errors.
#[derive(Component, Debug, Clone)]
pub struct PlayerController {
    config: MovementConfig,
    facing: Facing,
    velocity: Vec2,
    grounded: bool,
    // Countdown timers. They decrement every tick with no floor; once
    // negative they are threshold signals for the `< 0.0` guards, not
    // remaining durations.
    dash_timer: f32,
    dash_cooldown_timer: f32,
    combo_window_timer: f32,
    is_attacking: bool,
    combo_counter: u8,
}

impl PlayerController {
    /// Build a controller around validated tunables.
    pub fn new(config: MovementConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    /// Build a controller from the default tunables, which always validate.
    pub fn with_defaults() -> Self {
        Self::from_config(MovementConfig::default())
    }

    fn from_config(config: MovementConfig) -> Self {
        Self {
            config,
            facing: Facing::Right,
            velocity: Vec2::ZERO,
            // Starts airborne; the first tick's probe settles it.
            grounded: false,
            dash_timer: 0.0,
            dash_cooldown_timer: 0.0,
            combo_window_timer: 0.0,
            is_attacking: false,
            combo_counter: 0,
        }
    }

    /// Advance the state machine by one frame.
    ///
    /// Order matters and is part of the contract:
    /// timers run down first, then the pressed actions fire, then the probe
    /// result is adopted, then velocity and facing resolve. Because adoption
    /// happens after the actions, the jump and attack guards compare against
    /// the previous tick's grounded state, not this tick's probe.
    pub fn tick(&mut self, dt: f32, input: &TickInput) -> TickOutput {
        self.dash_timer -= dt;
        self.dash_cooldown_timer -= dt;
        self.combo_window_timer -= dt;

        let axis = input.axis.clamp(-1.0, 1.0);
        // The integrator owns gravity. Pick up whatever vertical velocity it
        // left on the body before any action touches it.
        self.velocity.y = input.vertical_velocity;

        if input.attack_pressed {
            self.start_attack();
        }
        if input.jump_pressed {
            self.jump();
        }
        if input.dash_pressed {
            self.start_dash();
        }

        self.grounded = input.ground_hit;

        self.resolve_velocity(axis);
        self.resolve_facing();

        TickOutput {
            velocity: self.velocity,
            facing: self.facing,
            animation: self.animation_params(),
        }
    }

    /// Begin an attack. No-op while airborne. When the combo window has
    /// already run out, the chain restarts from the first hit.
    pub fn start_attack(&mut self) {
        if !self.grounded {
            return;
        }

        if self.combo_window_timer < 0.0 {
            self.combo_counter = 0;
        }

        self.is_attacking = true;
        self.combo_window_timer = self.config.combo_window;
    }

    /// Begin a dash. No-op until the cooldown has counted through zero, and
    /// never while the attack latch is set. There is no grounded requirement:
    /// dashing mid-air is allowed.
    pub fn start_dash(&mut self) {
        if self.dash_cooldown_timer < 0.0 && !self.is_attacking {
            self.dash_cooldown_timer = self.config.dash_cooldown;
            self.dash_timer = self.config.dash_duration;
        }
    }

    /// Jump. No-op while airborne; horizontal velocity is left untouched.
    pub fn jump(&mut self) {
        if self.grounded {
            self.velocity.y = self.config.jump_force;
        }
    }

    /// Clear the attack latch and advance the combo chain.
    ///
    /// Called from the animation side when the attack clip ends. This is the
    /// only mutation besides [`Self::tick`] that reaches the controller.
    pub fn finish_attack(&mut self) {
        self.is_attacking = false;
        self.combo_counter += 1;
        if self.combo_counter > 2 {
            self.combo_counter = 0;
        }
    }

    /// Pick this tick's velocity source. First matching branch wins.
    fn resolve_velocity(&mut self, axis: f32) {
        if self.is_attacking {
            // Attacking roots the player horizontally; gravity still applies.
            self.velocity.x = 0.0;
        } else if self.dash_timer > 0.0 {
            // Dashing is horizontal-only and cancels gravity for its duration.
            self.velocity = Vec2::new(self.facing.sign() * self.config.dash_speed, 0.0);
        } else {
            self.velocity.x = axis * self.config.move_speed;
        }
    }

    /// Flip only when the resolved horizontal velocity disagrees with the
    /// current facing. Zero velocity never flips.
    fn resolve_facing(&mut self) {
        if self.velocity.x > 0.0 && self.facing == Facing::Left {
            self.facing = Facing::Right;
        } else if self.velocity.x < 0.0 && self.facing == Facing::Right {
            self.facing = Facing::Left;
        }
    }

    fn animation_params(&self) -> AnimationParams {
        AnimationParams {
            y_velocity: self.velocity.y,
            is_moving: self.velocity.x != 0.0,
            is_grounded: self.grounded,
            is_dashing: self.dash_timer > 0.0,
            is_attacking: self.is_attacking,
            combo_counter: self.combo_counter,
        }
    }

    pub fn config(&self) -> &MovementConfig {
        &self.config
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn is_attacking(&self) -> bool {
        self.is_attacking
    }

    pub fn is_dashing(&self) -> bool {
        self.dash_timer > 0.0
    }

    pub fn combo_counter(&self) -> u8 {
        self.combo_counter
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }
}
