//! Global events used for cross-system communication.
//!
//! Events let decoupled systems talk. The animation side finishes an attack
//! clip and sends [`AttackFinished`]; the player module picks it up and
//! clears the controller's attack latch. Neither side holds a reference to
//! the other.

use bevy::prelude::*;

/// Sent when the attack clip for an entity has run to its end.
///
/// Receiving this is the only way the controller's attack latch clears; the
/// controller itself never decides when an attack is over.
#[derive(Event)]
pub struct AttackFinished {
    /// The player entity whose attack presentation completed.
    pub player: Entity,
}
