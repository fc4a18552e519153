//! Collision group assignments.

use bevy_rapier2d::prelude::Group;

/// Static arena geometry. The ground probe filters to this group, so only
/// platforms and walls count as standable ground.
pub const ENVIRONMENT_GROUP: Group = Group::GROUP_1;

/// The player body.
pub const PLAYER_GROUP: Group = Group::GROUP_2;
