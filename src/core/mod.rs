//! Core game module - states, events, and game flow.
//!
//! This module provides the foundation that the other game systems build upon.

mod events;
mod plugin;
mod states;

pub use events::*;
pub use plugin::CorePlugin;
pub use states::*;
