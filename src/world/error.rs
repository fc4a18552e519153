//! Error types for arena data loading.

use thiserror::Error;

/// Errors that can occur when loading or validating arena data.
#[derive(Debug, Error)]
pub enum DataError {
    /// File could not be read.
    #[error("failed to read '{path}': {details}")]
    Read { path: String, details: String },

    /// RON parsing failed.
    #[error("parse error in '{path}': {details}")]
    Parse { path: String, details: String },

    /// An arena without a single platform has nothing to stand on.
    #[error("arena defines no platforms")]
    EmptyArena,

    /// Platforms need positive extents to produce a usable collider.
    #[error("platform {index} has degenerate size {width}x{height}")]
    DegeneratePlatform {
        index: usize,
        width: f32,
        height: f32,
    },
}
