//! Error types for fastcalo-core.

use thiserror::Error;

/// Result type alias for fastcalo operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for fastcalo operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Cylindrical radius is not finite (pseudorapidity of zero).
    #[error("degenerate radius: z / sinh(eta) is not finite for eta = {eta}, z = {z}")]
    DegenerateRadius { eta: f32, z: f32 },

    /// Planar radius overflowed or was built from non-finite coordinates.
    #[error("non-finite radius: sqrt(x^2 + y^2) is not finite for x = {x}, y = {y}")]
    NonFiniteRadius { x: f32, y: f32 },

    /// Batch columns disagree on the number of lanes.
    #[error("column {column} has {found} lanes, expected {expected}")]
    ColumnLengthMismatch {
        column: &'static str,
        expected: usize,
        found: usize,
    },

    /// Lane index past the end of the storage.
    #[error("lane {lane} out of range for {len} lanes")]
    LaneOutOfRange { lane: usize, len: usize },
}
