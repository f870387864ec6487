//! Error types for seating generation.

use thiserror::Error;

/// Errors produced by the seating engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An unrecognized arrangement, conflict-level, or utilization token.
    #[error("invalid strategy: {0}")]
    InvalidStrategy(String),

    /// A custom order whose element set differs from the input roster.
    #[error("custom order does not match roster: {0}")]
    RosterMismatch(String),

    /// Total room capacity cannot hold the roster. The caller must add
    /// rooms or reduce the roster before retrying.
    #[error("insufficient capacity: need {required} seats, available {available}")]
    InsufficientCapacity { required: usize, available: usize },

    /// A room received more examinees than it has seats. Indicates a
    /// planner/engine contract bug, not a user error.
    #[error("capacity invariant broken: {0}")]
    CapacityInvariantBroken(String),

    /// A malformed room descriptor (zero dimensions, out-of-bounds aisle,
    /// capacity exceeding the assignable seat count).
    #[error("invalid room: {0}")]
    InvalidRoom(String),
}

/// Result type for seating operations.
pub type Result<T> = std::result::Result<T, Error>;
