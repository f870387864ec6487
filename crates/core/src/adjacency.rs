//! Seat adjacency policy.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum number of same-group orthogonal neighbors the moderate conflict
/// level tolerates before the placement engine reorders. With the default of
/// zero, any direct side-by-side pairing triggers a reorder while diagonal
/// neighbors and one-seat gaps pass.
pub const MODERATE_NEIGHBOR_TOLERANCE: usize = 0;

/// The four orthogonal neighbor offsets.
const ORTHOGONAL: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Orthogonal plus diagonal neighbor offsets.
const WITH_DIAGONALS: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Defines which coordinate deltas count as adjacent when evaluating
/// conflicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AdjacencyRule {
    /// Whether diagonal neighbors count as adjacent.
    pub include_diagonals: bool,
}

impl AdjacencyRule {
    /// Orthogonal neighbors only.
    pub fn orthogonal() -> Self {
        Self {
            include_diagonals: false,
        }
    }

    /// Orthogonal and diagonal neighbors.
    pub fn with_diagonals() -> Self {
        Self {
            include_diagonals: true,
        }
    }

    /// The neighbor offsets this rule treats as adjacent.
    pub fn deltas(&self) -> &'static [(i32, i32)] {
        if self.include_diagonals {
            &WITH_DIAGONALS
        } else {
            &ORTHOGONAL
        }
    }

    /// The subset of deltas pointing forward in row-major scan order.
    ///
    /// Scanning each assignment with forward deltas only visits every
    /// unordered seat pair exactly once.
    pub fn forward_deltas(&self) -> &'static [(i32, i32)] {
        if self.include_diagonals {
            &[(0, 1), (1, -1), (1, 0), (1, 1)]
        } else {
            &[(0, 1), (1, 0)]
        }
    }
}

/// Compass direction from one seat to an adjacent seat, recorded on each
/// reported conflict. Rows grow southward, columns eastward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// Maps a (row, col) delta to a direction. Returns `None` for deltas
    /// that are not unit-adjacent.
    pub fn from_delta(dr: i32, dc: i32) -> Option<Self> {
        match (dr, dc) {
            (-1, 0) => Some(Self::North),
            (-1, 1) => Some(Self::NorthEast),
            (0, 1) => Some(Self::East),
            (1, 1) => Some(Self::SouthEast),
            (1, 0) => Some(Self::South),
            (1, -1) => Some(Self::SouthWest),
            (0, -1) => Some(Self::West),
            (-1, -1) => Some(Self::NorthWest),
            _ => None,
        }
    }
}
