//! Adjacency conflict reporting.

use crate::adjacency::Direction;
use crate::assignment::Assignment;
use crate::room::{RoomId, SeatPos};
use crate::roster::ExamineeId;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which group key two conflicting examinees share.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SharedKey {
    Department,
    Subject,
    Both,
}

impl SharedKey {
    /// Classifies the overlap between two assignments, or `None` when they
    /// share neither key.
    pub fn between(a: &Assignment, b: &Assignment) -> Option<Self> {
        match (a.department == b.department, a.subject == b.subject) {
            (true, true) => Some(Self::Both),
            (true, false) => Some(Self::Department),
            (false, true) => Some(Self::Subject),
            (false, false) => None,
        }
    }
}

/// A pair of adjacent assignments sharing a department or subject code.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Conflict {
    /// Room both seats belong to.
    pub room: RoomId,

    /// Examinee at the first seat (earlier in scan order).
    pub first: ExamineeId,

    /// Examinee at the adjacent seat.
    pub second: ExamineeId,

    /// Seat of `first`.
    pub first_seat: SeatPos,

    /// Seat of `second`.
    pub second_seat: SeatPos,

    /// Direction from `first_seat` to `second_seat`.
    pub direction: Direction,

    /// Which group key the pair shares.
    pub shared: SharedKey,
}

/// Every adjacency violation found in a completed assignment.
///
/// Purely derived from the assignments and the adjacency rule; never
/// mutated by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConflictReport {
    entries: Vec<Conflict>,
}

impl ConflictReport {
    /// Creates a report from the collected conflicts.
    pub fn new(entries: Vec<Conflict>) -> Self {
        Self { entries }
    }

    /// Returns true when no conflicts were found.
    pub fn is_clean(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of conflicting pairs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when the report is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the conflicting pairs.
    pub fn iter(&self) -> impl Iterator<Item = &Conflict> {
        self.entries.iter()
    }

    /// Distinct rooms containing at least one conflict, in report order.
    pub fn rooms(&self) -> Vec<&RoomId> {
        let mut rooms: Vec<&RoomId> = Vec::new();
        for c in &self.entries {
            if !rooms.contains(&&c.room) {
                rooms.push(&c.room);
            }
        }
        rooms
    }
}

impl IntoIterator for ConflictReport {
    type Item = Conflict;
    type IntoIter = std::vec::IntoIter<Conflict>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
