//! Seat assignment records.

use crate::room::{RoomId, SeatPos};
use crate::roster::{Examinee, ExamineeId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One seated examinee: the output record of the placement engine.
///
/// Carries the examinee's group codes so a completed assignment set can be
/// audited for conflicts without consulting the roster again.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Assignment {
    /// The seated examinee.
    pub examinee: ExamineeId,

    /// Examinee's department code.
    pub department: String,

    /// Examinee's subject code.
    pub subject: String,

    /// Room the seat belongs to.
    pub room: RoomId,

    /// Grid coordinate of the seat.
    pub seat: SeatPos,
}

impl Assignment {
    /// Creates an assignment for an examinee at a seat.
    pub fn new(examinee: &Examinee, room: impl Into<RoomId>, seat: SeatPos) -> Self {
        Self {
            examinee: examinee.id.clone(),
            department: examinee.department.clone(),
            subject: examinee.subject.clone(),
            room: room.into(),
            seat,
        }
    }

    /// Returns true if the two assignments share a department or subject
    /// code.
    pub fn shares_group(&self, other: &Assignment) -> bool {
        self.department == other.department || self.subject == other.subject
    }
}
