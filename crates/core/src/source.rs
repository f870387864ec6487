//! Collaborator interfaces supplied by the caller.
//!
//! The engine consumes rosters and room descriptors through these traits
//! and never implements them itself; enrollment, persistence, and session
//! management live upstream.

use crate::room::Room;
use crate::roster::Examinee;

/// Supplies the examinees registered for an exam session.
pub trait RosterSource {
    /// The roster for the session being seated.
    fn roster(&self) -> Vec<Examinee>;
}

/// Supplies the rooms available for an exam session.
pub trait RoomSource {
    /// Room descriptors with grid geometry and capacity.
    fn rooms(&self) -> Vec<Room>;
}

impl RosterSource for Vec<Examinee> {
    fn roster(&self) -> Vec<Examinee> {
        self.clone()
    }
}

impl RoomSource for Vec<Room> {
    fn rooms(&self) -> Vec<Room> {
        self.clone()
    }
}
