//! Examinee roster types.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unique identifier for an examinee.
pub type ExamineeId = String;

/// A student registered to sit an exam session.
///
/// Immutable input to the engine; owned by the upstream roster. The two
/// group keys (`department`, `subject`) are the only fields the conflict
/// rules consult.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Examinee {
    /// Stable identity.
    pub id: ExamineeId,

    /// Display name, used by the alphabetical arrangement.
    pub name: String,

    /// Department code.
    pub department: String,

    /// Subject code for the exam being sat.
    pub subject: String,
}

impl Examinee {
    /// Creates an examinee record.
    pub fn new(
        id: impl Into<ExamineeId>,
        name: impl Into<String>,
        department: impl Into<String>,
        subject: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            department: department.into(),
            subject: subject.into(),
        }
    }

    /// Returns true if the two examinees share a department or subject code.
    pub fn shares_group(&self, other: &Examinee) -> bool {
        self.department == other.department || self.subject == other.subject
    }
}
