//! Seating generation results.

use crate::assignment::Assignment;
use crate::conflict::ConflictReport;
use crate::room::RoomId;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Per-room occupancy after a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RoomOccupancy {
    /// Room identity.
    pub room: RoomId,

    /// Number of examinees seated in the room.
    pub seated: usize,

    /// The room's declared capacity.
    pub capacity: usize,
}

impl RoomOccupancy {
    /// Occupancy as a fraction of capacity (0.0 - 1.0).
    pub fn utilization(&self) -> f64 {
        if self.capacity == 0 {
            0.0
        } else {
            self.seated as f64 / self.capacity as f64
        }
    }
}

/// Result of a seating generation run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SeatingResult {
    /// One record per seated examinee, in room plan order then seat scan
    /// order.
    pub assignments: Vec<Assignment>,

    /// Residual adjacency conflicts found by the post-placement audit.
    pub conflicts: ConflictReport,

    /// Number of rooms that seat at least one examinee.
    pub rooms_used: usize,

    /// Per-room seated/capacity breakdown, in plan order.
    pub occupancy: Vec<RoomOccupancy>,

    /// Strict placements accepted with a conflict after the lookahead was
    /// exhausted.
    pub forced_conflicts: usize,

    /// Computation time in milliseconds.
    pub computation_time_ms: u64,

    /// Arrangement strategy used.
    pub strategy: Option<String>,
}

impl SeatingResult {
    /// Creates an empty result.
    pub fn new() -> Self {
        Self {
            assignments: Vec::new(),
            conflicts: ConflictReport::default(),
            rooms_used: 0,
            occupancy: Vec::new(),
            forced_conflicts: 0,
            computation_time_ms: 0,
            strategy: None,
        }
    }

    /// Number of seated examinees.
    pub fn seated_count(&self) -> usize {
        self.assignments.len()
    }

    /// Returns true when the audit found no residual conflicts.
    pub fn is_conflict_free(&self) -> bool {
        self.conflicts.is_clean()
    }

    /// Overall occupancy across the rooms used (0.0 - 1.0).
    pub fn overall_utilization(&self) -> f64 {
        let capacity: usize = self.occupancy.iter().map(|o| o.capacity).sum();
        if capacity == 0 {
            0.0
        } else {
            self.seated_count() as f64 / capacity as f64
        }
    }

    /// Sets the strategy name.
    pub fn with_strategy(mut self, strategy: impl Into<String>) -> Self {
        self.strategy = Some(strategy.into());
        self
    }
}

impl Default for SeatingResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Summary statistics for a seating result.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SeatingSummary {
    /// Total examinees seated.
    pub total_seated: usize,
    /// Rooms used.
    pub rooms_used: usize,
    /// Residual conflict pairs.
    pub conflict_count: usize,
    /// Average occupancy percentage across rooms used.
    pub occupancy_percent: f64,
    /// Computation time in milliseconds.
    pub time_ms: u64,
    /// Strategy used.
    pub strategy: String,
}

impl From<&SeatingResult> for SeatingSummary {
    fn from(result: &SeatingResult) -> Self {
        Self {
            total_seated: result.seated_count(),
            rooms_used: result.rooms_used,
            conflict_count: result.conflicts.len(),
            occupancy_percent: result.overall_utilization() * 100.0,
            time_ms: result.computation_time_ms,
            strategy: result
                .strategy
                .clone()
                .unwrap_or_else(|| "unknown".to_string()),
        }
    }
}
