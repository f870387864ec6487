//! Exam room descriptors.

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unique identifier for a room.
pub type RoomId = String;

/// A (row, column) coordinate within a room's grid, zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SeatPos {
    pub row: usize,
    pub col: usize,
}

impl SeatPos {
    /// Creates a seat position.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for SeatPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.row, self.col)
    }
}

/// An exam room: a rows x cols grid of cells, some of which may be aisles
/// rather than assignable seats.
///
/// Immutable input to the engine. `capacity` may be lower than the number
/// of assignable cells when the invigilation policy caps occupancy.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Room {
    /// Stable identity.
    pub id: RoomId,

    /// Number of grid rows.
    pub rows: usize,

    /// Number of grid columns.
    pub cols: usize,

    /// Maximum number of examinees this room may seat.
    pub capacity: usize,

    /// Optional ordering hint (building/floor precedence). Lower values are
    /// consumed first by the planner; rooms without a hint come last.
    pub priority: Option<u32>,

    /// Grid cells that are not assignable seats.
    pub aisles: Vec<SeatPos>,
}

impl Room {
    /// Creates a room whose capacity equals its full grid.
    pub fn new(id: impl Into<RoomId>, rows: usize, cols: usize) -> Self {
        Self {
            id: id.into(),
            rows,
            cols,
            capacity: rows * cols,
            priority: None,
            aisles: Vec::new(),
        }
    }

    /// Sets the declared capacity.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the planner ordering hint.
    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Marks a grid cell as an aisle (not an assignable seat).
    ///
    /// Marking a cell shrinks the capacity if it would otherwise exceed the
    /// remaining assignable seats.
    pub fn with_aisle(mut self, row: usize, col: usize) -> Self {
        let pos = SeatPos::new(row, col);
        if !self.aisles.contains(&pos) {
            self.aisles.push(pos);
        }
        self.capacity = self.capacity.min(self.assignable_seats());
        self
    }

    /// Returns true if the cell is an assignable seat.
    pub fn is_assignable(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols && !self.aisles.contains(&SeatPos::new(row, col))
    }

    /// Number of assignable cells in the grid.
    pub fn assignable_seats(&self) -> usize {
        let blocked = self
            .aisles
            .iter()
            .filter(|p| p.row < self.rows && p.col < self.cols)
            .count();
        self.rows * self.cols - blocked
    }

    /// Assignable seats in row-major scan order (top-left to bottom-right).
    ///
    /// This order is the placement order and must stay stable for
    /// reproducibility.
    pub fn seats(&self) -> impl Iterator<Item = SeatPos> + '_ {
        (0..self.rows)
            .flat_map(move |row| (0..self.cols).map(move |col| SeatPos::new(row, col)))
            .filter(move |p| self.is_assignable(p.row, p.col))
    }

    /// Deterministic planner ordering: priority hint first, identity as the
    /// tie-break.
    pub fn sort_key(&self) -> (u32, &str) {
        (self.priority.unwrap_or(u32::MAX), self.id.as_str())
    }

    /// Validates the room descriptor.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(Error::InvalidRoom(format!(
                "room '{}' has a degenerate {}x{} grid",
                self.id, self.rows, self.cols
            )));
        }
        if let Some(p) = self
            .aisles
            .iter()
            .find(|p| p.row >= self.rows || p.col >= self.cols)
        {
            return Err(Error::InvalidRoom(format!(
                "room '{}' has aisle {} outside its {}x{} grid",
                self.id, p, self.rows, self.cols
            )));
        }
        if self.capacity == 0 {
            return Err(Error::InvalidRoom(format!(
                "room '{}' has zero capacity",
                self.id
            )));
        }
        if self.capacity > self.assignable_seats() {
            return Err(Error::InvalidRoom(format!(
                "room '{}' declares capacity {} but has only {} assignable seats",
                self.id,
                self.capacity,
                self.assignable_seats()
            )));
        }
        Ok(())
    }
}
