//! Grid placement engine.
//!
//! Places one room's chunk of the ordered roster into the room's seat grid,
//! walking seats in row-major scan order and testing each candidate against
//! the neighbors already seated. Only earlier seats are ever occupied when a
//! seat is filled, so honoring the rule against placed neighbors makes it
//! hold symmetrically once the room is full.

use crate::planner::RoomPlan;
use log::debug;
use seatgrid_core::{
    AdjacencyRule, Assignment, ConflictLevel, Error, Examinee, Result, Room, SeatPos,
    MODERATE_NEIGHBOR_TOLERANCE,
};

/// Completed placement for a single room.
#[derive(Debug, Clone)]
pub struct RoomSeating {
    /// Assignments in seat scan order.
    pub assignments: Vec<Assignment>,

    /// Strict placements that violated the level after the lookahead was
    /// exhausted. Strict minimizes conflicts, it never aborts on them.
    pub forced_conflicts: usize,
}

/// Per-seat candidate search.
///
/// The engine consults a picker at every seat; swapping in a different
/// search (full backtracking, annealing) only requires a new implementation
/// of this trait.
pub trait SeatPicker: Send + Sync {
    /// Returns the index into `pending` of the examinee to seat next, given
    /// a predicate telling whether a candidate would violate the active
    /// conflict level at the current seat. `None` means no candidate within
    /// reach qualifies; the engine then seats the front examinee regardless.
    fn pick(&self, pending: &[Examinee], violates: &dyn Fn(&Examinee) -> bool) -> Option<usize>;
}

/// Default picker: bounded forward search, nearest non-conflicting first.
#[derive(Debug, Clone, Copy)]
pub struct LookaheadPicker {
    window: usize,
}

impl LookaheadPicker {
    /// Creates a picker that searches at most `window` examinees beyond the
    /// front of the remaining order.
    pub fn new(window: usize) -> Self {
        Self { window }
    }
}

impl SeatPicker for LookaheadPicker {
    fn pick(&self, pending: &[Examinee], violates: &dyn Fn(&Examinee) -> bool) -> Option<usize> {
        pending
            .iter()
            .take(self.window.saturating_add(1))
            .position(|candidate| !violates(candidate))
    }
}

/// Places one room's examinees, independent of every other room.
pub fn place(plan: &RoomPlan, level: ConflictLevel, picker: &dyn SeatPicker) -> Result<RoomSeating> {
    let room = &plan.room;
    if plan.examinees.len() > room.capacity {
        return Err(Error::CapacityInvariantBroken(format!(
            "room '{}' was handed {} examinees for capacity {}",
            room.id,
            plan.examinees.len(),
            room.capacity
        )));
    }

    let mut pending: Vec<Examinee> = plan.examinees.clone();
    let mut placed: Vec<(Examinee, SeatPos)> = Vec::with_capacity(pending.len());
    let mut grid: Vec<Option<usize>> = vec![None; room.rows * room.cols];
    let mut forced_conflicts = 0;

    for seat in room.seats() {
        if pending.is_empty() {
            break;
        }

        let violates =
            |candidate: &Examinee| violates_level(candidate, seat, &grid, &placed, room, level);
        let index = match picker.pick(&pending, &violates) {
            Some(i) => i,
            None => {
                // Unavoidable under the active level; seat the original
                // next examinee anyway.
                if level == ConflictLevel::Strict {
                    forced_conflicts += 1;
                    debug!(
                        "room '{}': no conflict-free candidate for seat {}, placing '{}' anyway",
                        room.id, seat, pending[0].id
                    );
                }
                0
            }
        };

        let examinee = pending.remove(index);
        grid[seat.row * room.cols + seat.col] = Some(placed.len());
        placed.push((examinee, seat));
    }

    if !pending.is_empty() {
        return Err(Error::CapacityInvariantBroken(format!(
            "room '{}' ran out of seats with {} examinees unplaced",
            room.id,
            pending.len()
        )));
    }

    let assignments = placed
        .iter()
        .map(|(examinee, seat)| Assignment::new(examinee, room.id.clone(), *seat))
        .collect();
    Ok(RoomSeating {
        assignments,
        forced_conflicts,
    })
}

/// Tests a candidate against the already-seated neighbors of `seat` under
/// the active conflict level.
fn violates_level(
    candidate: &Examinee,
    seat: SeatPos,
    grid: &[Option<usize>],
    placed: &[(Examinee, SeatPos)],
    room: &Room,
    level: ConflictLevel,
) -> bool {
    match level {
        ConflictLevel::Relaxed => false,
        ConflictLevel::Strict => AdjacencyRule::with_diagonals()
            .deltas()
            .iter()
            .filter_map(|&(dr, dc)| occupant(grid, placed, room, seat, dr, dc))
            .any(|neighbor| neighbor.shares_group(candidate)),
        ConflictLevel::Moderate => {
            let side_by_side = AdjacencyRule::orthogonal()
                .deltas()
                .iter()
                .filter_map(|&(dr, dc)| occupant(grid, placed, room, seat, dr, dc))
                .filter(|neighbor| neighbor.shares_group(candidate))
                .count();
            side_by_side > MODERATE_NEIGHBOR_TOLERANCE
        }
    }
}

/// The examinee already seated at `seat + (dr, dc)`, if any.
fn occupant<'a>(
    grid: &[Option<usize>],
    placed: &'a [(Examinee, SeatPos)],
    room: &Room,
    seat: SeatPos,
    dr: i32,
    dc: i32,
) -> Option<&'a Examinee> {
    let row = seat.row as i32 + dr;
    let col = seat.col as i32 + dc;
    if row < 0 || col < 0 || row >= room.rows as i32 || col >= room.cols as i32 {
        return None;
    }
    grid[row as usize * room.cols + col as usize].map(|i| &placed[i].0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn examinee(id: &str, dept: &str, subject: &str) -> Examinee {
        Examinee::new(id, id, dept, subject)
    }

    fn plan_for(room: Room, examinees: Vec<Examinee>) -> RoomPlan {
        RoomPlan { room, examinees }
    }

    fn seated_ids(seating: &RoomSeating) -> Vec<&str> {
        seating
            .assignments
            .iter()
            .map(|a| a.examinee.as_str())
            .collect()
    }

    #[test]
    fn test_strict_reorders_to_avoid_conflicts() {
        let plan = plan_for(
            Room::new("R", 1, 4),
            vec![
                examinee("X1", "X", "SX"),
                examinee("X2", "X", "SX"),
                examinee("Y1", "Y", "SY"),
                examinee("Y2", "Y", "SY"),
            ],
        );
        let seating = place(&plan, ConflictLevel::Strict, &LookaheadPicker::new(16)).unwrap();
        assert_eq!(seated_ids(&seating), vec!["X1", "Y1", "X2", "Y2"]);
        assert_eq!(seating.forced_conflicts, 0);
    }

    #[test]
    fn test_strict_records_unavoidable_conflicts() {
        // All four cells of a 2x2 grid are mutually adjacent under the
        // strict rule, so two pairs cannot be fully separated.
        let plan = plan_for(
            Room::new("R", 2, 2),
            vec![
                examinee("A", "X", "SX"),
                examinee("B", "X", "SX"),
                examinee("C", "Y", "SY"),
                examinee("D", "Y", "SY"),
            ],
        );
        let seating = place(&plan, ConflictLevel::Strict, &LookaheadPicker::new(16)).unwrap();
        assert_eq!(seating.assignments.len(), 4);
        assert!(seating.forced_conflicts >= 1);
    }

    #[test]
    fn test_moderate_blocks_side_by_side_only() {
        // X at (0,0); moderate must keep the second X off (0,1) and (1,0)
        // but tolerates the diagonal (1,1).
        let plan = plan_for(
            Room::new("R", 2, 2),
            vec![
                examinee("X1", "X", "SX"),
                examinee("Y1", "Y", "SY"),
                examinee("X2", "X", "SX"),
                examinee("Y2", "Y", "SY"),
            ],
        );
        let seating = place(&plan, ConflictLevel::Moderate, &LookaheadPicker::new(16)).unwrap();
        // Scan order (0,0) (0,1) (1,0) (1,1): X2 is deferred from (1,0) in
        // favor of Y2 and lands on the diagonal.
        assert_eq!(seated_ids(&seating), vec!["X1", "Y1", "Y2", "X2"]);
        assert_eq!(seating.forced_conflicts, 0);
    }

    #[test]
    fn test_relaxed_never_reorders() {
        let plan = plan_for(
            Room::new("R", 1, 4),
            vec![
                examinee("X1", "X", "SX"),
                examinee("X2", "X", "SX"),
                examinee("Y1", "Y", "SY"),
                examinee("Y2", "Y", "SY"),
            ],
        );
        let seating = place(&plan, ConflictLevel::Relaxed, &LookaheadPicker::new(16)).unwrap();
        assert_eq!(seated_ids(&seating), vec!["X1", "X2", "Y1", "Y2"]);
        assert_eq!(seating.forced_conflicts, 0);
    }

    #[test]
    fn test_zero_lookahead_forces_in_order() {
        let plan = plan_for(
            Room::new("R", 1, 4),
            vec![
                examinee("X1", "X", "SX"),
                examinee("X2", "X", "SX"),
                examinee("Y1", "Y", "SY"),
                examinee("Y2", "Y", "SY"),
            ],
        );
        let seating = place(&plan, ConflictLevel::Strict, &LookaheadPicker::new(0)).unwrap();
        assert_eq!(seated_ids(&seating), vec!["X1", "X2", "Y1", "Y2"]);
        assert_eq!(seating.forced_conflicts, 2);
    }

    #[test]
    fn test_aisles_are_never_seated() {
        let room = Room::new("R", 1, 5).with_aisle(0, 2);
        let plan = plan_for(
            room,
            vec![
                examinee("X1", "X", "SX"),
                examinee("X2", "X", "SX"),
                examinee("X3", "X", "SX"),
            ],
        );
        // Same department throughout: the aisle at (0,2) is the only break.
        let seating = place(&plan, ConflictLevel::Moderate, &LookaheadPicker::new(16)).unwrap();
        let seats: Vec<SeatPos> = seating.assignments.iter().map(|a| a.seat).collect();
        assert!(!seats.contains(&SeatPos::new(0, 2)));
        assert_eq!(seating.assignments.len(), 3);
    }

    #[test]
    fn test_overflow_is_contract_violation() {
        let plan = plan_for(
            Room::new("R", 2, 2),
            (0..5).map(|i| examinee(&format!("S{i}"), "X", "SX")).collect(),
        );
        let err = place(&plan, ConflictLevel::Relaxed, &LookaheadPicker::new(0)).unwrap_err();
        assert!(matches!(err, Error::CapacityInvariantBroken(_)));
    }

    #[test]
    fn test_capacity_below_grid_size_is_respected() {
        // 2x2 grid capped at 3 seats; 3 examinees fill the first three
        // scan-order cells.
        let room = Room::new("R", 2, 2).with_capacity(3);
        let plan = plan_for(
            room,
            vec![
                examinee("A", "X", "SX"),
                examinee("B", "Y", "SY"),
                examinee("C", "Z", "SZ"),
            ],
        );
        let seating = place(&plan, ConflictLevel::Strict, &LookaheadPicker::new(16)).unwrap();
        let seats: Vec<SeatPos> = seating.assignments.iter().map(|a| a.seat).collect();
        assert_eq!(
            seats,
            vec![SeatPos::new(0, 0), SeatPos::new(0, 1), SeatPos::new(1, 0)]
        );
    }
}
