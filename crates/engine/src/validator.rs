//! Post-hoc conflict validation.
//!
//! Re-scans a completed assignment and reports every adjacency violation
//! found, regardless of which conflict level produced it. Pure function of
//! its inputs, usable both as a post-condition check after generation and
//! as a standalone audit over stored assignments.

use seatgrid_core::{
    AdjacencyRule, Assignment, Conflict, ConflictReport, Direction, SeatPos, SharedKey,
};
use std::collections::HashMap;

/// Scans the assignments for adjacent same-group pairs under the rule.
///
/// Each unordered pair is reported exactly once, with the direction taken
/// from the seat earlier in scan order. Output order is deterministic:
/// assignments are visited sorted by (room, row, col).
pub fn validate(assignments: &[Assignment], rule: AdjacencyRule) -> ConflictReport {
    let mut sorted: Vec<&Assignment> = assignments.iter().collect();
    sorted.sort_by(|a, b| (&a.room, a.seat).cmp(&(&b.room, b.seat)));

    let mut by_seat: HashMap<(&str, SeatPos), &Assignment> = HashMap::with_capacity(sorted.len());
    for &assignment in &sorted {
        by_seat.insert((assignment.room.as_str(), assignment.seat), assignment);
    }

    let mut conflicts = Vec::new();
    for &assignment in &sorted {
        for &(dr, dc) in rule.forward_deltas() {
            let row = assignment.seat.row as i32 + dr;
            let col = assignment.seat.col as i32 + dc;
            if row < 0 || col < 0 {
                continue;
            }
            let neighbor_seat = SeatPos::new(row as usize, col as usize);
            let Some(&neighbor) = by_seat.get(&(assignment.room.as_str(), neighbor_seat)) else {
                continue;
            };
            let Some(shared) = SharedKey::between(assignment, neighbor) else {
                continue;
            };
            let direction = Direction::from_delta(dr, dc)
                .expect("forward deltas are unit-adjacent");
            conflicts.push(Conflict {
                room: assignment.room.clone(),
                first: assignment.examinee.clone(),
                second: neighbor.examinee.clone(),
                first_seat: assignment.seat,
                second_seat: neighbor.seat,
                direction,
                shared,
            });
        }
    }
    ConflictReport::new(conflicts)
}
