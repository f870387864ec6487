//! Room allocation planning.
//!
//! Splits the ordered roster into contiguous per-room chunks before any
//! seat-level placement happens. Rooms are consumed in a deterministic
//! priority order and the planner never drops an examinee: if the roster
//! cannot fit, the whole run fails up front.

use log::debug;
use seatgrid_core::{Error, Examinee, Result, Room, UtilizationPolicy};

/// One room and the contiguous chunk of the ordered roster assigned to it.
#[derive(Debug, Clone)]
pub struct RoomPlan {
    /// The room to fill.
    pub room: Room,

    /// Examinees to seat in this room, in roster order.
    pub examinees: Vec<Examinee>,
}

/// Splits the ordered roster across the rooms per the utilization policy.
///
/// Rooms that would receive no examinees are dropped from the plan. Fails
/// with [`Error::InsufficientCapacity`] when the combined capacity cannot
/// hold the roster.
pub fn plan(
    ordered: &[Examinee],
    rooms: &[Room],
    policy: UtilizationPolicy,
) -> Result<Vec<RoomPlan>> {
    let available: usize = rooms.iter().map(|r| r.capacity).sum();
    if ordered.len() > available {
        return Err(Error::InsufficientCapacity {
            required: ordered.len(),
            available,
        });
    }

    let mut sorted: Vec<&Room> = rooms.iter().collect();
    sorted.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));

    let allocation = match policy {
        UtilizationPolicy::Optimal => fill_in_order(&sorted, ordered.len()),
        UtilizationPolicy::Balanced => balance_evenly(&sorted, ordered.len()),
        UtilizationPolicy::Minimal => prefer_smallest_sufficient(&sorted, ordered.len()),
    };

    let mut plans = Vec::new();
    let mut cursor = 0;
    for (room, count) in allocation {
        if count == 0 {
            continue;
        }
        plans.push(RoomPlan {
            room: room.clone(),
            examinees: ordered[cursor..cursor + count].to_vec(),
        });
        cursor += count;
    }
    debug_assert_eq!(cursor, ordered.len());

    debug!(
        "planned {} rooms for {} examinees ({})",
        plans.len(),
        ordered.len(),
        policy.name()
    );
    Ok(plans)
}

/// Fill each room to capacity before opening the next.
fn fill_in_order<'a>(sorted: &[&'a Room], total: usize) -> Vec<(&'a Room, usize)> {
    let mut remaining = total;
    sorted
        .iter()
        .map(|&room| {
            let take = room.capacity.min(remaining);
            remaining -= take;
            (room, take)
        })
        .collect()
}

/// Round-robin the roster across all rooms, capped by each capacity, so the
/// spread between any two rooms is at most one wherever capacities permit.
fn balance_evenly<'a>(sorted: &[&'a Room], total: usize) -> Vec<(&'a Room, usize)> {
    let mut counts = vec![0usize; sorted.len()];
    let mut assigned = 0;
    while assigned < total {
        for (i, room) in sorted.iter().enumerate() {
            if assigned == total {
                break;
            }
            if counts[i] < room.capacity {
                counts[i] += 1;
                assigned += 1;
            }
        }
    }
    sorted.iter().copied().zip(counts).collect()
}

/// Like `fill_in_order`, but at each step prefer the smallest room that can
/// hold the entire remaining roster; when none can, consume the largest.
fn prefer_smallest_sufficient<'a>(sorted: &[&'a Room], total: usize) -> Vec<(&'a Room, usize)> {
    let mut unused: Vec<&Room> = sorted.to_vec();
    let mut allocation = Vec::new();
    let mut remaining = total;

    while remaining > 0 {
        let smallest_sufficient = unused
            .iter()
            .enumerate()
            .filter(|(_, r)| r.capacity >= remaining)
            .min_by_key(|(_, r)| (r.capacity, r.sort_key()))
            .map(|(i, _)| i);
        let pick = match smallest_sufficient {
            Some(i) => i,
            // No single room fits the remainder: drain the largest.
            None => unused
                .iter()
                .enumerate()
                .max_by_key(|(_, r)| (r.capacity, std::cmp::Reverse(r.sort_key())))
                .map(|(i, _)| i)
                .expect("capacity precheck leaves at least one unused room"),
        };
        let room = unused.remove(pick);
        let take = room.capacity.min(remaining);
        remaining -= take;
        allocation.push((room, take));
    }
    allocation
}
