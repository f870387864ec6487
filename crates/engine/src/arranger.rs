//! Seating generation entry point.

use crate::ordering;
use crate::placement::{self, LookaheadPicker, RoomSeating};
use crate::planner;
use crate::validator;
use log::debug;
use rayon::prelude::*;
use seatgrid_core::{
    AdjacencyRule, Assignment, Config, ConflictReport, Examinee, Result, Room, RoomOccupancy,
    RoomSource, RosterSource, SeatingResult,
};
use std::time::Instant;

/// Generates conflict-minimizing seat assignments for an exam session.
///
/// Holds the run configuration; one `Arranger` can serve any number of
/// sessions. Placement across rooms runs in parallel: each room depends
/// only on its own chunk of the ordered roster, and the ordered collect
/// keeps the output identical regardless of thread count.
pub struct Arranger {
    config: Config,
}

impl Arranger {
    /// Creates an arranger with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Creates an arranger with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(Config::new())
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Assigns every examinee to a seat and audits the outcome.
    ///
    /// Fails with `InsufficientCapacity` when the rooms cannot hold the
    /// roster; unavoidable adjacency conflicts are not errors and are
    /// surfaced through the returned report instead.
    pub fn arrange(&self, roster: &[Examinee], rooms: &[Room]) -> Result<SeatingResult> {
        let started = Instant::now();
        for room in rooms {
            room.validate()?;
        }

        let ordered = ordering::order(roster, &self.config)?;
        let plans = planner::plan(&ordered, rooms, self.config.utilization)?;

        let picker = LookaheadPicker::new(self.config.lookahead);
        let level = self.config.conflict_level;
        let seatings: Vec<RoomSeating> = plans
            .par_iter()
            .map(|plan| placement::place(plan, level, &picker))
            .collect::<Result<_>>()?;

        let mut result = SeatingResult::new().with_strategy(self.config.strategy.name());
        result.rooms_used = plans.len();
        for (plan, seating) in plans.iter().zip(&seatings) {
            result.occupancy.push(RoomOccupancy {
                room: plan.room.id.clone(),
                seated: seating.assignments.len(),
                capacity: plan.room.capacity,
            });
            result.forced_conflicts += seating.forced_conflicts;
        }
        result.assignments = seatings
            .into_iter()
            .flat_map(|s| s.assignments)
            .collect();
        result.conflicts = validator::validate(&result.assignments, level.adjacency_rule());
        result.computation_time_ms = started.elapsed().as_millis() as u64;

        debug!(
            "seated {} examinees in {} rooms, {} residual conflicts ({} forced)",
            result.seated_count(),
            result.rooms_used,
            result.conflicts.len(),
            result.forced_conflicts
        );
        Ok(result)
    }

    /// Assigns seats for a session described by collaborator sources.
    pub fn arrange_session(
        &self,
        roster: &impl RosterSource,
        rooms: &impl RoomSource,
    ) -> Result<SeatingResult> {
        self.arrange(&roster.roster(), &rooms.rooms())
    }
}

/// Generates a seating arrangement in one call.
///
/// Convenience over [`Arranger::arrange`] for callers without a long-lived
/// arranger.
pub fn generate_seating(
    roster: &[Examinee],
    rooms: &[Room],
    config: &Config,
) -> Result<SeatingResult> {
    Arranger::new(config.clone()).arrange(roster, rooms)
}

/// Audits a completed assignment under the given adjacency rule.
///
/// Policy-agnostic: reports every adjacent same-group pair regardless of
/// the conflict level that produced the assignments.
pub fn validate_seating(assignments: &[Assignment], rule: AdjacencyRule) -> ConflictReport {
    validator::validate(assignments, rule)
}
