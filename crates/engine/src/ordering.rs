//! Roster grouping and ordering stage.
//!
//! Produces the total order the planner splits into per-room chunks. The
//! mixed arrangement is the only consumer of the run seed; it is consumed
//! here exactly once so downstream room placement stays deterministic no
//! matter how many rooms run concurrently.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use seatgrid_core::{ArrangeStrategy, Config, Error, Examinee, Result};
use std::collections::HashMap;

/// Orders the roster per the configured arrangement strategy.
pub fn order(roster: &[Examinee], config: &Config) -> Result<Vec<Examinee>> {
    let mut ordered = roster.to_vec();
    match config.strategy {
        ArrangeStrategy::Mixed => {
            let mut rng = StdRng::seed_from_u64(config.seed);
            ordered.shuffle(&mut rng);
        }
        ArrangeStrategy::DepartmentGrouped => {
            ordered.sort_by(|a, b| {
                a.department
                    .cmp(&b.department)
                    .then_with(|| a.subject.cmp(&b.subject))
                    .then_with(|| a.name.cmp(&b.name))
            });
        }
        ArrangeStrategy::Alphabetical => {
            ordered.sort_by(|a, b| a.name.cmp(&b.name));
        }
        ArrangeStrategy::Custom => {
            let custom = config.custom_order.as_ref().ok_or_else(|| {
                Error::InvalidStrategy("custom strategy requires an explicit order".into())
            })?;
            ordered = apply_custom_order(roster, custom)?;
        }
    }
    Ok(ordered)
}

/// Reorders the roster by the caller-supplied id list, validating that the
/// list and the roster describe the same set of examinees.
fn apply_custom_order(roster: &[Examinee], custom: &[String]) -> Result<Vec<Examinee>> {
    if custom.len() != roster.len() {
        return Err(Error::RosterMismatch(format!(
            "order lists {} ids but roster has {} examinees",
            custom.len(),
            roster.len()
        )));
    }

    let mut by_id: HashMap<&str, &Examinee> = HashMap::with_capacity(roster.len());
    for examinee in roster {
        if by_id.insert(examinee.id.as_str(), examinee).is_some() {
            return Err(Error::RosterMismatch(format!(
                "roster contains duplicate id '{}'",
                examinee.id
            )));
        }
    }

    let mut ordered = Vec::with_capacity(custom.len());
    for id in custom {
        match by_id.remove(id.as_str()) {
            Some(examinee) => ordered.push(examinee.clone()),
            None => {
                return Err(Error::RosterMismatch(format!(
                    "order names '{id}' which is not in the roster (or repeats it)"
                )))
            }
        }
    }
    Ok(ordered)
}
