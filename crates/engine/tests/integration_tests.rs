//! Integration tests for seatgrid-engine.

use seatgrid_engine::{
    generate_seating, validate_seating, AdjacencyRule, ArrangeStrategy, Arranger, Config,
    ConflictLevel, Error, Examinee, Room, UtilizationPolicy,
};

fn examinee(id: &str, name: &str, dept: &str, subject: &str) -> Examinee {
    Examinee::new(id, name, dept, subject)
}

/// A roster spreading n examinees over the given (department, subject)
/// groups in round-robin order.
fn roster_over(groups: &[(&str, &str)], n: usize) -> Vec<Examinee> {
    (0..n)
        .map(|i| {
            let (dept, subject) = groups[i % groups.len()];
            examinee(
                &format!("S{i:03}"),
                &format!("Student {i:03}"),
                dept,
                subject,
            )
        })
        .collect()
}

mod roster_integrity_tests {
    use super::*;

    #[test]
    fn test_every_examinee_seated_exactly_once() {
        let roster = roster_over(&[("CS", "CS101"), ("EE", "EE205"), ("ME", "ME301")], 40);
        let rooms = vec![
            Room::new("A", 4, 5).with_priority(0),
            Room::new("B", 4, 5).with_priority(1),
            Room::new("C", 4, 5).with_priority(2),
        ];
        let result = generate_seating(&roster, &rooms, &Config::new().with_seed(9)).unwrap();

        assert_eq!(result.seated_count(), roster.len());

        let mut ids: Vec<&str> = result
            .assignments
            .iter()
            .map(|a| a.examinee.as_str())
            .collect();
        ids.sort_unstable();
        let mut expected: Vec<&str> = roster.iter().map(|e| e.id.as_str()).collect();
        expected.sort_unstable();
        assert_eq!(ids, expected);

        let mut seats: Vec<(&str, usize, usize)> = result
            .assignments
            .iter()
            .map(|a| (a.room.as_str(), a.seat.row, a.seat.col))
            .collect();
        seats.sort_unstable();
        seats.dedup();
        assert_eq!(seats.len(), roster.len());
    }

    #[test]
    fn test_room_counts_never_exceed_capacity() {
        let roster = roster_over(&[("CS", "CS101"), ("EE", "EE205")], 33);
        let rooms = vec![
            Room::new("A", 3, 4),
            Room::new("B", 3, 4),
            Room::new("C", 3, 4),
        ];
        for policy in [
            UtilizationPolicy::Optimal,
            UtilizationPolicy::Balanced,
            UtilizationPolicy::Minimal,
        ] {
            let config = Config::new().with_utilization(policy);
            let result = generate_seating(&roster, &rooms, &config).unwrap();
            for occupancy in &result.occupancy {
                assert!(
                    occupancy.seated <= occupancy.capacity,
                    "{} seats {} of {} under {:?}",
                    occupancy.room,
                    occupancy.seated,
                    occupancy.capacity,
                    policy
                );
            }
        }
    }

    #[test]
    fn test_aisle_cells_are_never_assigned() {
        let roster = roster_over(&[("CS", "CS101"), ("EE", "EE205")], 10);
        let rooms = vec![Room::new("A", 3, 4).with_aisle(0, 1).with_aisle(1, 1)];
        let result = generate_seating(&roster, &rooms, &Config::new()).unwrap();
        for assignment in &result.assignments {
            assert!(
                !(assignment.seat.col == 1 && assignment.seat.row < 2),
                "aisle cell {} was assigned",
                assignment.seat
            );
        }
    }
}

mod conflict_level_tests {
    use super::*;

    #[test]
    fn test_strict_is_clean_when_feasible() {
        // Two groups in a single row: X Y X Y separates both pairs.
        let roster = vec![
            examinee("X1", "Xa", "CS", "CS101"),
            examinee("X2", "Xb", "CS", "CS101"),
            examinee("Y1", "Ya", "EE", "EE205"),
            examinee("Y2", "Yb", "EE", "EE205"),
        ];
        let rooms = vec![Room::new("A", 1, 4)];
        let config = Config::new()
            .with_strategy(ArrangeStrategy::DepartmentGrouped)
            .with_conflict_level(ConflictLevel::Strict);
        let result = generate_seating(&roster, &rooms, &config).unwrap();
        assert!(result.conflicts.is_clean(), "{:?}", result.conflicts);
        assert_eq!(result.forced_conflicts, 0);
    }

    #[test]
    fn test_strict_is_clean_on_four_group_grid() {
        // Four groups of four in a 4x4 grid admit a diagonal-free layout;
        // strict must find it from the grouped order.
        let roster = roster_over(
            &[
                ("D0", "SUB0"),
                ("D1", "SUB1"),
                ("D2", "SUB2"),
                ("D3", "SUB3"),
            ],
            16,
        );
        let rooms = vec![Room::new("A", 4, 4)];
        let config = Config::new()
            .with_strategy(ArrangeStrategy::DepartmentGrouped)
            .with_conflict_level(ConflictLevel::Strict);
        let result = generate_seating(&roster, &rooms, &config).unwrap();
        assert!(result.conflicts.is_clean(), "{:?}", result.conflicts);
        assert_eq!(result.forced_conflicts, 0);
    }

    #[test]
    fn test_strict_records_but_never_aborts() {
        // All four cells of a 2x2 grid are mutually adjacent under the
        // strict rule; two same-department pairs cannot be separated.
        let roster = vec![
            examinee("A", "A", "X", "SX1"),
            examinee("B", "B", "X", "SX2"),
            examinee("C", "C", "Y", "SY1"),
            examinee("D", "D", "Y", "SY2"),
        ];
        let rooms = vec![Room::new("A", 2, 2)];
        let config = Config::new().with_conflict_level(ConflictLevel::Strict);
        let result = generate_seating(&roster, &rooms, &config).unwrap();

        assert_eq!(result.seated_count(), 4);
        assert!(!result.conflicts.is_clean());
        assert!(result.forced_conflicts >= 1);
    }

    #[test]
    fn test_moderate_tolerates_diagonals() {
        let roster = vec![
            examinee("X1", "Xa", "CS", "CS101"),
            examinee("Y1", "Ya", "EE", "EE205"),
            examinee("X2", "Xb", "CS", "CS101"),
            examinee("Y2", "Yb", "EE", "EE205"),
        ];
        let rooms = vec![Room::new("A", 2, 2)];
        let config = Config::new()
            .with_strategy(ArrangeStrategy::Custom)
            .with_custom_order(vec!["X1".into(), "Y1".into(), "X2".into(), "Y2".into()])
            .with_conflict_level(ConflictLevel::Moderate);
        let result = generate_seating(&roster, &rooms, &config).unwrap();

        // The level's own audit (orthogonal) is clean even though both
        // same-group pairs sit diagonally.
        assert!(result.conflicts.is_clean());
        let diagonal_audit =
            validate_seating(&result.assignments, AdjacencyRule::with_diagonals());
        assert_eq!(diagonal_audit.len(), 2);
    }

    #[test]
    fn test_relaxed_reports_without_reordering() {
        let roster = vec![
            examinee("X1", "Xa", "CS", "CS101"),
            examinee("X2", "Xb", "CS", "CS101"),
            examinee("Y1", "Ya", "EE", "EE205"),
            examinee("Y2", "Yb", "EE", "EE205"),
        ];
        let rooms = vec![Room::new("A", 1, 4)];
        let config = Config::new()
            .with_custom_order(vec![
                "X1".into(),
                "X2".into(),
                "Y1".into(),
                "Y2".into(),
            ])
            .with_conflict_level(ConflictLevel::Relaxed);
        let result = generate_seating(&roster, &rooms, &config).unwrap();

        // Order preserved verbatim: X1 X2 Y1 Y2 leaves two adjacent pairs.
        let ids: Vec<&str> = result
            .assignments
            .iter()
            .map(|a| a.examinee.as_str())
            .collect();
        assert_eq!(ids, vec!["X1", "X2", "Y1", "Y2"]);
        assert_eq!(result.conflicts.len(), 2);
        assert_eq!(result.forced_conflicts, 0);
    }
}

mod policy_tests {
    use super::*;

    #[test]
    fn test_balanced_even_split() {
        let roster = roster_over(&[("CS", "CS101"), ("EE", "EE205"), ("ME", "ME301")], 27);
        let rooms = vec![
            Room::new("A", 2, 5),
            Room::new("B", 2, 5),
            Room::new("C", 2, 5),
        ];
        let config = Config::new().with_utilization(UtilizationPolicy::Balanced);
        let result = generate_seating(&roster, &rooms, &config).unwrap();

        let counts: Vec<usize> = result.occupancy.iter().map(|o| o.seated).collect();
        assert_eq!(counts, vec![9, 9, 9]);
    }

    #[test]
    fn test_optimal_uses_fewest_rooms() {
        let roster = roster_over(&[("CS", "CS101"), ("EE", "EE205")], 18);
        let rooms = vec![
            Room::new("A", 2, 5).with_priority(0),
            Room::new("B", 2, 5).with_priority(1),
            Room::new("C", 2, 5).with_priority(2),
        ];
        let config = Config::new().with_utilization(UtilizationPolicy::Optimal);
        let result = generate_seating(&roster, &rooms, &config).unwrap();
        assert_eq!(result.rooms_used, 2);
    }

    #[test]
    fn test_minimal_avoids_wasting_large_rooms() {
        let roster = roster_over(&[("CS", "CS101"), ("EE", "EE205")], 8);
        let rooms = vec![Room::new("big", 10, 10), Room::new("small", 2, 5)];
        let config = Config::new().with_utilization(UtilizationPolicy::Minimal);
        let result = generate_seating(&roster, &rooms, &config).unwrap();

        assert_eq!(result.rooms_used, 1);
        assert_eq!(result.occupancy[0].room, "small");
    }
}

mod reproducibility_tests {
    use super::*;

    #[test]
    fn test_identical_inputs_identical_outputs() {
        let roster = roster_over(&[("CS", "CS101"), ("EE", "EE205"), ("ME", "ME301")], 50);
        let rooms = vec![Room::new("A", 5, 6), Room::new("B", 5, 6)];
        let config = Config::new()
            .with_strategy(ArrangeStrategy::Mixed)
            .with_conflict_level(ConflictLevel::Strict)
            .with_seed(20260806);

        let first = generate_seating(&roster, &rooms, &config).unwrap();
        let second = generate_seating(&roster, &rooms, &config).unwrap();
        assert_eq!(first.assignments, second.assignments);
        assert_eq!(first.conflicts, second.conflicts);
        assert_eq!(first.forced_conflicts, second.forced_conflicts);
        assert_eq!(first.occupancy, second.occupancy);
    }

    #[test]
    fn test_validator_is_idempotent() {
        let roster = roster_over(&[("CS", "CS101"), ("CS", "CS102")], 12);
        let rooms = vec![Room::new("A", 3, 4)];
        let config = Config::new().with_conflict_level(ConflictLevel::Relaxed);
        let result = generate_seating(&roster, &rooms, &config).unwrap();

        let rule = AdjacencyRule::with_diagonals();
        let first = validate_seating(&result.assignments, rule);
        let second = validate_seating(&result.assignments, rule);
        assert_eq!(first, second);
    }
}

mod error_tests {
    use super::*;

    #[test]
    fn test_insufficient_capacity_produces_no_assignments() {
        let roster = roster_over(&[("CS", "CS101")], 21);
        let rooms = vec![Room::new("A", 4, 5)];
        let err = generate_seating(&roster, &rooms, &Config::new()).unwrap_err();
        assert_eq!(
            err,
            Error::InsufficientCapacity {
                required: 21,
                available: 20
            }
        );
    }

    #[test]
    fn test_unknown_tokens_are_invalid_strategy() {
        assert!(matches!(
            "zigzag".parse::<ArrangeStrategy>(),
            Err(Error::InvalidStrategy(_))
        ));
        assert!(matches!(
            "chaotic".parse::<ConflictLevel>(),
            Err(Error::InvalidStrategy(_))
        ));
        assert!(matches!(
            "greedy".parse::<UtilizationPolicy>(),
            Err(Error::InvalidStrategy(_))
        ));
    }

    #[test]
    fn test_custom_order_mismatch() {
        let roster = roster_over(&[("CS", "CS101")], 3);
        let rooms = vec![Room::new("A", 2, 2)];
        let config = Config::new().with_custom_order(vec!["S000".into(), "S001".into()]);
        assert!(matches!(
            generate_seating(&roster, &rooms, &config),
            Err(Error::RosterMismatch(_))
        ));
    }

    #[test]
    fn test_malformed_room_is_rejected() {
        let roster = roster_over(&[("CS", "CS101")], 2);
        let rooms = vec![Room::new("A", 2, 2).with_capacity(9)];
        assert!(matches!(
            Arranger::with_defaults().arrange(&roster, &rooms),
            Err(Error::InvalidRoom(_))
        ));
    }
}
