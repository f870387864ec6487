//! # Seatgrid Engine
//!
//! Conflict-minimizing exam seat assignment over room grids.
//!
//! Given a roster of examinees tagged with department and subject codes and
//! a set of rooms with grid geometry, the engine produces an examinee →
//! (room, row, column) mapping that keeps same-group examinees apart per a
//! configurable conflict-avoidance level, plus a post-hoc audit of any
//! residual adjacency conflicts.
//!
//! ## Pipeline
//!
//! - [`ordering`] - orders the roster per the arrangement strategy
//! - [`planner`] - splits the ordered roster into per-room chunks
//! - [`placement`] - seats each room's chunk with bounded-lookahead repair
//! - [`validator`] - reports every residual adjacency conflict
//!
//! Room placements are independent of each other and run in parallel; the
//! shuffle seed is consumed once, up front, so a fixed configuration always
//! reproduces the same seating byte for byte.
//!
//! ## Quick Start
//!
//! ```rust
//! use seatgrid_engine::{Arranger, Config, ConflictLevel, Examinee, Room, UtilizationPolicy};
//!
//! let roster = vec![
//!     Examinee::new("S1", "Asha", "CS", "CS101"),
//!     Examinee::new("S2", "Ben", "CS", "CS101"),
//!     Examinee::new("S3", "Cora", "EE", "EE205"),
//!     Examinee::new("S4", "Dev", "ME", "ME301"),
//! ];
//! let rooms = vec![Room::new("HALL-1", 2, 3)];
//!
//! let config = Config::new()
//!     .with_conflict_level(ConflictLevel::Strict)
//!     .with_utilization(UtilizationPolicy::Optimal)
//!     .with_seed(42);
//!
//! let result = Arranger::new(config).arrange(&roster, &rooms).unwrap();
//! assert_eq!(result.seated_count(), 4);
//! println!(
//!     "seated {} examinees, {} conflicts",
//!     result.seated_count(),
//!     result.conflicts.len()
//! );
//! ```

pub mod arranger;
pub mod ordering;
pub mod placement;
pub mod planner;
pub mod validator;

pub use arranger::{generate_seating, validate_seating, Arranger};
pub use placement::{LookaheadPicker, RoomSeating, SeatPicker};
pub use planner::RoomPlan;
pub use seatgrid_core::{
    AdjacencyRule, ArrangeStrategy, Assignment, Config, Conflict, ConflictLevel, ConflictReport,
    Direction, Error, Examinee, ExamineeId, Result, Room, RoomId, RoomOccupancy, RoomSource,
    RosterSource, SeatPos, SeatingResult, SeatingSummary, SharedKey, UtilizationPolicy,
};
