//! # Seatgrid Core
//!
//! Data model and policies for the seatgrid exam seating engine.
//!
//! This crate defines the types shared between the seating pipeline stages:
//! the examinee roster and room descriptors consumed by the engine, the
//! policy enums steering it, and the assignment/conflict records it
//! produces.
//!
//! ## Core Components
//!
//! - **Inputs**: [`Examinee`], [`Room`] - immutable descriptors owned by the
//!   caller
//! - **Policies**: [`ArrangeStrategy`], [`ConflictLevel`],
//!   [`UtilizationPolicy`], [`AdjacencyRule`]
//! - **Configuration**: [`Config`] - builder-style run configuration
//! - **Outputs**: [`Assignment`], [`ConflictReport`], [`SeatingResult`]
//! - **Collaborators**: [`RosterSource`], [`RoomSource`] - supplied by the
//!   caller, never implemented here
//!
//! ## Configuration
//!
//! ```rust
//! use seatgrid_core::{ArrangeStrategy, Config, ConflictLevel, UtilizationPolicy};
//!
//! let config = Config::new()
//!     .with_strategy(ArrangeStrategy::Mixed)
//!     .with_conflict_level(ConflictLevel::Strict)
//!     .with_utilization(UtilizationPolicy::Balanced)
//!     .with_seed(42);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod adjacency;
pub mod assignment;
pub mod config;
pub mod conflict;
pub mod error;
pub mod result;
pub mod room;
pub mod roster;
pub mod source;

// Re-exports
pub use adjacency::{AdjacencyRule, Direction, MODERATE_NEIGHBOR_TOLERANCE};
pub use assignment::Assignment;
pub use config::{ArrangeStrategy, Config, ConflictLevel, UtilizationPolicy, DEFAULT_LOOKAHEAD};
pub use conflict::{Conflict, ConflictReport, SharedKey};
pub use error::{Error, Result};
pub use result::{RoomOccupancy, SeatingResult, SeatingSummary};
pub use room::{Room, RoomId, SeatPos};
pub use roster::{Examinee, ExamineeId};
pub use source::{RoomSource, RosterSource};
