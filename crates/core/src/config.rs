//! Engine configuration and policy enums.

use crate::adjacency::AdjacencyRule;
use crate::error::Error;
use crate::roster::ExamineeId;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default bounded-lookahead window for the placement engine.
pub const DEFAULT_LOOKAHEAD: usize = 16;

/// How the roster is ordered before rooms are filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ArrangeStrategy {
    /// Seeded pseudo-random permutation.
    #[default]
    Mixed,
    /// Stable sort by department, then subject, then name.
    DepartmentGrouped,
    /// Stable sort by display name.
    Alphabetical,
    /// Caller-supplied total order (see [`Config::with_custom_order`]).
    Custom,
}

impl ArrangeStrategy {
    /// Strategy name recorded in results.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mixed => "mixed",
            Self::DepartmentGrouped => "department_grouped",
            Self::Alphabetical => "alphabetical",
            Self::Custom => "custom",
        }
    }
}

impl FromStr for ArrangeStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // "random" is the legacy alias for the mixed arrangement.
        match s {
            "mixed" | "random" => Ok(Self::Mixed),
            "department_wise" | "department" => Ok(Self::DepartmentGrouped),
            "alphabetical" => Ok(Self::Alphabetical),
            "custom" => Ok(Self::Custom),
            other => Err(Error::InvalidStrategy(format!(
                "unknown arrangement '{other}'"
            ))),
        }
    }
}

/// How aggressively the placement engine avoids same-group adjacency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConflictLevel {
    /// No same-group neighbors, orthogonal or diagonal; violations accepted
    /// only as a last resort and counted as forced.
    #[default]
    Strict,
    /// Direct side-by-side same-group neighbors trigger reordering; a
    /// diagonal neighbor or one-seat gap is tolerated.
    Moderate,
    /// Best effort: the supplied ordering is placed as-is and conflicts are
    /// only reported.
    Relaxed,
}

impl ConflictLevel {
    /// Level name recorded in results.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Moderate => "moderate",
            Self::Relaxed => "relaxed",
        }
    }

    /// The adjacency rule this level promises to uphold, used by the
    /// built-in post-placement audit.
    pub fn adjacency_rule(&self) -> AdjacencyRule {
        match self {
            Self::Strict => AdjacencyRule::with_diagonals(),
            Self::Moderate | Self::Relaxed => AdjacencyRule::orthogonal(),
        }
    }
}

impl FromStr for ConflictLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strict" => Ok(Self::Strict),
            "moderate" => Ok(Self::Moderate),
            "relaxed" => Ok(Self::Relaxed),
            other => Err(Error::InvalidStrategy(format!(
                "unknown conflict level '{other}'"
            ))),
        }
    }
}

/// How examinees are distributed across the available rooms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UtilizationPolicy {
    /// Fill each room to capacity before opening the next.
    #[default]
    Optimal,
    /// Spread the roster as evenly as capacities permit (spread <= 1).
    Balanced,
    /// Fill fully like `Optimal`, but prefer the smallest room that still
    /// holds the remaining roster.
    Minimal,
}

impl UtilizationPolicy {
    /// Policy name recorded in results.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Optimal => "optimal",
            Self::Balanced => "balanced",
            Self::Minimal => "minimal",
        }
    }
}

impl FromStr for UtilizationPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "optimal" => Ok(Self::Optimal),
            "balanced" => Ok(Self::Balanced),
            "minimal" => Ok(Self::Minimal),
            other => Err(Error::InvalidStrategy(format!(
                "unknown utilization policy '{other}'"
            ))),
        }
    }
}

/// Configuration for a seating generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Roster ordering strategy.
    pub strategy: ArrangeStrategy,

    /// Conflict-avoidance level.
    pub conflict_level: ConflictLevel,

    /// Room utilization policy.
    pub utilization: UtilizationPolicy,

    /// Seed for the mixed arrangement. Consumed once by the ordering stage,
    /// never by per-room placement, so results are reproducible regardless
    /// of how many rooms run concurrently.
    pub seed: u64,

    /// Forward-search window used when a placement would violate the active
    /// level. Ignored under [`ConflictLevel::Relaxed`].
    pub lookahead: usize,

    /// Explicit total order for [`ArrangeStrategy::Custom`].
    pub custom_order: Option<Vec<ExamineeId>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strategy: ArrangeStrategy::default(),
            conflict_level: ConflictLevel::default(),
            utilization: UtilizationPolicy::default(),
            seed: 0,
            lookahead: DEFAULT_LOOKAHEAD,
            custom_order: None,
        }
    }
}

impl Config {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the arrangement strategy.
    pub fn with_strategy(mut self, strategy: ArrangeStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the conflict-avoidance level.
    pub fn with_conflict_level(mut self, level: ConflictLevel) -> Self {
        self.conflict_level = level;
        self
    }

    /// Sets the room utilization policy.
    pub fn with_utilization(mut self, policy: UtilizationPolicy) -> Self {
        self.utilization = policy;
        self
    }

    /// Sets the shuffle seed for the mixed arrangement.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the placement lookahead window.
    pub fn with_lookahead(mut self, lookahead: usize) -> Self {
        self.lookahead = lookahead;
        self
    }

    /// Supplies the explicit order for the custom strategy.
    pub fn with_custom_order(mut self, order: Vec<ExamineeId>) -> Self {
        self.custom_order = Some(order);
        self.strategy = ArrangeStrategy::Custom;
        self
    }
}
