//! Solver configuration section.

use serde::{Deserialize, Serialize};

use crate::routing::{CapacityMode, IterationLimitPolicy, ObjectiveOrder, SolverConfig};

use super::defaults;

/// Solver configuration section
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SolverSection {
    /// Dequeue budget per objective
    #[serde(default = "defaults::max_iterations")]
    pub max_iterations: usize,

    /// "no_path" or "best_partial"
    #[serde(default)]
    pub iteration_limit: IterationLimitPolicy,

    /// "during_search" or "commit_only"
    #[serde(default)]
    pub capacity_mode: CapacityMode,

    /// "as_supplied" or "shortest_first"
    #[serde(default)]
    pub ordering: ObjectiveOrder,

    /// Multiplier on the Manhattan heuristic
    #[serde(default = "defaults::heuristic_weight")]
    pub heuristic_weight: f32,

    /// Keep dequeued partial paths for inspection
    #[serde(default = "defaults::enabled")]
    pub record_attempts: bool,
}

impl Default for SolverSection {
    fn default() -> Self {
        Self {
            max_iterations: 10_000,
            iteration_limit: IterationLimitPolicy::default(),
            capacity_mode: CapacityMode::default(),
            ordering: ObjectiveOrder::default(),
            heuristic_weight: 1.0,
            record_attempts: true,
        }
    }
}

impl SolverSection {
    /// Convert to SolverConfig
    pub fn to_solver_config(&self) -> SolverConfig {
        SolverConfig {
            max_iterations: self.max_iterations,
            iteration_limit: self.iteration_limit,
            capacity_mode: self.capacity_mode,
            ordering: self.ordering,
            heuristic_weight: self.heuristic_weight,
            record_attempts: self.record_attempts,
        }
    }
}
