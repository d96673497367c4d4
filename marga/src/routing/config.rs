//! Solver configuration.

use serde::{Deserialize, Serialize};

/// What a search returns when it hits the iteration cap
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IterationLimitPolicy {
    /// Report no path, same as exhaustion
    #[default]
    NoPath,
    /// Report the explored partial path that got closest to the goal
    BestPartial,
}

/// When residual capacity is enforced
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapacityMode {
    /// Neighbours with zero residual capacity are never expanded
    #[default]
    DuringSearch,
    /// Search ignores capacity; a found path is rejected at commit time if
    /// any of its nodes is exhausted
    CommitOnly,
}

/// Order in which objectives are attempted
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectiveOrder {
    /// Input order
    #[default]
    AsSupplied,
    /// Ascending start-end Euclidean distance, stable on ties
    ShortestFirst,
}

/// Multi-objective solver configuration
#[derive(Clone, Debug, PartialEq)]
pub struct SolverConfig {
    /// Maximum dequeues per objective before giving up
    pub max_iterations: usize,
    /// Behaviour at the iteration cap
    pub iteration_limit: IterationLimitPolicy,
    /// Capacity enforcement point
    pub capacity_mode: CapacityMode,
    /// Objective ordering
    pub ordering: ObjectiveOrder,
    /// Multiplier on the Manhattan heuristic (0 = uniform-cost search).
    ///
    /// The heuristic is measured in plane units while path cost counts hops,
    /// so any positive weight gives weighted best-first search and paths are
    /// not guaranteed hop-minimal. Use 0 for fewest-hop paths.
    pub heuristic_weight: f32,
    /// Keep every dequeued partial path for diagnostics
    pub record_attempts: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: 10_000,
            iteration_limit: IterationLimitPolicy::NoPath,
            capacity_mode: CapacityMode::DuringSearch,
            ordering: ObjectiveOrder::AsSupplied,
            heuristic_weight: 1.0,
            record_attempts: true,
        }
    }
}

impl SolverConfig {
    /// Set the iteration cap
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the objective ordering
    pub fn with_ordering(mut self, ordering: ObjectiveOrder) -> Self {
        self.ordering = ordering;
        self
    }

    /// Set the capacity enforcement mode
    pub fn with_capacity_mode(mut self, mode: CapacityMode) -> Self {
        self.capacity_mode = mode;
        self
    }

    /// Set the iteration-cap policy
    pub fn with_iteration_limit(mut self, policy: IterationLimitPolicy) -> Self {
        self.iteration_limit = policy;
        self
    }

    /// Set the heuristic weight
    pub fn with_heuristic_weight(mut self, weight: f32) -> Self {
        self.heuristic_weight = weight;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SolverConfig::default();
        assert_eq!(config.max_iterations, 10_000);
        assert_eq!(config.iteration_limit, IterationLimitPolicy::NoPath);
        assert_eq!(config.capacity_mode, CapacityMode::DuringSearch);
        assert_eq!(config.ordering, ObjectiveOrder::AsSupplied);
        assert!(config.record_attempts);
    }

    #[test]
    fn test_policy_names() {
        let policy: IterationLimitPolicy = serde_yaml::from_str("best_partial").unwrap();
        assert_eq!(policy, IterationLimitPolicy::BestPartial);
        let mode: CapacityMode = serde_yaml::from_str("commit_only").unwrap();
        assert_eq!(mode, CapacityMode::CommitOnly);
        let order: ObjectiveOrder = serde_yaml::from_str("shortest_first").unwrap();
        assert_eq!(order, ObjectiveOrder::ShortestFirst);
    }
}
