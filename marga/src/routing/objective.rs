//! Objectives and their solutions.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{NodeId, ObjectiveId};

/// One start-to-end connection to route
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Objective {
    /// Identity, echoed back in the solution
    pub id: ObjectiveId,
    /// Resolved start node
    pub start: NodeId,
    /// Resolved end node
    pub end: NodeId,
}

impl Objective {
    /// Create an objective
    pub fn new(id: ObjectiveId, start: NodeId, end: NodeId) -> Self {
        Self { id, start, end }
    }
}

/// Why an objective carries no committed route
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteFailure {
    /// No node near the start point
    StartUnresolved,
    /// No node near the end point
    EndUnresolved,
    /// Start or end is not a node of the graph
    UnknownNode,
    /// Start node has no residual capacity left
    StartExhausted,
    /// Frontier emptied without reaching the end
    NoPath,
    /// Iteration cap reached first
    IterationLimit,
    /// Path found but a node on it is exhausted
    CapacityExhausted,
    /// Session cancelled before this objective was attempted
    Cancelled,
}

impl fmt::Display for RouteFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::StartUnresolved => "start point has no nearby node",
            Self::EndUnresolved => "end point has no nearby node",
            Self::UnknownNode => "endpoint is not in the graph",
            Self::StartExhausted => "start node capacity exhausted",
            Self::NoPath => "no path",
            Self::IterationLimit => "iteration limit reached",
            Self::CapacityExhausted => "capacity exhausted on path",
            Self::Cancelled => "cancelled",
        };
        f.write_str(text)
    }
}

/// Outcome for one objective.
///
/// An empty path means no route. A non-empty path with
/// `failure = Some(IterationLimit)` is a best-effort partial path that was
/// not committed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectiveSolution {
    /// Objective this answers
    pub objective_id: ObjectiveId,
    /// Node sequence from start to end, or empty
    pub path: Vec<NodeId>,
    /// Failure reason (`None` on success)
    pub failure: Option<RouteFailure>,
    /// States dequeued while searching
    pub nodes_expanded: usize,
}

impl ObjectiveSolution {
    pub(crate) fn routed(objective_id: ObjectiveId, path: Vec<NodeId>, nodes_expanded: usize) -> Self {
        Self {
            objective_id,
            path,
            failure: None,
            nodes_expanded,
        }
    }

    pub(crate) fn failed(
        objective_id: ObjectiveId,
        failure: RouteFailure,
        nodes_expanded: usize,
    ) -> Self {
        Self {
            objective_id,
            path: Vec::new(),
            failure: Some(failure),
            nodes_expanded,
        }
    }

    /// A complete route was found and committed
    pub fn is_routed(&self) -> bool {
        self.failure.is_none() && !self.path.is_empty()
    }

    /// Number of hops (edges) along the path
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// A dequeued partial path, kept for inspection only
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptedPath {
    /// Objective being searched
    pub objective_id: ObjectiveId,
    /// Partial path from the start node
    pub path: Vec<NodeId>,
}

/// Session counters
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveStats {
    /// Objectives in the batch
    pub objectives: usize,
    /// Objectives with a committed route
    pub routed: usize,
    /// Objectives without one (including cancelled)
    pub failed: usize,
    /// Objectives never attempted because of cancellation
    pub cancelled: usize,
    /// States dequeued across all searches
    pub nodes_expanded: usize,
}

/// Batch outcome
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveResult {
    /// One entry per input objective, in input order
    pub solutions: Vec<ObjectiveSolution>,
    /// Dequeued partial paths across all objectives, in search order
    pub attempted: Vec<AttemptedPath>,
    /// Session counters
    pub stats: SolveStats,
}

impl SolveResult {
    /// Solution for an objective
    pub fn solution(&self, id: ObjectiveId) -> Option<&ObjectiveSolution> {
        self.solutions.iter().find(|s| s.objective_id == id)
    }

    /// Routed solutions
    pub fn routed(&self) -> impl Iterator<Item = &ObjectiveSolution> {
        self.solutions.iter().filter(|s| s.is_routed())
    }

    /// Every objective was routed
    pub fn is_complete(&self) -> bool {
        self.solutions.iter().all(ObjectiveSolution::is_routed)
    }

    pub(crate) fn recount(&mut self) {
        self.stats.objectives = self.solutions.len();
        self.stats.routed = self.solutions.iter().filter(|s| s.is_routed()).count();
        self.stats.failed = self.stats.objectives - self.stats.routed;
        self.stats.cancelled = self
            .solutions
            .iter()
            .filter(|s| s.failure == Some(RouteFailure::Cancelled))
            .count();
        self.stats.nodes_expanded = self.solutions.iter().map(|s| s.nodes_expanded).sum();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solution_states() {
        let id = ObjectiveId::new(0);
        let ok = ObjectiveSolution::routed(id, vec![NodeId::new(1), NodeId::new(2)], 3);
        assert!(ok.is_routed());
        assert_eq!(ok.hops(), 1);

        let failed = ObjectiveSolution::failed(id, RouteFailure::NoPath, 8);
        assert!(!failed.is_routed());
        assert!(failed.path.is_empty());
        assert_eq!(failed.hops(), 0);

        let partial = ObjectiveSolution {
            failure: Some(RouteFailure::IterationLimit),
            ..ok.clone()
        };
        assert!(!partial.is_routed());
    }

    #[test]
    fn test_recount() {
        let mut result = SolveResult {
            solutions: vec![
                ObjectiveSolution::routed(ObjectiveId::new(0), vec![NodeId::new(0)], 1),
                ObjectiveSolution::failed(ObjectiveId::new(1), RouteFailure::NoPath, 4),
                ObjectiveSolution::failed(ObjectiveId::new(2), RouteFailure::Cancelled, 0),
            ],
            ..Default::default()
        };
        result.recount();
        assert_eq!(result.stats.objectives, 3);
        assert_eq!(result.stats.routed, 1);
        assert_eq!(result.stats.failed, 2);
        assert_eq!(result.stats.cancelled, 1);
        assert_eq!(result.stats.nodes_expanded, 5);
        assert!(!result.is_complete());
        assert!(result.solution(ObjectiveId::new(1)).is_some());
    }

    #[test]
    fn test_failure_yaml_names() {
        let yaml = serde_yaml::to_string(&RouteFailure::IterationLimit).unwrap();
        assert_eq!(yaml.trim(), "iteration_limit");
    }
}
