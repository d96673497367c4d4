//! Sequential multi-objective solving over a shared capacity ledger.

use log::{debug, info, warn};
use std::sync::atomic::{AtomicBool, Ordering};

use super::config::{ObjectiveOrder, SolverConfig};
use super::ledger::CapacityLedger;
use super::objective::{Objective, ObjectiveSolution, RouteFailure, SolveResult};
use super::search::PathSearch;
use crate::mesh::MeshGraph;

/// Routes objectives one after another.
///
/// Each committed path consumes one traversal on every node it uses, so
/// later objectives are pushed off routes that earlier ones filled.
#[derive(Clone, Debug, Default)]
pub struct MultiObjectiveSolver {
    config: SolverConfig,
}

impl MultiObjectiveSolver {
    /// Create a solver
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Create with default configuration
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Solver configuration
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solve a batch with a fresh ledger seeded from `graph`
    pub fn solve(&self, objectives: &[Objective], graph: &MeshGraph) -> SolveResult {
        let mut ledger = CapacityLedger::for_graph(graph);
        self.run(objectives, graph, &mut ledger, None)
    }

    /// Solve a batch against a caller-owned ledger.
    ///
    /// The ledger keeps its consumption afterwards, so successive calls
    /// behave like one longer session.
    pub fn solve_with_ledger(
        &self,
        objectives: &[Objective],
        graph: &MeshGraph,
        ledger: &mut CapacityLedger,
    ) -> SolveResult {
        self.run(objectives, graph, ledger, None)
    }

    /// Solve a batch, stopping before the next objective once `cancel` is set.
    ///
    /// A search in progress always runs to completion. Objectives never
    /// attempted report [`RouteFailure::Cancelled`].
    pub fn solve_with_cancel(
        &self,
        objectives: &[Objective],
        graph: &MeshGraph,
        cancel: &AtomicBool,
    ) -> SolveResult {
        let mut ledger = CapacityLedger::for_graph(graph);
        self.run(objectives, graph, &mut ledger, Some(cancel))
    }

    fn run(
        &self,
        objectives: &[Objective],
        graph: &MeshGraph,
        ledger: &mut CapacityLedger,
        cancel: Option<&AtomicBool>,
    ) -> SolveResult {
        let mut result = SolveResult {
            solutions: objectives
                .iter()
                .map(|o| ObjectiveSolution::failed(o.id, RouteFailure::Cancelled, 0))
                .collect(),
            ..Default::default()
        };

        let order = self.attempt_order(objectives, graph);
        for (attempted, &i) in order.iter().enumerate() {
            if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                warn!(
                    "[Solver] cancelled after {} of {} objectives",
                    attempted,
                    objectives.len()
                );
                break;
            }

            let objective = &objectives[i];
            let mut solution = PathSearch::new(graph, ledger, &self.config)
                .find_path(objective, &mut result.attempted);

            if solution.is_routed() {
                if ledger.can_commit(&solution.path) {
                    ledger.commit(&solution.path);
                } else {
                    debug!(
                        "[Solver] FAILED: CapacityExhausted for {} ({} hops rejected)",
                        objective.id,
                        solution.hops()
                    );
                    solution = ObjectiveSolution::failed(
                        objective.id,
                        RouteFailure::CapacityExhausted,
                        solution.nodes_expanded,
                    );
                }
            }
            result.solutions[i] = solution;
        }

        result.recount();
        info!(
            "[Solver] routed {}/{} objectives, {} nodes expanded",
            result.stats.routed, result.stats.objectives, result.stats.nodes_expanded
        );
        result
    }

    /// Indices into `objectives` in attempt order
    fn attempt_order(&self, objectives: &[Objective], graph: &MeshGraph) -> Vec<usize> {
        let mut order: Vec<usize> = (0..objectives.len()).collect();
        if self.config.ordering == ObjectiveOrder::ShortestFirst {
            let lengths: Vec<f32> = objectives
                .iter()
                .map(|o| match (graph.node(o.start), graph.node(o.end)) {
                    (Some(s), Some(e)) => s.center().distance(&e.center()),
                    _ => f32::INFINITY,
                })
                .collect();
            // Stable, so equal lengths keep input order
            order.sort_by(|&a, &b| lengths[a].total_cmp(&lengths[b]));
        }
        order
    }
}

/// Solve a batch with the default configuration
pub fn solve(objectives: &[Objective], graph: &MeshGraph) -> SolveResult {
    MultiObjectiveSolver::with_defaults().solve(objectives, graph)
}
