//! Best-first search for a single objective.

use log::{debug, trace, warn};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::config::{CapacityMode, IterationLimitPolicy, SolverConfig};
use super::ledger::CapacityLedger;
use super::objective::{AttemptedPath, Objective, ObjectiveSolution, RouteFailure};
use crate::core::NodeId;
use crate::mesh::{MeshGraph, MeshNode};

/// Explored state: a node reached through `parent`
#[derive(Clone, Copy, Debug)]
struct Slot {
    node: usize,
    parent: Option<usize>,
    cost: u32,
}

/// Frontier entry; `seq` is the arena slot, so it is also insertion order
#[derive(Clone, Copy, Debug)]
struct FrontierEntry {
    priority: f32,
    seq: usize,
}

impl Eq for FrontierEntry {}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap behaviour; earlier insertion wins ties
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Search over a graph against a fixed ledger snapshot
pub(crate) struct PathSearch<'a> {
    graph: &'a MeshGraph,
    ledger: &'a CapacityLedger,
    config: &'a SolverConfig,
}

impl<'a> PathSearch<'a> {
    pub(crate) fn new(
        graph: &'a MeshGraph,
        ledger: &'a CapacityLedger,
        config: &'a SolverConfig,
    ) -> Self {
        Self {
            graph,
            ledger,
            config,
        }
    }

    /// Search one objective. Dequeued partial paths go to `attempts` when
    /// recording is enabled. The ledger is only read.
    pub(crate) fn find_path(
        &self,
        objective: &Objective,
        attempts: &mut Vec<AttemptedPath>,
    ) -> ObjectiveSolution {
        let (Some(start), Some(goal)) = (
            self.graph.index_of(objective.start),
            self.graph.index_of(objective.end),
        ) else {
            debug!(
                "[Solver] FAILED: UnknownNode for {} ({} -> {})",
                objective.id, objective.start, objective.end
            );
            return ObjectiveSolution::failed(objective.id, RouteFailure::UnknownNode, 0);
        };

        let respect_capacity = self.config.capacity_mode == CapacityMode::DuringSearch;
        if respect_capacity && !self.ledger.has_capacity(objective.start) {
            debug!(
                "[Solver] FAILED: StartExhausted for {} at {}",
                objective.id, objective.start
            );
            return ObjectiveSolution::failed(objective.id, RouteFailure::StartExhausted, 0);
        }

        trace!(
            "[Solver] find_path: {} start={} goal={}",
            objective.id, objective.start, objective.end
        );

        let nodes = self.graph.nodes();
        let goal_center = nodes[goal].center();
        let weight = self.config.heuristic_weight;
        let heuristic = |i: usize| nodes[i].center().manhattan_distance(&goal_center) * weight;

        let mut arena = vec![Slot {
            node: start,
            parent: None,
            cost: 0,
        }];
        let mut open_set = BinaryHeap::new();
        open_set.push(FrontierEntry {
            priority: heuristic(start),
            seq: 0,
        });
        let mut best_cost = vec![u32::MAX; nodes.len()];
        best_cost[start] = 0;
        let mut closed = vec![false; nodes.len()];

        // (distance to goal, slot) of the closest dequeued state
        let mut closest: Option<(f32, usize)> = None;
        let mut nodes_expanded = 0;

        while let Some(entry) = open_set.pop() {
            let slot = entry.seq;
            let Slot { node, cost, .. } = arena[slot];
            if closed[node] {
                continue;
            }
            closed[node] = true;
            nodes_expanded += 1;

            if self.config.record_attempts {
                attempts.push(AttemptedPath {
                    objective_id: objective.id,
                    path: rebuild(&arena, slot, nodes),
                });
            }

            if node == goal {
                let path = rebuild(&arena, slot, nodes);
                trace!(
                    "[Solver] SUCCESS: {} in {} hops, {} nodes expanded",
                    objective.id,
                    path.len() - 1,
                    nodes_expanded
                );
                return ObjectiveSolution::routed(objective.id, path, nodes_expanded);
            }

            let remaining = nodes[node].center().manhattan_distance(&goal_center);
            if closest.is_none_or(|(d, _)| remaining < d) {
                closest = Some((remaining, slot));
            }

            if nodes_expanded > self.config.max_iterations {
                return self.iteration_limit(objective, &arena, closest, nodes_expanded);
            }

            for &next in self.graph.neighbor_indices(node) {
                if closed[next] {
                    continue;
                }
                if respect_capacity && !self.ledger.has_capacity(nodes[next].id) {
                    continue;
                }

                let tentative = cost + 1;
                if tentative < best_cost[next] {
                    best_cost[next] = tentative;
                    let seq = arena.len();
                    arena.push(Slot {
                        node: next,
                        parent: Some(slot),
                        cost: tentative,
                    });
                    open_set.push(FrontierEntry {
                        priority: tentative as f32 + heuristic(next),
                        seq,
                    });
                }
            }
        }

        debug!(
            "[Solver] FAILED: NoPath for {} after expanding {} nodes",
            objective.id, nodes_expanded
        );
        ObjectiveSolution::failed(objective.id, RouteFailure::NoPath, nodes_expanded)
    }

    fn iteration_limit(
        &self,
        objective: &Objective,
        arena: &[Slot],
        closest: Option<(f32, usize)>,
        nodes_expanded: usize,
    ) -> ObjectiveSolution {
        warn!(
            "[Solver] {} hit the iteration limit ({} nodes)",
            objective.id, nodes_expanded
        );
        let mut solution =
            ObjectiveSolution::failed(objective.id, RouteFailure::IterationLimit, nodes_expanded);
        if self.config.iteration_limit == IterationLimitPolicy::BestPartial {
            if let Some((_, slot)) = closest {
                solution.path = rebuild(arena, slot, self.graph.nodes());
            }
        }
        solution
    }
}

/// Walk parent links back to the start
fn rebuild(arena: &[Slot], mut slot: usize, nodes: &[MeshNode]) -> Vec<NodeId> {
    let mut path = Vec::new();
    loop {
        let s = arena[slot];
        path.push(nodes[s.node].id);
        match s.parent {
            Some(parent) => slot = parent,
            None => break,
        }
    }
    path.reverse();
    path
}
