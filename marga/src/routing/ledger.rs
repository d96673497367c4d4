//! Session-scoped residual capacity.

use std::collections::HashMap;

use crate::core::NodeId;
use crate::mesh::{MeshGraph, MeshNode};

/// Residual traversal counts for one solve session.
///
/// Seeded from node capacities and only ever decremented. Clone it to run
/// independent what-if sessions over the same graph.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CapacityLedger {
    residual: HashMap<NodeId, u32>,
}

impl CapacityLedger {
    /// Seed from a node set
    pub fn new<'a>(nodes: impl IntoIterator<Item = &'a MeshNode>) -> Self {
        Self {
            residual: nodes.into_iter().map(|n| (n.id, n.capacity)).collect(),
        }
    }

    /// Seed from every node of a graph
    pub fn for_graph(graph: &MeshGraph) -> Self {
        Self::new(graph.nodes())
    }

    /// Remaining count; zero for unknown nodes
    #[inline]
    pub fn residual(&self, node: NodeId) -> u32 {
        self.residual.get(&node).copied().unwrap_or(0)
    }

    /// At least one traversal left
    #[inline]
    pub fn has_capacity(&self, node: NodeId) -> bool {
        self.residual(node) >= 1
    }

    /// Every node on `path` has at least one traversal left
    pub fn can_commit(&self, path: &[NodeId]) -> bool {
        path.iter().all(|&n| self.has_capacity(n))
    }

    /// Consume one traversal on every node of `path`.
    ///
    /// # Panics
    ///
    /// If any node is exhausted or unknown. Callers check capacity before
    /// committing; reaching zero here is a bookkeeping bug.
    pub fn commit(&mut self, path: &[NodeId]) {
        for node in path {
            match self.residual.get_mut(node) {
                Some(count) if *count > 0 => *count -= 1,
                _ => panic!("capacity ledger underflow at node {node}"),
            }
        }
    }

    /// Nodes with no traversals left
    pub fn exhausted(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.residual
            .iter()
            .filter(|&(_, &c)| c == 0)
            .map(|(&id, _)| id)
    }

    /// Sum of residual counts
    pub fn total(&self) -> u64 {
        self.residual.values().map(|&c| u64::from(c)).sum()
    }

    /// Tracked node count
    pub fn len(&self) -> usize {
        self.residual.len()
    }

    /// No nodes tracked
    pub fn is_empty(&self) -> bool {
        self.residual.is_empty()
    }
}
