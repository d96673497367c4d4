//! Node/edge graph over mesh leaves.

use log::debug;
use std::collections::{HashMap, HashSet};

use super::adjacency::{Edge, build_edges};
use super::config::MeshConfig;
use super::error::{GraphError, MeshError};
use super::node::MeshNode;
use super::MeshBuilder;
use crate::core::{NodeId, Point2D, Rect};

/// Mesh leaves plus their adjacency.
///
/// Node and edge sets are immutable after construction. Neighbour lists
/// keep edge-creation order, which fixes the expansion order of the solver.
#[derive(Clone, Debug)]
pub struct MeshGraph {
    nodes: Vec<MeshNode>,
    edges: Vec<Edge>,
    index: HashMap<NodeId, usize>,
    adjacency: Vec<Vec<usize>>,
}

/// Size summary of a graph
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GraphStats {
    /// Leaf count
    pub nodes: usize,
    /// Edge count
    pub edges: usize,
    /// Deepest leaf level
    pub max_level: u8,
    /// Nodes without any neighbour
    pub isolated: usize,
    /// Sum of node capacities
    pub total_capacity: u64,
}

impl MeshGraph {
    /// Build mesh and edges in one go.
    ///
    /// The border tolerance is fitted to the smallest leaf, so deep meshes
    /// over small regions stay connected.
    pub fn build(
        config: &MeshConfig,
        region: Rect,
        obstacles: &[Rect],
        targets: Option<&[Point2D]>,
    ) -> Result<Self, MeshError> {
        let nodes = MeshBuilder::new(config.clone()).build(region, obstacles, targets)?;
        let finest = nodes
            .iter()
            .map(|n| n.rect.width.min(n.rect.height))
            .fold(f32::INFINITY, f32::min);
        let tolerance = config.border.fitted_to(finest);
        if tolerance != config.border {
            debug!(
                "[Graph] border tolerance fitted to finest cell {}: epsilon={}, min_overlap={}",
                finest, tolerance.epsilon, tolerance.min_overlap
            );
        }
        let edges = build_edges(&nodes, &tolerance);
        Ok(Self::assemble(nodes, edges))
    }

    /// Package externally supplied nodes and edges.
    ///
    /// Rejects duplicate node identities, edges with unknown endpoints,
    /// self loops and repeated unordered pairs.
    pub fn from_parts(nodes: Vec<MeshNode>, edges: Vec<Edge>) -> Result<Self, GraphError> {
        let mut ids = HashSet::with_capacity(nodes.len());
        for node in &nodes {
            if !ids.insert(node.id) {
                return Err(GraphError::DuplicateNode(node.id));
            }
        }

        let mut pairs = HashSet::with_capacity(edges.len());
        for edge in &edges {
            for endpoint in [edge.from, edge.to] {
                if !ids.contains(&endpoint) {
                    return Err(GraphError::UnknownEndpoint {
                        edge: edge.id,
                        node: endpoint,
                    });
                }
            }
            if edge.from == edge.to {
                return Err(GraphError::SelfLoop(edge.id));
            }
            let key = edge.key();
            if !pairs.insert(key) {
                return Err(GraphError::DuplicateEdge(key.0, key.1));
            }
        }

        Ok(Self::assemble(nodes, edges))
    }

    fn assemble(nodes: Vec<MeshNode>, edges: Vec<Edge>) -> Self {
        let index: HashMap<NodeId, usize> =
            nodes.iter().enumerate().map(|(i, n)| (n.id, i)).collect();

        let mut adjacency = vec![Vec::new(); nodes.len()];
        for edge in &edges {
            let (a, b) = (index[&edge.from], index[&edge.to]);
            adjacency[a].push(b);
            adjacency[b].push(a);
        }

        Self {
            nodes,
            edges,
            index,
            adjacency,
        }
    }

    /// All leaves
    pub fn nodes(&self) -> &[MeshNode] {
        &self.nodes
    }

    /// All edges
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of leaves
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a node
    pub fn node(&self, id: NodeId) -> Option<&MeshNode> {
        self.index.get(&id).map(|&i| &self.nodes[i])
    }

    /// Position of a node in [`nodes`](Self::nodes)
    pub fn index_of(&self, id: NodeId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// Contains the node
    pub fn contains(&self, id: NodeId) -> bool {
        self.index.contains_key(&id)
    }

    /// Neighbours of a node, in edge-creation order
    pub fn neighbors(&self, id: NodeId) -> impl Iterator<Item = &MeshNode> + '_ {
        self.index
            .get(&id)
            .map(|&i| self.adjacency[i].as_slice())
            .unwrap_or(&[])
            .iter()
            .map(|&j| &self.nodes[j])
    }

    /// Neighbour indices of the node at `index`
    pub(crate) fn neighbor_indices(&self, index: usize) -> &[usize] {
        &self.adjacency[index]
    }

    /// Nodes are joined by an edge
    pub fn are_adjacent(&self, a: NodeId, b: NodeId) -> bool {
        match self.index.get(&a) {
            Some(&i) => self.adjacency[i].iter().any(|&j| self.nodes[j].id == b),
            None => false,
        }
    }

    /// Node whose center is closest to `point` (Euclidean).
    ///
    /// Linear scan; the first node wins on ties. `None` only when the graph
    /// is empty.
    pub fn nearest_node(&self, point: Point2D) -> Option<&MeshNode> {
        let mut best: Option<(&MeshNode, f32)> = None;
        for node in &self.nodes {
            let d = node.center().distance_squared(&point);
            if best.is_none_or(|(_, bd)| d < bd) {
                best = Some((node, d));
            }
        }
        best.map(|(n, _)| n)
    }

    /// Nearest node within `max_distance` of `point`
    pub fn nearest_node_within(&self, point: Point2D, max_distance: f32) -> Option<&MeshNode> {
        self.nearest_node(point)
            .filter(|n| n.center().distance(&point) <= max_distance)
    }

    /// Convert a node path to positions in [`nodes`](Self::nodes).
    ///
    /// Unknown identities are skipped.
    pub fn path_indices(&self, path: &[NodeId]) -> Vec<usize> {
        path.iter().filter_map(|id| self.index_of(*id)).collect()
    }

    /// Node centers along a path
    pub fn path_points(&self, path: &[NodeId]) -> Vec<Point2D> {
        path.iter()
            .filter_map(|id| self.node(*id).map(MeshNode::center))
            .collect()
    }

    /// Every consecutive pair in `path` is joined by an edge
    pub fn is_valid_path(&self, path: &[NodeId]) -> bool {
        path.iter().all(|id| self.contains(*id))
            && path.windows(2).all(|w| self.are_adjacent(w[0], w[1]))
    }

    /// Size summary
    pub fn stats(&self) -> GraphStats {
        let stats = GraphStats {
            nodes: self.nodes.len(),
            edges: self.edges.len(),
            max_level: self.nodes.iter().map(|n| n.level).max().unwrap_or(0),
            isolated: self.adjacency.iter().filter(|a| a.is_empty()).count(),
            total_capacity: self.nodes.iter().map(|n| u64::from(n.capacity)).sum(),
        };
        debug!(
            "[Graph] {} nodes, {} edges, {} isolated, depth {}",
            stats.nodes, stats.edges, stats.isolated, stats.max_level
        );
        stats
    }
}
