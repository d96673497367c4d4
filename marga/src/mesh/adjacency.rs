//! Adjacency between mesh leaves.
//!
//! Every unordered pair of leaves is tested for border sharing, which is
//! quadratic in the leaf count. The depth bound keeps realistic meshes in
//! the low thousands of nodes.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::node::MeshNode;
use crate::core::{BorderTolerance, EdgeId, NodeId, share_border};

/// Undirected adjacency between two mesh nodes.
///
/// `from`/`to` carry no direction; both endpoints are peers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Edge identity
    pub id: EdgeId,
    /// First endpoint
    pub from: NodeId,
    /// Second endpoint
    pub to: NodeId,
}

impl Edge {
    /// Endpoints as an ordered `(min, max)` pair
    #[inline]
    pub fn key(&self) -> (NodeId, NodeId) {
        pair_key(self.from, self.to)
    }

    /// True when `node` is one of the endpoints
    #[inline]
    pub fn touches(&self, node: NodeId) -> bool {
        self.from == node || self.to == node
    }

    /// The endpoint opposite `node`, if `node` is an endpoint
    #[inline]
    pub fn other(&self, node: NodeId) -> Option<NodeId> {
        if self.from == node {
            Some(self.to)
        } else if self.to == node {
            Some(self.from)
        } else {
            None
        }
    }
}

/// Unordered pair key
#[inline]
pub(crate) fn pair_key(a: NodeId, b: NodeId) -> (NodeId, NodeId) {
    if a <= b { (a, b) } else { (b, a) }
}

/// A pair is skipped when an obstacle cell is involved and neither cell
/// holds a target.
#[inline]
fn pair_excluded(a: &MeshNode, b: &MeshNode) -> bool {
    (a.contains_obstacle || b.contains_obstacle) && !(a.contains_target || b.contains_target)
}

/// Derive the edge set for a leaf node set.
///
/// Edges are emitted in `(i, j)` scan order with `i < j`, and identities are
/// assigned sequentially in that order.
pub fn build_edges(nodes: &[MeshNode], tolerance: &BorderTolerance) -> Vec<Edge> {
    let mut edges = Vec::new();
    let mut seen: HashSet<(NodeId, NodeId)> = HashSet::new();
    let mut excluded = 0usize;

    for (i, a) in nodes.iter().enumerate() {
        for b in &nodes[i + 1..] {
            if pair_excluded(a, b) {
                excluded += 1;
                continue;
            }
            if a.id == b.id {
                continue;
            }

            let key = pair_key(a.id, b.id);
            if seen.contains(&key) || !share_border(&a.rect, &b.rect, tolerance) {
                continue;
            }
            seen.insert(key);
            edges.push(Edge {
                id: EdgeId::new(edges.len() as u32),
                from: a.id,
                to: b.id,
            });
        }
    }

    debug!(
        "[Edges] {} edges between {} nodes ({} pairs excluded)",
        edges.len(),
        nodes.len(),
        excluded
    );

    edges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Point2D, Rect};
    use crate::mesh::build_mesh;

    fn cell(id: u32, x: f32, y: f32, size: f32, level: u8) -> MeshNode {
        MeshNode {
            id: NodeId::new(id),
            rect: Rect::square(Point2D::new(x, y), size),
            level,
            capacity: 1,
            contains_obstacle: false,
            contains_target: false,
        }
    }

    fn has_edge(edges: &[Edge], a: u32, b: u32) -> bool {
        let key = pair_key(NodeId::new(a), NodeId::new(b));
        edges.iter().any(|e| e.key() == key)
    }

    #[test]
    fn test_edge_helpers() {
        let e = Edge {
            id: EdgeId::new(0),
            from: NodeId::new(5),
            to: NodeId::new(2),
        };
        assert_eq!(e.key(), (NodeId::new(2), NodeId::new(5)));
        assert!(e.touches(NodeId::new(5)));
        assert_eq!(e.other(NodeId::new(5)), Some(NodeId::new(2)));
        assert_eq!(e.other(NodeId::new(2)), Some(NodeId::new(5)));
        assert_eq!(e.other(NodeId::new(9)), None);
    }

    #[test]
    fn test_two_by_two_grid() {
        let nodes = vec![
            cell(0, 5.0, 5.0, 10.0, 1),
            cell(1, 15.0, 5.0, 10.0, 1),
            cell(2, 5.0, 15.0, 10.0, 1),
            cell(3, 15.0, 15.0, 10.0, 1),
        ];
        let edges = build_edges(&nodes, &BorderTolerance::default());

        assert_eq!(edges.len(), 4);
        assert!(has_edge(&edges, 0, 1));
        assert!(has_edge(&edges, 0, 2));
        assert!(has_edge(&edges, 1, 3));
        assert!(has_edge(&edges, 2, 3));
        // Diagonal corner contact only
        assert!(!has_edge(&edges, 0, 3));
        assert!(!has_edge(&edges, 1, 2));
    }

    #[test]
    fn test_mixed_depth_neighbors() {
        // One big cell on the left, two half-size cells stacked on its right
        let nodes = vec![
            cell(0, 10.0, 10.0, 20.0, 1),
            cell(1, 25.0, 5.0, 10.0, 2),
            cell(2, 25.0, 15.0, 10.0, 2),
        ];
        let edges = build_edges(&nodes, &BorderTolerance::default());

        assert_eq!(edges.len(), 3);
        assert!(has_edge(&edges, 0, 1));
        assert!(has_edge(&edges, 0, 2));
        assert!(has_edge(&edges, 1, 2));
    }

    #[test]
    fn test_blocked_nodes_get_no_edges() {
        let mut blocked = cell(1, 15.0, 5.0, 10.0, 1);
        blocked.contains_obstacle = true;
        let nodes = vec![cell(0, 5.0, 5.0, 10.0, 1), blocked];

        assert!(build_edges(&nodes, &BorderTolerance::default()).is_empty());

        // A target keeps the pair eligible
        let mut nodes = nodes;
        nodes[1].contains_target = true;
        assert_eq!(build_edges(&nodes, &BorderTolerance::default()).len(), 1);
    }

    #[test]
    fn test_no_duplicate_pairs_on_built_mesh() {
        let region = Rect::square(Point2D::new(400.0, 300.0), 600.0);
        let obstacles = [Rect::new(Point2D::new(420.0, 310.0), 80.0, 30.0)];
        let nodes = build_mesh(region, &obstacles, None, 5).unwrap();
        let edges = build_edges(&nodes, &BorderTolerance::default());

        let keys: HashSet<_> = edges.iter().map(Edge::key).collect();
        assert_eq!(keys.len(), edges.len());
        for (i, e) in edges.iter().enumerate() {
            assert_eq!(e.id, EdgeId::new(i as u32));
            assert_ne!(e.from, e.to);
        }
    }

    #[test]
    fn test_single_node_has_no_edges() {
        let nodes = vec![cell(0, 0.0, 0.0, 600.0, 0)];
        assert!(build_edges(&nodes, &BorderTolerance::default()).is_empty());
    }
}
