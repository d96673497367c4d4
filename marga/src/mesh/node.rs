//! Mesh leaf nodes.

use serde::{Deserialize, Serialize};

use crate::core::{NodeId, Point2D, Rect};

/// A leaf cell of the adaptive mesh.
///
/// Nodes are immutable once built. Residual capacity during a solve lives
/// in a [`CapacityLedger`](crate::routing::CapacityLedger), never here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeshNode {
    /// Stable identity
    pub id: NodeId,
    /// Cell geometry
    pub rect: Rect,
    /// Subdivision depth (0 = root)
    pub level: u8,
    /// Number of paths allowed through this cell
    pub capacity: u32,
    /// Cell overlaps at least one obstacle
    pub contains_obstacle: bool,
    /// Cell contains at least one target point
    pub contains_target: bool,
}

impl MeshNode {
    /// Cell center
    #[inline]
    pub fn center(&self) -> Point2D {
        self.rect.center
    }

    /// Cell width
    #[inline]
    pub fn width(&self) -> f32 {
        self.rect.width
    }

    /// Cell height
    #[inline]
    pub fn height(&self) -> f32 {
        self.rect.height
    }

    /// Obstacle-covered and not protected by a target.
    ///
    /// Such cells are never emitted as leaves and never receive edges.
    #[inline]
    pub fn is_blocked(&self) -> bool {
        self.contains_obstacle && !self.contains_target
    }

    /// Same cell geometry and level, ignoring identity and flags
    pub fn same_geometry(&self, other: &MeshNode) -> bool {
        self.rect == other.rect && self.level == other.level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(contains_obstacle: bool, contains_target: bool) -> MeshNode {
        MeshNode {
            id: NodeId::new(0),
            rect: Rect::new(Point2D::new(5.0, 5.0), 10.0, 10.0),
            level: 2,
            capacity: 25,
            contains_obstacle,
            contains_target,
        }
    }

    #[test]
    fn test_blocked() {
        assert!(!node(false, false).is_blocked());
        assert!(node(true, false).is_blocked());
        assert!(!node(true, true).is_blocked());
        assert!(!node(false, true).is_blocked());
    }

    #[test]
    fn test_same_geometry_ignores_identity() {
        let a = node(false, false);
        let mut b = node(false, true);
        b.id = NodeId::new(99);
        assert!(a.same_geometry(&b));

        b.level = 3;
        assert!(!a.same_geometry(&b));
    }
}
