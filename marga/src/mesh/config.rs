//! Mesh builder configuration.

use serde::{Deserialize, Serialize};

use crate::core::BorderTolerance;

/// Deepest subdivision level accepted by the builder.
///
/// At level 20 a 1000-unit region already has sub-millimetre cells; going
/// further only produces `f32` rounding noise in cell geometry.
pub const MAX_SUPPORTED_LEVEL: u8 = 20;

/// Visited cells allowed per node of the ceiling
const CELLS_PER_NODE: usize = 8;

/// Mesh builder configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeshConfig {
    /// Maximum subdivision depth (root is level 0)
    pub max_level: u8,
    /// Hard ceiling on emitted nodes
    pub max_nodes: usize,
    /// Subdivide cells containing a target even when obstacle-free
    pub refine_targets: bool,
    /// Border-adjacency tolerances used when deriving edges
    pub border: BorderTolerance,
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            max_level: 6,
            max_nodes: 200_000,
            refine_targets: true,
            border: BorderTolerance::default(),
        }
    }
}

impl MeshConfig {
    /// Create with a custom maximum level
    pub fn with_max_level(max_level: u8) -> Self {
        Self {
            max_level,
            ..Default::default()
        }
    }

    /// Set the node ceiling
    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    /// Cells the builder may visit, pruned ones included
    #[inline]
    pub fn cell_budget(&self) -> usize {
        self.max_nodes.saturating_mul(CELLS_PER_NODE)
    }

    /// Capacity assigned to a leaf at `level`: `(max_level - level + 1)^2`
    #[inline]
    pub fn capacity_at(&self, level: u8) -> u32 {
        let span = u32::from(self.max_level.saturating_sub(level)) + 1;
        span * span
    }
}
