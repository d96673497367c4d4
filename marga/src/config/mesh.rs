//! Mesh configuration section.

use serde::{Deserialize, Serialize};

use crate::core::BorderTolerance;
use crate::mesh::MeshConfig;

use super::defaults;

/// Mesh configuration section
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeshSection {
    /// Maximum subdivision depth
    #[serde(default = "defaults::max_level")]
    pub max_level: u8,

    /// Hard ceiling on emitted nodes
    #[serde(default = "defaults::max_nodes")]
    pub max_nodes: usize,

    /// Subdivide around targets as well as obstacles
    #[serde(default = "defaults::enabled")]
    pub refine_targets: bool,

    /// Largest gap between two borders that still counts as touching
    #[serde(default = "defaults::border_epsilon")]
    pub border_epsilon: f32,

    /// Smallest shared border length for an edge
    #[serde(default = "defaults::min_border_overlap")]
    pub min_border_overlap: f32,
}

impl Default for MeshSection {
    fn default() -> Self {
        Self {
            max_level: 6,
            max_nodes: 200_000,
            refine_targets: true,
            border_epsilon: 1.0,
            min_border_overlap: 1.0,
        }
    }
}

impl MeshSection {
    /// Convert to MeshConfig
    pub fn to_mesh_config(&self) -> MeshConfig {
        MeshConfig {
            max_level: self.max_level,
            max_nodes: self.max_nodes,
            refine_targets: self.refine_targets,
            border: BorderTolerance {
                epsilon: self.border_epsilon,
                min_overlap: self.min_border_overlap,
            },
        }
    }
}
