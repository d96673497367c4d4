//! Endpoint resolution section.

use serde::{Deserialize, Serialize};

use crate::planner::ResolveConfig;

/// Endpoint resolution section
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolveSection {
    /// Maximum distance from an endpoint to its node center (unset = any)
    #[serde(default)]
    pub max_snap_distance: Option<f32>,

    /// Also limit snapping to one finest-cell size
    #[serde(default)]
    pub finest_cell: bool,
}

impl ResolveSection {
    /// Convert to ResolveConfig
    pub fn to_resolve_config(&self) -> ResolveConfig {
        ResolveConfig {
            max_snap_distance: self.max_snap_distance,
            finest_cell: self.finest_cell,
        }
    }
}
