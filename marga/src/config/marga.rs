//! Main MargaConfig and conversion methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::mesh::MeshConfig;
use crate::planner::ResolveConfig;
use crate::routing::SolverConfig;

use super::error::ConfigLoadError;
use super::mesh::MeshSection;
use super::resolve::ResolveSection;
use super::solver::SolverSection;

/// Default config file location, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "configs/marga.yaml";

/// Full configuration loaded from YAML
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MargaConfig {
    /// Mesh settings
    #[serde(default)]
    pub mesh: MeshSection,

    /// Solver settings
    #[serde(default)]
    pub solver: SolverSection,

    /// Endpoint resolution settings
    #[serde(default)]
    pub resolve: ResolveSection,
}

impl MargaConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load from the default path, falling back to built-in defaults
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new(DEFAULT_CONFIG_PATH);
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        serde_yaml::to_string(self).map_err(|e| ConfigLoadError::Serialize(e.to_string()))
    }

    /// Convert to MeshConfig
    pub fn to_mesh_config(&self) -> MeshConfig {
        self.mesh.to_mesh_config()
    }

    /// Convert to SolverConfig
    pub fn to_solver_config(&self) -> SolverConfig {
        self.solver.to_solver_config()
    }

    /// Convert to ResolveConfig
    pub fn to_resolve_config(&self) -> ResolveConfig {
        self.resolve.to_resolve_config()
    }
}
