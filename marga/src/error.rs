//! Error types for Marga

use thiserror::Error;

use crate::config::ConfigLoadError;
use crate::io::ScenarioError;
use crate::mesh::{GraphError, MeshError};

/// Result type alias
pub type Result<T> = std::result::Result<T, MargaError>;

/// Marga error types
#[derive(Debug, Error)]
pub enum MargaError {
    /// Mesh construction failed
    #[error("Mesh error: {0}")]
    Mesh(#[from] MeshError),

    /// Supplied nodes and edges do not form a graph
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    /// Configuration could not be loaded
    #[error("Config error: {0}")]
    Config(#[from] ConfigLoadError),

    /// Scenario could not be loaded
    #[error("Scenario error: {0}")]
    Scenario(#[from] ScenarioError),

    /// A connection endpoint is NaN or infinite
    #[error("Invalid endpoint in connection '{0}'")]
    InvalidEndpoint(String),
}
