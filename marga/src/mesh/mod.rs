//! Adaptive quadtree mesh and its adjacency graph.
//!
//! - **Builder**: recursive subdivision around obstacles and targets
//! - **Adjacency**: border-sharing edges between leaves of any depth
//! - **Graph**: node/edge container with neighbour lookup
//!
//! ```rust,ignore
//! use marga::mesh::{MeshConfig, MeshGraph};
//!
//! let graph = MeshGraph::build(&MeshConfig::default(), region, &obstacles, Some(&targets))?;
//! let start = graph.nearest_node(point).map(|n| n.id);
//! ```

mod adjacency;
mod builder;
mod config;
mod error;
mod graph;
mod node;

pub use adjacency::{Edge, build_edges};
pub use builder::{MeshBuilder, build_mesh};
pub use config::{MAX_SUPPORTED_LEVEL, MeshConfig};
pub use error::{GraphError, MeshError};
pub use graph::{GraphStats, MeshGraph};
pub use node::MeshNode;
