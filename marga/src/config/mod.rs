//! Unified configuration loading.
//!
//! ```rust,ignore
//! use marga::config::MargaConfig;
//!
//! // configs/marga.yaml if present, otherwise built-in defaults
//! let config = MargaConfig::load_default()?;
//! let planner = marga::RoutePlanner::from_config(&config);
//! ```
//!
//! | Section | Description |
//! |---------|-------------|
//! | [`MeshSection`] | Subdivision depth, node ceiling, border tolerance |
//! | [`SolverSection`] | Iteration cap, capacity mode, ordering |
//! | [`ResolveSection`] | Endpoint snapping limits |
//!
//! ```yaml
//! mesh:
//!   max_level: 6
//!   border_epsilon: 1.0
//! solver:
//!   max_iterations: 10000
//!   iteration_limit: no_path      # or best_partial
//!   capacity_mode: during_search  # or commit_only
//!   ordering: as_supplied         # or shortest_first
//! resolve:
//!   max_snap_distance: 25.0
//! ```

mod defaults;
mod error;
mod marga;
mod mesh;
mod resolve;
mod solver;

pub use error::ConfigLoadError;
pub use marga::{DEFAULT_CONFIG_PATH, MargaConfig};

pub use mesh::MeshSection;
pub use resolve::ResolveSection;
pub use solver::SolverSection;
