//! # Marga: Adaptive Mesh Routing
//!
//! Routes many start-to-end connections across a 2D plane cluttered with
//! rectangular obstacles. The plane is decomposed into an adaptive quadtree
//! mesh, leaves sharing a border become graph neighbours, and connections
//! are solved one after another while a capacity ledger spreads them over
//! the mesh.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use marga::core::{Point2D, Rect};
//! use marga::{RoutePlanner, RoutingProblem};
//!
//! let problem = RoutingProblem::new(Rect::square(Point2D::new(400.0, 300.0), 600.0))
//!     .with_obstacle(Rect::new(Point2D::new(400.0, 300.0), 120.0, 40.0))
//!     .with_connection("a", Point2D::new(150.0, 100.0), Point2D::new(650.0, 500.0));
//!
//! let outcome = RoutePlanner::with_defaults().plan(&problem)?;
//! if let Some(points) = outcome.path_points("a") {
//!     println!("{} waypoints", points.len());
//! }
//! # Ok::<(), marga::MargaError>(())
//! ```
//!
//! ## Coordinate Frame
//!
//! Plane units, x to the right and y downward. Rectangles are stored as
//! center plus width and height.
//!
//! ## Architecture
//!
//! - [`core`]: points, rectangles, geometry predicates, identities
//! - [`mesh`]: quadtree builder, border adjacency, graph
//! - [`routing`]: capacity ledger, best-first search, multi-objective solver
//! - [`planner`]: plane points in, routed paths out
//! - [`config`]: YAML configuration
//! - [`io`]: scenario files
//!
//! ## Data Flow
//!
//! ```text
//!   region + obstacles + endpoints
//!                 │
//!                 ▼
//!         ┌───────────────┐
//!         │  MeshBuilder  │  quadtree leaves
//!         └───────┬───────┘
//!                 ▼
//!         ┌───────────────┐
//!         │  build_edges  │  border adjacency
//!         └───────┬───────┘
//!                 ▼
//!         ┌───────────────┐      ┌────────────────┐
//!         │   MeshGraph   │─────►│ CapacityLedger │
//!         └───────┬───────┘      └───────┬────────┘
//!                 │  nearest node        │ read / commit
//!                 ▼                      ▼
//!         ┌─────────────────────────────────────┐
//!         │        MultiObjectiveSolver         │
//!         └──────────────────┬──────────────────┘
//!                            ▼
//!            one solution per objective + attempts
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod io;
pub mod mesh;
pub mod planner;
pub mod routing;

pub use config::MargaConfig;
pub use error::{MargaError, Result};
pub use mesh::{MeshBuilder, MeshConfig, MeshGraph, MeshNode, build_edges, build_mesh};
pub use planner::{Connection, ResolveConfig, RoutePlanner, RoutingOutcome, RoutingProblem};
pub use routing::{
    CapacityLedger, MultiObjectiveSolver, Objective, ObjectiveSolution, RouteFailure,
    SolveResult, SolverConfig, solve,
};
