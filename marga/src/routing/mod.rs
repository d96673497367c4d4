//! Capacity-aware multi-objective routing.
//!
//! Objectives are solved one at a time with best-first search. A committed
//! path consumes one unit of capacity on every node it crosses, which
//! spreads later routes across the mesh instead of stacking them on the
//! same shortest corridor.
//!
//! ```rust,ignore
//! use marga::routing::{MultiObjectiveSolver, Objective, SolverConfig};
//!
//! let solver = MultiObjectiveSolver::new(SolverConfig::default());
//! let result = solver.solve(&objectives, &graph);
//! for solution in result.routed() {
//!     println!("{}: {} hops", solution.objective_id, solution.hops());
//! }
//! ```

mod config;
mod ledger;
mod objective;
mod search;
mod solver;

pub use config::{CapacityMode, IterationLimitPolicy, ObjectiveOrder, SolverConfig};
pub use ledger::CapacityLedger;
pub use objective::{
    AttemptedPath, Objective, ObjectiveSolution, RouteFailure, SolveResult, SolveStats,
};
pub use solver::{MultiObjectiveSolver, solve};
