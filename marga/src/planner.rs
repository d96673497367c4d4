//! Point-to-point route planning.
//!
//! Takes plane coordinates in and returns routed node paths out: builds the
//! mesh with every connection endpoint as a target, derives edges, snaps
//! each endpoint to its nearest node and solves the resulting objectives.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::sync::atomic::AtomicBool;

use crate::config::MargaConfig;
use crate::core::{NodeId, ObjectiveId, Point2D, Rect};
use crate::error::{MargaError, Result};
use crate::mesh::{MeshConfig, MeshGraph};
use crate::routing::{
    MultiObjectiveSolver, Objective, ObjectiveSolution, RouteFailure, SolveResult, SolverConfig,
};

/// A named start-to-end requirement in plane coordinates
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    /// Label used to look the result up
    pub name: String,
    /// Start point
    pub start: Point2D,
    /// End point
    pub end: Point2D,
}

impl Connection {
    /// Create a connection
    pub fn new(name: impl Into<String>, start: Point2D, end: Point2D) -> Self {
        Self {
            name: name.into(),
            start,
            end,
        }
    }
}

/// Everything needed for one planning run
#[derive(Clone, Debug, PartialEq)]
pub struct RoutingProblem {
    /// Root region of the mesh
    pub region: Rect,
    /// Blocking rectangles
    pub obstacles: Vec<Rect>,
    /// Connections, solved in this order unless the solver reorders them
    pub connections: Vec<Connection>,
}

impl RoutingProblem {
    /// Problem over `region` with nothing in it
    pub fn new(region: Rect) -> Self {
        Self {
            region,
            obstacles: Vec::new(),
            connections: Vec::new(),
        }
    }

    /// Add an obstacle
    pub fn with_obstacle(mut self, obstacle: Rect) -> Self {
        self.obstacles.push(obstacle);
        self
    }

    /// Add a connection
    pub fn with_connection(mut self, name: impl Into<String>, start: Point2D, end: Point2D) -> Self {
        self.connections.push(Connection::new(name, start, end));
        self
    }

    /// All connection endpoints, start then end per connection
    pub fn targets(&self) -> Vec<Point2D> {
        self.connections
            .iter()
            .flat_map(|c| [c.start, c.end])
            .collect()
    }
}

/// How far an endpoint may be from the node it snaps to
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolveConfig {
    /// Absolute distance limit from point to node center
    pub max_snap_distance: Option<f32>,
    /// Also limit to one finest-level cell size
    pub finest_cell: bool,
}

impl ResolveConfig {
    /// Snap to the nearest node regardless of distance
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Snap only within `distance`
    pub fn within(distance: f32) -> Self {
        Self {
            max_snap_distance: Some(distance),
            finest_cell: false,
        }
    }

    /// Effective limit for a region meshed to `max_level`
    pub fn snap_limit(&self, region: &Rect, max_level: u8) -> Option<f32> {
        let finest = self.finest_cell.then(|| {
            let side = region.width.min(region.height);
            side / (1u64 << max_level) as f32
        });
        match (self.max_snap_distance, finest) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}

/// Result of a planning run
#[derive(Clone, Debug)]
pub struct RoutingOutcome {
    /// Mesh graph that was routed over
    pub graph: MeshGraph,
    /// Input connections
    pub connections: Vec<Connection>,
    /// Objectives for connections whose endpoints resolved
    pub objectives: Vec<Objective>,
    /// One solution per connection, in connection order
    pub result: SolveResult,
}

impl RoutingOutcome {
    /// Number of connections with a committed route
    pub fn routed_count(&self) -> usize {
        self.result.stats.routed
    }

    /// Solution for a connection by name
    pub fn solution_for(&self, name: &str) -> Option<&ObjectiveSolution> {
        let index = self.connections.iter().position(|c| c.name == name)?;
        self.result.solutions.get(index)
    }

    /// Node centers along a connection's path
    pub fn path_points(&self, name: &str) -> Option<Vec<Point2D>> {
        self.solution_for(name)
            .map(|s| self.graph.path_points(&s.path))
    }
}

/// Plans routes for whole problems
#[derive(Clone, Debug, Default)]
pub struct RoutePlanner {
    mesh: MeshConfig,
    solver: SolverConfig,
    resolve: ResolveConfig,
}

/// Per-connection resolution result
enum Resolved {
    Objective(Objective),
    Failed(ObjectiveId, RouteFailure),
}

impl RoutePlanner {
    /// Create a planner
    pub fn new(mesh: MeshConfig, solver: SolverConfig, resolve: ResolveConfig) -> Self {
        Self {
            mesh,
            solver,
            resolve,
        }
    }

    /// Create with default configuration
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Create from a loaded configuration
    pub fn from_config(config: &MargaConfig) -> Self {
        Self::new(
            config.to_mesh_config(),
            config.to_solver_config(),
            config.to_resolve_config(),
        )
    }

    /// Mesh configuration
    pub fn mesh_config(&self) -> &MeshConfig {
        &self.mesh
    }

    /// Solver configuration
    pub fn solver_config(&self) -> &SolverConfig {
        &self.solver
    }

    /// Plan every connection of `problem`.
    ///
    /// Fails only on invalid input (degenerate region, non-finite endpoint,
    /// node ceiling). Unroutable connections are reported per connection.
    pub fn plan(&self, problem: &RoutingProblem) -> Result<RoutingOutcome> {
        self.plan_inner(problem, None)
    }

    /// Like [`plan`](Self::plan), checking `cancel` between objectives
    pub fn plan_with_cancel(
        &self,
        problem: &RoutingProblem,
        cancel: &AtomicBool,
    ) -> Result<RoutingOutcome> {
        self.plan_inner(problem, Some(cancel))
    }

    fn plan_inner(
        &self,
        problem: &RoutingProblem,
        cancel: Option<&AtomicBool>,
    ) -> Result<RoutingOutcome> {
        if let Some(bad) = problem
            .connections
            .iter()
            .find(|c| !c.start.is_finite() || !c.end.is_finite())
        {
            return Err(MargaError::InvalidEndpoint(bad.name.clone()));
        }

        let targets = problem.targets();
        let graph = MeshGraph::build(&self.mesh, problem.region, &problem.obstacles, Some(&targets))?;
        let limit = self.resolve.snap_limit(&problem.region, self.mesh.max_level);

        let resolved: Vec<Resolved> = problem
            .connections
            .iter()
            .enumerate()
            .map(|(i, c)| self.resolve(&graph, limit, ObjectiveId::new(i as u32), c))
            .collect();

        let objectives: Vec<Objective> = resolved
            .iter()
            .filter_map(|r| match r {
                Resolved::Objective(o) => Some(*o),
                Resolved::Failed(..) => None,
            })
            .collect();

        let solver = MultiObjectiveSolver::new(self.solver.clone());
        let solved = match cancel {
            Some(flag) => solver.solve_with_cancel(&objectives, &graph, flag),
            None => solver.solve(&objectives, &graph),
        };

        // Interleave pre-failed connections back into connection order
        let mut solved_iter = solved.solutions.into_iter();
        let mut solutions = Vec::with_capacity(resolved.len());
        for r in &resolved {
            let solution = match r {
                Resolved::Objective(o) => solved_iter
                    .next()
                    .unwrap_or_else(|| ObjectiveSolution::failed(o.id, RouteFailure::Cancelled, 0)),
                Resolved::Failed(id, failure) => ObjectiveSolution::failed(*id, *failure, 0),
            };
            solutions.push(solution);
        }

        let mut result = SolveResult {
            solutions,
            attempted: solved.attempted,
            stats: solved.stats,
        };
        result.recount();

        info!(
            "[Planner] routed {}/{} connections over {} nodes, {} edges",
            result.stats.routed,
            problem.connections.len(),
            graph.len(),
            graph.edges().len()
        );

        Ok(RoutingOutcome {
            graph,
            connections: problem.connections.clone(),
            objectives,
            result,
        })
    }

    fn resolve(
        &self,
        graph: &MeshGraph,
        limit: Option<f32>,
        id: ObjectiveId,
        connection: &Connection,
    ) -> Resolved {
        let snap = |point: Point2D| -> Option<NodeId> {
            match limit {
                Some(d) => graph.nearest_node_within(point, d),
                None => graph.nearest_node(point),
            }
            .map(|n| n.id)
        };

        let Some(start) = snap(connection.start) else {
            debug!(
                "[Planner] FAILED: StartUnresolved for '{}' at ({:.1},{:.1})",
                connection.name, connection.start.x, connection.start.y
            );
            return Resolved::Failed(id, RouteFailure::StartUnresolved);
        };
        let Some(end) = snap(connection.end) else {
            debug!(
                "[Planner] FAILED: EndUnresolved for '{}' at ({:.1},{:.1})",
                connection.name, connection.end.x, connection.end.y
            );
            return Resolved::Failed(id, RouteFailure::EndUnresolved);
        };
        Resolved::Objective(Objective::new(id, start, end))
    }
}
