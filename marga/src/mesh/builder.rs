//! Adaptive quadtree mesh construction.
//!
//! The root region is split recursively into four equal quadrants wherever
//! it touches an obstacle (and, with `refine_targets`, wherever it contains
//! a target point). Open space stays coarse, geometry of interest gets fine
//! cells. Leaves covered by an obstacle are dropped unless they hold a
//! target, so every target maps to some surviving cell.
//!
//! ```text
//!  level 0          level 1               level 2
//! ┌───────────┐   ┌─────┬─────┐        ┌─────┬──┬──┐
//! │           │   │     │     │        │     │  │▓▓│  ▓ = obstacle,
//! │        ▓  │ → │     │  ▓  │   →    │     ├──┼──┤      pruned at
//! │           │   ├─────┼─────┤        │     │  │  │      max level
//! │           │   │     │     │        ├─────┼──┴──┤
//! └───────────┘   └─────┴─────┘        └─────┴─────┘
//! ```

use log::debug;

use super::config::{MAX_SUPPORTED_LEVEL, MeshConfig};
use super::error::MeshError;
use super::node::MeshNode;
use crate::core::{NodeId, Point2D, Rect, rect_contains_point, rects_overlap};

/// Quadtree mesh builder
#[derive(Clone, Debug, Default)]
pub struct MeshBuilder {
    config: MeshConfig,
}

/// Recursion state shared across one build
struct BuildContext<'a> {
    config: &'a MeshConfig,
    nodes: Vec<MeshNode>,
    next_id: u32,
    subdivisions: usize,
    visited: usize,
    cell_budget: usize,
}

impl MeshBuilder {
    /// Create a builder
    pub fn new(config: MeshConfig) -> Self {
        Self { config }
    }

    /// Builder configuration
    pub fn config(&self) -> &MeshConfig {
        &self.config
    }

    /// Build the leaf node set for `region`.
    ///
    /// `targets` are points that must stay reachable: a cell containing one
    /// survives even when an obstacle covers it. Node identities are assigned
    /// in depth-first emission order (quadrants top-left, top-right,
    /// bottom-left, bottom-right), so identical inputs give identical meshes.
    pub fn build(
        &self,
        region: Rect,
        obstacles: &[Rect],
        targets: Option<&[Point2D]>,
    ) -> Result<Vec<MeshNode>, MeshError> {
        if region.is_degenerate() {
            debug!(
                "[Mesh] FAILED: degenerate region {}x{}",
                region.width, region.height
            );
            return Err(MeshError::DegenerateRegion {
                width: region.width,
                height: region.height,
            });
        }
        if self.config.max_level > MAX_SUPPORTED_LEVEL {
            return Err(MeshError::InvalidMaxLevel {
                requested: self.config.max_level,
                supported: MAX_SUPPORTED_LEVEL,
            });
        }

        let obstacles: Vec<&Rect> = obstacles.iter().collect();
        let targets: Vec<&Point2D> = targets.unwrap_or(&[]).iter().collect();

        let mut ctx = BuildContext {
            config: &self.config,
            nodes: Vec::new(),
            next_id: 0,
            subdivisions: 0,
            visited: 0,
            cell_budget: self.config.cell_budget(),
        };
        ctx.subdivide(region, 0, &obstacles, &targets)?;

        debug!(
            "[Mesh] built {} nodes from {} obstacles, {} targets ({} subdivisions, {} cells visited, max level {})",
            ctx.nodes.len(),
            obstacles.len(),
            targets.len(),
            ctx.subdivisions,
            ctx.visited,
            self.config.max_level
        );

        Ok(ctx.nodes)
    }
}

impl BuildContext<'_> {
    /// Process one region; returns the number of nodes it contributed.
    ///
    /// Only obstacles and targets that touch the parent are handed down,
    /// since a child can only touch what its parent touches.
    fn subdivide(
        &mut self,
        rect: Rect,
        level: u8,
        obstacles: &[&Rect],
        targets: &[&Point2D],
    ) -> Result<usize, MeshError> {
        self.visited += 1;
        if self.visited > self.cell_budget {
            debug!(
                "[Mesh] FAILED: cell budget {} exhausted at level {}",
                self.cell_budget, level
            );
            return Err(MeshError::CellLimitExceeded {
                limit: self.cell_budget,
            });
        }

        let local_obstacles: Vec<&Rect> = obstacles
            .iter()
            .copied()
            .filter(|o| rects_overlap(&rect, o))
            .collect();
        let local_targets: Vec<&Point2D> = targets
            .iter()
            .copied()
            .filter(|t| rect_contains_point(&rect, **t))
            .collect();

        let has_obstacle = !local_obstacles.is_empty();
        let has_target = !local_targets.is_empty();
        let max_level = self.config.max_level;

        // Every descendant would be pruned, so skip the subtree
        if !has_target && local_obstacles.iter().any(|o| o.covers(&rect)) {
            return Ok(0);
        }

        // Terminal pruning: never subdivide past the depth bound
        if level == max_level && has_obstacle && !has_target {
            return Ok(0);
        }

        let wants_split = has_obstacle || (has_target && self.config.refine_targets);
        if wants_split && level < max_level {
            self.subdivisions += 1;
            let mut emitted = 0;
            for quadrant in rect.quadrants() {
                emitted += self.subdivide(quadrant, level + 1, &local_obstacles, &local_targets)?;
            }
            // Zero children means the whole area was untargeted obstacle
            return Ok(emitted);
        }

        if has_obstacle && !has_target {
            return Ok(0);
        }

        if self.nodes.len() >= self.config.max_nodes {
            debug!(
                "[Mesh] FAILED: node limit {} reached at level {}",
                self.config.max_nodes, level
            );
            return Err(MeshError::NodeLimitExceeded {
                limit: self.config.max_nodes,
            });
        }

        let id = NodeId::new(self.next_id);
        self.next_id += 1;
        self.nodes.push(MeshNode {
            id,
            rect,
            level,
            capacity: self.config.capacity_at(level),
            contains_obstacle: has_obstacle,
            contains_target: has_target,
        });
        Ok(1)
    }
}

/// Build a mesh with default settings and the given depth bound.
pub fn build_mesh(
    region: Rect,
    obstacles: &[Rect],
    targets: Option<&[Point2D]>,
    max_level: u8,
) -> Result<Vec<MeshNode>, MeshError> {
    MeshBuilder::new(MeshConfig::with_max_level(max_level)).build(region, obstacles, targets)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root() -> Rect {
        Rect::square(Point2D::new(400.0, 300.0), 600.0)
    }

    fn obstacle(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(Point2D::new(x, y), w, h)
    }

    #[test]
    fn test_empty_region_single_node() {
        let nodes = build_mesh(root(), &[], None, 6).unwrap();
        assert_eq!(nodes.len(), 1);

        let node = &nodes[0];
        assert_eq!(node.level, 0);
        assert_eq!(node.rect, root());
        assert_eq!(node.capacity, 49);
        assert!(!node.contains_obstacle);
        assert!(!node.contains_target);
    }

    #[test]
    fn test_obstacle_subdivides_only_its_quadrant() {
        // Obstacle well inside the top-left level-2 cell (x 100..250, y 0..150)
        let obstacles = [obstacle(150.0, 50.0, 20.0, 20.0)];
        let nodes = build_mesh(root(), &obstacles, None, 2).unwrap();

        let level1: Vec<_> = nodes.iter().filter(|n| n.level == 1).collect();
        let level2: Vec<_> = nodes.iter().filter(|n| n.level == 2).collect();

        assert_eq!(level1.len(), 3);
        assert_eq!(level2.len(), 3);
        assert_eq!(nodes.len(), 6);

        // All the level-2 cells live inside the top-left quadrant
        let top_left = root().quadrants()[0];
        for n in &level2 {
            assert!(rect_contains_point(&top_left, n.center()));
        }
        // The sibling quadrants stay whole
        for q in &root().quadrants()[1..] {
            assert!(level1.iter().any(|n| n.rect == *q));
        }
    }

    #[test]
    fn test_no_blocked_leaf_and_depth_bound() {
        let obstacles = [
            obstacle(300.0, 200.0, 120.0, 40.0),
            obstacle(520.0, 420.0, 30.0, 200.0),
        ];
        let nodes = build_mesh(root(), &obstacles, None, 5).unwrap();

        assert!(!nodes.is_empty());
        for n in &nodes {
            assert!(n.level <= 5);
            assert!(!n.is_blocked());
            assert!(!obstacles.iter().any(|o| rects_overlap(&n.rect, o)));
        }
    }

    #[test]
    fn test_fully_covered_region_is_empty() {
        let obstacles = [obstacle(400.0, 300.0, 700.0, 700.0)];
        let nodes = build_mesh(root(), &obstacles, None, 3).unwrap();
        assert!(nodes.is_empty());
    }

    #[test]
    fn test_target_survives_under_obstacle() {
        let obstacles = [obstacle(400.0, 300.0, 700.0, 700.0)];
        let target = Point2D::new(130.0, 40.0);
        let nodes = build_mesh(root(), &obstacles, Some(&[target]), 3).unwrap();

        assert!(!nodes.is_empty());
        for n in &nodes {
            assert_eq!(n.level, 3);
            assert!(n.contains_obstacle);
            assert!(n.contains_target);
            assert!(rect_contains_point(&n.rect, target));
        }
    }

    #[test]
    fn test_target_refines_open_space() {
        let target = Point2D::new(130.0, 40.0);
        let nodes = build_mesh(root(), &[], Some(&[target]), 3).unwrap();

        // 3 siblings per level plus the 4 finest cells around the target
        assert_eq!(nodes.len(), 3 + 3 + 4);
        let finest: Vec<_> = nodes.iter().filter(|n| n.contains_target).collect();
        assert_eq!(finest.len(), 1);
        assert_eq!(finest[0].level, 3);
        assert_eq!(finest[0].capacity, 1);
    }

    #[test]
    fn test_target_refinement_disabled() {
        let builder = MeshBuilder::new(MeshConfig {
            refine_targets: false,
            ..MeshConfig::with_max_level(3)
        });
        let target = Point2D::new(130.0, 40.0);
        let nodes = builder.build(root(), &[], Some(&[target])).unwrap();
        assert_eq!(nodes.len(), 1);
        assert!(nodes[0].contains_target);
    }

    #[test]
    fn test_identical_input_identical_mesh() {
        let obstacles = [
            obstacle(250.0, 250.0, 60.0, 90.0),
            obstacle(610.0, 90.0, 35.0, 35.0),
        ];
        let targets = [Point2D::new(120.0, 30.0), Point2D::new(680.0, 580.0)];

        let a = build_mesh(root(), &obstacles, Some(&targets), 6).unwrap();
        let b = build_mesh(root(), &obstacles, Some(&targets), 6).unwrap();

        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            assert!(x.same_geometry(y));
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let obstacles = [obstacle(400.0, 300.0, 10.0, 10.0)];
        let nodes = build_mesh(root(), &obstacles, None, 6).unwrap();
        let mut ids: Vec<_> = nodes.iter().map(|n| n.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), nodes.len());
    }

    #[test]
    fn test_degenerate_region_rejected() {
        let region = Rect::new(Point2D::new(0.0, 0.0), 0.0, 100.0);
        let err = build_mesh(region, &[], None, 4).unwrap_err();
        assert_eq!(
            err,
            MeshError::DegenerateRegion {
                width: 0.0,
                height: 100.0
            }
        );

        let negative = Rect::new(Point2D::new(0.0, 0.0), 10.0, -1.0);
        assert!(build_mesh(negative, &[], None, 4).is_err());
    }

    #[test]
    fn test_invalid_max_level_rejected() {
        let err = build_mesh(root(), &[], None, MAX_SUPPORTED_LEVEL + 1).unwrap_err();
        assert!(matches!(err, MeshError::InvalidMaxLevel { .. }));
    }

    #[test]
    fn test_node_limit() {
        let builder = MeshBuilder::new(MeshConfig::with_max_level(6).with_max_nodes(10));
        let obstacles = [obstacle(400.0, 300.0, 5.0, 5.0)];
        let err = builder.build(root(), &obstacles, None).unwrap_err();
        assert_eq!(err, MeshError::NodeLimitExceeded { limit: 10 });
    }

    #[test]
    fn test_covered_region_returns_at_deepest_level() {
        let builder = MeshBuilder::new(
            MeshConfig::with_max_level(MAX_SUPPORTED_LEVEL).with_max_nodes(10),
        );
        let obstacles = [obstacle(400.0, 300.0, 700.0, 700.0)];
        let nodes = builder.build(root(), &obstacles, None).unwrap();
        assert!(nodes.is_empty());
    }

    #[test]
    fn test_covered_quadrant_matches_full_descent() {
        // Covers the top-left quadrant exactly, plus a little
        let obstacles = [obstacle(250.0, 150.0, 310.0, 310.0)];
        let nodes = build_mesh(root(), &obstacles, None, 4).unwrap();

        let top_left = root().quadrants()[0];
        assert!(!nodes.iter().any(|n| top_left.covers(&n.rect)));
        for n in &nodes {
            assert!(!rects_overlap(&n.rect, &obstacles[0]));
        }
    }

    #[test]
    fn test_cell_budget_bounds_pruned_work() {
        // A sliver of open space keeps every column cell partially blocked,
        // so the builder descends without emitting anything
        let obstacles = [obstacle(400.05, 300.0, 599.9, 700.0)];
        let builder = MeshBuilder::new(MeshConfig::with_max_level(12).with_max_nodes(10));
        let err = builder.build(root(), &obstacles, None).unwrap_err();
        assert_eq!(
            err,
            MeshError::CellLimitExceeded {
                limit: MeshConfig::with_max_level(12).with_max_nodes(10).cell_budget()
            }
        );
    }
}
