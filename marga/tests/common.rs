//! Test utilities for Marga integration tests.
//!
//! Deterministic layouts, hand-built graphs and scenario paths.

#![allow(dead_code)]

use std::path::PathBuf;

use marga::core::{EdgeId, NodeId, Point2D, Rect};
use marga::mesh::{Edge, MeshGraph, MeshNode};

/// Install a test logger once
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// The 600x600 root region centered at (400, 300)
pub fn root_region() -> Rect {
    Rect::square(Point2D::new(400.0, 300.0), 600.0)
}

/// Small deterministic generator for reproducible layouts
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self(seed.wrapping_mul(0x9E37_79B9_7F4A_7C15) | 1)
    }

    /// Uniform in [0, 1)
    pub fn next_unit(&mut self) -> f32 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        (self.0 >> 40) as f32 / (1u64 << 24) as f32
    }

    /// Uniform in [lo, hi)
    pub fn range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + (hi - lo) * self.next_unit()
    }

    /// Point inside `rect`, away from its border
    pub fn point_in(&mut self, rect: &Rect, margin: f32) -> Point2D {
        Point2D::new(
            self.range(rect.left() + margin, rect.right() - margin),
            self.range(rect.top() + margin, rect.bottom() - margin),
        )
    }
}

/// `count` obstacles of side 10..60 scattered over the root region
pub fn scattered_obstacles(seed: u64, count: usize) -> Vec<Rect> {
    let mut rng = Lcg::new(seed);
    let region = root_region();
    (0..count)
        .map(|_| {
            let center = rng.point_in(&region, 40.0);
            Rect::new(center, rng.range(10.0, 60.0), rng.range(10.0, 60.0))
        })
        .collect()
}

/// `count` endpoint pairs scattered over the root region
pub fn scattered_pairs(seed: u64, count: usize) -> Vec<(Point2D, Point2D)> {
    let mut rng = Lcg::new(seed);
    let region = root_region();
    (0..count)
        .map(|_| (rng.point_in(&region, 20.0), rng.point_in(&region, 20.0)))
        .collect()
}

/// Open square cell
pub fn cell(id: u32, x: f32, y: f32, size: f32, capacity: u32) -> MeshNode {
    MeshNode {
        id: NodeId::new(id),
        rect: Rect::square(Point2D::new(x, y), size),
        level: 3,
        capacity,
        contains_obstacle: false,
        contains_target: false,
    }
}

/// Graph from nodes and `(a, b)` id pairs
pub fn graph_from(nodes: Vec<MeshNode>, pairs: &[(u32, u32)]) -> MeshGraph {
    let edges = pairs
        .iter()
        .enumerate()
        .map(|(i, &(a, b))| Edge {
            id: EdgeId::new(i as u32),
            from: NodeId::new(a),
            to: NodeId::new(b),
        })
        .collect();
    MeshGraph::from_parts(nodes, edges).expect("valid test graph")
}

/// Two corridors A-X-B and C-X-D crossing in one capacity-1 node X.
///
/// Ids: A=0, X=1, B=2, C=3, D=4.
pub fn bottleneck_graph() -> MeshGraph {
    let nodes = vec![
        cell(0, 5.0, 15.0, 10.0, 4),
        cell(1, 15.0, 15.0, 10.0, 1),
        cell(2, 25.0, 15.0, 10.0, 4),
        cell(3, 15.0, 5.0, 10.0, 4),
        cell(4, 15.0, 25.0, 10.0, 4),
    ];
    graph_from(nodes, &[(0, 1), (1, 2), (3, 1), (1, 4)])
}

/// Path to a bundled scenario file
pub fn scenario_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(format!("{name}.yaml"))
}

/// Path to the bundled default config
pub fn config_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("configs/marga.yaml")
}
