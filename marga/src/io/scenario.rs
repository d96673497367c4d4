//! Scenario YAML parsing.
//!
//! A scenario describes one routing problem:
//! - Root region and obstacles
//! - Named connections between plane points
//! - Optional configuration override
//!
//! ```yaml
//! name: two_lanes
//! region: { x: 400, y: 300, width: 600, height: 600 }
//! obstacles:
//!   - { x: 400, y: 300, width: 100, height: 100 }
//! connections:
//!   - name: upper
//!     start: { x: 150, y: 100 }
//!     end: { x: 650, y: 100 }
//! config:
//!   mesh:
//!     max_level: 5
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

use crate::config::MargaConfig;
use crate::core::{Point2D, Rect};
use crate::error::Result;
use crate::planner::{Connection, RoutePlanner, RoutingOutcome, RoutingProblem};

/// A routing scenario loaded from YAML
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Human-readable scenario name
    pub name: String,

    /// Optional description
    #[serde(default)]
    pub description: String,

    /// Root region of the mesh
    pub region: RectSpec,

    /// Blocking rectangles
    #[serde(default)]
    pub obstacles: Vec<RectSpec>,

    /// Connections to route
    #[serde(default)]
    pub connections: Vec<Connection>,

    /// Configuration override (None = caller's configuration)
    #[serde(default)]
    pub config: Option<MargaConfig>,
}

/// Rectangle as written in scenario files: center plus extent
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RectSpec {
    /// Center X
    pub x: f32,
    /// Center Y
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl RectSpec {
    /// Convert to Rect
    pub fn to_rect(&self) -> Rect {
        Rect::new(Point2D::new(self.x, self.y), self.width, self.height)
    }
}

impl From<Rect> for RectSpec {
    fn from(rect: Rect) -> Self {
        Self {
            x: rect.center.x,
            y: rect.center.y,
            width: rect.width,
            height: rect.height,
        }
    }
}

/// Error type for scenario loading
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScenarioError {
    /// I/O error reading file
    #[error("I/O error: {0}")]
    Io(String),
    /// YAML parsing error
    #[error("Parse error: {0}")]
    Parse(String),
    /// Structurally valid YAML describing an unusable scenario
    #[error("Invalid scenario: {0}")]
    Invalid(String),
}

impl Scenario {
    /// Load scenario from YAML file
    pub fn load(path: &Path) -> std::result::Result<Self, ScenarioError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ScenarioError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Parse from YAML string and validate
    pub fn from_yaml(yaml: &str) -> std::result::Result<Self, ScenarioError> {
        let scenario: Self =
            serde_yaml::from_str(yaml).map_err(|e| ScenarioError::Parse(e.to_string()))?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Check connection names and endpoint coordinates
    pub fn validate(&self) -> std::result::Result<(), ScenarioError> {
        let mut names = HashSet::new();
        for c in &self.connections {
            if c.name.is_empty() {
                return Err(ScenarioError::Invalid("connection without a name".into()));
            }
            if !names.insert(c.name.as_str()) {
                return Err(ScenarioError::Invalid(format!(
                    "duplicate connection '{}'",
                    c.name
                )));
            }
            if !c.start.is_finite() || !c.end.is_finite() {
                return Err(ScenarioError::Invalid(format!(
                    "connection '{}' has a non-finite endpoint",
                    c.name
                )));
            }
        }
        Ok(())
    }

    /// Convert to a routing problem
    pub fn to_problem(&self) -> RoutingProblem {
        RoutingProblem {
            region: self.region.to_rect(),
            obstacles: self.obstacles.iter().map(RectSpec::to_rect).collect(),
            connections: self.connections.clone(),
        }
    }

    /// Planner for this scenario: its own override, else `fallback`
    pub fn planner(&self, fallback: &MargaConfig) -> RoutePlanner {
        RoutePlanner::from_config(self.config.as_ref().unwrap_or(fallback))
    }

    /// Plan with the scenario override or built-in defaults
    pub fn run(&self) -> Result<RoutingOutcome> {
        self.planner(&MargaConfig::default()).plan(&self.to_problem())
    }
}
