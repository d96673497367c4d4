//! Problem input formats.
//!
//! ```rust,ignore
//! use marga::io::Scenario;
//! use std::path::Path;
//!
//! let scenario = Scenario::load(Path::new("scenarios/two_lanes.yaml"))?;
//! let outcome = scenario.run()?;
//! ```

pub mod scenario;

pub use scenario::{RectSpec, Scenario, ScenarioError};
