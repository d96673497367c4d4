//! Core types shared by the mesh and routing layers.
//!
//! - [`Point2D`]: plane coordinates
//! - [`Rect`]: center-based axis-aligned rectangle (obstacles, cells, region)
//! - Geometry predicates: [`rects_overlap`], [`rect_contains_point`], [`share_border`]
//! - Opaque identities: [`NodeId`], [`EdgeId`], [`ObjectiveId`]

mod ids;
mod point;
mod rect;

pub use ids::{EdgeId, NodeId, ObjectiveId};
pub use point::Point2D;
pub use rect::{BorderTolerance, Rect, rect_contains_point, rects_overlap, share_border};
