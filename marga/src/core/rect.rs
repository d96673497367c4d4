//! Axis-aligned rectangles and the geometry predicates used by the mesh.
//!
//! Rectangles are stored center-first, `center ± size/2` per axis, which is
//! how obstacles and mesh cells are described throughout the crate.
//!
//! # Usage
//!
//! ```rust
//! use marga::core::{Point2D, Rect, rect_contains_point, rects_overlap};
//!
//! let cell = Rect::new(Point2D::new(0.0, 0.0), 10.0, 10.0);
//! let obstacle = Rect::new(Point2D::new(4.0, 4.0), 4.0, 4.0);
//!
//! assert!(rects_overlap(&cell, &obstacle));
//! assert!(rect_contains_point(&cell, Point2D::new(5.0, -5.0)));
//! ```

use serde::{Deserialize, Serialize};

use super::point::Point2D;

/// Axis-aligned rectangle described by its center and extent.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Center point
    pub center: Point2D,
    /// Extent along x
    pub width: f32,
    /// Extent along y
    pub height: f32,
}

impl Rect {
    /// Create a rectangle from center and size
    #[inline]
    pub const fn new(center: Point2D, width: f32, height: f32) -> Self {
        Self {
            center,
            width,
            height,
        }
    }

    /// Create a rectangle from two opposite corners (in any order)
    pub fn from_corners(a: Point2D, b: Point2D) -> Self {
        let min = Point2D::new(a.x.min(b.x), a.y.min(b.y));
        let max = Point2D::new(a.x.max(b.x), a.y.max(b.y));
        Self {
            center: Point2D::new((min.x + max.x) * 0.5, (min.y + max.y) * 0.5),
            width: max.x - min.x,
            height: max.y - min.y,
        }
    }

    /// Square of the given side length
    #[inline]
    pub const fn square(center: Point2D, side: f32) -> Self {
        Self::new(center, side, side)
    }

    /// Smallest x
    #[inline]
    pub fn left(&self) -> f32 {
        self.center.x - self.width * 0.5
    }

    /// Largest x
    #[inline]
    pub fn right(&self) -> f32 {
        self.center.x + self.width * 0.5
    }

    /// Smallest y
    #[inline]
    pub fn top(&self) -> f32 {
        self.center.y - self.height * 0.5
    }

    /// Largest y
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.center.y + self.height * 0.5
    }

    /// Minimum corner
    #[inline]
    pub fn min(&self) -> Point2D {
        Point2D::new(self.left(), self.top())
    }

    /// Maximum corner
    #[inline]
    pub fn max(&self) -> Point2D {
        Point2D::new(self.right(), self.bottom())
    }

    /// Area
    #[inline]
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// True when the rectangle cannot be subdivided meaningfully:
    /// non-finite center or size, or a zero/negative extent.
    pub fn is_degenerate(&self) -> bool {
        !self.center.is_finite()
            || !self.width.is_finite()
            || !self.height.is_finite()
            || self.width <= 0.0
            || self.height <= 0.0
    }

    /// `other` lies entirely inside this rectangle, borders included
    #[inline]
    pub fn covers(&self, other: &Rect) -> bool {
        self.left() <= other.left()
            && self.right() >= other.right()
            && self.top() <= other.top()
            && self.bottom() >= other.bottom()
    }

    /// Split into four equal quadrants.
    ///
    /// Order is fixed: top-left, top-right, bottom-left, bottom-right.
    /// Node identities in the mesh follow this order.
    pub fn quadrants(&self) -> [Rect; 4] {
        let w = self.width * 0.5;
        let h = self.height * 0.5;
        let (cx, cy) = (self.center.x, self.center.y);
        [
            Rect::new(Point2D::new(cx - w * 0.5, cy - h * 0.5), w, h),
            Rect::new(Point2D::new(cx + w * 0.5, cy - h * 0.5), w, h),
            Rect::new(Point2D::new(cx - w * 0.5, cy + h * 0.5), w, h),
            Rect::new(Point2D::new(cx + w * 0.5, cy + h * 0.5), w, h),
        ]
    }
}

/// Tolerances for the border-adjacency test.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BorderTolerance {
    /// Maximum gap between facing edges (strictly less than)
    pub epsilon: f32,
    /// Minimum shared border length
    pub min_overlap: f32,
}

impl Default for BorderTolerance {
    fn default() -> Self {
        Self {
            epsilon: 1.0,
            min_overlap: 1.0,
        }
    }
}

impl BorderTolerance {
    /// Tolerance no coarser than half of `cell_side`.
    ///
    /// Two cells of side `cell_side` share a border of that length, so the
    /// fitted tolerance still joins them. Non-adjacent cells of a quadtree are
    /// at least one finest side apart, so they stay disjoint.
    pub fn fitted_to(&self, cell_side: f32) -> Self {
        let cap = cell_side * 0.5;
        Self {
            epsilon: self.epsilon.min(cap),
            min_overlap: self.min_overlap.min(cap),
        }
    }
}

/// Strict overlap test. Rectangles that only touch along an edge do not overlap.
#[inline]
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    (a.center.x - b.center.x).abs() < (a.width + b.width) * 0.5
        && (a.center.y - b.center.y).abs() < (a.height + b.height) * 0.5
}

/// Point containment, inclusive on all borders.
#[inline]
pub fn rect_contains_point(rect: &Rect, point: Point2D) -> bool {
    point.x >= rect.left()
        && point.x <= rect.right()
        && point.y >= rect.top()
        && point.y <= rect.bottom()
}

/// Length of the overlap of two closed intervals (negative when disjoint).
#[inline]
fn interval_overlap(a_min: f32, a_max: f32, b_min: f32, b_max: f32) -> f32 {
    a_max.min(b_max) - a_min.max(b_min)
}

/// Border-adjacency test.
///
/// Two rectangles share a vertical border when one's right edge sits within
/// `epsilon` of the other's left edge and their vertical extents overlap by
/// at least `min_overlap`. The horizontal case swaps the axes. Corner
/// contact never qualifies as long as `min_overlap > 0`.
pub fn share_border(a: &Rect, b: &Rect, tolerance: &BorderTolerance) -> bool {
    let eps = tolerance.epsilon;

    let vertical = ((a.right() - b.left()).abs() < eps || (a.left() - b.right()).abs() < eps)
        && interval_overlap(a.top(), a.bottom(), b.top(), b.bottom()) >= tolerance.min_overlap;

    let horizontal = ((a.bottom() - b.top()).abs() < eps || (a.top() - b.bottom()).abs() < eps)
        && interval_overlap(a.left(), a.right(), b.left(), b.right()) >= tolerance.min_overlap;

    vertical || horizontal
}
