//! Value types shared by every hull algorithm.
//!
//! - `Point`: single-precision input coordinates; equality is exact.
//! - `Line`, `Triangle`: small `Copy` carriers for the predicates.
//! - `Hull`: owned boundary in clockwise order, no closing duplicate.
//!
//! Code cross-refs: `predicates::{orientation, distance_proxy}`, `crate::validate`

use std::cmp::Ordering;

use nalgebra::Point2;

use super::predicates::{self, Tolerance};

/// Input point. Coordinates are `f32`; predicates widen to `f64`.
pub type Point = Point2<f32>;

/// Directed line through `p1` towards `p2`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub p1: Point,
    pub p2: Point,
}

impl Line {
    #[inline]
    pub fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }
    #[inline]
    pub fn reversed(&self) -> Self {
        Self {
            p1: self.p2,
            p2: self.p1,
        }
    }
    #[inline]
    pub fn orientation(&self, p: Point) -> f64 {
        predicates::orientation(self.p1, self.p2, p)
    }
    #[inline]
    pub fn is_left(&self, p: Point, tol: Tolerance) -> bool {
        predicates::is_left(self.p1, self.p2, p, tol)
    }
    #[inline]
    pub fn is_right(&self, p: Point, tol: Tolerance) -> bool {
        predicates::is_right(self.p1, self.p2, p, tol)
    }
    #[inline]
    pub fn distance_proxy(&self, p: Point) -> f64 {
        predicates::distance_proxy(self, p)
    }
}

/// Ordered triple of points; only used by the inside-triangle test.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub p1: Point,
    pub p2: Point,
    pub p3: Point,
}

impl Triangle {
    #[inline]
    pub fn new(p1: Point, p2: Point, p3: Point) -> Self {
        Self { p1, p2, p3 }
    }
    /// Closed containment (boundary counts as inside).
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        predicates::is_inside_triangle(self, p)
    }
}

/// Convex hull boundary.
///
/// Invariants (for hulls produced by this crate):
/// - Clockwise: upper chain left to right, then lower chain right to left.
/// - Starts at the leftmost point with the largest y.
/// - No closing duplicate; fewer than 3 vertices only for degenerate input.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Hull {
    pub points: Vec<Point>,
}

impl Hull {
    #[inline]
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }
    #[inline]
    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    /// Boundary edges, closing edge included. Empty below two vertices.
    pub fn edges(&self) -> impl Iterator<Item = Line> + '_ {
        let n = self.points.len();
        let count = if n < 2 { 0 } else { n };
        (0..count).map(move |k| Line::new(self.points[k], self.points[(k + 1) % n]))
    }

    /// Shoelace area in f64; negative for clockwise boundaries.
    pub fn signed_area(&self) -> f64 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }
        let mut twice = 0.0;
        for k in 0..n {
            let p = self.points[k];
            let q = self.points[(k + 1) % n];
            twice += f64::from(p.x) * f64::from(q.y) - f64::from(q.x) * f64::from(p.y);
        }
        0.5 * twice
    }

    /// Sorted, deduplicated copy of the vertices (order-insensitive comparisons).
    pub fn vertex_set(&self) -> Vec<Point> {
        let mut v = self.points.clone();
        v.sort_by(lexicographic_cmp);
        v.dedup();
        v
    }

    #[inline]
    pub fn same_vertex_set(&self, other: &Hull) -> bool {
        self.vertex_set() == other.vertex_set()
    }
}

impl From<Vec<Point>> for Hull {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl<'a> IntoIterator for &'a Hull {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;
    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Order by x, then y. Consistent with `Point` equality on finite inputs.
#[inline]
pub fn lexicographic_cmp(a: &Point, b: &Point) -> Ordering {
    match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    }
}
