//! Orientation ("sidedness") predicates.
//!
//! Every branching decision in the hull algorithms goes through `orientation`.
//! Inputs are `f32`; the determinant is evaluated in `f64` so coordinate
//! differences are exact and the sign is reliable near collinearity.
//!
//! Conventions
//! - `orientation(a, b, c) > 0`: `c` is left of the directed line `a → b`.
//! - Strict vs. tolerant tests are chosen by the caller through `Tolerance`.

use super::types::{Line, Point, Triangle};

/// Selects how `is_left` / `is_right` treat (near-)zero orientation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tolerance {
    /// Sign must be strictly positive (left) or strictly negative (right).
    Strict,
    /// Orientation within `eps` of zero counts as on the requested side.
    Eps(f64),
}

impl Tolerance {
    /// Slack as a non-negative number (`0` for `Strict`).
    #[inline]
    pub fn eps(&self) -> f64 {
        match *self {
            Tolerance::Strict => 0.0,
            Tolerance::Eps(e) => e.max(0.0),
        }
    }
}

/// Twice the signed area of triangle `(a, b, c)`.
#[inline]
pub fn orientation(a: Point, b: Point, c: Point) -> f64 {
    let (ax, ay) = (f64::from(a.x), f64::from(a.y));
    let (bx, by) = (f64::from(b.x), f64::from(b.y));
    let (cx, cy) = (f64::from(c.x), f64::from(c.y));
    (bx - ax) * (cy - ay) - (by - ay) * (cx - ax)
}

/// `c` left of `a → b` (strict), or on/left within `eps` (tolerant).
#[inline]
pub fn is_left(a: Point, b: Point, c: Point, tol: Tolerance) -> bool {
    let o = orientation(a, b, c);
    match tol {
        Tolerance::Strict => o > 0.0,
        Tolerance::Eps(_) => o >= -tol.eps(),
    }
}

/// Mirror of `is_left`: `c` right of `a → b`.
#[inline]
pub fn is_right(a: Point, b: Point, c: Point, tol: Tolerance) -> bool {
    let o = orientation(a, b, c);
    match tol {
        Tolerance::Strict => o < 0.0,
        Tolerance::Eps(_) => o <= tol.eps(),
    }
}

/// Unnormalized distance from `p` to `line`.
///
/// Only meaningful for ranking points against one fixed line: the missing
/// denominator is the line length, which is constant across comparisons.
#[inline]
pub fn distance_proxy(line: &Line, p: Point) -> f64 {
    orientation(line.p1, line.p2, p).abs()
}

/// Point in closed triangle: no two edges see `p` on opposite sides.
pub fn is_inside_triangle(t: &Triangle, p: Point) -> bool {
    let d1 = orientation(t.p1, t.p2, p);
    let d2 = orientation(t.p2, t.p3, p);
    let d3 = orientation(t.p3, t.p1, p);
    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(has_neg && has_pos)
}
