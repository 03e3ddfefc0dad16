//! Independent hull oracle.
//!
//! Checks a candidate hull against its input using only the orientation
//! predicates; never mutates anything and is not used by the algorithms.
//!
//! Checks, in order
//! - every hull vertex is an input point;
//! - fewer than 3 vertices only when the input itself is degenerate
//!   (identical or collinear), and then every point lies on the hull;
//! - 3+ vertices: no vertex repeated back to back, clockwise (negative area),
//!   no left turn at any vertex, and
//!   every input point is a vertex or on the inner side of every edge.
//!
//! Tolerance
//! - `ValidateCfg::default()` uses `Tolerance::Eps(0.0)`: zero turns and
//!   boundary points pass. `Tolerance::Strict` demands strict turns and
//!   strictly interior non-vertex points.

use std::fmt;

use crate::geom::{is_right, lexicographic_cmp, orientation, Hull, Point, Tolerance};

#[derive(Clone, Copy, Debug)]
pub struct ValidateCfg {
    pub tolerance: Tolerance,
}

impl Default for ValidateCfg {
    fn default() -> Self {
        Self {
            tolerance: Tolerance::Eps(0.0),
        }
    }
}

/// First reason a hull was rejected. Indices refer to the hull (`NotConvex`,
/// `ForeignVertex`) or to the input (`PointOutside`).
#[derive(Clone, Debug, PartialEq)]
pub enum HullViolation {
    ForeignVertex { index: usize },
    DegenerateHull { vertices: usize },
    RepeatedVertex { index: usize },
    WrongOrientation,
    NotConvex { index: usize },
    PointOutside { index: usize },
}

impl fmt::Display for HullViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ForeignVertex { index } => {
                write!(f, "hull vertex {index} is not an input point")
            }
            Self::DegenerateHull { vertices } => {
                write!(f, "degenerate hull ({vertices} vertices) for this input")
            }
            Self::RepeatedVertex { index } => {
                write!(f, "hull vertex {index} repeats its predecessor")
            }
            Self::WrongOrientation => write!(f, "hull is not clockwise"),
            Self::NotConvex { index } => write!(f, "left turn at hull vertex {index}"),
            Self::PointOutside { index } => write!(f, "input point {index} lies outside the hull"),
        }
    }
}

impl std::error::Error for HullViolation {}

/// `true` iff `validate_hull` with default tolerance accepts.
pub fn is_valid_hull(hull: &Hull, points: &[Point]) -> bool {
    validate_hull(hull, points, ValidateCfg::default()).is_ok()
}

pub fn validate_hull(hull: &Hull, points: &[Point], cfg: ValidateCfg) -> Result<(), HullViolation> {
    let tol = cfg.tolerance;
    let mut sorted_input = points.to_vec();
    sorted_input.sort_by(lexicographic_cmp);
    for (index, v) in hull.iter().enumerate() {
        if !contains_sorted(&sorted_input, v) {
            return Err(HullViolation::ForeignVertex { index });
        }
    }

    let h = hull.as_slice();
    match h.len() {
        0 if points.is_empty() => Ok(()),
        0 => Err(HullViolation::DegenerateHull { vertices: 0 }),
        1 | 2 => {
            if !all_collinear(points, tol) {
                return Err(HullViolation::DegenerateHull { vertices: h.len() });
            }
            let (a, b) = (h[0], h[h.len() - 1]);
            match points.iter().position(|&p| !on_segment(a, b, p)) {
                Some(index) => Err(HullViolation::PointOutside { index }),
                None => Ok(()),
            }
        }
        n => {
            if let Some(k) = (0..n).find(|&k| h[k] == h[(k + 1) % n]) {
                return Err(HullViolation::RepeatedVertex {
                    index: (k + 1) % n,
                });
            }
            let area = hull.signed_area();
            if area == 0.0 {
                return Err(HullViolation::DegenerateHull { vertices: n });
            }
            if area > 0.0 {
                return Err(HullViolation::WrongOrientation);
            }
            for k in 0..n {
                let (a, b, c) = (h[k], h[(k + 1) % n], h[(k + 2) % n]);
                if !is_right(a, b, c, tol) {
                    return Err(HullViolation::NotConvex {
                        index: (k + 1) % n,
                    });
                }
            }
            let mut sorted_hull = h.to_vec();
            sorted_hull.sort_by(lexicographic_cmp);
            for (index, &p) in points.iter().enumerate() {
                if contains_sorted(&sorted_hull, &p) {
                    continue;
                }
                if !inside_convex_cw(h, p, tol) {
                    return Err(HullViolation::PointOutside { index });
                }
            }
            Ok(())
        }
    }
}

fn contains_sorted(sorted: &[Point], p: &Point) -> bool {
    sorted.binary_search_by(|q| lexicographic_cmp(q, p)).is_ok()
}

/// All points identical or on one line (within `tol`).
fn all_collinear(points: &[Point], tol: Tolerance) -> bool {
    let Some(&a) = points.first() else {
        return true;
    };
    let Some(&b) = points.iter().find(|&&p| p != a) else {
        return true;
    };
    points
        .iter()
        .all(|&p| orientation(a, b, p).abs() <= tol.eps())
}

/// `p` on the closed segment `[a, b]` (assumes collinearity was checked).
fn on_segment(a: Point, b: Point, p: Point) -> bool {
    if a == b {
        return p == a;
    }
    let (dx, dy) = (f64::from(b.x) - f64::from(a.x), f64::from(b.y) - f64::from(a.y));
    let t = (f64::from(p.x) - f64::from(a.x)) * dx + (f64::from(p.y) - f64::from(a.y)) * dy;
    (0.0..=dx * dx + dy * dy).contains(&t)
}

/// Point in a convex clockwise polygon (n >= 3) in O(log n).
///
/// Rays from `h[0]` to `h[1..]` turn clockwise; locate the fan wedge holding
/// `p`, then test the one edge closing that wedge.
fn inside_convex_cw(h: &[Point], p: Point, tol: Tolerance) -> bool {
    let n = h.len();
    let v0 = h[0];
    if !is_right(v0, h[1], p, tol) || !is_right(h[n - 1], v0, p, tol) {
        return false;
    }
    let (mut lo, mut hi) = (1usize, n - 1);
    while hi - lo > 1 {
        let mid = (lo + hi) / 2;
        if orientation(v0, h[mid], p) <= 0.0 {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    is_right(h[lo], h[lo + 1], p, tol)
}
