//! Graham scan, monotone-chain variant (sort, then two stack sweeps).
//!
//! - Sort by x ascending, ties by y descending, so vertical runs are walked
//!   top to bottom and both chains start at the top-left point.
//! - Turn tests are non-strict: collinear boundary points are dropped and the
//!   result is the minimal vertex hull.
//! - Deterministic; O(n log n).

use std::cmp::Ordering;

use crate::algo::ConvexHull2;
use crate::geom::{orientation, Hull, Point};

/// Sort-then-scan hull.
#[derive(Clone, Copy, Debug, Default)]
pub struct GrahamScan;

/// Which chain a sweep builds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Turn {
    /// Upper chain keeps only clockwise turns.
    Clockwise,
    /// Lower chain keeps only counterclockwise turns.
    Counterclockwise,
}

impl Turn {
    #[inline]
    fn rejects(self, o: f64) -> bool {
        match self {
            Turn::Clockwise => o >= 0.0,
            Turn::Counterclockwise => o <= 0.0,
        }
    }
}

/// x ascending, then y descending.
fn scan_order(a: &Point, b: &Point) -> Ordering {
    match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => b.y.partial_cmp(&a.y).unwrap_or(Ordering::Equal),
        o => o,
    }
}

fn sweep(sorted: &[Point], turn: Turn) -> Vec<Point> {
    let mut chain: Vec<Point> = Vec::with_capacity(sorted.len());
    for &p in sorted {
        while chain.len() >= 2
            && turn.rejects(orientation(chain[chain.len() - 2], chain[chain.len() - 1], p))
        {
            chain.pop();
        }
        chain.push(p);
    }
    chain
}

impl GrahamScan {
    pub fn hull(points: &[Point]) -> Hull {
        if points.len() <= 2 {
            return Hull::new(points.to_vec());
        }
        let mut pts = points.to_vec();
        pts.sort_by(scan_order);
        pts.dedup();
        if pts.len() <= 2 {
            return Hull::new(pts);
        }

        let upper = sweep(&pts, Turn::Clockwise);
        let lower = sweep(&pts, Turn::Counterclockwise);

        // Both chains share their first and last point.
        let mut hull = upper;
        if lower.len() > 2 {
            hull.extend(lower[1..lower.len() - 1].iter().rev());
        }
        tracing::debug!(algo = "graham", n = points.len(), h = hull.len(), "hull");
        Hull::new(hull)
    }
}

impl ConvexHull2 for GrahamScan {
    fn name(&self) -> &'static str {
        "graham"
    }
    fn compute(&self, points: &[Point]) -> Hull {
        GrahamScan::hull(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(raw: &[(f32, f32)]) -> Vec<Point> {
        raw.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn tiny_inputs_unchanged() {
        assert!(GrahamScan::hull(&[]).is_empty());
        let one = pts(&[(3.0, 4.0)]);
        assert_eq!(GrahamScan::hull(&one).points, one);
        let two = pts(&[(5.0, 0.0), (1.0, 2.0)]);
        assert_eq!(GrahamScan::hull(&two).points, two);
    }

    #[test]
    fn square_with_center_is_clockwise_from_top_left() {
        let input = pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.5, 0.5)]);
        let hull = GrahamScan::hull(&input);
        assert_eq!(
            hull.points,
            pts(&[(0.0, 1.0), (1.0, 1.0), (1.0, 0.0), (0.0, 0.0)])
        );
        assert!(hull.signed_area() < 0.0);
    }

    #[test]
    fn collinear_keeps_extremes_only() {
        let hull = GrahamScan::hull(&pts(&[(1.0, 0.0), (0.0, 0.0), (2.0, 0.0)]));
        assert_eq!(hull.points, pts(&[(0.0, 0.0), (2.0, 0.0)]));
        let vertical = GrahamScan::hull(&pts(&[(1.0, -1.0), (1.0, 0.0), (1.0, 1.0)]));
        assert_eq!(vertical.points, pts(&[(1.0, 1.0), (1.0, -1.0)]));
    }

    #[test]
    fn duplicates_collapse() {
        let hull = GrahamScan::hull(&pts(&[(2.0, 2.0), (2.0, 2.0), (2.0, 2.0)]));
        assert_eq!(hull.points, pts(&[(2.0, 2.0)]));
        let tri = GrahamScan::hull(&pts(&[
            (0.0, 0.0),
            (4.0, 0.0),
            (0.0, 0.0),
            (2.0, 3.0),
            (4.0, 0.0),
        ]));
        assert_eq!(tri.points, pts(&[(0.0, 0.0), (2.0, 3.0), (4.0, 0.0)]));
    }

    #[test]
    fn vertical_edges_on_both_sides() {
        let input = pts(&[
            (0.0, 0.0),
            (0.0, 1.0),
            (0.0, 2.0),
            (3.0, 2.0),
            (3.0, 0.0),
            (1.5, 1.0),
            (3.0, 1.0),
        ]);
        let hull = GrahamScan::hull(&input);
        assert_eq!(
            hull.points,
            pts(&[(0.0, 2.0), (3.0, 2.0), (3.0, 0.0), (0.0, 0.0)])
        );
    }
}
