//! QuickHull: farthest-point partitioning.
//!
//! Model
//! - Split the input by the segment between the two x-extreme points, then
//!   repeatedly take the candidate farthest from the current segment (a
//!   confirmed vertex), prune the triangle it spans and split the rest.
//! - Expected O(n log n); O(n²) when most points sit on the boundary
//!   (points on a circle), which the benches cover on purpose.
//!
//! Conventions
//! - Extreme tie rule: the leftmost group contributes its highest point, the
//!   rightmost group its lowest. The hull therefore starts at the top-left
//!   point and runs clockwise, like the other algorithms in this crate.
//! - Farthest-point ties take the candidate furthest along `a → b`; the
//!   other end of the tied run is then the unique farthest point of the
//!   next split, and the points between are pruned as collinear.
//! - Work is driven by an explicit stack, so depth never touches the call stack.

use crate::algo::ConvexHull2;
use crate::geom::{is_left, Hull, Line, Point, Tolerance};

/// Farthest-point divide and conquer.
#[derive(Clone, Copy, Debug, Default)]
pub struct QuickHull;

enum Task {
    /// Candidates strictly left of `a → b`; emits the chain strictly between them.
    Split {
        a: Point,
        b: Point,
        candidates: Vec<Point>,
    },
    Emit(Point),
}

/// (leftmost with max y, rightmost with min y); first occurrence wins.
fn extremes(points: &[Point]) -> (Point, Point) {
    let mut left = points[0];
    let mut right = points[0];
    for &p in &points[1..] {
        if p.x < left.x || (p.x == left.x && p.y > left.y) {
            left = p;
        }
        if p.x > right.x || (p.x == right.x && p.y < right.y) {
            right = p;
        }
    }
    (left, right)
}

/// Position of `p` along `a → b` (unnormalized projection).
#[inline]
fn along(line: &Line, p: Point) -> f64 {
    let (ax, ay) = (f64::from(line.p1.x), f64::from(line.p1.y));
    let (dx, dy) = (f64::from(line.p2.x) - ax, f64::from(line.p2.y) - ay);
    (f64::from(p.x) - ax) * dx + (f64::from(p.y) - ay) * dy
}

/// Farthest candidate from `line`. Tied candidates lie on one parallel
/// supporting line; only its two ends are vertices, so take the end nearest `p2`.
fn farthest(line: &Line, candidates: &[Point]) -> Point {
    let mut best = candidates[0];
    let mut best_d = line.distance_proxy(best);
    for &p in &candidates[1..] {
        let d = line.distance_proxy(p);
        if d > best_d || (d == best_d && along(line, p) > along(line, best)) {
            best = p;
            best_d = d;
        }
    }
    best
}

fn strictly_left_of(a: Point, b: Point, points: &[Point]) -> Vec<Point> {
    points
        .iter()
        .copied()
        .filter(|&p| is_left(a, b, p, Tolerance::Strict))
        .collect()
}

impl QuickHull {
    pub fn hull(points: &[Point]) -> Hull {
        if points.len() <= 2 {
            return Hull::new(points.to_vec());
        }
        let (left, right) = extremes(points);
        if left == right {
            return Hull::new(vec![left]);
        }

        let above = strictly_left_of(left, right, points);
        let below = strictly_left_of(right, left, points);

        let mut out: Vec<Point> = Vec::new();
        // Popped in reverse: left, upper chain, right, lower chain.
        let mut stack = vec![
            Task::Split {
                a: right,
                b: left,
                candidates: below,
            },
            Task::Emit(right),
            Task::Split {
                a: left,
                b: right,
                candidates: above,
            },
            Task::Emit(left),
        ];
        while let Some(task) = stack.pop() {
            match task {
                Task::Emit(p) => out.push(p),
                Task::Split { a, b, candidates } => match candidates.len() {
                    0 => {}
                    1 => out.push(candidates[0]),
                    _ => {
                        let q = farthest(&Line::new(a, b), &candidates);
                        let mut left_of_aq = Vec::new();
                        let mut left_of_qb = Vec::new();
                        for &p in &candidates {
                            if is_left(a, q, p, Tolerance::Strict) {
                                left_of_aq.push(p);
                            } else if is_left(q, b, p, Tolerance::Strict) {
                                left_of_qb.push(p);
                            }
                        }
                        stack.push(Task::Split {
                            a: q,
                            b,
                            candidates: left_of_qb,
                        });
                        stack.push(Task::Emit(q));
                        stack.push(Task::Split {
                            a,
                            b: q,
                            candidates: left_of_aq,
                        });
                    }
                },
            }
        }
        tracing::debug!(algo = "quickhull", n = points.len(), h = out.len(), "hull");
        Hull::new(out)
    }
}

impl ConvexHull2 for QuickHull {
    fn name(&self) -> &'static str {
        "quickhull"
    }
    fn compute(&self, points: &[Point]) -> Hull {
        QuickHull::hull(points)
    }
}
