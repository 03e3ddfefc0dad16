//! Bridge finding for one chain.
//!
//! The bridge over `x = mid` is the hull edge crossing that vertical. We find
//! it as a 2-D linear program solved incrementally over the (shuffled) input:
//! keep the optimal line for the points seen so far; when a point lies
//! outside it, that point becomes one endpoint and the other endpoint is the
//! tangent from it to the points already processed. With random order each
//! point triggers a rebuild with probability O(1/k), so a call is expected O(n).
//!
//! The lower chain is the upper chain of the mirrored input; `Chain::outside`
//! folds the mirror into the sign so both share one code path.

use crate::geom::{orientation, Point};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Chain {
    Upper,
    Lower,
}

impl Chain {
    /// Positive iff `c` lies outside the chain side of `a → b` (above for the
    /// upper chain, below for the lower), with `a.x < b.x`.
    #[inline]
    pub fn outside(self, a: Point, b: Point, c: Point) -> f64 {
        match self {
            Chain::Upper => orientation(a, b, c),
            Chain::Lower => -orientation(a, b, c),
        }
    }

    /// Among points sharing an x, the one this chain keeps.
    #[inline]
    fn prefers(self, p: Point, q: Point) -> bool {
        match self {
            Chain::Upper => p.y > q.y,
            Chain::Lower => p.y < q.y,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Bridge {
    /// Every point shares one x; the chain degenerates to its extreme point.
    Vertex(Point),
    /// Hull edge with `left.x <= mid <= right.x` and `left.x < right.x`.
    Edge { left: Point, right: Point },
}

/// Tangent from `p` to the processed points right of it.
fn tangent_right(p: Point, seen: &[Point], chain: Chain) -> Option<Point> {
    let mut best: Option<Point> = None;
    for &q in seen.iter().filter(|q| q.x > p.x) {
        best = match best {
            None => Some(q),
            Some(b) => {
                let o = chain.outside(p, b, q);
                if o > 0.0 || (o == 0.0 && q.x > b.x) {
                    Some(q)
                } else {
                    Some(b)
                }
            }
        };
    }
    best
}

/// Tangent from `p` to the processed points left of it.
fn tangent_left(p: Point, seen: &[Point], chain: Chain) -> Option<Point> {
    let mut best: Option<Point> = None;
    for &q in seen.iter().filter(|q| q.x < p.x) {
        best = match best {
            None => Some(q),
            Some(b) => {
                let o = chain.outside(b, p, q);
                if o > 0.0 || (o == 0.0 && q.x < b.x) {
                    Some(q)
                } else {
                    Some(b)
                }
            }
        };
    }
    best
}

/// Bridge of `points` for `chain`; `None` only for empty input.
///
/// The split abscissa is the midpoint of the first two points (in the given
/// order) with distinct x. Same-x input is answered directly, since no
/// midpoint exists.
pub fn find_bridge(points: &[Point], chain: Chain) -> Option<Bridge> {
    let first = *points.first()?;
    let Some(k0) = points.iter().position(|p| p.x != first.x) else {
        let extreme = points
            .iter()
            .copied()
            .fold(first, |best, p| if chain.prefers(p, best) { p } else { best });
        return Some(Bridge::Vertex(extreme));
    };

    let mut work = points.to_vec();
    work.swap(1, k0);
    let (mut left, mut right) = if work[0].x < work[1].x {
        (work[0], work[1])
    } else {
        (work[1], work[0])
    };
    let mid = 0.5 * (f64::from(left.x) + f64::from(right.x));

    for k in 2..work.len() {
        let p = work[k];
        if chain.outside(left, right, p) <= 0.0 {
            continue;
        }
        if f64::from(p.x) <= mid {
            if let Some(t) = tangent_right(p, &work[..k], chain) {
                left = p;
                right = t;
            }
        } else if let Some(t) = tangent_left(p, &work[..k], chain) {
            left = t;
            right = p;
        }
    }

    // Widen to the outermost points on the bridge line so both ends are vertices.
    let (l0, r0) = (left, right);
    for &q in points {
        if chain.outside(l0, r0, q) == 0.0 {
            if q.x < left.x {
                left = q;
            } else if q.x > right.x {
                right = q;
            }
        }
    }
    Some(Bridge::Edge { left, right })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(raw: &[(f32, f32)]) -> Vec<Point> {
        raw.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn same_x_picks_extreme() {
        let v = pts(&[(1.0, 0.0), (1.0, 5.0), (1.0, -3.0)]);
        assert_eq!(
            find_bridge(&v, Chain::Upper),
            Some(Bridge::Vertex(Point::new(1.0, 5.0)))
        );
        assert_eq!(
            find_bridge(&v, Chain::Lower),
            Some(Bridge::Vertex(Point::new(1.0, -3.0)))
        );
        assert_eq!(find_bridge(&[], Chain::Upper), None);
    }

    #[test]
    fn upper_bridge_over_mid() {
        // mid = 2 from the first two points
        let v = pts(&[(0.0, 0.0), (4.0, 0.0), (1.0, 3.0), (3.0, 2.0), (2.0, 1.0), (5.0, 0.5)]);
        assert_eq!(
            find_bridge(&v, Chain::Upper),
            Some(Bridge::Edge {
                left: Point::new(1.0, 3.0),
                right: Point::new(3.0, 2.0),
            })
        );
        assert_eq!(
            find_bridge(&v, Chain::Lower),
            Some(Bridge::Edge {
                left: Point::new(0.0, 0.0),
                right: Point::new(4.0, 0.0),
            })
        );
    }

    #[test]
    fn violating_point_on_the_right_rebuilds_left_end() {
        let v = pts(&[(0.0, 0.0), (2.0, 0.0), (-1.0, 1.0), (3.0, 4.0)]);
        assert_eq!(
            find_bridge(&v, Chain::Upper),
            Some(Bridge::Edge {
                left: Point::new(-1.0, 1.0),
                right: Point::new(3.0, 4.0),
            })
        );
    }

    #[test]
    fn collinear_run_widens_to_outer_points() {
        let v = pts(&[(1.0, 1.0), (2.0, 2.0), (0.0, 0.0), (3.0, 3.0), (1.0, -4.0)]);
        assert_eq!(
            find_bridge(&v, Chain::Upper),
            Some(Bridge::Edge {
                left: Point::new(0.0, 0.0),
                right: Point::new(3.0, 3.0),
            })
        );
    }

    #[test]
    fn bridge_is_supporting_for_every_order() {
        let base = pts(&[
            (-4.0, 0.5),
            (-2.0, 3.0),
            (-1.0, -2.0),
            (0.5, 4.0),
            (1.0, 1.0),
            (2.5, 3.5),
            (4.0, -1.0),
            (3.0, 0.0),
        ]);
        for rot in 0..base.len() {
            let mut v = base.clone();
            v.rotate_left(rot);
            for chain in [Chain::Upper, Chain::Lower] {
                match find_bridge(&v, chain) {
                    Some(Bridge::Edge { left, right }) => {
                        assert!(left.x < right.x);
                        assert!(v.iter().all(|&q| chain.outside(left, right, q) <= 0.0));
                    }
                    other => panic!("expected edge, got {other:?}"),
                }
            }
        }
    }
}
