//! Kirkpatrick–Seidel "marriage before conquest".
//!
//! Purpose
//! - Output-sensitive hull: find the edge over a split first (the bridge),
//!   then solve only the two sides that can still contribute vertices.
//!
//! Model
//! - Shuffle once; upper and lower chains run over the same shuffled order.
//! - Per chain: bridge over the current subset, drop everything strictly
//!   between the bridge ends, continue on `x <= left.x` and `x >= right.x`.
//! - Same-x subsets collapse to their extreme point (no midpoint exists).
//! - Join: upper chain left to right, lower chain right to left, shared
//!   extreme points once.
//!
//! Randomness
//! - Only the shuffle is random, and it comes from the caller (`seed` or a
//!   generator passed to `compute_with_rng`). Bridges are hull edges, so the
//!   output is independent of the draw.
//!
//! Code cross-refs: `bridge::find_bridge`, `crate::graham` (same output order)

mod bridge;

pub use bridge::{find_bridge, Bridge, Chain};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::algo::ConvexHull2;
use crate::geom::{Hull, Point};

/// Randomized divide and conquer over bridges.
///
/// `seed: Some(s)` gives a reproducible shuffle per call; `None` draws a fresh
/// entropy-seeded generator per call. No generator state survives a call.
#[derive(Clone, Copy, Debug, Default)]
pub struct MarriageBeforeConquest {
    pub seed: Option<u64>,
}

impl MarriageBeforeConquest {
    #[inline]
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// Hull with a caller-supplied generator for the shuffle.
    pub fn compute_with_rng<R: Rng + ?Sized>(&self, points: &[Point], rng: &mut R) -> Hull {
        if points.len() <= 2 {
            let mut pts = points.to_vec();
            if pts.len() == 2 && pts[0] == pts[1] {
                pts.pop();
            }
            return Hull::new(pts);
        }
        let mut shuffled = points.to_vec();
        shuffled.shuffle(rng);

        let upper = chain(&shuffled, Chain::Upper);
        let lower = chain(&shuffled, Chain::Lower);
        let hull = join(upper, lower);
        tracing::debug!(algo = "mbc", n = points.len(), h = hull.len(), "hull");
        Hull::new(hull)
    }
}

impl ConvexHull2 for MarriageBeforeConquest {
    fn name(&self) -> &'static str {
        "mbc"
    }
    fn compute(&self, points: &[Point]) -> Hull {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.compute_with_rng(points, &mut rng)
    }
}

/// One chain, left to right. Subsets keep the shuffled order.
///
/// Driven by an explicit stack of pending subsets (left side on top), so deep
/// splits on adversarial input do not grow the call stack.
pub(crate) fn chain(points: &[Point], side: Chain) -> Vec<Point> {
    let mut out = Vec::new();
    let mut pending: Vec<Vec<Point>> = vec![points.to_vec()];
    while let Some(set) = pending.pop() {
        if set.len() == 1 {
            out.push(set[0]);
            continue;
        }
        match find_bridge(&set, side) {
            None => {}
            Some(Bridge::Vertex(p)) => out.push(p),
            Some(Bridge::Edge { left, right }) => {
                let rhs: Vec<Point> = set.iter().copied().filter(|q| q.x >= right.x).collect();
                let lhs: Vec<Point> = set.iter().copied().filter(|q| q.x <= left.x).collect();
                pending.push(rhs);
                pending.push(lhs);
            }
        }
    }
    out
}

/// Clockwise boundary from the two chains (both given left to right).
fn join(upper: Vec<Point>, mut lower: Vec<Point>) -> Vec<Point> {
    lower.reverse();
    let start = usize::from(lower.first() == upper.last());
    let end = if lower.len() > start && lower.last() == upper.first() {
        lower.len() - 1
    } else {
        lower.len()
    };
    let mut hull = upper;
    if start < end {
        hull.extend_from_slice(&lower[start..end]);
    }
    hull
}
