//! Reproducible point sets for tests, benches and the CLI.
//!
//! Model
//! - Three benchmark families: `Circle` (every point on the hull, QuickHull's
//!   bad case), `Parabola` (all points on the lower hull) and `Square`
//!   (uniform; few hull vertices).
//! - A family of size `n` spans `[-10·n/256, 10·n/256]` in x with unique x
//!   values on a 1e-3 grid, so density stays constant as `n` grows.
//! - Determinism uses a replay token `(seed, index)` mixed into one `StdRng`.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    Circle,
    Parabola,
    Square,
}

impl Shape {
    pub const ALL: [Shape; 3] = [Shape::Circle, Shape::Parabola, Shape::Square];

    pub fn name(&self) -> &'static str {
        match self {
            Shape::Circle => "circle",
            Shape::Parabola => "parabola",
            Shape::Square => "square",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseShapeError {
    pub input: String,
}

impl fmt::Display for ParseShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown shape '{}' (expected circle, parabola or square)",
            self.input
        )
    }
}

impl std::error::Error for ParseShapeError {}

impl FromStr for Shape {
    type Err = ParseShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Shape::ALL
            .into_iter()
            .find(|shape| shape.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseShapeError {
                input: s.to_string(),
            })
    }
}

/// Replay token: the same `(seed, index)` always draws the same set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    pub fn rng(self) -> StdRng {
        // SplitMix64 finalizer over seed and index.
        fn finalize(mut z: u64) -> u64 {
            z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
            z ^ (z >> 31)
        }
        let golden = 0x9e37_79b9_7f4a_7c15u64;
        StdRng::seed_from_u64(finalize(
            self.seed ^ finalize(self.index.wrapping_mul(golden).wrapping_add(golden)),
        ))
    }
}

#[inline]
fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

/// `size` points of the given family, sorted by x, with unique x.
pub fn draw_shape(shape: Shape, size: usize, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.rng();
    let half = 10.0 * (size as f64) / 256.0;
    // Unique x on the 1e-3 grid; the grid holds ~78 slots per requested point.
    let mut xs_milli: BTreeSet<i64> = BTreeSet::new();
    while xs_milli.len() < size {
        let x = rng.gen_range(-half..=half);
        xs_milli.insert((x * 1000.0).round() as i64);
    }
    xs_milli
        .into_iter()
        .map(|m| {
            let x = (m as f64) / 1000.0;
            let y = match shape {
                Shape::Parabola => x * x,
                Shape::Square => rng.gen_range(-half..=half),
                Shape::Circle => {
                    let r = (half * half - x * x).max(0.0).sqrt();
                    if rng.gen_bool(0.5) {
                        r
                    } else {
                        -r
                    }
                }
            };
            Point::new(x as f32, round3(y) as f32)
        })
        .collect()
}

/// `n` points uniform in the square `[-half_width, half_width]²`.
pub fn uniform_points<R: Rng + ?Sized>(n: usize, half_width: f32, rng: &mut R) -> Vec<Point> {
    let w = half_width.abs().max(f32::MIN_POSITIVE);
    (0..n)
        .map(|_| Point::new(rng.gen_range(-w..=w), rng.gen_range(-w..=w)))
        .collect()
}
