//! Shared capability of the three hull algorithms.
//!
//! `ConvexHull2` is the trait seam; `Algorithm` is a closed, nameable list of
//! the implementations for callers that pick one at runtime (CLI, benches).

use std::fmt;
use std::str::FromStr;

use crate::geom::{Hull, Point};
use crate::graham::GrahamScan;
use crate::mbc::MarriageBeforeConquest;
use crate::quickhull::QuickHull;

/// `compute(points) -> Hull`, total over finite inputs.
pub trait ConvexHull2 {
    /// Short, stable name (used for output file names).
    fn name(&self) -> &'static str;
    fn compute(&self, points: &[Point]) -> Hull;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Graham,
    QuickHull,
    Mbc,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Graham, Algorithm::QuickHull, Algorithm::Mbc];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Graham => "graham",
            Algorithm::QuickHull => "quickhull",
            Algorithm::Mbc => "mbc",
        }
    }

    /// Run the algorithm. `seed` only affects the randomized `Mbc`.
    pub fn compute(&self, points: &[Point], seed: Option<u64>) -> Hull {
        match self {
            Algorithm::Graham => GrahamScan.compute(points),
            Algorithm::QuickHull => QuickHull.compute(points),
            Algorithm::Mbc => MarriageBeforeConquest { seed }.compute(points),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError {
    pub input: String,
}

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown algorithm '{}' (expected graham, quickhull or mbc)",
            self.input
        )
    }
}

impl std::error::Error for ParseAlgorithmError {}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "graham" | "graham-scan" => Ok(Algorithm::Graham),
            "quickhull" | "quick" => Ok(Algorithm::QuickHull),
            "mbc" | "marriage" | "kirkpatrick-seidel" => Ok(Algorithm::Mbc),
            _ => Err(ParseAlgorithmError {
                input: s.to_string(),
            }),
        }
    }
}
