//! Planar convex hulls: three algorithms and an independent checker.
//!
//! Layout
//! - `geom`: point/line/hull types and the orientation predicates.
//! - `graham`, `quickhull`, `mbc`: the algorithms, all behind `ConvexHull2`.
//! - `validate`: hull oracle used by tests, benches and the CLI.
//! - `sample`: reproducible point sets (circle, parabola, square).
//!
//! Conventions
//! - Hulls are clockwise, starting at the leftmost point with the largest y.
//! - Collinear boundary points are not hull vertices.
//! - The library performs no I/O; see the `cli` crate for readers and writers.

pub mod algo;
pub mod api;
pub mod geom;
pub mod graham;
pub mod mbc;
pub mod quickhull;
pub mod sample;
pub mod validate;

#[cfg(test)]
mod tests_props;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use algo::{Algorithm, ConvexHull2};
pub use geom::{Hull, Point, Tolerance};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::algo::{Algorithm, ConvexHull2};
    pub use crate::geom::{orientation, Hull, Line, Point, Tolerance};
    pub use crate::graham::GrahamScan;
    pub use crate::mbc::MarriageBeforeConquest;
    pub use crate::quickhull::QuickHull;
    pub use crate::sample::{draw_shape, ReplayToken, Shape};
    pub use crate::validate::{is_valid_hull, validate_hull, HullViolation, ValidateCfg};
}
