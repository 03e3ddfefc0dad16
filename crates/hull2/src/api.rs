//! Flat re-export surface for binaries and benches.
//!
//! Internal to this workspace; names may move between modules without notice.

// Geometry
pub use crate::geom::{
    distance_proxy, is_inside_triangle, is_left, is_right, lexicographic_cmp, orientation, Hull,
    Line, Point, Tolerance, Triangle,
};
// Algorithms
pub use crate::algo::{Algorithm, ConvexHull2, ParseAlgorithmError};
pub use crate::graham::GrahamScan;
pub use crate::mbc::{find_bridge, Bridge, Chain, MarriageBeforeConquest};
pub use crate::quickhull::QuickHull;
// Checking
pub use crate::validate::{is_valid_hull, validate_hull, HullViolation, ValidateCfg};
// Point sets
pub use crate::sample::{draw_shape, uniform_points, ParseShapeError, ReplayToken, Shape};
