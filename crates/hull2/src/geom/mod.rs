//! Points, lines, hulls and the orientation predicates.
//!
//! Purpose
//! - One numerical foundation for every hull algorithm: the orientation
//!   determinant, evaluated in `f64` over `f32` inputs.
//! - Plain value types (`Point`, `Line`, `Triangle`, `Hull`) with no hidden
//!   state; algorithms own their scratch copies.
//!
//! Code cross-refs: `crate::graham`, `crate::quickhull`, `crate::mbc`, `crate::validate`

pub mod predicates;
mod types;

pub use predicates::{distance_proxy, is_inside_triangle, is_left, is_right, orientation, Tolerance};
pub use types::{lexicographic_cmp, Hull, Line, Point, Triangle};
