//! Print hull sizes and validity for each shape and algorithm.
//!
//! Usage:
//!   cargo run -p hull2 --example compare_shapes -- 2048

use hull2::sample::{draw_shape, ReplayToken, Shape};
use hull2::validate::is_valid_hull;
use hull2::Algorithm;

fn main() {
    let size = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(1024);
    for shape in Shape::ALL {
        let pts = draw_shape(shape, size, ReplayToken { seed: 7, index: 0 });
        for algo in Algorithm::ALL {
            let start = std::time::Instant::now();
            let hull = algo.compute(&pts, Some(7));
            let took = start.elapsed();
            println!(
                "{shape:>8} {algo:>9}: n={} h={} valid={} ({:.2?})",
                pts.len(),
                hull.len(),
                is_valid_hull(&hull, &pts),
                took
            );
        }
    }
}
