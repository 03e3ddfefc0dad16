//! Property tests shared by all three algorithms.
//!
//! Grid inputs (small integers) keep every orientation exact and produce
//! plenty of duplicates and collinear runs; float inputs cover general position.

use proptest::prelude::*;

use crate::algo::Algorithm;
use crate::geom::{orientation, Hull, Point};
use crate::graham::GrahamScan;
use crate::mbc::MarriageBeforeConquest;
use crate::validate::{is_valid_hull, validate_hull, ValidateCfg};
use crate::ConvexHull2;

fn grid_points(max_len: usize) -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((-12i32..=12, -12i32..=12), 0..max_len).prop_map(|raw| {
        raw.into_iter()
            .map(|(x, y)| Point::new(x as f32, y as f32))
            .collect()
    })
}

fn float_points(max_len: usize) -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((-100.0f32..100.0, -100.0f32..100.0), 0..max_len)
        .prop_map(|raw| raw.into_iter().map(|(x, y)| Point::new(x, y)).collect())
}

fn run_all(points: &[Point], seed: u64) -> Vec<(Algorithm, Hull)> {
    Algorithm::ALL
        .iter()
        .map(|&a| (a, a.compute(points, Some(seed))))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn every_algorithm_validates_on_grid(points in grid_points(60), seed in any::<u64>()) {
        for (algo, hull) in run_all(&points, seed) {
            let verdict = validate_hull(&hull, &points, ValidateCfg::default());
            prop_assert!(verdict.is_ok(), "{algo}: {verdict:?} for {hull:?}");
        }
    }

    #[test]
    fn every_algorithm_validates_on_floats(points in float_points(120), seed in any::<u64>()) {
        for (algo, hull) in run_all(&points, seed) {
            prop_assert!(is_valid_hull(&hull, &points), "{algo}: {hull:?}");
        }
    }

    #[test]
    fn algorithms_agree_on_vertex_sets(points in grid_points(60), seed in any::<u64>()) {
        let reference = GrahamScan::hull(&points);
        for (algo, hull) in run_all(&points, seed) {
            prop_assert!(hull.same_vertex_set(&reference), "{algo}: {hull:?} vs {reference:?}");
        }
    }

    #[test]
    fn algorithms_agree_on_sequence_in_general_position(points in float_points(80), seed in any::<u64>()) {
        prop_assume!(points.len() >= 3);
        let reference = GrahamScan::hull(&points);
        prop_assume!(reference.len() >= 3);
        for (algo, hull) in run_all(&points, seed) {
            prop_assert_eq!(&hull, &reference, "{}", algo);
        }
    }

    #[test]
    fn algorithms_agree_on_sequence_on_grid(points in grid_points(60), seed in any::<u64>()) {
        prop_assume!(points.len() > 2);
        let reference = GrahamScan::hull(&points);
        for (algo, hull) in run_all(&points, seed) {
            prop_assert_eq!(&hull, &reference, "{}", algo);
        }
    }

    #[test]
    fn grid_hulls_have_no_collinear_vertices(points in grid_points(60), seed in any::<u64>()) {
        for (algo, hull) in run_all(&points, seed) {
            let h = hull.as_slice();
            let n = h.len();
            if n < 3 {
                continue;
            }
            for k in 0..n {
                let o = orientation(h[k], h[(k + 1) % n], h[(k + 2) % n]);
                prop_assert!(o < 0.0, "{algo}: turn {o} at {} in {hull:?}", (k + 1) % n);
            }
        }
    }

    #[test]
    fn hull_of_hull_is_itself(points in grid_points(60), seed in any::<u64>()) {
        for (algo, hull) in run_all(&points, seed) {
            let again = algo.compute(hull.as_slice(), Some(seed));
            prop_assert!(again.same_vertex_set(&hull), "{algo}: {again:?} vs {hull:?}");
        }
    }

    #[test]
    fn input_order_does_not_matter(
        (points, shuffled) in grid_points(50).prop_flat_map(|p| (Just(p.clone()), Just(p).prop_shuffle())),
        seed in any::<u64>(),
    ) {
        let a = GrahamScan::hull(&points);
        let b = GrahamScan::hull(&shuffled);
        prop_assert!(a.same_vertex_set(&b));
        let mbc = MarriageBeforeConquest::with_seed(seed).compute(&points);
        let mbc_other = MarriageBeforeConquest::with_seed(seed ^ 0x5eed).compute(&shuffled);
        prop_assert!(mbc.same_vertex_set(&mbc_other));
        // Two or fewer points pass through in input order.
        if points.len() > 2 {
            prop_assert_eq!(mbc, mbc_other);
        }
    }

    #[test]
    fn identical_points_give_one_vertex(x in -50i32..50, y in -50i32..50, n in 3usize..20) {
        let points = vec![Point::new(x as f32, y as f32); n];
        for (algo, hull) in run_all(&points, 7) {
            prop_assert_eq!(hull.points.as_slice(), &points[..1], "{}", algo);
        }
    }

    #[test]
    fn collinear_points_give_two_vertices(
        xs in prop::collection::btree_set(-30i32..30, 3..25),
        slope in -3i32..=3,
        offset in -10i32..=10,
    ) {
        let points: Vec<Point> = xs
            .iter()
            .map(|&x| Point::new(x as f32, (slope * x + offset) as f32))
            .collect();
        for (algo, hull) in run_all(&points, 11) {
            prop_assert_eq!(hull.len(), 2, "{}", algo);
            prop_assert!(is_valid_hull(&hull, &points));
        }
    }
}
