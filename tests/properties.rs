//! Property tests for the path model and similarity scoring.

use pathmatch::{compare_paths, Invariance, Path, Point2, Segment};
use proptest::prelude::*;

fn point() -> impl Strategy<Value = Point2<f64>> {
    (-100.0..100.0f64, -100.0..100.0f64).prop_map(|(x, y)| Point2::new(x, y))
}

fn segment() -> impl Strategy<Value = Segment<f64>> {
    prop_oneof![
        point().prop_map(Segment::MoveTo),
        point().prop_map(Segment::LineTo),
        (point(), point(), point()).prop_map(|(control_a, control_b, to)| Segment::CubicTo {
            control_a,
            control_b,
            to,
        }),
    ]
}

fn path() -> impl Strategy<Value = Path<f64>> {
    (point(), prop::collection::vec(segment(), 1..8)).prop_map(|(start, segments)| {
        let mut path = Path::new();
        path.append(Segment::MoveTo(start));
        for s in segments {
            path.append(s);
        }
        path
    })
}

fn invariances() -> impl Strategy<Value = Vec<Invariance>> {
    prop::sample::subsequence(Invariance::ALL.to_vec(), 0..=2)
}

proptest! {
    #[test]
    fn compare_is_symmetric(a in path(), b in path(), set in invariances()) {
        let ab = compare_paths(&a, &b, &set).unwrap();
        let ba = compare_paths(&b, &a, &set).unwrap();
        prop_assert!((ab - ba).abs() < 1e-9, "{} != {}", ab, ba);
    }

    #[test]
    fn path_is_identical_to_itself(p in path()) {
        prop_assert_eq!(compare_paths(&p, &p, &[]).unwrap(), 1.0);
    }

    #[test]
    fn endpoints_are_exact(p in path()) {
        prop_assert_eq!(p.point_at_percentage(0.0).unwrap(), p.first_point());
        prop_assert_eq!(p.point_at_percentage(1.0).unwrap(), p.current_point());

        let batch = p.points_at_percentages(&[1.0, 0.0]).unwrap();
        prop_assert_eq!(batch, vec![p.current_point(), p.first_point()]);
    }

    #[test]
    fn percentage_queries_stay_in_bounds(p in path(), t in 0.0..=1.0f64) {
        let q = p.point_at_percentage(t).unwrap();
        let bounds = p.bounds();
        prop_assert!(q.x >= bounds.min.x - 1e-9 && q.x <= bounds.max.x + 1e-9);
        prop_assert!(q.y >= bounds.min.y - 1e-9 && q.y <= bounds.max.y + 1e-9);
    }

    #[test]
    fn append_never_shrinks(segments in prop::collection::vec(segment(), 1..16)) {
        let mut path = Path::new();
        for s in segments {
            let before = path.len();
            let collapses = s.is_move() && path.current_segment().is_move();
            path.append(s);

            prop_assert!(!path.is_empty());
            prop_assert_eq!(path.current_segment(), &s);
            if collapses {
                prop_assert_eq!(path.len(), before);
            } else {
                prop_assert_eq!(path.len(), before + 1);
            }
        }
    }

    #[test]
    fn two_point_path_flattens_to_its_points(a in point(), b in point()) {
        let data = format!("M {},{} L {},{}", a.x, a.y, b.x, b.y);
        let path: Path<f64> = data.parse().unwrap();
        prop_assert_eq!(path.flattened().unwrap(), &[a, b][..]);
    }
}
