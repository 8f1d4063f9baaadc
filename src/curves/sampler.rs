//! Flattening of path segments and arc-length parameterization.
//!
//! Every move or line contributes its destination. Every cubic contributes
//! [`CURVE_SAMPLES_PER_SEGMENT`] evenly parameterized samples, the last of
//! which is its destination. Quadratic segments are rejected rather than
//! approximated.
//!
//! # Example
//!
//! ```
//! use pathmatch::curves::{flatten, ArcLengthTable};
//! use pathmatch::path::Segment;
//! use pathmatch::Point2;
//!
//! let segments = vec![
//!     Segment::MoveTo(Point2::new(0.0, 0.0)),
//!     Segment::LineTo(Point2::new(3.0, 4.0)),
//!     Segment::LineTo(Point2::new(3.0, 10.0)),
//! ];
//! let points = flatten(&segments).unwrap();
//! let table = ArcLengthTable::new(&points).unwrap();
//!
//! assert_eq!(table.total_length(), 11.0);
//! assert_eq!(table.locate(&points, 8.0), Point2::new(3.0, 7.0));
//! ```

use super::bezier::{cubic_weight_table, CubicBezier2};
use crate::error::PathError;
use crate::path::Segment;
use crate::primitives::Point2;
use num_traits::Float;

/// Number of samples taken along each curved segment.
pub const CURVE_SAMPLES_PER_SEGMENT: usize = 10;

/// Flattens segments into a dense polyline.
///
/// The first segment's destination is the first point. Curves start from the
/// previous segment's destination, or from the origin if a curve comes first.
///
/// # Errors
///
/// [`PathError::UnsupportedSegmentKind`] if any segment is quadratic.
pub fn flatten<F: Float>(segments: &[Segment<F>]) -> Result<Vec<Point2<F>>, PathError> {
    let curves = segments
        .iter()
        .filter(|s| matches!(s, Segment::CubicTo { .. }))
        .count();
    let mut points = Vec::with_capacity(segments.len() - curves + curves * CURVE_SAMPLES_PER_SEGMENT);
    let table = cubic_weight_table(CURVE_SAMPLES_PER_SEGMENT);
    let mut origin = Point2::origin();

    for segment in segments {
        match *segment {
            Segment::MoveTo(to) | Segment::LineTo(to) => points.push(to),
            Segment::CubicTo {
                control_a,
                control_b,
                to,
            } => {
                CubicBezier2::new(origin, control_a, control_b, to).sample_into(&table, &mut points);
            }
            Segment::QuadraticTo { .. } => {
                return Err(PathError::UnsupportedSegmentKind {
                    kind: segment.kind(),
                });
            }
        }
        origin = segment.destination();
    }

    Ok(points)
}

/// Returns `count` evenly spaced percentages from 0 to 1 inclusive.
///
/// A single sample is `[0]`; no samples is an empty vector.
pub fn uniform_percentages<F: Float>(count: usize) -> Vec<F> {
    if count < 2 {
        return vec![F::zero(); count];
    }
    let Some(last) = F::from(count - 1) else {
        return Vec::new();
    };
    (0..count)
        .filter_map(|i| F::from(i).map(|i| i / last))
        .collect()
}

/// Cumulative distances along a polyline.
///
/// `cumulative()[i]` is the length of the polyline from the first point to
/// point `i`; the last entry is the total length.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcLengthTable<F> {
    cumulative: Vec<F>,
}

impl<F: Float> ArcLengthTable<F> {
    /// Builds the table for a polyline.
    ///
    /// # Errors
    ///
    /// [`PathError::PrecisionViolation`] if the total length is not finite.
    pub fn new(points: &[Point2<F>]) -> Result<Self, PathError> {
        let mut cumulative = Vec::with_capacity(points.len());
        let mut total = F::zero();
        if let Some(&first) = points.first() {
            cumulative.push(total);
            let mut previous = first;
            for &p in &points[1..] {
                total = total + previous.distance(p);
                cumulative.push(total);
                previous = p;
            }
        }

        if !total.is_finite() {
            tracing::error!("arc length of {} points is not finite", points.len());
            return Err(PathError::PrecisionViolation {
                quantity: "arc length",
            });
        }

        Ok(Self { cumulative })
    }

    /// Total length of the polyline.
    #[inline]
    pub fn total_length(&self) -> F {
        self.cumulative.last().copied().unwrap_or_else(F::zero)
    }

    /// The cumulative distance of every point.
    #[inline]
    pub fn cumulative(&self) -> &[F] {
        &self.cumulative
    }

    /// Finds the point at `distance` along the polyline by binary search.
    ///
    /// `points` must be the polyline the table was built from. Distances
    /// beyond either end clamp to the end points.
    pub fn locate(&self, points: &[Point2<F>], distance: F) -> Point2<F> {
        let n = self.cumulative.len().min(points.len());
        if n < 2 {
            return points.first().copied().unwrap_or_else(Point2::origin);
        }
        let index = self.cumulative[..n]
            .partition_point(|&d| d < distance)
            .clamp(1, n - 1);
        self.interpolate(points, index, distance)
    }

    /// Finds the point at `distance`, scanning forward from `cursor`.
    ///
    /// Successive calls with non-decreasing distances and the same cursor
    /// walk the polyline once. Start the cursor at 1.
    pub fn locate_from(&self, points: &[Point2<F>], distance: F, cursor: &mut usize) -> Point2<F> {
        let n = self.cumulative.len().min(points.len());
        if n < 2 {
            return points.first().copied().unwrap_or_else(Point2::origin);
        }
        *cursor = (*cursor).clamp(1, n - 1);
        while *cursor < n - 1 && self.cumulative[*cursor] < distance {
            *cursor += 1;
        }
        self.interpolate(points, *cursor, distance)
    }

    /// Interpolates inside the bracket `[index - 1, index]`.
    fn interpolate(&self, points: &[Point2<F>], index: usize, distance: F) -> Point2<F> {
        let start = self.cumulative[index - 1];
        let span = self.cumulative[index] - start;
        if span <= F::zero() {
            return points[index];
        }
        let fraction = ((distance - start) / span).max(F::zero()).min(F::one());
        points[index - 1].lerp(points[index], fraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn cubic_path() -> Vec<Segment<f64>> {
        vec![
            Segment::MoveTo(Point2::new(0.0, 0.0)),
            Segment::CubicTo {
                control_a: Point2::new(20.0, 0.0),
                control_b: Point2::new(50.0, 30.0),
                to: Point2::new(50.0, 50.0),
            },
        ]
    }

    #[test]
    fn test_flatten_lines() {
        let segments = vec![
            Segment::MoveTo(Point2::new(1.0, 2.0)),
            Segment::LineTo(Point2::new(3.0, 4.0)),
        ];
        assert_eq!(
            flatten(&segments).unwrap(),
            vec![Point2::new(1.0, 2.0), Point2::new(3.0, 4.0)]
        );
    }

    #[test]
    fn test_flatten_cubic_sample_count() {
        let points = flatten(&cubic_path()).unwrap();
        assert_eq!(points.len(), 1 + CURVE_SAMPLES_PER_SEGMENT);
        assert_eq!(points[0], Point2::new(0.0, 0.0));
        assert_eq!(points[CURVE_SAMPLES_PER_SEGMENT], Point2::new(50.0, 50.0));
    }

    #[test]
    fn test_flatten_curve_first_starts_at_origin() {
        let segments = vec![Segment::CubicTo {
            control_a: Point2::new(0.0, 10.0),
            control_b: Point2::new(10.0, 10.0),
            to: Point2::new(10.0, 0.0),
        }];
        let points = flatten(&segments).unwrap();
        let expected = CubicBezier2::new(
            Point2::origin(),
            Point2::new(0.0, 10.0),
            Point2::new(10.0, 10.0),
            Point2::new(10.0, 0.0),
        )
        .eval(0.1);
        assert_relative_eq!(points[0].x, expected.x, epsilon = 1e-12);
        assert_relative_eq!(points[0].y, expected.y, epsilon = 1e-12);
    }

    #[test]
    fn test_flatten_rejects_quadratic() {
        let segments = vec![
            Segment::MoveTo(Point2::new(0.0, 0.0)),
            Segment::QuadraticTo {
                control: Point2::new(5.0, 5.0),
                to: Point2::new(10.0, 0.0),
            },
        ];
        assert_eq!(
            flatten(&segments),
            Err(PathError::UnsupportedSegmentKind {
                kind: crate::path::SegmentKind::Quadratic
            })
        );
    }

    #[test]
    fn test_uniform_percentages() {
        let p: Vec<f64> = uniform_percentages(5);
        assert_eq!(p, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(uniform_percentages::<f64>(129)[128], 1.0);
        assert_eq!(uniform_percentages::<f64>(1), vec![0.0]);
        assert!(uniform_percentages::<f64>(0).is_empty());
    }

    #[test]
    fn test_table_cumulative() {
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(3.0, 4.0),
            Point2::new(3.0, 4.0),
            Point2::new(6.0, 8.0),
        ];
        let table = ArcLengthTable::new(&points).unwrap();
        assert_eq!(table.cumulative(), &[0.0, 5.0, 5.0, 10.0]);
        assert_eq!(table.total_length(), 10.0);
    }

    #[test]
    fn test_locate_handles_repeated_points() {
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(5.0, 0.0),
            Point2::new(5.0, 0.0),
            Point2::new(10.0, 0.0),
        ];
        let table = ArcLengthTable::new(&points).unwrap();
        assert_eq!(table.locate(&points, 5.0), Point2::new(5.0, 0.0));
        assert_eq!(table.locate(&points, 7.5), Point2::new(7.5, 0.0));
        assert_eq!(table.locate(&points, 0.0), Point2::new(0.0, 0.0));
        assert_eq!(table.locate(&points, 10.0), Point2::new(10.0, 0.0));
    }

    #[test]
    fn test_locate_from_matches_binary_search() {
        let points = flatten(&cubic_path()).unwrap();
        let table = ArcLengthTable::new(&points).unwrap();
        let total = table.total_length();

        let mut cursor = 1;
        for i in 0..=40 {
            let d = total * (i as f64 / 40.0);
            let scanned = table.locate_from(&points, d, &mut cursor);
            let searched = table.locate(&points, d);
            assert_relative_eq!(scanned.x, searched.x, epsilon = 1e-12);
            assert_relative_eq!(scanned.y, searched.y, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_table_degenerate_inputs() {
        let empty: Vec<Point2<f64>> = Vec::new();
        let table = ArcLengthTable::new(&empty).unwrap();
        assert_eq!(table.total_length(), 0.0);
        assert_eq!(table.locate(&empty, 1.0), Point2::origin());

        let single = vec![Point2::new(12.0, 12.0)];
        let table = ArcLengthTable::new(&single).unwrap();
        assert_eq!(table.locate(&single, 0.0), Point2::new(12.0, 12.0));
    }

    #[test]
    fn test_table_rejects_non_finite() {
        let points = vec![Point2::new(0.0, 0.0), Point2::new(f64::INFINITY, 0.0)];
        assert_eq!(
            ArcLengthTable::new(&points),
            Err(PathError::PrecisionViolation {
                quantity: "arc length"
            })
        );
    }
}
