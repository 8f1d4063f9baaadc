//! The path model: an ordered list of absolute segments.

use super::cache::PathCache;
use super::sink::{emit, PathSink};
use super::Segment;
use crate::bounds::Aabb2;
use crate::curves::{flatten, uniform_percentages, ArcLengthTable};
use crate::error::PathError;
use crate::primitives::{Affine2, Point2};
use crate::similarity::{compare_paths, Invariance};
use num_traits::Float;
use std::cmp::Ordering;
use std::str::FromStr;

/// Number of evenly spaced samples averaged to compute a path's centroid.
pub const CENTROID_SAMPLES: usize = 129;

/// A sequence of move, line and Bézier segments.
///
/// A path always holds at least one segment: a new path is seeded with a
/// move to the origin. Until the first append the path counts as empty.
///
/// Flattened points, the arc-length table and the centroid are computed on
/// first use and cached until the next mutation.
///
/// # Example
///
/// ```
/// use pathmatch::{Path, Point2};
///
/// let path: Path<f64> = "M0,0 C20,0 50,30 50,50".parse().unwrap();
/// assert_eq!(path.len(), 2);
///
/// let points = path.flattened().unwrap();
/// assert_eq!(points.first(), Some(&Point2::new(0.0, 0.0)));
/// assert_eq!(points.last(), Some(&Point2::new(50.0, 50.0)));
/// ```
#[derive(Debug, Clone)]
pub struct Path<F> {
    segments: Vec<Segment<F>>,
    subpath_start: usize,
    empty: bool,
    cache: PathCache<F>,
}

impl<F: Float> Default for Path<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float> Path<F> {
    /// Creates an empty path seeded with a move to the origin.
    pub fn new() -> Self {
        Self {
            segments: vec![Segment::MoveTo(Point2::origin())],
            subpath_start: 0,
            empty: true,
            cache: PathCache::default(),
        }
    }

    /// Parses SVG path data (`M m L l C c S s Z z`).
    ///
    /// See [`parse_path_data`](crate::io::parse_path_data).
    pub fn from_path_data(data: &str) -> Result<Self, PathError>
    where
        F: FromStr,
    {
        crate::io::parse_path_data(data)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// The segments, in drawing order.
    #[inline]
    pub fn segments(&self) -> &[Segment<F>] {
        &self.segments
    }

    /// Number of segments, including the seed move.
    ///
    /// A new path already holds its seed `MoveTo`, so `len` is 1 while
    /// [`is_empty`](Self::is_empty) is still `true`.
    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if nothing has been appended since construction.
    ///
    /// This tracks appends, not `len() == 0`. Appending a move onto the
    /// seed move replaces it without changing `len`, but the path is no
    /// longer empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.empty
    }

    /// The last segment.
    #[inline]
    pub fn current_segment(&self) -> &Segment<F> {
        &self.segments[self.segments.len() - 1]
    }

    /// Destination of the last segment.
    #[inline]
    pub fn current_point(&self) -> Point2<F> {
        self.current_segment().destination()
    }

    /// Destination of the first segment.
    #[inline]
    pub fn first_point(&self) -> Point2<F> {
        self.segments[0].destination()
    }

    /// Index of the move that started the current subpath.
    #[inline]
    pub fn subpath_start_index(&self) -> usize {
        self.subpath_start
    }

    /// Every point of every segment, control points included, in order.
    pub fn control_polygon(&self) -> Vec<Point2<F>> {
        self.segments.iter().flat_map(|s| s.points()).collect()
    }

    /// Bounding box of all segment points, control points included.
    pub fn bounds(&self) -> Aabb2<F> {
        self.segments
            .iter()
            .flat_map(|s| s.points())
            .fold(Aabb2::from_point(self.first_point()), Aabb2::expand_to_include)
    }

    /// Feeds every segment, in order, to a sink.
    pub fn replay<S: PathSink<F> + ?Sized>(&self, sink: &mut S) {
        for segment in &self.segments {
            emit(segment, sink);
        }
    }

    // ------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------

    /// Appends an absolute segment.
    ///
    /// A move directly after another move replaces it.
    pub fn append(&mut self, segment: Segment<F>) {
        if segment.is_move() {
            if self.current_segment().is_move() {
                self.segments.pop();
            }
            self.subpath_start = self.segments.len();
        }
        self.segments.push(segment);
        self.empty = false;
        self.cache.invalidate();
    }

    /// Appends a segment whose points are relative to the current point.
    pub fn append_relative(&mut self, segment: Segment<F>) {
        let offset = self.current_point().to_vec();
        self.append(segment.translated(offset));
    }

    /// Appends a cubic curve whose first control point mirrors the previous
    /// curve's second control point through the current point.
    ///
    /// If the last segment is not a cubic curve, the first control point is
    /// the current point.
    pub fn add_smooth_curve(&mut self, control_b: Point2<F>, to: Point2<F>) {
        let control_a = reflected_control(self.current_segment());
        self.append(Segment::CubicTo {
            control_a,
            control_b,
            to,
        });
    }

    /// [`add_smooth_curve`](Self::add_smooth_curve) with points relative to
    /// the current point.
    pub fn append_relative_smooth_curve(&mut self, control_b: Point2<F>, to: Point2<F>) {
        let offset = self.current_point().to_vec();
        self.add_smooth_curve(control_b + offset, to + offset);
    }

    /// Closes the current subpath with a line back to its start.
    ///
    /// Does nothing if the last segment is a move.
    pub fn close_with_line(&mut self) {
        if self.current_segment().is_move() {
            return;
        }
        let start = self.segments[self.subpath_start].destination();
        self.append(Segment::LineTo(start));
    }

    /// Closes the current subpath with a cubic curve that joins smoothly at
    /// both ends.
    ///
    /// The first control point mirrors the tail of the path, the second
    /// mirrors the first control point of the subpath's opening curve through
    /// the subpath start. Does nothing if the last segment is a move.
    pub fn close_with_smooth_curve(&mut self) {
        if self.current_segment().is_move() {
            return;
        }
        let start = self.segments[self.subpath_start].destination();
        let control_a = reflected_control(self.current_segment());
        let control_b = match self.segments.get(self.subpath_start + 1) {
            Some(Segment::CubicTo { control_a, .. }) => control_a.reflect_through(start),
            _ => start,
        };
        self.append(Segment::CubicTo {
            control_a,
            control_b,
            to: start,
        });
    }

    /// Maps every segment through an affine transform.
    ///
    /// Cached flattened points and centroid are mapped too; the arc length
    /// is recomputed on next use.
    pub fn apply_transform(&mut self, transform: &Affine2<F>) {
        for segment in &mut self.segments {
            *segment = segment.transformed(transform);
        }
        self.cache.transform(transform);
    }

    // ------------------------------------------------------------------
    // Sampling
    // ------------------------------------------------------------------

    /// The path flattened into a polyline.
    ///
    /// # Errors
    ///
    /// [`PathError::UnsupportedSegmentKind`] if the path has a quadratic segment.
    pub fn flattened(&self) -> Result<&[Point2<F>], PathError> {
        if let Some(points) = self.cache.flattened.get() {
            return Ok(points.as_slice());
        }
        let points = flatten(&self.segments)?;
        tracing::debug!(
            segments = self.segments.len(),
            points = points.len(),
            "flattened path"
        );
        Ok(self.cache.flattened.get_or_init(|| points).as_slice())
    }

    /// Cumulative arc lengths of the flattened polyline.
    pub fn arc_length_table(&self) -> Result<&ArcLengthTable<F>, PathError> {
        if let Some(table) = self.cache.arc_lengths.get() {
            return Ok(table);
        }
        let table = ArcLengthTable::new(self.flattened()?)?;
        Ok(self.cache.arc_lengths.get_or_init(|| table))
    }

    /// Length of the flattened path.
    pub fn length(&self) -> Result<F, PathError> {
        Ok(self.arc_length_table()?.total_length())
    }

    /// The point at `percentage` of the path's length.
    ///
    /// `0` is the first point and `1` the current point. An empty path
    /// answers the origin; a path that is a single point answers that point.
    ///
    /// # Errors
    ///
    /// [`PathError::PercentageOutOfRange`] unless `0 <= percentage <= 1`.
    pub fn point_at_percentage(&self, percentage: F) -> Result<Point2<F>, PathError> {
        check_percentage(percentage)?;
        if let Some(point) = self.degenerate_sample()? {
            return Ok(point);
        }
        if percentage == F::zero() {
            return Ok(self.first_point());
        }
        if percentage == F::one() {
            return Ok(self.current_point());
        }

        let points = self.flattened()?;
        let table = self.arc_length_table()?;
        Ok(table.locate(points, table.total_length() * percentage))
    }

    /// The points at several percentages, in the order given.
    ///
    /// Queries are answered in one pass over the path, in ascending order.
    pub fn points_at_percentages(&self, percentages: &[F]) -> Result<Vec<Point2<F>>, PathError> {
        for &p in percentages {
            check_percentage(p)?;
        }
        if let Some(point) = self.degenerate_sample()? {
            return Ok(vec![point; percentages.len()]);
        }

        let points = self.flattened()?;
        let table = self.arc_length_table()?;
        let total = table.total_length();

        let mut order: Vec<usize> = (0..percentages.len()).collect();
        order.sort_by(|&a, &b| {
            percentages[a]
                .partial_cmp(&percentages[b])
                .unwrap_or(Ordering::Equal)
        });

        let mut result = vec![Point2::origin(); percentages.len()];
        let mut cursor = 1;
        for index in order {
            let p = percentages[index];
            result[index] = if p == F::zero() {
                self.first_point()
            } else if p == F::one() {
                self.current_point()
            } else {
                table.locate_from(points, total * p, &mut cursor)
            };
        }
        Ok(result)
    }

    /// Mean of [`CENTROID_SAMPLES`] points evenly spaced along the path.
    pub fn centroid(&self) -> Result<Point2<F>, PathError> {
        if let Some(&centroid) = self.cache.centroid.get() {
            return Ok(centroid);
        }
        let samples = self.points_at_percentages(&uniform_percentages(CENTROID_SAMPLES))?;
        let centroid = Point2::centroid(&samples).unwrap_or_else(Point2::origin);
        tracing::debug!("computed path centroid from {} samples", samples.len());
        Ok(*self.cache.centroid.get_or_init(|| centroid))
    }

    /// Similarity score against another path; `1` means identical.
    ///
    /// See [`compare_paths`].
    pub fn compare_to(&self, other: &Self, invariances: &[Invariance]) -> Result<F, PathError> {
        compare_paths(self, other, invariances)
    }

    /// The answer for every percentage when the path has no length.
    fn degenerate_sample(&self) -> Result<Option<Point2<F>>, PathError> {
        if self.empty {
            return Ok(Some(Point2::origin()));
        }
        if self.segments.len() == 1 || self.arc_length_table()?.total_length() == F::zero() {
            return Ok(Some(self.first_point()));
        }
        Ok(None)
    }
}

impl<F: Float> PathSink<F> for Path<F> {
    fn move_to(&mut self, to: Point2<F>) {
        self.append(Segment::MoveTo(to));
    }

    fn line_to(&mut self, to: Point2<F>) {
        self.append(Segment::LineTo(to));
    }

    fn quad_to(&mut self, control: Point2<F>, to: Point2<F>) {
        self.append(Segment::QuadraticTo { control, to });
    }

    fn cubic_to(&mut self, control_a: Point2<F>, control_b: Point2<F>, to: Point2<F>) {
        self.append(Segment::CubicTo {
            control_a,
            control_b,
            to,
        });
    }
}

impl<F: Float + FromStr> FromStr for Path<F> {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::io::parse_path_data(s)
    }
}

/// The first control point of a smooth curve following `previous`.
fn reflected_control<F: Float>(previous: &Segment<F>) -> Point2<F> {
    match *previous {
        Segment::CubicTo { control_b, to, .. } => control_b.reflect_through(to),
        _ => previous.destination(),
    }
}

fn check_percentage<F: Float>(percentage: F) -> Result<(), PathError> {
    if percentage >= F::zero() && percentage <= F::one() {
        Ok(())
    } else {
        Err(PathError::PercentageOutOfRange(
            percentage.to_f64().unwrap_or(f64::NAN),
        ))
    }
}
