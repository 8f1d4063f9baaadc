//! Path segments.

use crate::primitives::{Affine2, Point2, Vec2};
use num_traits::Float;
use std::fmt;

/// One drawing instruction of a [`Path`](super::Path).
///
/// Points are always absolute. Relative input is resolved before a segment
/// is stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment<F> {
    /// Start a new subpath at the point.
    MoveTo(Point2<F>),
    /// Straight line to the point.
    LineTo(Point2<F>),
    /// Quadratic Bézier curve.
    QuadraticTo {
        /// The single control point.
        control: Point2<F>,
        /// End point.
        to: Point2<F>,
    },
    /// Cubic Bézier curve.
    CubicTo {
        /// Control point that sets the tangent leaving the current point.
        control_a: Point2<F>,
        /// Control point that sets the tangent arriving at `to`.
        control_b: Point2<F>,
        /// End point.
        to: Point2<F>,
    },
}

/// The variant of a [`Segment`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// [`Segment::MoveTo`]
    MoveTo,
    /// [`Segment::LineTo`]
    LineTo,
    /// [`Segment::QuadraticTo`]
    Quadratic,
    /// [`Segment::CubicTo`]
    Cubic,
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SegmentKind::MoveTo => "move-to",
            SegmentKind::LineTo => "line-to",
            SegmentKind::Quadratic => "quadratic",
            SegmentKind::Cubic => "cubic",
        };
        f.write_str(name)
    }
}

impl<F: Float> Segment<F> {
    /// Returns the variant of this segment.
    #[inline]
    pub fn kind(&self) -> SegmentKind {
        match self {
            Segment::MoveTo(_) => SegmentKind::MoveTo,
            Segment::LineTo(_) => SegmentKind::LineTo,
            Segment::QuadraticTo { .. } => SegmentKind::Quadratic,
            Segment::CubicTo { .. } => SegmentKind::Cubic,
        }
    }

    /// The point where this segment ends.
    #[inline]
    pub fn destination(&self) -> Point2<F> {
        match *self {
            Segment::MoveTo(to) | Segment::LineTo(to) => to,
            Segment::QuadraticTo { to, .. } | Segment::CubicTo { to, .. } => to,
        }
    }

    /// All points other than the destination, in order.
    pub fn control_points(&self) -> Vec<Point2<F>> {
        match *self {
            Segment::MoveTo(_) | Segment::LineTo(_) => Vec::new(),
            Segment::QuadraticTo { control, .. } => vec![control],
            Segment::CubicTo {
                control_a,
                control_b,
                ..
            } => vec![control_a, control_b],
        }
    }

    /// Control points followed by the destination.
    pub fn points(&self) -> Vec<Point2<F>> {
        let mut points = self.control_points();
        points.push(self.destination());
        points
    }

    /// Returns `true` for [`Segment::MoveTo`].
    #[inline]
    pub fn is_move(&self) -> bool {
        matches!(self, Segment::MoveTo(_))
    }

    /// Applies `f` to every point of the segment.
    pub fn map_points(self, f: impl Fn(Point2<F>) -> Point2<F>) -> Self {
        match self {
            Segment::MoveTo(to) => Segment::MoveTo(f(to)),
            Segment::LineTo(to) => Segment::LineTo(f(to)),
            Segment::QuadraticTo { control, to } => Segment::QuadraticTo {
                control: f(control),
                to: f(to),
            },
            Segment::CubicTo {
                control_a,
                control_b,
                to,
            } => Segment::CubicTo {
                control_a: f(control_a),
                control_b: f(control_b),
                to: f(to),
            },
        }
    }

    /// Offsets every point, turning a relative segment into an absolute one.
    #[inline]
    pub fn translated(self, offset: Vec2<F>) -> Self {
        self.map_points(|p| p + offset)
    }

    /// Maps every point through an affine transform.
    #[inline]
    pub fn transformed(self, transform: &Affine2<F>) -> Self {
        self.map_points(|p| transform.apply_point(p))
    }
}
