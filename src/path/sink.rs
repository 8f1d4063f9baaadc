//! Replaying a path into an external consumer.
//!
//! Renderers and hit-testers build their own path representation by
//! implementing [`PathSink`] and calling [`Path::replay`](super::Path::replay).

use super::Segment;
use crate::primitives::Point2;

/// Receives path segments one at a time, in absolute coordinates.
pub trait PathSink<F> {
    /// Starts a new subpath.
    fn move_to(&mut self, to: Point2<F>);

    /// Adds a straight line from the current point.
    fn line_to(&mut self, to: Point2<F>);

    /// Adds a quadratic Bézier curve from the current point.
    fn quad_to(&mut self, control: Point2<F>, to: Point2<F>);

    /// Adds a cubic Bézier curve from the current point.
    fn cubic_to(&mut self, control_a: Point2<F>, control_b: Point2<F>, to: Point2<F>);
}

/// Feeds one segment to a sink.
pub(crate) fn emit<F: Copy, S: PathSink<F> + ?Sized>(segment: &Segment<F>, sink: &mut S) {
    match *segment {
        Segment::MoveTo(to) => sink.move_to(to),
        Segment::LineTo(to) => sink.line_to(to),
        Segment::QuadraticTo { control, to } => sink.quad_to(control, to),
        Segment::CubicTo {
            control_a,
            control_b,
            to,
        } => sink.cubic_to(control_a, control_b, to),
    }
}
