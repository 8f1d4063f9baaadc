//! Vector paths built from move, line and Bézier segments.
//!
//! A [`Path`] stores absolute segments and answers length, percentage and
//! centroid queries from a flattened polyline that is cached until the next
//! mutation. Relative and smooth-curve appends are resolved against the
//! path's current state as they are applied.

mod cache;
mod model;
mod segment;
mod sink;

pub use model::{Path, CENTROID_SAMPLES};
pub use segment::{Segment, SegmentKind};
pub use sink::PathSink;
