//! Derived values cached on a path.

use crate::curves::ArcLengthTable;
use crate::primitives::{Affine2, Point2};
use num_traits::Float;
use std::sync::OnceLock;

/// Lazily filled values derived from a path's segments.
///
/// Each slot is either empty or consistent with the current segments. The
/// owning path calls [`invalidate`](Self::invalidate) or
/// [`transform`](Self::transform) at every mutation; those are the only
/// places a filled slot is cleared.
#[derive(Debug, Clone)]
pub(crate) struct PathCache<F> {
    pub(crate) flattened: OnceLock<Vec<Point2<F>>>,
    pub(crate) arc_lengths: OnceLock<ArcLengthTable<F>>,
    pub(crate) centroid: OnceLock<Point2<F>>,
}

impl<F> Default for PathCache<F> {
    fn default() -> Self {
        Self {
            flattened: OnceLock::new(),
            arc_lengths: OnceLock::new(),
            centroid: OnceLock::new(),
        }
    }
}

impl<F: Float> PathCache<F> {
    /// Drops every cached value.
    pub(crate) fn invalidate(&mut self) {
        self.flattened.take();
        self.arc_lengths.take();
        self.centroid.take();
    }

    /// Carries cached points through an affine transform.
    ///
    /// Flattened points and the centroid map exactly. Lengths do not survive
    /// a non-uniform scale, so the arc-length table is dropped.
    pub(crate) fn transform(&mut self, transform: &Affine2<F>) {
        if let Some(points) = self.flattened.take() {
            let _ = self.flattened.set(transform.apply_points(&points));
        }
        if let Some(centroid) = self.centroid.take() {
            let _ = self.centroid.set(transform.apply_point(centroid));
        }
        self.arc_lengths.take();
    }
}
