//! Cubic Bézier evaluation.
//!
//! Curves are sampled at a fixed number of evenly spaced parameters, so the
//! Bernstein blending weights for those parameters are computed once per
//! sampling pass and reused for every curve.

use crate::primitives::Point2;
use num_traits::Float;

/// A cubic Bézier curve defined by 4 control points.
///
/// The curve starts at `p0`, is influenced by `p1` and `p2`, and ends at `p3`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier2<F> {
    /// Start point
    pub p0: Point2<F>,
    /// First control point
    pub p1: Point2<F>,
    /// Second control point
    pub p2: Point2<F>,
    /// End point
    pub p3: Point2<F>,
}

/// Bernstein weights `[(1-t)³, 3(1-t)²t, 3(1-t)t², t³]` for one parameter.
pub type CubicWeights<F> = [F; 4];

/// Computes the cubic Bernstein weights at parameter `t`.
#[inline]
pub fn cubic_weights<F: Float>(t: F) -> CubicWeights<F> {
    let one = F::one();
    let three = one + one + one;
    let s = one - t;
    [s * s * s, three * s * s * t, three * s * t * t, t * t * t]
}

/// Computes the weight table for parameters `t = i / steps`, `i = 1..=steps`.
///
/// The start parameter `t = 0` is omitted because the start of a curve is the
/// end of the segment before it. The last entry is `[0, 0, 0, 1]`, so the final
/// sample lands exactly on the end point.
pub fn cubic_weight_table<F: Float>(steps: usize) -> Vec<CubicWeights<F>> {
    let Some(n) = F::from(steps) else {
        return Vec::new();
    };
    (1..=steps)
        .filter_map(|i| F::from(i).map(|i| cubic_weights(i / n)))
        .collect()
}

impl<F: Float> CubicBezier2<F> {
    /// Creates a new cubic Bézier curve.
    #[inline]
    pub fn new(p0: Point2<F>, p1: Point2<F>, p2: Point2<F>, p3: Point2<F>) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Blends the control points with precomputed Bernstein weights.
    #[inline]
    pub fn blend(&self, w: &CubicWeights<F>) -> Point2<F> {
        Point2::new(
            w[0] * self.p0.x + w[1] * self.p1.x + w[2] * self.p2.x + w[3] * self.p3.x,
            w[0] * self.p0.y + w[1] * self.p1.y + w[2] * self.p2.y + w[3] * self.p3.y,
        )
    }

    /// Evaluates the curve at parameter `t` (0 to 1).
    #[inline]
    pub fn eval(&self, t: F) -> Point2<F> {
        self.blend(&cubic_weights(t))
    }

    /// Samples the curve with a weight table from [`cubic_weight_table`],
    /// appending one point per entry.
    ///
    /// # Example
    ///
    /// ```
    /// use pathmatch::Point2;
    /// use pathmatch::curves::{cubic_weight_table, CubicBezier2};
    ///
    /// let curve = CubicBezier2::new(
    ///     Point2::new(0.0, 0.0),
    ///     Point2::new(20.0, 0.0),
    ///     Point2::new(50.0, 30.0),
    ///     Point2::new(50.0, 50.0),
    /// );
    ///
    /// let mut points = Vec::new();
    /// curve.sample_into(&cubic_weight_table(10), &mut points);
    /// assert_eq!(points.len(), 10);
    /// assert_eq!(points[9], Point2::new(50.0, 50.0));
    /// ```
    pub fn sample_into(&self, table: &[CubicWeights<F>], out: &mut Vec<Point2<F>>) {
        out.extend(table.iter().map(|w| self.blend(w)));
    }
}
