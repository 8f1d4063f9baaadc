//! Resampled mean-distance similarity score.
//!
//! Both paths are resampled at the same evenly spaced percentages. Each
//! resample is mapped through its own normalizing transform, and the mean
//! distance between corresponding points is divided by half the diagonal of
//! the square spanned by the larger bounding extent.
//!
//! A score of 1 means identical; unrelated shapes land near or below 0.

use super::Invariance;
use crate::bounds::Aabb2;
use crate::curves::uniform_percentages;
use crate::error::PathError;
use crate::path::Path;
use crate::primitives::{Affine2, Point2};
use num_traits::Float;

/// Default number of resampled points per path.
pub const RESAMPLING_DETAIL: usize = 129;

/// Options for [`compare_paths_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompareConfig {
    /// Points sampled along each path. Values below 2 are treated as 2.
    pub resampling_detail: usize,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            resampling_detail: RESAMPLING_DETAIL,
        }
    }
}

impl CompareConfig {
    /// Sets the resampling detail.
    pub fn with_resampling_detail(mut self, detail: usize) -> Self {
        self.resampling_detail = detail;
        self
    }
}

/// Scores how alike two paths are, with the default configuration.
///
/// The score is symmetric in `a` and `b`.
///
/// # Example
///
/// ```
/// use pathmatch::{compare_paths, Invariance, Path};
///
/// let short: Path<f64> = "M 10 10 20 10".parse().unwrap();
/// let long: Path<f64> = "M 10 10 40 10".parse().unwrap();
///
/// let score = compare_paths(&short, &long, Invariance::ALL).unwrap();
/// assert!((score - 1.0).abs() < 1e-9);
/// assert!(compare_paths(&short, &long, &[]).unwrap() < 0.8);
/// ```
pub fn compare_paths<F: Float>(
    a: &Path<F>,
    b: &Path<F>,
    invariances: &[Invariance],
) -> Result<F, PathError> {
    compare_paths_with(a, b, invariances, &CompareConfig::default())
}

/// Scores how alike two paths are.
///
/// # Errors
///
/// - [`PathError::UnsupportedSegmentKind`] if either path has a quadratic segment
/// - [`PathError::PrecisionViolation`] if the score is not finite
pub fn compare_paths_with<F: Float>(
    a: &Path<F>,
    b: &Path<F>,
    invariances: &[Invariance],
    config: &CompareConfig,
) -> Result<F, PathError> {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => return Ok(F::one()),
        (true, false) | (false, true) => return Ok(F::zero()),
        _ => {}
    }

    let bounds_a = a.bounds();
    let bounds_b = b.bounds();
    let greatest_width = bounds_a.width().max(bounds_b.width());
    let greatest_height = bounds_a.height().max(bounds_b.height());
    let metric = greatest_width.max(greatest_height);

    if metric == F::zero() {
        let same = Invariance::Position.is_in(invariances) || a.first_point() == b.first_point();
        return Ok(if same { F::one() } else { F::zero() });
    }

    let percentages = uniform_percentages(config.resampling_detail.max(2));
    let resampled_a = a.points_at_percentages(&percentages)?;
    let resampled_b = b.points_at_percentages(&percentages)?;

    let mut transform_a = Affine2::identity();
    let mut transform_b = Affine2::identity();

    if Invariance::Position.is_in(invariances) {
        let (centroid_a, centroid_b) = (a.centroid()?, b.centroid()?);
        tracing::trace!(
            a = ?(centroid_a.x.to_f64(), centroid_a.y.to_f64()),
            b = ?(centroid_b.x.to_f64(), centroid_b.y.to_f64()),
            "centering paths on centroids"
        );
        transform_a = transform_a.then_translate(-centroid_a.to_vec());
        transform_b = transform_b.then_translate(-centroid_b.to_vec());
    }

    if Invariance::Scale.is_in(invariances) && !bounds_a.is_point() && !bounds_b.is_point() {
        let (scale_a, scale_b) = scale_factors(bounds_a, bounds_b, greatest_width > greatest_height);
        tracing::trace!(
            scale_a = ?scale_a.to_f64(),
            scale_b = ?scale_b.to_f64(),
            "scaling smaller path"
        );
        transform_a = transform_a.then_scale(scale_a);
        transform_b = transform_b.then_scale(scale_b);
    }

    let mean = mean_distance(&resampled_a, &resampled_b, &transform_a, &transform_b);
    let two = F::one() + F::one();
    let factor = two.sqrt() * metric / two;
    let score = F::one() - mean / factor;

    if !score.is_finite() {
        tracing::error!(
            metric = ?metric.to_f64(),
            mean = ?mean.to_f64(),
            "similarity score is not finite"
        );
        return Err(PathError::PrecisionViolation {
            quantity: "similarity score",
        });
    }

    Ok(score)
}

/// Uniform scale factors that bring the smaller path up to the larger one.
///
/// The comparison axis is width when `by_width`, otherwise height. When the
/// path being scaled has no extent along that axis, its other axis stands in.
fn scale_factors<F: Float>(a: Aabb2<F>, b: Aabb2<F>, by_width: bool) -> (F, F) {
    let axis = |bounds: Aabb2<F>| {
        if by_width {
            (bounds.width(), bounds.height())
        } else {
            (bounds.height(), bounds.width())
        }
    };
    let ratio = |larger: F, (main, other): (F, F)| {
        larger / if main != F::zero() { main } else { other }
    };

    let (main_a, _) = axis(a);
    let (main_b, _) = axis(b);
    if main_a > main_b {
        (F::one(), ratio(main_a, axis(b)))
    } else {
        (ratio(main_b, axis(a)), F::one())
    }
}

fn mean_distance<F: Float>(
    a: &[Point2<F>],
    b: &[Point2<F>],
    transform_a: &Affine2<F>,
    transform_b: &Affine2<F>,
) -> F {
    let total = a
        .iter()
        .zip(b)
        .map(|(&pa, &pb)| {
            transform_a
                .apply_point(pa)
                .distance(transform_b.apply_point(pb))
        })
        .fold(F::zero(), |acc, d| acc + d);
    F::from(a.len().min(b.len())).map_or_else(F::nan, |n| total / n)
}
