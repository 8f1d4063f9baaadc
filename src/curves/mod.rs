//! Curve evaluation and arc-length sampling.

mod bezier;
mod sampler;

pub use bezier::{cubic_weight_table, cubic_weights, CubicBezier2, CubicWeights};
pub use sampler::{flatten, uniform_percentages, ArcLengthTable, CURVE_SAMPLES_PER_SEGMENT};
