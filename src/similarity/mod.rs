//! Geometric similarity between paths.
//!
//! Scores are computed on resampled points, so paths with different segment
//! layouts that trace the same shape compare as identical.

mod compare;
mod invariance;

pub use compare::{compare_paths, compare_paths_with, CompareConfig, RESAMPLING_DETAIL};
pub use invariance::Invariance;
