//! Error types for path operations.

use crate::path::SegmentKind;
use thiserror::Error;

/// Errors that can occur while parsing, sampling or comparing paths.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathError {
    /// Path data contains an unknown command or a bad argument list.
    #[error("malformed path data `{fragment}`: {reason}")]
    MalformedPathData {
        /// The offending substring of the input.
        fragment: String,
        /// What was wrong with it.
        reason: &'static str,
    },

    /// A segment kind that the curve sampler cannot flatten.
    #[error("cannot flatten {kind} segment")]
    UnsupportedSegmentKind {
        /// Kind of the rejected segment.
        kind: SegmentKind,
    },

    /// A percentage query outside `[0, 1]`.
    #[error("percentage {0} is outside [0, 1]")]
    PercentageOutOfRange(f64),

    /// A computation produced NaN or infinity.
    ///
    /// This indicates a broken internal precondition, not bad input.
    #[error("non-finite {quantity}")]
    PrecisionViolation {
        /// The quantity that went non-finite.
        quantity: &'static str,
    },
}

impl PathError {
    pub(crate) fn malformed(fragment: &str, reason: &'static str) -> Self {
        Self::MalformedPathData {
            fragment: fragment.trim().to_string(),
            reason,
        }
    }
}
