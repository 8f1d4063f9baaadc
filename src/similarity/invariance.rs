//! Normalizations applied before measuring shape distance.

/// A difference between two paths that similarity scoring should ignore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Invariance {
    /// Ignore translation: both paths are centered on their centroids.
    Position,
    /// Ignore size: the smaller path is scaled up to the larger one.
    Scale,
}

impl Invariance {
    /// Every invariance.
    pub const ALL: &'static [Invariance] = &[Invariance::Position, Invariance::Scale];

    /// Returns `true` if `self` appears in `set`.
    #[inline]
    pub fn is_in(self, set: &[Invariance]) -> bool {
        set.contains(&self)
    }
}
