//! Warp path types for elastic alignment.

use serde::Serialize;

/// A single step in a warp path, mapping index `a` in the first series
/// to index `b` in the second series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WarpStep {
    /// Index in the first time series.
    pub a: usize,
    /// Index in the second time series.
    pub b: usize,
}

/// An ordered sequence of warp steps from the terminal corner `(n-1, n-1)`
/// down to the origin `(0, 0)`.
///
/// Steps are stored in backtrace order (terminal first). Callers needing
/// chronological order should iterate in reverse. On each step at least one
/// index decreases by exactly 1, so the length is between `n` and `2n - 1`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WarpPath(Vec<WarpStep>);

impl WarpPath {
    /// Create a new warp path from a vector of steps.
    pub(crate) fn new(steps: Vec<WarpStep>) -> Self {
        Self(steps)
    }

    /// Return the warp steps as a slice, terminal corner first.
    #[must_use]
    pub fn steps(&self) -> &[WarpStep] {
        &self.0
    }

    /// Return the number of steps in the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return true if the path contains no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a WarpPath {
    type Item = &'a WarpStep;
    type IntoIter = std::slice::Iter<'a, WarpStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
