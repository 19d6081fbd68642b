//! Band window constraint on accumulated cost matrices.

use crate::matrix::SquareMatrix;

/// Constraint on how far the warp path may stray from the diagonal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BandWindow {
    /// No constraint — the full cost matrix is reachable.
    #[default]
    Unconstrained,

    /// Band of size `w`: cells with `|i - j| >= w` are forced to `+inf`.
    Band(usize),
}

impl BandWindow {
    /// Map an integer window parameter to a constraint. Zero means unconstrained.
    #[must_use]
    pub fn from_size(w: usize) -> Self {
        if w == 0 { Self::Unconstrained } else { Self::Band(w) }
    }

    /// The window size reported to callers: the band size, or `n` when unconstrained.
    #[must_use]
    pub fn effective(&self, n: usize) -> usize {
        match self {
            Self::Unconstrained => n,
            Self::Band(w) => *w,
        }
    }

    /// Force every out-of-band cell of `cost` to `+inf`.
    ///
    /// Runs after the unconstrained fill, not during it: the boundary
    /// row/column recurrences may legitimately read cells that this mask
    /// later overwrites, so the fill must not skip them.
    pub(crate) fn mask(&self, cost: &mut SquareMatrix) {
        let Self::Band(w) = self else { return };
        let n = cost.n();
        for i in 0..n {
            for j in 0..n {
                if i.abs_diff(j) >= *w {
                    cost.set(i, j, f64::INFINITY);
                }
            }
        }
    }
}
