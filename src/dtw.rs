//! DTW cost accumulation.

use crate::matrix::SquareMatrix;
use crate::window::BandWindow;

/// Accumulate the DTW cost matrix from a pre-computed distance matrix.
///
/// Base cell is `dist[0][0]`; the first row and column accumulate along
/// their own axis; interior cells add the local distance to the cheapest of
/// the three predecessors (diagonal, above, left). The window mask is
/// applied as a post-filter over the completed fill.
pub(crate) fn accumulate(dist: &SquareMatrix, window: BandWindow) -> SquareMatrix {
    let n = dist.n();
    let mut cost = SquareMatrix::zeros(n);

    cost.set(0, 0, dist.get(0, 0));

    // Edges: only one predecessor exists.
    for j in 1..n {
        cost.set(0, j, dist.get(0, j) + cost.get(0, j - 1));
    }
    for i in 1..n {
        cost.set(i, 0, dist.get(i, 0) + cost.get(i - 1, 0));
    }

    for i in 1..n {
        for j in 1..n {
            let min_move = cost
                .get(i - 1, j - 1)
                .min(cost.get(i - 1, j))
                .min(cost.get(i, j - 1));
            cost.set(i, j, min_move + dist.get(i, j));
        }
    }

    window.mask(&mut cost);
    cost
}
