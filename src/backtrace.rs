//! Backtrace through the accumulated cost matrix.

use crate::matrix::SquareMatrix;
use crate::path::{WarpPath, WarpStep};
use crate::stats::WarpStats;

/// Walk the cost matrix from the terminal corner `(n-1, n-1)` to the origin,
/// recovering the optimal warp path, its summed distance, and lead/lag
/// statistics.
///
/// At interior cells the three predecessors are compared against their
/// minimum in a fixed priority order: above (`i - 1`) first, then left
/// (`j - 1`), then diagonal. The order decides which of several equal-cost
/// paths is returned, so it must not be reordered. On the first row or
/// column only one direction remains and the move is forced.
///
/// The loop strictly decreases `i + j` each iteration, so it terminates in
/// at most `2n - 1` steps.
pub(crate) fn backtrace(cost: &SquareMatrix, dist: &SquareMatrix) -> (WarpPath, f64, WarpStats) {
    let n = cost.n();
    let mut i = n - 1;
    let mut j = n - 1;

    let mut steps = vec![WarpStep { a: i, b: j }];
    let mut back_trace_cost = dist.get(i, j);

    let mut time_ahead = 0usize;
    let mut time_behind = 0usize;
    let mut time_sync = 0usize;
    let mut amount_ahead = 0usize;
    let mut amount_behind = 0usize;

    while i > 0 || j > 0 {
        if i == 0 {
            j -= 1;
        } else if j == 0 {
            i -= 1;
        } else {
            let min_move = cost
                .get(i - 1, j - 1)
                .min(cost.get(i - 1, j))
                .min(cost.get(i, j - 1));
            if cost.get(i - 1, j) == min_move {
                i -= 1;
            } else if cost.get(i, j - 1) == min_move {
                j -= 1;
            } else {
                i -= 1;
                j -= 1;
            }
        }

        back_trace_cost += dist.get(i, j);
        steps.push(WarpStep { a: i, b: j });

        if i > j {
            time_ahead += 1;
            amount_ahead += i - j;
        } else if j > i {
            time_behind += 1;
            amount_behind += j - i;
        } else {
            time_sync += 1;
        }
    }

    let stats = WarpStats::from_counts(time_ahead, time_behind, time_sync, amount_ahead, amount_behind);
    (WarpPath::new(steps), back_trace_cost, stats)
}
