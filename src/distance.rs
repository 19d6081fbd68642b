//! L1 distance matrix construction.

use crate::matrix::SquareMatrix;
use crate::series::TimeSeriesView;

/// Build the pairwise L1 distance matrix between two equal-length series.
///
/// Cell `(i, j)` holds `|a[i] - b[j]|`. Cells where either sample is missing
/// (NaN) are zero: missing data contributes no alignment penalty.
///
/// # Panics
///
/// Panics if the series differ in length. Clip to a common length first,
/// as [`TimeWarp::warp`](crate::TimeWarp::warp) does.
#[must_use]
pub fn l1_distances(a: TimeSeriesView<'_>, b: TimeSeriesView<'_>) -> SquareMatrix {
    let n = a.len();
    assert_eq!(n, b.len(), "series must be clipped to equal length");

    let mut dist = SquareMatrix::zeros(n);
    for i in 0..n {
        for j in 0..n {
            let d = if a[i].is_nan() || b[j].is_nan() {
                0.0
            } else {
                (a[i] - b[j]).abs()
            };
            dist.set(i, j, d);
        }
    }
    dist
}
