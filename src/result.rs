//! Result type for a single warp invocation.

use serde::Serialize;

use crate::matrix::SquareMatrix;
use crate::path::WarpPath;
use crate::stats::WarpStats;

/// Output of a single alignment between two time series.
#[derive(Debug, Clone, Serialize)]
pub struct WarpResult {
    /// Accumulated cost at the terminal cell `(n-1, n-1)`.
    pub cost: f64,
    /// Distance summed independently along the recovered path.
    ///
    /// Equals `cost` when no window is applied; under a band window the two
    /// can differ because the terminal cost reflects masked accumulation.
    pub back_trace_cost: f64,
    /// The optimal warp path, terminal corner first.
    pub path: WarpPath,
    /// Lead/lag statistics over the path.
    pub stats: WarpStats,
    /// Effective window size: the configured band, or `n` when unconstrained.
    pub warp_window: usize,
    /// The accumulated cost matrix. Present only when matrices were requested.
    pub cost_matrix: Option<SquareMatrix>,
    /// The L1 distance matrix. Present only when matrices were requested.
    pub distance_matrix: Option<SquareMatrix>,
}
