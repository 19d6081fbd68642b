//! Warp facade: clip, accumulate, backtrace, assemble.

use tracing::{debug, instrument};

use crate::backtrace::backtrace;
use crate::distance::l1_distances;
use crate::error::WarpError;
use crate::method::WarpMethod;
use crate::result::WarpResult;
use crate::series::TimeSeriesView;
use crate::window::BandWindow;

/// Immutable warp configuration. Thread-safe and copyable.
///
/// Construct via [`TimeWarp::new`] or [`TimeWarp::from_tag`], chain `with_*`
/// overrides, then call [`TimeWarp::warp`]. Each call owns its own matrices;
/// no state persists between invocations.
///
/// # Defaults
///
/// | Parameter          | Default                 |
/// |--------------------|-------------------------|
/// | `window`           | 0 (unconstrained)       |
/// | `gap`              | 0.0 (ERP only)          |
/// | `return_matrices`  | false                   |
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeWarp {
    method: WarpMethod,
    window: BandWindow,
    gap: f64,
    return_matrices: bool,
}

impl TimeWarp {
    /// Create a warp configuration for the given method with default parameters.
    #[must_use]
    pub fn new(method: WarpMethod) -> Self {
        Self {
            method,
            window: BandWindow::Unconstrained,
            gap: 0.0,
            return_matrices: false,
        }
    }

    /// Create a warp configuration from a method string tag.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`WarpError::InvalidMethod`] | `tag` is neither `"DTW"` nor `"ERP"` |
    pub fn from_tag(tag: &str) -> Result<Self, WarpError> {
        Ok(Self::new(tag.parse()?))
    }

    /// Set the band window size. Zero means unconstrained.
    #[must_use]
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = BandWindow::from_size(window);
        self
    }

    /// Set the ERP gap reference value. Ignored by DTW.
    #[must_use]
    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    /// Include the distance and cost matrices in the result.
    ///
    /// Off by default so that statistics-only callers do not retain two
    /// `n × n` matrices per call.
    #[must_use]
    pub fn with_matrices(mut self) -> Self {
        self.return_matrices = true;
        self
    }

    /// Return the configured method.
    #[must_use]
    pub fn method(&self) -> WarpMethod {
        self.method
    }

    /// Return the configured window.
    #[must_use]
    pub fn window(&self) -> BandWindow {
        self.window
    }

    /// Align two series and derive lead/lag statistics.
    ///
    /// If the series differ in length, the longer is clipped from its tail
    /// to the shorter length before alignment. Runs in O(n²) time and space
    /// for the matrix phases and O(n) for the backtrace.
    #[must_use]
    #[instrument(skip(a, b), fields(len_a = a.len(), len_b = b.len()))]
    pub fn warp(&self, a: TimeSeriesView<'_>, b: TimeSeriesView<'_>) -> WarpResult {
        let n = a.len().min(b.len());
        let a = a.clipped(n);
        let b = b.clipped(n);

        let dist = l1_distances(a, b);
        let cost = self.method.accumulate(&dist, a, b, self.window, self.gap);
        let terminal = cost.get(n - 1, n - 1);

        let (path, back_trace_cost, stats) = backtrace(&cost, &dist);
        debug!(terminal, back_trace_cost, path_len = path.len(), "backtrace complete");

        let (cost_matrix, distance_matrix) = if self.return_matrices {
            (Some(cost), Some(dist))
        } else {
            (None, None)
        };

        WarpResult {
            cost: terminal,
            back_trace_cost,
            path,
            stats,
            warp_window: self.window.effective(n),
            cost_matrix,
            distance_matrix,
        }
    }
}

impl Default for TimeWarp {
    fn default() -> Self {
        Self::new(WarpMethod::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::TimeSeries;

    fn ts(values: Vec<f64>) -> TimeSeries {
        TimeSeries::new(values).expect("valid test series")
    }

    #[test]
    fn clips_longer_series_from_tail() {
        let a = ts(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        let b = ts(vec![1.0, 2.0, 3.0]);
        let result = TimeWarp::new(WarpMethod::Dtw).warp(a.as_view(), b.as_view());
        assert_eq!(result.warp_window, 3);
        assert_eq!(result.cost, 0.0);
    }

    #[test]
    fn matrices_absent_by_default() {
        let a = ts(vec![1.0, 2.0]);
        let b = ts(vec![2.0, 1.0]);
        let result = TimeWarp::new(WarpMethod::Dtw).warp(a.as_view(), b.as_view());
        assert!(result.cost_matrix.is_none());
        assert!(result.distance_matrix.is_none());
    }

    #[test]
    fn matrices_present_on_request() {
        let a = ts(vec![1.0, 2.0]);
        let b = ts(vec![2.0, 1.0]);
        let result = TimeWarp::new(WarpMethod::Dtw)
            .with_matrices()
            .warp(a.as_view(), b.as_view());
        let cost = result.cost_matrix.expect("cost matrix requested");
        let dist = result.distance_matrix.expect("distance matrix requested");
        assert_eq!(cost.n(), 2);
        assert_eq!(dist.n(), 2);
        assert_eq!(cost.get(0, 0), dist.get(0, 0));
    }

    #[test]
    fn unwindowed_dtw_cost_matches_backtrace_cost() {
        let a = ts(vec![1.0, 3.0, 5.0, 2.0, 4.0]);
        let b = ts(vec![2.0, 4.0, 1.0, 5.0, 3.0]);
        let result = TimeWarp::new(WarpMethod::Dtw).warp(a.as_view(), b.as_view());
        assert!(
            (result.cost - result.back_trace_cost).abs() < 1e-12,
            "cost {} != backtrace cost {}",
            result.cost,
            result.back_trace_cost
        );
    }

    #[test]
    fn reports_effective_window() {
        let a = ts(vec![1.0, 2.0, 3.0, 4.0]);
        let b = ts(vec![4.0, 3.0, 2.0, 1.0]);
        let unconstrained = TimeWarp::new(WarpMethod::Dtw).warp(a.as_view(), b.as_view());
        assert_eq!(unconstrained.warp_window, 4);
        let banded = TimeWarp::new(WarpMethod::Dtw)
            .with_window(2)
            .warp(a.as_view(), b.as_view());
        assert_eq!(banded.warp_window, 2);
    }

    #[test]
    fn from_tag_dispatches() {
        assert_eq!(TimeWarp::from_tag("DTW").unwrap().method(), WarpMethod::Dtw);
        assert_eq!(TimeWarp::from_tag("ERP").unwrap().method(), WarpMethod::Erp);
        assert!(matches!(
            TimeWarp::from_tag("XYZ"),
            Err(WarpError::InvalidMethod(_))
        ));
    }

    #[test]
    fn erp_gap_value_is_honored() {
        // Constant offset 1: with gap=1 every delete operation is free, so
        // the terminal cost drops from 3 (zero gap) to 1.
        let a = ts(vec![0.0, 0.0, 0.0]);
        let b = ts(vec![1.0, 1.0, 1.0]);
        let zero_gap = TimeWarp::new(WarpMethod::Erp).warp(a.as_view(), b.as_view());
        let with_gap = TimeWarp::new(WarpMethod::Erp)
            .with_gap(1.0)
            .warp(a.as_view(), b.as_view());
        assert_eq!(zero_gap.cost, 3.0);
        assert_eq!(with_gap.cost, 1.0);
    }

    #[test]
    fn missing_samples_align_for_free() {
        let a = ts(vec![1.0, f64::NAN, 3.0]);
        let b = ts(vec![1.0, 100.0, 3.0]);
        let result = TimeWarp::new(WarpMethod::Dtw)
            .with_window(1)
            .warp(a.as_view(), b.as_view());
        // The NaN sample contributes zero distance against the 100.0 outlier.
        assert_eq!(result.cost, 0.0);
    }
}
