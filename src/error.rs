//! Error types for series validation and warp method selection.

/// Errors from warp computation and time series validation.
#[derive(Debug, thiserror::Error)]
pub enum WarpError {
    /// Returned when an empty slice is provided as a time series.
    #[error("time series must be non-empty")]
    EmptySeries,

    /// Returned when a time series contains an infinite value.
    ///
    /// NaN is not rejected: it marks a missing sample and contributes zero
    /// distance during alignment.
    #[error("time series contains infinite value at index {index}")]
    InfiniteValue {
        /// Position of the first infinite value found.
        index: usize,
    },

    /// Returned when a method tag is neither `"DTW"` nor `"ERP"`.
    #[error("unknown warp method {0:?} (expected \"DTW\" or \"ERP\")")]
    InvalidMethod(String),
}
