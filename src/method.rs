//! Warp method selection and cost-accumulation dispatch.

use std::str::FromStr;

use crate::error::WarpError;
use crate::matrix::SquareMatrix;
use crate::series::TimeSeriesView;
use crate::window::BandWindow;
use crate::{dtw, erp};

/// The closed set of cost-accumulation strategies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WarpMethod {
    /// Dynamic Time Warping (default).
    #[default]
    Dtw,

    /// Edit distance on real sequences, with gap insert/delete operations
    /// penalized against a reference gap value.
    Erp,
}

impl WarpMethod {
    /// Accumulate the cost matrix for this method.
    ///
    /// All methods share the same contract: consume the distance matrix (and
    /// the clipped series where the recurrence needs raw samples), honor the
    /// window as a post-fill mask, and return an `n × n` cost matrix whose
    /// base cell equals `dist[0][0]`. `gap` is only consulted by
    /// [`WarpMethod::Erp`].
    pub(crate) fn accumulate(
        self,
        dist: &SquareMatrix,
        a: TimeSeriesView<'_>,
        b: TimeSeriesView<'_>,
        window: BandWindow,
        gap: f64,
    ) -> SquareMatrix {
        match self {
            Self::Dtw => dtw::accumulate(dist, window),
            Self::Erp => erp::accumulate(dist, a, b, window, gap),
        }
    }

    /// Return the string tag for this method.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dtw => "DTW",
            Self::Erp => "ERP",
        }
    }
}

impl FromStr for WarpMethod {
    type Err = WarpError;

    /// Parse a method tag. Only the exact tags `"DTW"` and `"ERP"` are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DTW" => Ok(Self::Dtw),
            "ERP" => Ok(Self::Erp),
            other => Err(WarpError::InvalidMethod(other.to_string())),
        }
    }
}
