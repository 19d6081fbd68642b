//! Elastic time-series alignment with lead/lag statistics.
//!
//! Pure math library — zero I/O. Aligns two numeric sequences with Dynamic
//! Time Warping or ERP (edit distance on real sequences), optionally under a
//! band window constraint, and reports how far the first series leads or lags
//! the second along the optimal warp path. Plotting and export layers consume
//! the [`WarpResult`] read-only; nothing feeds back into the engine.
//!
//! ```
//! use timewarp::{TimeSeries, TimeWarp, WarpMethod};
//!
//! let a = TimeSeries::new(vec![0.0, 1.0, 2.0, 3.0])?;
//! let b = TimeSeries::new(vec![0.0, 0.0, 1.0, 2.0])?;
//! let result = TimeWarp::new(WarpMethod::Dtw).warp(a.as_view(), b.as_view());
//! assert_eq!(result.cost, result.back_trace_cost);
//! # Ok::<(), timewarp::WarpError>(())
//! ```

mod backtrace;
mod distance;
mod dtw;
mod erp;
mod error;
mod matrix;
mod method;
mod path;
mod result;
mod series;
mod stats;
mod warp;
mod window;

pub use distance::l1_distances;
pub use error::WarpError;
pub use matrix::SquareMatrix;
pub use method::WarpMethod;
pub use path::{WarpPath, WarpStep};
pub use result::WarpResult;
pub use series::{TimeSeries, TimeSeriesView};
pub use stats::WarpStats;
pub use warp::TimeWarp;
pub use window::BandWindow;
