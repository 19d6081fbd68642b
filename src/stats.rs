//! Lead/lag statistics derived from a warp path.

use serde::Serialize;

/// Per-step lead/lag totals for a recovered warp path.
///
/// Each backtrace step is classified by comparing the new indices: the first
/// series is "ahead" when its index exceeds the second's (`i > j`), "behind"
/// when `j > i`, and "in sync" when they match. The three time counts always
/// sum to `path.len() - 1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct WarpStats {
    /// Number of steps where the first series led the second.
    pub time_ahead: usize,
    /// Number of steps where the first series lagged the second.
    pub time_behind: usize,
    /// Number of steps where the indices matched.
    pub time_sync: usize,
    /// Sum of `i - j` over the ahead steps.
    pub amount_ahead: usize,
    /// Sum of `j - i` over the behind steps.
    pub amount_behind: usize,
    /// `amount_ahead / time_ahead`, or 0 when never ahead.
    pub avg_ahead: f64,
    /// `amount_behind / time_behind`, or 0 when never behind.
    pub avg_behind: f64,
    /// `(amount_ahead - amount_behind) / (time_ahead + time_behind + time_sync)`.
    ///
    /// Positive when the first series is on average ahead of the second,
    /// negative when behind. Zero for a single-sample path with no steps.
    pub avg_warp: f64,
}

impl WarpStats {
    /// Derive the averages from raw step counts.
    pub(crate) fn from_counts(
        time_ahead: usize,
        time_behind: usize,
        time_sync: usize,
        amount_ahead: usize,
        amount_behind: usize,
    ) -> Self {
        let mut avg_ahead = 0.0;
        if time_ahead > 0 {
            avg_ahead = amount_ahead as f64 / time_ahead as f64;
        }

        let mut avg_behind = 0.0;
        if time_behind > 0 {
            avg_behind = amount_behind as f64 / time_behind as f64;
        }

        let steps = time_ahead + time_behind + time_sync;
        let avg_warp = if steps == 0 {
            0.0
        } else {
            (amount_ahead as f64 - amount_behind as f64) / steps as f64
        };

        Self {
            time_ahead,
            time_behind,
            time_sync,
            amount_ahead,
            amount_behind,
            avg_ahead,
            avg_behind,
            avg_warp,
        }
    }

    /// Total number of classified steps.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.time_ahead + self.time_behind + self.time_sync
    }
}
