//! Box-plot summary statistics
//!
//! Provides the five-number summary used by the distribution scene:
//! - Quartiles by linear interpolation
//! - Tukey fences at 1.5 IQR
//! - Whiskers at the data extrema inside the fences
//! - Outliers strictly outside the fences

use serde::{Deserialize, Serialize};

use crate::quantile::{quantile_sorted, sorted_finite};

/// Multiplier applied to the IQR to place the fences
pub const TUKEY_K: f64 = 1.5;

/// Box-plot summary for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxPlotSummary {
    /// Number of usable observations
    pub count: usize,
    /// First quartile (25th percentile)
    pub q1: f64,
    /// Median (50th percentile)
    pub median: f64,
    /// Third quartile (75th percentile)
    pub q3: f64,
    /// Smallest observation inside the fences
    pub whisker_min: f64,
    /// Largest observation inside the fences
    pub whisker_max: f64,
    /// Observations strictly outside the fences, ascending
    pub outliers: Vec<f64>,
}

impl BoxPlotSummary {
    /// Summarize a set of observations
    ///
    /// Null and non-finite observations are excluded. Returns `None` when
    /// nothing usable remains.
    pub fn from_values<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = Option<f64>>,
    {
        Self::from_sorted(&sorted_finite(values))
    }

    /// Summarize a plain slice of observations
    pub fn from_data(data: &[f64]) -> Option<Self> {
        Self::from_values(data.iter().copied().map(Some))
    }

    /// Summarize observations that are already finite and sorted ascending
    pub fn from_sorted(sorted: &[f64]) -> Option<Self> {
        let q1 = quantile_sorted(sorted, 0.25)?;
        let median = quantile_sorted(sorted, 0.5)?;
        let q3 = quantile_sorted(sorted, 0.75)?;

        let iqr = q3 - q1;
        let lower = q1 - TUKEY_K * iqr;
        let upper = q3 + TUKEY_K * iqr;

        let (inside, outliers): (Vec<f64>, Vec<f64>) =
            sorted.iter().copied().partition(|&v| v >= lower && v <= upper);

        // The median always lies inside the fences, so `inside` is non-empty
        let whisker_min = *inside.first()?;
        let whisker_max = *inside.last()?;

        Some(Self {
            count: sorted.len(),
            q1,
            median,
            q3,
            whisker_min,
            whisker_max,
            outliers,
        })
    }

    /// Interquartile range (q3 - q1)
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    /// Lower Tukey fence
    pub fn lower_fence(&self) -> f64 {
        self.q1 - TUKEY_K * self.iqr()
    }

    /// Upper Tukey fence
    pub fn upper_fence(&self) -> f64 {
        self.q3 + TUKEY_K * self.iqr()
    }

    /// Check whether a value would be classified as an outlier
    pub fn is_outlier(&self, x: f64) -> bool {
        x < self.lower_fence() || x > self.upper_fence()
    }
}
