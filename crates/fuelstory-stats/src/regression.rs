//! Ordinary least squares trend lines
//!
//! Sums are accumulated in a single pass, so the fit does not depend on the
//! order of the input series.

use serde::{Deserialize, Serialize};

/// Fitted line `y = slope * x + intercept` with its coefficient of determination
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RegressionResult {
    pub slope: f64,
    pub intercept: f64,
    pub r2: f64,
    /// Number of points that entered the fit
    pub n: usize,
}

impl RegressionResult {
    /// Result for a series with fewer than two usable points
    pub fn degenerate(n: usize) -> Self {
        Self {
            slope: 0.0,
            intercept: 0.0,
            r2: 0.0,
            n,
        }
    }

    /// Evaluate the fitted line at `x`
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Endpoints of the fitted line between `x1` and `x2`
    pub fn segment(&self, x1: f64, x2: f64) -> [(f64, f64); 2] {
        [(x1, self.predict(x1)), (x2, self.predict(x2))]
    }
}

/// Running sums for a least-squares fit
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearAccumulator {
    n: usize,
    sum_x: f64,
    sum_y: f64,
    sum_xy: f64,
    sum_xx: f64,
    sum_yy: f64,
}

impl LinearAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a point; returns false when it was skipped
    ///
    /// Points with a null `y` or a non-finite coordinate are ignored.
    pub fn push(&mut self, x: f64, y: Option<f64>) -> bool {
        let Some(y) = y else {
            return false;
        };
        if !x.is_finite() || !y.is_finite() {
            return false;
        }

        self.n += 1;
        self.sum_x += x;
        self.sum_y += y;
        self.sum_xy += x * y;
        self.sum_xx += x * x;
        self.sum_yy += y * y;
        true
    }

    /// Number of accepted points
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Compute the fit from the accumulated sums
    ///
    /// When `(n·Σx² − (Σx)²)·(n·Σy² − (Σy)²)` is zero, `r2` is reported as 1.
    /// When every x is equal the slope is reported as 0 and the intercept
    /// as the mean of y.
    pub fn finish(&self) -> RegressionResult {
        if self.n < 2 {
            return RegressionResult::degenerate(self.n);
        }

        let n = self.n as f64;
        let cov = n * self.sum_xy - self.sum_x * self.sum_y;
        let var_x = n * self.sum_xx - self.sum_x * self.sum_x;
        let var_y = n * self.sum_yy - self.sum_y * self.sum_y;

        let slope = if var_x == 0.0 { 0.0 } else { cov / var_x };
        let intercept = (self.sum_y - slope * self.sum_x) / n;

        let r2_denom = var_x * var_y;
        let r2 = if r2_denom == 0.0 {
            1.0
        } else {
            cov * cov / r2_denom
        };

        RegressionResult {
            slope,
            intercept,
            r2,
            n: self.n,
        }
    }
}

impl Extend<(f64, Option<f64>)> for LinearAccumulator {
    fn extend<T: IntoIterator<Item = (f64, Option<f64>)>>(&mut self, iter: T) {
        for (x, y) in iter {
            self.push(x, y);
        }
    }
}

/// Fit a least-squares line through `(x, y)` pairs
pub fn fit<I>(points: I) -> RegressionResult
where
    I: IntoIterator<Item = (f64, Option<f64>)>,
{
    let mut acc = LinearAccumulator::new();
    acc.extend(points);
    acc.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_exact_fit() {
        let r = fit(vec![(2000.0, Some(20.0)), (2001.0, Some(22.0)), (2002.0, Some(24.0))]);
        assert!((r.slope - 2.0).abs() < 1e-9);
        assert!((r.intercept + 3980.0).abs() < 1e-6);
        assert!((r.r2 - 1.0).abs() < 1e-9);
        assert_eq!(r.n, 3);
    }

    #[test]
    fn test_constant_y_reports_unit_r2() {
        let r = fit((2000..2010).map(|x| (x as f64, Some(5.0))));
        assert_eq!(r.slope, 0.0);
        assert_eq!(r.r2, 1.0);
        assert!((r.intercept - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_series() {
        assert_eq!(fit(vec![(2000.0, Some(1.0))]), RegressionResult::degenerate(1));
        assert_eq!(fit(Vec::<(f64, Option<f64>)>::new()), RegressionResult::degenerate(0));

        let r = fit(vec![(2000.0, Some(1.0))]);
        assert_eq!((r.slope, r.intercept, r.r2), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_skips_missing_and_non_finite() {
        let r = fit(vec![
            (1.0, Some(1.0)),
            (2.0, None),
            (f64::NAN, Some(9.0)),
            (3.0, Some(f64::INFINITY)),
            (4.0, Some(4.0)),
        ]);
        assert_eq!(r.n, 2);
        assert!((r.slope - 1.0).abs() < 1e-12);
        assert!(r.intercept.abs() < 1e-12);
    }

    #[test]
    fn test_vertical_series_stays_evaluable() {
        let r = fit(vec![(3.0, Some(1.0)), (3.0, Some(5.0))]);
        assert_eq!(r.slope, 0.0);
        assert!((r.intercept - 3.0).abs() < 1e-12);
        assert_eq!(r.r2, 1.0);
        assert!(r.predict(10.0).is_finite());
    }

    #[test]
    fn test_noisy_fit_r2_below_one() {
        let r = fit(vec![
            (0.0, Some(0.0)),
            (1.0, Some(2.0)),
            (2.0, Some(1.0)),
            (3.0, Some(3.0)),
        ]);
        assert!(r.r2 > 0.0 && r.r2 < 1.0);
        assert!((r.slope - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_segment() {
        let r = RegressionResult { slope: 2.0, intercept: 1.0, r2: 1.0, n: 2 };
        assert_eq!(r.segment(0.0, 2.0), [(0.0, 1.0), (2.0, 5.0)]);
    }

    proptest! {
        #[test]
        fn fit_is_order_independent(
            pts in prop::collection::vec((0i32..100, -50i32..50), 2..40)
        ) {
            let forward = fit(pts.iter().map(|&(x, y)| (x as f64, Some(y as f64))));
            let backward = fit(pts.iter().rev().map(|&(x, y)| (x as f64, Some(y as f64))));
            prop_assert_eq!(forward, backward);
        }
    }
}
