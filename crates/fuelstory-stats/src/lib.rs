//! fuelstory-stats - Statistical functions for the fuel-economy narrative
//!
//! This crate provides the estimators behind every plotted quantity:
//!
//! - **Quantiles**: linear interpolation between order statistics
//! - **BoxPlotSummary**: five-number summary with Tukey fences and outliers
//! - **CategoryGroups**: insertion-ordered grouping of records by key
//! - **Regression**: ordinary least squares with coefficient of determination
//! - **Extent**: finite min/max of a series
//!
//! # Missing values
//!
//! Every estimator accepts `Option<f64>` observations. Null and non-finite
//! values are dropped before anything is computed, and an input with no
//! usable values yields `None` (or the degenerate regression) rather than a
//! zero-filled result.

pub mod boxplot;
pub mod extent;
pub mod group;
pub mod quantile;
pub mod regression;

pub use boxplot::*;
pub use extent::*;
pub use group::*;
pub use quantile::*;
pub use regression::*;
