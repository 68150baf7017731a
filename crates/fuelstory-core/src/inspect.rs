//! Pointer inspection
//!
//! Each scene pass carries a `HoverStrategy` that turns a plot-area pointer
//! position into an `Inspection`. The coordinator checks the pointer's
//! generation before any strategy runs.

use std::collections::HashMap;

use serde::Serialize;

use fuelstory_stats::BoxPlotSummary;

use crate::nearest::NearestIndex;
use crate::render::PlotArea;
use crate::scale::{BandScale, LinearScale};

/// What the pointer is over
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Inspection {
    /// Nothing under the pointer
    None,
    /// The pointer event was issued against a scene that is no longer shown
    Stale,
    /// A year's box plot
    BoxPlot { year: i32, summary: BoxPlotSummary },
    /// Values of every series at the nearest year
    Trend {
        year: i32,
        unit: String,
        decimals: usize,
        values: Vec<SeriesValue>,
    },
    /// A year's guzzler share and its change from the previous year
    Guzzler {
        year: i32,
        percentage: Option<f64>,
        yoy_change: Option<f64>,
    },
}

/// One named series value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesValue {
    pub name: String,
    pub color: String,
    pub value: f64,
}

impl Inspection {
    /// Whether anything was found
    pub fn is_hit(&self) -> bool {
        !matches!(self, Inspection::None | Inspection::Stale)
    }

    /// Tooltip text, one entry per line
    pub fn lines(&self) -> Vec<String> {
        match self {
            Inspection::None | Inspection::Stale => Vec::new(),
            Inspection::BoxPlot { year, summary } => vec![
                format!("Year: {}", year),
                format!("Median: {:.1} MPG", summary.median),
                format!("IQR: {:.1}", summary.iqr()),
                format!("Range: {:.1}–{:.1}", summary.q1, summary.q3),
            ],
            Inspection::Trend {
                year,
                unit,
                decimals,
                values,
            } => std::iter::once(format!("Year: {}", year))
                .chain(values.iter().map(|v| {
                    format!("{}: {:.prec$} {}", v.name, v.value, unit, prec = *decimals)
                }))
                .collect(),
            Inspection::Guzzler {
                year,
                percentage,
                yoy_change,
            } => vec![
                format!("Year: {}", year),
                match percentage {
                    Some(p) => format!("Guzzler Pct: {:.1}%", p),
                    None => "Guzzler Pct: N/A".to_string(),
                },
                match yoy_change {
                    Some(c) => format!("Change: {:.2} pts", c),
                    None => "Change: N/A".to_string(),
                },
            ],
        }
    }
}

/// A row of a trend table: one year, one optional value per series
#[derive(Debug, Clone, PartialEq)]
pub struct TrendRow {
    pub year: i32,
    pub values: Vec<Option<f64>>,
}

/// Series metadata for trend inspection
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesInfo {
    pub name: String,
    pub color: String,
}

/// Nearest-year lookup over a continuous x axis
#[derive(Debug, Clone)]
pub struct NearestHover {
    pub x: LinearScale,
    pub index: NearestIndex,
    pub rows: Vec<TrendRow>,
    pub series: Vec<SeriesInfo>,
    pub unit: String,
    pub decimals: usize,
}

impl NearestHover {
    fn inspect(&self, px: f64) -> Inspection {
        let x0 = self.x.invert(px);
        let Some(row) = self.index.lookup(&self.rows, x0) else {
            return Inspection::None;
        };

        let values = self
            .series
            .iter()
            .zip(&row.values)
            .filter_map(|(info, value)| {
                value.filter(|v| v.is_finite()).map(|value| SeriesValue {
                    name: info.name.clone(),
                    color: info.color.clone(),
                    value,
                })
            })
            .collect();

        Inspection::Trend {
            year: row.year,
            unit: self.unit.clone(),
            decimals: self.decimals,
            values,
        }
    }
}

/// How a scene answers pointer queries
#[derive(Debug, Clone, Default)]
pub enum HoverStrategy {
    /// Scene has no inspectable data
    #[default]
    None,
    /// Band hit-test on x, answered from precomputed details per key
    Category {
        scale: BandScale<i32>,
        details: HashMap<i32, Inspection>,
    },
    /// Nearest key on a continuous x axis
    Nearest(NearestHover),
}

impl HoverStrategy {
    /// Inspect a position given in plot-area pixels
    pub fn inspect(&self, plot: &PlotArea, px: f64, py: f64) -> Inspection {
        if !plot.contains(px, py) {
            return Inspection::None;
        }

        let found = match self {
            HoverStrategy::None => Inspection::None,
            HoverStrategy::Category { scale, details } => scale
                .hit_test(px)
                .and_then(|key| details.get(key))
                .cloned()
                .unwrap_or(Inspection::None),
            HoverStrategy::Nearest(hover) => hover.inspect(px),
        };
        tracing::trace!(px, py, hit = found.is_hit(), "pointer query");
        found
    }
}
