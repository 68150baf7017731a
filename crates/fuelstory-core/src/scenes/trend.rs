//! Yearly series by cylinder class with least-squares lines

use fuelstory_io::Dataset;
use fuelstory_stats::{fit, max_finite};

use crate::axis::{Axis, AxisPosition, TickFormat};
use crate::error::StoryResult;
use crate::inspect::{HoverStrategy, NearestHover, SeriesInfo, TrendRow};
use crate::nearest::NearestIndex;
use crate::render::{DrawCommand, LegendEntry, PlotArea, Point, Stroke};
use crate::scale::{LinearScale, DEFAULT_TICK_COUNT};

use super::{warn_missing_columns, SceneBody};

/// A plotted column and its presentation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendSeries {
    pub name: &'static str,
    pub column: &'static str,
    pub color: &'static str,
}

/// Series of the trend scenes together with their tooltip unit
#[derive(Debug, Clone, Copy)]
pub struct SeriesSet {
    pub series: [TrendSeries; 4],
    pub unit: &'static str,
    pub decimals: usize,
}

pub const CYLINDER_SERIES: SeriesSet = SeriesSet {
    series: [
        TrendSeries { name: "Overall", column: "avg_comb_mpg_overall", color: "#343a40" },
        TrendSeries { name: "4-Cylinder", column: "avg_mpg_4cyl", color: "#2ca02c" },
        TrendSeries { name: "6-Cylinder", column: "avg_mpg_6cyl", color: "#ff7f0e" },
        TrendSeries { name: "8-Cylinder", column: "avg_mpg_8cyl", color: "#d62728" },
    ],
    unit: "MPG",
    decimals: 1,
};

pub const EMISSIONS_SERIES: SeriesSet = SeriesSet {
    series: [
        TrendSeries { name: "Overall", column: "avg_co2_gpm_overall", color: "#343a40" },
        TrendSeries { name: "4-Cylinder", column: "avg_co2_4cyl", color: "#2ca02c" },
        TrendSeries { name: "6-Cylinder", column: "avg_co2_6cyl", color: "#ff7f0e" },
        TrendSeries { name: "8-Cylinder", column: "avg_co2_8cyl", color: "#d62728" },
    ],
    unit: "g/mi",
    decimals: 0,
};

/// How the value axis is bounded
#[derive(Debug, Clone, Copy)]
pub(crate) enum YDomain {
    /// `[0, max(column)]`, niced
    ZeroToMaxOf(&'static str),
    /// Used as given
    Fixed([f64; 2]),
}

pub(crate) fn render(
    data: &Dataset,
    set: &SeriesSet,
    y_domain: YDomain,
    plot: &PlotArea,
) -> StoryResult<SceneBody> {
    let columns: Vec<&str> = set.series.iter().map(|s| s.column).collect();
    warn_missing_columns(data, &columns);

    let rows: Vec<TrendRow> = data
        .sorted_by_year()
        .into_iter()
        .map(|r| TrendRow {
            year: r.year(),
            values: columns.iter().map(|c| r.number(c)).collect(),
        })
        .collect();

    let (x0, x1) = data
        .years_extent()
        .map(|(lo, hi)| (f64::from(lo), f64::from(hi)))
        .unwrap_or((0.0, 1.0));
    let x = LinearScale::new([x0, x1], [0.0, plot.width]);

    let y = match y_domain {
        YDomain::ZeroToMaxOf(column) => {
            let max = max_finite(data.column_values(column)).unwrap_or(1.0);
            LinearScale::new([0.0, max], [plot.height, 0.0]).nice()
        }
        YDomain::Fixed(domain) => LinearScale::new(domain, [plot.height, 0.0]),
    };

    let mut commands = Vec::new();
    let mut legend = Vec::with_capacity(set.series.len());

    for (i, series) in set.series.iter().enumerate() {
        let points: Vec<(f64, f64)> = rows
            .iter()
            .filter_map(|row| {
                row.values[i]
                    .filter(|v| v.is_finite())
                    .map(|v| (f64::from(row.year), v))
            })
            .collect();

        if points.is_empty() {
            tracing::warn!(dataset = data.name(), series = series.name, "series has no values");
        }

        commands.push(DrawCommand::Polyline {
            points: points
                .iter()
                .map(|&(year, v)| Point::new(x.map(year), y.map(v)))
                .collect(),
            stroke: Stroke::solid(series.color, 2.5),
        });

        let regression = fit(points.iter().map(|&(year, v)| (year, Some(v))));
        let [(ax, ay), (bx, by)] = regression.segment(x0, x1);
        commands.push(DrawCommand::rule(
            x.map(ax),
            y.map(ay),
            x.map(bx),
            y.map(by),
            Stroke::solid(series.color, 1.5).dashed(&[3.0, 3.0]).opacity(0.6),
        ));

        legend.push(LegendEntry {
            name: series.name.to_string(),
            color: series.color.to_string(),
            r2: Some(regression.r2),
        });
    }

    let index = NearestIndex::build(&rows, |r| f64::from(r.year))?;
    let hover = HoverStrategy::Nearest(NearestHover {
        x,
        index,
        rows,
        series: set
            .series
            .iter()
            .map(|s| SeriesInfo {
                name: s.name.to_string(),
                color: s.color.to_string(),
            })
            .collect(),
        unit: set.unit.to_string(),
        decimals: set.decimals,
    });

    let axes = vec![
        Axis::linear(AxisPosition::Bottom, &x, DEFAULT_TICK_COUNT, TickFormat::Integer)
            .with_offset(plot.height),
        Axis::linear(AxisPosition::Left, &y, DEFAULT_TICK_COUNT, TickFormat::Auto),
    ];

    Ok(SceneBody {
        axes,
        commands,
        legend,
        hover,
    })
}
