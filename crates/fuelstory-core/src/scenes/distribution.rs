//! Box plot of a value column per model year

use std::collections::HashMap;

use fuelstory_io::{Dataset, Record};
use fuelstory_stats::{extent, summarize_groups, BoxPlotSummary};

use crate::axis::{Axis, AxisPosition, TickFormat};
use crate::config::DistributionConfig;
use crate::error::StoryResult;
use crate::inspect::{HoverStrategy, Inspection};
use crate::render::{DrawCommand, Fill, PlotArea, Stroke};
use crate::scale::{BandScale, LinearScale, DEFAULT_TICK_COUNT};

use super::{warn_missing_columns, SceneBody};

const OUTLIER_FILL: &str = "rgba(108, 117, 125, 0.5)";
const WHISKER_COLOR: &str = "#343a40";
const BOX_FILL: &str = "rgba(31, 119, 180, 0.7)";
const BOX_STROKE: &str = "rgba(31, 119, 180, 1)";
const MEDIAN_COLOR: &str = "#fff";

pub(crate) fn render(
    data: &Dataset,
    config: &DistributionConfig,
    plot: &PlotArea,
) -> StoryResult<SceneBody> {
    let column = config.value_column.as_str();
    warn_missing_columns(data, &[column]);

    // Every year in the extent gets a slot, even years without records
    let years: Vec<i32> = data
        .years_extent()
        .map(|(lo, hi)| (lo..=hi).collect())
        .unwrap_or_default();
    let x = BandScale::new(years, [0.0, plot.width]).padding(config.band_padding);

    let (lo, hi) = extent(data.column_values(column)).unwrap_or((0.0, 1.0));
    let y = LinearScale::new([lo, hi], [plot.height, 0.0]).nice();

    let sorted = data.sorted_by_year();
    let groups = summarize_groups(sorted.iter().copied(), Record::year, |r: &Record| {
        r.number(column)
    });

    let mut commands = Vec::new();
    let mut details = HashMap::with_capacity(groups.len());
    let bandwidth = x.bandwidth();

    for (year, summary) in groups {
        let left = x.map(&year)?;
        draw_box(&mut commands, &summary, left, bandwidth, &y, config.outlier_radius);
        details.insert(year, Inspection::BoxPlot { year, summary });
    }

    if details.is_empty() {
        tracing::warn!(dataset = data.name(), column, "no year has usable values");
    }

    let interval = config.tick_interval;
    let axes = vec![
        Axis::band(AxisPosition::Bottom, &x, |year| year % interval == 0)
            .with_offset(plot.height),
        Axis::linear(AxisPosition::Left, &y, DEFAULT_TICK_COUNT, TickFormat::Auto),
    ];

    Ok(SceneBody {
        axes,
        commands,
        legend: Vec::new(),
        hover: HoverStrategy::Category { scale: x, details },
    })
}

fn draw_box(
    commands: &mut Vec<DrawCommand>,
    summary: &BoxPlotSummary,
    left: f64,
    bandwidth: f64,
    y: &LinearScale,
    outlier_radius: f64,
) {
    let center = left + bandwidth / 2.0;
    let right = left + bandwidth;

    commands.extend(summary.outliers.iter().map(|&v| DrawCommand::Marker {
        x: center,
        y: y.map(v),
        radius: outlier_radius,
        fill: Fill::new(OUTLIER_FILL),
    }));

    let whisker = Stroke::solid(WHISKER_COLOR, 1.5);
    let (y_min, y_max) = (y.map(summary.whisker_min), y.map(summary.whisker_max));
    commands.push(DrawCommand::rule(center, y_min, center, y_max, whisker.clone()));
    commands.push(DrawCommand::rule(left, y_min, right, y_min, whisker.clone()));
    commands.push(DrawCommand::rule(left, y_max, right, y_max, whisker));

    commands.push(
        DrawCommand::span_rect(left, bandwidth, y.map(summary.q3), y.map(summary.q1))
            .with_fill(Fill::new(BOX_FILL))
            .with_stroke(Stroke::solid(BOX_STROKE, 1.5)),
    );

    let median = y.map(summary.median);
    commands.push(DrawCommand::rule(
        left,
        median,
        right,
        median,
        Stroke::solid(MEDIAN_COLOR, 2.0),
    ));
}
