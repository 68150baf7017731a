//! Diverging year-over-year bars with an absolute-share line

use std::collections::HashMap;

use fuelstory_io::Dataset;
use fuelstory_stats::max_abs;

use crate::axis::{Axis, AxisPosition, TickFormat};
use crate::config::GuzzlerConfig;
use crate::error::StoryResult;
use crate::inspect::{HoverStrategy, Inspection};
use crate::render::{DrawCommand, Fill, PlotArea, Point, Stroke};
use crate::scale::{BandScale, LinearScale, DEFAULT_TICK_COUNT};

use super::{warn_missing_columns, SceneBody};

const PERCENT_COLUMN: &str = "guzzler_percentage";
const YOY_COLUMN: &str = "yoy_change";

const RISE_FILL: &str = "rgba(214, 39, 40, 0.7)";
const FALL_FILL: &str = "rgba(31, 119, 180, 0.7)";
const ZERO_COLOR: &str = "#343a40";
const LINE_COLOR: &str = "#000";

pub(crate) fn render(
    data: &Dataset,
    config: &GuzzlerConfig,
    plot: &PlotArea,
) -> StoryResult<SceneBody> {
    warn_missing_columns(data, &[PERCENT_COLUMN, YOY_COLUMN]);

    let sorted = data.sorted_by_year();
    let changes: Vec<(i32, f64)> = sorted
        .iter()
        .filter_map(|r| r.finite(YOY_COLUMN).map(|c| (r.year(), c)))
        .collect();

    let mut keys: Vec<i32> = changes.iter().map(|&(year, _)| year).collect();
    keys.dedup();
    let x = BandScale::new(keys, [0.0, plot.width]).padding(config.band_padding);

    let limit = max_abs(changes.iter().map(|&(_, c)| Some(c))).unwrap_or(0.0);
    let y_change = LinearScale::new([-limit, limit], [plot.height, 0.0]).nice();
    let y_percent = LinearScale::new([0.0, config.percent_max], [plot.height, 0.0]);

    let zero = y_change.map(0.0);
    let bandwidth = x.bandwidth();
    let mut commands = vec![DrawCommand::rule(
        0.0,
        zero,
        plot.width,
        zero,
        Stroke::solid(ZERO_COLOR, 1.0),
    )];

    for &(year, change) in &changes {
        let fill = if change >= 0.0 { RISE_FILL } else { FALL_FILL };
        commands.push(
            DrawCommand::span_rect(x.map(&year)?, bandwidth, zero, y_change.map(change))
                .with_fill(Fill::new(fill)),
        );
    }

    // Years before the first bar have no slot; later years without a
    // change value are skipped as well.
    let line: Vec<Point> = sorted
        .iter()
        .filter(|r| x.keys().first().is_some_and(|first| r.year() >= *first))
        .filter_map(|r| {
            let center = x.center(&r.year()).ok()?;
            let pct = r.finite(PERCENT_COLUMN)?;
            Some(Point::new(center, y_percent.map(pct)))
        })
        .collect();
    commands.push(DrawCommand::Polyline {
        points: line,
        stroke: Stroke::solid(LINE_COLOR, 2.5),
    });

    let mut details = HashMap::with_capacity(x.len());
    for record in &sorted {
        if x.index_of(&record.year()).is_some() {
            details.entry(record.year()).or_insert_with(|| Inspection::Guzzler {
                year: record.year(),
                percentage: record.finite(PERCENT_COLUMN),
                yoy_change: record.finite(YOY_COLUMN),
            });
        }
    }

    let interval = config.tick_interval;
    let axes = vec![
        Axis::band(AxisPosition::Bottom, &x, |year| year % interval == 0)
            .with_offset(plot.height),
        Axis::linear(AxisPosition::Left, &y_change, DEFAULT_TICK_COUNT, TickFormat::Auto)
            .with_label("YoY Change (pts)"),
        Axis::linear(AxisPosition::Right, &y_percent, DEFAULT_TICK_COUNT, TickFormat::Auto)
            .with_offset(plot.width)
            .with_label("Absolute Guzzler (%)"),
    ];

    Ok(SceneBody {
        axes,
        commands,
        legend: Vec::new(),
        hover: HoverStrategy::Category { scale: x, details },
    })
}
