//! Scene render passes
//!
//! A pass is a pure function of the dataset bundle and the configuration.
//! It recomputes every statistic, rebuilds scales and the hover strategy,
//! and returns the complete drawing for one scene.

mod distribution;
mod guzzler;
mod trend;

use serde::Serialize;

use fuelstory_io::DatasetBundle;

use crate::axis::Axis;
use crate::config::StoryConfig;
use crate::error::StoryResult;
use crate::inspect::{HoverStrategy, Inspection};
use crate::narrative;
use crate::render::{Annotation, DrawCommand, LegendEntry, PlotArea};
use crate::scene::SceneId;

pub use trend::{SeriesSet, TrendSeries, CYLINDER_SERIES, EMISSIONS_SERIES};

/// Everything needed to draw and inspect one scene
#[derive(Debug, Clone, Serialize)]
pub struct ScenePass {
    pub scene: SceneId,
    /// Generation this pass was rendered for
    pub generation: u64,
    pub plot: PlotArea,
    pub axes: Vec<Axis>,
    /// Drawing commands in paint order
    pub commands: Vec<DrawCommand>,
    pub legend: Vec<LegendEntry>,
    pub annotation: Annotation,
    #[serde(skip)]
    pub hover: HoverStrategy,
}

impl ScenePass {
    /// Inspect a plot-area position against this pass
    pub fn inspect(&self, px: f64, py: f64) -> Inspection {
        self.hover.inspect(&self.plot, px, py)
    }
}

/// Scene-specific output of a pass
#[derive(Debug, Default)]
pub(crate) struct SceneBody {
    pub axes: Vec<Axis>,
    pub commands: Vec<DrawCommand>,
    pub legend: Vec<LegendEntry>,
    pub hover: HoverStrategy,
}

/// Render one scene from scratch
pub fn render_scene(
    scene: SceneId,
    bundle: &DatasetBundle,
    config: &StoryConfig,
    generation: u64,
) -> StoryResult<ScenePass> {
    let plot = PlotArea::from(&config.canvas);

    let body = match scene {
        SceneId::Distribution => {
            distribution::render(&bundle.vehicles, &config.distribution, &plot)?
        }
        SceneId::CylinderTrend => trend::render(
            &bundle.cylinder_trends,
            &CYLINDER_SERIES,
            trend::YDomain::ZeroToMaxOf("avg_mpg_4cyl"),
            &plot,
        )?,
        SceneId::EmissionsTrend => trend::render(
            &bundle.co2_trends,
            &EMISSIONS_SERIES,
            trend::YDomain::Fixed(config.trend.emissions_domain),
            &plot,
        )?,
        SceneId::GuzzlerTrend => guzzler::render(&bundle.guzzler_trends, &config.guzzler, &plot)?,
    };

    tracing::debug!(
        scene = scene.number(),
        generation,
        commands = body.commands.len(),
        "rendered scene"
    );

    Ok(ScenePass {
        scene,
        generation,
        plot,
        axes: body.axes,
        commands: body.commands,
        legend: body.legend,
        annotation: narrative::annotation(scene),
        hover: body.hover,
    })
}

/// Warn once per missing column so empty scenes are explainable
pub(crate) fn warn_missing_columns(dataset: &fuelstory_io::Dataset, columns: &[&str]) {
    for column in columns {
        if !dataset.has_column(column) {
            tracing::warn!(dataset = dataset.name(), column, "column missing, series will be empty");
        }
    }
}
