//! fuelstory-core - Scene engine for the fuel-economy narrative
//!
//! This crate turns the loaded datasets into drawable, inspectable scenes.
//!
//! # Key Components
//!
//! - **LinearScale / BandScale**: domain-to-pixel mappings with nicing and hit-testing
//! - **Axis**: tick positions and labels derived from a scale
//! - **NearestIndex**: closest-key lookup over a series sorted by year
//! - **ScenePass**: drawing commands, axes, legend, annotation and hover strategy for one scene
//! - **SceneCoordinator**: four-scene state machine with generation-checked pointer queries
//! - **StoryConfig**: canvas geometry, data locations and per-scene settings
//!
//! # Scenes
//!
//! 1. **Distribution**: combined MPG box plots per model year
//! 2. **CylinderTrend**: yearly MPG by cylinder class with regression lines
//! 3. **EmissionsTrend**: yearly CO₂ by cylinder class with regression lines
//! 4. **GuzzlerTrend**: year-over-year guzzler change bars and absolute share
//!
//! Every transition re-renders from the shared, read-only dataset bundle.

pub mod axis;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod inspect;
pub mod narrative;
pub mod nearest;
pub mod render;
pub mod scale;
pub mod scene;
pub mod scenes;

pub use axis::{Axis, AxisPosition, Tick, TickFormat};
pub use config::{
    CanvasConfig, ConfigError, DataConfig, DistributionConfig, GuzzlerConfig, Margin,
    StoryConfig, TrendConfig,
};
pub use coordinator::{PointerToken, SceneCoordinator};
pub use error::{ScaleError, StoryError, StoryResult};
pub use inspect::{HoverStrategy, Inspection, SeriesValue};
pub use nearest::NearestIndex;
pub use render::{Annotation, DrawCommand, Fill, LegendEntry, PlotArea, Point, Stroke};
pub use scale::{BandScale, LinearScale};
pub use scene::SceneId;
pub use scenes::{render_scene, ScenePass};
