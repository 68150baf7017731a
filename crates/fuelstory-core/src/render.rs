//! Drawing primitives emitted by scene passes
//!
//! A pass produces a flat list of commands in plot-area coordinates
//! (origin at the top-left of the area inside the margins). The drawing
//! collaborator translates by the margin and paints in order.

use serde::{Deserialize, Serialize};

use crate::config::{CanvasConfig, Margin};

/// A point in plot-area pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Line styling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    /// CSS colour string
    pub color: String,
    pub width: f64,
    /// Dash pattern; empty for a solid line
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dash: Vec<f64>,
    pub opacity: f64,
}

impl Stroke {
    /// Solid, fully opaque stroke
    pub fn solid(color: impl Into<String>, width: f64) -> Self {
        Self {
            color: color.into(),
            width,
            dash: Vec::new(),
            opacity: 1.0,
        }
    }

    pub fn dashed(mut self, dash: &[f64]) -> Self {
        self.dash = dash.to_vec();
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }
}

/// Area fill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fill {
    pub color: String,
}

impl Fill {
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
        }
    }
}

/// One retained drawing operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    /// Connected line through the points
    Polyline { points: Vec<Point>, stroke: Stroke },
    /// Axis-aligned rectangle
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: Option<Fill>,
        stroke: Option<Stroke>,
    },
    /// Filled circle
    Marker {
        x: f64,
        y: f64,
        radius: f64,
        fill: Fill,
    },
    /// Single straight segment
    Rule {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: Stroke,
    },
}

impl DrawCommand {
    /// Rectangle spanning two y coordinates in either order
    ///
    /// Height is never negative.
    pub fn span_rect(x: f64, width: f64, y_a: f64, y_b: f64) -> Self {
        DrawCommand::Rect {
            x,
            y: y_a.min(y_b),
            width,
            height: (y_a - y_b).abs(),
            fill: None,
            stroke: None,
        }
    }

    /// Attach a fill to a rectangle; other commands are returned unchanged
    pub fn with_fill(mut self, new_fill: Fill) -> Self {
        if let DrawCommand::Rect { fill, .. } = &mut self {
            *fill = Some(new_fill);
        }
        self
    }

    /// Attach an outline to a rectangle; other commands are returned unchanged
    pub fn with_stroke(mut self, new_stroke: Stroke) -> Self {
        if let DrawCommand::Rect { stroke, .. } = &mut self {
            *stroke = Some(new_stroke);
        }
        self
    }

    pub fn rule(x1: f64, y1: f64, x2: f64, y2: f64, stroke: Stroke) -> Self {
        DrawCommand::Rule {
            x1,
            y1,
            x2,
            y2,
            stroke,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            DrawCommand::Polyline { .. } => "polyline",
            DrawCommand::Rect { .. } => "rect",
            DrawCommand::Marker { .. } => "marker",
            DrawCommand::Rule { .. } => "rule",
        }
    }
}

/// Legend row for a trend series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub name: String,
    pub color: String,
    /// Goodness of fit of the series' regression line
    pub r2: Option<f64>,
}

impl LegendEntry {
    /// Text shown next to the swatch
    pub fn label(&self) -> String {
        match self.r2 {
            Some(r2) => format!("{} (R² = {:.3})", self.name, r2),
            None => self.name.clone(),
        }
    }
}

/// Narrative text placed beside a scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub title: String,
    pub paragraphs: Vec<String>,
}

/// Geometry of the plot area on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
}

impl PlotArea {
    /// Check that a plot-area coordinate falls inside the area
    pub fn contains(&self, px: f64, py: f64) -> bool {
        (0.0..=self.width).contains(&px) && (0.0..=self.height).contains(&py)
    }

    /// Convert a canvas coordinate to plot-area coordinates
    pub fn from_canvas(&self, cx: f64, cy: f64) -> (f64, f64) {
        (cx - self.margin.left, cy - self.margin.top)
    }
}

impl From<&CanvasConfig> for PlotArea {
    fn from(canvas: &CanvasConfig) -> Self {
        Self {
            width: canvas.plot_width(),
            height: canvas.plot_height(),
            margin: canvas.margin,
        }
    }
}
