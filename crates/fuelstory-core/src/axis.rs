//! Axis tick layout for scene passes
//!
//! Derives tick positions and labels from a scale so the drawing
//! collaborator only has to place text and tick marks.

use std::fmt::Debug;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::scale::{BandScale, LinearScale};

/// Axis orientation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisPosition {
    Left,
    Right,
    Top,
    Bottom,
}

impl AxisPosition {
    /// Check if this is a vertical axis
    pub fn is_vertical(&self) -> bool {
        matches!(self, AxisPosition::Left | AxisPosition::Right)
    }

    /// Check if this is a horizontal axis
    pub fn is_horizontal(&self) -> bool {
        !self.is_vertical()
    }
}

/// How tick values are rendered as text
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickFormat {
    /// Precision chosen from the tick step
    Auto,
    /// Rounded integer, no grouping (years)
    Integer,
    /// Fixed number of decimals
    Fixed(usize),
}

/// A tick mark on an axis
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    /// Position in data coordinates
    pub value: f64,
    /// Position along the axis in pixels
    pub pixel: f64,
    /// Label text
    pub label: String,
}

/// A fully laid out axis
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub position: AxisPosition,
    /// Translation of the axis line across the plot (e.g. the plot height
    /// for a bottom axis)
    pub offset: f64,
    pub ticks: Vec<Tick>,
    /// Optional caption drawn next to the axis
    pub label: Option<String>,
}

impl Axis {
    /// Axis for a continuous scale
    pub fn linear(
        position: AxisPosition,
        scale: &LinearScale,
        count: usize,
        format: TickFormat,
    ) -> Self {
        let step = scale.tick_step(count);
        let ticks = scale
            .ticks(count)
            .into_iter()
            .map(|value| Tick {
                value,
                pixel: scale.map(value),
                label: format_number(value, format, step),
            })
            .collect();

        Self {
            position,
            offset: 0.0,
            ticks,
            label: None,
        }
    }

    /// Axis for a band scale, ticking the centre of every key that passes `filter`
    pub fn band<K, F>(position: AxisPosition, scale: &BandScale<K>, filter: F) -> Self
    where
        K: Eq + Hash + Debug + Copy + Into<f64> + ToString,
        F: Fn(&K) -> bool,
    {
        let ticks = scale
            .keys()
            .iter()
            .enumerate()
            .filter(|(_, k)| filter(k))
            .filter_map(|(i, k)| {
                scale.center_at(i).map(|pixel| Tick {
                    value: (*k).into(),
                    pixel,
                    label: k.to_string(),
                })
            })
            .collect();

        Self {
            position,
            offset: 0.0,
            ticks,
            label: None,
        }
    }

    /// Move the axis line across the plot
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Set the axis caption
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Format a tick value for display
fn format_number(value: f64, format: TickFormat, step: Option<f64>) -> String {
    match format {
        TickFormat::Integer => format!("{:.0}", value),
        TickFormat::Fixed(precision) => format!("{:.prec$}", value, prec = precision),
        TickFormat::Auto => {
            let precision = step
                .filter(|s| *s > 0.0 && *s < 1.0)
                .map(|s| (-s.log10().floor()) as usize)
                .unwrap_or(0);
            let text = format!("{:.prec$}", value, prec = precision);
            // Avoid "-0" labels on symmetric axes
            if text.trim_start_matches('-').chars().all(|c| c == '0' || c == '.') {
                text.trim_start_matches('-').to_string()
            } else {
                text
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_axis_ticks() {
        let scale = LinearScale::new([0.0, 50.0], [410.0, 0.0]);
        let axis = Axis::linear(AxisPosition::Left, &scale, 10, TickFormat::Auto);

        assert_eq!(axis.ticks.len(), 11);
        assert_eq!(axis.ticks[0].label, "0");
        assert_eq!(axis.ticks[0].pixel, 410.0);
        assert_eq!(axis.ticks[10].label, "50");
        assert_eq!(axis.ticks[10].pixel, 0.0);
    }

    #[test]
    fn test_decimal_labels() {
        let scale = LinearScale::new([-2.5, 2.5], [410.0, 0.0]);
        let axis = Axis::linear(AxisPosition::Left, &scale, 10, TickFormat::Auto);
        let labels: Vec<&str> = axis.ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels.first(), Some(&"-2.5"));
        assert!(labels.contains(&"0.0"));
        assert_eq!(labels.last(), Some(&"2.5"));
    }

    #[test]
    fn test_band_axis_filters_keys() {
        let scale = BandScale::new((1984..=1996).collect(), [0.0, 1300.0]);
        let axis = Axis::band(AxisPosition::Bottom, &scale, |y| y % 5 == 0)
            .with_offset(410.0)
            .with_label("Model year");

        let labels: Vec<&str> = axis.ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["1985", "1990", "1995"]);
        assert_eq!(axis.ticks[0].pixel, 150.0);
        assert_eq!(axis.offset, 410.0);
        assert_eq!(axis.label.as_deref(), Some("Model year"));
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(2001.0, TickFormat::Integer, None), "2001");
        assert_eq!(format_number(3.14159, TickFormat::Fixed(2), None), "3.14");
        assert_eq!(format_number(0.2, TickFormat::Auto, Some(0.2)), "0.2");
        assert_eq!(format_number(-0.0, TickFormat::Auto, Some(1.0)), "0");
        assert_eq!(format_number(40.0, TickFormat::Auto, Some(5.0)), "40");
    }

    #[test]
    fn test_axis_position() {
        assert!(AxisPosition::Left.is_vertical());
        assert!(AxisPosition::Bottom.is_horizontal());
    }
}
