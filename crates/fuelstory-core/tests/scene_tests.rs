//! Scene pass integration tests over CSV fixtures

mod common;

use std::sync::Arc;

use common::load_bundle;
use fuelstory_core::{
    render_scene, AxisPosition, DrawCommand, HoverStrategy, Inspection, SceneCoordinator,
    SceneId, StoryConfig, StoryError,
};

fn coordinator() -> SceneCoordinator {
    SceneCoordinator::new(Arc::new(load_bundle()), StoryConfig::default()).unwrap()
}

fn band_center(hover: &HoverStrategy, year: i32) -> f64 {
    match hover {
        HoverStrategy::Category { scale, .. } => scale.center(&year).unwrap(),
        other => panic!("expected category hover, got {:?}", other),
    }
}

// === Distribution ===

#[test]
fn test_distribution_draws_every_year() {
    let bundle = load_bundle();
    let pass = render_scene(SceneId::Distribution, &bundle, &StoryConfig::default(), 7).unwrap();

    assert_eq!(pass.generation, 7);
    assert_eq!(pass.plot.width, 840.0);
    // three years, five primitives each, no outliers
    assert_eq!(pass.commands.len(), 15);
    assert!(pass.legend.is_empty());

    let left = pass
        .axes
        .iter()
        .find(|a| a.position == AxisPosition::Left)
        .unwrap();
    assert_eq!(left.ticks.first().map(|t| t.value), Some(8.0));
    assert_eq!(left.ticks.last().map(|t| t.value), Some(30.0));
}

#[test]
fn test_distribution_tooltip() {
    let c = coordinator();
    let px = band_center(&c.pass().hover, 1984);

    assert_eq!(
        c.inspect(c.token(), px, 200.0).lines(),
        vec!["Year: 1984", "Median: 17.0 MPG", "IQR: 5.5", "Range: 16.0–21.5"]
    );
}

#[test]
fn test_distribution_pointer_outside_plot() {
    let c = coordinator();
    let px = band_center(&c.pass().hover, 1984);
    assert_eq!(c.inspect(c.token(), px, 500.0), Inspection::None);
    assert_eq!(c.inspect(c.token(), -3.0, 10.0), Inspection::None);
}

// === Trends ===

#[test]
fn test_cylinder_trend_tooltip_skips_missing_series() {
    let mut c = coordinator();
    c.go_to(2).unwrap();

    assert_eq!(
        c.inspect(c.token(), 0.0, 10.0).lines(),
        vec![
            "Year: 1984",
            "Overall: 19.5 MPG",
            "4-Cylinder: 23.1 MPG",
            "6-Cylinder: 17.9 MPG",
            "8-Cylinder: 14.2 MPG"
        ]
    );
    assert_eq!(c.inspect(c.token(), 840.0, 10.0).lines().len(), 4);
}

#[test]
fn test_cylinder_legend_reports_fit() {
    let mut c = coordinator();
    let pass = c.go_to(2).unwrap();

    let labels: Vec<String> = pass.legend.iter().map(|e| e.label()).collect();
    assert_eq!(labels.len(), 4);
    assert!(labels[0].starts_with("Overall (R² = 0.99"));
    assert_eq!(labels[3], "8-Cylinder (R² = 1.000)");
}

#[test]
fn test_emissions_tooltip_rounds_to_integers() {
    let mut c = coordinator();
    c.go_to(3).unwrap();

    assert_eq!(
        c.inspect(c.token(), 420.0, 10.0).lines(),
        vec![
            "Year: 1985",
            "Overall: 540 g/mi",
            "4-Cylinder: 410 g/mi",
            "6-Cylinder: 570 g/mi",
            "8-Cylinder: 630 g/mi"
        ]
    );
}

#[test]
fn test_emissions_regression_is_dashed() {
    let mut c = coordinator();
    let pass = c.go_to(3).unwrap();

    let dashed = pass
        .commands
        .iter()
        .filter(|cmd| matches!(cmd, DrawCommand::Rule { stroke, .. } if stroke.dash == vec![3.0, 3.0]))
        .count();
    assert_eq!(dashed, 4);
}

// === Guzzler ===

#[test]
fn test_guzzler_tooltip() {
    let mut c = coordinator();
    c.go_to(4).unwrap();
    let px = band_center(&c.pass().hover, 1986);

    assert_eq!(
        c.inspect(c.token(), px, 100.0).lines(),
        vec!["Year: 1986", "Guzzler Pct: 3.8%", "Change: -1.30 pts"]
    );
}

#[test]
fn test_guzzler_axes() {
    let mut c = coordinator();
    let pass = c.go_to(4).unwrap();

    let labels: Vec<Option<&str>> = pass.axes.iter().map(|a| a.label.as_deref()).collect();
    assert_eq!(
        labels,
        vec![None, Some("YoY Change (pts)"), Some("Absolute Guzzler (%)")]
    );
}

// === Coordinator ===

#[test]
fn test_walk_through_all_scenes() {
    let mut c = coordinator();
    let mut seen = vec![c.current()];
    for _ in 0..4 {
        seen.push(c.next().unwrap().scene);
    }
    assert_eq!(
        seen,
        vec![
            SceneId::Distribution,
            SceneId::CylinderTrend,
            SceneId::EmissionsTrend,
            SceneId::GuzzlerTrend,
            SceneId::Distribution
        ]
    );
}

#[test]
fn test_stale_pointer_after_transition() {
    let mut c = coordinator();
    let old = c.token();
    let px = band_center(&c.pass().hover, 1985);

    c.next().unwrap();
    c.prev().unwrap();

    assert_eq!(c.current(), SceneId::Distribution);
    assert_eq!(c.inspect(old, px, 100.0), Inspection::Stale);
    assert!(c.inspect(c.token(), px, 100.0).is_hit());
}

#[test]
fn test_invalid_scene_keeps_state() {
    let mut c = coordinator();
    let token = c.token();
    assert!(matches!(c.go_to(9), Err(StoryError::InvalidScene(9))));
    assert_eq!(c.token(), token);
}

#[test]
fn test_pass_serializes_without_hover() {
    let c = coordinator();
    let json = serde_json::to_value(c.pass()).unwrap();

    assert_eq!(json["scene"], "Distribution");
    assert!(json.get("hover").is_none());
    assert_eq!(json["commands"].as_array().map(Vec::len), Some(15));
    assert_eq!(json["annotation"]["title"], "MPG (Miles Per Gallon) Distribution by Year");
}
