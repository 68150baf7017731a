//! Annotation text shown beside each scene

use crate::render::Annotation;
use crate::scene::SceneId;

const HOVER_HINT: &str = "Mouse over data in each year to see detailed numbers for that model year of testing.";

/// Title and paragraphs for a scene
pub fn annotation(scene: SceneId) -> Annotation {
    let (title, paragraphs): (&str, &[&str]) = match scene {
        SceneId::Distribution => (
            "MPG (Miles Per Gallon) Distribution by Year",
            &[
                "EPA test data shows that fuel economy for gasoline-powered internal-combustion-engine (gas ICE) vehicles has improved over the past ~40 years.",
                HOVER_HINT,
                "Each box covers the middle 50% of combined MPG ratings for a model year (the interquartile range). The white line marks the median: about half of the tested vehicles rated higher and half rated lower.",
            ],
        ),
        SceneId::CylinderTrend => (
            "Combined MPG (Miles Per Gallon) Trend by Cylinder Class",
            &[
                "Fuel economy for the three largest classes of gas ICE vehicles (4-, 6- and 8-Cylinder) has improved over the past ~40 years.",
                HOVER_HINT,
                "4-Cylinder vehicles remain the most efficient class, but 6- and 8-Cylinder vehicles have improved as well.",
                "The coefficients of determination below show that the overall improvement in MPG has been close to linear.",
            ],
        ),
        SceneId::EmissionsTrend => (
            "CO₂ (Carbon Dioxide) Emissions Trend by Cylinder Class",
            &[
                "The EPA also tests CO₂ tailpipe emissions. Alongside better MPG, tailpipe CO₂ has fallen over the past 40 years, helped by features like engine start-stop and cylinder deactivation.",
                HOVER_HINT,
                "Of the three largest cylinder classes, 8-Cylinder engines improved the most.",
                "The coefficients of determination below show that the overall improvement in CO₂ emissions has been close to linear.",
            ],
        ),
        SceneId::GuzzlerTrend => (
            "Gas Guzzler Trends",
            &[
                "Cars that miss US fuel economy standards are taxed at the manufacturer or importer. The share of tested vehicles classed as gas guzzlers has stayed below 10% in every model year, peaking in the early 1990s and the mid 2000s.",
                HOVER_HINT,
                "Red and blue bars show the year-over-year change in guzzler share, while the black line shows the absolute percentage. The two use different y-scales.",
            ],
        ),
    };

    Annotation {
        title: title.to_string(),
        paragraphs: paragraphs.iter().map(|p| p.to_string()).collect(),
    }
}
