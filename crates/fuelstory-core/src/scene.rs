//! Scene identifiers and their cyclic order

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::StoryError;

/// One of the four scenes of the narrative, numbered 1 to 4
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SceneId {
    /// Box plot of combined MPG per model year
    Distribution,
    /// Yearly MPG by cylinder class with regression lines
    CylinderTrend,
    /// Yearly CO₂ by cylinder class with regression lines
    EmissionsTrend,
    /// Year-over-year change and absolute share of gas guzzlers
    GuzzlerTrend,
}

impl SceneId {
    /// All scenes in narrative order
    pub const ALL: [SceneId; 4] = [
        SceneId::Distribution,
        SceneId::CylinderTrend,
        SceneId::EmissionsTrend,
        SceneId::GuzzlerTrend,
    ];

    /// Scene number in `1..=4`
    pub fn number(self) -> u8 {
        match self {
            SceneId::Distribution => 1,
            SceneId::CylinderTrend => 2,
            SceneId::EmissionsTrend => 3,
            SceneId::GuzzlerTrend => 4,
        }
    }

    /// Following scene, wrapping from 4 to 1
    pub fn next(self) -> Self {
        Self::ALL[self.number() as usize % 4]
    }

    /// Preceding scene, wrapping from 1 to 4
    pub fn prev(self) -> Self {
        Self::ALL[(self.number() as usize + 2) % 4]
    }

    /// Short machine-friendly name
    pub fn name(self) -> &'static str {
        match self {
            SceneId::Distribution => "distribution",
            SceneId::CylinderTrend => "cylinder-trend",
            SceneId::EmissionsTrend => "emissions-trend",
            SceneId::GuzzlerTrend => "guzzler-trend",
        }
    }
}

impl TryFrom<u8> for SceneId {
    type Error = StoryError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1..=4 => Ok(Self::ALL[n as usize - 1]),
            _ => Err(StoryError::InvalidScene(n)),
        }
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.number(), self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_roundtrip() {
        for scene in SceneId::ALL {
            assert_eq!(SceneId::try_from(scene.number()).unwrap(), scene);
        }
    }

    #[test]
    fn test_cycle() {
        assert_eq!(SceneId::GuzzlerTrend.next(), SceneId::Distribution);
        assert_eq!(SceneId::Distribution.prev(), SceneId::GuzzlerTrend);
        assert_eq!(SceneId::Distribution.next(), SceneId::CylinderTrend);
        assert_eq!(SceneId::EmissionsTrend.prev(), SceneId::CylinderTrend);
    }

    #[test]
    fn test_invalid_numbers() {
        assert!(matches!(SceneId::try_from(0), Err(StoryError::InvalidScene(0))));
        assert!(matches!(SceneId::try_from(5), Err(StoryError::InvalidScene(5))));
    }

    #[test]
    fn test_display() {
        assert_eq!(SceneId::CylinderTrend.to_string(), "2 (cylinder-trend)");
    }
}
