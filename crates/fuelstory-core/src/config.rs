//! Configuration for fuelstory-core
//!
//! Canvas geometry, data locations, and per-scene presentation settings.
//! Defaults reproduce the published narrative.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use fuelstory_io::BundleFiles;

use crate::error::{StoryError, StoryResult};

/// System-wide configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoryConfig {
    /// Canvas size and margins
    pub canvas: CanvasConfig,
    /// Where the source tables live
    pub data: DataConfig,
    /// Box-plot scene settings
    pub distribution: DistributionConfig,
    /// Trend scene settings
    pub trend: TrendConfig,
    /// Guzzler scene settings
    pub guzzler: GuzzlerConfig,
}

/// Canvas geometry in pixels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 960.0,
            height: 500.0,
            margin: Margin::default(),
        }
    }
}

impl CanvasConfig {
    /// Width of the plot area inside the margins
    pub fn plot_width(&self) -> f64 {
        self.width - self.margin.left - self.margin.right
    }

    /// Height of the plot area inside the margins
    pub fn plot_height(&self) -> f64 {
        self.height - self.margin.top - self.margin.bottom
    }
}

/// Space reserved around the plot area for axes and labels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 40.0,
            right: 60.0,
            bottom: 50.0,
            left: 60.0,
        }
    }
}

/// Data directory and file names
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub dir: PathBuf,
    pub files: BundleFiles,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            files: BundleFiles::default(),
        }
    }
}

/// Box-plot-by-year scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistributionConfig {
    /// Column holding the measured value
    pub value_column: String,
    /// Band padding fraction in [0, 1)
    pub band_padding: f64,
    /// Label only years divisible by this
    pub tick_interval: i32,
    /// Outlier marker radius in pixels
    pub outlier_radius: f64,
}

impl Default for DistributionConfig {
    fn default() -> Self {
        Self {
            value_column: "combMPG".to_string(),
            band_padding: 0.6,
            tick_interval: 5,
            outlier_radius: 2.0,
        }
    }
}

/// Linear trend scenes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendConfig {
    /// Fixed value domain of the emissions scene (g/mi)
    pub emissions_domain: [f64; 2],
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            emissions_domain: [300.0, 700.0],
        }
    }
}

/// Diverging bar/line scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuzzlerConfig {
    /// Band padding fraction in [0, 1)
    pub band_padding: f64,
    /// Upper bound of the absolute-percentage axis
    pub percent_max: f64,
    /// Label only years divisible by this
    pub tick_interval: i32,
}

impl Default for GuzzlerConfig {
    fn default() -> Self {
        Self {
            band_padding: 0.3,
            percent_max: 15.0,
            tick_interval: 5,
        }
    }
}

impl StoryConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Default location: `<config_dir>/fuelstory/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("fuelstory").join("config.toml"))
    }

    /// Read and validate a TOML configuration file
    pub fn load(path: impl AsRef<Path>) -> StoryResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config =
            Self::from_toml(&content).map_err(|e| StoryError::ConfigParse(e.to_string()))?;
        config.validate()?;
        tracing::debug!(path = %path.as_ref().display(), "loaded configuration");
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.canvas.plot_width() <= 0.0 || self.canvas.plot_height() <= 0.0 {
            return Err(ConfigError::OutOfRange(
                "canvas must be larger than its margins".to_string(),
            ));
        }

        for (name, padding) in [
            ("distribution.band_padding", self.distribution.band_padding),
            ("guzzler.band_padding", self.guzzler.band_padding),
        ] {
            if !(0.0..1.0).contains(&padding) {
                return Err(ConfigError::OutOfRange(format!(
                    "{} must be in [0, 1)",
                    name
                )));
            }
        }

        if self.distribution.tick_interval <= 0 || self.guzzler.tick_interval <= 0 {
            return Err(ConfigError::OutOfRange(
                "tick_interval must be positive".to_string(),
            ));
        }

        let [lo, hi] = self.trend.emissions_domain;
        if !(lo.is_finite() && hi.is_finite()) || lo >= hi {
            return Err(ConfigError::InvalidDomain(
                "emissions_domain must be increasing".to_string(),
            ));
        }

        if !self.guzzler.percent_max.is_finite() || self.guzzler.percent_max <= 0.0 {
            return Err(ConfigError::OutOfRange(
                "percent_max must be positive".to_string(),
            ));
        }

        if self.distribution.value_column.is_empty() {
            return Err(ConfigError::MissingField("distribution.value_column".to_string()));
        }

        Ok(())
    }
}

/// Configuration validation error
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// Value is out of valid range
    OutOfRange(String),
    /// Domain bounds are not ordered
    InvalidDomain(String),
    /// Required field is missing
    MissingField(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::OutOfRange(msg) => write!(f, "Value out of range: {}", msg),
            ConfigError::InvalidDomain(msg) => write!(f, "Invalid domain: {}", msg),
            ConfigError::MissingField(msg) => write!(f, "Missing field: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StoryConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.canvas.plot_width(), 840.0);
        assert_eq!(config.canvas.plot_height(), 410.0);
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = StoryConfig::default();
        let toml = config.to_toml().unwrap();
        let parsed = StoryConfig::from_toml(&toml).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let parsed = StoryConfig::from_toml("[guzzler]\npercent_max = 20.0\n").unwrap();
        assert_eq!(parsed.guzzler.percent_max, 20.0);
        assert_eq!(parsed.guzzler.band_padding, 0.3);
        assert_eq!(parsed.distribution.band_padding, 0.6);
    }

    #[test]
    fn test_json_serialization() {
        let config = StoryConfig::default();
        let json = config.to_json().unwrap();
        let parsed = StoryConfig::from_json(&json).unwrap();
        assert_eq!(config.trend.emissions_domain, parsed.trend.emissions_domain);
    }

    #[test]
    fn test_invalid_padding() {
        let mut config = StoryConfig::default();
        config.distribution.band_padding = 1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_domain() {
        let mut config = StoryConfig::default();
        config.trend.emissions_domain = [700.0, 300.0];
        assert!(matches!(config.validate(), Err(ConfigError::InvalidDomain(_))));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[canvas]\nwidth = 1200.0\n").unwrap();

        let config = StoryConfig::load(&path).unwrap();
        assert_eq!(config.canvas.width, 1200.0);
        assert_eq!(config.canvas.height, 500.0);
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[guzzler]\nband_padding = 2.0\n").unwrap();

        assert!(matches!(
            StoryConfig::load(&path),
            Err(StoryError::InvalidConfig(_))
        ));
    }
}
