//! The four tables behind the narrative

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::reader::{open_file, IoResult};
use crate::record::Dataset;

/// File names of the four source tables, relative to a data directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BundleFiles {
    /// Per-vehicle test results (`year`, `combMPG`, ...)
    pub vehicles: String,
    /// Yearly guzzler share (`guzzler_percentage`, `yoy_change`)
    pub guzzler_trends: String,
    /// Yearly MPG averages by cylinder class
    pub cylinder_trends: String,
    /// Yearly CO2 averages by cylinder class
    pub co2_trends: String,
}

impl Default for BundleFiles {
    fn default() -> Self {
        Self {
            vehicles: "full_vehicle_data.csv".to_string(),
            guzzler_trends: "guzzler_trends.csv".to_string(),
            cylinder_trends: "cylinder_trends.csv".to_string(),
            co2_trends: "co2_trends.csv".to_string(),
        }
    }
}

/// Read-only set of datasets shared by every scene
#[derive(Debug, Clone)]
pub struct DatasetBundle {
    pub vehicles: Dataset,
    pub guzzler_trends: Dataset,
    pub cylinder_trends: Dataset,
    pub co2_trends: Dataset,
}

impl DatasetBundle {
    /// Load all four tables from a directory
    pub fn load_dir(dir: impl AsRef<Path>, files: &BundleFiles) -> IoResult<Self> {
        let dir = dir.as_ref();
        let load = |file: &str| -> IoResult<Dataset> {
            let path = dir.join(file);
            let name = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or(file)
                .to_string();
            let dataset = open_file(&path)?.read_dataset(&name)?;
            tracing::info!(dataset = %name, rows = dataset.len(), "loaded dataset");
            Ok(dataset)
        };

        Ok(Self {
            vehicles: load(&files.vehicles)?,
            guzzler_trends: load(&files.guzzler_trends)?,
            cylinder_trends: load(&files.cylinder_trends)?,
            co2_trends: load(&files.co2_trends)?,
        })
    }

    /// Total number of records across all tables
    pub fn total_records(&self) -> usize {
        self.vehicles.len()
            + self.guzzler_trends.len()
            + self.cylinder_trends.len()
            + self.co2_trends.len()
    }
}
