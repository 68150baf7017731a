//! Test fixture utilities

use std::path::Path;

use fuelstory_io::{BundleFiles, DatasetBundle};

pub const VEHICLES_CSV: &str = "\
year,make,combMPG
1985,Ford,18
1984,Ford,17
1984,Honda,26
1984,Chevrolet,15
1985,Honda,28
1985,Ferrari,9
1986,Toyota,30
1986,Ford,
1986,Chevrolet,20
";

pub const CYLINDER_CSV: &str = "\
year,avg_comb_mpg_overall,avg_mpg_4cyl,avg_mpg_6cyl,avg_mpg_8cyl
1984,19.5,23.1,17.9,14.2
1985,20.0,23.9,18.2,14.6
1986,20.6,24.4,18.8,NA
";

pub const CO2_CSV: &str = "\
year,avg_co2_gpm_overall,avg_co2_4cyl,avg_co2_6cyl,avg_co2_8cyl
1984,560,420,580,650
1985,540,410,570,630
1986,520,400,560,610
";

pub const GUZZLER_CSV: &str = "\
year,guzzler_percentage,yoy_change
1984,4.2,
1985,5.1,0.9
1986,3.8,-1.3
";

/// Write the four standard tables into `dir`
pub fn write_bundle(dir: &Path) {
    let files = BundleFiles::default();
    std::fs::write(dir.join(&files.vehicles), VEHICLES_CSV).unwrap();
    std::fs::write(dir.join(&files.cylinder_trends), CYLINDER_CSV).unwrap();
    std::fs::write(dir.join(&files.co2_trends), CO2_CSV).unwrap();
    std::fs::write(dir.join(&files.guzzler_trends), GUZZLER_CSV).unwrap();
}

/// Load the standard tables through the CSV reader
pub fn load_bundle() -> DatasetBundle {
    let dir = tempfile::tempdir().unwrap();
    write_bundle(dir.path());
    DatasetBundle::load_dir(dir.path(), &BundleFiles::default()).unwrap()
}
