//! fuelstory-io - Tabular input for the fuel-economy narrative
//!
//! This crate turns delimited text into immutable typed records:
//!
//! - **Field**: auto-typed cell value (number, boolean, text, or null)
//! - **Record**: one row, keyed by an integer `year`
//! - **Dataset**: a named, shared, read-only sequence of records
//! - **DatasetBundle**: the four tables the narrative draws from
//!
//! # Design
//!
//! Readers implement the `TableReader` trait. Datasets are loaded once and
//! never mutated; sorted views and groupings are computed values.

pub mod bundle;
pub mod csv_reader;
pub mod reader;
pub mod record;

pub use bundle::*;
pub use csv_reader::CsvReader;
pub use reader::*;
pub use record::*;
