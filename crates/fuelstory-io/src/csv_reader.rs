//! CSV file reader with per-cell type inference

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::reader::{IoError, IoResult, TableReader};
use crate::record::{Dataset, Field, Record};

/// CSV file reader
pub struct CsvReader {
    path: PathBuf,
    delimiter: u8,
}

impl CsvReader {
    /// Open a comma-separated file
    pub fn open(path: impl AsRef<Path>) -> IoResult<Self> {
        Self::open_with_options(path, b',')
    }

    /// Open a delimited file with a custom delimiter
    pub fn open_with_options(path: impl AsRef<Path>, delimiter: u8) -> IoResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(IoError::FileNotFound(path.display().to_string()));
        }

        Ok(Self {
            path: path.to_path_buf(),
            delimiter,
        })
    }

    /// Parse a dataset from any reader
    ///
    /// The first row is the header and must name a `year` column.
    pub fn parse<R: Read>(name: &str, input: R, delimiter: u8) -> IoResult<Dataset> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(input);

        let columns: Arc<[String]> = reader
            .headers()
            .map_err(|e| csv_error(&e))?
            .iter()
            .map(|s| s.to_string())
            .collect();

        let mut records = Vec::new();
        for result in reader.records() {
            let row = result.map_err(|e| csv_error(&e))?;
            let line = row.position().map_or(0, |p| p.line());
            let fields: Vec<Field> = row.iter().map(Field::parse).collect();
            records.push(Record::new(columns.clone(), fields, line)?);
        }

        tracing::debug!(
            dataset = name,
            rows = records.len(),
            columns = columns.len(),
            "parsed CSV dataset"
        );

        Ok(Dataset::new(name, columns, records))
    }
}

impl TableReader for CsvReader {
    fn read_dataset(&self, name: &str) -> IoResult<Dataset> {
        let file = File::open(&self.path).map_err(|e| IoError::OpenFailed(e.to_string()))?;
        Self::parse(name, BufReader::new(file), self.delimiter)
    }

    fn path(&self) -> Option<&Path> {
        Some(&self.path)
    }

    fn format_name(&self) -> &'static str {
        "CSV"
    }
}

fn csv_error(err: &csv::Error) -> IoError {
    let line = err.position().map_or(0, |p| p.line());
    IoError::Csv {
        line,
        message: err.to_string(),
    }
}
