//! Typed records and datasets

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::reader::{IoError, IoResult};

/// Name of the column every record is keyed by
pub const YEAR_COLUMN: &str = "year";

/// An auto-typed cell value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Field {
    Null,
    Number(f64),
    Bool(bool),
    Text(String),
}

impl Field {
    /// Infer a value from raw cell text
    ///
    /// Empty cells are null, `true`/`false` are booleans, anything that
    /// parses as a float (including `NaN` and `Infinity`) is a number, and
    /// everything else is kept as text.
    pub fn parse(cell: &str) -> Self {
        let cell = cell.trim();
        if cell.is_empty() {
            return Field::Null;
        }
        match cell {
            "true" => return Field::Bool(true),
            "false" => return Field::Bool(false),
            _ => {}
        }
        match cell.parse::<f64>() {
            Ok(v) => Field::Number(v),
            Err(_) => Field::Text(cell.to_string()),
        }
    }

    /// Numeric value, if this field holds one
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Field::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Check if the field is null
    pub fn is_null(&self) -> bool {
        matches!(self, Field::Null)
    }
}

impl From<Option<f64>> for Field {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Field::Null, Field::Number)
    }
}

/// One immutable row of a dataset
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    year: i32,
    columns: Arc<[String]>,
    fields: Vec<Field>,
}

impl Record {
    /// Build a record from a column list and its fields
    ///
    /// `line` is only used for error reporting.
    pub fn new(columns: Arc<[String]>, fields: Vec<Field>, line: u64) -> IoResult<Self> {
        if fields.len() != columns.len() {
            return Err(IoError::RowWidth {
                expected: columns.len(),
                actual: fields.len(),
            });
        }

        let year_index = columns
            .iter()
            .position(|c| c == YEAR_COLUMN)
            .ok_or_else(|| IoError::ColumnNotFound(YEAR_COLUMN.to_string()))?;

        let year = match &fields[year_index] {
            Field::Number(v)
                if v.fract() == 0.0 && (i32::MIN as f64..=i32::MAX as f64).contains(v) =>
            {
                *v as i32
            }
            other => {
                return Err(IoError::InvalidYear {
                    line,
                    value: match other {
                        Field::Null => String::new(),
                        Field::Number(v) => v.to_string(),
                        Field::Bool(b) => b.to_string(),
                        Field::Text(s) => s.clone(),
                    },
                })
            }
        };

        Ok(Self {
            year,
            columns,
            fields,
        })
    }

    /// Model year of this record
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Get a field by column name
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.columns
            .iter()
            .position(|c| c == name)
            .map(|i| &self.fields[i])
    }

    /// Numeric value of a column; `None` when missing, null, or non-numeric
    pub fn number(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(Field::as_f64)
    }

    /// Finite numeric value of a column
    pub fn finite(&self, name: &str) -> Option<f64> {
        self.number(name).filter(|v| v.is_finite())
    }

    /// Column names shared with the owning dataset
    pub fn columns(&self) -> &[String] {
        &self.columns
    }
}

/// A named, immutable sequence of records
///
/// Cloning is cheap: records are shared behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Dataset {
    name: String,
    columns: Arc<[String]>,
    records: Arc<[Record]>,
}

impl Dataset {
    /// Create a dataset from already-typed records
    pub fn new(name: impl Into<String>, columns: Arc<[String]>, records: Vec<Record>) -> Self {
        Self {
            name: name.into(),
            columns,
            records: records.into(),
        }
    }

    /// Create a dataset from numeric rows, mostly useful for fixtures
    ///
    /// `columns` must include `year`.
    pub fn from_numeric_rows(
        name: impl Into<String>,
        columns: &[&str],
        rows: Vec<Vec<Option<f64>>>,
    ) -> IoResult<Self> {
        let columns: Arc<[String]> = columns.iter().map(|c| c.to_string()).collect();
        let records = rows
            .into_iter()
            .enumerate()
            .map(|(i, row)| {
                let fields = row.into_iter().map(Field::from).collect();
                Record::new(columns.clone(), fields, i as u64 + 2)
            })
            .collect::<IoResult<Vec<_>>>()?;
        Ok(Self::new(name, columns, records))
    }

    /// Dataset name (usually the file stem)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Column names in file order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Check whether a column exists
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Records in load order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records ordered by year, stable for equal years
    pub fn sorted_by_year(&self) -> Vec<&Record> {
        let mut sorted: Vec<&Record> = self.records.iter().collect();
        sorted.sort_by_key(|r| r.year());
        sorted
    }

    /// Check whether records are already in non-decreasing year order
    pub fn is_sorted_by_year(&self) -> bool {
        self.records.windows(2).all(|w| w[0].year() <= w[1].year())
    }

    /// Smallest and largest year
    pub fn years_extent(&self) -> Option<(i32, i32)> {
        let min = self.records.iter().map(Record::year).min()?;
        let max = self.records.iter().map(Record::year).max()?;
        Some((min, max))
    }

    /// Raw numeric values of a column, one per record
    pub fn column_values(&self, name: &str) -> Vec<Option<f64>> {
        self.records.iter().map(|r| r.number(name)).collect()
    }

    /// Finite values of a column, skipping everything else
    pub fn numbers(&self, name: &str) -> Vec<f64> {
        self.records.iter().filter_map(|r| r.finite(name)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_parse() {
        assert_eq!(Field::parse(""), Field::Null);
        assert_eq!(Field::parse("  "), Field::Null);
        assert_eq!(Field::parse("21.5"), Field::Number(21.5));
        assert_eq!(Field::parse("-3"), Field::Number(-3.0));
        assert_eq!(Field::parse("true"), Field::Bool(true));
        assert_eq!(Field::parse("Ford"), Field::Text("Ford".to_string()));
        assert!(Field::parse("NaN").as_f64().unwrap().is_nan());
        assert_eq!(Field::parse("Infinity").as_f64(), Some(f64::INFINITY));
    }

    #[test]
    fn test_record_lookup() {
        let ds = Dataset::from_numeric_rows(
            "t",
            &["year", "mpg"],
            vec![vec![Some(2001.0), Some(20.0)], vec![Some(2000.0), None]],
        )
        .unwrap();

        let first = &ds.records()[0];
        assert_eq!(first.year(), 2001);
        assert_eq!(first.number("mpg"), Some(20.0));
        assert_eq!(first.number("nope"), None);
        assert_eq!(ds.records()[1].number("mpg"), None);
        assert!(ds.records()[1].get("mpg").unwrap().is_null());
    }

    #[test]
    fn test_invalid_year_rejected() {
        let err = Dataset::from_numeric_rows("t", &["year"], vec![vec![Some(2000.5)]]).unwrap_err();
        assert!(matches!(err, IoError::InvalidYear { line: 2, .. }));

        let err = Dataset::from_numeric_rows("t", &["year"], vec![vec![None]]).unwrap_err();
        assert!(matches!(err, IoError::InvalidYear { .. }));

        let err = Dataset::from_numeric_rows("t", &["mpg"], vec![vec![Some(1.0)]]).unwrap_err();
        assert!(matches!(err, IoError::ColumnNotFound(_)));
    }

    #[test]
    fn test_out_of_range_year_rejected() {
        let err = Dataset::from_numeric_rows("t", &["year"], vec![vec![Some(3.0e9)]]).unwrap_err();
        assert!(matches!(err, IoError::InvalidYear { line: 2, ref value } if value == "3000000000"));

        let err = Dataset::from_numeric_rows("t", &["year"], vec![vec![Some(-3.0e9)]]).unwrap_err();
        assert!(matches!(err, IoError::InvalidYear { .. }));

        let err =
            Dataset::from_numeric_rows("t", &["year"], vec![vec![Some(f64::INFINITY)]]).unwrap_err();
        assert!(matches!(err, IoError::InvalidYear { .. }));

        let ds = Dataset::from_numeric_rows("t", &["year"], vec![vec![Some(i32::MAX as f64)]]).unwrap();
        assert_eq!(ds.records()[0].year(), i32::MAX);
    }

    #[test]
    fn test_sorted_view_does_not_mutate() {
        let ds = Dataset::from_numeric_rows(
            "t",
            &["year", "v"],
            vec![
                vec![Some(2002.0), Some(1.0)],
                vec![Some(2000.0), Some(2.0)],
                vec![Some(2001.0), Some(3.0)],
            ],
        )
        .unwrap();

        let years: Vec<i32> = ds.sorted_by_year().iter().map(|r| r.year()).collect();
        assert_eq!(years, vec![2000, 2001, 2002]);
        assert_eq!(ds.records()[0].year(), 2002);
        assert!(!ds.is_sorted_by_year());
        assert_eq!(ds.years_extent(), Some((2000, 2002)));
    }

    #[test]
    fn test_numbers_skip_non_finite() {
        let ds = Dataset::from_numeric_rows(
            "t",
            &["year", "v"],
            vec![
                vec![Some(2000.0), Some(1.0)],
                vec![Some(2001.0), Some(f64::NAN)],
                vec![Some(2002.0), None],
            ],
        )
        .unwrap();
        assert_eq!(ds.numbers("v"), vec![1.0]);
        assert_eq!(ds.column_values("v").len(), 3);
    }
}
