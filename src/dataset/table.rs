//! Tabular file loading

use csv::StringRecord;
use std::collections::BTreeSet;
use std::path::Path;

/// A parsed delimited file: header row plus data records.
///
/// Built per file, used for that file's validation pass, then discarded.
#[derive(Debug)]
pub struct Table {
    headers: Vec<String>,
    records: Vec<StringRecord>,
}

impl Table {
    /// Read a comma-separated file with a header row.
    ///
    /// The reader runs in flexible mode: short rows are accepted, and cells
    /// absent from a short row read back as empty strings so every row
    /// contributes a value to every column.
    pub fn from_path(path: &Path) -> Result<Self, csv::Error> {
        let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
        let headers = reader.headers()?.iter().map(str::to_string).collect();

        let mut records = Vec::new();
        for record in reader.records() {
            records.push(record?);
        }

        Ok(Self { headers, records })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Observed column names as a sorted set. Duplicate headers collapse.
    pub fn column_set(&self) -> BTreeSet<String> {
        self.headers.iter().cloned().collect()
    }

    /// Every cell of the named column in row order, or `None` when the file
    /// has no such column. Missing trailing cells surface as `""`.
    pub fn column_values(&self, name: &str) -> Option<Vec<&str>> {
        let idx = self.headers.iter().position(|h| h == name)?;
        Some(
            self.records
                .iter()
                .map(|record| record.get(idx).unwrap_or(""))
                .collect(),
        )
    }

    /// Rows as (column, value) pairs in file order, ready for the sink.
    pub fn rows(&self) -> impl Iterator<Item = Vec<(String, String)>> + '_ {
        self.records.iter().map(|record| {
            self.headers
                .iter()
                .enumerate()
                .map(|(idx, header)| {
                    (header.clone(), record.get(idx).unwrap_or("").to_string())
                })
                .collect()
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
