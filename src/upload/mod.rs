//! Upload sink boundary
//!
//! The database layer sits behind a trait: the toolkit hands it validated
//! rows and receives generated identifiers back. A rejected row falls back
//! to a placeholder ("invalid") row so identifier sequences stay aligned
//! with input rows, and a batch is never aborted part-way.

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use crate::dataset::Table;

/// One dataset row as (column, value) pairs in file order.
pub type Row = Vec<(String, String)>;

/// Identifier generated by the sink for one inserted row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SampleId(pub i64);

#[derive(Debug, Error)]
pub enum SinkError {
    /// The sink refused this row; the batch continues with a placeholder.
    #[error("row rejected: {0}")]
    Rejected(String),

    /// The sink itself is gone; the batch cannot continue.
    #[error("sink unavailable: {0}")]
    Unavailable(String),
}

/// Where validated rows go. Implementations return the generated
/// identifier for each inserted row.
pub trait SampleSink {
    fn insert(&mut self, filename: &str, row: &Row) -> Result<SampleId, SinkError>;

    /// The sentinel row recorded in place of a rejected data row.
    fn insert_placeholder(&mut self, filename: &str, date: NaiveDate)
        -> Result<SampleId, SinkError>;
}

/// Outcome of inserting one file's rows.
#[derive(Debug)]
pub struct BatchOutcome {
    /// One identifier per input row, placeholders included.
    pub samples: Vec<SampleId>,
    /// False when any row fell back to the placeholder.
    pub valid: bool,
}

/// Insert every row of `table` into the sink.
///
/// A rejected row is replaced by a placeholder and the outcome is marked
/// invalid; only an unavailable sink aborts the batch.
pub fn insert_table(
    sink: &mut dyn SampleSink,
    filename: &str,
    table: &Table,
) -> Result<BatchOutcome, SinkError> {
    let mut outcome = BatchOutcome {
        samples: Vec::with_capacity(table.len()),
        valid: true,
    };
    let today = chrono::Local::now().date_naive();

    for row in table.rows() {
        match sink.insert(filename, &row) {
            Ok(id) => outcome.samples.push(id),
            Err(SinkError::Rejected(_)) => {
                outcome.samples.push(sink.insert_placeholder(filename, today)?);
                outcome.valid = false;
            }
            Err(e) => return Err(e),
        }
    }

    debug_assert_eq!(outcome.samples.len(), table.len());
    Ok(outcome)
}

/// In-memory sink for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemorySink {
    next_id: i64,
    pub rows: Vec<(String, Row)>,
    pub placeholders: usize,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    fn next(&mut self) -> SampleId {
        self.next_id += 1;
        SampleId(self.next_id)
    }
}

impl SampleSink for MemorySink {
    fn insert(&mut self, filename: &str, row: &Row) -> Result<SampleId, SinkError> {
        self.rows.push((filename.to_string(), row.clone()));
        Ok(self.next())
    }

    fn insert_placeholder(
        &mut self,
        _filename: &str,
        _date: NaiveDate,
    ) -> Result<SampleId, SinkError> {
        self.placeholders += 1;
        Ok(self.next())
    }
}
