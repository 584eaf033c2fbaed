//! Per-file validation outcomes and the run log
//!
//! The log is the durable record of a run: one block (or one JSON line) per
//! scanned file, in arrival order. It is truncated at run start, appended to
//! for the duration of the run, and flushed once at the end.

use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::validate::{StructuralCheck, VocabCheck};

/// Everything the run learned about one candidate file.
#[derive(Debug, Clone, Serialize)]
pub struct FileResult {
    pub filename: String,
    /// `None` when the file could not be read or parsed.
    pub structural: Option<StructuralCheck>,
    /// One verdict per vocabulary-restricted column present in the file,
    /// in template order.
    pub vocab: Vec<VocabCheck>,
    pub error: Option<String>,
}

impl FileResult {
    pub fn checked(filename: &str, structural: StructuralCheck, vocab: Vec<VocabCheck>) -> Self {
        Self {
            filename: filename.to_string(),
            structural: Some(structural),
            vocab,
            error: None,
        }
    }

    pub fn failed(filename: &str, error: String) -> Self {
        Self {
            filename: filename.to_string(),
            structural: None,
            vocab: Vec::new(),
            error: Some(error),
        }
    }

    /// True when the file was readable and every check passed.
    pub fn passed(&self) -> bool {
        self.error.is_none()
            && self.structural.as_ref().is_some_and(|s| s.ok)
            && self.vocab.iter().all(|v| v.ok)
    }

    /// Number of failed checks (structural counts as one).
    pub fn failed_checks(&self) -> usize {
        let structural = usize::from(self.structural.as_ref().is_some_and(|s| !s.ok));
        structural + self.vocab.iter().filter(|v| !v.ok).count()
    }
}

/// Log serialization format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Human-facing blocks with ✔/✗ markers.
    Text,
    /// One JSON record per file.
    Jsonl,
}

/// Streams `FileResult`s to the run log in arrival order.
pub struct ReportWriter<W: Write> {
    out: W,
    format: ReportFormat,
}

impl ReportWriter<BufWriter<File>> {
    /// Open (truncating) the log file for a new run.
    pub fn create(path: &Path, format: ReportFormat) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file), format))
    }
}

impl<W: Write> ReportWriter<W> {
    pub fn new(out: W, format: ReportFormat) -> Self {
        Self { out, format }
    }

    pub fn write(&mut self, result: &FileResult) -> io::Result<()> {
        match self.format {
            ReportFormat::Text => render_text(&mut self.out, result),
            ReportFormat::Jsonl => {
                serde_json::to_writer(&mut self.out, result)?;
                writeln!(self.out)
            }
        }
    }

    /// Flush the log. Call once at run end, after the last file.
    pub fn finish(mut self) -> io::Result<()> {
        self.out.flush()
    }
}

/// Render one file's block in the human-facing text format.
pub fn render_text(out: &mut impl Write, result: &FileResult) -> io::Result<()> {
    writeln!(out, "{}", result.filename)?;

    if let Some(error) = &result.error {
        writeln!(out, "✗  error opening file '{}': {}", result.filename, error)?;
        return Ok(());
    }

    if let Some(structural) = &result.structural {
        if structural.ok {
            writeln!(out, "✔  the column names match the template")?;
        } else {
            writeln!(out, "✗  the column names do not match the template")?;
            writeln!(out, "    missing from the file: {}", quoted(&structural.missing))?;
            writeln!(out, "    not in the template: {}", quoted(&structural.extra))?;
        }
    }

    for check in &result.vocab {
        if check.ok {
            writeln!(
                out,
                "✔  all values in the '{}' column correspond to the vocabulary",
                check.column
            )?;
        } else {
            writeln!(
                out,
                "✗  not all values in the '{}' column correspond to the vocabulary: {}",
                check.column,
                quoted(&check.offending)
            )?;
        }
    }

    Ok(())
}

fn quoted<'a, I: IntoIterator<Item = &'a String>>(values: I) -> String {
    let items: Vec<String> = values.into_iter().map(|v| format!("'{}'", v)).collect();
    if items.is_empty() {
        "(none)".to_string()
    } else {
        items.join(", ")
    }
}
