//! Template loading - parses the declarative column/vocabulary specification
//!
//! A template is a YAML document of the form:
//!
//! ```yaml
//! metadata:
//!   - column: depth
//!     vocab: null
//!   - column: unit
//!     vocab: ["cm", "m"]
//! ```
//!
//! Entries may carry other fields (descriptions, database mappings); only
//! `column` and `vocab` matter here and the rest are ignored.

use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// One expected column, with an optional controlled vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    pub name: String,
    /// `None` means the column accepts any value.
    pub vocabulary: Option<BTreeSet<String>>,
}

/// The ordered set of columns a dataset file must carry.
#[derive(Debug, Clone)]
pub struct Schema {
    columns: Vec<ColumnSpec>,
}

/// Errors raised while loading a template. All of these are fatal to a run:
/// no dataset can be validated without a schema.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("cannot read template '{path}'")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed template: {0}")]
    Parse(#[from] serde_yml::Error),

    #[error("template contains an entry with an empty column name")]
    EmptyColumnName,

    #[error("template lists column '{0}' more than once")]
    DuplicateColumn(String),
}

/// Raw document shape. Missing `metadata` or an entry without `column`
/// surfaces as a serde error.
#[derive(Debug, Deserialize)]
struct TemplateDoc {
    metadata: Vec<ColumnEntry>,
}

#[derive(Debug, Deserialize)]
struct ColumnEntry {
    column: String,
    #[serde(default)]
    vocab: Option<Vec<String>>,
}

impl Schema {
    /// Load a template file from disk.
    pub fn from_path(path: &Path) -> Result<Self, TemplateError> {
        let content = std::fs::read_to_string(path).map_err(|source| TemplateError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parse a template document.
    pub fn parse(content: &str) -> Result<Self, TemplateError> {
        let doc: TemplateDoc = serde_yml::from_str(content)?;

        let mut seen = BTreeSet::new();
        let mut columns = Vec::with_capacity(doc.metadata.len());
        for entry in doc.metadata {
            if entry.column.is_empty() {
                return Err(TemplateError::EmptyColumnName);
            }
            if !seen.insert(entry.column.clone()) {
                return Err(TemplateError::DuplicateColumn(entry.column));
            }
            columns.push(ColumnSpec {
                name: entry.column,
                vocabulary: entry.vocab.map(|v| v.into_iter().collect()),
            });
        }

        Ok(Self { columns })
    }

    /// Columns in template order.
    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    /// The column names a conforming file must carry, as a sorted set.
    pub fn expected_columns(&self) -> BTreeSet<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    /// Columns with a restricted vocabulary, in template order.
    pub fn vocab_columns(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.columns
            .iter()
            .filter_map(|c| c.vocabulary.as_ref().map(|v| (c.name.as_str(), v)))
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
