//! Validation module - structural and vocabulary conformance checks

pub mod structural;
pub mod vocabulary;

pub use structural::StructuralCheck;
pub use vocabulary::VocabCheck;

use std::path::Path;

use crate::dataset::{scanner, Table};
use crate::report::FileResult;
use crate::schema::Schema;

/// Run the full per-file pipeline over every candidate file in `dir`,
/// in sorted filename order.
pub fn run_directory(dir: &Path, schema: &Schema) -> std::io::Result<Vec<FileResult>> {
    let filenames = scanner::scan(dir)?;
    Ok(filenames
        .iter()
        .map(|name| validate_file(dir, name, schema))
        .collect())
}

/// Validate one candidate file against the schema.
///
/// A file that cannot be opened or parsed as tabular data is reported as a
/// per-file error; it never aborts the run.
pub fn validate_file(dir: &Path, filename: &str, schema: &Schema) -> FileResult {
    match Table::from_path(&dir.join(filename)) {
        Ok(table) => {
            let structural = structural::check(&table.column_set(), &schema.expected_columns());
            let vocab = vocabulary::check(&table, schema);
            FileResult::checked(filename, structural, vocab)
        }
        Err(e) => FileResult::failed(filename, e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn schema() -> Schema {
        Schema::parse(
            r#"
metadata:
  - column: age
  - column: unit
    vocab: ["cm", "m"]
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_validate_file_reports_checks() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("core.csv"), "age,unit\n100,cm\n").unwrap();

        let result = validate_file(dir.path(), "core.csv", &schema());
        assert!(result.error.is_none());
        assert!(result.structural.as_ref().unwrap().ok);
        assert_eq!(result.vocab.len(), 1);
        assert!(result.vocab[0].ok);
        assert!(result.passed());
    }

    #[test]
    fn test_validate_file_unreadable_is_per_file_error() {
        let dir = tempdir().unwrap();
        let result = validate_file(dir.path(), "missing.csv", &schema());
        assert!(result.error.is_some());
        assert!(result.structural.is_none());
        assert!(!result.passed());
    }

    #[test]
    fn test_bad_file_does_not_disturb_others() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("good.csv"), "age,unit\n100,cm\n").unwrap();
        // Invalid UTF-8 makes this one unparsable.
        fs::write(dir.path().join("bad.csv"), b"age,unit\n\xff\xfe,cm\n").unwrap();

        let results = run_directory(dir.path(), &schema()).unwrap();
        assert_eq!(results.len(), 2);

        let bad = results.iter().find(|r| r.filename == "bad.csv").unwrap();
        let good = results.iter().find(|r| r.filename == "good.csv").unwrap();
        assert!(bad.error.is_some());
        assert!(good.error.is_none());
        assert!(good.passed());
    }
}
