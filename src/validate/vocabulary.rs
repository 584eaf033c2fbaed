//! Controlled-vocabulary conformance
//!
//! For each template column with a restricted vocabulary, every observed
//! value in that column must belong to the allowed set. Each verdict is a
//! pure fold over that column's values alone; no state carries from one
//! column to the next, so a column with nothing to check can never inherit
//! a neighbor's verdict.

use serde::Serialize;
use std::collections::BTreeSet;

use crate::dataset::Table;
use crate::schema::Schema;

/// Verdict for one vocabulary-restricted column.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct VocabCheck {
    pub column: String,
    pub ok: bool,
    /// Observed values outside the vocabulary, sorted and deduplicated.
    pub offending: BTreeSet<String>,
}

/// Check every vocabulary-restricted template column present in the table,
/// in template order.
///
/// Columns absent from the table produce no verdict; their absence is
/// already reported by the structural check. Empty cells are tested like
/// any other value: they pass only if the vocabulary itself contains `""`.
pub fn check(table: &Table, schema: &Schema) -> Vec<VocabCheck> {
    let mut checks = Vec::new();

    for (column, vocabulary) in schema.vocab_columns() {
        let Some(values) = table.column_values(column) else {
            continue;
        };

        let offending: BTreeSet<String> = values
            .iter()
            .copied()
            .filter(|value| !vocabulary.contains(*value))
            .map(str::to_string)
            .collect();

        checks.push(VocabCheck {
            column: column.to_string(),
            ok: offending.is_empty(),
            offending,
        });
    }

    checks
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn table(content: &str) -> Table {
        let dir = tempdir().unwrap();
        let path = dir.path().join("core.csv");
        fs::write(&path, content).unwrap();
        Table::from_path(&path).unwrap()
    }

    fn schema(yaml: &str) -> Schema {
        Schema::parse(yaml).unwrap()
    }

    #[test]
    fn test_all_values_in_vocabulary_pass() {
        let table = table("unit\ncm\nm\ncm\n");
        let schema = schema("metadata:\n  - column: unit\n    vocab: [\"cm\", \"m\"]\n");

        let checks = check(&table, &schema);
        assert_eq!(checks.len(), 1);
        assert!(checks[0].ok);
        assert!(checks[0].offending.is_empty());
    }

    #[test]
    fn test_offending_value_fails_and_is_reported() {
        let table = table("unit\ncm\nm\ncm\nin\n");
        let schema = schema("metadata:\n  - column: unit\n    vocab: [\"cm\", \"m\"]\n");

        let checks = check(&table, &schema);
        assert!(!checks[0].ok);
        let offending: Vec<_> = checks[0].offending.iter().cloned().collect();
        assert_eq!(offending, vec!["in".to_string()]);
    }

    #[test]
    fn test_empty_cell_is_not_exempt() {
        let table = table("unit\ncm\n\n");
        let schema = schema("metadata:\n  - column: unit\n    vocab: [\"cm\", \"m\"]\n");

        let checks = check(&table, &schema);
        assert!(!checks[0].ok);
        assert!(checks[0].offending.contains(""));
    }

    #[test]
    fn test_empty_cell_passes_when_vocabulary_allows_it() {
        let table = table("unit\ncm\n\n");
        let schema = schema("metadata:\n  - column: unit\n    vocab: [\"cm\", \"m\", \"\"]\n");

        let checks = check(&table, &schema);
        assert!(checks[0].ok);
    }

    #[test]
    fn test_absent_column_produces_no_verdict() {
        let table = table("age\n100\n");
        let schema = schema("metadata:\n  - column: unit\n    vocab: [\"cm\"]\n");

        let checks = check(&table, &schema);
        assert!(checks.is_empty());
    }

    #[test]
    fn test_verdicts_do_not_leak_across_columns() {
        // A failing first column followed by an absent second column must
        // yield exactly one verdict, for the first column only.
        let table = table("unit\nin\n");
        let schema = schema(
            "metadata:\n  - column: unit\n    vocab: [\"cm\"]\n  - column: horizon\n    vocab: [\"A\", \"B\"]\n",
        );

        let checks = check(&table, &schema);
        assert_eq!(checks.len(), 1);
        assert_eq!(checks[0].column, "unit");
        assert!(!checks[0].ok);
    }

    #[test]
    fn test_column_with_no_rows_passes_vacuously() {
        let table = table("unit\n");
        let schema = schema("metadata:\n  - column: unit\n    vocab: [\"cm\"]\n");

        let checks = check(&table, &schema);
        assert_eq!(checks.len(), 1);
        assert!(checks[0].ok);
    }

    #[test]
    fn test_checks_follow_template_order() {
        let table = table("unit,horizon\ncm,A\n");
        let schema = schema(
            "metadata:\n  - column: unit\n    vocab: [\"cm\"]\n  - column: horizon\n    vocab: [\"A\"]\n",
        );

        let columns: Vec<_> = check(&table, &schema)
            .into_iter()
            .map(|c| c.column)
            .collect();
        assert_eq!(columns, vec!["unit".to_string(), "horizon".to_string()]);
    }
}
