//! Column-set conformance
//!
//! Strict set equality between observed and expected column names. Both
//! omissions and unexpected additions are defects worth flagging to the
//! data submitter, so a subset match is not enough.

use serde::Serialize;
use std::collections::BTreeSet;

/// Outcome of comparing a file's observed columns against the template.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StructuralCheck {
    pub ok: bool,
    /// Template columns the file lacks, sorted.
    pub missing: BTreeSet<String>,
    /// File columns the template does not name, sorted.
    pub extra: BTreeSet<String>,
}

/// Pure function of the two column sets.
pub fn check(observed: &BTreeSet<String>, expected: &BTreeSet<String>) -> StructuralCheck {
    let missing: BTreeSet<String> = expected.difference(observed).cloned().collect();
    let extra: BTreeSet<String> = observed.difference(expected).cloned().collect();

    StructuralCheck {
        ok: missing.is_empty() && extra.is_empty(),
        missing,
        extra,
    }
}
