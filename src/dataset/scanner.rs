//! Candidate file discovery
//!
//! Enumerates the files a run will validate. No content filtering happens
//! here: non-tabular files are allowed through and surface as per-file
//! errors in later stages.

use std::fs;
use std::io;
use std::path::Path;

/// List candidate dataset files in `dir`, normalized and sorted.
///
/// Names ending in `.csv` are kept as-is; any other extension is stripped,
/// which accommodates files that arrive with a spurious hidden suffix
/// appended by upstream tooling (e.g. `core_a.csv.log`). Subdirectories are
/// skipped. Output is sorted so repeated runs produce identical logs.
pub fn scan(dir: &Path) -> io::Result<Vec<String>> {
    let mut names = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        names.push(normalize(&name));
    }

    names.sort();
    Ok(names)
}

/// Keep the `.csv` extension, strip anything else.
fn normalize(name: &str) -> String {
    let path = Path::new(name);
    match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => name.to_string(),
        Some(_) => path.with_extension("").to_string_lossy().into_owned(),
        None => name.to_string(),
    }
}
