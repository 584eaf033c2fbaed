//! Content hashing and the processed-file manifest
//!
//! Uploads are expensive and datasets arrive in batches; the manifest
//! remembers the content digest of every file already uploaded so repeat
//! runs can skip unchanged files. An edited file hashes differently and is
//! uploaded again.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Hex SHA-256 digest of a file's contents.
pub fn hash_file(path: &Path) -> io::Result<String> {
    let mut file = fs::File::open(path)?;
    let mut hasher = Sha256::new();
    io::copy(&mut file, &mut hasher)?;
    Ok(format!("{:x}", hasher.finalize()))
}

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("cannot read manifest: {0}")]
    Io(#[from] io::Error),

    #[error("malformed manifest: {0}")]
    Parse(#[from] serde_yml::Error),
}

/// Filenames already uploaded, keyed to the content digest seen at upload
/// time.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    processed: BTreeMap<String, String>,
}

impl Manifest {
    /// Load the manifest, treating a missing file as empty.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        Ok(serde_yml::from_str(&contents)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), ManifestError> {
        let contents = serde_yml::to_string(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// True only when the stored digest matches the current contents.
    pub fn is_processed(&self, filename: &str, digest: &str) -> bool {
        self.processed.get(filename).is_some_and(|d| d == digest)
    }

    pub fn mark(&mut self, filename: &str, digest: &str) {
        self.processed
            .insert(filename.to_string(), digest.to_string());
    }

    pub fn len(&self) -> usize {
        self.processed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processed.is_empty()
    }
}
