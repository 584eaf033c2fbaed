//! Core module - configuration and content hashing

pub mod config;
pub mod hash;

pub use config::Config;
pub use hash::{hash_file, Manifest, ManifestError};
