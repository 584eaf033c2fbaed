//! NUT: Neotoma Upload Toolkit
//!
//! Validates tabular paleoecological datasets against a declarative YAML
//! template and stages validated records for upload to the Neotoma database.

pub mod cli;
pub mod core;
pub mod dataset;
pub mod report;
pub mod schema;
pub mod upload;
pub mod validate;
