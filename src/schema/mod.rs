//! Schema module - the declarative template a dataset must conform to

pub mod template;

pub use template::{ColumnSpec, Schema, TemplateError};
