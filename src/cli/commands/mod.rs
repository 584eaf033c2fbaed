//! Command implementations

pub mod completions;
pub mod template;
pub mod upload;
pub mod validate;
