//! CLI command implementations.

pub mod backend;
pub mod site;
