//! Core data model: environment detection and the versioned record schema.

pub mod env;
pub mod schema;
