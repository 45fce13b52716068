//! macsift - deterministic forensic artifact extraction for macOS Notes
//!
//! The core is a single SQLite plugin inside a larger artifact-extraction
//! framework. Database access, query execution, plugin discovery and record
//! persistence are external collaborators reached through the traits in
//! `query`, `row` and `sink`.

pub mod artifact;
pub mod observability;
pub mod plugin;
pub mod plugins;
pub mod query;
pub mod row;
pub mod sanitize;
pub mod schema;
pub mod sink;
pub mod time;
