//! Observability for the extraction core
//!
//! Structured JSON logging only:
//!
//! - one log line = one event
//! - deterministic key ordering
//! - synchronous, no buffering, no background threads
//! - read-only: logging never influences extraction results
//!
//! Used for schema-divergence warnings and skipped-row reports; successful
//! row processing is silent.

mod logger;

pub use logger::{Logger, Severity};
