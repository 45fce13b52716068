//! Plugin capability interface, registry and runner
//!
//! A plugin is declarative metadata (name, description, required tables,
//! queries, expected schema) plus one row handler. Plugins are registered
//! explicitly at startup; there is no hidden global registration state.

mod errors;
mod registry;
mod runner;

pub use errors::{PluginError, PluginResult};
pub use registry::PluginRegistry;
pub use runner::{PluginRunner, RunSummary};

use crate::query::QueryDescriptor;
use crate::row::{RowAccess, RowResult};
use crate::schema::SchemaDescriptor;
use crate::sink::ArtifactSink;

/// Capability interface every SQLite extraction plugin implements.
///
/// Row handling carries no cross-row state: each row is processed
/// independently, so a caller may fan rows out across threads as long as
/// sink emission is serialized on its side.
pub trait SqlitePlugin: Send + Sync {
    /// Unique plugin name.
    fn name(&self) -> &'static str;

    /// Human-readable description.
    fn description(&self) -> &'static str;

    /// Tables that must exist for this plugin to run at all.
    fn required_tables(&self) -> &'static [&'static str];

    /// Queries the execution collaborator runs on this plugin's behalf.
    fn queries(&self) -> &[QueryDescriptor];

    /// Expected table layout for pre-flight compatibility checking.
    fn schema(&self) -> &SchemaDescriptor;

    /// Transforms one result row into zero or more emitted events.
    ///
    /// Implementations must read and validate every required column before
    /// emitting anything, so a failed row leaves the sink untouched.
    fn handle_row(
        &self,
        query: &QueryDescriptor,
        row: &dyn RowAccess,
        sink: &mut dyn ArtifactSink,
    ) -> RowResult<()>;
}
