//! Query-execution collaborator interface

use crate::row::RowAccess;

use super::QueryDescriptor;

/// External collaborator that executes declared queries against the source
/// database.
///
/// Row iteration is lazy, pull-based and synchronous; the core never
/// performs I/O itself. Implementations must also expose the live schema
/// text per table for pre-flight compatibility checking.
pub trait QuerySource {
    /// Names of the tables present in the database.
    fn table_names(&self) -> Vec<String>;

    /// The `CREATE TABLE` text for `table`, if the table exists.
    fn table_schema(&self, table: &str) -> Option<String>;

    /// Executes `query` and yields its rows one at a time.
    fn execute<'a>(
        &'a self,
        query: &QueryDescriptor,
    ) -> Box<dyn Iterator<Item = Box<dyn RowAccess>> + 'a>;
}
