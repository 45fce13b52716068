//! Shared fixtures: an in-memory `QuerySource` fed with JSON rows

use std::collections::BTreeMap;

use macsift::plugin::SqlitePlugin;
use macsift::query::{QueryDescriptor, QuerySource};
use macsift::row::{JsonRow, RowAccess};
use serde_json::Value;

/// Query source backed by literal schema text and JSON rows.
pub struct FixtureSource {
    schemas: BTreeMap<String, String>,
    rows: Vec<Value>,
}

impl FixtureSource {
    pub fn new() -> Self {
        Self {
            schemas: BTreeMap::new(),
            rows: Vec::new(),
        }
    }

    /// Declares a table with the given `CREATE TABLE` text.
    pub fn with_table(mut self, name: &str, create_sql: &str) -> Self {
        self.schemas.insert(name.to_string(), create_sql.to_string());
        self
    }

    /// Appends a result row.
    pub fn with_row(mut self, row: Value) -> Self {
        self.rows.push(row);
        self
    }

    /// A source whose tables exactly match what `plugin` expects.
    pub fn compatible_with(plugin: &dyn SqlitePlugin) -> Self {
        let mut source = Self::new();
        for table in plugin.schema().tables() {
            if let Some(expected) = plugin.schema().expected(table) {
                source = source.with_table(table, expected);
            }
        }
        source
    }
}

impl QuerySource for FixtureSource {
    fn table_names(&self) -> Vec<String> {
        self.schemas.keys().cloned().collect()
    }

    fn table_schema(&self, table: &str) -> Option<String> {
        self.schemas.get(table).cloned()
    }

    fn execute<'a>(
        &'a self,
        _query: &QueryDescriptor,
    ) -> Box<dyn Iterator<Item = Box<dyn RowAccess>> + 'a> {
        Box::new(
            self.rows
                .iter()
                .cloned()
                .map(|row| Box::new(JsonRow::new(row)) as Box<dyn RowAccess>),
        )
    }
}
