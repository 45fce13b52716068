//! Expected table layouts

use std::collections::BTreeMap;

/// Read-only mapping from table name to the expected `CREATE TABLE` text.
///
/// Loaded once per plugin and never mutated; safe to share across
/// concurrent row processing without locking.
#[derive(Debug, Clone, Default)]
pub struct SchemaDescriptor {
    tables: BTreeMap<&'static str, &'static str>,
}

impl SchemaDescriptor {
    /// Builds a descriptor from `(table, create_table_sql)` pairs.
    pub fn new(tables: &[(&'static str, &'static str)]) -> Self {
        Self {
            tables: tables.iter().copied().collect(),
        }
    }

    /// Returns the expected schema text for `table`.
    pub fn expected(&self, table: &str) -> Option<&'static str> {
        self.tables.get(table).copied()
    }

    /// Iterates the declared table names in deterministic order.
    pub fn tables(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.tables.keys().copied()
    }

    /// Number of declared tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Returns true when no tables are declared.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
