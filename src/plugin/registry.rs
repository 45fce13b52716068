//! Explicit startup-time plugin registry

use std::collections::BTreeMap;

use super::{PluginError, PluginResult, SqlitePlugin};

/// Maps plugin names to their implementations.
///
/// Built once at startup by the host; read-only afterwards.
#[derive(Default)]
pub struct PluginRegistry {
    plugins: BTreeMap<&'static str, Box<dyn SqlitePlugin>>,
}

impl PluginRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a plugin under its own name.
    pub fn register(&mut self, plugin: Box<dyn SqlitePlugin>) -> PluginResult<()> {
        let name = plugin.name();
        if self.plugins.contains_key(name) {
            return Err(PluginError::DuplicateName(name.to_string()));
        }
        self.plugins.insert(name, plugin);
        Ok(())
    }

    /// Looks a plugin up by name.
    pub fn get(&self, name: &str) -> Option<&dyn SqlitePlugin> {
        self.plugins.get(name).map(Box::as_ref)
    }

    /// Registered names in deterministic order.
    pub fn names(&self) -> Vec<&'static str> {
        self.plugins.keys().copied().collect()
    }

    /// Iterates the registered plugins in name order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn SqlitePlugin> {
        self.plugins.values().map(Box::as_ref)
    }

    /// Number of registered plugins.
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Returns true when no plugin is registered.
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}
