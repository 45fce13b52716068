//! Built-in extraction plugins

mod mac_notes;

pub use mac_notes::MacNotesPlugin;

use crate::plugin::PluginRegistry;

/// Builds a registry holding every built-in plugin.
pub fn builtin_registry() -> PluginRegistry {
    let mut registry = PluginRegistry::new();
    registry
        .register(Box::new(MacNotesPlugin::new()))
        .expect("built-in plugin names are unique");
    registry
}
