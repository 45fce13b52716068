//! Plugin identity and registry contract tests

use macsift::plugin::{PluginError, PluginRegistry, SqlitePlugin};
use macsift::plugins::{builtin_registry, MacNotesPlugin};
use macsift::schema::{SchemaValidator, SchemaVerdict};

// =============================================================================
// Identity Metadata
// =============================================================================

/// The host framework consumes these fields verbatim.
#[test]
fn test_plugin_identity_metadata() {
    let plugin = MacNotesPlugin::new();

    assert_eq!(plugin.name(), "mac_notes");
    assert_eq!(plugin.description(), "Parser for Mac Notes");
    assert_eq!(plugin.required_tables(), &["ZNOTE", "ZNOTEBODY"]);
}

/// The declared query joins the note body to its note on primary key and
/// aliases every column the row handler reads.
#[test]
fn test_declared_query_contract() {
    let plugin = MacNotesPlugin::new();
    let queries = plugin.queries();

    assert_eq!(queries.len(), 1);
    let sql = queries[0].sql;
    assert!(sql.contains("FROM ZNOTEBODY nb, ZNOTE n"));
    assert!(sql.contains("nb.Z_PK = n.Z_PK"));
    for alias in ["zhtmlstring", "timestamp", "last_modified_time", "title"] {
        assert!(sql.contains(&format!("AS {}", alias)), "missing alias {}", alias);
    }
}

/// The schema descriptor carries the full NotesV7 layout, not just the
/// joined tables.
#[test]
fn test_schema_descriptor_covers_notes_v7() {
    let plugin = MacNotesPlugin::new();
    let tables: Vec<_> = plugin.schema().tables().collect();

    assert_eq!(
        tables,
        vec![
            "ZACCOUNT",
            "ZATTACHMENT",
            "ZFOLDER",
            "ZNOTE",
            "ZNOTEBODY",
            "ZOFFLINEACTION",
            "Z_METADATA",
            "Z_MODELCACHE",
            "Z_PRIMARYKEY",
        ]
    );
}

/// The descriptor text is self-compatible under the validator's
/// normalization.
#[test]
fn test_expected_schema_is_self_compatible() {
    let plugin = MacNotesPlugin::new();
    for table in plugin.schema().tables() {
        let expected = plugin.schema().expected(table).unwrap();
        assert_eq!(
            SchemaValidator::verdict(expected, Some(expected)),
            SchemaVerdict::Compatible,
            "table {}",
            table
        );
    }
}

// =============================================================================
// Registry
// =============================================================================

#[test]
fn test_builtin_registry_contains_mac_notes() {
    let registry = builtin_registry();

    assert_eq!(registry.len(), 1);
    assert_eq!(registry.names(), vec!["mac_notes"]);

    let plugin = registry.get("mac_notes").unwrap();
    assert_eq!(plugin.description(), "Parser for Mac Notes");
}

#[test]
fn test_duplicate_registration_rejected() {
    let mut registry = PluginRegistry::new();
    registry.register(Box::new(MacNotesPlugin::new())).unwrap();

    let result = registry.register(Box::new(MacNotesPlugin::new()));
    assert_eq!(result.unwrap_err(), PluginError::DuplicateName("mac_notes".to_string()));
}

#[test]
fn test_unknown_plugin_lookup_is_none() {
    let registry = builtin_registry();
    assert!(registry.get("windows_prefetch").is_none());
}
