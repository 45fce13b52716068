//! macOS Notes plugin
//!
//! Extracts note contents and their creation/modification instants from a
//! `NotesV7.storedata` database: one `ArtifactRecord` per row of the
//! note/note-body join, one CREATION event per record, and one
//! LAST_MODIFIED event when the edit timestamp is present. A stored zero
//! timestamp is the Cocoa reference instant, not absence; only a null
//! column is absence.

use std::sync::Arc;

use crate::artifact::{ArtifactRecord, EventKind, TimestampedEvent};
use crate::plugin::SqlitePlugin;
use crate::query::QueryDescriptor;
use crate::row::{optional_real_column, optional_text_column, real_column, text_column, RowAccess, RowResult};
use crate::sanitize::sanitize_markup;
use crate::schema::SchemaDescriptor;
use crate::sink::ArtifactSink;
use crate::time::cocoa_timestamp;

const ZHTMLSTRING_QUERY: QueryDescriptor = QueryDescriptor::new(
    "zhtmlstring",
    "SELECT nb.ZHTMLSTRING AS zhtmlstring, \
     n.ZDATECREATED AS timestamp, \
     n.ZDATEEDITED AS last_modified_time, n.ZTITLE AS title \
     FROM ZNOTEBODY nb, ZNOTE n \
     WHERE nb.Z_PK = n.Z_PK",
);

const REQUIRED_TABLES: &[&str] = &["ZNOTE", "ZNOTEBODY"];

/// Expected NotesV7 table layout, used for pre-flight compatibility checks.
const NOTES_V7_TABLES: &[(&str, &str)] = &[
    (
        "ZACCOUNT",
        concat!(
            "CREATE TABLE ZACCOUNT ( Z_PK INTEGER PRIMARY KEY, Z_ENT INTEGER, ",
            "Z_OPT INTEGER, ZALLOWINSECUREAUTHENTICATION INTEGER, ",
            "ZDIDCHOOSETOMIGRATE INTEGER, ZENABLED INTEGER, ZROOTFOLDER ",
            "INTEGER, Z6_ROOTFOLDER INTEGER, ZTRASHFOLDER INTEGER, ",
            "ZGMAILCAPABILITIESSUPPORT INTEGER, ZPORT INTEGER, ",
            "ZSECURITYLAYERTYPE INTEGER, ZMIGRATIONOFFERED INTEGER, ",
            "ZACCOUNTDESCRIPTION VARCHAR, ZEMAILADDRESS VARCHAR, ZFULLNAME ",
            "VARCHAR, ZPARENTACACCOUNTIDENTIFIER VARCHAR, ZUSERNAME VARCHAR, ",
            "ZFOLDERHIERARCHYSYNCSTATE VARCHAR, ZAUTHENTICATION VARCHAR, ",
            "ZHOSTNAME VARCHAR, ZSERVERPATHPREFIX VARCHAR, ZEXTERNALURL BLOB, ",
            "ZINTERNALURL BLOB, ZLASTUSEDAUTODISCOVERURL BLOB, ",
            "ZTLSCERTIFICATE BLOB )"
        ),
    ),
    (
        "ZATTACHMENT",
        concat!(
            "CREATE TABLE ZATTACHMENT ( Z_PK INTEGER PRIMARY KEY, Z_ENT ",
            "INTEGER, Z_OPT INTEGER, ZNOTE INTEGER, Z10_NOTE INTEGER, ",
            "ZCONTENTID VARCHAR, ZFILEURL BLOB )"
        ),
    ),
    (
        "ZFOLDER",
        concat!(
            "CREATE TABLE ZFOLDER ( Z_PK INTEGER PRIMARY KEY, Z_ENT INTEGER, ",
            "Z_OPT INTEGER, ZACCOUNT INTEGER, Z1_ACCOUNT INTEGER, ZPARENT ",
            "INTEGER, Z6_PARENT INTEGER, ZISDISTINGUISHED INTEGER, ",
            "ZALLEGEDHIGHESTMODIFICATIONSEQUENCE INTEGER, ",
            "ZCOMPUTEDHIGHESTMODIFICATIONSEQUENCE INTEGER, ZUIDNEXT INTEGER, ",
            "ZUIDVALIDITY INTEGER, ZTRASHACCOUNT INTEGER, Z1_TRASHACCOUNT ",
            "INTEGER, ZNAME VARCHAR, ZCHANGEKEY VARCHAR, ZFOLDERID VARCHAR, ",
            "ZSYNCSTATE VARCHAR, ZSERVERNAME VARCHAR )"
        ),
    ),
    (
        "ZNOTE",
        concat!(
            "CREATE TABLE ZNOTE ( Z_PK INTEGER PRIMARY KEY, Z_ENT INTEGER, ",
            "Z_OPT INTEGER, ZBODY INTEGER, ZFOLDER INTEGER, Z6_FOLDER ",
            "INTEGER, ZMIMEDATASIZE INTEGER, ZDATECREATED TIMESTAMP, ",
            "ZDATEEDITED TIMESTAMP, ZREMOTEID VARCHAR, ZTITLE VARCHAR, ",
            "ZCHANGEKEY VARCHAR, ZUNIVERSALLYUNIQUEID BLOB )"
        ),
    ),
    (
        "ZNOTEBODY",
        concat!(
            "CREATE TABLE ZNOTEBODY ( Z_PK INTEGER PRIMARY KEY, Z_ENT ",
            "INTEGER, Z_OPT INTEGER, ZNOTE INTEGER, Z10_NOTE INTEGER, ",
            "ZHTMLSTRING VARCHAR )"
        ),
    ),
    (
        "ZOFFLINEACTION",
        concat!(
            "CREATE TABLE ZOFFLINEACTION ( Z_PK INTEGER PRIMARY KEY, Z_ENT ",
            "INTEGER, Z_OPT INTEGER, ZSEQUENCENUMBER INTEGER, ZACCOUNT ",
            "INTEGER, Z1_ACCOUNT INTEGER, ZFOLDER INTEGER, Z6_FOLDER INTEGER, ",
            "ZPARENT INTEGER, Z6_PARENT INTEGER, ZORIGINALPARENT INTEGER, ",
            "Z6_ORIGINALPARENT INTEGER, ZFOLDER1 INTEGER, Z6_FOLDER1 INTEGER, ",
            "ZNOTE INTEGER, Z10_NOTE INTEGER, ZORIGINALFOLDER INTEGER, ",
            "Z6_ORIGINALFOLDER INTEGER )"
        ),
    ),
    (
        "Z_METADATA",
        concat!(
            "CREATE TABLE Z_METADATA (Z_VERSION INTEGER PRIMARY KEY, Z_UUID ",
            "VARCHAR(255), Z_PLIST BLOB)"
        ),
    ),
    ("Z_MODELCACHE", "CREATE TABLE Z_MODELCACHE (Z_CONTENT BLOB)"),
    (
        "Z_PRIMARYKEY",
        concat!(
            "CREATE TABLE Z_PRIMARYKEY (Z_ENT INTEGER PRIMARY KEY, Z_NAME ",
            "VARCHAR, Z_SUPER INTEGER, Z_MAX INTEGER)"
        ),
    ),
];

/// Extraction plugin for macOS Notes databases.
pub struct MacNotesPlugin {
    schema: SchemaDescriptor,
    queries: [QueryDescriptor; 1],
}

impl MacNotesPlugin {
    /// Creates the plugin with its declared query and expected schema.
    pub fn new() -> Self {
        Self {
            schema: SchemaDescriptor::new(NOTES_V7_TABLES),
            queries: [ZHTMLSTRING_QUERY],
        }
    }
}

impl Default for MacNotesPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl SqlitePlugin for MacNotesPlugin {
    fn name(&self) -> &'static str {
        "mac_notes"
    }

    fn description(&self) -> &'static str {
        "Parser for Mac Notes"
    }

    fn required_tables(&self) -> &'static [&'static str] {
        REQUIRED_TABLES
    }

    fn queries(&self) -> &[QueryDescriptor] {
        &self.queries
    }

    fn schema(&self) -> &SchemaDescriptor {
        &self.schema
    }

    fn handle_row(
        &self,
        _query: &QueryDescriptor,
        row: &dyn RowAccess,
        sink: &mut dyn ArtifactSink,
    ) -> RowResult<()> {
        // Read everything before emitting anything: a missing markup blob
        // or creation timestamp skips the whole row without partial output.
        let title = optional_text_column(row, "title");
        let raw_markup = text_column(row, "zhtmlstring")?;
        let created = real_column(row, "timestamp")?;
        let modified = optional_real_column(row, "last_modified_time");

        let plain_text = sanitize_markup(&raw_markup);
        let record = Arc::new(ArtifactRecord::new(title, raw_markup, plain_text));

        sink.emit(TimestampedEvent::new(
            cocoa_timestamp(created),
            EventKind::Creation,
            Arc::clone(&record),
        ));
        if let Some(edited) = modified {
            sink.emit(TimestampedEvent::new(
                cocoa_timestamp(edited),
                EventKind::LastModified,
                record,
            ));
        }
        Ok(())
    }
}
