//! Plugin execution driver
//!
//! Order of operations per run:
//!
//! 1. required-table pre-flight (fatal to this plugin instance only),
//! 2. schema verdicts per declared table (divergence logged, never fatal),
//! 3. row iteration with per-row isolation: a bad row is logged and
//!    skipped, the remaining rows still produce output.

use std::collections::{BTreeMap, BTreeSet};

use crate::artifact::TimestampedEvent;
use crate::observability::Logger;
use crate::query::QuerySource;
use crate::schema::{SchemaError, SchemaValidator, SchemaVerdict};
use crate::sink::ArtifactSink;

use super::{PluginResult, SqlitePlugin};

/// Counters for one completed plugin run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Rows transformed successfully
    pub rows_processed: usize,
    /// Rows skipped because of a row-level error
    pub rows_skipped: usize,
    /// Events handed to the sink
    pub events_emitted: usize,
}

/// Drives one plugin against one query source.
pub struct PluginRunner;

impl PluginRunner {
    /// Runs `plugin` to completion, emitting into `sink`.
    ///
    /// Returns an error only when a required table is missing; everything
    /// row-level is isolated and reflected in the summary instead.
    pub fn run(
        plugin: &dyn SqlitePlugin,
        source: &dyn QuerySource,
        sink: &mut dyn ArtifactSink,
    ) -> PluginResult<RunSummary> {
        Self::preflight(plugin, source)?;
        Self::report_schema_verdicts(plugin, source);

        let mut summary = RunSummary::default();
        for query in plugin.queries() {
            for row in source.execute(query) {
                let mut counted = CountingSink::new(sink);
                match plugin.handle_row(query, row.as_ref(), &mut counted) {
                    Ok(()) => {
                        summary.rows_processed += 1;
                        summary.events_emitted += counted.emitted;
                    }
                    Err(err) => {
                        summary.rows_skipped += 1;
                        Logger::error(
                            "ROW_SKIPPED",
                            &[
                                ("plugin", plugin.name()),
                                ("query", query.name),
                                ("reason", &err.to_string()),
                            ],
                        );
                    }
                }
            }
        }

        Logger::info(
            "PLUGIN_RUN_COMPLETE",
            &[
                ("plugin", plugin.name()),
                ("rows_processed", &summary.rows_processed.to_string()),
                ("rows_skipped", &summary.rows_skipped.to_string()),
                ("events_emitted", &summary.events_emitted.to_string()),
            ],
        );
        Ok(summary)
    }

    /// Fails when a table the plugin's query joins against is absent.
    fn preflight(plugin: &dyn SqlitePlugin, source: &dyn QuerySource) -> PluginResult<()> {
        let live_tables: BTreeSet<String> = source.table_names().into_iter().collect();
        for required in plugin.required_tables() {
            if !live_tables.contains(*required) {
                Logger::error(
                    "PLUGIN_DECLINED",
                    &[("plugin", plugin.name()), ("missing_table", required)],
                );
                return Err(SchemaError::MissingRequiredTable(required.to_string()).into());
            }
        }
        Ok(())
    }

    /// Logs a warning per divergent or missing non-required table.
    fn report_schema_verdicts(plugin: &dyn SqlitePlugin, source: &dyn QuerySource) {
        let mut live = BTreeMap::new();
        for table in plugin.schema().tables() {
            if let Some(text) = source.table_schema(table) {
                live.insert(table.to_string(), text);
            }
        }

        for verdict in SchemaValidator::check_all(plugin.schema(), &live) {
            let event = match verdict.verdict {
                SchemaVerdict::Compatible => continue,
                SchemaVerdict::Divergent => "SCHEMA_DIVERGENT",
                SchemaVerdict::Missing => "SCHEMA_TABLE_ABSENT",
            };
            Logger::warn(event, &[("plugin", plugin.name()), ("table", &verdict.table)]);
        }
    }
}

/// Pass-through sink that counts emissions for the run summary.
struct CountingSink<'a> {
    inner: &'a mut dyn ArtifactSink,
    emitted: usize,
}

impl<'a> CountingSink<'a> {
    fn new(inner: &'a mut dyn ArtifactSink) -> Self {
        Self { inner, emitted: 0 }
    }
}

impl ArtifactSink for CountingSink<'_> {
    fn emit(&mut self, event: TimestampedEvent) {
        self.emitted += 1;
        self.inner.emit(event);
    }
}
