//! Named-column row access
//!
//! The query-execution collaborator yields rows behind the `RowAccess`
//! trait rather than positional tuples, so unrelated schema drift in the
//! source database cannot shift values into the wrong field. Column values
//! are `serde_json::Value`s; a stored SQL `NULL` surfaces as `Value::Null`
//! and counts as absent.

mod errors;

pub use errors::{RowError, RowResult};

use serde_json::{Map, Value};

/// One result tuple from a declared query, with named-column lookup.
pub trait RowAccess {
    /// Returns the value of the column aliased `name`, or `None` when the
    /// query did not produce it.
    fn column(&self, name: &str) -> Option<&Value>;
}

/// A row backed by a JSON object, the reference `RowAccess` implementation.
///
/// Collaborators that already materialize rows as JSON can hand them over
/// directly; tests build fixture rows the same way.
#[derive(Debug, Clone, Default)]
pub struct JsonRow(Map<String, Value>);

impl JsonRow {
    /// Builds a row from a JSON value; non-objects become an empty row.
    pub fn new(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self(Map::new()),
        }
    }
}

impl RowAccess for JsonRow {
    fn column(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }
}

/// Reads a required text column.
pub fn text_column(row: &dyn RowAccess, name: &'static str) -> RowResult<String> {
    match row.column(name) {
        None | Some(Value::Null) => Err(RowError::MissingColumn(name)),
        Some(Value::String(text)) => Ok(text.clone()),
        Some(_) => Err(RowError::WrongType {
            column: name,
            expected: "text",
        }),
    }
}

/// Reads an optional text column; absent, null and non-text values all
/// yield `None`.
pub fn optional_text_column(row: &dyn RowAccess, name: &str) -> Option<String> {
    match row.column(name) {
        Some(Value::String(text)) => Some(text.clone()),
        _ => None,
    }
}

/// Reads a required real-number column. Integer values coerce: SQLite
/// column affinity is advisory and whole-second timestamps are stored as
/// integers by some writers.
pub fn real_column(row: &dyn RowAccess, name: &'static str) -> RowResult<f64> {
    match row.column(name) {
        None | Some(Value::Null) => Err(RowError::MissingColumn(name)),
        Some(Value::Number(number)) => number.as_f64().ok_or(RowError::WrongType {
            column: name,
            expected: "real",
        }),
        Some(_) => Err(RowError::WrongType {
            column: name,
            expected: "real",
        }),
    }
}

/// Reads an optional real-number column; absent, null and non-numeric
/// values all yield `None`. A stored zero is a value, not absence.
pub fn optional_real_column(row: &dyn RowAccess, name: &str) -> Option<f64> {
    match row.column(name) {
        Some(Value::Number(number)) => number.as_f64(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_row() -> JsonRow {
        JsonRow::new(json!({
            "title": "Shopping",
            "zhtmlstring": "<body><p>Milk</p></body>",
            "timestamp": 0.0,
            "last_modified_time": null,
            "flag": 7,
        }))
    }

    #[test]
    fn test_text_column_present() {
        let row = sample_row();
        assert_eq!(text_column(&row, "title").unwrap(), "Shopping");
    }

    #[test]
    fn test_text_column_missing_and_null() {
        let row = sample_row();
        assert_eq!(
            text_column(&row, "nope"),
            Err(RowError::MissingColumn("nope"))
        );
        assert_eq!(
            text_column(&row, "last_modified_time"),
            Err(RowError::MissingColumn("last_modified_time"))
        );
    }

    #[test]
    fn test_text_column_wrong_type() {
        let row = sample_row();
        assert_eq!(
            text_column(&row, "flag"),
            Err(RowError::WrongType {
                column: "flag",
                expected: "text"
            })
        );
    }

    #[test]
    fn test_real_column_accepts_integers() {
        let row = JsonRow::new(json!({ "timestamp": 86400 }));
        assert_eq!(real_column(&row, "timestamp").unwrap(), 86_400.0);
    }

    #[test]
    fn test_real_column_zero_is_a_value() {
        let row = sample_row();
        assert_eq!(real_column(&row, "timestamp").unwrap(), 0.0);
    }

    #[test]
    fn test_optional_columns_treat_null_as_absent() {
        let row = sample_row();
        assert_eq!(optional_real_column(&row, "last_modified_time"), None);
        assert_eq!(optional_text_column(&row, "last_modified_time"), None);
        assert_eq!(optional_text_column(&row, "title").as_deref(), Some("Shopping"));
    }

    #[test]
    fn test_non_object_json_is_an_empty_row() {
        let row = JsonRow::new(json!([1, 2, 3]));
        assert!(row.column("anything").is_none());
    }
}
