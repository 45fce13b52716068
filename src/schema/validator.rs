//! Schema compatibility validator
//!
//! The validator performs no I/O: the live schema text arrives from the
//! database collaborator, already read. Comparison ignores whitespace and
//! letter case, since `CREATE TABLE` text round-trips through the source
//! database with incidental formatting differences.

use std::collections::BTreeMap;

use super::SchemaDescriptor;

/// Compatibility verdict for one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaVerdict {
    /// Live schema matches the expected layout
    Compatible,
    /// Table exists but its schema text differs; proceed with a warning
    Divergent,
    /// Table is absent from the live database
    Missing,
}

/// Verdict paired with the table it applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableVerdict {
    /// Table name from the descriptor
    pub table: String,
    /// Compatibility verdict
    pub verdict: SchemaVerdict,
}

/// Stateless schema comparator.
pub struct SchemaValidator;

impl SchemaValidator {
    /// Compares one expected schema against the live text.
    pub fn verdict(expected: &str, live: Option<&str>) -> SchemaVerdict {
        match live {
            None => SchemaVerdict::Missing,
            Some(text) if normalize(text) == normalize(expected) => SchemaVerdict::Compatible,
            Some(_) => SchemaVerdict::Divergent,
        }
    }

    /// Checks every table the descriptor declares against the live schema
    /// map, in deterministic table order.
    pub fn check_all(
        descriptor: &SchemaDescriptor,
        live: &BTreeMap<String, String>,
    ) -> Vec<TableVerdict> {
        descriptor
            .tables()
            .map(|table| {
                let expected = descriptor.expected(table).unwrap_or_default();
                TableVerdict {
                    table: table.to_string(),
                    verdict: Self::verdict(expected, live.get(table).map(String::as_str)),
                }
            })
            .collect()
    }
}

/// Strips all whitespace and folds case so formatting differences do not
/// count as divergence.
fn normalize(schema: &str) -> String {
    schema
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPECTED: &str = "CREATE TABLE ZNOTEBODY ( Z_PK INTEGER PRIMARY KEY, ZHTMLSTRING VARCHAR )";

    #[test]
    fn test_exact_match_is_compatible() {
        assert_eq!(
            SchemaValidator::verdict(EXPECTED, Some(EXPECTED)),
            SchemaVerdict::Compatible
        );
    }

    #[test]
    fn test_whitespace_and_case_do_not_diverge() {
        let live = "create table ZNOTEBODY (Z_PK integer primary key,\n  ZHTMLSTRING varchar)";
        assert_eq!(
            SchemaValidator::verdict(EXPECTED, Some(live)),
            SchemaVerdict::Compatible
        );
    }

    #[test]
    fn test_added_column_is_divergent() {
        let live = "CREATE TABLE ZNOTEBODY ( Z_PK INTEGER PRIMARY KEY, ZHTMLSTRING VARCHAR, ZEXTRA INTEGER )";
        assert_eq!(
            SchemaValidator::verdict(EXPECTED, Some(live)),
            SchemaVerdict::Divergent
        );
    }

    #[test]
    fn test_absent_table_is_missing() {
        assert_eq!(SchemaValidator::verdict(EXPECTED, None), SchemaVerdict::Missing);
    }

    #[test]
    fn test_check_all_reports_every_declared_table() {
        let descriptor = SchemaDescriptor::new(&[
            ("ZNOTE", "CREATE TABLE ZNOTE ( Z_PK INTEGER )"),
            ("ZNOTEBODY", EXPECTED),
        ]);
        let mut live = BTreeMap::new();
        live.insert("ZNOTE".to_string(), "CREATE TABLE ZNOTE ( Z_PK INTEGER )".to_string());

        let verdicts = SchemaValidator::check_all(&descriptor, &live);
        assert_eq!(verdicts.len(), 2);
        assert_eq!(verdicts[0].table, "ZNOTE");
        assert_eq!(verdicts[0].verdict, SchemaVerdict::Compatible);
        assert_eq!(verdicts[1].table, "ZNOTEBODY");
        assert_eq!(verdicts[1].verdict, SchemaVerdict::Missing);
    }
}
