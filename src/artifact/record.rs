//! Normalized representation of one extracted note

use serde::{Deserialize, Serialize};

/// A single note extracted from the database.
///
/// `raw_markup` is retained unmodified for provenance; `plain_text` is
/// derived deterministically and solely from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactRecord {
    /// Note title, absent when the source column is null
    pub title: Option<String>,
    /// Original markup blob as stored in the database
    pub raw_markup: String,
    /// Sanitized rendering of `raw_markup`
    pub plain_text: String,
}

impl ArtifactRecord {
    /// Creates a new record.
    pub fn new(
        title: Option<String>,
        raw_markup: impl Into<String>,
        plain_text: impl Into<String>,
    ) -> Self {
        Self {
            title,
            raw_markup: raw_markup.into(),
            plain_text: plain_text.into(),
        }
    }
}
