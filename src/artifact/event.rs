//! Timestamped events derived from an artifact record

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ArtifactRecord;

/// What a timestamp on a record means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    /// The note was created at this instant
    Creation,
    /// The note was last edited at this instant
    LastModified,
}

impl EventKind {
    /// Returns the label used by downstream sinks.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Creation => "Creation Time",
            EventKind::LastModified => "Last Modified Time",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An absolute instant attached to an artifact record.
///
/// The record is shared, not owned: a creation and a last-modified event
/// for the same note back the same `ArtifactRecord`.
#[derive(Debug, Clone)]
pub struct TimestampedEvent {
    /// Absolute, timezone-agnostic instant
    pub instant: DateTime<Utc>,
    /// Meaning of the instant
    pub kind: EventKind,
    /// The originating record
    pub record: Arc<ArtifactRecord>,
}

impl TimestampedEvent {
    /// Creates a new event referencing `record`.
    pub fn new(instant: DateTime<Utc>, kind: EventKind, record: Arc<ArtifactRecord>) -> Self {
        Self {
            instant,
            kind,
            record,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_kind_labels() {
        assert_eq!(EventKind::Creation.as_str(), "Creation Time");
        assert_eq!(EventKind::LastModified.as_str(), "Last Modified Time");
        assert_eq!(format!("{}", EventKind::Creation), "Creation Time");
    }

    #[test]
    fn test_record_shared_between_events() {
        let record = Arc::new(ArtifactRecord::new(None, "<body></body>", ""));
        let instant = Utc.with_ymd_and_hms(2021, 3, 4, 5, 6, 7).unwrap();

        let created = TimestampedEvent::new(instant, EventKind::Creation, Arc::clone(&record));
        let modified = TimestampedEvent::new(instant, EventKind::LastModified, Arc::clone(&record));

        assert!(Arc::ptr_eq(&created.record, &modified.record));
        assert_eq!(Arc::strong_count(&record), 3);
    }
}
