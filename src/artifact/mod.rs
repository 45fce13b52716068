//! Artifact data model
//!
//! One `ArtifactRecord` is produced per source row; up to two
//! `TimestampedEvent`s reference it. Records and events are created and
//! consumed within a single row's processing and handed to the sink.

mod event;
mod record;

pub use event::{EventKind, TimestampedEvent};
pub use record::ArtifactRecord;
