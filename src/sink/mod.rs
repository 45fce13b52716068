//! Output sink collaborator interface
//!
//! The core hands every derived event (which carries its artifact record)
//! to an `ArtifactSink` and does not know or care what the sink does with
//! it; serialization and storage live downstream.

use crate::artifact::TimestampedEvent;

/// External collaborator that receives extracted events.
pub trait ArtifactSink {
    /// Accepts one event and its backing record.
    fn emit(&mut self, event: TimestampedEvent);
}

/// A sink that collects events in memory.
///
/// The reference implementation, used throughout the test suite and useful
/// for callers that post-process events in batch.
#[derive(Debug, Default)]
pub struct MemorySink {
    /// Events in emission order
    pub events: Vec<TimestampedEvent>,
}

impl MemorySink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of collected events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true when nothing has been emitted.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl ArtifactSink for MemorySink {
    fn emit(&mut self, event: TimestampedEvent) {
        self.events.push(event);
    }
}
