//! Static query declarations

/// An immutable query declaration supplied to the execution collaborator.
///
/// Descriptors are configuration, not behavior: they have process lifetime
/// and are safely shareable across threads without locking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryDescriptor {
    /// Short identifier, used in log fields
    pub name: &'static str,
    /// The query text
    pub sql: &'static str,
}

impl QueryDescriptor {
    /// Creates a new descriptor.
    pub const fn new(name: &'static str, sql: &'static str) -> Self {
        Self { name, sql }
    }
}
