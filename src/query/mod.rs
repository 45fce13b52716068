//! Query declaration and execution seam
//!
//! The core declares what to run (`QueryDescriptor`) and consumes the
//! resulting rows; actually opening the database and executing SQL belongs
//! to the `QuerySource` collaborator.

mod descriptor;
mod source;

pub use descriptor::QueryDescriptor;
pub use source::QuerySource;
