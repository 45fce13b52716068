//! Source-schema compatibility checking
//!
//! Each plugin carries a `SchemaDescriptor`: the table layout its query was
//! written against. Before any row is processed the validator compares the
//! live schema text reported by the database collaborator to the expected
//! layout. Divergence is a warning, not a failure - the queries address
//! columns by name, so unrelated drift cannot corrupt results. Only a
//! missing required table aborts the plugin run.

mod descriptor;
mod errors;
mod validator;

pub use descriptor::SchemaDescriptor;
pub use errors::{SchemaError, SchemaResult};
pub use validator::{SchemaValidator, SchemaVerdict, TableVerdict};
