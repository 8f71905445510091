//! Locating and loading the schema that documents are validated against.

mod introspection;
#[allow(clippy::module_inception)]
mod schema;
mod schema_build_error;
mod schema_locator;
mod schema_type;

pub use schema::Schema;
pub use schema_build_error::SchemaBuildError;
pub use schema_locator::SchemaNotFoundError;
pub use schema_locator::locate_schema_file;
pub use schema_type::SchemaField;
pub use schema_type::SchemaType;
pub use schema_type::TypeKind;
pub use schema_type::TypeRef;
