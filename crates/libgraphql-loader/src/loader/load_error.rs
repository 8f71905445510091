use crate::import::ImportError;
use crate::node::NodeShapeError;
use crate::schema::SchemaBuildError;
use crate::schema::SchemaNotFoundError;
use std::path::PathBuf;
use thiserror::Error;

/// A fatal failure of [`GraphQLLoader::load`](crate::GraphQLLoader::load).
/// Validation problems are not errors; they come back as diagnostics.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum LoadError {
    #[error(transparent)]
    Import(#[from] ImportError),

    #[error("Failed to print the bundled document: {0}")]
    NodeShape(#[from] NodeShapeError),

    #[error(transparent)]
    SchemaBuild(#[from] SchemaBuildError),

    #[error(transparent)]
    SchemaNotFound(#[from] SchemaNotFoundError),

    #[error("Failed to read schema file {path:?}: {message}")]
    SchemaRead { path: PathBuf, message: String },

    #[error("The `validate` option requires a `schema` file name")]
    ValidateWithoutSchema,
}
