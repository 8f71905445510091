//! A kind-tagged, location-carrying tree representation of GraphQL
//! documents.
//!
//! Every node is an [`AstNode`]: a `kind` string, an optional
//! [`SourceLocation`], and an ordered map of named children. Passes over the
//! tree (location stripping, fragment-spread collection) only ever look at
//! that uniform shape, so they keep working when new node kinds show up.

mod ast_node;
mod ast_value;
pub mod kind;
mod lower;
mod node_shape_error;
mod raise;
mod source_location;

pub use ast_node::AstNode;
pub use ast_node::Preorder;
pub use ast_value::AstValue;
pub use lower::lower_document;
pub use node_shape_error::NodeShapeError;
pub use raise::raise_document;
pub use source_location::SourceLocation;

#[cfg(test)]
mod tests;
