//! Bundles a GraphQL executable document together with every fragment file
//! it pulls in through `#import "path"` directives.
//!
//! The pipeline run by [`GraphQLLoader`] is:
//!
//! 1. [`import`]: recursively expand `#import` lines into one merged
//!    document.
//! 2. [`transform::dedupe_fragments`]: keep the first fragment of each
//!    name.
//! 3. [`transform::strip_locations`]: drop positional metadata from every
//!    node.
//! 4. [`transform::prune_unused_fragments`]: optionally drop fragments no
//!    operation can reach.
//! 5. [`schema`] + [`validation`]: optionally locate an introspection
//!    schema file and collect (non-fatal) validation diagnostics.
//! 6. [`output`]: print the document or hand back its tagged tree.
//!
//! All filesystem access goes through the [`host::ImportHost`] capability
//! trait so the whole pipeline can run against in-memory fakes.

pub mod ast;
pub mod host;
pub mod import;
mod loader;
pub mod node;
pub mod output;
pub mod schema;
pub mod transform;
pub mod validation;

pub use loader::GraphQLLoader;
pub use loader::LoadError;
pub use loader::LoaderOptions;
pub use loader::LoaderOptionsError;
pub use loader::LoaderResult;
