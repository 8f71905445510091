use crate::ast;
use crate::schema::SchemaBuildError;
use crate::validation::ValidationError;

/// A GraphQL engine able to build a schema from an introspection result and
/// validate executable documents against it.
///
/// [`IntrospectionValidationEngine`](crate::validation::IntrospectionValidationEngine)
/// is the default; other engines can be plugged into
/// [`GraphQLLoader::with_engine`](crate::GraphQLLoader::with_engine).
pub trait ValidationEngine {
    type Schema;

    fn build_schema(
        &self,
        introspection_json: &str,
    ) -> Result<Self::Schema, SchemaBuildError>;

    /// Returns every problem found in `document`. An empty list means the
    /// document is valid.
    fn validate(
        &self,
        schema: &Self::Schema,
        document: &ast::Document,
    ) -> Vec<ValidationError>;
}
