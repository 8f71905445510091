use crate::ast;
use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::validation::ValidationEngine;
use crate::validation::ValidationError;
use crate::validation::document_validator::DocumentValidator;

/// Validates documents against a [`Schema`] built from a JSON introspection
/// result.
#[derive(Clone, Copy, Debug, Default)]
pub struct IntrospectionValidationEngine;
impl ValidationEngine for IntrospectionValidationEngine {
    type Schema = Schema;

    fn build_schema(
        &self,
        introspection_json: &str,
    ) -> Result<Schema, SchemaBuildError> {
        Schema::from_introspection_json(introspection_json)
    }

    fn validate(
        &self,
        schema: &Schema,
        document: &ast::Document,
    ) -> Vec<ValidationError> {
        DocumentValidator::new(schema, document).validate()
    }
}
