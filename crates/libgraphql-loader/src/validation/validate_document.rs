use crate::ast;
use crate::validation::ValidationEngine;
use crate::validation::ValidationError;

/// Runs `engine` over `document` and reports each error as its own warning.
/// The errors are returned as diagnostics; this never fails.
pub fn validate_document<E: ValidationEngine>(
    engine: &E,
    schema: &E::Schema,
    document: &ast::Document,
) -> Vec<ValidationError> {
    let errors = engine.validate(schema, document);
    for error in &errors {
        log::warn!("GraphQL validation error ({}): {}", error.rule, error.message);
    }
    log::debug!("Validation finished with {} error(s).", errors.len());
    errors
}
