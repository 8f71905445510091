//! Schema-aware validation of resolved documents. Validation never fails the
//! load: every problem found becomes a [`ValidationError`] diagnostic.

mod document_validator;
mod introspection_validation_engine;
mod validate_document;
mod validation_engine;
mod validation_error;

pub use introspection_validation_engine::IntrospectionValidationEngine;
pub use validate_document::validate_document;
pub use validation_engine::ValidationEngine;
pub use validation_error::ValidationError;
pub use validation_error::ValidationRule;
