use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error("Failed to parse introspection JSON: {0}")]
    InvalidJson(String),

    #[error("Introspection result defines `{type_name}` more than once")]
    DuplicateTypeDefinition { type_name: String },

    #[error("Root {operation} type `{type_name}` is not defined in the introspection result")]
    UndefinedRootType {
        operation: &'static str,
        type_name: String,
    },

    #[error("Introspection type reference of kind `{kind:?}` is missing its {missing}")]
    MalformedTypeRef {
        kind: crate::schema::TypeKind,
        missing: &'static str,
    },
}
