use thiserror::Error;

/// A tagged tree that does not have the shape of a GraphQL executable
/// document.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum NodeShapeError {
    #[error("Float literal `{value}` is not a valid number")]
    InvalidFloat { value: String },

    #[error("Int literal `{value}` is not a valid integer")]
    InvalidInt { value: String },

    #[error("`{kind}` node is missing its `{field}` field")]
    MissingField { kind: String, field: String },

    #[error("Unknown operation type `{operation}`")]
    UnknownOperation { operation: String },

    #[error("Expected one of [{}] but found a `{found}` node", .expected.join(", "))]
    UnexpectedKind { expected: Vec<&'static str>, found: String },
}
