//! Node kind names, matching the conventional JSON GraphQL AST.

pub const ARGUMENT: &str = "Argument";
pub const BOOLEAN_VALUE: &str = "BooleanValue";
pub const DIRECTIVE: &str = "Directive";
pub const DOCUMENT: &str = "Document";
pub const ENUM_VALUE: &str = "EnumValue";
pub const FIELD: &str = "Field";
pub const FLOAT_VALUE: &str = "FloatValue";
pub const FRAGMENT_DEFINITION: &str = "FragmentDefinition";
pub const FRAGMENT_SPREAD: &str = "FragmentSpread";
pub const INLINE_FRAGMENT: &str = "InlineFragment";
pub const INT_VALUE: &str = "IntValue";
pub const LIST_TYPE: &str = "ListType";
pub const LIST_VALUE: &str = "ListValue";
pub const NAME: &str = "Name";
pub const NAMED_TYPE: &str = "NamedType";
pub const NON_NULL_TYPE: &str = "NonNullType";
pub const NULL_VALUE: &str = "NullValue";
pub const OBJECT_FIELD: &str = "ObjectField";
pub const OBJECT_VALUE: &str = "ObjectValue";
pub const OPERATION_DEFINITION: &str = "OperationDefinition";
pub const SELECTION_SET: &str = "SelectionSet";
pub const STRING_VALUE: &str = "StringValue";
pub const VARIABLE: &str = "Variable";
pub const VARIABLE_DEFINITION: &str = "VariableDefinition";
