//! Typed executable-document AST of the external `graphql_parser` engine.
//!
//! The loader itself works on the tagged [`AstNode`](crate::node::AstNode)
//! tree; these types are only the input of [`parse`] and the input of the
//! printer and validator (see [`raise_document`](crate::node::raise_document)).

pub use graphql_parser::Pos;
pub use graphql_parser::query::ParseError;

pub type Definition = graphql_parser::query::Definition<'static, String>;
pub type Directive = graphql_parser::query::Directive<'static, String>;
pub type Document = graphql_parser::query::Document<'static, String>;
pub type Field = graphql_parser::query::Field<'static, String>;
pub type FragmentDefinition = graphql_parser::query::FragmentDefinition<'static, String>;
pub type FragmentSpread = graphql_parser::query::FragmentSpread<'static, String>;
pub type InlineFragment = graphql_parser::query::InlineFragment<'static, String>;
pub type Mutation = graphql_parser::query::Mutation<'static, String>;
pub type OperationDefinition = graphql_parser::query::OperationDefinition<'static, String>;
pub type Query = graphql_parser::query::Query<'static, String>;
pub type Selection = graphql_parser::query::Selection<'static, String>;
pub type SelectionSet = graphql_parser::query::SelectionSet<'static, String>;
pub type Subscription = graphql_parser::query::Subscription<'static, String>;
pub type Type = graphql_parser::query::Type<'static, String>;
pub type TypeCondition = graphql_parser::query::TypeCondition<'static, String>;
pub type Value = graphql_parser::query::Value<'static, String>;
pub type VariableDefinition = graphql_parser::query::VariableDefinition<'static, String>;

/// Parses an executable document. `#import` lines are plain comments to the
/// parser and are ignored here.
pub fn parse(content: &str) -> Result<Document, ParseError> {
    graphql_parser::query::parse_query::<String>(content)
        .map(|doc| doc.into_static())
}

/// Renders a document in the parser's canonical printed form.
pub fn print(document: &Document) -> String {
    document.to_string()
}

/// Returns the innermost named type of a (possibly wrapped) type reference.
pub fn innermost_type_name(ty: &Type) -> &str {
    match ty {
        Type::NamedType(name) => name.as_str(),
        Type::ListType(inner) | Type::NonNullType(inner) => {
            innermost_type_name(inner)
        },
    }
}
