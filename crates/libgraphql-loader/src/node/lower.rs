//! `graphql_parser` query `Document` → tagged [`AstNode`] tree.

use crate::ast;
use crate::node::AstNode;
use crate::node::SourceLocation;
use crate::node::kind;
use std::path::Path;

struct LowerContext<'a> {
    file: Option<&'a Path>,
}
impl LowerContext<'_> {
    fn loc(&self, pos: ast::Pos) -> Option<SourceLocation> {
        Some(SourceLocation::from_pos(self.file, pos))
    }
}

/// Converts a parsed document into a `Document` node. Every node the parser
/// reports a position for gets a [`SourceLocation`] tagged with `file`.
pub fn lower_document(document: &ast::Document, file: Option<&Path>) -> AstNode {
    let ctx = LowerContext { file };
    let definitions: Vec<AstNode> = document
        .definitions
        .iter()
        .map(|def| match def {
            ast::Definition::Operation(op) => lower_operation(op, &ctx),
            ast::Definition::Fragment(frag) => lower_fragment_def(frag, &ctx),
        })
        .collect();

    AstNode::new(kind::DOCUMENT)
        .with_loc(Some(SourceLocation::start_of(file)))
        .with("definitions", definitions)
}

fn lower_operation(
    op: &ast::OperationDefinition,
    ctx: &LowerContext<'_>,
) -> AstNode {
    use ast::OperationDefinition as OpDef;
    let (operation, position, name, variable_definitions, directives, selection_set) =
        match op {
            OpDef::SelectionSet(sel_set) => {
                return AstNode::new(kind::OPERATION_DEFINITION)
                    .with_loc(ctx.loc(sel_set.span.0))
                    .with("operation", "query")
                    .with("name", None::<AstNode>)
                    .with("variableDefinitions", Vec::<AstNode>::new())
                    .with("directives", Vec::<AstNode>::new())
                    .with("selectionSet", lower_selection_set(sel_set, ctx));
            },
            OpDef::Query(query) => (
                "query",
                query.position,
                &query.name,
                &query.variable_definitions,
                &query.directives,
                &query.selection_set,
            ),
            OpDef::Mutation(mutation) => (
                "mutation",
                mutation.position,
                &mutation.name,
                &mutation.variable_definitions,
                &mutation.directives,
                &mutation.selection_set,
            ),
            OpDef::Subscription(subscription) => (
                "subscription",
                subscription.position,
                &subscription.name,
                &subscription.variable_definitions,
                &subscription.directives,
                &subscription.selection_set,
            ),
        };

    AstNode::new(kind::OPERATION_DEFINITION)
        .with_loc(ctx.loc(position))
        .with("operation", operation)
        .with("name", name.as_deref().map(AstNode::name_node))
        .with(
            "variableDefinitions",
            variable_definitions
                .iter()
                .map(|var_def| lower_variable_def(var_def, ctx))
                .collect::<Vec<_>>(),
        )
        .with("directives", lower_directives(directives, ctx))
        .with("selectionSet", lower_selection_set(selection_set, ctx))
}

fn lower_fragment_def(
    frag: &ast::FragmentDefinition,
    ctx: &LowerContext<'_>,
) -> AstNode {
    AstNode::new(kind::FRAGMENT_DEFINITION)
        .with_loc(ctx.loc(frag.position))
        .with("name", AstNode::name_node(frag.name.as_str()))
        .with("typeCondition", lower_type_condition(&frag.type_condition))
        .with("directives", lower_directives(&frag.directives, ctx))
        .with("selectionSet", lower_selection_set(&frag.selection_set, ctx))
}

fn lower_selection_set(
    sel_set: &ast::SelectionSet,
    ctx: &LowerContext<'_>,
) -> AstNode {
    let selections: Vec<AstNode> = sel_set
        .items
        .iter()
        .map(|sel| lower_selection(sel, ctx))
        .collect();

    AstNode::new(kind::SELECTION_SET)
        .with_loc(ctx.loc(sel_set.span.0))
        .with("selections", selections)
}

fn lower_selection(sel: &ast::Selection, ctx: &LowerContext<'_>) -> AstNode {
    match sel {
        ast::Selection::Field(field) => lower_field(field, ctx),
        ast::Selection::FragmentSpread(spread) => {
            AstNode::new(kind::FRAGMENT_SPREAD)
                .with_loc(ctx.loc(spread.position))
                .with("name", AstNode::name_node(spread.fragment_name.as_str()))
                .with("directives", lower_directives(&spread.directives, ctx))
        },
        ast::Selection::InlineFragment(inline) => {
            AstNode::new(kind::INLINE_FRAGMENT)
                .with_loc(ctx.loc(inline.position))
                .with(
                    "typeCondition",
                    inline.type_condition.as_ref().map(lower_type_condition),
                )
                .with("directives", lower_directives(&inline.directives, ctx))
                .with(
                    "selectionSet",
                    lower_selection_set(&inline.selection_set, ctx),
                )
        },
    }
}

fn lower_field(field: &ast::Field, ctx: &LowerContext<'_>) -> AstNode {
    // graphql_parser models a leaf field as an empty selection set.
    let selection_set = (!field.selection_set.items.is_empty())
        .then(|| lower_selection_set(&field.selection_set, ctx));

    AstNode::new(kind::FIELD)
        .with_loc(ctx.loc(field.position))
        .with("alias", field.alias.as_deref().map(AstNode::name_node))
        .with("name", AstNode::name_node(field.name.as_str()))
        .with("arguments", lower_arguments(&field.arguments))
        .with("directives", lower_directives(&field.directives, ctx))
        .with("selectionSet", selection_set)
}

fn lower_type_condition(type_cond: &ast::TypeCondition) -> AstNode {
    let ast::TypeCondition::On(type_name) = type_cond;
    named_type_node(type_name)
}

fn lower_variable_def(
    var_def: &ast::VariableDefinition,
    ctx: &LowerContext<'_>,
) -> AstNode {
    AstNode::new(kind::VARIABLE_DEFINITION)
        .with_loc(ctx.loc(var_def.position))
        .with(
            "variable",
            AstNode::new(kind::VARIABLE)
                .with("name", AstNode::name_node(var_def.name.as_str())),
        )
        .with("type", lower_type(&var_def.var_type))
        .with("defaultValue", var_def.default_value.as_ref().map(lower_value))
        .with("directives", Vec::<AstNode>::new())
}

fn lower_type(ty: &ast::Type) -> AstNode {
    match ty {
        ast::Type::NamedType(name) => named_type_node(name),
        ast::Type::ListType(inner) => {
            AstNode::new(kind::LIST_TYPE).with("type", lower_type(inner))
        },
        ast::Type::NonNullType(inner) => {
            AstNode::new(kind::NON_NULL_TYPE).with("type", lower_type(inner))
        },
    }
}

fn named_type_node(name: &str) -> AstNode {
    AstNode::new(kind::NAMED_TYPE).with("name", AstNode::name_node(name))
}

fn lower_directives(
    directives: &[ast::Directive],
    ctx: &LowerContext<'_>,
) -> Vec<AstNode> {
    directives
        .iter()
        .map(|directive| {
            AstNode::new(kind::DIRECTIVE)
                .with_loc(ctx.loc(directive.position))
                .with("name", AstNode::name_node(directive.name.as_str()))
                .with("arguments", lower_arguments(&directive.arguments))
        })
        .collect()
}

fn lower_arguments(arguments: &[(String, ast::Value)]) -> Vec<AstNode> {
    arguments
        .iter()
        .map(|(name, value)| {
            AstNode::new(kind::ARGUMENT)
                .with("name", AstNode::name_node(name.as_str()))
                .with("value", lower_value(value))
        })
        .collect()
}

fn lower_value(value: &ast::Value) -> AstNode {
    use ast::Value;
    match value {
        Value::Variable(name) => AstNode::new(kind::VARIABLE)
            .with("name", AstNode::name_node(name.as_str())),
        Value::Int(number) => AstNode::new(kind::INT_VALUE)
            .with("value", number.as_i64().unwrap_or(0).to_string()),
        Value::Float(float) => {
            AstNode::new(kind::FLOAT_VALUE).with("value", float.to_string())
        },
        Value::String(string) => AstNode::new(kind::STRING_VALUE)
            .with("value", string.as_str())
            .with("block", false),
        Value::Boolean(boolean) => {
            AstNode::new(kind::BOOLEAN_VALUE).with("value", *boolean)
        },
        Value::Null => AstNode::new(kind::NULL_VALUE),
        Value::Enum(name) => {
            AstNode::new(kind::ENUM_VALUE).with("value", name.as_str())
        },
        Value::List(items) => AstNode::new(kind::LIST_VALUE)
            .with("values", items.iter().map(lower_value).collect::<Vec<_>>()),
        Value::Object(fields) => AstNode::new(kind::OBJECT_VALUE).with(
            "fields",
            fields
                .iter()
                .map(|(name, value)| {
                    AstNode::new(kind::OBJECT_FIELD)
                        .with("name", AstNode::name_node(name.as_str()))
                        .with("value", lower_value(value))
                })
                .collect::<Vec<_>>(),
        ),
    }
}
