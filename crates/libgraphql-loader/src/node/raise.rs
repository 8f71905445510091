//! Tagged [`AstNode`] tree → `graphql_parser` query `Document`.
//!
//! This is the form the external printer and the validator consume. Nodes
//! without a location (e.g. after stripping) get a zero `Pos`.

use crate::ast;
use crate::node::AstNode;
use crate::node::AstValue;
use crate::node::NodeShapeError;
use crate::node::kind;
use std::collections::BTreeMap;

type Result<T> = std::result::Result<T, NodeShapeError>;

pub fn raise_document(node: &AstNode) -> Result<ast::Document> {
    expect_kind(node, &[kind::DOCUMENT])?;
    let definitions = node
        .nodes("definitions")
        .map(|def| match def.kind.as_str() {
            kind::OPERATION_DEFINITION => {
                raise_operation(def).map(ast::Definition::Operation)
            },
            kind::FRAGMENT_DEFINITION => {
                raise_fragment_def(def).map(ast::Definition::Fragment)
            },
            _ => Err(unexpected_kind(
                &[kind::OPERATION_DEFINITION, kind::FRAGMENT_DEFINITION],
                def,
            )),
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(ast::Document { definitions })
}

fn raise_operation(node: &AstNode) -> Result<ast::OperationDefinition> {
    use ast::OperationDefinition as OpDef;

    let position = pos_of(node);
    let name = optional_node(node, "name")
        .map(raise_name)
        .transpose()?;
    let variable_definitions = node
        .nodes("variableDefinitions")
        .map(raise_variable_def)
        .collect::<Result<Vec<_>>>()?;
    let directives = raise_directives(node)?;
    let selection_set = raise_selection_set(required_node(node, "selectionSet")?)?;

    let operation = required_str(node, "operation")?;
    Ok(match operation {
        "query"
            if name.is_none()
                && variable_definitions.is_empty()
                && directives.is_empty() => {
            OpDef::SelectionSet(selection_set)
        },
        "query" => OpDef::Query(ast::Query {
            position,
            name,
            variable_definitions,
            directives,
            selection_set,
        }),
        "mutation" => OpDef::Mutation(ast::Mutation {
            position,
            name,
            variable_definitions,
            directives,
            selection_set,
        }),
        "subscription" => OpDef::Subscription(ast::Subscription {
            position,
            name,
            variable_definitions,
            directives,
            selection_set,
        }),
        other => return Err(NodeShapeError::UnknownOperation {
            operation: other.to_string(),
        }),
    })
}

fn raise_fragment_def(node: &AstNode) -> Result<ast::FragmentDefinition> {
    Ok(ast::FragmentDefinition {
        position: pos_of(node),
        name: raise_name(required_node(node, "name")?)?,
        type_condition: raise_type_condition(
            required_node(node, "typeCondition")?,
        )?,
        directives: raise_directives(node)?,
        selection_set: raise_selection_set(
            required_node(node, "selectionSet")?,
        )?,
    })
}

fn raise_selection_set(node: &AstNode) -> Result<ast::SelectionSet> {
    expect_kind(node, &[kind::SELECTION_SET])?;
    let items = node
        .nodes("selections")
        .map(raise_selection)
        .collect::<Result<Vec<_>>>()?;
    let position = pos_of(node);

    Ok(ast::SelectionSet {
        span: (position, position),
        items,
    })
}

fn raise_selection(node: &AstNode) -> Result<ast::Selection> {
    match node.kind.as_str() {
        kind::FIELD => raise_field(node).map(ast::Selection::Field),
        kind::FRAGMENT_SPREAD => {
            Ok(ast::Selection::FragmentSpread(ast::FragmentSpread {
                position: pos_of(node),
                fragment_name: raise_name(required_node(node, "name")?)?,
                directives: raise_directives(node)?,
            }))
        },
        kind::INLINE_FRAGMENT => {
            Ok(ast::Selection::InlineFragment(ast::InlineFragment {
                position: pos_of(node),
                type_condition: optional_node(node, "typeCondition")
                    .map(raise_type_condition)
                    .transpose()?,
                directives: raise_directives(node)?,
                selection_set: raise_selection_set(
                    required_node(node, "selectionSet")?,
                )?,
            }))
        },
        _ => Err(unexpected_kind(
            &[kind::FIELD, kind::FRAGMENT_SPREAD, kind::INLINE_FRAGMENT],
            node,
        )),
    }
}

fn raise_field(node: &AstNode) -> Result<ast::Field> {
    let position = pos_of(node);
    let selection_set = match optional_node(node, "selectionSet") {
        Some(sel_set) => raise_selection_set(sel_set)?,
        None => ast::SelectionSet {
            span: (position, position),
            items: vec![],
        },
    };

    Ok(ast::Field {
        position,
        alias: optional_node(node, "alias").map(raise_name).transpose()?,
        name: raise_name(required_node(node, "name")?)?,
        arguments: raise_arguments(node, "arguments")?,
        directives: raise_directives(node)?,
        selection_set,
    })
}

fn raise_variable_def(node: &AstNode) -> Result<ast::VariableDefinition> {
    expect_kind(node, &[kind::VARIABLE_DEFINITION])?;
    let variable = required_node(node, "variable")?;

    Ok(ast::VariableDefinition {
        position: pos_of(node),
        name: raise_name(required_node(variable, "name")?)?,
        var_type: raise_type(required_node(node, "type")?)?,
        default_value: optional_node(node, "defaultValue")
            .map(raise_value)
            .transpose()?,
    })
}

fn raise_type(node: &AstNode) -> Result<ast::Type> {
    match node.kind.as_str() {
        kind::NAMED_TYPE => Ok(ast::Type::NamedType(
            raise_name(required_node(node, "name")?)?,
        )),
        kind::LIST_TYPE => Ok(ast::Type::ListType(Box::new(
            raise_type(required_node(node, "type")?)?,
        ))),
        kind::NON_NULL_TYPE => Ok(ast::Type::NonNullType(Box::new(
            raise_type(required_node(node, "type")?)?,
        ))),
        _ => Err(unexpected_kind(
            &[kind::NAMED_TYPE, kind::LIST_TYPE, kind::NON_NULL_TYPE],
            node,
        )),
    }
}

fn raise_type_condition(node: &AstNode) -> Result<ast::TypeCondition> {
    expect_kind(node, &[kind::NAMED_TYPE])?;
    Ok(ast::TypeCondition::On(raise_name(required_node(node, "name")?)?))
}

fn raise_directives(node: &AstNode) -> Result<Vec<ast::Directive>> {
    node.nodes("directives")
        .map(|directive| -> Result<ast::Directive> {
            expect_kind(directive, &[kind::DIRECTIVE])?;
            Ok(ast::Directive {
                position: pos_of(directive),
                name: raise_name(required_node(directive, "name")?)?,
                arguments: raise_arguments(directive, "arguments")?,
            })
        })
        .collect()
}

fn raise_arguments(
    node: &AstNode,
    key: &str,
) -> Result<Vec<(String, ast::Value)>> {
    node.nodes(key)
        .map(|arg| -> Result<(String, ast::Value)> {
            Ok((
                raise_name(required_node(arg, "name")?)?,
                raise_value(required_node(arg, "value")?)?,
            ))
        })
        .collect()
}

fn is_int_literal(literal: &str) -> bool {
    let digits = literal.strip_prefix('-').unwrap_or(literal);
    !digits.is_empty() && digits.bytes().all(|byte| byte.is_ascii_digit())
}

fn raise_value(node: &AstNode) -> Result<ast::Value> {
    use ast::Value;
    Ok(match node.kind.as_str() {
        kind::VARIABLE => {
            Value::Variable(raise_name(required_node(node, "name")?)?)
        },
        kind::INT_VALUE => {
            let literal = required_str(node, "value")?;
            if !is_int_literal(literal) {
                return Err(NodeShapeError::InvalidInt {
                    value: literal.to_string(),
                });
            }
            match literal.parse::<i32>() {
                Ok(int) => Value::Int(int.into()),
                // `ast::Number` only holds 32 bits. Enum values print
                // verbatim, so wider literals keep their exact text.
                Err(_) => Value::Enum(literal.to_string()),
            }
        },
        kind::FLOAT_VALUE => {
            let literal = required_str(node, "value")?;
            Value::Float(literal.parse::<f64>().map_err(|_| {
                NodeShapeError::InvalidFloat {
                    value: literal.to_string(),
                }
            })?)
        },
        kind::STRING_VALUE => {
            Value::String(required_str(node, "value")?.to_string())
        },
        kind::BOOLEAN_VALUE => match node.get("value") {
            Some(AstValue::Bool(boolean)) => Value::Boolean(*boolean),
            _ => return Err(missing_field(node, "value")),
        },
        kind::NULL_VALUE => Value::Null,
        kind::ENUM_VALUE => {
            Value::Enum(required_str(node, "value")?.to_string())
        },
        kind::LIST_VALUE => Value::List(
            node.nodes("values")
                .map(raise_value)
                .collect::<Result<Vec<_>>>()?,
        ),
        kind::OBJECT_VALUE => Value::Object(
            node.nodes("fields")
                .map(|field| -> Result<(String, ast::Value)> {
                    Ok((
                        raise_name(required_node(field, "name")?)?,
                        raise_value(required_node(field, "value")?)?,
                    ))
                })
                .collect::<Result<BTreeMap<_, _>>>()?,
        ),
        _ => return Err(unexpected_kind(
            &[
                kind::VARIABLE,
                kind::INT_VALUE,
                kind::FLOAT_VALUE,
                kind::STRING_VALUE,
                kind::BOOLEAN_VALUE,
                kind::NULL_VALUE,
                kind::ENUM_VALUE,
                kind::LIST_VALUE,
                kind::OBJECT_VALUE,
            ],
            node,
        )),
    })
}

fn raise_name(node: &AstNode) -> Result<String> {
    expect_kind(node, &[kind::NAME])?;
    required_str(node, "value").map(str::to_string)
}

fn pos_of(node: &AstNode) -> ast::Pos {
    node.loc
        .as_ref()
        .map(|loc| loc.to_pos())
        .unwrap_or(ast::Pos { line: 0, column: 0 })
}

fn expect_kind(node: &AstNode, expected: &[&'static str]) -> Result<()> {
    if expected.contains(&node.kind.as_str()) {
        Ok(())
    } else {
        Err(unexpected_kind(expected, node))
    }
}

fn unexpected_kind(expected: &[&'static str], node: &AstNode) -> NodeShapeError {
    NodeShapeError::UnexpectedKind {
        expected: expected.to_vec(),
        found: node.kind.to_string(),
    }
}

fn missing_field(node: &AstNode, field: &str) -> NodeShapeError {
    NodeShapeError::MissingField {
        kind: node.kind.to_string(),
        field: field.to_string(),
    }
}

/// `Null` and absent slots are both "no node".
fn optional_node<'a>(node: &'a AstNode, key: &str) -> Option<&'a AstNode> {
    node.node(key)
}

fn required_node<'a>(node: &'a AstNode, key: &str) -> Result<&'a AstNode> {
    node.node(key).ok_or_else(|| missing_field(node, key))
}

fn required_str<'a>(node: &'a AstNode, key: &str) -> Result<&'a str> {
    node.str_field(key).ok_or_else(|| missing_field(node, key))
}
