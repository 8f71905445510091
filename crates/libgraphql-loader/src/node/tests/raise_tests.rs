use crate::ast;
use crate::node::AstNode;
use crate::node::NodeShapeError;
use crate::node::kind;
use crate::node::lower_document;
use crate::node::raise_document;

fn reprint(source: &str) -> String {
    let lowered = lower_document(&ast::parse(source).unwrap(), None);
    ast::print(&raise_document(&lowered).unwrap())
}

#[test]
fn raising_a_lowered_document_prints_identically() {
    let source = r#"
        query Q($id: ID!, $first: Int = 10) @live {
          node(id: $id) {
            ... on User @include(if: true) {
              friends(first: $first, order: {by: NAME, desc: false}) {
                ...Friend
              }
            }
            alias: __typename
          }
        }

        mutation M {
          like(ids: [1, 2, 3], note: "hi", ratio: 1.5, clear: null)
        }

        subscription S {
          events
        }

        fragment Friend on User {
          id
          name
        }
    "#;

    let expected = ast::print(&ast::parse(source).unwrap());
    assert_eq!(reprint(source), expected);
}

#[test]
fn anonymous_queries_print_as_shorthand() {
    assert_eq!(reprint("query { a }"), reprint("{ a }"));
}

#[test]
fn rejects_unexpected_definition_kinds() {
    let doc = AstNode::new(kind::DOCUMENT)
        .with("definitions", vec![AstNode::new(kind::FIELD)]);

    let err = raise_document(&doc).unwrap_err();
    assert_eq!(err, NodeShapeError::UnexpectedKind {
        expected: vec![kind::OPERATION_DEFINITION, kind::FRAGMENT_DEFINITION],
        found: kind::FIELD.to_string(),
    });
}

#[test]
fn rejects_missing_names() {
    let doc = AstNode::new(kind::DOCUMENT).with(
        "definitions",
        vec![AstNode::new(kind::FRAGMENT_DEFINITION)],
    );

    let err = raise_document(&doc).unwrap_err();
    assert_eq!(err, NodeShapeError::MissingField {
        kind: kind::FRAGMENT_DEFINITION.to_string(),
        field: "name".to_string(),
    });
}

#[test]
fn ints_wider_than_32_bits_print_verbatim() {
    let printed = reprint("{ a(n: 3000000000, m: -4000000000, k: 7) }");
    assert!(printed.contains("a(n: 3000000000, m: -4000000000, k: 7)"), "{printed}");
}

#[test]
fn rejects_int_nodes_that_are_not_integers() {
    let doc = AstNode::new(kind::DOCUMENT).with("definitions", vec![
        AstNode::new(kind::OPERATION_DEFINITION)
            .with("operation", "query")
            .with("selectionSet", AstNode::new(kind::SELECTION_SET).with(
                "selections",
                vec![
                    AstNode::new(kind::FIELD)
                        .with("name", AstNode::new(kind::NAME).with("value", "a"))
                        .with("arguments", vec![
                            AstNode::new(kind::ARGUMENT)
                                .with("name", AstNode::new(kind::NAME).with("value", "n"))
                                .with("value", AstNode::new(kind::INT_VALUE).with("value", "1e3")),
                        ]),
                ],
            )),
    ]);

    assert_eq!(
        raise_document(&doc).unwrap_err(),
        NodeShapeError::InvalidInt { value: "1e3".to_string() },
    );
}
