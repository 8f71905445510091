use crate::node::AstNode;
use crate::node::SourceLocation;
use crate::transform::strip_locations;
use crate::transform::tests::test_utils::doc;

fn located_nodes(node: &AstNode) -> usize {
    node.preorder().filter(|n| n.loc.is_some()).count()
}

#[test]
fn removes_every_location_at_every_depth() {
    let mut document = doc(
        "query Q($id: ID!) @live {\n  \
           node(id: $id) {\n    \
             ... on User @include(if: true) { friends { ...F } }\n  \
           }\n\
         }\n\
         fragment F on User { id }",
    );
    let before = located_nodes(&document);
    assert!(before > 5);

    assert_eq!(strip_locations(&mut document), before);
    assert_eq!(located_nodes(&document), 0);
}

#[test]
fn strips_a_single_definition() {
    let mut document = doc("query Q { a { b } }\nfragment F on T { id }");
    let definitions = document.list_mut("definitions").unwrap();
    let crate::node::AstValue::Node(first) = &mut definitions[0] else {
        panic!("expected a node");
    };
    strip_locations(first);

    let defs: Vec<&AstNode> = document.nodes("definitions").collect();
    assert_eq!(located_nodes(defs[0]), 0);
    assert!(located_nodes(defs[1]) > 0);
}

#[test]
fn handles_unknown_node_kinds_and_leaf_values() {
    let loc = Some(SourceLocation {
        column: 1,
        file: None,
        line: 1,
    });
    let mut node = AstNode::new("SomeFutureKind")
        .with_loc(loc.clone())
        .with("flag", true)
        .with("label", "text")
        .with("missing", None::<AstNode>)
        .with("nested", vec![
            AstNode::new("AnotherKind").with_loc(loc.clone()).with(
                "inner",
                AstNode::new("Deeper").with_loc(loc),
            ),
        ]);

    assert_eq!(strip_locations(&mut node), 3);
    assert_eq!(located_nodes(&node), 0);
}
