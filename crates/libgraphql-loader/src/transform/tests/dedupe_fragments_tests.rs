use crate::node::AstNode;
use crate::node::kind;
use crate::transform::dedupe_fragments;
use crate::transform::tests::test_utils::doc;
use crate::transform::tests::test_utils::fragment_names;
use crate::transform::tests::test_utils::operation_count;
use proptest::prelude::*;

#[test]
fn keeps_the_first_of_each_name() {
    let mut document = doc(
        "query Q { ...Dup }\n\
         fragment Dup on T { first }\n\
         fragment Other on T { id }\n\
         fragment Dup on T { second }",
    );

    assert_eq!(dedupe_fragments(&mut document), 1);
    assert_eq!(fragment_names(&document), vec!["Dup", "Other"]);

    let kept = document
        .nodes("definitions")
        .find(|def| def.name() == Some("Dup"))
        .unwrap();
    let field = kept.preorder().find(|n| n.is_kind(kind::FIELD)).unwrap();
    assert_eq!(field.name(), Some("first"));
}

#[test]
fn never_removes_operations() {
    let mut document = doc("query Q { a }\nquery Q { b }\n{ c }");
    assert_eq!(dedupe_fragments(&mut document), 0);
    assert_eq!(operation_count(&document), 3);
}

#[test]
fn ignores_documents_without_definitions() {
    let mut node = AstNode::new(kind::FIELD);
    assert_eq!(dedupe_fragments(&mut node), 0);
}

proptest! {
    #[test]
    fn each_name_survives_once_with_its_earliest_body(
        name_indexes in prop::collection::vec(0usize..4, 1..12),
    ) {
        let source: String = name_indexes
            .iter()
            .enumerate()
            .map(|(position, name_idx)| {
                format!("fragment F{name_idx} on T {{ at{position} }}\n")
            })
            .collect();
        let mut document = doc(&source);
        dedupe_fragments(&mut document);

        let mut expected: Vec<(String, String)> = vec![];
        for (position, name_idx) in name_indexes.iter().enumerate() {
            let name = format!("F{name_idx}");
            if !expected.iter().any(|(existing, _)| *existing == name) {
                expected.push((name, format!("at{position}")));
            }
        }

        let actual: Vec<(String, String)> = document
            .nodes("definitions")
            .map(|def| {
                let field = def
                    .preorder()
                    .find(|n| n.is_kind(kind::FIELD))
                    .and_then(AstNode::name)
                    .unwrap_or_default();
                (def.name().unwrap_or_default().to_string(), field.to_string())
            })
            .collect();
        prop_assert_eq!(actual, expected);
    }
}
