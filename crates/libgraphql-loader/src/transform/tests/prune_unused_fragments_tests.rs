use crate::node::AstNode;
use crate::transform::prune_unused_fragments;
use crate::transform::tests::test_utils::doc;
use crate::transform::tests::test_utils::fragment_names;
use crate::transform::tests::test_utils::operation_count;
use proptest::prelude::*;
use std::collections::HashSet;

#[test]
fn removes_chains_of_unused_fragments() {
    let mut document = doc(
        "query Q { ...A }\n\
         fragment A on T { id }\n\
         fragment B on T { ...C }\n\
         fragment C on T { id }",
    );

    assert_eq!(prune_unused_fragments(&mut document), 2);
    assert_eq!(fragment_names(&document), vec!["A"]);
    assert_eq!(operation_count(&document), 1);
}

#[test]
fn keeps_fragments_reached_through_fields_and_inline_fragments() {
    let mut document = doc(
        "query Q { me { ... on User { friends { ...Friend } } } }\n\
         fragment Friend on User { ...Name }\n\
         fragment Name on User { name }\n\
         fragment Stale on User { id }",
    );

    assert_eq!(prune_unused_fragments(&mut document), 1);
    assert_eq!(fragment_names(&document), vec!["Friend", "Name"]);
}

#[test]
fn documents_without_operations_lose_all_fragments() {
    let mut document = doc(
        "fragment A on T { ...B }\nfragment B on T { ...C }\nfragment C on T { id }",
    );
    // A is unspread; then B; then C.
    assert_eq!(prune_unused_fragments(&mut document), 3);
    assert!(fragment_names(&document).is_empty());
}

/// Builds a document with `fragment_spreads.len()` fragments `F0..Fn` where
/// fragment `i` spreads the fragments listed at index `i`, plus one
/// operation spreading `op_spreads`.
fn graph_source(op_spreads: &[usize], fragment_spreads: &[Vec<usize>]) -> String {
    let count = fragment_spreads.len();
    let spreads = |targets: &[usize]| -> String {
        targets.iter().map(|t| format!(" ...F{}", t % count)).collect()
    };

    let mut source = format!("query Q {{ id{} }}\n", spreads(op_spreads));
    for (idx, targets) in fragment_spreads.iter().enumerate() {
        // Self-spreads would be invalid GraphQL; leave them out.
        let targets: Vec<usize> = targets
            .iter()
            .copied()
            .filter(|t| t % count != idx)
            .collect();
        source.push_str(&format!("fragment F{idx} on T {{ id{} }}\n", spreads(&targets[..])));
    }
    source
}

fn reachable(op_spreads: &[usize], fragment_spreads: &[Vec<usize>]) -> HashSet<String> {
    let count = fragment_spreads.len();
    let mut seen = HashSet::new();
    let mut pending: Vec<usize> = op_spreads.iter().map(|t| t % count).collect();
    while let Some(idx) = pending.pop() {
        if seen.insert(idx) {
            pending.extend(
                fragment_spreads[idx].iter().map(|t| t % count).filter(|t| *t != idx),
            );
        }
    }
    seen.into_iter().map(|idx| format!("F{idx}")).collect()
}

fn spread_graph() -> impl Strategy<Value = (Vec<usize>, Vec<Vec<usize>>)> {
    (
        prop::collection::vec(0usize..8, 0..3),
        prop::collection::vec(prop::collection::vec(0usize..8, 0..3), 1..8),
    )
}

proptest! {
    #[test]
    fn pruning_is_idempotent((op_spreads, fragment_spreads) in spread_graph()) {
        let mut once = doc(&graph_source(&op_spreads, &fragment_spreads));
        prune_unused_fragments(&mut once);
        let mut twice: AstNode = once.clone();

        prop_assert_eq!(prune_unused_fragments(&mut twice), 0);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn pruning_never_drops_reachable_fragments(
        (op_spreads, fragment_spreads) in spread_graph(),
    ) {
        let mut document = doc(&graph_source(&op_spreads, &fragment_spreads));
        prune_unused_fragments(&mut document);

        let kept: HashSet<String> = fragment_names(&document).into_iter().collect();
        let reachable = reachable(&op_spreads, &fragment_spreads);
        prop_assert!(
            reachable.is_subset(&kept),
            "reachable {reachable:?} not all kept in {kept:?}",
        );
    }
}
