use crate::node::AstNode;
use crate::node::kind;
use std::collections::HashSet;

/// Removes fragment definitions that nothing spreads, repeating until a pass
/// removes nothing.
///
/// Each pass records every `...Name` spread found in the selection set of
/// every remaining definition (operations and fragments alike), then drops
/// the fragments whose names were not recorded. Dropping a fragment can
/// orphan the fragments only it spread, hence the repeat. Operations are
/// always kept. Returns the number of definitions removed.
pub fn prune_unused_fragments(document: &mut AstNode) -> usize {
    let mut removed = 0;
    loop {
        let used_names = spread_names(document);
        let Some(definitions) = document.list_mut("definitions") else {
            return removed;
        };

        let before = definitions.len();
        definitions.retain(|def| match def.as_node() {
            Some(node) if node.is_kind(kind::FRAGMENT_DEFINITION) => {
                node.name().is_some_and(|name| used_names.contains(name))
            },
            _ => true,
        });

        let removed_this_pass = before - definitions.len();
        if removed_this_pass == 0 {
            return removed;
        }
        log::debug!("Pruned {removed_this_pass} unused fragment(s).");
        removed += removed_this_pass;
    }
}

fn spread_names(document: &AstNode) -> HashSet<String> {
    document
        .nodes("definitions")
        .filter_map(|def| def.node("selectionSet"))
        .flat_map(AstNode::preorder)
        .filter(|node| node.is_kind(kind::FRAGMENT_SPREAD))
        .filter_map(AstNode::name)
        .map(str::to_string)
        .collect()
}
