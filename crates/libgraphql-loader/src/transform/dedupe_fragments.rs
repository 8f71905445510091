use crate::node::AstNode;
use crate::node::AstValue;
use crate::node::kind;
use std::collections::HashSet;

/// Drops every fragment definition whose name was already defined earlier in
/// the document. Operations are never touched and relative order is kept.
///
/// Same-named fragments are not compared; the first one wins even when the
/// bodies differ. Returns the number of definitions removed.
pub fn dedupe_fragments(document: &mut AstNode) -> usize {
    let Some(definitions) = document.list_mut("definitions") else {
        return 0;
    };

    let mut seen_names = HashSet::new();
    let before = definitions.len();
    definitions.retain(|def| {
        let Some(name) = fragment_name(def) else {
            return true;
        };
        if seen_names.insert(name.to_string()) {
            true
        } else {
            log::debug!("Dropping duplicate definition of fragment `{name}`.");
            false
        }
    });
    before - definitions.len()
}

fn fragment_name(def: &AstValue) -> Option<&str> {
    def.as_node()
        .filter(|node| node.is_kind(kind::FRAGMENT_DEFINITION))
        .and_then(AstNode::name)
}
