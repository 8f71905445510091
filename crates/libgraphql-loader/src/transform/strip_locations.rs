use crate::node::AstNode;

/// Removes the location of `node` and of every node below it. Works on any
/// node (a whole document, a single definition, ...) and never looks at
/// node kinds. Returns the number of locations removed.
pub fn strip_locations(node: &mut AstNode) -> usize {
    let mut stripped = 0;
    let mut pending = vec![node];
    while let Some(node) = pending.pop() {
        if node.loc.take().is_some() {
            stripped += 1;
        }
        pending.extend(node.children_mut());
    }
    stripped
}
