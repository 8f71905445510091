use crate::node::AstValue;
use crate::node::SourceLocation;
use crate::node::kind;
use indexmap::IndexMap;
use serde::Serialize;

/// A single node of the tagged tree.
///
/// Serializes to the familiar JSON GraphQL AST shape, e.g.
/// `{"kind": "FragmentSpread", "name": {"kind": "Name", "value": "F"}}`.
/// `loc` is omitted from the output once it has been stripped.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AstNode {
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<SourceLocation>,
    #[serde(flatten)]
    pub fields: IndexMap<String, AstValue>,
}
impl AstNode {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            loc: None,
            fields: IndexMap::new(),
        }
    }

    /// Shorthand for a `Name` node holding `value`.
    pub fn name_node(value: impl Into<String>) -> Self {
        Self::new(kind::NAME).with("value", value.into())
    }

    pub fn with(mut self, key: &str, value: impl Into<AstValue>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    pub fn with_loc(mut self, loc: Option<SourceLocation>) -> Self {
        self.loc = loc;
        self
    }

    pub fn get(&self, key: &str) -> Option<&AstValue> {
        self.fields.get(key)
    }

    pub fn is_kind(&self, kind: &str) -> bool {
        self.kind == kind
    }

    /// The child node stored under `key`, if that slot holds a node.
    pub fn node(&self, key: &str) -> Option<&AstNode> {
        self.get(key).and_then(AstValue::as_node)
    }

    /// The nodes held by the list stored under `key`.
    pub fn nodes(&self, key: &str) -> impl Iterator<Item = &AstNode> {
        let items = match self.get(key) {
            Some(AstValue::List(items)) => items.as_slice(),
            _ => &[],
        };
        items.iter().filter_map(AstValue::as_node)
    }

    pub fn list_mut(&mut self, key: &str) -> Option<&mut Vec<AstValue>> {
        match self.fields.get_mut(key) {
            Some(AstValue::List(items)) => Some(items),
            _ => None,
        }
    }

    pub fn into_list(mut self, key: &str) -> Vec<AstValue> {
        match self.fields.swap_remove(key) {
            Some(AstValue::List(items)) => items,
            _ => vec![],
        }
    }

    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(AstValue::as_str)
    }

    /// The string value of this node's `name` child (itself a `Name` node).
    pub fn name(&self) -> Option<&str> {
        self.node("name").and_then(|name| name.str_field("value"))
    }

    /// Every node held directly by this node, in slot order.
    pub fn children(&self) -> Vec<&AstNode> {
        let mut children = vec![];
        for value in self.fields.values() {
            value.collect_nodes(&mut children);
        }
        children
    }

    pub fn children_mut(&mut self) -> Vec<&mut AstNode> {
        let mut children = vec![];
        for value in self.fields.values_mut() {
            value.collect_nodes_mut(&mut children);
        }
        children
    }

    /// Depth-first, pre-order iteration over this node and all of its
    /// descendants.
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder { pending: vec![self] }
    }
}

pub struct Preorder<'a> {
    pending: Vec<&'a AstNode>,
}
impl<'a> Iterator for Preorder<'a> {
    type Item = &'a AstNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.pending.pop()?;
        self.pending.extend(node.children().into_iter().rev());
        Some(node)
    }
}
