use crate::node::AstNode;
use serde::Serialize;

/// The value stored under a named slot of an [`AstNode`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AstValue {
    Bool(bool),
    List(Vec<AstValue>),
    Node(Box<AstNode>),
    Null,
    String(String),
}
impl AstValue {
    pub fn as_node(&self) -> Option<&AstNode> {
        match self {
            Self::Node(node) => Some(node.as_ref()),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Pushes every node directly held by this value (descending through
    /// lists, but not into the nodes themselves).
    pub(crate) fn collect_nodes<'a>(&'a self, out: &mut Vec<&'a AstNode>) {
        match self {
            Self::Node(node) => out.push(node.as_ref()),
            Self::List(items) => {
                for item in items {
                    item.collect_nodes(out);
                }
            },
            Self::Bool(_) | Self::Null | Self::String(_) => (),
        }
    }

    pub(crate) fn collect_nodes_mut<'a>(
        &'a mut self,
        out: &mut Vec<&'a mut AstNode>,
    ) {
        match self {
            Self::Node(node) => out.push(node.as_mut()),
            Self::List(items) => {
                for item in items {
                    item.collect_nodes_mut(out);
                }
            },
            Self::Bool(_) | Self::Null | Self::String(_) => (),
        }
    }
}

impl From<AstNode> for AstValue {
    fn from(node: AstNode) -> Self {
        Self::Node(Box::new(node))
    }
}

impl From<Option<AstNode>> for AstValue {
    fn from(node: Option<AstNode>) -> Self {
        node.map_or(Self::Null, Self::from)
    }
}

impl From<Vec<AstNode>> for AstValue {
    fn from(nodes: Vec<AstNode>) -> Self {
        Self::List(nodes.into_iter().map(Self::from).collect())
    }
}

impl From<bool> for AstValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<String> for AstValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for AstValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}
