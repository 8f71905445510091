use crate::ast;
use crate::node::AstNode;
use crate::node::NodeShapeError;
use crate::node::raise_document;
use crate::output::OutputMode;

#[derive(Clone, Debug, PartialEq)]
pub enum LoaderOutput {
    Document(AstNode),
    Text(String),
}
impl LoaderOutput {
    /// Produces the payload for `mode`. Only the printed form needs the
    /// document converted back to the printer's AST, so only it can fail.
    pub fn render(document: AstNode, mode: OutputMode) -> Result<Self, NodeShapeError> {
        match mode {
            OutputMode::Document => Ok(Self::Document(document)),
            OutputMode::String => {
                let printed = ast::print(&raise_document(&document)?);
                Ok(Self::Text(printed))
            },
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            Self::Document(_) => None,
        }
    }

    pub fn as_document(&self) -> Option<&AstNode> {
        match self {
            Self::Document(document) => Some(document),
            Self::Text(_) => None,
        }
    }

    /// The payload as a JSON value: a string for printed output, the JSON
    /// AST object otherwise.
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        match self {
            Self::Text(text) => Ok(serde_json::Value::String(text.to_string())),
            Self::Document(document) => serde_json::to_value(document),
        }
    }
}
