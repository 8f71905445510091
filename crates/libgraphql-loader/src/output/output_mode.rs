use serde::Deserialize;
use std::str::FromStr;
use thiserror::Error;

/// Which form of the final document [`GraphQLLoader`](crate::GraphQLLoader)
/// produces.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// The canonical printed GraphQL text.
    #[default]
    String,
    /// The tagged node tree, serializable as a JSON AST.
    Document,
}
impl std::fmt::Display for OutputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::String => "string",
            Self::Document => "document",
        })
    }
}
impl FromStr for OutputMode {
    type Err = UnknownOutputModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(Self::String),
            "document" => Ok(Self::Document),
            _ => Err(UnknownOutputModeError(s.to_string())),
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
#[error("Unknown output mode `{0}` (expected `string` or `document`)")]
pub struct UnknownOutputModeError(pub String);
