use crate::ast;
use serde::Serialize;
use std::path::Path;
use std::path::PathBuf;

/// Very similar to graphql_parser's [Pos](graphql_parser::Pos), except it
/// includes a PathBuf to the file the node was parsed from.
///
/// Lines and columns are 1-based, as reported by the parser.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct SourceLocation {
    pub column: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    pub line: usize,
}
impl SourceLocation {
    pub(crate) fn from_pos(file: Option<&Path>, pos: ast::Pos) -> Self {
        Self {
            column: pos.column,
            file: file.map(Path::to_path_buf),
            line: pos.line,
        }
    }

    /// The location of the first character of a file.
    pub(crate) fn start_of(file: Option<&Path>) -> Self {
        Self {
            column: 1,
            file: file.map(Path::to_path_buf),
            line: 1,
        }
    }

    pub(crate) fn to_pos(&self) -> ast::Pos {
        ast::Pos {
            line: self.line,
            column: self.column,
        }
    }
}
