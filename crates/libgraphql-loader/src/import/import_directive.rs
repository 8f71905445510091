use crate::import::ImportError;
use std::path::Path;

/// One `#import "<spec>"` line of a source file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportDirective {
    pub import_spec: String,
    /// 1-based line number within the importing file.
    pub line: usize,
}

/// Finds every import directive in `source`.
///
/// A line is a directive only when it starts with `#` immediately followed
/// by the word `import`; anything else starting with `#` is an ordinary
/// comment. The rest of a directive line must be exactly one single- or
/// double-quoted, non-empty path.
///
/// The whole file is checked before anything is returned, so a malformed
/// directive anywhere in it fails the file before any import is fetched.
pub fn scan_import_directives(
    source: &str,
    file: Option<&Path>,
) -> Result<Vec<ImportDirective>, ImportError> {
    let mut directives = vec![];
    for (idx, line) in source.lines().enumerate() {
        let Some(rest) = line.strip_prefix('#') else {
            continue;
        };
        let (word, remainder) = match rest.find(char::is_whitespace) {
            Some(split_at) => rest.split_at(split_at),
            None => (rest, ""),
        };
        if word != "import" {
            continue;
        }

        match quoted_path(remainder.trim()) {
            Some(import_spec) => directives.push(ImportDirective {
                import_spec: import_spec.to_string(),
                line: idx + 1,
            }),
            None => return Err(ImportError::MalformedImportDirective {
                file: file.map(Path::to_path_buf),
                line: idx + 1,
                text: line.to_string(),
            }),
        }
    }
    Ok(directives)
}

fn quoted_path(text: &str) -> Option<&str> {
    let quote = text.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    let inner = text[1..].strip_suffix(quote)?;
    if inner.is_empty() || inner.contains(quote) {
        return None;
    }
    Some(inner)
}
