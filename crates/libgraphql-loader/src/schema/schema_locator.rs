use crate::host::normalize_path;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

/// Searches `start_dir` and then each of its ancestors for a regular file
/// named `schema_file`, returning the absolute path of the first match.
/// `.` and `..` in `start_dir` are folded first, so only real ancestors are
/// searched.
pub fn locate_schema_file(
    start_dir: &Path,
    schema_file: &str,
) -> Result<PathBuf, SchemaNotFoundError> {
    let absolute_start = normalize_path(
        &std::path::absolute(start_dir).unwrap_or_else(|_| start_dir.to_path_buf()),
    );

    for dir in absolute_start.ancestors() {
        let candidate = dir.join(schema_file);
        log::trace!("Looking for schema at {candidate:?}.");
        if candidate.is_file() {
            log::debug!("Found schema file at {candidate:?}.");
            return Ok(candidate);
        }
    }

    Err(SchemaNotFoundError {
        schema_file: schema_file.to_string(),
        start_dir: start_dir.to_path_buf(),
    })
}

#[derive(Clone, Debug, Error, PartialEq)]
#[error(
    "Unable to find schema file `{schema_file}` in {start_dir:?} or any of \
    its parent directories"
)]
pub struct SchemaNotFoundError {
    pub schema_file: String,
    pub start_dir: PathBuf,
}
