use std::path::PathBuf;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ImportError {
    #[error("Import cycle detected: {}", format_cycle(.cycle))]
    CyclicImport { cycle: Vec<PathBuf> },

    #[error("Imported file {path:?} is not valid UTF-8: {message}")]
    ImportDecode { path: PathBuf, message: String },

    #[error("Failed to read imported file {path:?}: {message}")]
    ImportRead { path: PathBuf, message: String },

    #[error(
        "Malformed import directive on line {line}{}: `{text}` (expected \
        `#import \"<path>\"`)",
        format_file(.file),
    )]
    MalformedImportDirective {
        file: Option<PathBuf>,
        line: usize,
        text: String,
    },

    #[error("Failed to parse GraphQL{}: {message}", format_file(.file))]
    Parse {
        file: Option<PathBuf>,
        message: String,
    },

    #[error("Unable to resolve import `{import_spec}` from {base_dir:?}: {message}")]
    UnresolvedImport {
        import_spec: String,
        base_dir: PathBuf,
        message: String,
    },
}

fn format_cycle(cycle: &[PathBuf]) -> String {
    cycle
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(" → ")
}

fn format_file(file: &Option<PathBuf>) -> String {
    match file {
        Some(path) => format!(" in {}", path.display()),
        None => String::new(),
    }
}
