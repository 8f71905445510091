use crate::host::ImportHost;
use crate::host::normalize_path;
use indexmap::IndexSet;
use std::cell::RefCell;
use std::io;
use std::path::Path;
use std::path::PathBuf;

/// An [`ImportHost`] backed by the local filesystem.
///
/// Import specs are joined onto the importing file's directory and
/// canonicalized. Recorded dependencies are kept in first-recorded order
/// with duplicates dropped.
#[derive(Debug, Default)]
pub struct FsImportHost {
    dependencies: RefCell<IndexSet<PathBuf>>,
}
impl FsImportHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dependencies(&self) -> Vec<PathBuf> {
        self.dependencies.borrow().iter().cloned().collect()
    }
}

impl ImportHost for FsImportHost {
    async fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        if !tokio::fs::metadata(path).await?.is_file() {
            return Err(not_a_file(path));
        }
        log::trace!("Reading {path:?}.");
        tokio::fs::read(path).await
    }

    async fn resolve(
        &self,
        base_dir: &Path,
        import_spec: &str,
    ) -> io::Result<PathBuf> {
        let resolved = tokio::fs::canonicalize(base_dir.join(import_spec)).await?;
        if !tokio::fs::metadata(&resolved).await?.is_file() {
            return Err(not_a_file(&resolved));
        }
        Ok(resolved)
    }

    async fn entry_path(&self, path: &Path) -> PathBuf {
        match tokio::fs::canonicalize(path).await {
            Ok(canonical) => canonical,
            Err(err) => {
                log::trace!("Could not canonicalize entry {path:?} ({err}).");
                normalize_path(&std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf()))
            },
        }
    }

    fn record_dependency(&self, path: &Path) {
        self.dependencies.borrow_mut().insert(path.to_path_buf());
    }
}

fn not_a_file(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidInput,
        format!("{} is not a file", path.display()),
    )
}
