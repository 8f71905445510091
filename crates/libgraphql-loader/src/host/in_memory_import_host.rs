use crate::host::ImportHost;
use crate::host::normalize_path;
use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::path::Path;
use std::path::PathBuf;

/// An [`ImportHost`] over a fixed set of in-memory files.
///
/// Resolution is purely lexical (`.` and `..` are folded, nothing touches
/// the disk). Every read and every recorded dependency is logged so tests
/// can assert on the I/O the loader performed.
#[derive(Debug, Default)]
pub struct InMemoryImportHost {
    dependencies: RefCell<Vec<PathBuf>>,
    files: HashMap<PathBuf, Vec<u8>>,
    reads: RefCell<Vec<PathBuf>>,
    resolutions: RefCell<Vec<PathBuf>>,
}
impl InMemoryImportHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(
        mut self,
        path: impl AsRef<Path>,
        content: impl Into<Vec<u8>>,
    ) -> Self {
        self.files.insert(normalize_path(path.as_ref()), content.into());
        self
    }

    /// Dependencies in the order they were recorded (duplicates kept).
    pub fn dependencies(&self) -> Vec<PathBuf> {
        self.dependencies.borrow().clone()
    }

    /// Paths passed to [`ImportHost::read`], in call order.
    pub fn reads(&self) -> Vec<PathBuf> {
        self.reads.borrow().clone()
    }

    /// Successfully resolved paths, in call order.
    pub fn resolutions(&self) -> Vec<PathBuf> {
        self.resolutions.borrow().clone()
    }
}

impl ImportHost for InMemoryImportHost {
    async fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.reads.borrow_mut().push(path.to_path_buf());
        self.files.get(&normalize_path(path)).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no in-memory file at {}", path.display()),
            )
        })
    }

    async fn resolve(
        &self,
        base_dir: &Path,
        import_spec: &str,
    ) -> io::Result<PathBuf> {
        let candidate = normalize_path(&base_dir.join(import_spec));
        if !self.files.contains_key(&candidate) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no in-memory file at {}", candidate.display()),
            ));
        }
        self.resolutions.borrow_mut().push(candidate.clone());
        Ok(candidate)
    }

    async fn entry_path(&self, path: &Path) -> PathBuf {
        normalize_path(path)
    }

    fn record_dependency(&self, path: &Path) {
        self.dependencies.borrow_mut().push(path.to_path_buf());
    }
}
