use std::future::Future;
use std::io;
use std::path::Path;
use std::path::PathBuf;

/// The host-provided capabilities the loader needs: reading files,
/// resolving `#import` specs, and recording which files an output depends
/// on (so the host can tell when the output goes stale).
///
/// The loader drives these futures from a single task; implementations do
/// not need to be `Send`.
pub trait ImportHost {
    /// Reads the full contents of the file at `path`.
    fn read(&self, path: &Path) -> impl Future<Output = io::Result<Vec<u8>>>;

    /// Resolves `import_spec` (the quoted part of an `#import` line)
    /// relative to `base_dir`, producing an absolute path. Fails if no file
    /// can be found.
    fn resolve(
        &self,
        base_dir: &Path,
        import_spec: &str,
    ) -> impl Future<Output = io::Result<PathBuf>>;

    /// The absolute path of the entry file at `path`, in the same form
    /// [`ImportHost::resolve`] produces, so the entry file can be matched
    /// against the files it imports. The entry file need not exist.
    fn entry_path(&self, path: &Path) -> impl Future<Output = PathBuf>;

    fn record_dependency(&self, path: &Path);
}
