//! Capability ports through which the loader touches the outside world.

mod fs_import_host;
mod import_host;
mod in_memory_import_host;
mod normalize_path;

pub use fs_import_host::FsImportHost;
pub use import_host::ImportHost;
pub use in_memory_import_host::InMemoryImportHost;
pub(crate) use normalize_path::normalize_path;
